//! The canonical day-event record.

use almanac_calendar::CalendarDate;
use almanac_locale::{EncodedText, WeekdayNames};
use serde::Serialize;

/// One event to be shown on a calendar day.
///
/// An event is either *date-addressed* (`month` 1..=12, `day` 1..=31,
/// `weekday` unset) or *weekday-addressed* (`month` and `day` 0, `weekday`
/// set). The producers in this crate always set exactly one mode; the type
/// itself does not enforce it, so lenient parsing can leave zeroed dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEvent {
    /// Calendar month, or 0 for a weekday-addressed event.
    pub month: u8,
    /// Day of month, or 0 for a weekday-addressed event.
    pub day: u8,
    /// Description in the output encoding.
    pub text: EncodedText,
    /// Weekday name for weekday-addressed events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    /// Path or URL of an image shown with the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl DayEvent {
    /// Creates a date-addressed event.
    pub fn on_date(month: u8, day: u8, text: EncodedText, image: Option<String>) -> Self {
        Self {
            month,
            day,
            text,
            weekday: None,
            image,
        }
    }

    /// Creates a weekday-addressed event.
    pub fn on_weekday(weekday: impl Into<String>, text: EncodedText, image: Option<String>) -> Self {
        Self {
            month: 0,
            day: 0,
            text,
            weekday: Some(weekday.into()),
            image,
        }
    }

    /// Returns `true` if the event carries a usable month and day.
    pub fn is_date_addressed(&self) -> bool {
        self.weekday.is_none() && (1..=12).contains(&self.month) && (1..=31).contains(&self.day)
    }

    /// Returns `true` if the event is tied to a weekday.
    pub fn is_weekday_addressed(&self) -> bool {
        self.weekday.is_some()
    }

    /// Returns `true` if the event falls on `date`.
    ///
    /// Weekday names are resolved through `weekday_names` (localized first,
    /// then English).
    pub fn occurs_on(&self, date: CalendarDate, weekday_names: &WeekdayNames) -> bool {
        match &self.weekday {
            Some(name) => weekday_names.find(name) == Some(date.iso_weekday()),
            None => self.month == date.month() && self.day == date.day(),
        }
    }
}
