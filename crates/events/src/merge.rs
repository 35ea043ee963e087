//! Per-day merge of events, weekday names and moon phases for one year.

use almanac_calendar::{CalendarDate, year_dates};
use almanac_locale::{EncodedText, WeekdayNames};
use almanac_moon::{MoonPhase, phase_events, year_moon_phases};
use serde::Serialize;
use tracing::{info, warn};

use crate::model::DayEvent;

/// An event as placed on a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedEvent {
    /// Description in the output encoding.
    pub text: EncodedText,
    /// Image shown with the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Everything shown on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAnnotation {
    /// The day, serialized as `YYYY-MM-DD`.
    #[serde(serialize_with = "serialize_key")]
    pub date: CalendarDate,
    /// Localized weekday name.
    pub weekday: EncodedText,
    /// Events on this day, in input order.
    pub events: Vec<AnnotatedEvent>,
    /// The phase whose instant falls on this day, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moon: Option<MoonPhase>,
    /// The phase nearest to this day.
    pub nearest_moon: Option<MoonPhase>,
}

fn serialize_key<S: serde::Serializer>(date: &CalendarDate, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&date.key())
}

/// Where an event lands in the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Placement {
    Date { month: u8, day: u8 },
    Weekday(u8),
    Nowhere,
}

impl Placement {
    fn of(event: &DayEvent, weekday_names: &WeekdayNames) -> Self {
        match &event.weekday {
            Some(name) => match weekday_names.find(name) {
                Some(iso) => Placement::Weekday(iso),
                None => {
                    warn!(weekday = %name, "unknown weekday name, event not placed");
                    Placement::Nowhere
                }
            },
            None if event.is_date_addressed() => Placement::Date {
                month: event.month,
                day: event.day,
            },
            None => Placement::Nowhere,
        }
    }

    fn matches(self, date: CalendarDate) -> bool {
        match self {
            Placement::Date { month, day } => date.month() == month && date.day() == day,
            Placement::Weekday(iso) => date.iso_weekday() == iso,
            Placement::Nowhere => false,
        }
    }
}

/// The merged annotation set of one year, one [`DayAnnotation`] per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearAnnotations {
    year: i32,
    days: Vec<DayAnnotation>,
}

impl YearAnnotations {
    /// Places `events` on the days of `year` and adds weekday names and
    /// moon phases.
    ///
    /// Weekday-addressed events land on every matching weekday. Events whose
    /// month and day do not exist in `year` (for example `4/31`, or the
    /// zeroed date of an unreadable calendar entry) land nowhere.
    pub fn build(year: i32, events: &[DayEvent], weekday_names: &WeekdayNames) -> Self {
        let placements: Vec<Placement> = events
            .iter()
            .map(|e| Placement::of(e, weekday_names))
            .collect();
        let markers = phase_events(year);
        let nearest = year_moon_phases(year);

        let days: Vec<DayAnnotation> = year_dates(year)
            .into_iter()
            .map(|date| {
                let key = date.key();
                let placed = events
                    .iter()
                    .zip(&placements)
                    .filter(|(_, p)| p.matches(date))
                    .map(|(e, _)| AnnotatedEvent {
                        text: e.text.clone(),
                        image: e.image.clone(),
                    })
                    .collect();
                DayAnnotation {
                    date,
                    weekday: weekday_names.get(date.iso_weekday()).clone(),
                    events: placed,
                    moon: markers.get(&key).copied(),
                    nearest_moon: nearest.get(&key).copied(),
                }
            })
            .collect();

        let placed: usize = days.iter().map(|d| d.events.len()).sum();
        info!(year, days = days.len(), placed, "merged year annotations");
        Self { year, days }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the days in calendar order.
    pub fn days(&self) -> &[DayAnnotation] {
        &self.days
    }

    /// Returns the annotation for `month`/`day`, if that day exists.
    pub fn day(&self, month: u8, day: u8) -> Option<&DayAnnotation> {
        let date = CalendarDate::new(self.year, month, day).ok()?;
        self.days.get(usize::from(date.doy()) - 1)
    }
}
