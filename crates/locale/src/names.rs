//! Localized month and weekday name tables.

use chrono::{Locale, NaiveDate, Weekday};
use tracing::debug;

use crate::encoding::{EncodedText, encode_text};
use crate::error::LocaleError;

/// Year of the reference dates used to pick up names.
const REFERENCE_YEAR: i32 = 2013;

/// Day of January 2013 that fell on a Monday. Weekday index `k` is formatted
/// from this date plus `k - 1` days.
const REFERENCE_MONDAY: u32 = 7;

/// Parses a locale code such as `en_US` or `de-DE`.
///
/// # Errors
///
/// Returns [`LocaleError::UnknownLocale`] if the formatter has no data for
/// the code.
pub fn parse_locale(code: &str) -> Result<Locale, LocaleError> {
    let normalized = code.trim().replace('-', "_");
    Locale::try_from(normalized.as_str()).map_err(|_| LocaleError::UnknownLocale {
        code: code.to_string(),
    })
}

/// Formats `date` at midnight UTC with a localized strftime pattern.
fn format_date(date: NaiveDate, pattern: &str, locale: Locale) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().format_localized(pattern, locale).to_string())
        .unwrap_or_default()
}

/// Localized month names. Index 0 is empty, 1 is January ... 12 is December.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthNames([EncodedText; 13]);

impl MonthNames {
    /// Returns the name of `month` (1..=12); index 0 or out-of-range months
    /// give an empty text.
    pub fn get(&self, month: u8) -> &EncodedText {
        self.0.get(usize::from(month)).unwrap_or(&self.0[0])
    }

    /// Returns all 13 slots, including the unused slot 0.
    pub fn as_slice(&self) -> &[EncodedText] {
        &self.0
    }
}

/// Localized weekday names using ISO numbering: index 0 is empty,
/// 1 is Monday ... 7 is Sunday.
///
/// The untruncated names are kept alongside so that lookups by full name
/// still work under a cutoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekdayNames {
    names: [EncodedText; 8],
    full: [EncodedText; 8],
}

impl WeekdayNames {
    /// Returns the name for ISO weekday `iso` (1..=7); index 0 or
    /// out-of-range values give an empty text.
    pub fn get(&self, iso: u8) -> &EncodedText {
        self.names.get(usize::from(iso)).unwrap_or(&self.names[0])
    }

    /// Returns all 8 slots, including the unused slot 0.
    pub fn as_slice(&self) -> &[EncodedText] {
        &self.names
    }

    /// Resolves a weekday name to its ISO number.
    ///
    /// The name is compared case-insensitively with the full localized
    /// names, then the cut names, then English names and abbreviations.
    pub fn find(&self, name: &str) -> Option<u8> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }
        let matches = |table: &[EncodedText; 8]| {
            (1..=7u8).find(|&iso| table[usize::from(iso)].to_utf8().to_lowercase() == wanted)
        };
        matches(&self.full).or_else(|| matches(&self.names)).or_else(|| {
            wanted
                .parse::<Weekday>()
                .ok()
                .map(|wd| wd.number_from_monday() as u8)
        })
    }
}

/// Returns the month names of `locale` in the output encoding.
///
/// # Errors
///
/// Returns [`LocaleError::UnknownLocale`] for an unsupported locale code.
pub fn month_names(locale: &str) -> Result<MonthNames, LocaleError> {
    let loc = parse_locale(locale)?;
    let mut names: [EncodedText; 13] = Default::default();
    for month in 1..=12u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(REFERENCE_YEAR, month, 1) {
            names[month as usize] = encode_text(&format_date(date, "%B", loc));
        }
    }
    debug!(locale, "built month names");
    Ok(MonthNames(names))
}

/// Returns the weekday names of `locale` in the output encoding.
///
/// With `cutoff > 0` every name is cut to its first `cutoff` bytes (a name
/// shorter than that is kept whole).
///
/// # Errors
///
/// Returns [`LocaleError::UnknownLocale`] for an unsupported locale code.
pub fn weekday_names(locale: &str, cutoff: usize) -> Result<WeekdayNames, LocaleError> {
    let loc = parse_locale(locale)?;
    let mut full: [EncodedText; 8] = Default::default();
    for offset in 0..7u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, REFERENCE_MONDAY + offset) {
            full[offset as usize + 1] = encode_text(&format_date(date, "%A", loc));
        }
    }
    let names = if cutoff > 0 {
        full.clone().map(|name| name.truncated(cutoff))
    } else {
        full.clone()
    };
    debug!(locale, cutoff, "built weekday names");
    Ok(WeekdayNames { names, full })
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    #[test]
    fn reference_date_is_a_monday() {
        let date = NaiveDate::from_ymd_opt(REFERENCE_YEAR, 1, REFERENCE_MONDAY).unwrap();
        assert_eq!(date.weekday(), Weekday::Mon);
    }

    #[test]
    fn parse_locale_accepts_dash() {
        assert!(parse_locale("en-US").is_ok());
        assert!(parse_locale("de_DE").is_ok());
    }

    #[test]
    fn parse_locale_rejects_unknown() {
        assert_eq!(
            parse_locale("xx_YY").unwrap_err(),
            LocaleError::UnknownLocale {
                code: "xx_YY".to_string()
            }
        );
    }

    #[test]
    fn slot_zero_is_empty() {
        let months = month_names("en_US").unwrap();
        let days = weekday_names("en_US", 0).unwrap();
        assert!(months.get(0).is_empty());
        assert!(days.get(0).is_empty());
        assert!(months.get(13).is_empty());
        assert!(days.get(8).is_empty());
    }

    #[test]
    fn find_english_fallback() {
        let days = weekday_names("de_DE", 0).unwrap();
        assert_eq!(days.find("Montag"), Some(1));
        assert_eq!(days.find("sonntag"), Some(7));
        assert_eq!(days.find("Friday"), Some(5));
        assert_eq!(days.find("Someday"), None);
        assert_eq!(days.find(""), None);
    }

    #[test]
    fn find_works_under_cutoff() {
        let days = weekday_names("de_DE", 2).unwrap();
        assert_eq!(days.get(1).as_bytes(), b"Mo");
        assert_eq!(days.find("Montag"), Some(1));
        assert_eq!(days.find("Mi"), Some(3));
        assert_eq!(days.find("Sunday"), Some(7));
    }
}
