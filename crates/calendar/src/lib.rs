//! # almanac-calendar
//!
//! Gregorian dates (on `chrono::NaiveDate`) and the Meeus day-count and
//! Julian Day formulas shared by the almanac crates.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["(year, month, day)"] -->|"calendar_to_jd()"| B["Julian Day"]
//!     B -->|"jd_to_calendar()"| A
//!     A -->|"CalendarDate::new()"| C["CalendarDate"]
//!     C -->|".next()"| C
//!     C -->|".key()"| D["YYYY-MM-DD"]
//!     E["year"] -->|"year_dates()"| F["Vec of CalendarDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_calendar::{CalendarDate, day_of_year, is_leap_year, jd_to_calendar, year_dates};
//!
//! assert!(is_leap_year(2024));
//! assert_eq!(day_of_year(2024, 3, 1), 61);
//!
//! let date = CalendarDate::new(2024, 2, 29).unwrap();
//! assert_eq!(date.key(), "2024-02-29");
//!
//! let (y, m, d) = jd_to_calendar(2451545.0); // 2000-01-01 12:00
//! assert_eq!((y, m, d.floor() as u8), (2000, 1, 1));
//!
//! assert_eq!(year_dates(2023).len(), 365);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `doy` | Leap years, month lengths, lenient day-of-year |
//! | `date` | Validated Gregorian date and its `YYYY-MM-DD` key |
//! | `julian` | Julian Day <-> calendar conversion |
//! | `sequence` | Date sequence generation |
//! | `error` | Error types |

mod date;
mod doy;
mod error;
mod julian;
mod sequence;

pub use date::CalendarDate;
pub use doy::{day_of_year, days_in_month, days_in_year, is_leap_year};
pub use error::CalendarError;
pub use julian::{calendar_to_jd, jd_to_calendar};
pub use sequence::{date_sequence, year_dates};
