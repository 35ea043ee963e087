//! # almanac-locale
//!
//! Localized month and weekday names, converted to the Windows-1252 output
//! encoding the renderer expects.
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_locale::{encode_text, month_names, weekday_names};
//!
//! let months = month_names("de_DE").unwrap();
//! assert_eq!(months.get(3).as_bytes(), b"M\xe4rz");
//!
//! let days = weekday_names("en_US", 3).unwrap();
//! assert_eq!(days.get(1).as_bytes(), b"Mon"); // 1 = Monday
//!
//! assert_eq!(encode_text("€").as_bytes(), b"\x80");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `encoding` | [`EncodedText`] and the UTF-8 to Windows-1252 conversion |
//! | `names` | Month and weekday tables built from chrono's locale data |
//! | `error` | Error types |

mod encoding;
mod error;
mod names;

pub use chrono::Locale;
pub use encoding::{EncodedText, encode_text};
pub use error::LocaleError;
pub use names::{MonthNames, WeekdayNames, month_names, parse_locale, weekday_names};
