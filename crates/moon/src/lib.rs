//! # almanac-moon
//!
//! Dates of the four principal moon phases, computed with the lunation
//! series of Meeus (*Astronomical Algorithms*, ch. 49).
//!
//! Three views are offered:
//!
//! | Function | Keys | Values |
//! |----------|------|--------|
//! | [`phase_events`] | `YYYY-MM-DD` of each phase instant | the phase on that date |
//! | [`year_moon_phases`] | every `YYYY-MM-DD` of the year | the nearest phase |
//! | [`month_moon_phases`] | day of month (1..=31) | the phase on that day |
//!
//! ## Quick Start
//!
//! ```ignore
//! use almanac_moon::{MoonPhase, month_moon_phases, phase_events, year_moon_phases};
//!
//! let events = phase_events(2024);
//! assert_eq!(events.get("2024-01-25"), Some(&MoonPhase::Full));
//!
//! assert_eq!(year_moon_phases(2024).len(), 366);
//!
//! let january = month_moon_phases(1, 1, 2024);
//! assert_eq!(january.get(&11), Some(&MoonPhase::New));
//! ```

mod map;
mod meeus;
mod phase;

pub use map::{MoonPhaseMap, month_moon_phases, phase_events, year_moon_phases};
pub use meeus::{first_quarter, full_moon, last_quarter, new_moon};
pub use phase::MoonPhase;
