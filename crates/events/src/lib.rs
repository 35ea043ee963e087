//! # almanac-events
//!
//! Day events from iCalendar files and from the XML event configuration,
//! and their merge with weekday names and moon phases into one annotation
//! per day of a year.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `model` | [`DayEvent`], the date- or weekday-addressed event record |
//! | `configured` | [`expand_configured_events`]: `*/D`, `M/D` and weekday entries |
//! | `ics` | [`import_events`]: `VEVENT`s of one year from an `.ics` file |
//! | `merge` | [`YearAnnotations`]: events, weekday names and moon phases per day |
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::path::Path;
//! use almanac_events::{YearAnnotations, expand_configured_events, import_events};
//! use almanac_locale::weekday_names;
//!
//! let mut events = expand_configured_events(Path::new("events.xml"))?;
//! events.extend(import_events(Path::new("holidays.ics"), 2024)?);
//!
//! let names = weekday_names("en_US", 0)?;
//! let year = YearAnnotations::build(2024, &events, &names);
//! for day in year.days() {
//!     println!("{} {} {}", day.date, day.weekday, day.events.len());
//! }
//! ```

mod configured;
mod error;
mod ics;
mod merge;
mod model;

pub use configured::{expand_configured_events, parse_configured_events};
pub use error::EventsError;
pub use ics::import_events;
pub use merge::{AnnotatedEvent, DayAnnotation, YearAnnotations};
pub use model::DayEvent;
