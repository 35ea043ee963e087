//! Error types for almanac-events.

use std::path::PathBuf;

/// Error type for all fallible operations in the almanac-events crate.
///
/// Only conditions that must stop the run are errors here. Unreadable
/// configuration files, unparseable dates and malformed calendar lines are
/// absorbed by the producers and logged instead.
#[derive(Debug, thiserror::Error)]
pub enum EventsError {
    /// Returned when an iCalendar file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Returned when a file exists but cannot be opened.
    #[error("cannot open {}: {reason}", path.display())]
    Io {
        /// Path that failed to open.
        path: PathBuf,
        /// Description of the underlying I/O failure.
        reason: String,
    },

    /// Returned when the event configuration is not well-formed XML or does
    /// not match the expected structure.
    #[error("malformed event configuration: {reason}")]
    Xml {
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when the event configuration has a root element other than
    /// `Gocal`.
    #[error("unexpected root element <{found}>, expected <Gocal>")]
    UnexpectedRoot {
        /// The root element that was found.
        found: String,
    },

    /// Returned when the iCalendar parser thread dies before finishing.
    #[error("calendar parser failed: {reason}")]
    Parser {
        /// Description of the failure.
        reason: String,
    },
}

impl From<quick_xml::de::DeError> for EventsError {
    fn from(e: quick_xml::de::DeError) -> Self {
        EventsError::Xml {
            reason: e.to_string(),
        }
    }
}

impl From<quick_xml::Error> for EventsError {
    fn from(e: quick_xml::Error) -> Self {
        EventsError::Xml {
            reason: e.to_string(),
        }
    }
}
