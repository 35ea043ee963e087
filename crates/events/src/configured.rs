//! Expansion of the XML event configuration into day events.
//!
//! The document has a `Gocal` root holding `Gocaldate` entries. Each entry
//! carries `Date`, `Text` and an optional `Image`, written either as child
//! elements or as attributes:
//!
//! ```xml
//! <Gocal>
//!   <Gocaldate Date="*/15" Text="Pay rent"/>
//!   <Gocaldate>
//!     <Date>3/7</Date>
//!     <Text>Anniversary</Text>
//!     <Image>rings.png</Image>
//!   </Gocaldate>
//!   <Gocaldate Date="Monday" Text="Gym"/>
//! </Gocal>
//! ```

use std::path::Path;

use almanac_locale::encode_text;
use quick_xml::Reader;
use quick_xml::events::Event;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::EventsError;
use crate::model::DayEvent;

/// Required name of the document root.
const ROOT_ELEMENT: &str = "Gocal";

/// Month component that expands an entry to every month.
const EVERY_MONTH: &str = "*";

// ---------------------------------------------------------------------------
// Document structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct EventListXml {
    #[serde(rename = "Gocaldate", default)]
    entries: Vec<EntryXml>,
}

#[derive(Debug, Deserialize)]
struct EntryXml {
    #[serde(rename = "Date", alias = "@Date", default)]
    date: String,
    #[serde(rename = "Text", alias = "@Text", default)]
    text: String,
    #[serde(rename = "Image", alias = "@Image", default)]
    image: Option<String>,
}

/// Checks that the first element of `xml` is the `Gocal` root.
fn check_root(xml: &str) -> Result<(), EventsError> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event()? {
            Event::Start(e) | Event::Empty(e) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                if name == ROOT_ELEMENT {
                    return Ok(());
                }
                return Err(EventsError::UnexpectedRoot { found: name });
            }
            Event::Eof => {
                return Err(EventsError::Xml {
                    reason: "document has no root element".to_string(),
                });
            }
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Expansion
// ---------------------------------------------------------------------------

/// Parses a month or day component, giving 0 when it is not a number.
fn lenient_component(raw: &str) -> u8 {
    raw.trim().parse().unwrap_or(0)
}

/// Expands one entry into the events it stands for, appending to `out`.
fn expand_entry(entry: EntryXml, out: &mut Vec<DayEvent>) {
    let date = entry.date.trim();
    if date.is_empty() {
        warn!(text = %entry.text, "skipping configured event without Date");
        return;
    }

    let text = encode_text(&entry.text);
    let image = entry.image.filter(|s| !s.trim().is_empty());

    let Some((month, day)) = date.split_once('/') else {
        debug!(weekday = date, "weekday event");
        out.push(DayEvent::on_weekday(date, text, image));
        return;
    };

    // Anything after a second '/' is ignored.
    let day = lenient_component(day.split('/').next().unwrap_or_default());
    if month.trim() == EVERY_MONTH {
        debug!(day, "monthly event");
        out.extend((1..=12).map(|m| DayEvent::on_date(m, day, text.clone(), image.clone())));
    } else {
        let month = lenient_component(month);
        debug!(month, day, "dated event");
        out.push(DayEvent::on_date(month, day, text, image));
    }
}

/// Parses an event configuration document and expands its entries.
///
/// Entries keep document order; a `*/D` entry becomes twelve consecutive
/// events for January through December. Entries with a missing or blank
/// `Date` are skipped.
///
/// # Errors
///
/// Returns [`EventsError::UnexpectedRoot`] if the root is not `Gocal`, and
/// [`EventsError::Xml`] if the document is malformed.
pub fn parse_configured_events(xml: &str) -> Result<Vec<DayEvent>, EventsError> {
    check_root(xml)?;
    let list: EventListXml = quick_xml::de::from_str(xml)?;

    let mut events = Vec::with_capacity(list.entries.len());
    for entry in list.entries {
        expand_entry(entry, &mut events);
    }
    Ok(events)
}

/// Reads and expands the event configuration at `path`.
///
/// A file that cannot be opened or read yields no events; the failure is
/// logged at `warn` and the run carries on without configured events.
///
/// # Errors
///
/// Returns the errors of [`parse_configured_events`] when the file was read
/// but its content is not a valid event configuration.
pub fn expand_configured_events(path: &Path) -> Result<Vec<DayEvent>, EventsError> {
    let xml = match std::fs::read_to_string(path) {
        Ok(xml) => xml,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "cannot read event configuration, using none");
            return Ok(Vec::new());
        }
    };

    let events = parse_configured_events(&xml)?;
    info!(path = %path.display(), count = events.len(), "expanded configured events");
    Ok(events)
}
