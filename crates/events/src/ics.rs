//! Import of iCalendar event files.
//!
//! The file is parsed on a producer thread that hands each `VEVENT` over a
//! bounded channel; the calling thread collects the events for the target
//! year and returns once the producer has been joined.

use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use almanac_locale::encode_text;
use ical::IcalParser;
use tracing::{debug, info, warn};

use crate::error::EventsError;
use crate::model::DayEvent;

/// Capacity of the parser-to-collector channel.
const CHANNEL_CAPACITY: usize = 64;

/// The two properties taken from each `VEVENT`.
#[derive(Debug, Default)]
struct RawEvent {
    summary: String,
    start: String,
}

/// Start date fields. An unreadable year is 0; an unreadable month or day
/// zeroes both, so the event never carries half a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StartDate {
    pub(crate) year: i32,
    pub(crate) month: u8,
    pub(crate) day: u8,
}

/// Reads the `YYYYMMDD` prefix of a `DTSTART` value.
///
/// Dashes are ignored, so `2024-03-15` reads like `20240315`.
pub(crate) fn parse_start(value: &str) -> StartDate {
    let digits: String = value.chars().filter(|&c| c != '-').take(8).collect();
    let field = |range: std::ops::Range<usize>| digits.get(range).map(str::trim);
    let month_day = field(4..6)
        .and_then(|m| m.parse::<u8>().ok())
        .zip(field(6..8).and_then(|d| d.parse::<u8>().ok()));
    let (month, day) = month_day.unwrap_or((0, 0));
    StartDate {
        year: field(0..4).and_then(|s| s.parse().ok()).unwrap_or(0),
        month,
        day,
    }
}

/// Undoes iCalendar TEXT escaping (`\n`, `\,`, `\;`, `\\`).
pub(crate) fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => out.push('\n'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Parses the calendar stream and sends every event down `tx`.
///
/// A parse error ends the stream; events sent before it are kept.
fn produce(parser: IcalParser<BufReader<File>>, tx: mpsc::SyncSender<RawEvent>) {
    for calendar in parser {
        let calendar = match calendar {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "stopping calendar import at parse error");
                return;
            }
        };
        for event in calendar.events {
            let mut raw = RawEvent::default();
            for property in event.properties {
                let value = property.value.unwrap_or_default();
                match property.name.as_str() {
                    "SUMMARY" => raw.summary = value,
                    "DTSTART" => raw.start = value,
                    _ => {}
                }
            }
            if tx.send(raw).is_err() {
                return;
            }
        }
    }
}

/// Imports the events of `target_year` from the iCalendar file at `path`.
///
/// Every `VEVENT` whose start date lies in `target_year` becomes a
/// date-addressed [`DayEvent`] with its `SUMMARY` as text, in file order.
/// A start whose year cannot be read never matches `target_year`; one with
/// an unreadable month or day is kept with month and day 0, which no
/// calendar day matches.
///
/// # Errors
///
/// Returns [`EventsError::FileNotFound`] if `path` does not exist,
/// [`EventsError::Io`] if it cannot be opened, and [`EventsError::Parser`]
/// if the parser thread panics.
pub fn import_events(path: &Path, target_year: i32) -> Result<Vec<DayEvent>, EventsError> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => EventsError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => EventsError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        },
    })?;

    let parser = IcalParser::new(BufReader::new(file));
    let (tx, rx) = mpsc::sync_channel(CHANNEL_CAPACITY);
    let producer = thread::spawn(move || produce(parser, tx));

    let mut events = Vec::new();
    let mut skipped = 0usize;
    for raw in rx {
        let start = parse_start(&raw.start);
        if start.year != target_year {
            skipped += 1;
            continue;
        }
        let summary = unescape_text(&raw.summary);
        debug!(month = start.month, day = start.day, summary = %summary, "imported event");
        events.push(DayEvent::on_date(
            start.month,
            start.day,
            encode_text(&summary),
            None,
        ));
    }

    producer.join().map_err(|_| EventsError::Parser {
        reason: "calendar parser thread panicked".to_string(),
    })?;

    info!(
        path = %path.display(),
        year = target_year,
        count = events.len(),
        skipped,
        "imported calendar events"
    );
    Ok(events)
}
