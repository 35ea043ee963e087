//! Integration test: expand configured events from files on disk.

use std::fs;

use almanac_events::{EventsError, expand_configured_events};

const SAMPLE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Gocal>
  <Gocaldate Date="*/15" Text="Pay rent" Image="house.png"/>
  <Gocaldate>
    <Date>3/7</Date>
    <Text>Anniversary</Text>
  </Gocaldate>
  <Gocaldate Date="Monday" Text="Gym"/>
</Gocal>
"#;

fn write_fixture(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
    let path = dir.path().join("events.xml");
    fs::write(&path, body).expect("write fixture");
    path
}

#[test]
fn sample_expands_all_three_forms() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, SAMPLE);

    let events = expand_configured_events(&path).expect("valid configuration");
    assert_eq!(events.len(), 14);

    let monthly = &events[..12];
    for (i, event) in monthly.iter().enumerate() {
        assert_eq!(event.month as usize, i + 1);
        assert_eq!(event.day, 15);
        assert_eq!(event.text, monthly[0].text);
        assert_eq!(event.image.as_deref(), Some("house.png"));
        assert!(event.is_date_addressed());
    }

    let anniversary = &events[12];
    assert_eq!((anniversary.month, anniversary.day), (3, 7));
    assert!(anniversary.image.is_none());

    let gym = &events[13];
    assert_eq!((gym.month, gym.day), (0, 0));
    assert_eq!(gym.weekday.as_deref(), Some("Monday"));
    assert!(gym.is_weekday_addressed());
}

#[test]
fn single_date_yields_one_entry() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, r#"<Gocal><Gocaldate Date="3/7" Text="x"/></Gocal>"#);
    let events = expand_configured_events(&path).expect("valid configuration");
    assert_eq!(events.len(), 1);
    assert_eq!((events[0].month, events[0].day), (3, 7));
}

#[test]
fn missing_file_is_empty_not_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let events = expand_configured_events(&dir.path().join("absent.xml")).expect("lenient");
    assert!(events.is_empty());
}

#[test]
fn directory_path_is_empty_not_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let events = expand_configured_events(dir.path()).expect("lenient");
    assert!(events.is_empty());
}

#[test]
fn malformed_xml_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, "<Gocal><Gocaldate Date=\"1/1\" Text=\"x\"></Gocal>");
    let err = expand_configured_events(&path).unwrap_err();
    assert!(matches!(err, EventsError::Xml { .. }), "got {err:?}");
}

#[test]
fn wrong_root_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, r#"<Calendar><Gocaldate Date="1/1" Text="x"/></Calendar>"#);
    let err = expand_configured_events(&path).unwrap_err();
    assert!(matches!(err, EventsError::UnexpectedRoot { .. }), "got {err:?}");
}

#[test]
fn repeated_expansion_is_identical() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = write_fixture(&dir, SAMPLE);
    let first = expand_configured_events(&path).expect("first");
    let second = expand_configured_events(&path).expect("second");
    assert_eq!(first, second);
}
