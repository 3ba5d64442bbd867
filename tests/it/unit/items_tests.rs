//! Item ingestion and validation.

use lanewise::items::{load_items, parse_items};
use lanewise::settings::TimelineSettings;
use lanewise::{ItemId, Timeline, TimelineError};
use std::fs;
use std::path::Path;

#[test]
fn test_parse_items_accepts_single_day_items() {
    let items = parse_items(r#"[{ "id": 3, "name": "Launch", "start": "2021-03-20", "end": "2021-03-20" }]"#).unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].duration_days(), 0);
}

#[test]
fn test_inverted_range_is_rejected() {
    let err = parse_items(r#"[{ "id": 1, "name": "Bad", "start": "2021-02-01", "end": "2021-01-01" }]"#).unwrap_err();
    assert!(matches!(err, TimelineError::InvertedRange { id: ItemId(1), .. }));
    assert_eq!(err.to_string(), "Item 1 starts on 2021-02-01 but ends on 2021-01-01");
}

#[test]
fn test_duplicate_id_is_rejected() {
    let json = r#"[
        { "id": 1, "name": "A", "start": "2021-01-01", "end": "2021-01-02" },
        { "id": 1, "name": "B", "start": "2021-01-03", "end": "2021-01-04" }
    ]"#;
    assert!(matches!(parse_items(json), Err(TimelineError::DuplicateId(ItemId(1)))));
}

#[test]
fn test_malformed_dates_are_json_errors() {
    let json = r#"[{ "id": 1, "name": "A", "start": "01/02/2021", "end": "2021-01-02" }]"#;
    assert!(matches!(parse_items(json), Err(TimelineError::Json(_))));
}

#[test]
fn test_load_items_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.json");
    fs::write(
        &path,
        r#"[{ "id": 9, "name": "Review", "start": "2021-01-20", "end": "2021-01-27" }]"#,
    )
    .unwrap();

    let items = load_items(&path).unwrap();
    assert_eq!(items[0].id, ItemId(9));
    assert!(matches!(
        load_items(&dir.path().join("missing.json")),
        Err(TimelineError::Io(_))
    ));
}

#[test]
fn test_timeline_load_lays_out_demo_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/items.json");
    let timeline = Timeline::load(&path, TimelineSettings::default(), 1024.0).unwrap();

    assert_eq!(timeline.lane_summary(), "8 items in 2 lanes");
    assert_eq!(timeline.profiler().stats().count(), 1);
}
