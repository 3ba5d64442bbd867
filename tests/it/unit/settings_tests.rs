//! Settings persistence and validation.

use lanewise::settings::TimelineSettings;
use lanewise::TimelineError;
use std::fs;

#[test]
fn test_save_and_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let settings = TimelineSettings {
        lane_height: 60.0,
        min_item_width: 12.0,
        ..TimelineSettings::default()
    };
    settings.save(&path).unwrap();

    assert_eq!(TimelineSettings::load(&path).unwrap(), settings);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let settings = TimelineSettings::from_json(r#"{ "lane_height": 100.0 }"#).unwrap();
    assert_eq!(settings.lane_height, 100.0);
    assert_eq!(settings.padding, TimelineSettings::default().padding);
}

#[test]
fn test_load_or_default_on_missing_or_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert_eq!(TimelineSettings::load_or_default(&missing), TimelineSettings::default());

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(TimelineSettings::load(&bad).is_err());
    assert_eq!(TimelineSettings::load_or_default(&bad), TimelineSettings::default());
}

#[test]
fn test_validation_rejects_overlapping_bands() {
    let zero_padding = TimelineSettings {
        item_vertical_padding: 0.0,
        ..TimelineSettings::default()
    };
    assert!(matches!(zero_padding.validate(), Err(TimelineError::InvalidSettings(_))));

    let too_much_padding = TimelineSettings {
        item_vertical_padding: 40.0,
        ..TimelineSettings::default()
    };
    assert!(too_much_padding.validate().is_err());

    let inverted_zoom = TimelineSettings {
        min_zoom: 3.0,
        max_zoom: 2.0,
        ..TimelineSettings::default()
    };
    assert!(TimelineSettings::from_json(&serde_json::to_string(&inverted_zoom).unwrap()).is_err());
}
