//! Config file loading tests.

use std::fs;
use std::time::Duration;

use pulse_engine::{App, ConfigError, PulseConfig};

#[test]
fn full_config_round_trips_into_app_options() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
        [app]
        ascii_only = true
        high_contrast = true
        reduced_motion = true

        [board]
        animation_ms = 123
        delay_base_ms = 200
        delay_multiplier = 1.5
        "#,
    )
    .unwrap();

    let config = PulseConfig::load_from(&path).unwrap();
    assert_eq!(config.animation_duration(), Duration::from_millis(123));
    assert_eq!(config.delay_base(), Duration::from_millis(200));
    assert!((config.delay_multiplier() - 1.5).abs() < f64::EPSILON);

    let app = App::new(&config);
    let options = app.ui_options();
    assert!(options.ascii_only);
    assert!(options.high_contrast);
    assert!(options.reduced_motion);
    assert_eq!(app.delay_base(), Duration::from_millis(200));
}

#[test]
fn empty_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "").unwrap();

    let config = PulseConfig::load_from(&path).unwrap();
    assert_eq!(config.animation_duration(), Duration::from_millis(1000));
    assert!(!config.ui_options().high_contrast);
}

#[test]
fn malformed_toml_reports_parse_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[board\nanimation_ms = 5").unwrap();

    let err = PulseConfig::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), &path);
}

#[test]
fn unreadable_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PulseConfig::load_from(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}
