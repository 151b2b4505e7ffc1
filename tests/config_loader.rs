mod common;

use common::{missing_config, temp_config};
use connect_harness::config::{Config, ConfigError, MIN_VIEWPORT_HEIGHT, MIN_VIEWPORT_WIDTH};

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.counter.initial_count, 0);
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.ui.viewport_width, 40);
    assert_eq!(config.ui.viewport_height, 6);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("connect-harness/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let (_dir, path) = missing_config();
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_partial_file_fills_defaults() {
    let (_dir, path) = temp_config(
        r#"
[counter]
initial_count = -7
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.counter.initial_count, -7);
    assert_eq!(config.ui, Default::default());
}

#[test]
fn test_full_file_is_loaded() {
    let (_dir, path) = temp_config(
        r#"
[counter]
initial_count = 12

[ui]
tick_rate_ms = 100
viewport_width = 60
viewport_height = 10
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.counter.initial_count, 12);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.ui.viewport_width, 60);
    assert_eq!(config.ui.viewport_height, 10);
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let (_dir, path) = temp_config("[counter\ninitial_count = 1");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "{err}");
    assert!(err.to_string().contains("config.toml"));
}

#[test]
fn test_wrong_type_is_parse_error() {
    let (_dir, path) = temp_config("[counter]\ninitial_count = \"three\"\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_zero_tick_rate_fails_validation() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let err = Config::load_from(&path).unwrap_err();
    match err {
        ConfigError::ValidationError { message } => assert!(message.contains("tick_rate_ms")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_small_viewport_fails_validation() {
    let mut config = Config::default();
    config.ui.viewport_width = MIN_VIEWPORT_WIDTH - 1;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationError { .. })
    ));

    config.ui.viewport_width = MIN_VIEWPORT_WIDTH;
    config.ui.viewport_height = MIN_VIEWPORT_HEIGHT;
    assert!(config.validate().is_ok());
}

#[test]
fn test_directory_path_is_read_error() {
    let (dir, _path) = missing_config();
    let err = Config::load_from(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ReadError { .. }), "{err}");
}
