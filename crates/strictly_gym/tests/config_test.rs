//! Tests for loading environment configuration.

use std::io::Write;
use strictly_gym::{EnvConfig, MAX_WINDOW_SIZE, Player, RenderMode, RewardScheme};

#[test]
fn test_defaults() {
    let config = EnvConfig::default();
    assert_eq!(*config.render_mode(), None);
    assert_eq!(*config.window_size(), 512);
    assert_eq!(*config.render_fps(), 4);
    assert_eq!(*config.starting_player(), Player::X);
    assert_eq!(*config.rewards(), RewardScheme::default());
}

#[test]
fn test_empty_toml_is_default() {
    assert_eq!(EnvConfig::from_toml("").unwrap(), EnvConfig::default());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
render_mode = "rgb_array"
window_size = 256
starting_player = "O"

[rewards]
win_move = 1.0
"#
    )
    .unwrap();

    let config = EnvConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.render_mode(), Some(RenderMode::RgbArray));
    assert_eq!(*config.window_size(), 256);
    assert_eq!(*config.starting_player(), Player::O);
    assert_eq!(config.rewards().win_move, 1.0);
    assert_eq!(config.rewards().won_replay, 1.0);
}

#[test]
fn test_missing_file_is_config_error() {
    let err = EnvConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_invalid_values_rejected() {
    let err = EnvConfig::from_toml("window_size = 2").unwrap_err();
    assert!(err.message.contains("window_size"));

    let err = EnvConfig::from_toml("window_size = 100000").unwrap_err();
    assert!(err.message.contains("window_size"));
    assert!(EnvConfig::from_toml(&format!("window_size = {MAX_WINDOW_SIZE}")).is_ok());

    let err = EnvConfig::from_toml("render_mode = \"human\"\nrender_fps = 0").unwrap_err();
    assert!(err.message.contains("render_fps"));

    let err = EnvConfig::from_toml("render_mode = \"vr\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_toml_round_trip_of_overrides() {
    let config = EnvConfig::default()
        .with_render_mode(RenderMode::Human)
        .with_render_fps(10);
    let text = config.to_toml().unwrap();
    assert!(text.contains("render_mode = \"human\""));
    assert_eq!(EnvConfig::from_toml(&text).unwrap(), config);
}
