use neurodiversity_toolkit::config::{
    clamp_ui_scale, load_or_default_from, load_or_fallback_from, Config, ConfigError, UI_SCALE_RANGE,
};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = load_or_default_from(&path).expect("default config");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("language = \"auto\""));
}

#[test]
fn saved_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "en".into(),
        font_path: Some("/fonts/NotoSansJP-Regular.ttf".into()),
        ui_scale: 1.25,
        log_level: "debug".into(),
    };
    cfg.save_to(&path).unwrap();
    assert_eq!(load_or_default_from(&path).unwrap(), cfg);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"ja\"\n").unwrap();
    let cfg = load_or_default_from(&path).unwrap();
    assert_eq!(cfg.language, "ja");
    assert_eq!(cfg.font_path, None);
    assert_eq!(cfg.log_level, "info");
}

#[test]
fn broken_file_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").unwrap();
    assert!(matches!(load_or_default_from(&path), Err(ConfigError::Parse(_))));
}

#[test]
fn broken_file_falls_back_without_being_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = [").unwrap();

    let loaded = load_or_fallback_from(&path);
    assert!(matches!(loaded.error, Some(ConfigError::Parse(_))));
    assert!(!loaded.can_save());
    assert_eq!(loaded.config, Config::default());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "language = [");
}

#[test]
fn readable_file_can_be_saved_again() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "language = \"en\"\n").unwrap();

    let loaded = load_or_fallback_from(&path);
    assert!(loaded.error.is_none());
    assert!(loaded.can_save());
    assert_eq!(loaded.config.language, "en");
}

#[test]
fn out_of_range_ui_scale_is_clamped_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "ui_scale = 0.0\n").unwrap();
    assert_eq!(load_or_default_from(&path).unwrap().ui_scale, *UI_SCALE_RANGE.start());

    std::fs::write(&path, "ui_scale = -3.0\n").unwrap();
    assert_eq!(load_or_default_from(&path).unwrap().ui_scale, *UI_SCALE_RANGE.start());

    std::fs::write(&path, "ui_scale = 9.5\n").unwrap();
    assert_eq!(load_or_default_from(&path).unwrap().ui_scale, *UI_SCALE_RANGE.end());
}

#[test]
fn ui_scale_clamp_keeps_valid_values() {
    assert_eq!(clamp_ui_scale(1.25), 1.25);
    assert_eq!(clamp_ui_scale(f32::NAN), Config::default().ui_scale);
    assert_eq!(clamp_ui_scale(f32::INFINITY), Config::default().ui_scale);
}
