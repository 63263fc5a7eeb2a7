use floorkit_core::{Floor, Role, StatusKind};
use floorkit_settings::{Config, SettingsError};
use std::path::PathBuf;
use tempfile::TempDir;

fn customized() -> Config {
    let mut config = Config::default();
    config.editor.grid_px = 20.0;
    config.editor.history_limit = 5;
    config.store.seed_path = Some(PathBuf::from("/srv/floorkit/machines.json"));
    config.session.role = Role::SystemSupport;
    config.session.default_floor = Floor::H2F;
    config.session.default_status = StatusKind::Power;
    config.export.output_dir = PathBuf::from("out");
    config
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    let config = customized();

    config.save_to_file(&path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("[editor]"));
    assert!(text.contains("role = \"System Support\""));
    assert!(text.contains("default_floor = \"H2/F\""));

    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = customized();

    config.save_to_file(&path).unwrap();
    assert_eq!(Config::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[session]\nrole = \"Slot Tech\"\n").unwrap();

    let config = Config::load_from_file(&path).unwrap();
    assert_eq!(config.session.role, Role::SlotTech);
    assert_eq!(config.editor, Config::default().editor);
    assert_eq!(config.store.seed_path, None);
}

#[test]
fn test_invalid_file_values_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"editor": {"history_limit": 0}}"#).unwrap();

    let err = Config::load_from_file(&path).unwrap_err();
    assert!(matches!(err, SettingsError::InvalidSetting { .. }));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_or_default(&dir.path().join("missing.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_malformed_toml_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "editor = [").unwrap();
    assert!(matches!(
        Config::load_from_file(&path),
        Err(SettingsError::TomlError(_))
    ));
}
