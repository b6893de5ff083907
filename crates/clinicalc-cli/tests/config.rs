use clinicalc_cli::config::{load_config, migrate, save_config, CliConfig, LogFormat};
use serde_json::json;

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config.config_version, 1);
    assert_eq!(config.log_format, LogFormat::Text);
    assert_eq!(config.log_filter(), "info");
    assert!(config.data_dir.is_none());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = CliConfig {
        config_version: 0,
        data_dir: Some(dir.path().join("data")),
        log_filter: Some("clinicalc_engine=debug".to_string()),
        log_format: LogFormat::Json,
    };

    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded.config_version, 1, "save stamps the current version");
    assert_eq!(loaded.data_dir, config.data_dir);
    assert_eq!(loaded.log_filter(), "clinicalc_engine=debug");
    assert_eq!(loaded.log_format, LogFormat::Json);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn v0_log_json_flag_is_migrated() {
    let migrated = migrate(json!({"log_json": true}), 0).unwrap();
    assert_eq!(migrated["log_format"], "json");
    assert_eq!(migrated["config_version"], 1);
    assert!(migrated.get("log_json").is_none());

    let migrated = migrate(json!({}), 0).unwrap();
    assert_eq!(migrated["log_format"], "text");
}

#[test]
fn v0_file_on_disk_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"log_json": true, "log_filter": "warn"}"#).unwrap();

    let config = load_config(&path).unwrap();
    assert_eq!(config.log_format, LogFormat::Json);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn newer_version_is_rejected() {
    let err = migrate(json!({"config_version": 99}), 99).unwrap_err();
    assert!(err.to_string().contains("newer than this build"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(migrate(json!([1, 2]), 0).is_err());
}

#[test]
fn explicit_data_dir_wins() {
    let config = CliConfig {
        data_dir: Some("/tmp/clinicalc-data".into()),
        ..CliConfig::default()
    };
    assert_eq!(
        config.resolved_data_dir().unwrap(),
        std::path::PathBuf::from("/tmp/clinicalc-data")
    );
}
