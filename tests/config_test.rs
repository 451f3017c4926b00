// ==========================================
// ConfigManager 集成测试
// ==========================================
// 测试目标: 验证配置文件加载、默认值回退与目录覆写
// ==========================================


use airfare_deadline::app::AppState;
use airfare_deadline::config::{
    get_default_config_path, ConfigError, ConfigManager, DeadlineConfigReader, CONFIG_PATH_ENV,
};
use airfare_deadline::{Airline, AirlineChoice, DeadlineRequest};
use test_helpers::{date, write_temp_config};

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("absent.json");

    let config = ConfigManager::load(&path).expect("missing file should not be an error");
    assert_eq!(config.get_urgent_window_days().unwrap(), 7);
    assert_eq!(config.get_default_departure_offset_days().unwrap(), 30);
    assert_eq!(config.catalogs().get(Airline::Ana).len(), 8);
}

#[test]
fn test_load_settings_from_file() {
    let file = write_temp_config(
        r#"{ "settings": { "urgent_window_days": 3, "locale": "en" } }"#,
    )
    .expect("Failed to write config");

    let config = ConfigManager::load(file.path()).expect("Failed to load config");
    assert_eq!(config.get_urgent_window_days().unwrap(), 3);
    assert_eq!(config.get_locale().unwrap(), "en");
    assert_eq!(config.get_default_departure_offset_days().unwrap(), 30);
}

#[test]
fn test_malformed_file_is_reported() {
    let file = write_temp_config("{ \"settings\": ").expect("Failed to write config");

    let result = ConfigManager::load(file.path());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_duplicate_plan_in_override_is_rejected() {
    let file = write_temp_config(
        r#"{ "catalogs": { "ANA": [
            { "name": "VALUE 1", "days_before": 1 },
            { "name": "VALUE 1", "days_before": 2 }
        ] } }"#,
    )
    .expect("Failed to write config");

    let result = ConfigManager::load(file.path());
    assert!(matches!(result, Err(ConfigError::InvalidCatalog { .. })));
}

#[test]
fn test_catalog_override_flows_into_api() {
    let file = write_temp_config(
        r#"{ "catalogs": { "JAL": [
            { "name": "セイバー", "days_before": 10 },
            { "name": "特便割引1", "days_before": 1 }
        ] } }"#,
    )
    .expect("Failed to write config");

    let state = AppState::new(ConfigManager::load(file.path()).expect("Failed to load config"))
        .expect("Failed to build state");
    let request =
        DeadlineRequest::new(date(2025, 6, 1), AirlineChoice::Jal).with_today(date(2025, 5, 1));
    let table = state.deadline_api.calculate(request).unwrap();

    let names: Vec<&str> = table.rows.iter().map(|row| row.plan_name.as_str()).collect();
    assert_eq!(names, vec!["特便割引1", "セイバー"]);
    assert_eq!(table.rows[1].deadline_date, date(2025, 5, 22));
}

#[test]
fn test_default_path_env_override() {
    let file = write_temp_config(r#"{ "settings": { "default_departure_offset_days": 14 } }"#)
        .expect("Failed to write config");

    std::env::set_var(CONFIG_PATH_ENV, file.path());
    let path = get_default_config_path();
    let config = ConfigManager::load_default();
    std::env::remove_var(CONFIG_PATH_ENV);

    assert_eq!(path, file.path());
    assert_eq!(
        config.expect("Failed to load config").get_default_departure_offset_days().unwrap(),
        14
    );
}
