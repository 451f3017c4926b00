// ==========================================
// 航空券割引締切日计算 - 配置管理器
// ==========================================
// 职责: 配置加载、查询、目录覆写
// 存储: JSON 配置文件（settings 键值 + catalogs 目录覆写）
// ==========================================

use crate::config::catalog::{CatalogSet, PlanCatalog, PlanEntry};
use crate::config::error::ConfigError;
use crate::config::reader::DeadlineConfigReader;
use crate::domain::types::Airline;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

/// 配置文件路径环境变量
pub const CONFIG_PATH_ENV: &str = "AIRFARE_DEADLINE_CONFIG";

// ==========================================
// 配置键
// ==========================================
pub mod config_keys {
    /// 紧急窗口天数
    pub const URGENT_WINDOW_DAYS: &str = "urgent_window_days";
    /// 默认搭乗日偏移天数
    pub const DEFAULT_DEPARTURE_OFFSET_DAYS: &str = "default_departure_offset_days";
    /// 界面语言
    pub const LOCALE: &str = "locale";
}

const DEFAULT_URGENT_WINDOW_DAYS: &str = "7";
const DEFAULT_DEPARTURE_OFFSET_DAYS: &str = "30";
const DEFAULT_LOCALE: &str = "ja";

// 配置文件结构
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    settings: HashMap<String, Value>,
    #[serde(default)]
    catalogs: HashMap<String, Vec<PlanEntry>>,
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct ConfigManager {
    settings: HashMap<String, String>,
    catalogs: CatalogSet,
}

impl ConfigManager {
    /// 创建仅含默认值与内置目录的 ConfigManager
    pub fn new() -> Self {
        Self::default()
    }

    /// 从 JSON 字符串创建
    ///
    /// # 格式
    /// ```json
    /// {
    ///   "settings": { "urgent_window_days": 7 },
    ///   "catalogs": { "JAL": [{ "name": "特便割引1", "days_before": 1 }] }
    /// }
    /// ```
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_json::from_str(raw)?;

        let settings = file
            .settings
            .into_iter()
            .map(|(key, value)| {
                let value = match value {
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                (key, value)
            })
            .collect();

        let mut catalogs = CatalogSet::builtin();
        for (airline_code, entries) in file.catalogs {
            let airline: Airline = airline_code.parse().map_err(|_| ConfigError::InvalidCatalog {
                airline: airline_code.clone(),
                reason: "未知航空公司".to_string(),
            })?;
            tracing::info!("覆写割引プラン目录: airline={}, plans={}", airline, entries.len());
            catalogs = catalogs.with_catalog(PlanCatalog::new(airline, entries)?);
        }

        Ok(Self { settings, catalogs })
    }

    /// 从配置文件加载
    ///
    /// 文件不存在时回退为默认配置
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("配置文件不存在, 使用默认配置: {}", path.display());
            return Ok(Self::new());
        }

        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("加载配置文件: {}", path.display());
        Self::from_json_str(&raw)
    }

    /// 从默认路径加载（见 get_default_config_path）
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&get_default_config_path())
    }

    /// 读取配置值
    ///
    /// # 返回
    /// - Some(String): 配置值
    /// - None: 配置不存在
    fn get_config_value(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }

    /// 读取配置值，带默认值
    fn get_config_or_default(&self, key: &str, default: &str) -> String {
        self.get_config_value(key)
            .unwrap_or_else(|| default.to_string())
    }

    /// 读取非负整数配置
    fn get_u32_config(&self, key: &str, default: &str) -> Result<u32, ConfigError> {
        let value = self.get_config_or_default(key, default);
        value
            .trim()
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                value: value.clone(),
                reason: format!("需要非负整数: {}", e),
            })
    }

    /// 割引プラン目录（只读）
    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// 获取配置快照（JSON格式）
    ///
    /// # 用途
    /// - 启动时记录生效配置，便于排查
    pub fn get_config_snapshot(&self) -> Result<String, ConfigError> {
        // 排序后输出，保证快照稳定
        let settings: BTreeMap<&String, &String> = self.settings.iter().collect();

        let mut catalogs = BTreeMap::new();
        for airline in Airline::ALL {
            catalogs.insert(airline.code(), self.catalogs.get(airline).entries());
        }

        let snapshot = json!({
            "settings": settings,
            "catalogs": catalogs,
        });
        Ok(serde_json::to_string(&snapshot)?)
    }
}

impl DeadlineConfigReader for ConfigManager {
    fn get_urgent_window_days(&self) -> Result<u32, ConfigError> {
        self.get_u32_config(config_keys::URGENT_WINDOW_DAYS, DEFAULT_URGENT_WINDOW_DAYS)
    }

    fn get_default_departure_offset_days(&self) -> Result<u32, ConfigError> {
        self.get_u32_config(
            config_keys::DEFAULT_DEPARTURE_OFFSET_DAYS,
            DEFAULT_DEPARTURE_OFFSET_DAYS,
        )
    }

    fn get_locale(&self) -> Result<String, ConfigError> {
        Ok(self.get_config_or_default(config_keys::LOCALE, DEFAULT_LOCALE))
    }
}

/// 获取默认配置文件路径
///
/// 优先级:
/// 1. 环境变量 AIRFARE_DEADLINE_CONFIG
/// 2. 用户配置目录/airfare-deadline/config.json
/// 3. ./airfare_deadline.json
pub fn get_default_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return PathBuf::from(trimmed);
        }
    }

    match dirs::config_dir() {
        Some(config_dir) => config_dir.join("airfare-deadline").join("config.json"),
        None => PathBuf::from("./airfare_deadline.json"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigManager::new();
        assert_eq!(config.get_urgent_window_days().unwrap(), 7);
        assert_eq!(config.get_default_departure_offset_days().unwrap(), 30);
        assert_eq!(config.get_locale().unwrap(), "ja");
        assert_eq!(config.catalogs(), &CatalogSet::builtin());
    }

    #[test]
    fn test_settings_accept_numbers_and_strings() {
        let config = ConfigManager::from_json_str(
            r#"{ "settings": { "urgent_window_days": 10, "default_departure_offset_days": "45", "locale": "en" } }"#,
        )
        .unwrap();

        assert_eq!(config.get_urgent_window_days().unwrap(), 10);
        assert_eq!(config.get_default_departure_offset_days().unwrap(), 45);
        assert_eq!(config.get_locale().unwrap(), "en");
        assert_eq!(
            config.get_config_value(config_keys::LOCALE).as_deref(),
            Some("en")
        );
    }

    #[test]
    fn test_invalid_number_is_reported() {
        let config =
            ConfigManager::from_json_str(r#"{ "settings": { "urgent_window_days": -1 } }"#)
                .unwrap();

        match config.get_urgent_window_days() {
            Err(ConfigError::InvalidValue { key, value, .. }) => {
                assert_eq!(key, config_keys::URGENT_WINDOW_DAYS);
                assert_eq!(value, "-1");
            }
            other => panic!("Expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_catalog_override() {
        let config = ConfigManager::from_json_str(
            r#"{ "catalogs": { "ANA": [{ "name": "SUPER VALUE 90", "days_before": 90 }] } }"#,
        )
        .unwrap();

        let ana = config.catalogs().get(Airline::Ana);
        assert_eq!(ana.plan_names(), vec!["SUPER VALUE 90".to_string()]);
        assert_eq!(config.catalogs().get(Airline::Jal).len(), 8);
    }

    #[test]
    fn test_catalog_override_unknown_airline() {
        let result = ConfigManager::from_json_str(
            r#"{ "catalogs": { "SKY": [{ "name": "X", "days_before": 1 }] } }"#,
        );
        assert!(matches!(result, Err(ConfigError::InvalidCatalog { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let result = ConfigManager::from_json_str("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_config_snapshot_contains_catalogs() {
        let snapshot = ConfigManager::new().get_config_snapshot().unwrap();
        let value: Value = serde_json::from_str(&snapshot).unwrap();
        assert_eq!(value["catalogs"]["ANA"][0]["name"], "SUPER VALUE 75");
        assert_eq!(value["catalogs"]["JAL"][7]["days_before"], 1);
    }
}
