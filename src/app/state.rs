// ==========================================
// 航空券割引締切日计算 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::DeadlineApi;
use crate::config::{ConfigError, ConfigManager, DeadlineConfigReader};
use crate::i18n;

/// 应用状态
///
/// 目录与配置在启动时加载一次，之后只读
pub struct AppState {
    /// 配置管理器
    pub config: Arc<ConfigManager>,

    /// 締切日API
    pub deadline_api: Arc<DeadlineApi>,
}

impl AppState {
    /// 由已加载的配置创建应用状态
    ///
    /// 同时应用配置中的语言（默认 "ja"），渲染前无需再调用 set_locale
    pub fn new(config: ConfigManager) -> Result<Self, ConfigError> {
        i18n::set_locale(&config.get_locale()?);

        let config = Arc::new(config);
        let catalogs = Arc::new(config.catalogs().clone());

        let deadline_api = Arc::new(DeadlineApi::new(catalogs, config.clone()));

        Ok(Self {
            config,
            deadline_api,
        })
    }

    /// 从默认配置路径加载
    pub fn from_default_config() -> Result<Self, ConfigError> {
        let config = ConfigManager::load_default()?;
        tracing::debug!("生效配置: {}", config.get_config_snapshot()?);
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Airline;
    use crate::i18n::LOCALE_TEST_LOCK;

    #[test]
    fn test_state_uses_config_catalogs() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        let config = ConfigManager::from_json_str(
            r#"{ "catalogs": { "JAL": [{ "name": "セイバー", "days_before": 10 }] } }"#,
        )
        .unwrap();
        let state = AppState::new(config).unwrap();

        assert_eq!(
            state.deadline_api.list_plans(Airline::Jal),
            vec!["セイバー".to_string()]
        );
        assert_eq!(state.deadline_api.list_plans(Airline::Ana).len(), 8);
    }

    #[test]
    fn test_state_applies_configured_locale() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();

        let config = ConfigManager::from_json_str(r#"{ "settings": { "locale": "en" } }"#).unwrap();
        AppState::new(config).unwrap();
        assert_eq!(i18n::current_locale(), "en");

        AppState::new(ConfigManager::new()).unwrap();
        assert_eq!(i18n::current_locale(), i18n::DEFAULT_LOCALE);
    }
}
