// ==========================================
// 航空券割引締切日计算 - 配置层
// ==========================================
// 职责: 系统配置与割引プラン目录
// 存储: 内置常量 + 可选 JSON 配置文件
// ==========================================

pub mod catalog;
pub mod config_manager;
pub mod error;
pub mod reader;

// 重导出核心配置管理器
pub use catalog::{CatalogSet, PlanCatalog, PlanEntry};
pub use config_manager::{config_keys, get_default_config_path, ConfigManager, CONFIG_PATH_ENV};
pub use error::ConfigError;
pub use reader::DeadlineConfigReader;
