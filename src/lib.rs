// ==========================================
// 航空券割引締切日计算 - 核心库
// ==========================================
// 系统定位: 搭乗日 + 割引プラン → 予約締切日一覧
// 技术栈: Rust + chrono + tracing
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "ja");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 系统配置与割引プラン目录
pub mod config;

// 引擎层 - 締切日计算与紧急等级判定
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 应用层 - 展示
pub mod app;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// 性能统计
pub mod perf;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{Airline, AirlineChoice, DeadlineResult, PlanSelection, RowColor, UrgencyClass};

// 配置
pub use config::{CatalogSet, ConfigManager, PlanCatalog};

// 引擎
pub use engine::{DeadlineCalculator, UrgencyEngine};

// API
pub use api::{ApiError, ApiResult, DeadlineApi, DeadlineRequest, DeadlineTable};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "航空券割引締切日計算ツール";
