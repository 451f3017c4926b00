// ==========================================
// 航空券割引締切日计算 - 领域模型层
// ==========================================
// 职责: 定义领域实体与类型
// 红线: 不含配置读取逻辑,不含引擎逻辑
// ==========================================

pub mod plan;
pub mod types;

// 重导出核心类型
pub use plan::{DeadlineResult, PlanSelection};
pub use types::{Airline, AirlineChoice, ParseAirlineError, RowColor, UrgencyClass};
