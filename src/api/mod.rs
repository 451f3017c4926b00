// ==========================================
// 航空券割引締切日计算 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供展示层调用
// ==========================================

pub mod deadline_api;
pub mod error;

// 重导出核心类型
pub use deadline_api::{DeadlineApi, DeadlineRequest, DeadlineRow, DeadlineTable, UrgencySummary};
pub use error::{ApiError, ApiResult};
