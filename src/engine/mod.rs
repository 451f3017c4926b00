// ==========================================
// 航空券割引締切日计算 - 引擎层
// ==========================================
// 职责: 締切日计算与紧急等级判定
// 红线: 引擎不依赖任何界面，不读写文件
// ==========================================

pub mod deadline;
pub mod error;
pub mod urgency;

// 重导出核心引擎
pub use deadline::DeadlineCalculator;
pub use error::{EngineError, EngineResult};
pub use urgency::{UrgencyEngine, DEFAULT_URGENT_WINDOW_DAYS};
