// ==========================================
// 航空券割引締切日计算 - 引擎层错误类型
// ==========================================
// 红线: 目录外プラン名属于调用方契约违反，立即失败，不静默跳过
// ==========================================

use crate::domain::types::Airline;
use chrono::NaiveDate;
use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("割引プラン不在目录中: airline={airline}, plan={plan}")]
    UnknownPlan { airline: Airline, plan: String },

    #[error("日期超出可计算范围: date={date}, days={days}")]
    DateOutOfRange { date: NaiveDate, days: u32 },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
