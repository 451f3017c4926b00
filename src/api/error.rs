// ==========================================
// 航空券割引締切日计算 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换引擎/配置错误为用户可读的错误消息
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::types::ParseAirlineError;
use crate::engine::error::EngineError;
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 调用方契约错误
    // ==========================================
    /// 目录外プラン名（上游选择应受目录约束，出现即为配置缺陷）
    #[error("割引プラン不在目录中: airline={airline}, plan={plan}")]
    UnknownPlan { airline: String, plan: String },

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ==========================================
    // 配置错误
    // ==========================================
    #[error("配置错误: {0}")]
    ConfigError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 EngineError 转换
// ==========================================
impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::UnknownPlan { airline, plan } => ApiError::UnknownPlan {
                airline: airline.to_string(),
                plan,
            },
            EngineError::DateOutOfRange { date, days } => ApiError::InvalidInput(format!(
                "搭乗日{}减去{}天超出可计算范围",
                date, days
            )),
        }
    }
}

// ==========================================
// 从 ConfigError 转换
// ==========================================
impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

// ==========================================
// 从 ParseAirlineError 转换（表单字符串输入）
// ==========================================
impl From<ParseAirlineError> for ApiError {
    fn from(err: ParseAirlineError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
