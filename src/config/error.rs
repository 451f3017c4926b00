// ==========================================
// 航空券割引締切日计算 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 文件错误 =====
    #[error("配置文件读取失败: path={path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("配置文件格式错误: {0}")]
    Parse(#[from] serde_json::Error),

    // ===== 配置值错误 =====
    #[error("配置值无效 (key={key}, value={value}): {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("割引プラン目录无效 (airline={airline}): {reason}")]
    InvalidCatalog { airline: String, reason: String },
}
