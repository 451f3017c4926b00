// ==========================================
// 航空券割引締切日计算 - 配置读取 Trait
// ==========================================
// 职责: 定义 API 层所需的配置读取接口（不包含实现）
// 红线: 不包含配置写入、不包含业务逻辑
// ==========================================

use crate::config::error::ConfigError;

// ==========================================
// DeadlineConfigReader Trait
// ==========================================
// 实现者: ConfigManager（从配置文件 settings 读取）
pub trait DeadlineConfigReader: Send + Sync {
    /// 获取紧急窗口天数
    ///
    /// # 用途
    /// - 0 ≤ 距締切天数 ≤ N → Urgent
    ///
    /// # 默认值
    /// - 7
    fn get_urgent_window_days(&self) -> Result<u32, ConfigError>;

    /// 获取默认搭乗日偏移（今天 + N 天）
    ///
    /// # 默认值
    /// - 30
    fn get_default_departure_offset_days(&self) -> Result<u32, ConfigError>;

    /// 获取界面语言
    ///
    /// # 默认值
    /// - "ja"
    fn get_locale(&self) -> Result<String, ConfigError>;
}
