// ==========================================
// 航空券割引締切日计算 - 领域类型定义
// ==========================================
// 职责: 航空公司、航空公司选择、紧急等级、行着色
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ==========================================
// 航空公司 (Airline)
// ==========================================
// 每家航空公司对应一份固定的割引プラン目录
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Airline {
    #[serde(rename = "ANA")]
    Ana,
    #[serde(rename = "JAL")]
    Jal,
}

impl Airline {
    /// 全部航空公司（固定顺序: ANA 在前）
    pub const ALL: [Airline; 2] = [Airline::Ana, Airline::Jal];

    pub fn code(&self) -> &'static str {
        match self {
            Airline::Ana => "ANA",
            Airline::Jal => "JAL",
        }
    }
}

impl fmt::Display for Airline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Airline {
    type Err = ParseAirlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ANA" => Ok(Airline::Ana),
            "JAL" => Ok(Airline::Jal),
            _ => Err(ParseAirlineError(s.to_string())),
        }
    }
}

// ==========================================
// 航空公司选择 (Airline Choice)
// ==========================================
// 表单单选项: ANA / JAL / 两者（原表单标签为「両方」）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AirlineChoice {
    #[serde(rename = "ANA")]
    Ana,
    #[serde(rename = "JAL")]
    Jal,
    #[default]
    #[serde(rename = "Both", alias = "BOTH", alias = "両方")]
    Both,
}

impl AirlineChoice {
    /// 该选择是否包含指定航空公司
    pub fn includes(&self, airline: Airline) -> bool {
        match self {
            AirlineChoice::Ana => airline == Airline::Ana,
            AirlineChoice::Jal => airline == Airline::Jal,
            AirlineChoice::Both => true,
        }
    }

    /// 按固定顺序返回包含的航空公司
    pub fn airlines(&self) -> Vec<Airline> {
        Airline::ALL
            .into_iter()
            .filter(|airline| self.includes(*airline))
            .collect()
    }
}

impl fmt::Display for AirlineChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AirlineChoice::Ana => write!(f, "ANA"),
            AirlineChoice::Jal => write!(f, "JAL"),
            AirlineChoice::Both => write!(f, "Both"),
        }
    }
}

impl FromStr for AirlineChoice {
    type Err = ParseAirlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == "両方" {
            return Ok(AirlineChoice::Both);
        }
        match trimmed.to_uppercase().as_str() {
            "ANA" => Ok(AirlineChoice::Ana),
            "JAL" => Ok(AirlineChoice::Jal),
            "BOTH" => Ok(AirlineChoice::Both),
            _ => Err(ParseAirlineError(s.to_string())),
        }
    }
}

impl From<Airline> for AirlineChoice {
    fn from(airline: Airline) -> Self {
        match airline {
            Airline::Ana => AirlineChoice::Ana,
            Airline::Jal => AirlineChoice::Jal,
        }
    }
}

/// 航空公司字符串解析失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("无法识别的航空公司: {0}")]
pub struct ParseAirlineError(pub String);

// ==========================================
// 紧急等级 (Urgency Class)
// ==========================================
// 红线: 三档划分，边界 0 与 N 天均归入 Urgent
// 顺序: Overdue < Urgent < Normal（越靠前越紧急）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UrgencyClass {
    Overdue, // 已过締切
    Urgent,  // 7天内
    Normal,  // 正常
}

impl UrgencyClass {
    /// 对应的行着色
    pub fn color(&self) -> RowColor {
        match self {
            UrgencyClass::Overdue => RowColor::Red,
            UrgencyClass::Urgent => RowColor::Orange,
            UrgencyClass::Normal => RowColor::Default,
        }
    }

    /// i18n 键
    pub fn i18n_key(&self) -> &'static str {
        match self {
            UrgencyClass::Overdue => "urgency.overdue",
            UrgencyClass::Urgent => "urgency.urgent",
            UrgencyClass::Normal => "urgency.normal",
        }
    }
}

impl fmt::Display for UrgencyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyClass::Overdue => write!(f, "OVERDUE"),
            UrgencyClass::Urgent => write!(f, "URGENT"),
            UrgencyClass::Normal => write!(f, "NORMAL"),
        }
    }
}

// ==========================================
// 行着色 (Row Color)
// ==========================================
// 红 = 已过期, 橙 = 紧急, 默认 = 正常
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RowColor {
    Red,
    Orange,
    Default,
}

impl fmt::Display for RowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowColor::Red => write!(f, "RED"),
            RowColor::Orange => write!(f, "ORANGE"),
            RowColor::Default => write!(f, "DEFAULT"),
        }
    }
}
