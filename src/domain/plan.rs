// ==========================================
// 航空券割引締切日计算 - 割引プラン领域模型
// ==========================================
// 职责: 选中的プラン、締切日计算结果
// 红线: 每次计算重新生成，不持久化
// ==========================================

use crate::domain::types::Airline;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// PlanSelection - 选中的割引プラン
// ==========================================
// 由プラン名在对应航空公司目录中查表得到
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSelection {
    pub airline: Airline,  // 航空公司
    pub plan_name: String, // プラン名
    pub days_before: u32,  // 搭乗日前N日締切
}

// ==========================================
// DeadlineResult - 締切日计算结果
// ==========================================
// 不变量: deadline_date = 搭乗日 - days_before（日历日）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineResult {
    pub airline: Airline,        // 航空公司
    pub plan_name: String,       // プラン名
    pub deadline_date: NaiveDate, // 予約締切日
    pub days_remaining: i64,     // 距締切天数（负数 = 已过期）
}
