// ==========================================
// 航空券割引締切日计算 - 紧急等级判定引擎
// ==========================================
// 红线: 紧急等级是"等级制",不是评分制
// ==========================================
// 职责: 由距締切天数判定 Overdue / Urgent / Normal
// 输入: DeadlineResult.days_remaining
// 输出: UrgencyClass（渲染时映射为 红/橙/默认）
// ==========================================

use crate::domain::plan::DeadlineResult;
use crate::domain::types::UrgencyClass;

/// 默认紧急窗口（天）
pub const DEFAULT_URGENT_WINDOW_DAYS: u32 = 7;

// ==========================================
// UrgencyEngine - 紧急等级判定引擎
// ==========================================
#[derive(Debug, Clone, Copy)]
pub struct UrgencyEngine {
    urgent_window_days: i64,
}

impl UrgencyEngine {
    /// 创建默认窗口（7天）的判定引擎
    pub fn new() -> Self {
        Self::with_window(DEFAULT_URGENT_WINDOW_DAYS)
    }

    /// 指定紧急窗口天数
    pub fn with_window(urgent_window_days: u32) -> Self {
        Self {
            urgent_window_days: i64::from(urgent_window_days),
        }
    }

    /// 判定紧急等级
    ///
    /// 规则（顺序执行，命中即返回）:
    /// 1) days_remaining < 0 → Overdue
    /// 2) days_remaining ≤ N → Urgent（0 与 N 均含）
    /// 3) 其他 → Normal
    pub fn classify(&self, days_remaining: i64) -> UrgencyClass {
        if days_remaining < 0 {
            UrgencyClass::Overdue
        } else if days_remaining <= self.urgent_window_days {
            UrgencyClass::Urgent
        } else {
            UrgencyClass::Normal
        }
    }

    pub fn classify_result(&self, result: &DeadlineResult) -> UrgencyClass {
        self.classify(result.days_remaining)
    }
}

impl Default for UrgencyEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overdue() {
        let engine = UrgencyEngine::new();
        assert_eq!(engine.classify(-1), UrgencyClass::Overdue);
        assert_eq!(engine.classify(-365), UrgencyClass::Overdue);
    }

    #[test]
    fn test_zero_is_urgent() {
        // 締切当日仍可预约
        assert_eq!(UrgencyEngine::new().classify(0), UrgencyClass::Urgent);
    }

    #[test]
    fn test_window_boundary() {
        let engine = UrgencyEngine::new();
        assert_eq!(engine.classify(7), UrgencyClass::Urgent);
        assert_eq!(engine.classify(8), UrgencyClass::Normal);
    }

    #[test]
    fn test_custom_window() {
        let engine = UrgencyEngine::with_window(3);
        assert_eq!(engine.classify(3), UrgencyClass::Urgent);
        assert_eq!(engine.classify(4), UrgencyClass::Normal);

        let engine = UrgencyEngine::with_window(0);
        assert_eq!(engine.classify(0), UrgencyClass::Urgent);
        assert_eq!(engine.classify(1), UrgencyClass::Normal);
    }

    #[test]
    fn test_partition_is_total() {
        // 每个整数恰好落入一个等级，且随天数单调
        let engine = UrgencyEngine::new();
        let mut previous = UrgencyClass::Overdue;
        for days in -30..=30 {
            let class = engine.classify(days);
            assert!(class >= previous);
            previous = class;
        }
    }
}
