// ==========================================
// 航空券割引締切日计算 - 締切日计算引擎
// ==========================================
// 职责: (搭乗日, [航空公司, プラン名]) → 按締切日降序的结果列表
// 输入: 搭乗日 + 选中的プラン + 基准日(today)
// 输出: Vec<DeadlineResult>
// 红线: 纯函数，目录只读；締切日 = 搭乗日 - N 个日历日
// ==========================================

use crate::config::catalog::CatalogSet;
use crate::domain::plan::{DeadlineResult, PlanSelection};
use crate::domain::types::Airline;
use crate::engine::error::{EngineError, EngineResult};
use chrono::{Days, NaiveDate};
use std::sync::Arc;
use tracing::instrument;

// ==========================================
// DeadlineCalculator - 締切日计算引擎
// ==========================================
pub struct DeadlineCalculator {
    catalogs: Arc<CatalogSet>,
}

impl DeadlineCalculator {
    /// 创建计算引擎（持有只读目录）
    pub fn new(catalogs: Arc<CatalogSet>) -> Self {
        Self { catalogs }
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// 查表得到 PlanSelection
    ///
    /// 目录外プラン名 → EngineError::UnknownPlan
    pub fn lookup(&self, airline: Airline, plan_name: &str) -> EngineResult<PlanSelection> {
        let days_before = self
            .catalogs
            .get(airline)
            .days_before(plan_name)
            .ok_or_else(|| EngineError::UnknownPlan {
                airline,
                plan: plan_name.to_string(),
            })?;

        Ok(PlanSelection {
            airline,
            plan_name: plan_name.to_string(),
            days_before,
        })
    }

    /// 计算各プラン的締切日
    ///
    /// 规则:
    /// 1) deadline = departure_date - days_before（日历日减法）
    /// 2) days_remaining = deadline - today（整天数，可为负）
    /// 3) 按 deadline 降序排列；同一締切日保持输入顺序（稳定排序）
    ///
    /// 边界处理:
    /// - selections 为空 → 空列表
    /// - 任一プラン不在目录中 → 整体失败
    #[instrument(skip(self, selections), fields(count = selections.len()))]
    pub fn compute_deadlines<S: AsRef<str>>(
        &self,
        departure_date: NaiveDate,
        selections: &[(Airline, S)],
        today: NaiveDate,
    ) -> EngineResult<Vec<DeadlineResult>> {
        let mut results = selections
            .iter()
            .map(|(airline, plan_name)| {
                let selection = self.lookup(*airline, plan_name.as_ref())?;
                Self::deadline_for(&selection, departure_date, today)
            })
            .collect::<EngineResult<Vec<_>>>()?;

        // sort_by 为稳定排序
        results.sort_by(|a, b| b.deadline_date.cmp(&a.deadline_date));

        tracing::debug!(
            departure_date = %departure_date,
            today = %today,
            results = results.len(),
            "deadlines computed"
        );

        Ok(results)
    }

    /// 单个プラン的締切日
    fn deadline_for(
        selection: &PlanSelection,
        departure_date: NaiveDate,
        today: NaiveDate,
    ) -> EngineResult<DeadlineResult> {
        let deadline_date = departure_date
            .checked_sub_days(Days::new(u64::from(selection.days_before)))
            .ok_or(EngineError::DateOutOfRange {
                date: departure_date,
                days: selection.days_before,
            })?;

        Ok(DeadlineResult {
            airline: selection.airline,
            plan_name: selection.plan_name.clone(),
            deadline_date,
            days_remaining: (deadline_date - today).num_days(),
        })
    }
}
