// ==========================================
// 航空券割引締切日计算 - 締切日 API
// ==========================================
// 职责: 接收表单输入（搭乗日 / 航空公司 / プラン多选），
//       补齐默认值后调用计算引擎，输出带紧急等级的结果表
// ==========================================

use std::sync::Arc;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult};
use crate::config::catalog::CatalogSet;
use crate::config::reader::DeadlineConfigReader;
use crate::domain::plan::DeadlineResult;
use crate::domain::types::{Airline, AirlineChoice, RowColor, UrgencyClass};
use crate::engine::{DeadlineCalculator, UrgencyEngine};
use crate::perf::PerfGuard;

// ==========================================
// 请求 / 响应 DTO
// ==========================================

/// 締切日计算请求
///
/// 字段为 None 时使用默认值：
/// - departure_date: today + default_departure_offset_days
/// - ana_plans / jal_plans: 该航空公司全部プラン（目录顺序）
/// - today: 本地当前日期
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeadlineRequest {
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub airline: AirlineChoice,
    #[serde(default)]
    pub ana_plans: Option<Vec<String>>,
    #[serde(default)]
    pub jal_plans: Option<Vec<String>>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl DeadlineRequest {
    /// 指定搭乗日与航空公司，其余取默认值
    pub fn new(departure_date: NaiveDate, airline: AirlineChoice) -> Self {
        Self {
            departure_date: Some(departure_date),
            airline,
            ..Self::default()
        }
    }

    pub fn with_plans(mut self, airline: Airline, plans: Vec<String>) -> Self {
        match airline {
            Airline::Ana => self.ana_plans = Some(plans),
            Airline::Jal => self.jal_plans = Some(plans),
        }
        self
    }

    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    fn plans_for(&self, airline: Airline) -> Option<&Vec<String>> {
        match airline {
            Airline::Ana => self.ana_plans.as_ref(),
            Airline::Jal => self.jal_plans.as_ref(),
        }
    }
}

/// 结果表单行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineRow {
    pub airline: Airline,
    pub plan_name: String,
    pub deadline_date: NaiveDate,
    pub days_remaining: i64,
    pub urgency: UrgencyClass,
    pub color: RowColor,
}

impl DeadlineRow {
    fn from_result(result: DeadlineResult, urgency: UrgencyClass) -> Self {
        Self {
            airline: result.airline,
            plan_name: result.plan_name,
            deadline_date: result.deadline_date,
            days_remaining: result.days_remaining,
            urgency,
            color: urgency.color(),
        }
    }
}

/// 紧急等级统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencySummary {
    pub overdue: usize,
    pub urgent: usize,
    pub normal: usize,
}

/// 結果表（已按締切日降序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeadlineTable {
    pub departure_date: NaiveDate,
    pub today: NaiveDate,
    pub rows: Vec<DeadlineRow>,
}

impl DeadlineTable {
    /// 无选中プラン时为空，调用方不渲染结果区
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> UrgencySummary {
        let mut summary = UrgencySummary::default();
        for row in &self.rows {
            match row.urgency {
                UrgencyClass::Overdue => summary.overdue += 1,
                UrgencyClass::Urgent => summary.urgent += 1,
                UrgencyClass::Normal => summary.normal += 1,
            }
        }
        summary
    }
}

// ==========================================
// DeadlineApi - 締切日 API
// ==========================================

/// 締切日API
///
/// 职责：
/// 1. 补齐表单默认值（搭乗日、全选プラン）
/// 2. 调用 DeadlineCalculator 计算并排序
/// 3. 调用 UrgencyEngine 判定紧急等级与着色
pub struct DeadlineApi {
    calculator: DeadlineCalculator,
    config: Arc<dyn DeadlineConfigReader>,
}

impl DeadlineApi {
    /// 创建新的DeadlineApi实例
    pub fn new(catalogs: Arc<CatalogSet>, config: Arc<dyn DeadlineConfigReader>) -> Self {
        Self {
            calculator: DeadlineCalculator::new(catalogs),
            config,
        }
    }

    /// 查询航空公司的全部プラン名（目录顺序）
    ///
    /// # 用途
    /// - 表单多选框的选项与默认全选值
    pub fn list_plans(&self, airline: Airline) -> Vec<String> {
        self.calculator.catalogs().get(airline).plan_names()
    }

    /// 默认搭乗日 = today + default_departure_offset_days
    pub fn default_departure_date(&self, today: NaiveDate) -> ApiResult<NaiveDate> {
        let offset = self.config.get_default_departure_offset_days()?;
        today
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                ApiError::InvalidInput(format!("基准日{}加{}天超出可计算范围", today, offset))
            })
    }

    /// 计算締切日一覧
    ///
    /// # 参数
    /// - request: 表单输入
    ///
    /// # 返回
    /// - Ok(DeadlineTable): 按締切日降序的结果表（无选中プラン时 rows 为空）
    /// - Err(ApiError::UnknownPlan): 选中了目录外的プラン名
    pub fn calculate(&self, request: DeadlineRequest) -> ApiResult<DeadlineTable> {
        let _perf = PerfGuard::new("calculate_deadlines");

        let today = request.today.unwrap_or_else(|| Local::now().date_naive());
        let departure_date = match request.departure_date {
            Some(date) => date,
            None => self.default_departure_date(today)?,
        };

        // ANA 在前，JAL 在后；未选择的航空公司忽略其プラン列表
        let mut selections: Vec<(Airline, String)> = Vec::new();
        for airline in request.airline.airlines() {
            let plans = match request.plans_for(airline) {
                Some(plans) => plans.clone(),
                None => self.list_plans(airline),
            };
            selections.extend(plans.into_iter().map(|plan| (airline, plan)));
        }

        if selections.is_empty() {
            tracing::info!(
                "未选择任何割引プラン: airline={}, departure_date={}",
                request.airline,
                departure_date
            );
            return Ok(DeadlineTable {
                departure_date,
                today,
                rows: Vec::new(),
            });
        }

        let results = self
            .calculator
            .compute_deadlines(departure_date, &selections, today)?;

        let urgency = UrgencyEngine::with_window(self.config.get_urgent_window_days()?);
        let rows: Vec<DeadlineRow> = results
            .into_iter()
            .map(|result| {
                let class = urgency.classify_result(&result);
                DeadlineRow::from_result(result, class)
            })
            .collect();

        let table = DeadlineTable {
            departure_date,
            today,
            rows,
        };

        let summary = table.summary();
        tracing::info!(
            "締切日计算完成: airline={}, departure_date={}, rows={}, overdue={}, urgent={}, normal={}",
            request.airline,
            departure_date,
            table.rows.len(),
            summary.overdue,
            summary.urgent,
            summary.normal
        );

        Ok(table)
    }
}
