// ==========================================
// 航空券割引締切日计算 - 割引プラン目录
// ==========================================
// 职责: 航空公司 → (プラン名 → 搭乗日前N日) 的静态映射
// 红线: 目录在进程生命周期内只读，由计算器在构造时持有
// ==========================================

use crate::config::error::ConfigError;
use crate::domain::types::Airline;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// ==========================================
// 内置目录（嵌入常量）
// ==========================================

/// ANA SUPER VALUE / VALUE
const ANA_PLANS: &[(&str, u32)] = &[
    ("SUPER VALUE 75", 75),
    ("SUPER VALUE 55", 55),
    ("SUPER VALUE 45", 45),
    ("SUPER VALUE 28", 28),
    ("SUPER VALUE 21", 21),
    ("VALUE 7", 7),
    ("VALUE 3", 3),
    ("VALUE 1", 1),
];

/// JAL 先得割引 / 特便割引
const JAL_PLANS: &[(&str, u32)] = &[
    ("ウルトラ先得", 75),
    ("スーパー先得", 55),
    ("先得割引タイプB", 45),
    ("先得割引タイプA", 28),
    ("特便割引21", 21),
    ("特便割引7", 7),
    ("特便割引3", 3),
    ("特便割引1", 1),
];

// ==========================================
// PlanEntry - 目录条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanEntry {
    pub name: String,     // プラン名（本地化字符串）
    pub days_before: u32, // 搭乗日前N日
}

// ==========================================
// PlanCatalog - 单个航空公司的割引プラン目录
// ==========================================
// 保持声明顺序（表单选项与默认全选均按此顺序）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCatalog {
    airline: Airline,
    plans: Vec<PlanEntry>,
}

impl PlanCatalog {
    /// 创建目录
    ///
    /// # 校验
    /// - 至少一条プラン
    /// - プラン名非空且不重复
    pub fn new(airline: Airline, plans: Vec<PlanEntry>) -> Result<Self, ConfigError> {
        if plans.is_empty() {
            return Err(ConfigError::InvalidCatalog {
                airline: airline.to_string(),
                reason: "目录为空".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for entry in &plans {
            if entry.name.trim().is_empty() {
                return Err(ConfigError::InvalidCatalog {
                    airline: airline.to_string(),
                    reason: "プラン名为空".to_string(),
                });
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(ConfigError::InvalidCatalog {
                    airline: airline.to_string(),
                    reason: format!("プラン名重复: {}", entry.name),
                });
            }
        }

        Ok(Self { airline, plans })
    }

    /// 内置目录
    pub fn builtin(airline: Airline) -> Self {
        let table = match airline {
            Airline::Ana => ANA_PLANS,
            Airline::Jal => JAL_PLANS,
        };

        Self {
            airline,
            plans: table
                .iter()
                .map(|(name, days)| PlanEntry {
                    name: (*name).to_string(),
                    days_before: *days,
                })
                .collect(),
        }
    }

    pub fn airline(&self) -> Airline {
        self.airline
    }

    /// 按プラン名查询搭乗日前N日
    pub fn days_before(&self, plan_name: &str) -> Option<u32> {
        self.plans
            .iter()
            .find(|entry| entry.name == plan_name)
            .map(|entry| entry.days_before)
    }

    /// 全部プラン名（声明顺序）
    pub fn plan_names(&self) -> Vec<String> {
        self.plans.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.plans
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

// ==========================================
// CatalogSet - 全部航空公司的目录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSet {
    ana: PlanCatalog,
    jal: PlanCatalog,
}

impl CatalogSet {
    /// 内置目录集合
    pub fn builtin() -> Self {
        Self {
            ana: PlanCatalog::builtin(Airline::Ana),
            jal: PlanCatalog::builtin(Airline::Jal),
        }
    }

    /// 替换某一航空公司的目录（其余保持不变）
    pub fn with_catalog(mut self, catalog: PlanCatalog) -> Self {
        match catalog.airline() {
            Airline::Ana => self.ana = catalog,
            Airline::Jal => self.jal = catalog,
        }
        self
    }

    pub fn get(&self, airline: Airline) -> &PlanCatalog {
        match airline {
            Airline::Ana => &self.ana,
            Airline::Jal => &self.jal,
        }
    }
}

impl Default for CatalogSet {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogs() {
        let catalogs = CatalogSet::builtin();

        let ana = catalogs.get(Airline::Ana);
        assert_eq!(ana.len(), 8);
        assert_eq!(ana.days_before("SUPER VALUE 75"), Some(75));
        assert_eq!(ana.days_before("VALUE 1"), Some(1));

        let jal = catalogs.get(Airline::Jal);
        assert_eq!(jal.len(), 8);
        assert_eq!(jal.days_before("ウルトラ先得"), Some(75));
        assert_eq!(jal.days_before("先得割引タイプB"), Some(45));
        assert_eq!(jal.days_before("特便割引1"), Some(1));
    }

    #[test]
    fn test_catalogs_are_per_airline() {
        let catalogs = CatalogSet::builtin();
        assert_eq!(catalogs.get(Airline::Ana).days_before("特便割引1"), None);
        assert_eq!(catalogs.get(Airline::Jal).days_before("VALUE 1"), None);
    }

    #[test]
    fn test_plan_names_keep_declaration_order() {
        let names = PlanCatalog::builtin(Airline::Jal).plan_names();
        assert_eq!(names.first().map(String::as_str), Some("ウルトラ先得"));
        assert_eq!(names.last().map(String::as_str), Some("特便割引1"));
    }

    #[test]
    fn test_new_rejects_empty_and_duplicates() {
        assert!(PlanCatalog::new(Airline::Ana, vec![]).is_err());

        let dup = vec![
            PlanEntry { name: "X".to_string(), days_before: 3 },
            PlanEntry { name: "X".to_string(), days_before: 5 },
        ];
        match PlanCatalog::new(Airline::Ana, dup) {
            Err(ConfigError::InvalidCatalog { airline, reason }) => {
                assert_eq!(airline, "ANA");
                assert!(reason.contains("X"));
            }
            other => panic!("Expected InvalidCatalog, got {:?}", other),
        }
    }

    #[test]
    fn test_with_catalog_replaces_one_airline() {
        let custom = PlanCatalog::new(
            Airline::Jal,
            vec![PlanEntry { name: "セイバー".to_string(), days_before: 10 }],
        )
        .unwrap();

        let catalogs = CatalogSet::builtin().with_catalog(custom);
        assert_eq!(catalogs.get(Airline::Jal).len(), 1);
        assert_eq!(catalogs.get(Airline::Ana).len(), 8);
    }
}
