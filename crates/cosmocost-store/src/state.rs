//! 應用狀態快照

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use cosmocost_core::{Catalog, Formula};

/// 持久化的工作狀態：原料目錄、已存配方、最後使用的配方
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    /// 原料目錄
    pub catalog: Catalog,

    /// 已存配方（依名稱索引，名稱排序）
    pub formulas: BTreeMap<String, Formula>,

    /// 最後儲存/載入的配方名稱
    pub last_formula: Option<String>,
}

impl AppState {
    /// 創建空的狀態
    pub fn new() -> Self {
        Self::default()
    }

    /// 儲存配方（同名覆蓋），並記為最後使用
    ///
    /// 儲存前剔除未命名或佔比非正的成分列
    pub fn save_formula(&mut self, mut formula: Formula) {
        formula.retain_effective();
        self.last_formula = Some(formula.name.clone());
        self.formulas.insert(formula.name.clone(), formula);
    }

    /// 刪除配方；若它是最後使用的配方，一併清除記錄
    pub fn delete_formula(&mut self, name: &str) -> bool {
        let removed = self.formulas.remove(name).is_some();
        if removed && self.last_formula.as_deref() == Some(name) {
            self.last_formula = None;
        }
        removed
    }

    /// 查詢配方
    pub fn formula(&self, name: &str) -> Option<&Formula> {
        self.formulas.get(name)
    }

    /// 配方名稱（已排序）
    pub fn formula_names(&self) -> impl Iterator<Item = &str> {
        self.formulas.keys().map(|name| name.as_str())
    }

    /// 匯出整份狀態為 JSON
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 從 JSON 匯入整份狀態
    ///
    /// 匯入是整份取代，不做合併；呼叫端以回傳值覆蓋現有狀態
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmocost_core::{MeasureUnit, SupplierOffer};

    fn sample_state() -> AppState {
        let mut state = AppState::new();
        state.catalog.add_offer(
            "Beeswax",
            SupplierOffer::new("A".to_string(), 1000.0, MeasureUnit::Gram, 18.0),
        );
        state.save_formula(
            Formula::new("Balm".to_string())
                .with_row("Beeswax", 40.0)
                .with_row("Coconut Oil", 60.0),
        );
        state
    }

    #[test]
    fn test_save_formula_records_last_and_compacts() {
        let mut state = AppState::new();
        state.save_formula(
            Formula::new("Draft".to_string())
                .with_row("Beeswax", 40.0)
                .with_row("", 60.0),
        );

        assert_eq!(state.last_formula.as_deref(), Some("Draft"));
        assert_eq!(state.formula("Draft").unwrap().rows.len(), 1);
    }

    #[test]
    fn test_delete_formula_clears_last() {
        let mut state = sample_state();
        assert!(state.delete_formula("Balm"));

        assert!(state.formula("Balm").is_none());
        assert!(state.last_formula.is_none());
        // 再刪一次沒有東西可刪
        assert!(!state.delete_formula("Balm"));
    }

    #[test]
    fn test_delete_other_formula_keeps_last() {
        let mut state = sample_state();
        state.save_formula(Formula::new("Scrub".to_string()).with_row("Sugar", 100.0));

        assert!(state.delete_formula("Balm"));
        assert_eq!(state.last_formula.as_deref(), Some("Scrub"));
    }

    #[test]
    fn test_json_roundtrip_replaces_wholesale() {
        let state = sample_state();
        let json = state.to_json_pretty().unwrap();

        let imported = AppState::from_json(&json).unwrap();
        assert_eq!(imported.formula_names().collect::<Vec<_>>(), vec!["Balm"]);
        assert_eq!(imported.catalog.len(), 1);
        assert_eq!(imported.last_formula.as_deref(), Some("Balm"));
    }

    #[test]
    fn test_import_rejects_invalid_json() {
        assert!(AppState::from_json("not json").is_err());
    }
}
