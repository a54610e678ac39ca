//! 配方模型

use serde::{Deserialize, Serialize};

/// 配方成分列：原料名稱與其佔比
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormulaRow {
    /// 原料名稱（應對應目錄中的原料，但不強制）
    pub ingredient: String,

    /// 佔比（百分比，(0, 100]）
    pub percentage: f64,
}

impl FormulaRow {
    /// 創建新的配方成分列
    pub fn new(ingredient: String, percentage: f64) -> Self {
        Self {
            ingredient,
            percentage,
        }
    }
}

/// 配方：有序的成分清單
///
/// 百分比總和預期接近 100，但僅供呈現提示，儲存與計算都不阻擋
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formula {
    /// 配方名稱
    pub name: String,

    /// 成分清單（保持輸入順序）
    pub rows: Vec<FormulaRow>,
}

impl Formula {
    /// 創建新的空配方
    pub fn new(name: String) -> Self {
        Self {
            name,
            rows: Vec::new(),
        }
    }

    /// 建構器模式：添加成分列
    pub fn with_row(mut self, ingredient: &str, percentage: f64) -> Self {
        self.rows
            .push(FormulaRow::new(ingredient.to_string(), percentage));
        self
    }

    /// 添加成分列
    pub fn add_row(&mut self, row: FormulaRow) {
        self.rows.push(row);
    }

    /// 百分比總和
    pub fn percent_total(&self) -> f64 {
        self.rows.iter().map(|row| row.percentage).sum()
    }

    /// 百分比總和是否接近 100（容差 0.01）
    pub fn is_balanced(&self) -> bool {
        (self.percent_total() - 100.0).abs() < 0.01
    }

    /// 移除未命名或佔比非正的成分列（儲存前整理）
    pub fn retain_effective(&mut self) {
        self.rows
            .retain(|row| !row.ingredient.trim().is_empty() && row.percentage > 0.0);
    }

    /// 檢查配方是否沒有任何成分
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
