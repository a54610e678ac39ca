//! # CosmoCost Core
//!
//! 核心資料模型與類型定義

pub mod batch;
pub mod catalog;
pub mod formula;
pub mod input;
pub mod unit;

// Re-export 主要類型
pub use batch::{BatchParameters, GST_RATE};
pub use catalog::{Catalog, SupplierOffer};
pub use formula::{Formula, FormulaRow};
pub use input::{BatchParametersForm, FormulaForm, FormulaRowForm, OfferForm};
pub use unit::MeasureUnit;

/// 成本計算錯誤類型
#[derive(Debug, Clone, thiserror::Error)]
pub enum CostError {
    #[error("無效的填充量：每單位填充質量為零")]
    InvalidFillSize,

    #[error("無效的毛利率 {0}：必須介於 0 與 1 之間（不含 1）")]
    InvalidMargin(f64),

    #[error("尚未計算成本：COGS 必須大於零才能定價")]
    CostsNotComputed,

    #[error("無效的輸入欄位 {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("計算錯誤: {0}")]
    CalculationError(String),
}

pub type Result<T> = std::result::Result<T, CostError>;
