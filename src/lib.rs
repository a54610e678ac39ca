//! # CosmoCost
//!
//! 小批量化妝品配方的成本與定價計算：
//! 原料目錄（各供應商報價）、配方（成分百分比）、批次參數
//! 進來，每單位銷售成本（COGS）與各策略建議售價出去。
//! 計算引擎是純函數；儲存與抓價是外圍協作者

pub use cosmocost_calc::{
    BatchCalculator, CostBreakdown, CostCalculator, CostQuote, EvaluatedOffer, IngredientCost,
    OfferEvaluator, PriceQuote, PricingCalculator, PricingOptions, PricingResult, PricingStrategy,
    SkippedStrategy, UnitConverter,
};
pub use cosmocost_core::{
    BatchParameters, BatchParametersForm, Catalog, CostError, Formula, FormulaForm, FormulaRow,
    FormulaRowForm, MeasureUnit, OfferForm, SupplierOffer, GST_RATE,
};
pub use cosmocost_scrape::{extract_price, PriceGuess, PriceScraper, ScrapeError};
pub use cosmocost_store::{AppState, JsonStore, StoreError};
