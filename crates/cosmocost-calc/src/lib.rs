//! # CosmoCost Calculation Engine
//!
//! 核心成本與定價計算引擎

pub mod batch;
pub mod calculator;
pub mod conversion;
pub mod offer;
pub mod pricing;

// Re-export 主要類型
pub use batch::{BatchCalculator, CostBreakdown, IngredientCost};
pub use calculator::CostCalculator;
pub use conversion::UnitConverter;
pub use offer::{EvaluatedOffer, OfferEvaluator};
pub use pricing::{
    PriceQuote, PricingCalculator, PricingOptions, PricingResult, PricingStrategy,
    SkippedStrategy,
};

/// 成本與定價計算結果
#[derive(Debug, Clone)]
pub struct CostQuote {
    /// 批次成本明細
    pub breakdown: CostBreakdown,

    /// 各策略定價結果（含被略過的策略）
    pub pricing: PricingResult,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}
