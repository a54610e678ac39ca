//! 成本與定價主計算器

use cosmocost_core::{BatchParameters, Catalog, Formula};

use crate::batch::{BatchCalculator, CostBreakdown};
use crate::pricing::{PricingCalculator, PricingOptions, PricingResult};
use crate::CostQuote;

/// 成本計算器
///
/// 串接單位換算、報價評估、批次分解與定價。目錄以快照傳入，
/// 計算本身是純函數，可在每次輸入變動時重算
pub struct CostCalculator {
    /// 原料目錄快照
    catalog: Catalog,
}

impl CostCalculator {
    /// 創建新的成本計算器
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// 計算批次成本明細
    pub fn cost(
        &self,
        formula: &Formula,
        params: &BatchParameters,
    ) -> cosmocost_core::Result<CostBreakdown> {
        tracing::info!(
            "開始成本計算：配方 {}（{} 列），目錄原料 {} 種",
            formula.name,
            formula.rows.len(),
            self.catalog.len()
        );

        let breakdown = BatchCalculator::calculate(params, formula, &self.catalog)?;

        let uncosted = breakdown.uncosted_ingredients();
        if !uncosted.is_empty() {
            tracing::warn!("缺少可用報價的原料: {:?}", uncosted);
        }

        Ok(breakdown)
    }

    /// 依成本明細計算建議售價
    pub fn price(
        &self,
        breakdown: &CostBreakdown,
        options: &PricingOptions,
    ) -> cosmocost_core::Result<PricingResult> {
        let pricing = PricingCalculator::suggest(breakdown.cogs_incl_gst, options)?;
        for skipped in &pricing.skipped {
            tracing::warn!(
                "定價策略 {} 略過: {}",
                skipped.strategy.label(),
                skipped.error
            );
        }
        Ok(pricing)
    }

    /// 一次完成成本計算與定價
    pub fn quote(
        &self,
        formula: &Formula,
        params: &BatchParameters,
        options: &PricingOptions,
    ) -> cosmocost_core::Result<CostQuote> {
        let start_time = std::time::Instant::now();

        // Step 1: 批次成本
        tracing::debug!("Step 1: 批次成本");
        let breakdown = self.cost(formula, params)?;

        // Step 2: 定價
        tracing::debug!("Step 2: 定價");
        let pricing = self.price(&breakdown, options)?;

        tracing::info!(
            "成本計算完成，{} 單位，COGS（含稅）{:.2}，耗時 {:?}",
            breakdown.units,
            breakdown.cogs_incl_gst,
            start_time.elapsed()
        );

        Ok(CostQuote {
            breakdown,
            pricing,
            calculation_time_ms: Some(start_time.elapsed().as_millis()),
        })
    }

    /// 獲取目錄快照引用
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// 取回目錄快照（編輯後由呼叫端重建計算器）
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
