//! 批次成本計算

use cosmocost_core::{BatchParameters, Catalog, CostError, Formula, GST_RATE};

use crate::conversion::UnitConverter;
use crate::offer::OfferEvaluator;

/// 單一原料的用量與成本
#[derive(Debug, Clone)]
pub struct IngredientCost {
    /// 原料名稱
    pub ingredient: String,

    /// 本批次所需質量（克）
    pub needed_grams: f64,

    /// 最優有效單價（每公斤）；無可用報價時為 None
    pub cost_per_kg: Option<f64>,

    /// 最優報價的供應商
    pub supplier: Option<String>,

    /// 成本貢獻（無可用報價時為 0）
    pub cost: f64,
}

impl IngredientCost {
    /// 該列是否有可用的成本資料
    pub fn is_costed(&self) -> bool {
        self.cost_per_kg.is_some()
    }
}

/// 批次成本明細
#[derive(Debug, Clone)]
pub struct CostBreakdown {
    /// 批次總質量（克）
    pub batch_grams: f64,

    /// 扣除損耗後的可用質量（克）
    pub usable_grams: f64,

    /// 每單位填充質量（克）
    pub fill_grams: f64,

    /// 產出單位數
    pub units: u64,

    /// 每列原料的用量與成本
    pub rows: Vec<IngredientCost>,

    /// 整批材料成本
    pub material_cost_total: f64,

    /// 每單位材料成本
    pub material_per_unit: f64,

    /// 每單位包裝成本
    pub packaging_per_unit: f64,

    /// 每單位人工成本
    pub labor_per_unit: f64,

    /// 每單位製造費用
    pub overhead_per_unit: f64,

    /// 每單位銷售成本（未稅）
    pub cogs: f64,

    /// 每單位 GST
    pub gst_per_unit: f64,

    /// 每單位銷售成本（含稅）
    pub cogs_incl_gst: f64,
}

impl CostBreakdown {
    /// 缺少可用報價的原料清單
    pub fn uncosted_ingredients(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| !row.is_costed())
            .map(|row| row.ingredient.as_str())
            .collect()
    }
}

/// 批次成本計算器
pub struct BatchCalculator;

impl BatchCalculator {
    /// 計算批次成本明細
    ///
    /// 填充質量為零是致命輸入錯誤；缺少報價的原料則逐列標示為
    /// 不可用並以 0 計入，不會中斷整批計算
    pub fn calculate(
        params: &BatchParameters,
        formula: &Formula,
        catalog: &Catalog,
    ) -> cosmocost_core::Result<CostBreakdown> {
        // Step 1: 批次質量
        let batch_grams =
            UnitConverter::to_base_mass(params.batch_size, params.batch_unit, params.density);

        // Step 2: 扣除損耗
        let usable_grams = batch_grams * (1.0 - params.wastage);

        // Step 3: 填充質量
        let fill_grams =
            UnitConverter::to_base_mass(params.fill_size, params.fill_unit, params.density);
        if !fill_grams.is_finite() || fill_grams <= 0.0 {
            return Err(CostError::InvalidFillSize);
        }

        // Step 4: 產出單位數（整數，無條件捨去）
        let units = (usable_grams / fill_grams).floor() as u64;

        tracing::debug!(
            "批次 {:.0}g，可用 {:.0}g，每單位 {:.1}g，產出 {} 單位",
            batch_grams,
            usable_grams,
            fill_grams,
            units
        );

        // Step 5: 逐列原料計算用量與最優成本
        let mut rows = Vec::with_capacity(formula.rows.len());
        let mut material_cost_total = 0.0;

        for formula_row in &formula.rows {
            let needed_grams = batch_grams * (formula_row.percentage / 100.0);

            let best = catalog
                .offers_for(&formula_row.ingredient)
                .and_then(OfferEvaluator::best_offer)
                // 全部報價退化時有效單價是 +∞，不得流入成本合計
                .filter(|evaluated| evaluated.is_usable());

            let (cost_per_kg, supplier) = match &best {
                Some(evaluated) => (
                    Some(evaluated.cost_per_kg),
                    Some(evaluated.offer.supplier.clone()),
                ),
                None => {
                    tracing::debug!("原料 {} 缺少可用報價", formula_row.ingredient);
                    (None, None)
                }
            };

            let cost = cost_per_kg.map_or(0.0, |per_kg| per_kg * needed_grams / 1000.0);
            material_cost_total += cost;

            rows.push(IngredientCost {
                ingredient: formula_row.ingredient.clone(),
                needed_grams,
                cost_per_kg,
                supplier,
                cost,
            });
        }

        // Step 6: 每單位成本；units 為 0 時所有每單位值一律為 0
        let (material_per_unit, packaging_per_unit, labor_per_unit, overhead_per_unit) =
            if units > 0 {
                (
                    material_cost_total / units as f64,
                    params.packaging_cost_per_unit(),
                    params.labor_cost_per_batch / units as f64,
                    params.overhead_cost_per_batch / units as f64,
                )
            } else {
                (0.0, 0.0, 0.0, 0.0)
            };

        // Step 7: COGS 與 GST
        let cogs = material_per_unit + packaging_per_unit + labor_per_unit + overhead_per_unit;
        let gst_per_unit = if params.gst_enabled { cogs * GST_RATE } else { 0.0 };
        let cogs_incl_gst = cogs + gst_per_unit;

        Ok(CostBreakdown {
            batch_grams,
            usable_grams,
            fill_grams,
            units,
            rows,
            material_cost_total,
            material_per_unit,
            packaging_per_unit,
            labor_per_unit,
            overhead_per_unit,
            cogs,
            gst_per_unit,
            cogs_incl_gst,
        })
    }
}
