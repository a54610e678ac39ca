//! 定價模型

use cosmocost_core::{CostError, Result};

/// 定價策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PricingStrategy {
    /// 目標批發毛利率
    TargetWholesale,
    /// 目標零售毛利率
    TargetRetail,
    /// 2× COGS
    Keystone,
    /// 3× COGS
    Premium,
    /// 4× COGS
    Luxe,
}

impl PricingStrategy {
    /// 全部策略（呈現順序）
    pub fn all() -> [PricingStrategy; 5] {
        [
            PricingStrategy::TargetWholesale,
            PricingStrategy::TargetRetail,
            PricingStrategy::Keystone,
            PricingStrategy::Premium,
            PricingStrategy::Luxe,
        ]
    }

    /// 顯示名稱
    pub fn label(&self) -> &'static str {
        match self {
            PricingStrategy::TargetWholesale => "Target Wholesale",
            PricingStrategy::TargetRetail => "Target Retail",
            PricingStrategy::Keystone => "Keystone (2× COGS)",
            PricingStrategy::Premium => "Premium (3×)",
            PricingStrategy::Luxe => "Luxe (4×)",
        }
    }

    /// 倍數型策略的倍數；毛利率型策略回傳 None
    pub fn multiplier(&self) -> Option<f64> {
        match self {
            PricingStrategy::Keystone => Some(2.0),
            PricingStrategy::Premium => Some(3.0),
            PricingStrategy::Luxe => Some(4.0),
            _ => None,
        }
    }
}

/// 定價參數
#[derive(Debug, Clone)]
pub struct PricingOptions {
    /// 批發目標毛利率（預設 40%）
    pub wholesale_margin: f64,

    /// 零售目標毛利率（預設 60%）
    pub retail_margin: f64,

    /// 價格進位階梯（預設 0.10）
    pub round_step: f64,
}

impl Default for PricingOptions {
    fn default() -> Self {
        Self {
            wholesale_margin: 0.40,
            retail_margin: 0.60,
            round_step: 0.10,
        }
    }
}

impl PricingOptions {
    /// 建構器模式：設置批發目標毛利率
    pub fn with_wholesale_margin(mut self, margin: f64) -> Self {
        self.wholesale_margin = margin;
        self
    }

    /// 建構器模式：設置零售目標毛利率
    pub fn with_retail_margin(mut self, margin: f64) -> Self {
        self.retail_margin = margin;
        self
    }

    /// 建構器模式：設置價格進位階梯
    pub fn with_round_step(mut self, step: f64) -> Self {
        self.round_step = step;
        self
    }
}

/// 單一定價策略的報價
#[derive(Debug, Clone)]
pub struct PriceQuote {
    /// 定價策略
    pub strategy: PricingStrategy,

    /// 建議售價（已進位到階梯）
    pub price: f64,

    /// 隱含毛利率（整數百分比）
    pub implied_margin_percent: i32,
}

/// 定價結果：可計算的策略報價，以及因參數無效而略過的策略
#[derive(Debug, Clone)]
pub struct PricingResult {
    /// 各策略建議售價（呈現順序）
    pub quotes: Vec<PriceQuote>,

    /// 略過的策略與原因
    pub skipped: Vec<SkippedStrategy>,
}

impl PricingResult {
    /// 查詢某策略的報價
    pub fn quote_for(&self, strategy: PricingStrategy) -> Option<&PriceQuote> {
        self.quotes.iter().find(|quote| quote.strategy == strategy)
    }
}

/// 因參數無效而略過的定價策略
#[derive(Debug, Clone)]
pub struct SkippedStrategy {
    /// 被略過的策略
    pub strategy: PricingStrategy,

    /// 略過原因
    pub error: CostError,
}

/// 定價計算器
pub struct PricingCalculator;

impl PricingCalculator {
    /// 無條件進位到價格階梯：永遠不往下調，避免定價低於目標
    ///
    /// 比值在浮點雜訊範圍內貼近整數時先吸附，確保冪等
    /// （已進位的價格再進位一次不會跳到下一階）
    pub fn round_up_to_step(x: f64, step: f64) -> f64 {
        let ratio = x / step;
        let snapped = if (ratio - ratio.round()).abs() < 1e-9 {
            ratio.round()
        } else {
            ratio.ceil()
        };
        snapped * step
    }

    /// 目標毛利率定價：price = cogs / (1 − margin)，再進位到階梯
    ///
    /// 毛利率必須落在 [0, 1)；1 會除以零，視為無效毛利率錯誤
    pub fn margin_price(cogs: f64, margin: f64, step: f64) -> Result<f64> {
        Self::require_cogs(cogs)?;
        if !(0.0..1.0).contains(&margin) {
            return Err(CostError::InvalidMargin(margin));
        }
        Ok(Self::round_up_to_step(cogs / (1.0 - margin), step))
    }

    /// 倍數定價：price = cogs × multiplier，再進位到階梯
    pub fn multiplier_price(cogs: f64, multiplier: f64, step: f64) -> Result<f64> {
        Self::require_cogs(cogs)?;
        Ok(Self::round_up_to_step(cogs * multiplier, step))
    }

    /// 隱含毛利率（整數百分比）：round((1 − cogs/price) × 100)
    pub fn implied_margin_percent(cogs: f64, price: f64) -> i32 {
        ((1.0 - cogs / price) * 100.0).round() as i32
    }

    /// 依全部策略計算建議售價
    ///
    /// cogs 必須是批次計算產出的含稅 COGS，非正值對整個呼叫都是
    /// 致命錯誤。各策略獨立計價：某個目標毛利率無效時只略過該
    /// 策略並記下原因，倍數型策略不除以 (1 − margin)，照常計價
    pub fn suggest(cogs_incl_tax: f64, options: &PricingOptions) -> Result<PricingResult> {
        Self::require_cogs(cogs_incl_tax)?;

        let mut result = PricingResult {
            quotes: Vec::with_capacity(PricingStrategy::all().len()),
            skipped: Vec::new(),
        };
        for strategy in PricingStrategy::all() {
            let price = match strategy.multiplier() {
                Some(multiplier) => {
                    Self::multiplier_price(cogs_incl_tax, multiplier, options.round_step)
                }
                None => {
                    let margin = if strategy == PricingStrategy::TargetWholesale {
                        options.wholesale_margin
                    } else {
                        options.retail_margin
                    };
                    Self::margin_price(cogs_incl_tax, margin, options.round_step)
                }
            };
            match price {
                Ok(price) => result.quotes.push(PriceQuote {
                    strategy,
                    price,
                    implied_margin_percent: Self::implied_margin_percent(cogs_incl_tax, price),
                }),
                Err(error) => result.skipped.push(SkippedStrategy { strategy, error }),
            }
        }
        Ok(result)
    }

    fn require_cogs(cogs: f64) -> Result<()> {
        if cogs > 0.0 && cogs.is_finite() {
            Ok(())
        } else {
            Err(CostError::CostsNotComputed)
        }
    }
}
