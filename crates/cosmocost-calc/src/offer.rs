//! 報價評估

use cosmocost_core::{MeasureUnit, SupplierOffer};

/// 附帶有效單價的供應商報價
#[derive(Debug, Clone)]
pub struct EvaluatedOffer {
    /// 原始報價
    pub offer: SupplierOffer,

    /// 有效單價（每公斤，含運費）
    pub cost_per_kg: f64,
}

impl EvaluatedOffer {
    /// 有效單價是否可用於成本計算（非有限值代表包裝規格退化）
    pub fn is_usable(&self) -> bool {
        self.cost_per_kg.is_finite()
    }
}

/// 報價評估器：跨供應商比較同一原料的報價
pub struct OfferEvaluator;

impl OfferEvaluator {
    /// 包裝規格換算成克
    ///
    /// kg 與 L 一律乘 1000：體積包裝在報價比較中視同等量質量
    /// （即密度 1），與批次設定的密度無關。報價之間的比較因此
    /// 保持一致，即使在物理上並不精確
    pub fn normalized_pack_grams(offer: &SupplierOffer) -> f64 {
        match offer.pack_unit {
            MeasureUnit::Kilogram | MeasureUnit::Liter => offer.pack_size * 1000.0,
            MeasureUnit::Gram | MeasureUnit::Milliliter => offer.pack_size,
        }
    }

    /// 有效每公斤成本 =（售價 + 運費）/ 包裝克數 × 1000
    ///
    /// 包裝規格為零時除出 +∞，比較時永遠落選；不在此處驗證
    pub fn cost_per_kg(offer: &SupplierOffer) -> f64 {
        offer.landed_cost() / Self::normalized_pack_grams(offer) * 1000.0
    }

    /// 選出有效單價最低的報價
    ///
    /// 嚴格最小值：同價保留先出現者；空清單回傳 None。
    /// 全部報價都退化時仍回傳第一筆（cost_per_kg 為 +∞），
    /// 由呼叫端標示為不可用
    pub fn best_offer(offers: &[SupplierOffer]) -> Option<EvaluatedOffer> {
        let mut best: Option<EvaluatedOffer> = None;
        for offer in offers {
            let cost_per_kg = Self::cost_per_kg(offer);
            let replace = match &best {
                None => true,
                Some(current) => cost_per_kg < current.cost_per_kg,
            };
            if replace {
                best = Some(EvaluatedOffer {
                    offer: offer.clone(),
                    cost_per_kg,
                });
            }
        }
        best
    }
}
