//! 原料目錄與供應商報價模型

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::unit::MeasureUnit;

/// 供應商報價（一個供應商對一種原料的一筆列價）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierOffer {
    /// 報價ID
    pub id: Uuid,

    /// 供應商名稱
    pub supplier: String,

    /// 包裝規格數量
    pub pack_size: f64,

    /// 包裝規格單位
    pub pack_unit: MeasureUnit,

    /// 售價（AUD）
    pub price: f64,

    /// 運費（AUD）
    pub shipping: f64,

    /// 商品頁面網址
    pub url: Option<String>,

    /// 價格更新日期
    pub updated: Option<NaiveDate>,
}

impl SupplierOffer {
    /// 創建新的供應商報價
    pub fn new(supplier: String, pack_size: f64, pack_unit: MeasureUnit, price: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            supplier,
            pack_size,
            pack_unit,
            price,
            shipping: 0.0,
            url: None,
            updated: None,
        }
    }

    /// 建構器模式：設置運費
    pub fn with_shipping(mut self, shipping: f64) -> Self {
        self.shipping = shipping;
        self
    }

    /// 建構器模式：設置商品頁面網址
    pub fn with_url(mut self, url: String) -> Self {
        self.url = Some(url);
        self
    }

    /// 建構器模式：設置更新日期
    pub fn with_updated(mut self, updated: NaiveDate) -> Self {
        self.updated = Some(updated);
        self
    }

    /// 到貨總價（售價 + 運費）
    pub fn landed_cost(&self) -> f64 {
        self.price + self.shipping
    }
}

/// 原料目錄：原料名稱 → 供應商報價清單
///
/// 使用 BTreeMap 保持原料名稱排序，列表呈現時不需再排
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    ingredients: BTreeMap<String, Vec<SupplierOffer>>,
}

impl Catalog {
    /// 創建空的原料目錄
    pub fn new() -> Self {
        Self::default()
    }

    /// 查詢某原料的報價清單（目錄中沒有該原料時回傳 None）
    pub fn offers_for(&self, ingredient: &str) -> Option<&[SupplierOffer]> {
        self.ingredients.get(ingredient).map(|offers| offers.as_slice())
    }

    /// 登錄原料（無報價也可先建檔）
    pub fn add_ingredient(&mut self, name: String) {
        self.ingredients.entry(name).or_default();
    }

    /// 為原料添加一筆報價（原料不存在時自動建檔）
    pub fn add_offer(&mut self, ingredient: &str, offer: SupplierOffer) {
        self.ingredients
            .entry(ingredient.to_string())
            .or_default()
            .push(offer);
    }

    /// 刪除原料與其全部報價
    pub fn remove_ingredient(&mut self, ingredient: &str) -> bool {
        self.ingredients.remove(ingredient).is_some()
    }

    /// 刪除一筆報價；最後一筆刪除後原料一併移除
    pub fn remove_offer(&mut self, ingredient: &str, offer_id: Uuid) -> bool {
        let Some(offers) = self.ingredients.get_mut(ingredient) else {
            return false;
        };
        let before = offers.len();
        offers.retain(|offer| offer.id != offer_id);
        let removed = offers.len() < before;
        if offers.is_empty() {
            self.ingredients.remove(ingredient);
        }
        removed
    }

    /// 原料名稱（已排序）
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.keys().map(|name| name.as_str())
    }

    /// 依關鍵字搜尋原料（比對原料名稱或供應商名稱，不分大小寫）
    pub fn search(&self, keyword: &str) -> Vec<&str> {
        let needle = keyword.trim().to_lowercase();
        if needle.is_empty() {
            return self.ingredient_names().collect();
        }
        self.ingredients
            .iter()
            .filter(|(name, offers)| {
                name.to_lowercase().contains(&needle)
                    || offers
                        .iter()
                        .any(|offer| offer.supplier.to_lowercase().contains(&needle))
            })
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// 目錄中的原料數
    pub fn len(&self) -> usize {
        self.ingredients.len()
    }

    /// 檢查目錄是否為空
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty()
    }
}
