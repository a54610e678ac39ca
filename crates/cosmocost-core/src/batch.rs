//! 批次參數模型

use serde::{Deserialize, Serialize};

use crate::unit::MeasureUnit;

/// 商品服務稅稅率（GST 10%）
pub const GST_RATE: f64 = 0.10;

/// 批次與包裝參數
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchParameters {
    /// 成品密度（g/mL），體積單位換算質量時使用
    pub density: f64,

    /// 批次大小
    pub batch_size: f64,

    /// 批次大小單位
    pub batch_unit: MeasureUnit,

    /// 損耗比例 [0, 1)，扣除後為可用質量
    pub wastage: f64,

    /// 每單位填充量
    pub fill_size: f64,

    /// 填充量單位
    pub fill_unit: MeasureUnit,

    /// 容器單價
    pub container_cost: f64,

    /// 標籤單價
    pub label_cost: f64,

    /// 其他包材單價
    pub other_pack_cost: f64,

    /// 整批人工成本
    pub labor_cost_per_batch: f64,

    /// 整批製造費用
    pub overhead_cost_per_batch: f64,

    /// 是否計入 GST
    pub gst_enabled: bool,
}

impl BatchParameters {
    /// 創建新的批次參數（密度預設 1，其餘成本預設 0）
    pub fn new(
        batch_size: f64,
        batch_unit: MeasureUnit,
        fill_size: f64,
        fill_unit: MeasureUnit,
    ) -> Self {
        Self {
            density: 1.0,
            batch_size,
            batch_unit,
            wastage: 0.0,
            fill_size,
            fill_unit,
            container_cost: 0.0,
            label_cost: 0.0,
            other_pack_cost: 0.0,
            labor_cost_per_batch: 0.0,
            overhead_cost_per_batch: 0.0,
            gst_enabled: false,
        }
    }

    /// 建構器模式：設置密度
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// 建構器模式：設置損耗比例
    pub fn with_wastage(mut self, wastage: f64) -> Self {
        self.wastage = wastage;
        self
    }

    /// 建構器模式：設置容器單價
    pub fn with_container_cost(mut self, cost: f64) -> Self {
        self.container_cost = cost;
        self
    }

    /// 建構器模式：設置標籤單價
    pub fn with_label_cost(mut self, cost: f64) -> Self {
        self.label_cost = cost;
        self
    }

    /// 建構器模式：設置其他包材單價
    pub fn with_other_pack_cost(mut self, cost: f64) -> Self {
        self.other_pack_cost = cost;
        self
    }

    /// 建構器模式：設置整批人工成本
    pub fn with_labor_cost(mut self, cost: f64) -> Self {
        self.labor_cost_per_batch = cost;
        self
    }

    /// 建構器模式：設置整批製造費用
    pub fn with_overhead_cost(mut self, cost: f64) -> Self {
        self.overhead_cost_per_batch = cost;
        self
    }

    /// 建構器模式：設置是否計入 GST
    pub fn with_gst(mut self, enabled: bool) -> Self {
        self.gst_enabled = enabled;
        self
    }

    /// 每單位包裝成本（容器 + 標籤 + 其他包材）
    pub fn packaging_cost_per_unit(&self) -> f64 {
        self.container_cost + self.label_cost + self.other_pack_cost
    }
}
