//! 輸入驗證層
//!
//! 把介面層的原始文字欄位轉成型別化、範圍檢核過的數值。
//! 核心計算只接受這裡產出的結構，不再自行解析字串。

use chrono::NaiveDate;

use crate::batch::BatchParameters;
use crate::catalog::SupplierOffer;
use crate::formula::{Formula, FormulaRow};
use crate::unit::MeasureUnit;
use crate::{CostError, Result};

/// 解析數字欄位；空欄位視為 0
fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CostError::InvalidInput {
            field,
            value: raw.to_string(),
        }),
    }
}

/// 解析單位欄位
fn parse_unit(field: &'static str, raw: &str) -> Result<MeasureUnit> {
    MeasureUnit::parse(raw).ok_or_else(|| CostError::InvalidInput {
        field,
        value: raw.to_string(),
    })
}

fn require_positive(field: &'static str, value: f64, raw: &str) -> Result<f64> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(CostError::InvalidInput {
            field,
            value: raw.to_string(),
        })
    }
}

fn require_non_negative(field: &'static str, value: f64, raw: &str) -> Result<f64> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(CostError::InvalidInput {
            field,
            value: raw.to_string(),
        })
    }
}

/// 批次參數表單（原始文字欄位）
#[derive(Debug, Clone, Default)]
pub struct BatchParametersForm {
    pub density: String,
    pub batch_size: String,
    pub batch_unit: String,
    /// 損耗以百分比輸入（例如 "10" 代表 10%）
    pub wastage_percent: String,
    pub fill_size: String,
    pub fill_unit: String,
    pub container_cost: String,
    pub label_cost: String,
    pub other_pack_cost: String,
    pub labor_cost_per_batch: String,
    pub overhead_cost_per_batch: String,
    pub gst_enabled: bool,
}

impl BatchParametersForm {
    /// 解析並檢核為批次參數
    ///
    /// 密度不做範圍檢核：非正或缺漏的密度由單位換算器視為 1
    pub fn parse(&self) -> Result<BatchParameters> {
        let batch_size = parse_number("batch_size", &self.batch_size)?;
        let batch_size = require_positive("batch_size", batch_size, &self.batch_size)?;
        let batch_unit = parse_unit("batch_unit", &self.batch_unit)?;

        let wastage_percent = parse_number("wastage_percent", &self.wastage_percent)?;
        if !(0.0..100.0).contains(&wastage_percent) {
            return Err(CostError::InvalidInput {
                field: "wastage_percent",
                value: self.wastage_percent.clone(),
            });
        }

        let fill_size = parse_number("fill_size", &self.fill_size)?;
        let fill_size = require_positive("fill_size", fill_size, &self.fill_size)?;
        let fill_unit = parse_unit("fill_unit", &self.fill_unit)?;

        let container_cost = parse_number("container_cost", &self.container_cost)?;
        let label_cost = parse_number("label_cost", &self.label_cost)?;
        let other_pack_cost = parse_number("other_pack_cost", &self.other_pack_cost)?;
        let labor = parse_number("labor_cost_per_batch", &self.labor_cost_per_batch)?;
        let overhead = parse_number("overhead_cost_per_batch", &self.overhead_cost_per_batch)?;

        Ok(
            BatchParameters::new(batch_size, batch_unit, fill_size, fill_unit)
                .with_density(parse_number("density", &self.density)?)
                .with_wastage(wastage_percent / 100.0)
                .with_container_cost(require_non_negative(
                    "container_cost",
                    container_cost,
                    &self.container_cost,
                )?)
                .with_label_cost(require_non_negative(
                    "label_cost",
                    label_cost,
                    &self.label_cost,
                )?)
                .with_other_pack_cost(require_non_negative(
                    "other_pack_cost",
                    other_pack_cost,
                    &self.other_pack_cost,
                )?)
                .with_labor_cost(require_non_negative(
                    "labor_cost_per_batch",
                    labor,
                    &self.labor_cost_per_batch,
                )?)
                .with_overhead_cost(require_non_negative(
                    "overhead_cost_per_batch",
                    overhead,
                    &self.overhead_cost_per_batch,
                )?)
                .with_gst(self.gst_enabled),
        )
    }
}

/// 配方成分列表單
#[derive(Debug, Clone, Default)]
pub struct FormulaRowForm {
    pub ingredient: String,
    pub percentage: String,
}

/// 配方表單
#[derive(Debug, Clone, Default)]
pub struct FormulaForm {
    pub name: String,
    pub rows: Vec<FormulaRowForm>,
}

impl FormulaForm {
    /// 解析並檢核為配方
    ///
    /// 未命名或佔比非正的列直接剔除；佔比超過 100 視為輸入錯誤
    pub fn parse(&self) -> Result<Formula> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CostError::InvalidInput {
                field: "name",
                value: self.name.clone(),
            });
        }

        let mut formula = Formula::new(name.to_string());
        for row in &self.rows {
            let ingredient = row.ingredient.trim();
            let percentage = parse_number("percentage", &row.percentage)?;
            if ingredient.is_empty() || percentage <= 0.0 {
                continue;
            }
            if percentage > 100.0 {
                return Err(CostError::InvalidInput {
                    field: "percentage",
                    value: row.percentage.clone(),
                });
            }
            formula.add_row(FormulaRow::new(ingredient.to_string(), percentage));
        }
        Ok(formula)
    }
}

/// 供應商報價表單
#[derive(Debug, Clone, Default)]
pub struct OfferForm {
    pub supplier: String,
    pub pack_size: String,
    pub pack_unit: String,
    pub price: String,
    pub shipping: String,
    pub url: String,
    /// ISO 日期（YYYY-MM-DD），空欄位代表未記錄
    pub updated: String,
}

impl OfferForm {
    /// 解析並檢核為供應商報價
    ///
    /// 包裝規格允許為 0：這類報價在比較時的有效單價是 +∞，
    /// 由報價評估與批次計算標示為不可用，而不是輸入錯誤
    pub fn parse(&self) -> Result<SupplierOffer> {
        let supplier = match self.supplier.trim() {
            "" => "Unknown Supplier".to_string(),
            name => name.to_string(),
        };

        let pack_size = parse_number("pack_size", &self.pack_size)?;
        let pack_size = require_non_negative("pack_size", pack_size, &self.pack_size)?;
        let pack_unit = parse_unit("pack_unit", &self.pack_unit)?;
        let price = parse_number("price", &self.price)?;
        let price = require_non_negative("price", price, &self.price)?;
        let shipping = parse_number("shipping", &self.shipping)?;
        let shipping = require_non_negative("shipping", shipping, &self.shipping)?;

        let mut offer =
            SupplierOffer::new(supplier, pack_size, pack_unit, price).with_shipping(shipping);

        if !self.url.trim().is_empty() {
            offer = offer.with_url(self.url.trim().to_string());
        }
        if !self.updated.trim().is_empty() {
            let updated = NaiveDate::parse_from_str(self.updated.trim(), "%Y-%m-%d").map_err(
                |_| CostError::InvalidInput {
                    field: "updated",
                    value: self.updated.clone(),
                },
            )?;
            offer = offer.with_updated(updated);
        }
        Ok(offer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn batch_form() -> BatchParametersForm {
        BatchParametersForm {
            density: "1".to_string(),
            batch_size: "1000".to_string(),
            batch_unit: "g".to_string(),
            wastage_percent: "10".to_string(),
            fill_size: "50".to_string(),
            fill_unit: "g".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_batch_form() {
        let params = batch_form().parse().unwrap();

        assert_eq!(params.batch_size, 1000.0);
        assert_eq!(params.batch_unit, MeasureUnit::Gram);
        assert!((params.wastage - 0.10).abs() < 1e-12);
        assert_eq!(params.fill_size, 50.0);
    }

    #[test]
    fn test_empty_cost_fields_read_as_zero() {
        let params = batch_form().parse().unwrap();

        assert_eq!(params.container_cost, 0.0);
        assert_eq!(params.labor_cost_per_batch, 0.0);
    }

    #[rstest]
    #[case("0")]
    #[case("-5")]
    #[case("abc")]
    fn test_batch_size_must_be_positive_number(#[case] raw: &str) {
        let mut form = batch_form();
        form.batch_size = raw.to_string();

        assert!(matches!(
            form.parse(),
            Err(CostError::InvalidInput {
                field: "batch_size",
                ..
            })
        ));
    }

    #[rstest]
    #[case("100")]
    #[case("-1")]
    fn test_wastage_percent_range(#[case] raw: &str) {
        let mut form = batch_form();
        form.wastage_percent = raw.to_string();

        assert!(form.parse().is_err());
    }

    #[test]
    fn test_non_positive_density_is_not_an_input_error() {
        let mut form = batch_form();
        form.density = "0".to_string();

        // 非正密度交給單位換算器以 1 處理，不在表單層擋下
        assert_eq!(form.parse().unwrap().density, 0.0);
    }

    #[test]
    fn test_formula_form_filters_blank_rows() {
        let form = FormulaForm {
            name: "Lip Balm".to_string(),
            rows: vec![
                FormulaRowForm {
                    ingredient: "Beeswax".to_string(),
                    percentage: "30".to_string(),
                },
                FormulaRowForm {
                    ingredient: "".to_string(),
                    percentage: "50".to_string(),
                },
                FormulaRowForm {
                    ingredient: "Shea Butter".to_string(),
                    percentage: "0".to_string(),
                },
            ],
        };

        let formula = form.parse().unwrap();
        assert_eq!(formula.rows.len(), 1);
        assert_eq!(formula.rows[0].ingredient, "Beeswax");
    }

    #[test]
    fn test_formula_form_requires_name() {
        let form = FormulaForm {
            name: "  ".to_string(),
            rows: Vec::new(),
        };

        assert!(form.parse().is_err());
    }

    #[test]
    fn test_offer_form_defaults() {
        let form = OfferForm {
            supplier: "".to_string(),
            pack_size: "0".to_string(),
            pack_unit: "g".to_string(),
            price: "12.50".to_string(),
            shipping: "".to_string(),
            url: "".to_string(),
            updated: "2026-07-01".to_string(),
        };

        let offer = form.parse().unwrap();
        assert_eq!(offer.supplier, "Unknown Supplier");
        // 零包裝規格放行，由下游標示為不可用
        assert_eq!(offer.pack_size, 0.0);
        assert_eq!(offer.shipping, 0.0);
        assert_eq!(
            offer.updated,
            NaiveDate::from_ymd_opt(2026, 7, 1)
        );
        assert!(offer.url.is_none());
    }

    #[test]
    fn test_offer_form_rejects_bad_date() {
        let form = OfferForm {
            supplier: "A".to_string(),
            pack_size: "1000".to_string(),
            pack_unit: "g".to_string(),
            price: "10".to_string(),
            shipping: "0".to_string(),
            url: String::new(),
            updated: "last tuesday".to_string(),
        };

        assert!(form.parse().is_err());
    }
}
