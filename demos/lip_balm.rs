//! 護唇膏批次成本與定價示例

use cosmocost::{
    BatchParameters, Catalog, CostCalculator, Formula, MeasureUnit, PricingOptions, SupplierOffer,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    println!("=== 護唇膏批次成本示例 ===\n");

    // 建立原料目錄
    let mut catalog = Catalog::new();
    catalog.add_offer(
        "Beeswax",
        SupplierOffer::new("Heirloom Body Care".to_string(), 500.0, MeasureUnit::Gram, 14.0)
            .with_shipping(3.0),
    );
    catalog.add_offer(
        "Beeswax",
        SupplierOffer::new("New Directions AU".to_string(), 1.0, MeasureUnit::Kilogram, 26.0)
            .with_shipping(0.0),
    );
    catalog.add_offer(
        "Coconut Oil",
        SupplierOffer::new("Escentials of Australia".to_string(), 1.0, MeasureUnit::Liter, 12.0)
            .with_shipping(2.0),
    );
    catalog.add_offer(
        "Shea Butter",
        SupplierOffer::new("New Directions AU".to_string(), 1000.0, MeasureUnit::Gram, 22.0)
            .with_shipping(5.0),
    );

    // 配方
    let formula = Formula::new("Honey Lip Balm".to_string())
        .with_row("Beeswax", 30.0)
        .with_row("Coconut Oil", 45.0)
        .with_row("Shea Butter", 20.0)
        .with_row("Vanilla Extract", 5.0); // 目錄沒有這項：逐列標示缺報價

    println!("配方: {}（合計 {:.1}%）", formula.name, formula.percent_total());

    // 批次參數：1.5kg 批次，8% 損耗，每條 12g
    let params = BatchParameters::new(1.5, MeasureUnit::Kilogram, 12.0, MeasureUnit::Gram)
        .with_wastage(0.08)
        .with_container_cost(0.45)
        .with_label_cost(0.18)
        .with_labor_cost(40.0)
        .with_overhead_cost(15.0)
        .with_gst(true);

    let calculator = CostCalculator::new(catalog);
    let quote = calculator.quote(&formula, &params, &PricingOptions::default())?;

    let breakdown = &quote.breakdown;
    println!(
        "\n批次 {:.0}g，可用 {:.0}g，產出 {} 條（每條 {:.0}g）\n",
        breakdown.batch_grams, breakdown.usable_grams, breakdown.units, breakdown.fill_grams
    );

    println!("原料用量與成本:");
    for row in &breakdown.rows {
        match row.cost_per_kg {
            Some(cost_per_kg) => println!(
                "  - {:<16} {:>7.1}g  {:>6.2} $/kg（{}）  ${:.2}",
                row.ingredient,
                row.needed_grams,
                cost_per_kg,
                row.supplier.as_deref().unwrap_or("-"),
                row.cost
            ),
            None => println!(
                "  - {:<16} {:>7.1}g  （缺報價，以 0 計入）",
                row.ingredient, row.needed_grams
            ),
        }
    }

    println!("\n每單位成本:");
    println!("  材料      ${:.2}", breakdown.material_per_unit);
    println!("  包裝      ${:.2}", breakdown.packaging_per_unit);
    println!("  人工      ${:.2}", breakdown.labor_per_unit);
    println!("  製造費用  ${:.2}", breakdown.overhead_per_unit);
    println!("  COGS（未稅）${:.2}", breakdown.cogs);
    println!("  COGS（含稅）${:.2}", breakdown.cogs_incl_gst);

    println!("\n建議售價:");
    for price_quote in &quote.pricing.quotes {
        println!(
            "  {:<20} ${:>6.2}（隱含毛利率 {}%）",
            price_quote.strategy.label(),
            price_quote.price,
            price_quote.implied_margin_percent
        );
    }

    Ok(())
}
