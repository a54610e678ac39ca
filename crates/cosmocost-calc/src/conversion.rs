//! 單位換算

use cosmocost_core::MeasureUnit;

/// 單位換算器：把質量/體積量值統一換算成克
///
/// 整個計算引擎都以克為基準質量；這裡是唯一的換算點
pub struct UnitConverter;

impl UnitConverter {
    /// 質量單位換算成克；體積單位換算成毫升
    pub fn to_grams(value: f64, unit: MeasureUnit) -> f64 {
        match unit {
            MeasureUnit::Gram | MeasureUnit::Milliliter => value,
            MeasureUnit::Kilogram | MeasureUnit::Liter => value * 1000.0,
        }
    }

    /// 換算成基準質量（克）
    ///
    /// 質量單位直接換算；體積單位先換算成毫升再乘上密度。
    /// 密度缺漏、非正或非有限值一律視為 1，避免下游出現除法異常
    pub fn to_base_mass(value: f64, unit: MeasureUnit, density: f64) -> f64 {
        if unit.is_mass() {
            return Self::to_grams(value, unit);
        }
        let ml = Self::to_grams(value, unit);
        ml * Self::effective_density(density)
    }

    fn effective_density(density: f64) -> f64 {
        if density.is_finite() && density > 0.0 {
            density
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(500.0, MeasureUnit::Gram, 500.0)]
    #[case(2.5, MeasureUnit::Kilogram, 2500.0)]
    #[case(250.0, MeasureUnit::Milliliter, 250.0)]
    #[case(1.2, MeasureUnit::Liter, 1200.0)]
    fn test_to_grams(#[case] value: f64, #[case] unit: MeasureUnit, #[case] expected: f64) {
        assert_eq!(UnitConverter::to_grams(value, unit), expected);
    }

    #[test]
    fn test_volume_uses_density() {
        // 500 mL，密度 0.9 g/mL → 450 g
        assert_eq!(
            UnitConverter::to_base_mass(500.0, MeasureUnit::Milliliter, 0.9),
            450.0
        );
        assert_eq!(
            UnitConverter::to_base_mass(2.0, MeasureUnit::Liter, 0.9),
            1800.0
        );
    }

    #[test]
    fn test_zero_density_falls_back_to_one() {
        // 非正密度視為 1
        assert_eq!(
            UnitConverter::to_base_mass(300.0, MeasureUnit::Milliliter, 0.0),
            300.0
        );
        assert_eq!(
            UnitConverter::to_base_mass(300.0, MeasureUnit::Milliliter, -2.0),
            300.0
        );
        assert_eq!(
            UnitConverter::to_base_mass(300.0, MeasureUnit::Milliliter, f64::NAN),
            300.0
        );
    }

    proptest! {
        #[test]
        fn prop_mass_units_ignore_density(m in 0.001f64..1e6, d in 0.001f64..20.0) {
            prop_assert_eq!(UnitConverter::to_base_mass(m, MeasureUnit::Gram, d), m);
            prop_assert_eq!(
                UnitConverter::to_base_mass(m, MeasureUnit::Kilogram, d),
                m * 1000.0
            );
        }

        #[test]
        fn prop_volume_units_scale_with_density(v in 0.001f64..1e6, d in 0.001f64..20.0) {
            prop_assert_eq!(UnitConverter::to_base_mass(v, MeasureUnit::Milliliter, d), v * d);
            prop_assert_eq!(
                UnitConverter::to_base_mass(v, MeasureUnit::Liter, d),
                v * 1000.0 * d
            );
        }
    }
}
