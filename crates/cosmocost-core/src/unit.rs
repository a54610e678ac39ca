//! 計量單位

use serde::{Deserialize, Serialize};

/// 計量單位（質量或體積）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureUnit {
    /// 克
    #[serde(rename = "g")]
    Gram,
    /// 公斤
    #[serde(rename = "kg")]
    Kilogram,
    /// 毫升
    #[serde(rename = "mL")]
    Milliliter,
    /// 公升
    #[serde(rename = "L")]
    Liter,
}

impl MeasureUnit {
    /// 檢查是否為質量單位
    pub fn is_mass(&self) -> bool {
        matches!(self, MeasureUnit::Gram | MeasureUnit::Kilogram)
    }

    /// 檢查是否為體積單位
    pub fn is_volume(&self) -> bool {
        !self.is_mass()
    }

    /// 單位符號（與儲存格式一致）
    pub fn symbol(&self) -> &'static str {
        match self {
            MeasureUnit::Gram => "g",
            MeasureUnit::Kilogram => "kg",
            MeasureUnit::Milliliter => "mL",
            MeasureUnit::Liter => "L",
        }
    }

    /// 從字串解析單位
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "g" => Some(MeasureUnit::Gram),
            "kg" => Some(MeasureUnit::Kilogram),
            "mL" | "ml" => Some(MeasureUnit::Milliliter),
            "L" | "l" => Some(MeasureUnit::Liter),
            _ => None,
        }
    }
}

impl std::fmt::Display for MeasureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mass_volume_split() {
        assert!(MeasureUnit::Gram.is_mass());
        assert!(MeasureUnit::Kilogram.is_mass());
        assert!(MeasureUnit::Milliliter.is_volume());
        assert!(MeasureUnit::Liter.is_volume());
    }

    #[test]
    fn test_parse_symbols() {
        assert_eq!(MeasureUnit::parse("g"), Some(MeasureUnit::Gram));
        assert_eq!(MeasureUnit::parse("kg"), Some(MeasureUnit::Kilogram));
        assert_eq!(MeasureUnit::parse("mL"), Some(MeasureUnit::Milliliter));
        assert_eq!(MeasureUnit::parse("ml"), Some(MeasureUnit::Milliliter));
        assert_eq!(MeasureUnit::parse("L"), Some(MeasureUnit::Liter));
        assert_eq!(MeasureUnit::parse("oz"), None);
    }

    #[test]
    fn test_symbol_roundtrip() {
        for unit in [
            MeasureUnit::Gram,
            MeasureUnit::Kilogram,
            MeasureUnit::Milliliter,
            MeasureUnit::Liter,
        ] {
            assert_eq!(MeasureUnit::parse(unit.symbol()), Some(unit));
        }
    }
}
