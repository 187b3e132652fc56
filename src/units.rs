//! Lengths carried by picture descriptors.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CSS reference resolution.
const PX_PER_INCH: f64 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Unit {
    /// 1/1440 inch.
    Twip,
    HalfPoint,
    Point,
    Pixel,
    Inch,
}

impl Unit {
    fn per_inch(self) -> f64 {
        match self {
            Unit::Twip => 1440.0,
            Unit::HalfPoint => 144.0,
            Unit::Point => 72.0,
            Unit::Pixel => PX_PER_INCH,
            Unit::Inch => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitValue {
    pub value: f64,
    pub unit: Unit,
}

impl UnitValue {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn twips(value: f64) -> Self {
        Self::new(value, Unit::Twip)
    }

    pub fn pixels(value: f64) -> Self {
        Self::new(value, Unit::Pixel)
    }

    pub fn to_px(self) -> f64 {
        self.value * PX_PER_INCH / self.unit.per_inch()
    }

    /// Whole pixels, rounded; negative lengths clamp to zero.
    pub fn to_px_u32(self) -> u32 {
        self.to_px().round().clamp(0.0, f64::from(u32::MAX)) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_px() {
        assert_eq!(UnitValue::pixels(100.0).to_px_u32(), 100);
        assert_eq!(UnitValue::twips(1440.0).to_px_u32(), 96);
        assert_eq!(UnitValue::new(72.0, Unit::Point).to_px_u32(), 96);
        assert_eq!(UnitValue::new(24.0, Unit::HalfPoint).to_px_u32(), 16);
        assert_eq!(UnitValue::new(0.5, Unit::Inch).to_px_u32(), 48);
    }

    #[test]
    fn test_to_px_rounds_and_clamps() {
        assert_eq!(UnitValue::twips(22.0).to_px_u32(), 1);
        assert_eq!(UnitValue::pixels(-4.0).to_px_u32(), 0);
    }
}
