//! Length units.
//!
//! The canonical scaling unit for this dimension is [`LengthUnit::Meter`] (`ratio() == 1.0`). Lengths only appear
//! as observer heights, so the set of units is deliberately small.
//!
//! ```rust
//! use altaz_units::{LengthUnit, LengthValue};
//!
//! let h = LengthValue::kilometers(1.5).unwrap();
//! assert_eq!(h.in_meters(), 1500.0);
//! assert_eq!(h.to(LengthUnit::Meter).magnitude(), 1500.0);
//! ```

use crate::{Dimension, Quantity, QuantityError, Unit};
use core::fmt;
use core::str::FromStr;

/// Unit tag for lengths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    /// Metre (canonical).
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Meter,
    /// Kilometre (`1000 m`).
    #[cfg_attr(feature = "serde", serde(rename = "km"))]
    Kilometer,
}

impl Unit for LengthUnit {
    const DIMENSION: Dimension = Dimension::Length;
    const CANONICAL: Self = LengthUnit::Meter;

    fn ratio(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Ok(LengthUnit::Meter),
            "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Ok(LengthUnit::Kilometer),
            _ => Err(QuantityError::UnknownUnit(s.to_string())),
        }
    }
}

/// A length with an explicit unit.
pub type LengthValue = Quantity<LengthUnit>;

impl LengthValue {
    /// Length in metres.
    pub fn meters(value: f64) -> Result<Self, QuantityError> {
        Self::new(value, LengthUnit::Meter)
    }

    /// Length in kilometres.
    pub fn kilometers(value: f64) -> Result<Self, QuantityError> {
        Self::new(value, LengthUnit::Kilometer)
    }

    /// Magnitude in metres.
    #[inline]
    pub fn in_meters(self) -> f64 {
        self.canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilometer_to_meter() {
        let km = LengthValue::kilometers(0.038).unwrap();
        assert!((km.in_meters() - 38.0).abs() < 1e-9);
    }

    #[test]
    fn mixed_unit_sum_keeps_left_unit() {
        let sum = LengthValue::meters(500.0).unwrap() + LengthValue::kilometers(1.0).unwrap();
        assert_eq!(sum.unit(), LengthUnit::Meter);
        assert_eq!(sum.magnitude(), 1500.0);
    }

    #[test]
    fn parse_symbols() {
        assert_eq!("m".parse::<LengthUnit>().unwrap(), LengthUnit::Meter);
        assert_eq!("Kilometres".parse::<LengthUnit>().unwrap(), LengthUnit::Kilometer);
        assert!(matches!("ft".parse::<LengthUnit>(), Err(QuantityError::UnknownUnit(_))));
    }

    #[test]
    fn dimension_is_length() {
        assert_eq!(LengthUnit::Kilometer.dimension(), Dimension::Length);
    }
}
