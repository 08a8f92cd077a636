//! Dimension-erased quantities.

use crate::{AngleValue, Dimension, LengthValue, QuantityError, Unit};
use core::fmt;

/// A quantity whose dimension is only known at runtime.
///
/// Typed arithmetic (`AngleValue + AngleValue`) can never mix dimensions. `Measure` covers the cases where a value
/// arrives untyped, e.g. a parsed `"38 m"`, and combining it with the wrong kind of quantity has to fail at runtime
/// instead.
///
/// ```rust
/// use altaz_units::{AngleValue, LengthValue, Measure, QuantityError};
///
/// let a = Measure::from(AngleValue::degrees(1.0).unwrap());
/// let h = Measure::from(LengthValue::meters(38.0).unwrap());
/// assert!(matches!(a.checked_add(h), Err(QuantityError::DimensionMismatch { .. })));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measure {
    /// An angular quantity.
    Angle(AngleValue),
    /// A length.
    Length(LengthValue),
}

impl Measure {
    /// Dimension of the wrapped quantity.
    pub fn dimension(&self) -> Dimension {
        match self {
            Measure::Angle(a) => a.unit().dimension(),
            Measure::Length(l) => l.unit().dimension(),
        }
    }

    /// Adds two measures of the same dimension; the result keeps the left operand's unit.
    pub fn checked_add(self, rhs: Measure) -> Result<Measure, QuantityError> {
        match (self, rhs) {
            (Measure::Angle(a), Measure::Angle(b)) => Ok(Measure::Angle(a + b)),
            (Measure::Length(a), Measure::Length(b)) => Ok(Measure::Length(a + b)),
            (l, r) => Err(QuantityError::DimensionMismatch {
                left: l.dimension(),
                right: r.dimension(),
            }),
        }
    }

    /// Subtracts two measures of the same dimension; the result keeps the left operand's unit.
    pub fn checked_sub(self, rhs: Measure) -> Result<Measure, QuantityError> {
        match (self, rhs) {
            (Measure::Angle(a), Measure::Angle(b)) => Ok(Measure::Angle(a - b)),
            (Measure::Length(a), Measure::Length(b)) => Ok(Measure::Length(a - b)),
            (l, r) => Err(QuantityError::DimensionMismatch {
                left: l.dimension(),
                right: r.dimension(),
            }),
        }
    }

    /// The wrapped angle, if any.
    pub fn as_angle(&self) -> Option<AngleValue> {
        match self {
            Measure::Angle(a) => Some(*a),
            Measure::Length(_) => None,
        }
    }

    /// The wrapped length, if any.
    pub fn as_length(&self) -> Option<LengthValue> {
        match self {
            Measure::Length(l) => Some(*l),
            Measure::Angle(_) => None,
        }
    }

    /// Parses `"<magnitude> <symbol>"`, choosing the dimension from the unit symbol.
    ///
    /// ```rust
    /// use altaz_units::{Dimension, Measure};
    ///
    /// assert_eq!(Measure::parse("38 m").unwrap().dimension(), Dimension::Length);
    /// assert_eq!(Measure::parse("2 hourangle").unwrap().dimension(), Dimension::Angular);
    /// ```
    pub fn parse(s: &str) -> Result<Measure, QuantityError> {
        match s.parse::<AngleValue>() {
            Ok(a) => Ok(Measure::Angle(a)),
            Err(QuantityError::UnknownUnit(_)) => s.parse::<LengthValue>().map(Measure::Length),
            Err(e) => Err(e),
        }
    }
}

impl From<AngleValue> for Measure {
    fn from(value: AngleValue) -> Self {
        Measure::Angle(value)
    }
}

impl From<LengthValue> for Measure {
    fn from(value: LengthValue) -> Self {
        Measure::Length(value)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Measure::Angle(a) => fmt::Display::fmt(a, f),
            Measure::Length(l) => fmt::Display::fmt(l, f),
        }
    }
}
