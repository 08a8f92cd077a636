//! Quantity type and its implementations.

use crate::{QuantityError, Unit};
use core::cmp::Ordering;
use core::fmt;
use core::ops::*;
use core::str::FromStr;

/// A magnitude tagged with a unit.
///
/// `Quantity<U>` stores an `f64` together with the unit it is expressed in. The unit type `U` fixes the
/// dimension at compile time (an angle can never be added to a length), while the concrete variant is carried at
/// runtime so values keep the unit they were written in.
///
/// Equality (`==`) is structural: `60 arcmin` and `1 deg` are different representations. Use
/// [`Quantity::approx_eq`] or compare [`Quantity::canonical`] values when the representation should not matter.
/// Ordering compares canonical values.
///
/// # Examples
///
/// ```rust
/// use altaz_units::{LengthUnit, LengthValue};
///
/// let h = LengthValue::new(0.038, LengthUnit::Kilometer).unwrap();
/// assert!((h.to(LengthUnit::Meter).magnitude() - 38.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quantity<U: Unit> {
    magnitude: f64,
    unit: U,
}

impl<U: Unit> Quantity<U> {
    /// Creates a new quantity, rejecting NaN and infinite magnitudes.
    ///
    /// ```rust
    /// use altaz_units::{AngleUnit, AngleValue, QuantityError};
    ///
    /// assert!(AngleValue::new(12.0, AngleUnit::Degree).is_ok());
    /// assert!(matches!(
    ///     AngleValue::new(f64::NAN, AngleUnit::Degree),
    ///     Err(QuantityError::NonFinite { .. })
    /// ));
    /// ```
    pub fn new(magnitude: f64, unit: U) -> Result<Self, QuantityError> {
        if !magnitude.is_finite() {
            return Err(QuantityError::NonFinite {
                magnitude,
                symbol: unit.symbol(),
            });
        }
        Ok(Self { magnitude, unit })
    }

    /// Creates a quantity without the finiteness check.
    ///
    /// Intended for values computed from already validated quantities (trigonometric results, sums of finite
    /// values). The caller is responsible for the magnitude being finite.
    #[inline]
    pub fn new_unchecked(magnitude: f64, unit: U) -> Self {
        debug_assert!(magnitude.is_finite(), "non-finite magnitude {magnitude}");
        Self { magnitude, unit }
    }

    /// Creates a quantity in the canonical unit of the dimension.
    #[inline]
    pub fn canonical_value(magnitude: f64) -> Result<Self, QuantityError> {
        Self::new(magnitude, U::CANONICAL)
    }

    /// Returns the raw magnitude, expressed in [`Quantity::unit`].
    #[inline]
    pub const fn magnitude(self) -> f64 {
        self.magnitude
    }

    /// Returns the unit tag.
    #[inline]
    pub const fn unit(self) -> U {
        self.unit
    }

    /// Returns the magnitude expressed in the canonical unit of the dimension.
    #[inline]
    pub fn canonical(self) -> f64 {
        self.magnitude * self.unit.ratio()
    }

    /// Converts this quantity to another unit of the same dimension.
    ///
    /// ```rust
    /// use altaz_units::{AngleUnit, AngleValue};
    ///
    /// let one_hour = AngleValue::new(1.0, AngleUnit::HourAngle).unwrap();
    /// assert_eq!(one_hour.to(AngleUnit::Degree).magnitude(), 15.0);
    /// ```
    #[inline]
    pub fn to(self, unit: U) -> Self {
        if unit == self.unit {
            return self;
        }
        Self::new_unchecked(self.magnitude * (self.unit.ratio() / unit.ratio()), unit)
    }

    /// Returns the absolute value, keeping the unit.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new_unchecked(self.magnitude.abs(), self.unit)
    }

    /// Whether two quantities differ by at most `tolerance`, regardless of their units.
    ///
    /// ```rust
    /// use altaz_units::{AngleUnit, AngleValue};
    ///
    /// let a = AngleValue::degrees(1.0).unwrap();
    /// let b = AngleValue::new(60.0, AngleUnit::Arcminute).unwrap();
    /// let tol = AngleValue::new(1e-9, AngleUnit::Arcsecond).unwrap();
    /// assert!(a.approx_eq(b, tol));
    /// ```
    pub fn approx_eq(self, other: Self, tolerance: Self) -> bool {
        (self.canonical() - other.canonical()).abs() <= tolerance.canonical().abs()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<U: Unit> Add for Quantity<U> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new_unchecked(self.magnitude + rhs.to(self.unit).magnitude, self.unit)
    }
}

impl<U: Unit> AddAssign for Quantity<U> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<U: Unit> Sub for Quantity<U> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new_unchecked(self.magnitude - rhs.to(self.unit).magnitude, self.unit)
    }
}

impl<U: Unit> SubAssign for Quantity<U> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<U: Unit> Neg for Quantity<U> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new_unchecked(-self.magnitude, self.unit)
    }
}

impl<U: Unit> Mul<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new_unchecked(self.magnitude * rhs, self.unit)
    }
}

impl<U: Unit> Mul<Quantity<U>> for f64 {
    type Output = Quantity<U>;
    #[inline]
    fn mul(self, rhs: Quantity<U>) -> Self::Output {
        rhs * self
    }
}

impl<U: Unit> Div<f64> for Quantity<U> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new_unchecked(self.magnitude / rhs, self.unit)
    }
}

/// Same-dimension division yields a plain ratio.
impl<U: Unit> Div for Quantity<U> {
    type Output = f64;
    #[inline]
    fn div(self, rhs: Self) -> f64 {
        self.canonical() / rhs.canonical()
    }
}

impl<U: Unit> PartialOrd for Quantity<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.canonical().partial_cmp(&other.canonical())
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} {}", p, self.magnitude, self.unit.symbol()),
            None => write!(f, "{} {}", self.magnitude, self.unit.symbol()),
        }
    }
}

/// Parses `"<magnitude> <symbol>"`, e.g. `"38 m"` or `"-16.5 deg"`.
impl<U> FromStr for Quantity<U>
where
    U: Unit + FromStr<Err = QuantityError>,
{
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (magnitude, symbol) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| QuantityError::Malformed(s.to_string()))?;
        let magnitude: f64 = magnitude
            .parse()
            .map_err(|_| QuantityError::Malformed(s.to_string()))?;
        let unit: U = symbol.trim().parse()?;
        Self::new(magnitude, unit)
    }
}

#[cfg(test)]
mod tests {
    use crate::{AngleUnit, AngleValue, LengthUnit, LengthValue, QuantityError};
    use approx::assert_abs_diff_eq;

    #[test]
    fn rejects_non_finite() {
        assert!(AngleValue::new(f64::INFINITY, AngleUnit::Radian).is_err());
        assert!(LengthValue::new(f64::NEG_INFINITY, LengthUnit::Meter).is_err());
        let err = AngleValue::new(f64::NAN, AngleUnit::Arcsecond).unwrap_err();
        assert!(err.to_string().contains("arcsec"));
    }

    #[test]
    fn conversion_to_same_unit_is_identity() {
        let q = AngleValue::new(12.345, AngleUnit::Arcminute).unwrap();
        assert_eq!(q.to(AngleUnit::Arcminute), q);
    }

    #[test]
    fn add_normalizes_to_left_unit() {
        let a = AngleValue::new(1.0, AngleUnit::HourAngle).unwrap();
        let b = AngleValue::degrees(15.0).unwrap();
        let sum = a + b;
        assert_eq!(sum.unit(), AngleUnit::HourAngle);
        assert_abs_diff_eq!(sum.magnitude(), 2.0, epsilon = 1e-12);

        let diff = b - a;
        assert_eq!(diff.unit(), AngleUnit::Degree);
        assert_abs_diff_eq!(diff.magnitude(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn assign_operators() {
        let mut q = AngleValue::degrees(10.0).unwrap();
        q += AngleValue::new(30.0, AngleUnit::Arcminute).unwrap();
        assert_abs_diff_eq!(q.magnitude(), 10.5, epsilon = 1e-12);
        q -= AngleValue::new(1800.0, AngleUnit::Arcsecond).unwrap();
        assert_abs_diff_eq!(q.magnitude(), 10.0, epsilon = 1e-12);
    }

    #[test]
    fn scalar_operators() {
        let q = LengthValue::meters(38.0).unwrap();
        assert_eq!((q * 2.0).magnitude(), 76.0);
        assert_eq!((2.0 * q).magnitude(), 76.0);
        assert_eq!((q / 2.0).magnitude(), 19.0);
        assert_eq!((-q).magnitude(), -38.0);
    }

    #[test]
    fn ratio_of_same_dimension() {
        let a = AngleValue::degrees(30.0).unwrap();
        let b = AngleValue::new(1.0, AngleUnit::HourAngle).unwrap();
        assert_abs_diff_eq!(a / b, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn ordering_uses_canonical_value() {
        let a = AngleValue::new(61.0, AngleUnit::Arcminute).unwrap();
        let b = AngleValue::degrees(1.0).unwrap();
        assert!(a > b);
        assert!(b < a);
    }

    #[test]
    fn display_with_precision() {
        let q = AngleValue::degrees(101.28756).unwrap();
        assert_eq!(format!("{q:.2}"), "101.29 deg");
        assert_eq!(format!("{}", LengthValue::meters(38.0).unwrap()), "38 m");
    }

    #[test]
    fn parse_from_str() {
        let q: AngleValue = "-16.5 deg".parse().unwrap();
        assert_eq!(q.unit(), AngleUnit::Degree);
        assert_eq!(q.magnitude(), -16.5);

        let h: LengthValue = "  0.038 km ".parse().unwrap();
        assert_eq!(h.unit(), LengthUnit::Kilometer);

        assert!(matches!(
            "12.0".parse::<AngleValue>(),
            Err(QuantityError::Malformed(_))
        ));
        assert!(matches!(
            "12.0 furlong".parse::<AngleValue>(),
            Err(QuantityError::UnknownUnit(_))
        ));
        assert!(matches!(
            "abc deg".parse::<AngleValue>(),
            Err(QuantityError::Malformed(_))
        ));
    }
}
