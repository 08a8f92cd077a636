//! Angular quantities and utilities.
//!
//! This module defines the [`AngleUnit`] tag, the [`AngleValue`] alias, and a set of convenience methods on
//! angles: sexagesimal constructors, trigonometry, and range wrapping.
//!
//! # Design overview
//!
//! * **Canonical unit:** degrees are the canonical *scaling* unit. `AngleUnit::Degree.ratio() == 1.0`, and every
//!   other unit expresses how many degrees correspond to one of that unit: `1° = 60′ = 3600″`, one hour of angle
//!   is `15°`, and one radian is `180/π` degrees.
//! * **Trigonometry:** `sin`, `cos`, `tan`, and `sin_cos` convert to radians internally and then call the `f64`
//!   intrinsic.
//! * **Wrapping helpers:** [`AngleValue::wrap_pos`] maps into `[0, full turn)`, [`AngleValue::wrap_signed`] into
//!   `(-half turn, half turn]`, and [`AngleValue::normalized_to_range`] into any half-open range. Results keep the
//!   unit of the receiver.
//!
//! ## Examples
//!
//! ```rust
//! use altaz_units::{AngleUnit, AngleValue};
//!
//! let az = AngleValue::degrees(370.0).unwrap().wrap_pos();
//! assert!((az.magnitude() - 10.0).abs() < 1e-12);
//!
//! let ra = AngleValue::from_hms(6, 45, 8.917).unwrap();
//! assert_eq!(ra.unit(), AngleUnit::HourAngle);
//! assert!((ra.in_degrees() - 101.287154).abs() < 1e-6);
//! ```

use crate::{Dimension, Quantity, QuantityError, Unit};
use core::f64::consts::PI;
use core::fmt;
use core::str::FromStr;

/// Unit tag for angles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AngleUnit {
    /// Degree (canonical).
    #[cfg_attr(feature = "serde", serde(rename = "deg"))]
    Degree,
    /// Arcminute (`1/60` degree).
    #[cfg_attr(feature = "serde", serde(rename = "arcmin"))]
    Arcminute,
    /// Arcsecond (`1/3600` degree).
    #[cfg_attr(feature = "serde", serde(rename = "arcsec"))]
    Arcsecond,
    /// Radian (`180/π` degrees).
    #[cfg_attr(feature = "serde", serde(rename = "rad"))]
    Radian,
    /// Hour of angle (`15` degrees).
    #[cfg_attr(feature = "serde", serde(rename = "hourangle"))]
    HourAngle,
}

impl AngleUnit {
    /// Every angular unit, in declaration order.
    pub const ALL: [AngleUnit; 5] = [
        AngleUnit::Degree,
        AngleUnit::Arcminute,
        AngleUnit::Arcsecond,
        AngleUnit::Radian,
        AngleUnit::HourAngle,
    ];

    /// One full revolution expressed in this unit.
    pub fn full_turn(self) -> f64 {
        match self {
            AngleUnit::Degree => 360.0,
            AngleUnit::Arcminute => 21_600.0,
            AngleUnit::Arcsecond => 1_296_000.0,
            AngleUnit::Radian => 2.0 * PI,
            AngleUnit::HourAngle => 24.0,
        }
    }

    /// Half a revolution expressed in this unit.
    pub fn half_turn(self) -> f64 {
        0.5 * self.full_turn()
    }
}

impl Unit for AngleUnit {
    const DIMENSION: Dimension = Dimension::Angular;
    const CANONICAL: Self = AngleUnit::Degree;

    fn ratio(self) -> f64 {
        match self {
            AngleUnit::Degree => 1.0,
            AngleUnit::Arcminute => 1.0 / 60.0,
            AngleUnit::Arcsecond => 1.0 / 3600.0,
            AngleUnit::Radian => 180.0 / PI,
            AngleUnit::HourAngle => 15.0,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            AngleUnit::Degree => "deg",
            AngleUnit::Arcminute => "arcmin",
            AngleUnit::Arcsecond => "arcsec",
            AngleUnit::Radian => "rad",
            AngleUnit::HourAngle => "hourangle",
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for AngleUnit {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deg" | "degree" | "degrees" => Ok(AngleUnit::Degree),
            "arcmin" | "arcminute" | "arcminutes" => Ok(AngleUnit::Arcminute),
            "arcsec" | "arcsecond" | "arcseconds" => Ok(AngleUnit::Arcsecond),
            "rad" | "radian" | "radians" => Ok(AngleUnit::Radian),
            "hourangle" | "h" | "hour" | "hours" => Ok(AngleUnit::HourAngle),
            _ => Err(QuantityError::UnknownUnit(s.to_string())),
        }
    }
}

/// An angle with an explicit unit.
pub type AngleValue = Quantity<AngleUnit>;

#[inline]
fn wrap_into(x: f64, low: f64, span: f64) -> f64 {
    let mut r = (x - low).rem_euclid(span);
    // rem_euclid can round up to `span` for tiny negative inputs
    if r >= span {
        r = 0.0;
    }
    low + r
}

fn sexagesimal(sign: f64, major: f64, minor: u32, seconds: f64) -> f64 {
    sign * (major + minor as f64 / 60.0 + seconds / 3600.0)
}

impl AngleValue {
    /// Angle in degrees.
    pub fn degrees(value: f64) -> Result<Self, QuantityError> {
        Self::new(value, AngleUnit::Degree)
    }

    /// Angle in radians.
    pub fn radians(value: f64) -> Result<Self, QuantityError> {
        Self::new(value, AngleUnit::Radian)
    }

    /// Angle in hours of angle.
    pub fn hours(value: f64) -> Result<Self, QuantityError> {
        Self::new(value, AngleUnit::HourAngle)
    }

    /// Angle in arcminutes.
    pub fn arcminutes(value: f64) -> Result<Self, QuantityError> {
        Self::new(value, AngleUnit::Arcminute)
    }

    /// Angle in arcseconds.
    pub fn arcseconds(value: f64) -> Result<Self, QuantityError> {
        Self::new(value, AngleUnit::Arcsecond)
    }

    /// Construct from **DMS** components (`deg`, `min`, `sec`), in degrees.
    ///
    /// Sign is taken from `deg`; `min` and `sec` are magnitudes. Use [`Self::from_dms_sign`] for angles between
    /// `-1°` and `0°`.
    ///
    /// ```rust
    /// use altaz_units::AngleValue;
    /// let lat = AngleValue::from_dms(48, 51, 36.0).unwrap();
    /// assert!((lat.magnitude() - 48.86).abs() < 1e-12);
    /// ```
    pub fn from_dms(deg: i32, min: u32, sec: f64) -> Result<Self, QuantityError> {
        let sign = if deg < 0 { -1.0 } else { 1.0 };
        Self::degrees(sexagesimal(sign, deg.unsigned_abs() as f64, min, sec.abs()))
    }

    /// Construct from an explicit sign and DMS magnitudes. A negative `sign` yields a negative angle.
    pub fn from_dms_sign(sign: i8, deg: u32, min: u32, sec: f64) -> Result<Self, QuantityError> {
        let s = if sign < 0 { -1.0 } else { 1.0 };
        Self::degrees(sexagesimal(s, deg as f64, min, sec.abs()))
    }

    /// Construct from **HMS** components, in hours of angle.
    ///
    /// ```rust
    /// use altaz_units::AngleValue;
    /// let ra = AngleValue::from_hms(2, 7, 10.0).unwrap();
    /// assert!((ra.in_degrees() - 31.791666666666668).abs() < 1e-12);
    /// ```
    pub fn from_hms(hours: i32, minutes: u32, seconds: f64) -> Result<Self, QuantityError> {
        let sign = if hours < 0 { -1.0 } else { 1.0 };
        Self::hours(sexagesimal(sign, hours.unsigned_abs() as f64, minutes, seconds.abs()))
    }

    /// Magnitude in degrees.
    #[inline]
    pub fn in_degrees(self) -> f64 {
        self.canonical()
    }

    /// Magnitude in radians.
    #[inline]
    pub fn in_radians(self) -> f64 {
        self.to(AngleUnit::Radian).magnitude()
    }

    /// Magnitude in hours of angle.
    #[inline]
    pub fn in_hours(self) -> f64 {
        self.to(AngleUnit::HourAngle).magnitude()
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.in_radians().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.in_radians().cos()
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.in_radians().tan()
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        self.in_radians().sin_cos()
    }

    /// Wrap into the positive range `[0, full turn)` of the receiver's unit.
    pub fn wrap_pos(self) -> Self {
        let full = self.unit().full_turn();
        Self::new_unchecked(wrap_into(self.magnitude(), 0.0, full), self.unit())
    }

    /// Wrap into the signed range `(-half turn, half turn]`.
    ///
    /// *Upper bound is inclusive*; lower bound is exclusive.
    pub fn wrap_signed(self) -> Self {
        let full = self.unit().full_turn();
        let half = 0.5 * full;
        let y = (self.magnitude() + half).rem_euclid(full) - half;
        let norm = if y <= -half { y + full } else { y };
        Self::new_unchecked(norm, self.unit())
    }

    /// Reduce into `[low, high)` modulo the span of the range. The result keeps the receiver's unit.
    ///
    /// ```rust
    /// use altaz_units::AngleValue;
    ///
    /// let lo = AngleValue::degrees(-180.0).unwrap();
    /// let hi = AngleValue::degrees(180.0).unwrap();
    /// let a = AngleValue::degrees(190.0).unwrap().normalized_to_range(lo, hi).unwrap();
    /// assert!((a.magnitude() + 170.0).abs() < 1e-12);
    /// ```
    pub fn normalized_to_range(self, low: Self, high: Self) -> Result<Self, QuantityError> {
        let lo = low.to(self.unit()).magnitude();
        let hi = high.to(self.unit()).magnitude();
        if !(hi > lo) {
            return Err(QuantityError::EmptyRange { low: lo, high: hi });
        }
        let mut v = wrap_into(self.magnitude(), lo, hi - lo);
        if v >= hi {
            v = lo;
        }
        Ok(Self::new_unchecked(v, self.unit()))
    }

    /// Signed smallest angular separation `self - other`, in `(-half turn, half turn]`.
    pub fn signed_separation(self, other: Self) -> Self {
        (self - other).wrap_signed()
    }

    /// Absolute smallest angular separation.
    pub fn abs_separation(self, other: Self) -> Self {
        self.signed_separation(other).abs()
    }
}
