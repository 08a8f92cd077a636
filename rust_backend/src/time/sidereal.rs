//! Mean sidereal time.
//!
//! GMST follows the IAU 1982 expression in degrees,
//!
//! ```text
//! GMST = 280.46061837 + 360.98564736629 d + 0.000387933 T² - T³ / 38710000
//! ```
//!
//! with `d = JD - 2451545.0` and `T = d / 36525`, UTC standing in for UT1. Local mean sidereal time adds the
//! east-positive longitude. Both are reduced into `[0°, 360°)`.

use altaz_units::AngleValue;
use std::fmt;

use super::TimeInstant;
use crate::core::ObserverLocation;

/// Length of one mean sidereal day in SI seconds (23h56m4.0905s).
pub const SIDEREAL_DAY_SECONDS: f64 = 86_164.0905;

const GMST_AT_J2000_DEG: f64 = 280.460_618_37;
const GMST_RATE_DEG_PER_DAY: f64 = 360.985_647_366_29;
const GMST_T2_DEG: f64 = 0.000_387_933;
const GMST_T3_DIVISOR: f64 = 38_710_000.0;

/// Hour angle of the vernal equinox, in degrees within `[0°, 360°)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SiderealTime(AngleValue);

impl SiderealTime {
    fn from_degrees_wrapped(deg: f64) -> Self {
        Self(AngleValue::new_unchecked(deg, altaz_units::AngleUnit::Degree).wrap_pos())
    }

    pub fn angle(&self) -> AngleValue {
        self.0
    }

    pub fn degrees(&self) -> f64 {
        self.0.in_degrees()
    }

    pub fn hours(&self) -> f64 {
        self.0.in_hours()
    }

    /// Local hour angle of an object with right ascension `ra`, wrapped into `(-180°, 180°]`.
    /// Positive values are west of the meridian.
    pub fn hour_angle_of(&self, ra: AngleValue) -> AngleValue {
        self.0.signed_separation(ra)
    }
}

impl fmt::Display for SiderealTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*} deg", p, self.degrees()),
            None => write!(f, "{} deg", self.degrees()),
        }
    }
}

/// Greenwich mean sidereal time at `time`.
pub fn greenwich_mean_sidereal_time(time: &TimeInstant) -> SiderealTime {
    let d = time.days_since_j2000();
    let t = time.julian_centuries_since_j2000();
    let gmst = GMST_AT_J2000_DEG + GMST_RATE_DEG_PER_DAY * d + GMST_T2_DEG * t * t
        - t * t * t / GMST_T3_DIVISOR;
    SiderealTime::from_degrees_wrapped(gmst)
}

/// Local mean sidereal time at `location` and `time`.
pub fn local_mean_sidereal_time(time: &TimeInstant, location: &ObserverLocation) -> SiderealTime {
    let gmst = greenwich_mean_sidereal_time(time);
    let lst = SiderealTime::from_degrees_wrapped(gmst.degrees() + location.longitude().in_degrees());
    log::debug!("LMST at {} for lon {}: {:.9}", time, location.longitude(), lst);
    lst
}
