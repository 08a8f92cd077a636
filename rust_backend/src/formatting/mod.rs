//! Sexagesimal rendering and parsing of angles.
//!
//! Right ascension is written as hours-minutes-seconds (`6h45m8.92s`), declination as
//! degrees-minutes-seconds (`-16d42m58.02s`).
//!
//! # Rounding
//!
//! [`SecondsRounding::Carry`] (the default) rounds the total number of seconds half-to-even at the requested
//! precision and then splits it, so seconds never print as `60.00`: `59.996s` becomes the next minute, and
//! `23h59m59.999s` becomes `0h0m0.00s`.
//!
//! [`SecondsRounding::Legacy`] truncates hours and minutes and only rounds the remaining seconds, which can
//! produce `60.00s`. It exists to reproduce text written by older tooling.
//!
//! ```
//! use altaz::formatting::{format_as_hms, AngleFormatter, SecondsRounding};
//! use altaz_units::AngleValue;
//!
//! let ra = AngleValue::from_hms(5, 59, 59.999).unwrap();
//! assert_eq!(format_as_hms(ra), "6h0m0.00s");
//!
//! let legacy = AngleFormatter::new(2, SecondsRounding::Legacy).unwrap();
//! assert_eq!(legacy.format_hms(ra), "5h59m60.00s");
//! ```

pub mod dms;
pub mod hms;

use altaz_units::AngleValue;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AltazError, AltazResult};

pub use dms::{format_as_dms, parse_dms};
pub use hms::{format_as_hms, parse_hms};

/// How the seconds field is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SecondsRounding {
    /// Round half-to-even on the total and carry into minutes and hours.
    #[default]
    Carry,
    /// Truncate the larger fields, round only the seconds; may print `60.00`.
    Legacy,
}

impl fmt::Display for SecondsRounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecondsRounding::Carry => f.write_str("carry"),
            SecondsRounding::Legacy => f.write_str("legacy"),
        }
    }
}

impl FromStr for SecondsRounding {
    type Err = AltazError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "carry" => Ok(SecondsRounding::Carry),
            "legacy" => Ok(SecondsRounding::Legacy),
            other => Err(AltazError::Parse(format!(
                "Unknown rounding mode '{}'. Use 'carry' or 'legacy'",
                other
            ))),
        }
    }
}

/// Renders angles as `HhMmS.SSs` or `DdMmS.SSs` with a fixed number of decimal places on the seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AngleFormatter {
    decimals: u8,
    rounding: SecondsRounding,
}

impl AngleFormatter {
    /// Largest supported number of decimal places on the seconds field.
    pub const MAX_DECIMALS: u8 = 9;

    pub fn new(decimals: u8, rounding: SecondsRounding) -> AltazResult<Self> {
        if decimals > Self::MAX_DECIMALS {
            return Err(AltazError::Validation(format!(
                "Seconds decimals must be at most {}, got {}",
                Self::MAX_DECIMALS,
                decimals
            )));
        }
        Ok(Self { decimals, rounding })
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn rounding(&self) -> SecondsRounding {
        self.rounding
    }

    /// Hours-minutes-seconds of the angle wrapped into `[0h, 24h)`.
    pub fn format_hms(&self, angle: AngleValue) -> String {
        let parts = split(angle.wrap_pos().in_hours(), self.decimals, self.rounding, Some(24));
        format!(
            "{}h{}m{:.*}s",
            parts.whole, parts.minutes, self.decimals as usize, parts.seconds
        )
    }

    /// Signed degrees-minutes-seconds; the sign is printed only for negative angles.
    ///
    /// Whole turns are dropped first, keeping the sign: `370°` prints as `10d0m0.00s`.
    pub fn format_dms(&self, angle: AngleValue) -> String {
        let deg = angle.in_degrees() % 360.0;
        let parts = split(deg.abs(), self.decimals, self.rounding, None);
        let sign = if deg < 0.0 && !parts.is_zero() { "-" } else { "" };
        format!(
            "{}{}d{}m{:.*}s",
            sign, parts.whole, parts.minutes, self.decimals as usize, parts.seconds
        )
    }
}

impl Default for AngleFormatter {
    fn default() -> Self {
        Self {
            decimals: 2,
            rounding: SecondsRounding::Carry,
        }
    }
}

/// A non-negative value split into whole units, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Sexagesimal {
    whole: u64,
    minutes: u64,
    seconds: f64,
}

impl Sexagesimal {
    fn is_zero(&self) -> bool {
        self.whole == 0 && self.minutes == 0 && self.seconds == 0.0
    }
}

/// Splits `value` (hours or degrees, non-negative). `modulus` wraps the whole-unit field after carrying.
fn split(value: f64, decimals: u8, rounding: SecondsRounding, modulus: Option<u64>) -> Sexagesimal {
    match rounding {
        SecondsRounding::Carry => {
            let scale = 10u64.pow(decimals as u32);
            let per_minute = 60 * scale;
            let per_whole = 3600 * scale;
            let mut ticks = (value * 3600.0 * scale as f64).round_ties_even() as u64;
            if let Some(m) = modulus {
                ticks %= m * per_whole;
            }
            let rem = ticks % per_whole;
            Sexagesimal {
                whole: ticks / per_whole,
                minutes: rem / per_minute,
                seconds: (rem % per_minute) as f64 / scale as f64,
            }
        }
        SecondsRounding::Legacy => {
            let whole = value.trunc();
            let minutes = ((value - whole) * 60.0).trunc();
            let seconds = ((value - whole) * 60.0 - minutes) * 60.0;
            Sexagesimal {
                whole: whole as u64,
                minutes: minutes as u64,
                seconds,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carry_rounds_half_to_even() {
        // 0.125 s at two decimals sits exactly on a tie
        let ra = AngleValue::hours(0.125 / 3600.0).unwrap();
        let f = AngleFormatter::default();
        assert_eq!(f.format_hms(ra), "0h0m0.12s");
        let ra = AngleValue::hours(0.375 / 3600.0).unwrap();
        assert_eq!(f.format_hms(ra), "0h0m0.38s");
    }

    #[test]
    fn test_carry_wraps_at_24h() {
        let ra = AngleValue::degrees(359.999_999_99).unwrap();
        assert_eq!(AngleFormatter::default().format_hms(ra), "0h0m0.00s");
    }

    #[test]
    fn test_legacy_keeps_sixty_seconds() {
        let ra = AngleValue::from_hms(2, 6, 59.999).unwrap();
        let legacy = AngleFormatter::new(2, SecondsRounding::Legacy).unwrap();
        assert_eq!(legacy.format_hms(ra), "2h6m60.00s");
        assert_eq!(AngleFormatter::default().format_hms(ra), "2h7m0.00s");
    }

    #[test]
    fn test_decimals() {
        let ra = AngleValue::from_hms(6, 45, 8.917).unwrap();
        assert_eq!(AngleFormatter::new(0, SecondsRounding::Carry).unwrap().format_hms(ra), "6h45m9s");
        assert_eq!(AngleFormatter::new(3, SecondsRounding::Carry).unwrap().format_hms(ra), "6h45m8.917s");
        assert!(AngleFormatter::new(10, SecondsRounding::Carry).is_err());
    }

    #[test]
    fn test_dms_sign() {
        let f = AngleFormatter::default();
        assert_eq!(f.format_dms(AngleValue::from_dms(-16, 42, 58.02).unwrap()), "-16d42m58.02s");
        assert_eq!(f.format_dms(AngleValue::from_dms(23, 27, 48.4).unwrap()), "23d27m48.40s");
        // rounds to zero: no sign
        assert_eq!(f.format_dms(AngleValue::degrees(-1e-9).unwrap()), "0d0m0.00s");
    }

    #[test]
    fn test_dms_drops_whole_turns() {
        let f = AngleFormatter::default();
        assert_eq!(f.format_dms(AngleValue::degrees(370.5).unwrap()), "10d30m0.00s");
        assert_eq!(f.format_dms(AngleValue::degrees(-725.25).unwrap()), "-5d15m0.00s");
        let legacy = AngleFormatter::new(2, SecondsRounding::Legacy).unwrap();
        assert_eq!(legacy.format_dms(AngleValue::degrees(-725.25).unwrap()), "-5d15m0.00s");
    }

    #[test]
    fn test_huge_angles_stay_in_one_turn() {
        assert_eq!(
            AngleFormatter::default().format_dms(AngleValue::degrees(-1e20).unwrap()),
            "-280d0m0.00s"
        );
        let f = AngleFormatter::default();
        for deg in [1e300, -1e300, 1e20, -1e20] {
            let angle = AngleValue::degrees(deg).unwrap();
            let back = super::parse_dms(&f.format_dms(angle)).unwrap().in_degrees();
            assert!(back.abs() <= 360.0, "{deg} -> {back}");
            let hms = super::parse_hms(&f.format_hms(angle)).unwrap().in_degrees();
            assert!((0.0..360.0).contains(&hms));
        }
    }

    #[test]
    fn test_rounding_parse() {
        assert_eq!("Legacy".parse::<SecondsRounding>().unwrap(), SecondsRounding::Legacy);
        assert!("floor".parse::<SecondsRounding>().is_err());
    }
}
