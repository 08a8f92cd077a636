//! Horizontal and equatorial coordinate values, and the closed set of frames they live in.

use altaz_units::{AngleUnit, AngleValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::location::ObserverLocation;
use crate::error::{AltazError, AltazResult};
use crate::time::TimeInstant;
use crate::transformations::HorizontalToEquatorial;

fn check_latitude_like(name: &str, angle: AngleValue) -> AltazResult<()> {
    let deg = angle.in_degrees();
    if !(-90.0..=90.0).contains(&deg) {
        return Err(AltazError::Validation(format!(
            "{} must be between -90 and 90 degrees, got {}",
            name, deg
        )));
    }
    Ok(())
}

/// Position in the observer's horizon frame.
///
/// Altitude is in `[-90°, 90°]` (90° = zenith). Azimuth is measured clockwise from north and normalized into
/// `[0°, 360°)` on construction, so `370°` and `10°` are the same coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalCoordinate {
    #[serde(with = "altaz_units::serde_degrees")]
    altitude: AngleValue,
    #[serde(with = "altaz_units::serde_degrees")]
    azimuth: AngleValue,
}

impl HorizontalCoordinate {
    pub fn new(altitude: AngleValue, azimuth: AngleValue) -> AltazResult<Self> {
        check_latitude_like("Altitude", altitude)?;
        Ok(Self {
            altitude,
            azimuth: azimuth.wrap_pos(),
        })
    }

    pub fn from_degrees(altitude: f64, azimuth: f64) -> AltazResult<Self> {
        Self::new(AngleValue::degrees(altitude)?, AngleValue::degrees(azimuth)?)
    }

    /// Caller guarantees `altitude` is in range and `azimuth` is wrapped.
    pub(crate) fn from_parts(altitude: AngleValue, azimuth: AngleValue) -> Self {
        Self { altitude, azimuth }
    }

    pub fn altitude(&self) -> AngleValue {
        self.altitude
    }

    pub fn azimuth(&self) -> AngleValue {
        self.azimuth
    }
}

impl fmt::Display for HorizontalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "alt {:.6}, az {:.6}",
            self.altitude.to(AngleUnit::Degree),
            self.azimuth.to(AngleUnit::Degree)
        )
    }
}

/// Position in an equatorial frame: right ascension in `[0°, 360°)` and declination in `[-90°, 90°]`.
///
/// The transform produces these in degrees; use [`AngleValue::in_hours`] or
/// [`crate::formatting::format_as_hms`] for the hour form of the right ascension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EquatorialCoordinate {
    #[serde(with = "altaz_units::serde_degrees")]
    right_ascension: AngleValue,
    #[serde(with = "altaz_units::serde_degrees")]
    declination: AngleValue,
}

impl EquatorialCoordinate {
    pub fn new(right_ascension: AngleValue, declination: AngleValue) -> AltazResult<Self> {
        check_latitude_like("Declination", declination)?;
        Ok(Self {
            right_ascension: right_ascension.wrap_pos(),
            declination,
        })
    }

    pub fn from_degrees(right_ascension: f64, declination: f64) -> AltazResult<Self> {
        Self::new(
            AngleValue::degrees(right_ascension)?,
            AngleValue::degrees(declination)?,
        )
    }

    /// Caller guarantees `declination` is in range and `right_ascension` is wrapped.
    pub(crate) fn from_parts(right_ascension: AngleValue, declination: AngleValue) -> Self {
        Self {
            right_ascension,
            declination,
        }
    }

    pub fn right_ascension(&self) -> AngleValue {
        self.right_ascension
    }

    pub fn declination(&self) -> AngleValue {
        self.declination
    }
}

impl fmt::Display for EquatorialCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ra {:.6}, dec {:.6}",
            self.right_ascension.to(AngleUnit::Degree),
            self.declination.to(AngleUnit::Degree)
        )
    }
}

/// The reference frames a [`SkyCoordinate`] can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frame {
    /// Observer-centred alt/az frame.
    Horizontal,
    /// Right ascension / declination frame.
    Equatorial,
}

impl Frame {
    pub const ALL: [Frame; 2] = [Frame::Horizontal, Frame::Equatorial];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frame::Horizontal => "horizontal",
            Frame::Equatorial => "equatorial",
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frame {
    type Err = AltazError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "horizontal" | "altaz" => Ok(Frame::Horizontal),
            "equatorial" | "icrs" | "radec" => Ok(Frame::Equatorial),
            other => Err(AltazError::Parse(format!(
                "Unknown frame '{}'. Use 'horizontal' or 'equatorial'",
                other
            ))),
        }
    }
}

/// A coordinate tagged with its frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "frame", rename_all = "lowercase")]
pub enum SkyCoordinate {
    Horizontal(HorizontalCoordinate),
    Equatorial(EquatorialCoordinate),
}

impl SkyCoordinate {
    pub fn frame(&self) -> Frame {
        match self {
            SkyCoordinate::Horizontal(_) => Frame::Horizontal,
            SkyCoordinate::Equatorial(_) => Frame::Equatorial,
        }
    }

    /// Re-expresses the coordinate in `target`. Converting to the frame it is already in returns it unchanged.
    pub fn transform_to(
        &self,
        target: Frame,
        location: &ObserverLocation,
        time: &TimeInstant,
        engine: &HorizontalToEquatorial,
    ) -> SkyCoordinate {
        match (self, target) {
            (SkyCoordinate::Horizontal(h), Frame::Equatorial) => {
                SkyCoordinate::Equatorial(engine.to_equatorial(h, location, time))
            }
            (SkyCoordinate::Equatorial(e), Frame::Horizontal) => {
                SkyCoordinate::Horizontal(engine.to_horizontal(e, location, time))
            }
            _ => *self,
        }
    }

    pub fn as_horizontal(&self) -> Option<&HorizontalCoordinate> {
        match self {
            SkyCoordinate::Horizontal(h) => Some(h),
            SkyCoordinate::Equatorial(_) => None,
        }
    }

    pub fn as_equatorial(&self) -> Option<&EquatorialCoordinate> {
        match self {
            SkyCoordinate::Equatorial(e) => Some(e),
            SkyCoordinate::Horizontal(_) => None,
        }
    }
}

impl From<HorizontalCoordinate> for SkyCoordinate {
    fn from(h: HorizontalCoordinate) -> Self {
        SkyCoordinate::Horizontal(h)
    }
}

impl From<EquatorialCoordinate> for SkyCoordinate {
    fn from(e: EquatorialCoordinate) -> Self {
        SkyCoordinate::Equatorial(e)
    }
}
