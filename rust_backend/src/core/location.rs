use altaz_units::{AngleUnit, AngleValue, LengthValue};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AltazError, AltazResult};

/// Geographic position of the observer.
///
/// Latitude is geodetic, in `[-90°, 90°]`. Longitude is east-positive and stored in `(-180°, 180°]`; an input of
/// exactly `-180°` is folded onto `180°`. Height is accepted and validated as finite but does not enter the
/// horizon/equator rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation", into = "RawLocation")]
pub struct ObserverLocation {
    latitude: AngleValue,
    longitude: AngleValue,
    height: LengthValue,
}

/// Wire form: bare degrees and metres.
#[derive(Serialize, Deserialize)]
struct RawLocation {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    height: f64,
}

impl ObserverLocation {
    /// Validates latitude and longitude ranges; `-180°` longitude is stored as `180°`.
    pub fn new(latitude: AngleValue, longitude: AngleValue, height: LengthValue) -> AltazResult<Self> {
        let lat_deg = latitude.in_degrees();
        if !(-90.0..=90.0).contains(&lat_deg) {
            return Err(AltazError::Validation(format!(
                "Latitude must be between -90 and 90 degrees, got {}",
                lat_deg
            )));
        }
        let lon_deg = longitude.in_degrees();
        if !(-180.0..=180.0).contains(&lon_deg) {
            return Err(AltazError::Validation(format!(
                "Longitude must be between -180 and 180 degrees, got {}",
                lon_deg
            )));
        }
        Ok(Self {
            latitude,
            longitude: longitude.wrap_signed(),
            height,
        })
    }

    /// Builds a location from degrees and metres.
    pub fn from_degrees(latitude: f64, longitude: f64, height_m: f64) -> AltazResult<Self> {
        Self::new(
            AngleValue::degrees(latitude)?,
            AngleValue::degrees(longitude)?,
            LengthValue::meters(height_m)?,
        )
    }

    /// Geodetic latitude.
    pub fn latitude(&self) -> AngleValue {
        self.latitude
    }

    /// East-positive longitude.
    pub fn longitude(&self) -> AngleValue {
        self.longitude
    }

    /// Height above the ellipsoid. Not used by the transform.
    pub fn height(&self) -> LengthValue {
        self.height
    }
}

impl TryFrom<RawLocation> for ObserverLocation {
    type Error = AltazError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        Self::from_degrees(raw.latitude, raw.longitude, raw.height)
    }
}

impl From<ObserverLocation> for RawLocation {
    fn from(loc: ObserverLocation) -> Self {
        Self {
            latitude: loc.latitude.in_degrees(),
            longitude: loc.longitude.in_degrees(),
            height: loc.height.in_meters(),
        }
    }
}

impl fmt::Display for ObserverLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lat {:.6}, lon {:.6}, height {}",
            self.latitude.to(AngleUnit::Degree),
            self.longitude.to(AngleUnit::Degree),
            self.height
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_paris_from_dms() {
        let loc = ObserverLocation::new(
            AngleValue::from_dms(48, 51, 36.0).unwrap(),
            AngleValue::from_dms(2, 20, 24.0).unwrap(),
            LengthValue::meters(38.0).unwrap(),
        )
        .unwrap();
        assert_abs_diff_eq!(loc.latitude().in_degrees(), 48.86, epsilon = 1e-12);
        assert_abs_diff_eq!(loc.longitude().in_degrees(), 2.34, epsilon = 1e-12);
        assert_eq!(loc.height().in_meters(), 38.0);
    }

    #[test]
    fn test_latitude_out_of_range() {
        let err = ObserverLocation::from_degrees(90.5, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, AltazError::Validation(_)));
        assert!(ObserverLocation::from_degrees(-91.0, 0.0, 0.0).is_err());
    }

    #[test]
    fn test_latitude_bounds_inclusive() {
        assert!(ObserverLocation::from_degrees(90.0, 0.0, 0.0).is_ok());
        assert!(ObserverLocation::from_degrees(-90.0, 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_longitude_range() {
        assert!(ObserverLocation::from_degrees(0.0, 180.5, 0.0).is_err());
        let west = ObserverLocation::from_degrees(0.0, -180.0, 0.0).unwrap();
        assert_eq!(west.longitude().in_degrees(), 180.0);
    }

    #[test]
    fn test_latitude_in_other_units_is_checked() {
        let lat = AngleValue::hours(7.0).unwrap(); // 105 degrees
        let err = ObserverLocation::new(
            lat,
            AngleValue::degrees(0.0).unwrap(),
            LengthValue::meters(0.0).unwrap(),
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_non_finite_height_rejected() {
        let err = ObserverLocation::from_degrees(10.0, 10.0, f64::INFINITY).unwrap_err();
        assert!(matches!(err, AltazError::Validation(_)));
    }

    #[test]
    fn test_serde_validates() {
        let loc: ObserverLocation =
            serde_json::from_str(r#"{"latitude": 40.2042, "longitude": -76.7452}"#).unwrap();
        assert_eq!(loc.height().in_meters(), 0.0);

        let bad = serde_json::from_str::<ObserverLocation>(r#"{"latitude": 120.0, "longitude": 0.0}"#);
        assert!(bad.is_err());
    }
}
