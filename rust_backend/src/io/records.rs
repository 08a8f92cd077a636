//! Observation records as stored in sample files.
//!
//! A sample file is a JSON array of objects:
//!
//! ```json
//! [
//!   {
//!     "name": "Sirius from Paris",
//!     "latitude": 48.86, "longitude": 2.34, "height": 38,
//!     "az": 208.1663889, "alt": 19.9522222,
//!     "time": "2023-02-08T23:12:01",
//!     "ra": 101.287, "de": -16.7161167
//!   }
//! ]
//! ```
//!
//! Angle fields are degrees. They may also be given as strings: a decimal number, a DMS string
//! (`"48d51m36s"`), or for any field an HMS string (`"6h45m8.917s"`). `height` is in metres and defaults to 0.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::path::Path;

use crate::core::{EquatorialCoordinate, HorizontalCoordinate, ObserverLocation};
use crate::error::AltazResult;
use crate::formatting::{parse_dms, parse_hms};
use crate::time::TimeInstant;

/// Accepts either a number of degrees or a sexagesimal/decimal string.
fn deserialize_degrees<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(v) => Ok(v),
        NumberOrString::String(s) => {
            let trimmed = s.trim();
            if let Ok(v) = trimmed.parse::<f64>() {
                return Ok(v);
            }
            let angle = if trimmed.contains(['h', 'H']) {
                parse_hms(trimmed)
            } else {
                parse_dms(trimmed)
            };
            angle.map(|a| a.in_degrees()).map_err(D::Error::custom)
        }
    }
}

/// One observation: where and when, what was measured, and what it should convert to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub name: String,
    #[serde(deserialize_with = "deserialize_degrees")]
    pub latitude: f64,
    /// East-positive.
    #[serde(deserialize_with = "deserialize_degrees")]
    pub longitude: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(deserialize_with = "deserialize_degrees")]
    pub az: f64,
    #[serde(deserialize_with = "deserialize_degrees")]
    pub alt: f64,
    /// UTC, ISO-8601.
    pub time: String,
    /// Expected right ascension.
    #[serde(deserialize_with = "deserialize_degrees")]
    pub ra: f64,
    /// Expected declination.
    #[serde(deserialize_with = "deserialize_degrees")]
    pub de: f64,
}

impl ObservationRecord {
    /// Validated transform inputs.
    pub fn to_inputs(&self) -> AltazResult<(HorizontalCoordinate, ObserverLocation, TimeInstant)> {
        let location = ObserverLocation::from_degrees(self.latitude, self.longitude, self.height)?;
        let horizontal = HorizontalCoordinate::from_degrees(self.alt, self.az)?;
        let time = TimeInstant::parse(&self.time)?;
        Ok((horizontal, location, time))
    }

    /// The expected position, validated like any other equatorial coordinate.
    pub fn expected(&self) -> AltazResult<EquatorialCoordinate> {
        EquatorialCoordinate::from_degrees(self.ra, self.de)
    }
}

/// Parse observation records from a JSON string.
///
/// Decode errors name the offending field, e.g. `[1].alt`.
pub fn parse_records_str(json: &str) -> Result<Vec<ObservationRecord>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json);
    serde_path_to_error::deserialize(deserializer).map_err(|e| {
        let path = e.path().to_string();
        anyhow!("Invalid observation record at {}: {}", path, e.into_inner())
    })
}

/// Parse an observation records file.
pub fn load_records(path: &Path) -> Result<Vec<ObservationRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file: {}", path.display()))?;
    let records = parse_records_str(&content)
        .with_context(|| format!("Failed to parse records file: {}", path.display()))?;
    log::info!("Loaded {} observation records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    const SIRIUS: &str = r#"[{
        "name": "Sirius",
        "latitude": "48d51m36s",
        "longitude": "2d20m24s",
        "height": 38,
        "az": "208d9m59s",
        "alt": "19d57m8s",
        "time": "2023-02-08T23:12:01",
        "ra": "6h45m8.917s",
        "de": "-16d42m58.02s"
    }]"#;

    #[test]
    fn test_parse_sexagesimal_strings() {
        let records = parse_records_str(SIRIUS).unwrap();
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_abs_diff_eq!(r.latitude, 48.86, epsilon = 1e-12);
        assert_abs_diff_eq!(r.ra, 101.287_154_166, epsilon = 1e-8);
        assert_abs_diff_eq!(r.de, -16.716_116_666, epsilon = 1e-8);
    }

    #[test]
    fn test_height_defaults_to_zero() {
        let json = r#"[{"name": "x", "latitude": 1, "longitude": 2, "az": 3, "alt": 4,
                        "time": "2020-01-01T00:00:00", "ra": 5, "de": 6}]"#;
        let records = parse_records_str(json).unwrap();
        assert_eq!(records[0].height, 0.0);
        assert_eq!(records[0].latitude, 1.0);
    }

    #[test]
    fn test_error_reports_field_path() {
        let json = r#"[
            {"name": "ok", "latitude": 1, "longitude": 2, "az": 3, "alt": 4,
             "time": "2020-01-01T00:00:00", "ra": 5, "de": 6},
            {"name": "bad", "latitude": 1, "longitude": 2, "az": 3, "alt": "high",
             "time": "2020-01-01T00:00:00", "ra": 5, "de": 6}
        ]"#;
        let err = parse_records_str(json).unwrap_err().to_string();
        assert!(err.contains("[1].alt"), "{err}");
    }

    #[test]
    fn test_missing_field() {
        let err = parse_records_str(r#"[{"name": "x"}]"#).unwrap_err().to_string();
        assert!(err.contains("missing field"), "{err}");
    }

    #[test]
    fn test_to_inputs_validates() {
        let mut r = parse_records_str(SIRIUS).unwrap().remove(0);
        let (h, loc, t) = r.to_inputs().unwrap();
        assert_abs_diff_eq!(h.azimuth().in_degrees(), 208.166_388_9, epsilon = 1e-6);
        assert_eq!(loc.height().in_meters(), 38.0);
        assert_eq!(t, TimeInstant::parse("2023-02-08 23:12:01").unwrap());

        r.time = "soon".to_string();
        assert!(r.to_inputs().is_err());
        r.time = "2023-02-08T23:12:01".to_string();
        r.alt = 95.0;
        assert!(r.to_inputs().is_err());
    }

    #[test]
    fn test_load_records_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SIRIUS.as_bytes()).unwrap();
        let records = load_records(file.path()).unwrap();
        assert_eq!(records[0].name, "Sirius");
    }

    #[test]
    fn test_load_records_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_records(&dir.path().join("data.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read records file"));
    }
}
