use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Offset between Julian Date and Modified Julian Date.
pub const MJD_OFFSET: f64 = 2_400_000.5;

/// MJD of the Unix epoch.
const UNIX_EPOCH_MJD: f64 = 40_587.0;

/// Modified Julian Date representation.
/// MJD 0 = 1858-11-17 00:00:00 UTC
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ModifiedJulianDate(f64);

impl ModifiedJulianDate {
    /// Create a new MJD value.
    pub fn new(v: f64) -> Self {
        Self(v)
    }

    /// Raw MJD value as f64.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Full Julian Date.
    pub fn to_julian_date(&self) -> f64 {
        self.0 + MJD_OFFSET
    }

    pub fn from_julian_date(jd: f64) -> Self {
        Self(jd - MJD_OFFSET)
    }

    /// Convert to Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn to_unix_timestamp(&self) -> f64 {
        (self.0 - UNIX_EPOCH_MJD) * 86400.0
    }

    /// Create from Unix timestamp (seconds since 1970-01-01 00:00:00 UTC).
    pub fn from_unix_timestamp(timestamp: f64) -> Self {
        Self(timestamp / 86400.0 + UNIX_EPOCH_MJD)
    }

    /// Convert to chrono DateTime<Utc>. `None` when the value is outside chrono's range or not finite.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let secs = self.to_unix_timestamp();
        if !secs.is_finite() {
            return None;
        }
        let whole = secs.floor();
        let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
        DateTime::from_timestamp(whole as i64, nanos)
    }

    /// Create from chrono DateTime<Utc>.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self::from_unix_timestamp(dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 / 1e9)
    }
}

impl From<f64> for ModifiedJulianDate {
    fn from(v: f64) -> Self {
        ModifiedJulianDate::new(v)
    }
}
