use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::mjd::{ModifiedJulianDate, UNIX_EPOCH_JD};
use crate::error::{AltazError, AltazResult};

/// Unix timestamp of the J2000.0 epoch, 2000-01-01 12:00:00 (UTC standing in for TT).
const J2000_UNIX_SECONDS: f64 = 946_728_000.0;

/// Julian Date of the J2000.0 epoch.
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Naive layouts accepted by [`TimeInstant::parse`], all read as UTC.
const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A UTC instant.
///
/// UTC is treated as a uniform time scale: no leap-second or TT/UT1 correction is applied anywhere. Timezone shifts
/// are the caller's business (see [`TimeInstant::plus_hours`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeInstant(DateTime<Utc>);

impl TimeInstant {
    /// Builds an instant from calendar fields. Fails on impossible dates or `nanos >= 1e9`.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanos: u32,
    ) -> AltazResult<Self> {
        if nanos >= 1_000_000_000 {
            return Err(AltazError::Validation(format!(
                "Nanoseconds must be below 1e9, got {}",
                nanos
            )));
        }
        let naive = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_nano_opt(hour, minute, second, nanos))
            .ok_or_else(|| {
                AltazError::Validation(format!(
                    "Invalid UTC date/time {:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                    year, month, day, hour, minute, second
                ))
            })?;
        Ok(Self(Utc.from_utc_datetime(&naive)))
    }

    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parses RFC 3339 (`2023-02-08T23:12:01Z`, any offset) or a naive ISO-8601 timestamp
    /// (`2023-02-08T23:12:01`, `2023-02-08 23:12:01.5`), which is taken to be UTC.
    pub fn parse(s: &str) -> AltazResult<Self> {
        let trimmed = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(Utc.from_utc_datetime(&naive)));
            }
        }
        Err(AltazError::Parse(format!(
            "Invalid timestamp '{}'. Expected ISO-8601, e.g. 2023-02-08T23:12:01",
            s
        )))
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Seconds since 1970-01-01 00:00:00 UTC, with sub-second precision.
    pub fn unix_seconds(&self) -> f64 {
        self.0.timestamp() as f64 + self.0.timestamp_subsec_nanos() as f64 / 1e9
    }

    pub fn julian_date(&self) -> f64 {
        self.unix_seconds() / 86400.0 + UNIX_EPOCH_JD
    }

    pub fn modified_julian_date(&self) -> ModifiedJulianDate {
        ModifiedJulianDate::from_datetime(self.0)
    }

    /// `JD - 2451545.0`, computed from the Unix offset to keep the fractional day precise.
    pub fn days_since_j2000(&self) -> f64 {
        (self.unix_seconds() - J2000_UNIX_SECONDS) / 86400.0
    }

    pub fn julian_centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / DAYS_PER_JULIAN_CENTURY
    }

    /// Shifts the instant by a (possibly fractional, possibly negative) number of seconds.
    pub fn plus_seconds(&self, seconds: f64) -> AltazResult<Self> {
        if !seconds.is_finite() {
            return Err(AltazError::Validation(format!(
                "Time offset must be finite, got {}",
                seconds
            )));
        }
        let out_of_range = || AltazError::Validation(format!("Time offset {} s is out of range", seconds));
        // whole seconds and nanos separately: a single i64 of nanoseconds only spans about 292 years
        let whole = seconds.trunc();
        let nanos = ((seconds - whole) * 1e9).round() as i64;
        if whole.abs() >= i64::MAX as f64 {
            return Err(out_of_range());
        }
        let delta = Duration::try_seconds(whole as i64)
            .and_then(|d| d.checked_add(&Duration::nanoseconds(nanos)))
            .ok_or_else(out_of_range)?;
        self.0.checked_add_signed(delta).map(Self).ok_or_else(out_of_range)
    }

    /// Shifts the instant by a number of hours, e.g. to turn a local clock reading into UTC.
    pub fn plus_hours(&self, hours: f64) -> AltazResult<Self> {
        self.plus_seconds(hours * 3600.0)
    }
}

impl From<DateTime<Utc>> for TimeInstant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl FromStr for TimeInstant {
    type Err = AltazError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for TimeInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true))
    }
}

impl Serialize for TimeInstant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeInstant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(de::Error::custom)
    }
}
