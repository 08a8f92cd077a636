//! Horizon ↔ equator rotation.
//!
//! With latitude φ, altitude a and azimuth A (clockwise from north):
//!
//! ```text
//! sin δ = sin a · sin φ + cos a · cos φ · cos A
//! H     = atan2(-sin A · cos a, cos φ · sin a - sin φ · cos a · cos A)
//! α     = LST - H
//! ```
//!
//! The inverse swaps (a, A) with (δ, H) in the same two formulas. The hour angle is always resolved with a
//! two-argument arctangent; an arccos-based hour angle loses the sign for azimuths past 180°.

use altaz_units::{AngleUnit, AngleValue};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::precession::{precess_from_j2000, precess_to_j2000};
use crate::core::{EquatorialCoordinate, HorizontalCoordinate, ObserverLocation};
use crate::error::AltazError;
use crate::time::{local_mean_sidereal_time, TimeInstant};

/// Which equatorial frame [`HorizontalToEquatorial`] reports in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputEpoch {
    /// Mean equator and equinox of J2000.0.
    #[default]
    J2000,
    /// Mean equator and equinox of the observation instant (no precession applied).
    OfDate,
}

impl fmt::Display for OutputEpoch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputEpoch::J2000 => f.write_str("j2000"),
            OutputEpoch::OfDate => f.write_str("of_date"),
        }
    }
}

impl FromStr for OutputEpoch {
    type Err = AltazError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "j2000" | "j2000.0" => Ok(OutputEpoch::J2000),
            "of_date" | "date" => Ok(OutputEpoch::OfDate),
            other => Err(AltazError::Parse(format!(
                "Unknown output epoch '{}'. Use 'j2000' or 'of_date'",
                other
            ))),
        }
    }
}

/// Rotates `(lat1, lon1)` on one sphere into `(lat2, lon2)` on the other, given the observer latitude.
///
/// Used in both directions: (altitude, azimuth) → (declination, hour angle) and back. All angles in radians.
fn rotate_about_east_axis(lat1: f64, lon1: f64, phi: f64) -> (f64, f64) {
    let (sin_lat1, cos_lat1) = lat1.sin_cos();
    let (sin_lon1, cos_lon1) = lon1.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    let sin_lat2 = (sin_lat1 * sin_phi + cos_lat1 * cos_phi * cos_lon1).clamp(-1.0, 1.0);
    let lat2 = sin_lat2.asin();
    let lon2 = (-sin_lon1 * cos_lat1).atan2(cos_phi * sin_lat1 - sin_phi * cos_lat1 * cos_lon1);
    (lat2, lon2)
}

fn radians(value: f64) -> AngleValue {
    AngleValue::new_unchecked(value, AngleUnit::Radian).to(AngleUnit::Degree)
}

/// The horizon/equator transform engine.
///
/// Stateless apart from the choice of [`OutputEpoch`]; one engine can serve any number of threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HorizontalToEquatorial {
    epoch: OutputEpoch,
}

impl HorizontalToEquatorial {
    pub fn new(epoch: OutputEpoch) -> Self {
        Self { epoch }
    }

    pub fn epoch(&self) -> OutputEpoch {
        self.epoch
    }

    /// Converts an observed alt/az to right ascension and declination.
    ///
    /// Height is not used. The result is in the frame selected by [`Self::epoch`].
    pub fn to_equatorial(
        &self,
        horizontal: &HorizontalCoordinate,
        location: &ObserverLocation,
        time: &TimeInstant,
    ) -> EquatorialCoordinate {
        let lst = local_mean_sidereal_time(time, location);
        let (dec, hour_angle) = rotate_about_east_axis(
            horizontal.altitude().in_radians(),
            horizontal.azimuth().in_radians(),
            location.latitude().in_radians(),
        );
        let ra = (lst.angle() - radians(hour_angle)).wrap_pos();
        let of_date = EquatorialCoordinate::from_parts(ra, radians(dec));

        let result = match self.epoch {
            OutputEpoch::OfDate => of_date,
            OutputEpoch::J2000 => precess_to_j2000(&of_date, time),
        };
        log::debug!(
            "{} at {} from ({}) -> {} [{}]",
            horizontal,
            time,
            location,
            result,
            self.epoch
        );
        result
    }

    /// Converts right ascension and declination (in the engine's frame) back to alt/az.
    pub fn to_horizontal(
        &self,
        equatorial: &EquatorialCoordinate,
        location: &ObserverLocation,
        time: &TimeInstant,
    ) -> HorizontalCoordinate {
        let of_date = match self.epoch {
            OutputEpoch::OfDate => *equatorial,
            OutputEpoch::J2000 => precess_from_j2000(equatorial, time),
        };
        let lst = local_mean_sidereal_time(time, location);
        let hour_angle = lst.hour_angle_of(of_date.right_ascension());
        let (alt, az) = rotate_about_east_axis(
            of_date.declination().in_radians(),
            hour_angle.in_radians(),
            location.latitude().in_radians(),
        );
        HorizontalCoordinate::from_parts(radians(alt), radians(az).wrap_pos())
    }
}
