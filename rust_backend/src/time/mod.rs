//! Time handling: UTC instants, Julian dates, and mean sidereal time.

pub mod instant;
pub mod mjd;
pub mod sidereal;

pub use instant::{TimeInstant, DAYS_PER_JULIAN_CENTURY, J2000_JD};
pub use mjd::ModifiedJulianDate;
pub use sidereal::{
    greenwich_mean_sidereal_time, local_mean_sidereal_time, SiderealTime, SIDEREAL_DAY_SECONDS,
};
