//! Horizontal to equatorial coordinate conversion.
//!
//! Given where an observer stands, when they looked, and the altitude/azimuth they measured, compute the right
//! ascension and declination of the target.
//!
//! - [`core`]: validated coordinate values, observer locations and frames
//! - [`time`]: UTC instants, Julian dates and mean sidereal time
//! - [`transformations`]: the alt/az to RA/Dec engine and IAU 1976 precession
//! - [`formatting`]: HMS/DMS output and parsing
//! - [`io`] and [`batch`]: observation record files and batch comparison against expected positions
//! - [`config`]: TOML settings
//!
//! # Example
//!
//! ```
//! use altaz::core::{HorizontalCoordinate, ObserverLocation};
//! use altaz::formatting::{format_as_dms, format_as_hms};
//! use altaz::time::TimeInstant;
//! use altaz::transformations::HorizontalToEquatorial;
//!
//! let paris = ObserverLocation::from_degrees(48.86, 2.34, 38.0)?;
//! let time = TimeInstant::parse("2023-02-08T23:12:01")?;
//! let sirius = HorizontalCoordinate::from_degrees(19.9522222, 208.1663889)?;
//!
//! let radec = HorizontalToEquatorial::default().to_equatorial(&sirius, &paris, &time);
//! println!("{} {}", format_as_hms(radec.right_ascension()), format_as_dms(radec.declination()));
//! # Ok::<(), altaz::AltazError>(())
//! ```

pub mod batch;
pub mod config;
pub mod core;
pub mod error;
pub mod formatting;
pub mod io;
pub mod time;
pub mod transformations;

pub use altaz_units as units;
pub use batch::{convert_batch, convert_record, BatchSummary, RecordFailure, RecordReport};
pub use config::AltazConfig;
pub use error::{AltazError, AltazResult};
