//! Coordinate transformations.
//!
//! - [`horizontal`]: the alt/az ↔ RA/Dec rotation driven by local mean sidereal time
//! - [`precession`]: IAU 1976 precession between the frame of date and J2000.0
//!
//! # Example
//!
//! ```
//! use altaz::core::{HorizontalCoordinate, ObserverLocation};
//! use altaz::time::TimeInstant;
//! use altaz::transformations::{HorizontalToEquatorial, OutputEpoch};
//!
//! let paris = ObserverLocation::from_degrees(48.86, 2.34, 38.0).unwrap();
//! let t = TimeInstant::parse("2023-02-08T23:12:01").unwrap();
//! let h = HorizontalCoordinate::from_degrees(19.952_222, 208.166_389).unwrap();
//!
//! let sirius = HorizontalToEquatorial::new(OutputEpoch::J2000).to_equatorial(&h, &paris, &t);
//! assert!((sirius.right_ascension().in_degrees() - 101.287).abs() < 0.01);
//! ```

pub mod horizontal;
pub mod precession;

pub use horizontal::{HorizontalToEquatorial, OutputEpoch};
pub use precession::{precess_from_j2000, precess_to_j2000, precession_matrix, RotationMatrix3};
