//! Core value types: observer location and the horizontal/equatorial coordinates.
//!
//! Every type here validates on construction and is immutable afterwards.

pub mod coordinates;
pub mod location;

pub use coordinates::{EquatorialCoordinate, Frame, HorizontalCoordinate, SkyCoordinate};
pub use location::ObserverLocation;
