//! Unit-tagged quantities for horizon/equator coordinate work.
//!
//! `altaz-units` provides a small runtime units model:
//!
//! - A *unit* is a plain enum variant implementing [`Unit`] ([`AngleUnit`], [`LengthUnit`]).
//! - A value tagged with a unit is a [`Quantity<U>`], backed by an `f64` magnitude.
//! - Conversion is an explicit scaling via [`Quantity::to`], using each unit's ratio to the canonical unit of its
//!   dimension (degrees for angles, metres for lengths).
//! - Mixing dimensions is a type error for the typed aliases ([`AngleValue`], [`LengthValue`]) and a runtime
//!   [`QuantityError::DimensionMismatch`] for the dynamic [`Measure`].
//!
//! # Quick start
//!
//! ```rust
//! use altaz_units::{AngleUnit, AngleValue};
//!
//! let az = AngleValue::from_dms(208, 9, 59.0).unwrap();
//! let rad = az.to(AngleUnit::Radian);
//! assert!((rad.magnitude() - az.in_radians()).abs() < 1e-15);
//! ```
//!
//! Arithmetic normalizes the right-hand side to the left-hand unit:
//!
//! ```rust
//! use altaz_units::{AngleUnit, AngleValue};
//!
//! let a = AngleValue::degrees(1.0).unwrap();
//! let b = AngleValue::new(30.0, AngleUnit::Arcminute).unwrap();
//! let sum = a + b;
//! assert_eq!(sum.unit(), AngleUnit::Degree);
//! assert!((sum.magnitude() - 1.5).abs() < 1e-12);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: enables `serde` support. A quantity serializes as `{"value": f64, "unit": "<symbol>"}`; the
//!   [`serde_degrees`] and [`serde_meters`] helper modules read and write bare numbers instead.
//!
//! # Panics and errors
//!
//! Constructors reject NaN and infinite magnitudes with [`QuantityError::NonFinite`]. Arithmetic on already
//! validated values follows IEEE-754 and does not re-check.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod dimension;
mod error;
mod measure;
mod quantity;
mod unit;

pub mod angular;
pub mod length;

#[cfg(feature = "serde")]
mod serde_;

pub use angular::{AngleUnit, AngleValue};
pub use dimension::Dimension;
pub use error::QuantityError;
pub use length::{LengthUnit, LengthValue};
pub use measure::Measure;
pub use quantity::Quantity;
pub use unit::Unit;

#[cfg(feature = "serde")]
pub use serde_::{serde_degrees, serde_meters};
