//! Error type for quantity construction and arithmetic.

use crate::Dimension;

/// Errors raised while building or combining quantities.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QuantityError {
    /// The magnitude was NaN or infinite.
    #[error("non-finite magnitude {magnitude} {symbol}")]
    NonFinite {
        /// Offending magnitude.
        magnitude: f64,
        /// Symbol of the unit it was tagged with.
        symbol: &'static str,
    },

    /// Two quantities of different dimensions were combined.
    #[error("cannot combine {left} with {right}")]
    DimensionMismatch {
        /// Dimension of the left operand.
        left: Dimension,
        /// Dimension of the right operand.
        right: Dimension,
    },

    /// A unit symbol was not recognised.
    #[error("unknown unit '{0}'")]
    UnknownUnit(String),

    /// A textual quantity could not be split into magnitude and unit.
    #[error("cannot parse quantity '{0}'")]
    Malformed(String),

    /// A normalization range had `high <= low`.
    #[error("empty range [{low}, {high})")]
    EmptyRange {
        /// Inclusive lower bound.
        low: f64,
        /// Exclusive upper bound.
        high: f64,
    },
}
