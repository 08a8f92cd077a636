//! Error types for coordinate conversion.

use altaz_units::{Dimension, QuantityError};

/// Result type for coordinate conversion operations
pub type AltazResult<T> = Result<T, AltazError>;

/// Error type for coordinate conversion operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AltazError {
    /// Out-of-range or non-finite input, raised when the offending value is constructed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Malformed timestamp, sexagesimal string, or record field.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Arithmetic between quantities of different dimensions.
    #[error("Dimension mismatch: cannot combine {left} with {right}")]
    DimensionMismatch { left: Dimension, right: Dimension },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<QuantityError> for AltazError {
    fn from(err: QuantityError) -> Self {
        match err {
            QuantityError::DimensionMismatch { left, right } => {
                AltazError::DimensionMismatch { left, right }
            }
            QuantityError::UnknownUnit(_) | QuantityError::Malformed(_) => {
                AltazError::Parse(err.to_string())
            }
            QuantityError::NonFinite { .. } | QuantityError::EmptyRange { .. } => {
                AltazError::Validation(err.to_string())
            }
        }
    }
}

impl From<std::io::Error> for AltazError {
    fn from(err: std::io::Error) -> Self {
        AltazError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use altaz_units::{AngleValue, LengthValue, Measure};

    #[test]
    fn test_non_finite_maps_to_validation() {
        let err: AltazError = AngleValue::degrees(f64::NAN).unwrap_err().into();
        assert!(matches!(err, AltazError::Validation(_)));
        assert!(err.to_string().starts_with("Validation error:"));
    }

    #[test]
    fn test_dimension_mismatch_is_preserved() {
        let a = Measure::from(AngleValue::degrees(1.0).unwrap());
        let h = Measure::from(LengthValue::meters(38.0).unwrap());
        let err: AltazError = a.checked_add(h).unwrap_err().into();
        assert_eq!(
            err,
            AltazError::DimensionMismatch {
                left: Dimension::Angular,
                right: Dimension::Length
            }
        );
    }

    #[test]
    fn test_unknown_unit_maps_to_parse() {
        let err: AltazError = "3 parsec".parse::<AngleValue>().unwrap_err().into();
        assert!(matches!(err, AltazError::Parse(_)));
    }
}
