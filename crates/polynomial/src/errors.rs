//! Error types for polynomial operations and decoding.
//!
//! [`PolynomialError`] is raised by the kernel, the interpolator and the key-equation solver.
//! [`DecodeError`] is the taxonomy surfaced by the public interpolate and decode operations.

use gf2_field::FieldError;
use thiserror::Error;

/// Errors that can occur during polynomial operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolynomialError {
    /// A field inverse of the additive identity was requested
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// An in-place linear multiplication ran out of leading slack
    #[error("Insufficient headroom: {required} slot(s) required, {available} available")]
    InsufficientHeadroom { required: usize, available: usize },

    /// Operands violate a precondition of the operation
    #[error("Invalid polynomial: {message}")]
    InvalidPolynomial { message: String },

    /// Field adapter failure other than division by zero
    #[error("Field error: {message}")]
    Field { message: String },
}

impl PolynomialError {
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        PolynomialError::DivisionByZero {
            context: context.into(),
        }
    }

    pub fn invalid_polynomial(message: impl Into<String>) -> Self {
        PolynomialError::InvalidPolynomial {
            message: message.into(),
        }
    }
}

impl From<FieldError> for PolynomialError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::DivisionByZero | FieldError::NotInvertible { .. } => {
                PolynomialError::DivisionByZero {
                    context: err.to_string(),
                }
            }
            other => PolynomialError::Field {
                message: other.to_string(),
            },
        }
    }
}

/// Errors surfaced by interpolation and Reed-Solomon decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// Malformed sample set or decode parameters
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// A field inverse of the additive identity was requested
    #[error("Division by zero: {context}")]
    DivisionByZero { context: String },

    /// The received word has more errors than the code can correct
    #[error("Uncorrectable codeword: {reason}")]
    UncorrectableError { reason: String },
}

/// Result type alias for interpolation and decoding.
pub type DecodeResult<T> = Result<T, DecodeError>;

impl DecodeError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        DecodeError::InvalidInput {
            reason: reason.into(),
        }
    }

    pub fn uncorrectable(reason: impl Into<String>) -> Self {
        DecodeError::UncorrectableError {
            reason: reason.into(),
        }
    }
}

impl From<PolynomialError> for DecodeError {
    fn from(err: PolynomialError) -> Self {
        match err {
            PolynomialError::DivisionByZero { context } => DecodeError::DivisionByZero { context },
            other => DecodeError::InvalidInput {
                reason: other.to_string(),
            },
        }
    }
}

impl From<FieldError> for DecodeError {
    fn from(err: FieldError) -> Self {
        PolynomialError::from(err).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_map_to_division_by_zero() {
        let err: PolynomialError = FieldError::DivisionByZero.into();
        assert!(matches!(err, PolynomialError::DivisionByZero { .. }));

        let err: DecodeError = FieldError::NotInvertible {
            element: 3,
            modulus: 5,
        }
        .into();
        assert!(matches!(err, DecodeError::DivisionByZero { .. }));
    }

    #[test]
    fn test_modulus_errors_map_to_invalid_input() {
        let err: DecodeError = FieldError::invalid_modulus(1, "degree zero").into();
        assert!(matches!(err, DecodeError::InvalidInput { .. }));
        assert!(err.to_string().contains("degree zero"));
    }

    #[test]
    fn test_error_messages() {
        let err = PolynomialError::InsufficientHeadroom {
            required: 1,
            available: 0,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient headroom: 1 slot(s) required, 0 available"
        );
        assert_eq!(
            DecodeError::uncorrectable("nonzero remainder").to_string(),
            "Uncorrectable codeword: nonzero remainder"
        );
    }
}
