//! Error types for field element operations.

use thiserror::Error;

/// Errors that can occur during field arithmetic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// Division by the additive identity
    #[error("Division by zero field element")]
    DivisionByZero,

    /// The divisor has no inverse, which only happens when the modulus is reducible
    #[error("Element {element:#x} has no inverse modulo {modulus:#x}")]
    NotInvertible { element: u64, modulus: u64 },

    /// The modulus does not define a usable field
    #[error("Invalid field modulus {modulus:#x}: {reason}")]
    InvalidModulus { modulus: u64, reason: String },
}

impl FieldError {
    pub fn invalid_modulus(modulus: u64, reason: impl Into<String>) -> Self {
        FieldError::InvalidModulus {
            modulus,
            reason: reason.into(),
        }
    }
}
