//! Conversion error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, Unit};

/// Errors raised when a quantity cannot be re-expressed in another unit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A conversion is needed for this pair but no factor was supplied yet.
    #[error("Conversion {from} >> {to} is required but has no factor")]
    MissingConversion { from: Unit, to: Unit },

    /// No conversion exists for this pair in either direction.
    #[error("Conversion {from} >> {to} not found")]
    NotFound { from: Unit, to: Unit },
}

impl From<ConversionError> for DomainError {
    fn from(err: ConversionError) -> Self {
        let (code, from, to) = match &err {
            ConversionError::MissingConversion { from, to } => {
                (ErrorCode::MissingConversion, from, to)
            }
            ConversionError::NotFound { from, to } => (ErrorCode::ConversionNotFound, from, to),
        };
        DomainError::new(code, err.to_string())
            .with_detail("from", from.code())
            .with_detail("to", to.code())
    }
}
