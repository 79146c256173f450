//! # Domain Errors
//!
//! Error types raised by domain rules.
//!
//! Domain errors cover the business rules of the rating pipeline: the
//! origin gate for international shipments and invalid input values such as
//! negative weights or malformed country codes.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::errors::DomainError;
//!
//! let err = DomainError::ClassificationViolation;
//! assert_eq!(
//!     err.to_string(),
//!     "New Zealand Post packages must originate in New Zealand"
//! );
//! ```

use thiserror::Error;

/// Message surfaced when an international shipment does not leave New Zealand.
pub const NON_NZ_ORIGIN_MESSAGE: &str = "New Zealand Post packages must originate in New Zealand";

/// Error type for domain rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An international quote was requested for a shipment that does not
    /// originate in New Zealand.
    #[error("{}", NON_NZ_ORIGIN_MESSAGE)]
    ClassificationViolation,

    /// A value failed validation.
    #[error("invalid {field}: {message}")]
    InvalidValue {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

impl DomainError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            message: message.into(),
        }
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
