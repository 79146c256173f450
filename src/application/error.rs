//! # Application Errors
//!
//! Failures raised while quoting a shipment.
//!
//! Every [`QuoteError`] is caught at the assembler boundary and folded into a
//! failed [`QuoteResult`](crate::domain::entities::QuoteResult). Its
//! `Display` output is the message callers see, so upstream and parser texts
//! are carried verbatim.
//!
//! # Error Hierarchy
//!
//! ```text
//! QuoteError
//! ├── ClassificationViolation     - International shipment not leaving NZ
//! ├── UpstreamFailure             - API answered `success: false`
//! ├── MalformedResponse           - Body was not valid JSON
//! ├── Transport(TransportError)   - Fetch failed
//! ├── Arithmetic(ArithmeticError) - Price overflow
//! └── Configuration               - Unusable settings
//! ```
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::application::error::QuoteError;
//!
//! let err = QuoteError::upstream_failure("Invalid account number");
//! assert_eq!(err.to_string(), "Invalid account number");
//! ```

use crate::domain::errors::NON_NZ_ORIGIN_MESSAGE;
use crate::domain::value_objects::ArithmeticError;
use crate::infrastructure::transport::TransportError;
use thiserror::Error;

/// Error type for the quoting pipeline.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// An international quote was requested from outside New Zealand.
    #[error("{}", NON_NZ_ORIGIN_MESSAGE)]
    ClassificationViolation,

    /// The API reported a failure for one of the packages.
    #[error("{message}")]
    UpstreamFailure {
        /// Message returned by the API.
        message: String,
    },

    /// A response body could not be parsed.
    #[error("{message}")]
    MalformedResponse {
        /// Parser error text.
        message: String,
    },

    /// The transport failed to fetch a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Price arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    /// The carrier settings cannot be used.
    #[error("{0}")]
    Configuration(String),
}

impl QuoteError {
    /// Creates an upstream failure carrying the API's message.
    #[must_use]
    pub fn upstream_failure(message: impl Into<String>) -> Self {
        Self::UpstreamFailure {
            message: message.into(),
        }
    }

    /// Creates a malformed response error carrying the parser's message.
    #[must_use]
    pub fn malformed_response(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if the failure came from the API response itself.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::UpstreamFailure { .. } | Self::MalformedResponse { .. }
        )
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(error: serde_json::Error) -> Self {
        Self::malformed_response(error.to_string())
    }
}

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, QuoteError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_verbatim() {
        assert_eq!(
            QuoteError::ClassificationViolation.to_string(),
            NON_NZ_ORIGIN_MESSAGE
        );
        assert_eq!(
            QuoteError::upstream_failure("Weight exceeds limit").to_string(),
            "Weight exceeds limit"
        );
        assert_eq!(
            QuoteError::malformed_response("expected value at line 1 column 1").to_string(),
            "expected value at line 1 column 1"
        );
    }

    #[test]
    fn json_errors_become_malformed_responses() {
        let parse = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let text = parse.to_string();
        let err: QuoteError = parse.into();
        assert!(err.is_upstream());
        assert_eq!(err.to_string(), text);
    }

    #[test]
    fn transport_errors_pass_through() {
        let transport = TransportError::timeout("Request timed out after 10ms");
        let text = transport.to_string();
        let err: QuoteError = transport.into();
        assert_eq!(err.to_string(), text);
        assert!(!err.is_upstream());
    }
}
