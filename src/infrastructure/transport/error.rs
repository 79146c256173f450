//! # Transport Errors
//!
//! Error types for fetching rate responses from the API.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::infrastructure::transport::error::TransportError;
//!
//! let error = TransportError::timeout("request timed out after 10000ms");
//! assert!(error.is_retryable());
//!
//! let error = TransportError::authentication("license key rejected");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for rate transport operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Request timed out.
    #[error("rate API timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("rate API connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// License key missing or rejected.
    #[error("rate API authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("rate API rate limit exceeded: {message}")]
    RateLimited {
        /// Error message.
        message: String,
    },

    /// The API rejected the request parameters.
    #[error("rate API invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// Unexpected status or unreadable body.
    #[error("rate API protocol error: {message}")]
    ProtocolError {
        /// Error message.
        message: String,
    },

    /// The transport could not be set up.
    #[error("rate API internal error: {message}")]
    InternalError {
        /// Error message.
        message: String,
    },
}

impl TransportError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::RateLimited {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol_error(message: impl Into<String>) -> Self {
        Self::ProtocolError {
            message: message.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient.
    ///
    /// The quoting pipeline never retries; callers may use this to decide
    /// whether to re-run a failed quote.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::RateLimited { .. }
        )
    }

    /// Returns true if the request itself was at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. } | Self::Authentication { .. }
        )
    }
}

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;
