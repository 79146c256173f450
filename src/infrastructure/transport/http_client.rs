//! # HTTP Rate Transport
//!
//! `reqwest`-backed [`RateTransport`] for the New Zealand Post API.
//!
//! Every request carries the `license-key` header and is bounded by the
//! configured timeout. Non-success statuses are mapped to
//! [`TransportError`] variants.
//!
//! # Examples
//!
//! ```ignore
//! use nzpost_rates::infrastructure::transport::http_client::HttpRateTransport;
//!
//! let transport = HttpRateTransport::new("my-license-key", 10_000)?;
//! let body = transport.fetch("http://shippingoptions-nzpg.au.cloudhub.io/v1/domestic?weight=1").await?;
//! ```

use crate::infrastructure::transport::error::{TransportError, TransportResult};
use crate::infrastructure::transport::traits::RateTransport;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

/// Header carrying the API license key.
pub const LICENSE_KEY_HEADER: &str = "license-key";

/// HTTP transport for the rate API.
#[derive(Debug, Clone)]
pub struct HttpRateTransport {
    /// Inner reqwest client with the license key as a default header.
    client: Client,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpRateTransport {
    /// Creates a transport that authenticates with `license_key`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::InternalError` if the key is not a valid
    /// header value or the client cannot be created.
    pub fn new(license_key: &str, timeout_ms: u64) -> TransportResult<Self> {
        let mut key = HeaderValue::from_str(license_key).map_err(|e| {
            TransportError::internal_error(format!("invalid license key header: {}", e))
        })?;
        key.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(LICENSE_KEY_HEADER, key);

        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .default_headers(headers)
            .build()
            .map_err(|e| {
                TransportError::internal_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client, timeout_ms })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Checks the status and reads the body as text.
    async fn handle_response(&self, response: Response) -> TransportResult<String> {
        let status = response.status();

        if status.is_success() {
            response.text().await.map_err(|e| {
                TransportError::protocol_error(format!("Failed to read response: {}", e))
            })
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to a TransportError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> TransportError {
        if error.is_timeout() {
            TransportError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            TransportError::connection(format!("Connection failed: {}", error))
        } else {
            TransportError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to a TransportError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> TransportError {
        match status {
            StatusCode::BAD_REQUEST => {
                TransportError::invalid_request(format!("Bad request: {}", body))
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                TransportError::authentication(format!("Authentication failed: {}", body))
            }
            StatusCode::TOO_MANY_REQUESTS => TransportError::rate_limited("Rate limit exceeded"),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                TransportError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => TransportError::protocol_error(format!("HTTP error ({}): {}", status, body)),
        }
    }
}

#[async_trait]
impl RateTransport for HttpRateTransport {
    async fn fetch(&self, url: &str) -> TransportResult<String> {
        tracing::debug!(url, "fetching rates");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }
}
