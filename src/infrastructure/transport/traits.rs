//! # Rate Transport Trait
//!
//! Port definition for fetching raw rate responses.
//!
//! The rating pipeline calls [`RateTransport::fetch`] once per package, in
//! package order, and waits for each body before issuing the next request.
//! Implementations must be reentrant if the same transport serves concurrent
//! quotes.

use crate::infrastructure::transport::error::TransportResult;
use async_trait::async_trait;
use std::fmt;

/// Fetches the raw body of a rate API response.
#[async_trait]
pub trait RateTransport: Send + Sync + fmt::Debug {
    /// Performs a GET against `url` and returns the body as text.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` on network failure, timeout, or a
    /// non-success HTTP status.
    async fn fetch(&self, url: &str) -> TransportResult<String>;
}
