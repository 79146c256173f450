//! # Quote Result
//!
//! The terminal artifact returned to callers of the rating pipeline.
//!
//! A quote never surfaces as an error: failures are reported through
//! [`QuoteResult::is_success`] and [`QuoteResult::message`], alongside the
//! request URLs and raw bodies gathered before the failure.

use crate::domain::entities::rate::AggregatedRate;
use crate::domain::value_objects::Timestamp;
use serde::{Deserialize, Serialize};

/// Message carried by a successful quote.
pub const SUCCESS_MESSAGE: &str = "success";

/// Outcome of one rate quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteResult {
    success: bool,
    message: String,
    rates: Vec<AggregatedRate>,
    /// Parsed response documents.
    responses: Vec<serde_json::Value>,
    raw_responses: Vec<String>,
    /// Request URLs, one per package.
    request: Vec<String>,
    test: bool,
    quoted_at: Timestamp,
}

impl QuoteResult {
    /// Creates a successful result.
    #[must_use]
    pub fn success(rates: Vec<AggregatedRate>, exchange: QuoteExchange) -> Self {
        Self::from_parts(true, SUCCESS_MESSAGE.to_string(), rates, exchange)
    }

    /// Creates a failed result carrying the failure message.
    #[must_use]
    pub fn failure(message: impl Into<String>, exchange: QuoteExchange) -> Self {
        Self::from_parts(false, message.into(), Vec::new(), exchange)
    }

    fn from_parts(
        success: bool,
        message: String,
        rates: Vec<AggregatedRate>,
        exchange: QuoteExchange,
    ) -> Self {
        Self {
            success,
            message,
            rates,
            responses: exchange.responses,
            raw_responses: exchange.raw_responses,
            request: exchange.request,
            test: exchange.test,
            quoted_at: Timestamp::now(),
        }
    }

    /// Returns true if the quote succeeded.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns `"success"` or the failure reason.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the consolidated rates. Empty on failure.
    #[inline]
    #[must_use]
    pub fn rates(&self) -> &[AggregatedRate] {
        &self.rates
    }

    /// Returns the parsed response documents.
    #[inline]
    #[must_use]
    pub fn responses(&self) -> &[serde_json::Value] {
        &self.responses
    }

    /// Returns the raw response bodies in package order.
    #[inline]
    #[must_use]
    pub fn raw_responses(&self) -> &[String] {
        &self.raw_responses
    }

    /// Returns the request URLs built for the shipment.
    #[inline]
    #[must_use]
    pub fn request(&self) -> &[String] {
        &self.request
    }

    /// Returns true if the quote ran in test mode.
    #[inline]
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.test
    }

    /// Returns when the result was produced.
    #[inline]
    #[must_use]
    pub fn quoted_at(&self) -> Timestamp {
        self.quoted_at
    }
}

/// Request/response data exchanged with the API during one quote.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteExchange {
    /// Request URLs, one per package.
    pub request: Vec<String>,
    /// Raw bodies received so far.
    pub raw_responses: Vec<String>,
    /// Parsed documents; empty unless every body parsed.
    pub responses: Vec<serde_json::Value>,
    /// Whether the quote ran in test mode.
    pub test: bool,
}
