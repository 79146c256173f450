//! # Rate Quote Assembler
//!
//! Orchestrates one multi-package quote.
//!
//! The assembler classifies the shipment, builds one URL per package,
//! fetches each in package order and hands the bodies to the
//! [`ResponseAggregator`]. Nothing escapes as an error: every failure is
//! folded into a failed [`QuoteResult`] carrying the URLs built and the
//! bodies received before the failure.
//!
//! International shipments that do not originate in New Zealand still have
//! their URLs built, but nothing is fetched.
//!
//! # Examples
//!
//! ```ignore
//! use nzpost_rates::application::services::rate_quote::RateQuoteAssembler;
//! use nzpost_rates::application::settings::{CarrierSettings, QuoteOptions};
//! use nzpost_rates::infrastructure::transport::HttpRateTransport;
//! use std::sync::Arc;
//!
//! let transport = Arc::new(HttpRateTransport::new("license-key", 10_000)?);
//! let assembler = RateQuoteAssembler::new(CarrierSettings::new("91833337"), transport);
//!
//! let result = assembler
//!     .quote(&origin, &destination, &packages, &QuoteOptions::default())
//!     .await;
//! for rate in result.rates() {
//!     println!("{}", rate);
//! }
//! ```

use crate::application::error::QuoteError;
use crate::application::services::request_builder::{RequestDescriptor, build_requests};
use crate::application::services::response_aggregator::ResponseAggregator;
use crate::application::settings::{CarrierSettings, QuoteOptions};
use crate::domain::entities::{Location, Package, QuoteExchange, QuoteResult};
use crate::domain::services::{classify, is_new_zealand};
use crate::infrastructure::transport::RateTransport;
use std::sync::Arc;

/// Quotes shipments against one carrier account.
#[derive(Debug, Clone)]
pub struct RateQuoteAssembler {
    settings: CarrierSettings,
    transport: Arc<dyn RateTransport>,
    aggregator: ResponseAggregator,
}

impl RateQuoteAssembler {
    /// Creates an assembler for the given settings and transport.
    #[must_use]
    pub fn new(settings: CarrierSettings, transport: Arc<dyn RateTransport>) -> Self {
        let aggregator = ResponseAggregator::new(settings.carrier_name());
        Self {
            settings,
            transport,
            aggregator,
        }
    }

    /// Returns the settings this assembler was built with.
    #[must_use]
    pub fn settings(&self) -> &CarrierSettings {
        &self.settings
    }

    /// Quotes `packages` shipped from `origin` to `destination`.
    ///
    /// Always returns a result; check [`QuoteResult::is_success`].
    pub async fn quote(
        &self,
        origin: &Location,
        destination: &Location,
        packages: &[Package],
        options: &QuoteOptions,
    ) -> QuoteResult {
        let variant = classify(origin, destination);
        let mut exchange = QuoteExchange {
            test: options.test(&self.settings),
            ..QuoteExchange::default()
        };

        tracing::info!(%variant, packages = packages.len(), test = exchange.test, "quoting shipment");

        let requests = match build_requests(
            self.settings.base_url(),
            options.account_number(&self.settings),
            variant,
            origin,
            destination,
            packages,
        ) {
            Ok(requests) => requests,
            Err(error) => return fail(error, exchange),
        };
        exchange.request = requests.iter().map(|r| r.url().to_string()).collect();

        let fetched = if is_new_zealand(origin) {
            self.fetch_all(&requests, &mut exchange.raw_responses).await
        } else {
            Ok(())
        };
        if let Err(error) = fetched {
            return fail(error, exchange);
        }

        let aggregation = self
            .aggregator
            .aggregate(&exchange.raw_responses, origin, variant);
        exchange.responses = aggregation.responses;

        match aggregation.outcome {
            Ok(rates) => {
                tracing::info!(%variant, rates = rates.len(), "quote succeeded");
                QuoteResult::success(rates, exchange)
            }
            Err(error) => fail(error, exchange),
        }
    }

    /// Fetches every request in order, stopping at the first failure.
    async fn fetch_all(
        &self,
        requests: &[RequestDescriptor],
        bodies: &mut Vec<String>,
    ) -> Result<(), QuoteError> {
        for request in requests {
            tracing::debug!(index = request.package_index(), url = request.url(), "fetching package rates");
            let body = self.transport.fetch(request.url()).await?;
            bodies.push(body);
        }
        Ok(())
    }
}

fn fail(error: QuoteError, exchange: QuoteExchange) -> QuoteResult {
    tracing::warn!(%error, requests = exchange.request.len(), "quote failed");
    QuoteResult::failure(error.to_string(), exchange)
}
