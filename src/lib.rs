//! # nzpost-rates
//!
//! Multi-package rate quoting for the New Zealand Post shipping options API.
//!
//! The API prices one package per request. This crate builds a request per
//! package, fetches them in order and keeps only the services offered for
//! every package, summing their prices into one rate per service.
//!
//! # Layers
//!
//! - [`domain`]: Locations, packages, rates and the pure rating rules
//! - [`application`]: Request building, response aggregation and the
//!   [`RateQuoteAssembler`]
//! - [`infrastructure`]: HTTP transport, configuration and tracing setup
//!
//! # Examples
//!
//! ```ignore
//! use nzpost_rates::{CarrierConfig, QuoteOptions, RateQuoteAssembler};
//! use std::sync::Arc;
//!
//! let config = CarrierConfig::from_env()?;
//! config.validate()?;
//! let assembler = RateQuoteAssembler::new(config.settings()?, Arc::new(config.transport()?));
//!
//! let result = assembler
//!     .quote(&origin, &destination, &packages, &QuoteOptions::default())
//!     .await;
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CarrierSettings, QuoteError, QuoteOptions, RateQuoteAssembler};
pub use domain::entities::{AggregatedRate, Location, Package, QuoteResult};
pub use domain::value_objects::{ApiVariant, CountryCode, CurrencyCode, Money};
pub use infrastructure::{CarrierConfig, HttpRateTransport, RateTransport};
