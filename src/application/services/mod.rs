//! # Application Services
//!
//! The quoting pipeline.
//!
//! - [`RateQuoteAssembler`]: Runs one quote end to end
//! - [`request_builder`]: One URL per package
//! - [`ResponseAggregator`]: Per-package responses to shipment-wide rates

pub mod rate_quote;
pub mod request_builder;
pub mod response_aggregator;

pub use rate_quote::RateQuoteAssembler;
pub use request_builder::{RequestDescriptor, build_requests, build_url};
pub use response_aggregator::{Aggregation, ResponseAggregator};
