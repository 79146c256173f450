//! # Application Layer
//!
//! Orchestrates the domain rules and the rate transport into one quote.
//!
//! - [`services`]: Request building, response aggregation and the assembler
//! - [`settings`]: Carrier settings and per-call options
//! - [`error`]: Pipeline failures

pub mod error;
pub mod services;
pub mod settings;

pub use error::{PipelineResult, QuoteError};
pub use services::RateQuoteAssembler;
pub use settings::{CARRIER_NAME, CarrierSettings, DEFAULT_BASE_URL, QuoteOptions};
