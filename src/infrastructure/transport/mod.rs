//! # Rate Transport
//!
//! Fetching raw rate responses from the API.
//!
//! - [`RateTransport`]: Port used by the quoting pipeline
//! - [`HttpRateTransport`]: reqwest implementation with the license-key header
//! - [`InMemoryTransport`]: Canned responses for testing
//! - [`TransportError`]: Transport failures

pub mod error;
pub mod http_client;
pub mod in_memory;
pub mod traits;

pub use error::{TransportError, TransportResult};
pub use http_client::{HttpRateTransport, LICENSE_KEY_HEADER};
pub use in_memory::InMemoryTransport;
pub use traits::RateTransport;
