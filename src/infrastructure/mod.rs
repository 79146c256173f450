//! # Infrastructure Layer
//!
//! Adapters to the outside world.
//!
//! - [`transport`]: HTTP and in-memory rate transports
//! - [`config`]: Credential and endpoint loading
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod telemetry;
pub mod transport;

pub use config::{CarrierConfig, ConfigurationError};
pub use telemetry::init_tracing;
pub use transport::{HttpRateTransport, InMemoryTransport, RateTransport, TransportError};
