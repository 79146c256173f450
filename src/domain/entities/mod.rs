//! # Domain Entities
//!
//! ## Inputs
//!
//! - [`Location`]: Shipment origin or destination
//! - [`Package`]: Parcel with normalised metric measurements
//!
//! ## Outputs
//!
//! - [`ProductOffer`]: One service quoted for one package
//! - [`AggregatedRate`]: One service priced across the whole shipment
//! - [`QuoteResult`]: Success or failure of a quote, with its request trail

pub mod location;
pub mod package;
pub mod quote_result;
pub mod rate;

pub use location::{Location, LocationBuilder};
pub use package::{Package, PackageBuilder};
pub use quote_result::{QuoteExchange, QuoteResult};
pub use rate::{AggregatedRate, ProductOffer};
