//! # Rate Entities
//!
//! Per-package offers and consolidated shipment rates.
//!
//! A [`ProductOffer`] is one service quoted by the API for one package. An
//! [`AggregatedRate`] is the consolidated price of a service for the whole
//! shipment, only produced when every package was offered that service.

use crate::domain::value_objects::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One service offered for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOffer {
    /// Index of the package this offer was quoted for.
    package_index: usize,
    /// Service code, e.g. `CPOLP`.
    code: String,
    /// Human-readable service name, the grouping key across packages.
    name: String,
    /// GST-inclusive price in major units, as returned by the API.
    price: Decimal,
}

impl ProductOffer {
    /// Creates a new offer.
    #[must_use]
    pub fn new(
        package_index: usize,
        code: impl Into<String>,
        name: impl Into<String>,
        price: Decimal,
    ) -> Self {
        Self {
            package_index,
            code: code.into(),
            name: name.into(),
            price,
        }
    }

    /// Returns the index of the package this offer belongs to.
    #[inline]
    #[must_use]
    pub fn package_index(&self) -> usize {
        self.package_index
    }

    /// Returns the service code.
    #[inline]
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the service name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the GST-inclusive price in major units.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Decimal {
        self.price
    }
}

/// A consolidated rate for one service across every package in a shipment.
///
/// # Invariants
///
/// - Every package index `0..N-1` contributed exactly one offer with this
///   service name
/// - `service_code` comes from the first contributing offer
/// - `total_price` is the sum of every contributing price, in `NZD`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedRate {
    carrier: String,
    service_name: String,
    service_code: String,
    total_price: Money,
}

impl AggregatedRate {
    /// Creates a new aggregated rate.
    #[must_use]
    pub fn new(
        carrier: impl Into<String>,
        service_name: impl Into<String>,
        service_code: impl Into<String>,
        total_price: Money,
    ) -> Self {
        Self {
            carrier: carrier.into(),
            service_name: service_name.into(),
            service_code: service_code.into(),
            total_price,
        }
    }

    /// Returns the carrier display name.
    #[inline]
    #[must_use]
    pub fn carrier(&self) -> &str {
        &self.carrier
    }

    /// Returns the service name.
    #[inline]
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the service code.
    #[inline]
    #[must_use]
    pub fn service_code(&self) -> &str {
        &self.service_code
    }

    /// Returns the total price for the shipment.
    #[inline]
    #[must_use]
    pub fn total_price(&self) -> &Money {
        &self.total_price
    }

    /// Returns the total price in minor units.
    #[inline]
    #[must_use]
    pub fn price(&self) -> i64 {
        self.total_price.minor_units()
    }

    /// Returns the currency code.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &str {
        self.total_price.currency().as_str()
    }
}

impl fmt::Display for AggregatedRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}): {}",
            self.carrier, self.service_name, self.service_code, self.total_price
        )
    }
}
