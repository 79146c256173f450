//! # Money Value Object
//!
//! Monetary amounts held in minor currency units.
//!
//! Rates are returned by the API as GST-inclusive decimal amounts in major
//! units (`"9.58"`). Aggregated rates are reported in minor units (`958`),
//! converted from the exact decimal sum with half-away-from-zero rounding.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::value_objects::money::Money;
//! use nzpost_rates::domain::value_objects::codes::CurrencyCode;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_major(Decimal::new(958, 2), CurrencyCode::nzd()).unwrap();
//! assert_eq!(price.minor_units(), 958);
//! assert_eq!(price.to_string(), "9.58 NZD");
//! ```

use crate::domain::value_objects::arithmetic::{
    ArithmeticError, ArithmeticResult, CheckedArithmetic,
};
use crate::domain::value_objects::codes::CurrencyCode;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// An amount of money in minor units of a currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    minor_units: i64,
    currency: CurrencyCode,
}

impl Money {
    /// Creates an amount from minor units (cents).
    #[must_use]
    pub fn from_minor(minor_units: i64, currency: CurrencyCode) -> Self {
        Self {
            minor_units,
            currency,
        }
    }

    /// Creates an amount from a decimal in major units, rounding to the
    /// nearest minor unit (half away from zero).
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the amount does not fit in `i64`
    /// minor units.
    pub fn from_major(amount: Decimal, currency: CurrencyCode) -> ArithmeticResult<Self> {
        let minor = amount
            .safe_mul(Decimal::from(MINOR_UNITS_PER_MAJOR))?
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self::from_minor(minor, currency))
    }

    /// Returns the amount in minor units.
    #[inline]
    #[must_use]
    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }

    /// Returns the amount in major units.
    #[must_use]
    pub fn major_units(&self) -> Decimal {
        Decimal::new(self.minor_units, 2)
    }

    /// Returns the currency.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.major_units(), self.currency)
    }
}
