//! # Code Value Objects
//!
//! ISO country and currency codes.
//!
//! Both codes are normalised to upper case on construction so comparisons
//! against `NZ` and `NZD` are exact.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::value_objects::codes::{CountryCode, CurrencyCode};
//!
//! let nz = CountryCode::new("nz").unwrap();
//! assert!(nz.is_new_zealand());
//!
//! let nzd = CurrencyCode::new("NZD").unwrap();
//! assert!(nzd.is_nzd());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// ISO 3166-1 alpha-2 country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

impl CountryCode {
    /// New Zealand.
    pub const NEW_ZEALAND: &'static str = "NZ";

    /// Creates a country code from a two-letter string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the code is not two ASCII letters.
    pub fn new(code: impl AsRef<str>) -> DomainResult<Self> {
        let code = code.as_ref().trim();
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_value(
                "country code",
                format!("'{}' is not a two-letter ISO code", code),
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the New Zealand country code.
    #[must_use]
    pub fn new_zealand() -> Self {
        Self(Self::NEW_ZEALAND.to_string())
    }

    /// Returns true if this is New Zealand.
    #[inline]
    #[must_use]
    pub fn is_new_zealand(&self) -> bool {
        self.0 == Self::NEW_ZEALAND
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CountryCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

/// ISO 4217 currency code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// New Zealand dollar.
    pub const NZD: &'static str = "NZD";

    /// Creates a currency code from a three-letter string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the code is not three ASCII letters.
    pub fn new(code: impl AsRef<str>) -> DomainResult<Self> {
        let code = code.as_ref().trim();
        if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::invalid_value(
                "currency code",
                format!("'{}' is not a three-letter ISO code", code),
            ));
        }
        Ok(Self(code.to_ascii_uppercase()))
    }

    /// Returns the New Zealand dollar currency code.
    #[must_use]
    pub fn nzd() -> Self {
        Self(Self::NZD.to_string())
    }

    /// Returns true if this is the New Zealand dollar.
    #[inline]
    #[must_use]
    pub fn is_nzd(&self) -> bool {
        self.0 == Self::NZD
    }

    /// Returns the code as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CurrencyCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyCode> for String {
    fn from(code: CurrencyCode) -> Self {
        code.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn country_code_is_uppercased() {
        let code = CountryCode::new(" ca ").unwrap();
        assert_eq!(code.as_str(), "CA");
        assert!(!code.is_new_zealand());
    }

    #[test]
    fn country_code_rejects_bad_input() {
        assert!(CountryCode::new("NZL").is_err());
        assert!(CountryCode::new("N1").is_err());
        assert!(CountryCode::new("").is_err());
    }

    #[test]
    fn currency_code_round_trips_through_serde() {
        let code: CurrencyCode = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(code.as_str(), "GBP");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"GBP\"");
    }

    #[test]
    fn currency_code_rejects_bad_input() {
        assert!(CurrencyCode::new("NZ").is_err());
        assert!("N$D".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn nzd_helpers() {
        assert!(CurrencyCode::nzd().is_nzd());
        assert!(CountryCode::new_zealand().is_new_zealand());
    }
}
