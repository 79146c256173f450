//! # Carrier Settings
//!
//! Immutable values injected into the rating pipeline at construction.

use crate::domain::entities::Location;
use crate::domain::value_objects::CountryCode;
use serde::{Deserialize, Serialize};

/// Default rate API base URL.
pub const DEFAULT_BASE_URL: &str = "http://shippingoptions-nzpg.au.cloudhub.io/v1";

/// Carrier display name attached to every rate.
pub const CARRIER_NAME: &str = "New Zealand Post";

/// Settings for one carrier account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarrierSettings {
    carrier_name: String,
    base_url: String,
    account_number: String,
    test: bool,
}

impl CarrierSettings {
    /// Creates settings for an account against the default endpoint.
    #[must_use]
    pub fn new(account_number: impl Into<String>) -> Self {
        Self {
            carrier_name: CARRIER_NAME.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            account_number: account_number.into(),
            test: false,
        }
    }

    /// Overrides the API base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets test mode.
    #[must_use]
    pub fn with_test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Returns the carrier display name.
    #[inline]
    #[must_use]
    pub fn carrier_name(&self) -> &str {
        &self.carrier_name
    }

    /// Returns the API base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the billing account number.
    #[inline]
    #[must_use]
    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    /// Returns true in test mode.
    #[inline]
    #[must_use]
    pub fn is_test(&self) -> bool {
        self.test
    }

    /// Returns the carrier's default origin: the Wellington mail centre.
    #[must_use]
    pub fn default_location() -> Location {
        Location::builder()
            .country(CountryCode::new_zealand())
            .city("Wellington")
            .address1("22 Waterloo Quay")
            .address2("Pipitea")
            .postal_code("6011")
            .build()
    }
}

/// Per-call overrides merged over [`CarrierSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteOptions {
    /// Billing account to quote against instead of the configured one.
    pub account_number: Option<String>,
    /// Test mode override.
    pub test: Option<bool>,
}

impl QuoteOptions {
    /// Creates options with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the account number.
    #[must_use]
    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    /// Overrides test mode.
    #[must_use]
    pub fn with_test(mut self, test: bool) -> Self {
        self.test = Some(test);
        self
    }

    /// Returns the account number to use, preferring the override.
    #[must_use]
    pub fn account_number<'a>(&'a self, settings: &'a CarrierSettings) -> &'a str {
        self.account_number
            .as_deref()
            .unwrap_or(settings.account_number())
    }

    /// Returns the test flag to use, preferring the override.
    #[must_use]
    pub fn test(&self, settings: &CarrierSettings) -> bool {
        self.test.unwrap_or(settings.is_test())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::is_new_zealand;

    #[test]
    fn defaults() {
        let settings = CarrierSettings::new("91833337");
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
        assert_eq!(settings.carrier_name(), CARRIER_NAME);
        assert!(!settings.is_test());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let settings = CarrierSettings::new("1").with_base_url("http://localhost:8080/v1/");
        assert_eq!(settings.base_url(), "http://localhost:8080/v1");
    }

    #[test]
    fn options_override_settings() {
        let settings = CarrierSettings::new("91833337").with_test(true);
        let options = QuoteOptions::new().with_account_number("123").with_test(false);
        assert_eq!(options.account_number(&settings), "123");
        assert!(!options.test(&settings));

        let none = QuoteOptions::new();
        assert_eq!(none.account_number(&settings), "91833337");
        assert!(none.test(&settings));
    }

    #[test]
    fn default_location_is_in_new_zealand() {
        let location = CarrierSettings::default_location();
        assert!(is_new_zealand(&location));
        assert_eq!(location.suburb(), Some("Pipitea"));
        assert_eq!(location.postal_code(), Some("6011"));
    }
}
