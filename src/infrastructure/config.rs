//! # Carrier Configuration
//!
//! Loads account credentials and transport settings.
//!
//! Values come from an optional TOML file overlaid with `NZPOST_*`
//! environment variables:
//!
//! * `NZPOST_ACCOUNT_NUMBER` - Billing account number (required)
//! * `NZPOST_LICENSE_KEY` - API license key (required)
//! * `NZPOST_TEST` - Route to sandbox behaviour (default: false)
//! * `NZPOST_BASE_URL` - API base URL
//! * `NZPOST_TIMEOUT_MS` - Per-request timeout (default: 10000)
//! * `NZPOST_LOG_LEVEL` - Log filter (default: info)

use crate::application::settings::{CarrierSettings, DEFAULT_BASE_URL};
use crate::infrastructure::transport::{HttpRateTransport, TransportError};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Default per-request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable prefix.
const ENV_PREFIX: &str = "NZPOST";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// The configuration sources could not be read or deserialized.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// A required setting is missing or blank.
    #[error("missing required setting: {0}")]
    MissingRequirement(&'static str),

    /// The HTTP transport could not be built from the settings.
    #[error("transport setup failed: {0}")]
    Transport(#[from] TransportError),
}

/// Raw carrier configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CarrierConfig {
    /// Billing account number.
    #[serde(default)]
    pub account_number: Option<String>,
    /// API license key.
    #[serde(default)]
    pub license_key: Option<String>,
    /// Test mode.
    #[serde(default)]
    pub test: bool,
    /// API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Log filter directive.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CarrierConfig {
    fn default() -> Self {
        Self {
            account_number: None,
            license_key: None,
            test: false,
            base_url: default_base_url(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: default_log_level(),
        }
    }
}

impl CarrierConfig {
    /// Loads configuration from the environment only.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Load` if a value cannot be deserialized.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::load(None)
    }

    /// Loads configuration from an optional file, then the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::Load` if the file is malformed or a value
    /// cannot be deserialized.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigurationError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        let config = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        Ok(config)
    }

    /// Checks that every requirement is present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingRequirement` naming the first
    /// missing setting.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.account_number()?;
        self.license_key()?;
        Ok(())
    }

    /// Returns the account number.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingRequirement` if it is unset or blank.
    pub fn account_number(&self) -> Result<&str, ConfigurationError> {
        required(self.account_number.as_deref(), "account_number")
    }

    /// Returns the license key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingRequirement` if it is unset or blank.
    pub fn license_key(&self) -> Result<&str, ConfigurationError> {
        required(self.license_key.as_deref(), "license_key")
    }

    /// Builds the settings injected into the quoting pipeline.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingRequirement` if the account number
    /// is missing.
    pub fn settings(&self) -> Result<CarrierSettings, ConfigurationError> {
        Ok(CarrierSettings::new(self.account_number()?)
            .with_base_url(&self.base_url)
            .with_test(self.test))
    }

    /// Builds the HTTP transport authenticated with the license key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::MissingRequirement` if the license key is
    /// missing, or `ConfigurationError::Transport` if the client cannot be
    /// created.
    pub fn transport(&self) -> Result<HttpRateTransport, ConfigurationError> {
        Ok(HttpRateTransport::new(self.license_key()?, self.timeout_ms)?)
    }
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, ConfigurationError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigurationError::MissingRequirement(name))
}
