//! # Request Builder
//!
//! Builds one rate API URL per package.
//!
//! Parameters are merged in increasing precedence:
//!
//! 1. shared: `account_number`
//! 2. variant: pickup/delivery post codes and suburbs for domestic
//!    shipments, `delivery_country` for international ones
//! 3. package: `weight`, shape dimensions and `value`
//!
//! Query keys are sorted and form-encoded, so a space becomes `+`.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::application::services::request_builder::build_url;
//! use nzpost_rates::domain::value_objects::{ApiVariant, RequestParams};
//!
//! let url = build_url(
//!     "http://localhost/v1",
//!     ApiVariant::International,
//!     RequestParams::new().with("account_number", "1"),
//!     RequestParams::new().with("delivery_country", "CA"),
//!     RequestParams::new().with("weight", 2),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     url,
//!     "http://localhost/v1/international?account_number=1&delivery_country=CA&weight=2"
//! );
//! ```

use crate::application::error::{PipelineResult, QuoteError};
use crate::domain::entities::{Location, Package};
use crate::domain::services::package_params;
use crate::domain::value_objects::{ApiVariant, RequestParams};
use reqwest::Url;
use serde::{Deserialize, Serialize};

/// One outbound request, tied to the package it prices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestDescriptor {
    package_index: usize,
    url: String,
}

impl RequestDescriptor {
    /// Creates a new descriptor.
    #[must_use]
    pub fn new(package_index: usize, url: impl Into<String>) -> Self {
        Self {
            package_index,
            url: url.into(),
        }
    }

    /// Returns the index of the package this request prices.
    #[inline]
    #[must_use]
    pub fn package_index(&self) -> usize {
        self.package_index
    }

    /// Returns the fully-qualified request URL.
    #[inline]
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Parameters sent with every request for an account.
#[must_use]
pub fn shared_params(account_number: &str) -> RequestParams {
    RequestParams::new().with("account_number", account_number)
}

/// Parameters that depend on the API variant and the two locations.
///
/// Missing location fields are sent as empty strings.
#[must_use]
pub fn variant_params(variant: ApiVariant, origin: &Location, destination: &Location) -> RequestParams {
    match variant {
        ApiVariant::Domestic => RequestParams::new()
            .with("pickup_address_post_code", origin.postal_code().unwrap_or_default())
            .with("pickup_address_suburb", origin.suburb().unwrap_or_default())
            .with(
                "delivery_address_post_code",
                destination.postal_code().unwrap_or_default(),
            )
            .with(
                "delivery_address_suburb",
                destination.suburb().unwrap_or_default(),
            ),
        ApiVariant::International => RequestParams::new().with(
            "delivery_country",
            destination
                .country_code()
                .map(|code| code.as_str())
                .unwrap_or_default(),
        ),
    }
}

/// Builds the URL for one package.
///
/// # Errors
///
/// Returns `QuoteError::Configuration` if `base_url` is not a valid URL.
pub fn build_url(
    base_url: &str,
    variant: ApiVariant,
    shared: RequestParams,
    variant_params: RequestParams,
    package_params: RequestParams,
) -> PipelineResult<String> {
    let endpoint = format!("{}/{}", base_url.trim_end_matches('/'), variant.path());
    let params = shared.merge(variant_params).merge(package_params);

    let url = Url::parse_with_params(&endpoint, params.iter()).map_err(|e| {
        QuoteError::configuration(format!("invalid base URL '{}': {}", base_url, e))
    })?;

    Ok(url.into())
}

/// Builds one request per package, in package order.
///
/// # Errors
///
/// Returns `QuoteError::Configuration` if `base_url` is not a valid URL.
pub fn build_requests(
    base_url: &str,
    account_number: &str,
    variant: ApiVariant,
    origin: &Location,
    destination: &Location,
    packages: &[Package],
) -> PipelineResult<Vec<RequestDescriptor>> {
    let shared = shared_params(account_number);
    let per_variant = variant_params(variant, origin, destination);

    packages
        .iter()
        .enumerate()
        .map(|(index, package)| {
            build_url(
                base_url,
                variant,
                shared.clone(),
                per_variant.clone(),
                package_params(package, variant),
            )
            .map(|url| RequestDescriptor::new(index, url))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::settings::DEFAULT_BASE_URL;
    use crate::domain::value_objects::CountryCode;
    use rust_decimal::Decimal;

    fn wellington() -> Location {
        Location::builder()
            .country(CountryCode::new_zealand())
            .city("Wellington")
            .address1("85 Victoria Street")
            .address2("Te Aro")
            .postal_code("6011")
            .build()
    }

    fn auckland() -> Location {
        Location::builder()
            .country(CountryCode::new_zealand())
            .city("Auckland")
            .address1("123 Queen Street")
            .address2("Auckland")
            .postal_code("1010")
            .build()
    }

    fn ottawa() -> Location {
        Location::builder()
            .country(CountryCode::new("CA").unwrap())
            .city("Ottawa")
            .address1("110 Laurier Avenue West")
            .postal_code("K1P 1J1")
            .build()
    }

    fn book() -> Package {
        Package::builder(Decimal::from(250))
            .dimensions([Decimal::from(14), Decimal::from(19), Decimal::from(2)])
            .build()
            .unwrap()
    }

    #[test]
    fn domestic_golden_url() {
        let requests = build_requests(
            DEFAULT_BASE_URL,
            "91833337",
            ApiVariant::Domestic,
            &wellington(),
            &auckland(),
            &[book()],
        )
        .unwrap();

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].package_index(), 0);
        assert_eq!(
            requests[0].url(),
            "http://shippingoptions-nzpg.au.cloudhub.io/v1/domestic?account_number=91833337\
             &delivery_address_post_code=1010&delivery_address_suburb=Auckland&height=2\
             &length=19&pickup_address_post_code=6011&pickup_address_suburb=Te+Aro\
             &weight=1&width=14"
        );
    }

    #[test]
    fn international_golden_url() {
        let requests = build_requests(
            DEFAULT_BASE_URL,
            "91833337",
            ApiVariant::International,
            &wellington(),
            &ottawa(),
            &[book()],
        )
        .unwrap();

        assert_eq!(
            requests[0].url(),
            "http://shippingoptions-nzpg.au.cloudhub.io/v1/international?account_number=91833337\
             &delivery_country=CA&height=2&length=19&value=0&weight=1&width=14"
        );
    }

    #[test]
    fn one_request_per_package_in_order() {
        let poster = Package::builder(Decimal::from(100))
            .dimensions([Decimal::from(93), Decimal::from(10)])
            .cylinder()
            .build()
            .unwrap();

        let requests = build_requests(
            DEFAULT_BASE_URL,
            "1",
            ApiVariant::Domestic,
            &wellington(),
            &auckland(),
            &[book(), poster],
        )
        .unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[1].package_index(), 1);
        assert!(requests[1].url().contains("diameter=10"));
        assert!(requests[1].url().contains("length=93"));
        assert!(!requests[1].url().contains("width="));
    }

    #[test]
    fn missing_location_fields_are_empty() {
        let bare = Location::builder().build();
        let params = variant_params(ApiVariant::Domestic, &bare, &bare);
        assert_eq!(params.get("pickup_address_suburb"), Some(""));
        assert_eq!(params.get("delivery_address_post_code"), Some(""));

        let params = variant_params(ApiVariant::International, &bare, &bare);
        assert_eq!(params.get("delivery_country"), Some(""));
    }

    #[test]
    fn later_layers_take_precedence() {
        let url = build_url(
            "http://localhost/v1/",
            ApiVariant::Domestic,
            RequestParams::new().with("weight", 9),
            RequestParams::new(),
            RequestParams::new().with("weight", 1),
        )
        .unwrap();
        assert_eq!(url, "http://localhost/v1/domestic?weight=1");
    }

    #[test]
    fn invalid_base_url_is_a_configuration_error() {
        let result = build_url(
            "not a url",
            ApiVariant::Domestic,
            RequestParams::new(),
            RequestParams::new(),
            RequestParams::new(),
        );
        assert!(matches!(result, Err(QuoteError::Configuration(_))));
    }
}
