//! # Location Entity
//!
//! A shipment origin or destination.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::entities::location::Location;
//! use nzpost_rates::domain::value_objects::CountryCode;
//!
//! let wellington = Location::builder()
//!     .country(CountryCode::new_zealand())
//!     .city("Wellington")
//!     .address1("85 Victoria Street")
//!     .address2("Te Aro")
//!     .postal_code("6011")
//!     .build();
//!
//! assert_eq!(wellington.suburb(), Some("Te Aro"));
//! ```

use crate::domain::value_objects::CountryCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A postal location.
///
/// Every field is optional. An absent country code is significant: the
/// classifier treats it as New Zealand.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Location {
    country: Option<CountryCode>,
    province: Option<String>,
    city: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    address3: Option<String>,
    postal_code: Option<String>,
}

impl Location {
    /// Returns a builder for a location.
    #[must_use]
    pub fn builder() -> LocationBuilder {
        LocationBuilder::default()
    }

    /// Returns the country code, if set.
    #[inline]
    #[must_use]
    pub fn country_code(&self) -> Option<&CountryCode> {
        self.country.as_ref()
    }

    /// Returns the province or region.
    #[inline]
    #[must_use]
    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    /// Returns the city.
    #[inline]
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    /// Returns the first address line.
    #[inline]
    #[must_use]
    pub fn address1(&self) -> Option<&str> {
        self.address1.as_deref()
    }

    /// Returns the second address line.
    #[inline]
    #[must_use]
    pub fn address2(&self) -> Option<&str> {
        self.address2.as_deref()
    }

    /// Returns the third address line.
    #[inline]
    #[must_use]
    pub fn address3(&self) -> Option<&str> {
        self.address3.as_deref()
    }

    /// Returns the postal code.
    #[inline]
    #[must_use]
    pub fn postal_code(&self) -> Option<&str> {
        self.postal_code.as_deref()
    }

    /// Returns the suburb sent to the domestic API (the second address line).
    #[inline]
    #[must_use]
    pub fn suburb(&self) -> Option<&str> {
        self.address2()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [
            self.address1(),
            self.address2(),
            self.address3(),
            self.city(),
            self.province(),
            self.postal_code(),
            self.country.as_ref().map(CountryCode::as_str),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect();
        f.write_str(&parts.join(", "))
    }
}

/// Builder for [`Location`].
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct LocationBuilder {
    location: Location,
}

impl LocationBuilder {
    /// Sets the country code.
    pub fn country(mut self, country: CountryCode) -> Self {
        self.location.country = Some(country);
        self
    }

    /// Sets the province or region.
    pub fn province(mut self, province: impl Into<String>) -> Self {
        self.location.province = Some(province.into());
        self
    }

    /// Sets the city.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.location.city = Some(city.into());
        self
    }

    /// Sets the first address line.
    pub fn address1(mut self, line: impl Into<String>) -> Self {
        self.location.address1 = Some(line.into());
        self
    }

    /// Sets the second address line (the suburb for New Zealand addresses).
    pub fn address2(mut self, line: impl Into<String>) -> Self {
        self.location.address2 = Some(line.into());
        self
    }

    /// Sets the third address line.
    pub fn address3(mut self, line: impl Into<String>) -> Self {
        self.location.address3 = Some(line.into());
        self
    }

    /// Sets the postal code.
    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.location.postal_code = Some(postal_code.into());
        self
    }

    /// Builds the location.
    #[must_use]
    pub fn build(self) -> Location {
        self.location
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let ottawa = Location::builder()
            .country(CountryCode::new("CA").unwrap())
            .province("ON")
            .city("Ottawa")
            .address1("110 Laurier Avenue West")
            .postal_code("K1P 1J1")
            .build();

        assert_eq!(ottawa.country_code().map(CountryCode::as_str), Some("CA"));
        assert_eq!(ottawa.city(), Some("Ottawa"));
        assert_eq!(ottawa.suburb(), None);
        assert_eq!(ottawa.postal_code(), Some("K1P 1J1"));
    }

    #[test]
    fn default_has_no_country() {
        assert!(Location::default().country_code().is_none());
    }

    #[test]
    fn display_joins_present_parts() {
        let location = Location::builder()
            .city("Auckland")
            .postal_code("1010")
            .country(CountryCode::new_zealand())
            .build();
        assert_eq!(location.to_string(), "Auckland, 1010, NZ");
    }
}
