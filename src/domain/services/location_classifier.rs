//! # Location Classifier
//!
//! Decides which rate API variant a shipment uses.
//!
//! A location counts as New Zealand when its country code is `NZ` or when it
//! has no country code at all. A shipment is domestic only when both ends are
//! New Zealand.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::entities::Location;
//! use nzpost_rates::domain::services::location_classifier::{classify, is_new_zealand};
//! use nzpost_rates::domain::value_objects::{ApiVariant, CountryCode};
//!
//! let auckland = Location::builder().country(CountryCode::new_zealand()).build();
//! let unknown = Location::default();
//!
//! assert!(is_new_zealand(&unknown));
//! assert_eq!(classify(&auckland, &unknown), ApiVariant::Domestic);
//! ```

use crate::domain::entities::Location;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ApiVariant, CountryCode};

/// Returns true if the location is in New Zealand or has no country code.
#[must_use]
pub fn is_new_zealand(location: &Location) -> bool {
    location
        .country_code()
        .is_none_or(CountryCode::is_new_zealand)
}

/// Classifies a shipment as domestic or international.
#[must_use]
pub fn classify(origin: &Location, destination: &Location) -> ApiVariant {
    if is_new_zealand(origin) && is_new_zealand(destination) {
        ApiVariant::Domestic
    } else {
        ApiVariant::International
    }
}

/// Checks that a shipment may be rated under the given variant.
///
/// International rates are only available for shipments leaving New Zealand.
///
/// # Errors
///
/// Returns `DomainError::ClassificationViolation` for an international
/// shipment whose origin is not New Zealand.
pub fn ensure_rateable(variant: ApiVariant, origin: &Location) -> DomainResult<()> {
    match variant {
        ApiVariant::International if !is_new_zealand(origin) => {
            Err(DomainError::ClassificationViolation)
        }
        _ => Ok(()),
    }
}
