//! # Package Parameters
//!
//! Derives the per-package query parameters the rate API expects.
//!
//! - `weight`: kilograms rounded up, minimum 1
//! - shape: `width`/`height`/`length` for cuboids, `diameter`/`length` for
//!   cylinders, centimetres rounded up, minimum 1
//! - `value` (international only): declared value in whole dollars, or `0`
//!   when there is no value or it is not in `NZD`
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::entities::Package;
//! use nzpost_rates::domain::services::package_parameters::package_params;
//! use nzpost_rates::domain::value_objects::ApiVariant;
//! use rust_decimal::Decimal;
//!
//! let book = Package::builder(Decimal::from(250))
//!     .dimensions([Decimal::from(14), Decimal::from(19), Decimal::from(2)])
//!     .build()
//!     .unwrap();
//!
//! let params = package_params(&book, ApiVariant::Domestic);
//! assert_eq!(params.get("weight"), Some("1"));
//! assert_eq!(params.get("height"), Some("2"));
//! assert!(!params.contains("value"));
//! ```

use crate::domain::entities::Package;
use crate::domain::value_objects::{ApiVariant, PackageShape, RequestParams, billable_units};

const MINOR_UNITS_PER_MAJOR: i64 = 100;

/// Builds the full parameter set for one package.
#[must_use]
pub fn package_params(package: &Package, variant: ApiVariant) -> RequestParams {
    RequestParams::new()
        .with("weight", billable_units(package.kilograms()))
        .merge(variant_params(package, variant))
        .merge(shape_params(package))
}

fn variant_params(package: &Package, variant: ApiVariant) -> RequestParams {
    match variant {
        ApiVariant::Domestic => RequestParams::new(),
        ApiVariant::International => RequestParams::new().with("value", declared_value(package)),
    }
}

fn shape_params(package: &Package) -> RequestParams {
    match package.shape() {
        PackageShape::Cuboid => RequestParams::new()
            .with("width", billable_units(package.width_cm()))
            .with("height", billable_units(package.height_cm()))
            .with("length", billable_units(package.length_cm())),
        PackageShape::Cylinder => RequestParams::new()
            .with("diameter", billable_units(package.diameter_cm()))
            .with("length", billable_units(package.length_cm())),
    }
}

/// Returns the declared value in whole New Zealand dollars, truncated.
///
/// Values in any other currency are declared as zero.
#[must_use]
pub fn declared_value(package: &Package) -> i64 {
    match package.value() {
        Some(minor) if package.is_valued_in_nzd() => minor / MINOR_UNITS_PER_MAJOR,
        _ => 0,
    }
}
