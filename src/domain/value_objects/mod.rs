//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Codes
//!
//! - [`CountryCode`]: ISO 3166 alpha-2 country code
//! - [`CurrencyCode`]: ISO 4217 currency code
//!
//! ## Numeric Types
//!
//! - [`Money`]: Amount in minor currency units
//! - [`billable_units`]: Round-up-with-floor rule for billed measurements
//!
//! ## Request Data
//!
//! - [`RequestParams`]: Sorted query parameters for one API call
//!
//! ## Domain Enums
//!
//! - [`ApiVariant`]: Domestic or international rate API
//! - [`PackageShape`]: Cuboid or cylinder
//! - [`UnitSystem`]: Metric or imperial measurements

pub mod arithmetic;
pub mod codes;
pub mod enums;
pub mod money;
pub mod request_params;
pub mod timestamp;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, billable_units};
pub use codes::{CountryCode, CurrencyCode};
pub use enums::{ApiVariant, PackageShape, ParseEnumError, UnitSystem};
pub use money::Money;
pub use request_params::RequestParams;
pub use timestamp::Timestamp;
