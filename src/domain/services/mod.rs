//! # Domain Services
//!
//! Pure rules that don't belong to a single entity.
//!
//! ## Services
//!
//! - [`location_classifier`]: Domestic/international decision and origin gate
//! - [`package_parameters`]: Per-package query parameters

pub mod location_classifier;
pub mod package_parameters;

pub use location_classifier::{classify, ensure_rateable, is_new_zealand};
pub use package_parameters::{declared_value, package_params};
