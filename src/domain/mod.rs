//! # Domain Layer
//!
//! Rating rules with no I/O: locations, packages, the domestic/international
//! decision, per-package parameter derivation and the consolidated rate model.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
