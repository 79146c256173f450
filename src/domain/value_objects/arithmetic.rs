//! # Checked Arithmetic
//!
//! Safe arithmetic and rounding helpers for measurements and money.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//! - [`billable_units`] - Round up to a whole unit with a floor of one
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::value_objects::arithmetic::billable_units;
//! use rust_decimal::Decimal;
//!
//! assert_eq!(billable_units(Decimal::new(25, 2)), 1);
//! assert_eq!(billable_units(Decimal::new(1801, 2)), 19);
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Rounds a measurement up to whole units, never below one.
///
/// The rate API bills in whole kilograms and whole centimetres, and a
/// zero-sized measurement is billed as one unit. Values beyond `u64` saturate.
#[inline]
#[must_use]
pub fn billable_units(value: Decimal) -> u64 {
    value.ceil().max(Decimal::ONE).to_u64().unwrap_or(u64::MAX)
}

/// Trait for checked arithmetic operations.
///
/// Provides arithmetic methods that return `Result` instead of panicking on
/// overflow.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely multiply two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for Decimal {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_mul(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_mul(rhs).ok_or(ArithmeticError::Overflow)
    }
}
