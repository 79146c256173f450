//! # Package Entity
//!
//! A physical parcel to be rated.
//!
//! Packages are described in metric (grams, centimetres) or imperial
//! (ounces, inches) units and normalised to kilograms and centimetres on
//! construction. Dimensions are sorted ascending and padded on the small side
//! to three values, then read as `height <= width <= length`.
//!
//! # Examples
//!
//! ```
//! use nzpost_rates::domain::entities::package::Package;
//! use rust_decimal::Decimal;
//!
//! let book = Package::builder(Decimal::from(250))
//!     .dimensions([Decimal::from(14), Decimal::from(19), Decimal::from(2)])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(book.height_cm(), Decimal::from(2));
//! assert_eq!(book.width_cm(), Decimal::from(14));
//! assert_eq!(book.length_cm(), Decimal::from(19));
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{CheckedArithmetic, CurrencyCode, PackageShape, UnitSystem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grams per avoirdupois ounce.
const GRAMS_PER_OUNCE: Decimal = Decimal::from_parts(2_579_719_349, 6, 0, false, 9);

/// Centimetres per inch.
const CENTIMETRES_PER_INCH: Decimal = Decimal::from_parts(254, 0, 0, false, 2);

const GRAMS_PER_KILOGRAM: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

const MAX_DIMENSIONS: usize = 3;

/// A parcel with normalised metric measurements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Weight in grams.
    grams: Decimal,
    /// `[height, width, length]` in centimetres, ascending.
    dimensions_cm: [Decimal; MAX_DIMENSIONS],
    /// Units the package was originally described in.
    units: UnitSystem,
    shape: PackageShape,
    /// Declared value in minor currency units.
    value: Option<i64>,
    currency: Option<CurrencyCode>,
}

impl Package {
    /// Returns a builder for a package of the given weight.
    ///
    /// The weight is in grams for metric packages and ounces for imperial ones.
    pub fn builder(weight: Decimal) -> PackageBuilder {
        PackageBuilder::new(weight)
    }

    /// Returns the weight in kilograms.
    #[must_use]
    pub fn kilograms(&self) -> Decimal {
        self.grams / GRAMS_PER_KILOGRAM
    }

    /// Returns the smallest dimension in centimetres.
    #[inline]
    #[must_use]
    pub fn height_cm(&self) -> Decimal {
        self.dimensions_cm[0]
    }

    /// Returns the middle dimension in centimetres.
    #[inline]
    #[must_use]
    pub fn width_cm(&self) -> Decimal {
        self.dimensions_cm[1]
    }

    /// Returns the largest dimension in centimetres.
    #[inline]
    #[must_use]
    pub fn length_cm(&self) -> Decimal {
        self.dimensions_cm[2]
    }

    /// Returns the diameter in centimetres.
    ///
    /// Cylinders are described by their cross-section and length, so the
    /// diameter is the width of the normalised dimensions.
    #[inline]
    #[must_use]
    pub fn diameter_cm(&self) -> Decimal {
        self.width_cm()
    }

    /// Returns the units the package was described in.
    #[inline]
    #[must_use]
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Returns the package shape.
    #[inline]
    #[must_use]
    pub fn shape(&self) -> PackageShape {
        self.shape
    }

    /// Returns true if the package is a cylinder.
    #[inline]
    #[must_use]
    pub fn is_cylinder(&self) -> bool {
        self.shape == PackageShape::Cylinder
    }

    /// Returns the declared value in minor currency units.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<i64> {
        self.value
    }

    /// Returns the declared currency, if any.
    #[inline]
    #[must_use]
    pub fn currency(&self) -> Option<&CurrencyCode> {
        self.currency.as_ref()
    }

    /// Returns true if the declared value is in New Zealand dollars.
    ///
    /// A package without an explicit currency is assumed to be in `NZD`.
    #[must_use]
    pub fn is_valued_in_nzd(&self) -> bool {
        self.currency.as_ref().is_none_or(CurrencyCode::is_nzd)
    }
}

impl fmt::Display for Package {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Package({}g {}x{}x{}cm {})",
            self.grams,
            self.height_cm(),
            self.width_cm(),
            self.length_cm(),
            self.shape
        )
    }
}

/// Builder for [`Package`].
#[derive(Debug, Clone)]
#[must_use]
pub struct PackageBuilder {
    weight: Decimal,
    dimensions: Vec<Decimal>,
    units: UnitSystem,
    shape: PackageShape,
    value: Option<i64>,
    currency: Option<CurrencyCode>,
}

impl PackageBuilder {
    /// Creates a builder for a package of the given weight.
    pub fn new(weight: Decimal) -> Self {
        Self {
            weight,
            dimensions: Vec::new(),
            units: UnitSystem::Metric,
            shape: PackageShape::Cuboid,
            value: None,
            currency: None,
        }
    }

    /// Sets up to three dimensions, in any order.
    pub fn dimensions(mut self, dimensions: impl IntoIterator<Item = Decimal>) -> Self {
        self.dimensions = dimensions.into_iter().collect();
        self
    }

    /// Sets the measurement system.
    pub fn units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Describes the package in ounces and inches.
    pub fn imperial(self) -> Self {
        self.units(UnitSystem::Imperial)
    }

    /// Marks the package as a cylinder.
    pub fn cylinder(mut self) -> Self {
        self.shape = PackageShape::Cylinder;
        self
    }

    /// Sets the package shape.
    pub fn shape(mut self, shape: PackageShape) -> Self {
        self.shape = shape;
        self
    }

    /// Sets the declared value in minor currency units.
    pub fn value(mut self, minor_units: i64) -> Self {
        self.value = Some(minor_units);
        self
    }

    /// Sets the currency of the declared value.
    pub fn currency(mut self, currency: CurrencyCode) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Builds the package, converting to grams and centimetres.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` if the weight, any dimension, or the
    /// declared value is negative, if more than three dimensions are given, or
    /// if a unit conversion overflows.
    pub fn build(self) -> DomainResult<Package> {
        if self.weight < Decimal::ZERO {
            return Err(DomainError::invalid_value("weight", "must not be negative"));
        }
        if self.dimensions.len() > MAX_DIMENSIONS {
            return Err(DomainError::invalid_value(
                "dimensions",
                format!("expected at most {}, got {}", MAX_DIMENSIONS, self.dimensions.len()),
            ));
        }
        if self.dimensions.iter().any(|d| *d < Decimal::ZERO) {
            return Err(DomainError::invalid_value(
                "dimensions",
                "must not be negative",
            ));
        }
        if self.value.is_some_and(|v| v < 0) {
            return Err(DomainError::invalid_value("value", "must not be negative"));
        }

        let (gram_factor, cm_factor) = match self.units {
            UnitSystem::Metric => (Decimal::ONE, Decimal::ONE),
            UnitSystem::Imperial => (GRAMS_PER_OUNCE, CENTIMETRES_PER_INCH),
        };

        let grams = convert("weight", self.weight, gram_factor)?;

        let mut sorted = self
            .dimensions
            .iter()
            .map(|d| convert("dimensions", *d, cm_factor))
            .collect::<DomainResult<Vec<_>>>()?;
        sorted.sort();

        Ok(Package {
            grams,
            dimensions_cm: pad_dimensions(&sorted),
            units: self.units,
            shape: self.shape,
            value: self.value,
            currency: self.currency,
        })
    }
}

fn convert(field: &'static str, value: Decimal, factor: Decimal) -> DomainResult<Decimal> {
    value
        .safe_mul(factor)
        .map_err(|e| DomainError::invalid_value(field, e.to_string()))
}

/// Pads ascending dimensions to three by repeating the smallest value.
///
/// `[]` becomes `[0, 0, 0]`, `[a]` becomes `[a, a, a]` and `[a, b]` becomes
/// `[a, a, b]`.
fn pad_dimensions(sorted: &[Decimal]) -> [Decimal; MAX_DIMENSIONS] {
    match *sorted {
        [] => [Decimal::ZERO; MAX_DIMENSIONS],
        [a] => [a, a, a],
        [a, b] => [a, a, b],
        [a, b, c, ..] => [a, b, c],
    }
}
