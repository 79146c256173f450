//! # Domain Enums
//!
//! Enumeration types for the rating domain.
//!
//! - [`ApiVariant`] - Domestic or international rate API
//! - [`PackageShape`] - Cuboid or cylinder parcels
//! - [`UnitSystem`] - Metric or imperial package measurements
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rate API variant used for a shipment.
///
/// Chosen once per shipment and fixed for the lifetime of a quote request.
///
/// # Examples
///
/// ```
/// use nzpost_rates::domain::value_objects::enums::ApiVariant;
///
/// assert_eq!(ApiVariant::Domestic.path(), "domestic");
/// assert_eq!(ApiVariant::International.to_string(), "international");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVariant {
    /// Both ends of the shipment are in New Zealand.
    Domestic,
    /// At least one end of the shipment is outside New Zealand.
    International,
}

impl ApiVariant {
    /// Returns the endpoint path segment for this variant.
    #[inline]
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::International => "international",
        }
    }
}

impl fmt::Display for ApiVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ApiVariant {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "domestic" => Ok(Self::Domestic),
            "international" => Ok(Self::International),
            _ => Err(ParseEnumError::InvalidValue("ApiVariant", s.to_string())),
        }
    }
}

/// Physical shape of a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageShape {
    /// Box-shaped parcel measured by width, height and length.
    #[default]
    Cuboid,
    /// Tube measured by diameter and length.
    Cylinder,
}

impl fmt::Display for PackageShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cuboid => write!(f, "cuboid"),
            Self::Cylinder => write!(f, "cylinder"),
        }
    }
}

impl FromStr for PackageShape {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cuboid" | "box" => Ok(Self::Cuboid),
            "cylinder" | "tube" => Ok(Self::Cylinder),
            _ => Err(ParseEnumError::InvalidValue("PackageShape", s.to_string())),
        }
    }
}

/// Measurement system a package was described in.
///
/// Metric packages are measured in grams and centimetres, imperial ones in
/// ounces and inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Grams and centimetres.
    #[default]
    Metric,
    /// Ounces and inches.
    Imperial,
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "metric"),
            Self::Imperial => write!(f, "imperial"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(ParseEnumError::InvalidValue("UnitSystem", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}
