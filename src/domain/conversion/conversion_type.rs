//! ConversionType enum classifying what a unit conversion factor means.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Unit, ValidationError};

/// The physical meaning of a conversion factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConversionType {
    GrossDensity,
    BulkDensity,
    AvgMpua,
    LayerThickness,
    Productiveness,
    LinearDensity,
    EnergyEquivalent,
    #[serde(rename = "INIT")]
    Initial,
    #[serde(rename = "PROD")]
    Production,
    ConversionToMass,
    Unknown,
}

impl ConversionType {
    /// Guesses the type from a unit pair.
    ///
    /// The lookup is direction-sensitive: only the declared direction of each
    /// table entry matches. Callers that accept either direction have to try
    /// the reversed pair themselves.
    pub fn guess_for_units(from: Unit, to: Unit) -> ConversionType {
        match (from, to) {
            (Unit::CubicMeter, Unit::Kilogram) => ConversionType::GrossDensity,
            (Unit::SquareMeter, Unit::Kilogram) => ConversionType::AvgMpua,
            (Unit::Meter, Unit::Kilogram) => ConversionType::LinearDensity,
            (Unit::KilowattHour, Unit::Megajoule) => ConversionType::EnergyEquivalent,
            _ => ConversionType::Unknown,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, ConversionType::Unknown)
    }

    /// Returns the persisted ident of this type.
    pub fn ident(&self) -> &'static str {
        match self {
            ConversionType::GrossDensity => "GROSS_DENSITY",
            ConversionType::BulkDensity => "BULK_DENSITY",
            ConversionType::AvgMpua => "AVG_MPUA",
            ConversionType::LayerThickness => "LAYER_THICKNESS",
            ConversionType::Productiveness => "PRODUCTIVENESS",
            ConversionType::LinearDensity => "LINEAR_DENSITY",
            ConversionType::EnergyEquivalent => "ENERGY_EQUIVALENT",
            ConversionType::Initial => "INIT",
            ConversionType::Production => "PROD",
            ConversionType::ConversionToMass => "CONVERSION_TO_MASS",
            ConversionType::Unknown => "UNKNOWN",
        }
    }

    /// Parses a persisted ident.
    pub fn from_ident(ident: &str) -> Result<Self, ValidationError> {
        match ident.trim() {
            "GROSS_DENSITY" => Ok(ConversionType::GrossDensity),
            "BULK_DENSITY" => Ok(ConversionType::BulkDensity),
            "AVG_MPUA" => Ok(ConversionType::AvgMpua),
            "LAYER_THICKNESS" => Ok(ConversionType::LayerThickness),
            "PRODUCTIVENESS" => Ok(ConversionType::Productiveness),
            "LINEAR_DENSITY" => Ok(ConversionType::LinearDensity),
            "ENERGY_EQUIVALENT" => Ok(ConversionType::EnergyEquivalent),
            "INIT" => Ok(ConversionType::Initial),
            "PROD" => Ok(ConversionType::Production),
            "CONVERSION_TO_MASS" => Ok(ConversionType::ConversionToMass),
            "UNKNOWN" => Ok(ConversionType::Unknown),
            other => Err(ValidationError::unknown_code("conversion type", other)),
        }
    }
}

impl fmt::Display for ConversionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ident())
    }
}

impl FromStr for ConversionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConversionType::from_ident(s)
    }
}
