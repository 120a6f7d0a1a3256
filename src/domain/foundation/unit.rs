//! Unit value object for quantitative references.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A physical unit a process quantity or conversion is expressed in.
///
/// Equality and string form are defined by the unit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Kilogram,
    Meter,
    SquareMeter,
    CubicMeter,
    KilowattHour,
    Megajoule,
    Piece,
    TonneKilometer,
}

impl Unit {
    /// Returns all units in canonical order.
    pub fn all() -> &'static [Unit] {
        &[
            Unit::Kilogram,
            Unit::Meter,
            Unit::SquareMeter,
            Unit::CubicMeter,
            Unit::KilowattHour,
            Unit::Megajoule,
            Unit::Piece,
            Unit::TonneKilometer,
        ]
    }

    /// Returns the unit code.
    pub fn code(&self) -> &'static str {
        match self {
            Unit::Kilogram => "kg",
            Unit::Meter => "m",
            Unit::SquareMeter => "m2",
            Unit::CubicMeter => "m3",
            Unit::KilowattHour => "kWh",
            Unit::Megajoule => "MJ",
            Unit::Piece => "Stück",
            Unit::TonneKilometer => "tkm",
        }
    }

    /// Parses a unit code, accepting the common spelling variants.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        match code.trim() {
            "kg" => Ok(Unit::Kilogram),
            "m" => Ok(Unit::Meter),
            "m2" | "m²" => Ok(Unit::SquareMeter),
            "m3" | "m³" => Ok(Unit::CubicMeter),
            "kWh" => Ok(Unit::KilowattHour),
            "MJ" => Ok(Unit::Megajoule),
            "Stück" | "Stk" | "piece" => Ok(Unit::Piece),
            "tkm" => Ok(Unit::TonneKilometer),
            other => Err(ValidationError::unknown_code("unit", other)),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Unit {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_code(s)
    }
}

impl TryFrom<String> for Unit {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Unit::from_code(&value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.code().to_string()
    }
}
