//! Conversion value object - a directional rule between two units.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConversionError, ConversionType};
use crate::domain::foundation::Unit;

/// A directional conversion from one unit into another.
///
/// The family is closed: a factor-based linear conversion, a placeholder for
/// a conversion that is needed but not supplied yet, and a linear conversion
/// whose type was declared by an import rather than guessed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Conversion {
    Linear {
        from_unit: Unit,
        to_unit: Unit,
        factor: f64,
    },
    Required {
        from_unit: Unit,
        to_unit: Unit,
    },
    ImportedLinear {
        from_unit: Unit,
        to_unit: Unit,
        factor: f64,
        conversion_type: ConversionType,
    },
}

impl Conversion {
    pub fn linear(from_unit: Unit, to_unit: Unit, factor: f64) -> Self {
        Conversion::Linear {
            from_unit,
            to_unit,
            factor,
        }
    }

    pub fn required(from_unit: Unit, to_unit: Unit) -> Self {
        Conversion::Required { from_unit, to_unit }
    }

    pub fn imported(
        from_unit: Unit,
        to_unit: Unit,
        factor: f64,
        conversion_type: ConversionType,
    ) -> Self {
        Conversion::ImportedLinear {
            from_unit,
            to_unit,
            factor,
            conversion_type,
        }
    }

    pub fn from_unit(&self) -> Unit {
        match self {
            Conversion::Linear { from_unit, .. }
            | Conversion::Required { from_unit, .. }
            | Conversion::ImportedLinear { from_unit, .. } => *from_unit,
        }
    }

    pub fn to_unit(&self) -> Unit {
        match self {
            Conversion::Linear { to_unit, .. }
            | Conversion::Required { to_unit, .. }
            | Conversion::ImportedLinear { to_unit, .. } => *to_unit,
        }
    }

    /// Returns the multiplicative factor, `None` for an unresolved conversion.
    pub fn factor(&self) -> Option<f64> {
        match self {
            Conversion::Linear { factor, .. } | Conversion::ImportedLinear { factor, .. } => {
                Some(*factor)
            }
            Conversion::Required { .. } => None,
        }
    }

    /// A conversion between identical units. Converting is the identity.
    pub fn is_trivial(&self) -> bool {
        self.from_unit() == self.to_unit()
    }

    /// Returns true unless this is a [`Conversion::Required`] placeholder.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Conversion::Required { .. })
    }

    pub fn conversion_type(&self) -> ConversionType {
        match self {
            Conversion::ImportedLinear {
                conversion_type, ..
            } => *conversion_type,
            _ => ConversionType::guess_for_units(self.from_unit(), self.to_unit()),
        }
    }

    pub fn is_known(&self) -> bool {
        self.conversion_type().is_known()
    }

    /// Converts a value expressed in `from_unit` into `to_unit`.
    ///
    /// # Errors
    ///
    /// Always fails with [`ConversionError::MissingConversion`] for a
    /// [`Conversion::Required`] placeholder.
    pub fn convert(&self, value: f64) -> Result<f64, ConversionError> {
        match self {
            Conversion::Required { from_unit, to_unit } => Err(ConversionError::MissingConversion {
                from: *from_unit,
                to: *to_unit,
            }),
            _ if self.is_trivial() => Ok(value),
            Conversion::Linear { factor, .. } | Conversion::ImportedLinear { factor, .. } => {
                Ok(value * factor)
            }
        }
    }

    /// Returns the conversion for the opposite direction.
    pub fn invert(&self) -> Conversion {
        match *self {
            Conversion::Linear {
                from_unit,
                to_unit,
                factor,
            } => Conversion::linear(to_unit, from_unit, 1.0 / factor),
            Conversion::Required { from_unit, to_unit } => Conversion::required(to_unit, from_unit),
            Conversion::ImportedLinear {
                from_unit,
                to_unit,
                factor,
                conversion_type,
            } => Conversion::imported(to_unit, from_unit, 1.0 / factor, conversion_type),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.factor() {
            Some(factor) => write!(f, "{} >> {} ({})", self.from_unit(), self.to_unit(), factor),
            None => write!(f, "{} >> {} (?)", self.from_unit(), self.to_unit()),
        }
    }
}
