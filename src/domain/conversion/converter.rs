//! Converter - re-expresses values through a conversion set.

use super::{ConversionError, ConversionSet};
use crate::domain::foundation::{Quantity, Unit};

/// Converts values between units using the conversions of one set.
#[derive(Debug, Clone, Copy)]
pub struct Converter<'a> {
    conversions: &'a ConversionSet,
}

impl<'a> Converter<'a> {
    pub fn new(conversions: &'a ConversionSet) -> Self {
        Self { conversions }
    }

    /// Converts `value` from `from` into `to`.
    ///
    /// Identical units never need a stored conversion.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the set has no conversion for the pair
    /// - `MissingConversion` if the stored conversion is still unresolved
    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
        if from == to {
            return Ok(value);
        }

        self.conversions
            .find(from, to)
            .ok_or(ConversionError::NotFound { from, to })?
            .convert(value)
    }

    /// Converts a quantity into `to`.
    pub fn convert_quantity(&self, quantity: Quantity, to: Unit) -> Result<Quantity, ConversionError> {
        let value = self.convert(quantity.value(), quantity.unit(), to)?;
        Ok(Quantity::new(value, to))
    }
}
