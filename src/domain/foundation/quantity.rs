//! Quantity value object (numeric value plus unit).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Unit;

/// A numeric amount expressed in a [`Unit`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    value: f64,
    unit: Unit,
}

impl Quantity {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Creates a quantity in kilograms.
    pub fn in_kg(value: f64) -> Self {
        Self::new(value, Unit::Kilogram)
    }

    /// Creates a quantity in kilowatt hours.
    pub fn in_kwh(value: f64) -> Self {
        Self::new(value, Unit::KilowattHour)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_value_and_unit() {
        assert_eq!(Quantity::in_kg(2.0).to_string(), "2 kg");
        assert_eq!(Quantity::new(1.5, Unit::CubicMeter).to_string(), "1.5 m3");
    }

    #[test]
    fn shortcut_constructors_set_unit() {
        assert_eq!(Quantity::in_kwh(1.0).unit(), Unit::KilowattHour);
        assert_eq!(Quantity::in_kg(3.0).value(), 3.0);
    }

    #[test]
    fn deserializes_from_record_shape() {
        let quantity: Quantity = serde_json::from_str(r#"{"value": 4.2, "unit": "m2"}"#).unwrap();
        assert_eq!(quantity, Quantity::new(4.2, Unit::SquareMeter));
    }
}
