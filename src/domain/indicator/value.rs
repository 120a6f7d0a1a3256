//! IndicatorValue and the indicator maps passed between components.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::IndicatorIdent;

/// Indicator ident → raw indicator value.
pub type IndicatorValues = BTreeMap<IndicatorIdent, f64>;

/// Indicator ident → benchmark score.
pub type BenchmarkScores = BTreeMap<IndicatorIdent, f64>;

/// A single indicator value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    ident: IndicatorIdent,
    value: f64,
}

impl IndicatorValue {
    pub fn new(ident: IndicatorIdent, value: f64) -> Self {
        Self { ident, value }
    }

    pub fn ident(&self) -> &IndicatorIdent {
        &self.ident
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Collects values into a map. A later value for the same ident replaces
    /// an earlier one.
    pub fn collect_map(values: impl IntoIterator<Item = IndicatorValue>) -> IndicatorValues {
        values
            .into_iter()
            .map(|value| (value.ident, value.value))
            .collect()
    }
}
