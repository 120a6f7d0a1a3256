//! NamedScoreThresholds - a named score → value calibration table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Calibration table mapping scores to indicator values.
///
/// Score keys are kept in ascending order. Values are taken as configured and
/// are not required to be monotonic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScoreThresholds {
    name: String,
    thresholds: BTreeMap<i32, f64>,
}

impl NamedScoreThresholds {
    pub fn new(name: impl Into<String>, thresholds: BTreeMap<i32, f64>) -> Self {
        Self {
            name: name.into(),
            thresholds,
        }
    }

    /// Builds a table from `(score, value)` pairs. A repeated score keeps the
    /// last value.
    pub fn from_pairs(name: impl Into<String>, pairs: impl IntoIterator<Item = (i32, f64)>) -> Self {
        Self::new(name, pairs.into_iter().collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Configured scores, ascending.
    pub fn scores(&self) -> Vec<i32> {
        self.thresholds.keys().copied().collect()
    }

    /// `(score, value)` pairs in ascending score order.
    pub fn entries(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.thresholds.iter().map(|(score, value)| (*score, *value))
    }

    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    pub fn min_score(&self) -> Option<i32> {
        self.thresholds.keys().next().copied()
    }

    pub fn max_score(&self) -> Option<i32> {
        self.thresholds.keys().next_back().copied()
    }

    /// Value configured at the minimum score.
    pub fn min_score_value(&self) -> Option<f64> {
        self.thresholds.values().next().copied()
    }

    /// Value configured at the maximum score.
    pub fn max_score_value(&self) -> Option<f64> {
        self.thresholds.values().next_back().copied()
    }

    pub fn value_at(&self, score: i32) -> Option<f64> {
        self.thresholds.get(&score).copied()
    }
}
