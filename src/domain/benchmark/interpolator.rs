//! LinearScoreInterpolator - scores a value against a threshold table.

use std::collections::BTreeMap;

use super::{BenchmarkError, NamedScoreThresholds};
use crate::domain::indicator::IndicatorIdent;

/// Threshold tables keyed by the indicator they calibrate.
pub type ThresholdsByIndicator = BTreeMap<IndicatorIdent, NamedScoreThresholds>;

/// Builds one interpolator per indicator. Degenerate tables are skipped so
/// that their indicator is treated as having no thresholds.
pub(crate) fn interpolators_for(
    thresholds: &ThresholdsByIndicator,
) -> BTreeMap<IndicatorIdent, LinearScoreInterpolator> {
    let mut interpolators = BTreeMap::new();
    for (ident, table) in thresholds {
        match LinearScoreInterpolator::new(table) {
            Ok(interpolator) => {
                interpolators.insert(ident.clone(), interpolator);
            }
            Err(e) => tracing::warn!(indicator = %ident, "Skipping indicator: {}", e),
        }
    }
    interpolators
}

/// Scores indicator values by linear interpolation between calibration points,
/// clamped to the configured score range.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScoreInterpolator {
    name: String,
    entries: Vec<(i32, f64)>,
}

impl LinearScoreInterpolator {
    /// # Errors
    ///
    /// `DegenerateThresholds` if the table has fewer than two entries.
    pub fn new(thresholds: &NamedScoreThresholds) -> Result<Self, BenchmarkError> {
        if thresholds.len() < 2 {
            return Err(BenchmarkError::DegenerateThresholds {
                name: thresholds.name().to_string(),
                entries: thresholds.len(),
            });
        }

        Ok(Self {
            name: thresholds.name().to_string(),
            entries: thresholds.entries().collect(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn compute_score(&self, value: f64) -> f64 {
        let (min_score, min_value) = self.entries[0];
        let (max_score, max_value) = self.entries[self.entries.len() - 1];
        let (min_score, max_score) = (f64::from(min_score), f64::from(max_score));

        if min_value <= max_value {
            if value <= min_value {
                return min_score;
            }
            if value >= max_value {
                return max_score;
            }
        } else {
            if value >= min_value {
                return min_score;
            }
            if value <= max_value {
                return max_score;
            }
        }

        for pair in self.entries.windows(2) {
            let (lo_score, lo_value) = pair[0];
            let (hi_score, hi_value) = pair[1];

            if !(lo_value.min(hi_value) <= value && value <= lo_value.max(hi_value)) {
                continue;
            }
            if lo_value == hi_value {
                return f64::from(lo_score);
            }

            let span = f64::from(hi_score) - f64::from(lo_score);
            let score = f64::from(lo_score) + (value - lo_value) / (hi_value - lo_value) * span;
            return score.clamp(min_score, max_score);
        }

        // Only reached for NaN input.
        self.closest_score(value)
    }

    fn closest_score(&self, value: f64) -> f64 {
        self.entries
            .iter()
            .min_by(|a, b| (a.1 - value).abs().total_cmp(&(b.1 - value).abs()))
            .map(|(score, _)| f64::from(*score))
            .unwrap_or_default()
    }
}
