//! BNB benchmark against a reference building.

use std::collections::BTreeMap;
use tracing::debug;

use super::interpolator::interpolators_for;
use super::{LinearScoreInterpolator, ThresholdsByIndicator};
use crate::domain::indicator::{BenchmarkScores, IndicatorIdent, IndicatorValues};

/// Scores total indicator values as a ratio to the impact of a reference
/// building (construction plus operation).
#[derive(Debug, Clone)]
pub struct BnbRefValueBenchmarkCalculator {
    interpolators: BTreeMap<IndicatorIdent, LinearScoreInterpolator>,
    ref_construction_values: IndicatorValues,
}

impl BnbRefValueBenchmarkCalculator {
    pub fn new(thresholds: &ThresholdsByIndicator, ref_construction_values: IndicatorValues) -> Self {
        Self {
            interpolators: interpolators_for(thresholds),
            ref_construction_values,
        }
    }

    /// Scores every indicator present in the thresholds, the total values and
    /// both reference values. A zero reference sum skips the indicator.
    pub fn compute(
        &self,
        total_values: &IndicatorValues,
        ref_operation_values: &IndicatorValues,
    ) -> BenchmarkScores {
        let mut scores = BenchmarkScores::new();

        for (ident, total) in total_values {
            let (Some(interpolator), Some(ref_construction), Some(ref_operation)) = (
                self.interpolators.get(ident),
                self.ref_construction_values.get(ident),
                ref_operation_values.get(ident),
            ) else {
                continue;
            };

            let reference = ref_construction + ref_operation;
            if reference == 0.0 {
                continue;
            }

            let ratio = total / reference;
            let score = interpolator.compute_score(ratio);
            debug!(indicator = %ident, ratio, score, "Scored indicator against reference");
            scores.insert(ident.clone(), score);
        }

        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::benchmark::NamedScoreThresholds;
    use crate::domain::indicator::{ADP, GWP, ODP, PET};

    fn thresholds() -> ThresholdsByIndicator {
        [
            (GWP, vec![(10, 10.0), (50, 50.0), (100, 100.0)]),
            (ODP, vec![(10, 5.0), (50, 25.0), (100, 50.0)]),
            (ADP, vec![(10, 5.0), (50, 25.0), (100, 50.0)]),
            (PET, vec![(4, 4.0), (20, 20.0), (40, 40.0)]),
        ]
        .into_iter()
        .map(|(ident, pairs)| (IndicatorIdent::from(ident), NamedScoreThresholds::from_pairs(ident, pairs)))
        .collect()
    }

    fn values(pairs: &[(&'static str, f64)]) -> IndicatorValues {
        pairs
            .iter()
            .map(|(ident, value)| (IndicatorIdent::from(*ident), *value))
            .collect()
    }

    #[test]
    fn scores_ratio_to_reference() {
        let calculator = BnbRefValueBenchmarkCalculator::new(
            &thresholds(),
            values(&[(GWP, 2.0), (ODP, 2.0), (ADP, 2.0)]),
        );

        let scores = calculator.compute(
            &values(&[(GWP, 50.0), (ODP, 50.0), (ADP, 50.0)]),
            &values(&[(GWP, 2.0), (ODP, 2.0), (ADP, 2.0)]),
        );

        assert_eq!(scores.len(), 3);
        assert!((scores[GWP] - 12.5).abs() < 1e-10);
        assert!((scores[ODP] - 25.0).abs() < 1e-10);
        assert!((scores[ADP] - 25.0).abs() < 1e-10);
    }

    #[test]
    fn skips_indicators_missing_any_input() {
        let calculator = BnbRefValueBenchmarkCalculator::new(
            &thresholds(),
            values(&[(GWP, 2.0), (ODP, 2.0), (PET, 1.0)]),
        );

        let scores = calculator.compute(
            &values(&[(GWP, 50.0), (ADP, 50.0), (PET, 10.0), ("ep", 1.0)]),
            &values(&[(GWP, 2.0), (ODP, 2.0), (ADP, 2.0)]),
        );

        assert_eq!(scores.keys().map(|k| k.as_str()).collect::<Vec<_>>(), vec![GWP]);
    }

    #[test]
    fn skips_zero_reference() {
        let calculator =
            BnbRefValueBenchmarkCalculator::new(&thresholds(), values(&[(GWP, 0.0), (ODP, 2.0)]));

        let scores = calculator.compute(
            &values(&[(GWP, 50.0), (ODP, 50.0)]),
            &values(&[(GWP, 0.0), (ODP, 2.0)]),
        );

        assert!(!scores.contains_key(GWP));
        assert!(scores.contains_key(ODP));
    }
}
