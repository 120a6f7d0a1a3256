//! BNB benchmark against fixed threshold values.

use std::collections::BTreeMap;
use tracing::debug;

use super::interpolator::interpolators_for;
use super::{ComplianceMode, LinearScoreInterpolator, ThresholdsByIndicator};
use crate::domain::indicator::{BenchmarkScores, IndicatorIdent, IndicatorValues, PE, PET};

/// Scores indicator values (normalized per m² and year) against the fixed
/// thresholds of a benchmark version.
///
/// Renewable primary energy is not scored by its absolute value but by its
/// share of total primary energy. A derived `pe` score sums the primary
/// energy scores.
#[derive(Debug, Clone)]
pub struct BnbFixedValuesBenchmarkCalculator {
    interpolators: BTreeMap<IndicatorIdent, LinearScoreInterpolator>,
    mode: ComplianceMode,
}

impl BnbFixedValuesBenchmarkCalculator {
    /// Creates a calculator, detecting the compliance mode from the idents of
    /// the configured thresholds.
    pub fn new(thresholds: &ThresholdsByIndicator) -> Self {
        Self::with_mode(thresholds, ComplianceMode::detect(thresholds))
    }

    pub fn with_mode(thresholds: &ThresholdsByIndicator, mode: ComplianceMode) -> Self {
        Self {
            interpolators: interpolators_for(thresholds),
            mode,
        }
    }

    pub fn mode(&self) -> ComplianceMode {
        self.mode
    }

    /// Computes scores for every indicator that has both a value and
    /// thresholds. Indicators missing either are omitted.
    pub fn compute(&self, values: &IndicatorValues) -> BenchmarkScores {
        let mut scores = BenchmarkScores::new();

        for (ident, value) in values {
            if ident.is_renewable_primary_energy() {
                continue;
            }
            let Some(interpolator) = self.interpolators.get(ident) else {
                continue;
            };

            let score = interpolator.compute_score(*value);
            debug!(indicator = %ident, value, score, "Scored indicator");
            scores.insert(ident.clone(), score);
        }

        let total_energy = self.total_primary_energy(values).filter(|total| *total != 0.0);
        for ident in self.mode.renewable_idents() {
            let (Some(value), Some(interpolator), Some(total)) =
                (values.get(*ident), self.interpolators.get(*ident), total_energy)
            else {
                continue;
            };

            let share = value / total * 100.0;
            let score = interpolator.compute_score(share);
            debug!(indicator = %ident, share, score, "Scored renewable primary energy share");
            scores.insert(IndicatorIdent::from(*ident), score);
        }

        let primary_energy: Vec<f64> = [PET, self.mode.renewable_total(), self.mode.non_renewable_total()]
            .iter()
            .filter_map(|ident| scores.get(*ident).copied())
            .collect();
        if !primary_energy.is_empty() {
            scores.insert(IndicatorIdent::from(PE), primary_energy.iter().sum());
        }

        scores
    }

    /// Total primary energy: the `pet` value, else the sum of both totals.
    fn total_primary_energy(&self, values: &IndicatorValues) -> Option<f64> {
        if let Some(pet) = values.get(PET) {
            return Some(*pet);
        }

        let renewable = values.get(self.mode.renewable_total())?;
        let non_renewable = values.get(self.mode.non_renewable_total())?;
        Some(renewable + non_renewable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::benchmark::NamedScoreThresholds;
    use crate::domain::indicator::{ADP, GWP, ODP, PENRT, PERE, PERT, PE_EM, PE_N_EM};

    // ───────────────────────────────────────────────────────────────
    // Fixtures
    // ───────────────────────────────────────────────────────────────

    fn table(ident: &'static str, pairs: &[(i32, f64)]) -> (IndicatorIdent, NamedScoreThresholds) {
        (
            IndicatorIdent::from(ident),
            NamedScoreThresholds::from_pairs(ident, pairs.iter().copied()),
        )
    }

    fn common() -> Vec<(IndicatorIdent, NamedScoreThresholds)> {
        vec![
            table(GWP, &[(10, 10.0), (50, 50.0), (100, 100.0)]),
            table(ODP, &[(10, 5.0), (50, 25.0), (100, 50.0)]),
            table(ADP, &[(10, 5.0), (50, 25.0), (100, 50.0)]),
        ]
    }

    fn en15804_thresholds() -> ThresholdsByIndicator {
        let mut tables = common();
        tables.push(table(PET, &[(4, 4.0), (20, 20.0), (40, 40.0)]));
        tables.push(table(PERT, &[(2, 2.0), (10, 10.0), (20, 20.0)]));
        tables.push(table(PENRT, &[(6, 6.0), (30, 30.0), (60, 60.0)]));
        tables.into_iter().collect()
    }

    fn legacy_thresholds() -> ThresholdsByIndicator {
        let mut tables = common();
        tables.push(table(PET, &[(10, 10.0), (50, 50.0), (100, 100.0)]));
        tables.push(table(PE_EM, &[(5, 5.0), (25, 25.0), (50, 50.0)]));
        tables.push(table(PE_N_EM, &[(10, 10.0), (50, 50.0), (100, 10.0)]));
        tables.into_iter().collect()
    }

    fn values(pairs: &[(&'static str, f64)]) -> IndicatorValues {
        pairs
            .iter()
            .map(|(ident, value)| (IndicatorIdent::from(*ident), *value))
            .collect()
    }

    fn assert_scores(actual: &BenchmarkScores, expected: &[(&'static str, f64)]) {
        assert_eq!(actual.len(), expected.len(), "scores: {:?}", actual);
        for (ident, score) in expected {
            let actual_score = actual.get(*ident).copied();
            assert!(
                actual_score.is_some_and(|s| (s - score).abs() < 1e-10),
                "{}: expected {}, got {:?}",
                ident,
                score,
                actual_score
            );
        }
    }

    // ───────────────────────────────────────────────────────────────
    // Simple indicators
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn clamps_below_minimum() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(GWP, 5.0), (ODP, 3.0)]));
        assert_scores(&scores, &[(GWP, 10.0), (ODP, 10.0)]);
    }

    #[test]
    fn scores_minimum_at_minimum() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(GWP, 10.0), (ODP, 5.0)]));
        assert_scores(&scores, &[(GWP, 10.0), (ODP, 10.0)]);
    }

    #[test]
    fn interpolates_between_thresholds() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(GWP, 45.0), (ODP, 15.0)]));
        assert_scores(&scores, &[(GWP, 45.0), (ODP, 30.0)]);
    }

    #[test]
    fn scores_maximum_at_maximum() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(GWP, 100.0), (ODP, 50.0)]));
        assert_scores(&scores, &[(GWP, 100.0), (ODP, 100.0)]);
    }

    #[test]
    fn clamps_above_maximum() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(GWP, 110.0), (ODP, 60.0)]));
        assert_scores(&scores, &[(GWP, 100.0), (ODP, 100.0)]);
    }

    #[test]
    fn omits_indicators_without_thresholds_or_values() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(GWP, 45.0), ("ep", 1.0)]));
        assert_scores(&scores, &[(GWP, 45.0)]);
    }

    #[test]
    fn degenerate_thresholds_are_treated_as_missing() {
        let mut thresholds = en15804_thresholds();
        thresholds.insert(
            IndicatorIdent::from(ODP),
            NamedScoreThresholds::from_pairs(ODP, vec![(10, 5.0)]),
        );
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&thresholds);

        let scores = calculator.compute(&values(&[(GWP, 45.0), (ODP, 15.0)]));
        assert_scores(&scores, &[(GWP, 45.0)]);
    }

    // ───────────────────────────────────────────────────────────────
    // Primary energy
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn primary_energy_en15804() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        assert_eq!(calculator.mode(), ComplianceMode::En15804);

        let scores = calculator.compute(&values(&[(PERT, 12.5), (PENRT, 30.0), (PET, 50.0)]));
        assert_scores(
            &scores,
            &[(PERT, 20.0), (PENRT, 30.0), (PET, 40.0), (PE, 90.0)],
        );
    }

    #[test]
    fn primary_energy_en15804_incomplete() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(PERT, 12.5), (PET, 50.0)]));
        assert_scores(&scores, &[(PERT, 20.0), (PET, 40.0), (PE, 60.0)]);
    }

    #[test]
    fn primary_energy_legacy() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&legacy_thresholds());
        assert_eq!(calculator.mode(), ComplianceMode::Legacy);

        let scores = calculator.compute(&values(&[(PE_EM, 12.5), (PET, 50.0)]));
        assert_scores(&scores, &[(PE_EM, 25.0), (PET, 50.0), (PE, 75.0)]);
    }

    #[test]
    fn renewable_share_uses_totals_without_pet() {
        let mut thresholds = en15804_thresholds();
        thresholds.remove(PET);
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&thresholds);

        // 12.5 / (12.5 + 37.5) = 25% → clamped to 20
        let scores = calculator.compute(&values(&[(PERT, 12.5), (PENRT, 37.5)]));
        assert_scores(&scores, &[(PERT, 20.0), (PENRT, 37.5), (PE, 57.5)]);
    }

    #[test]
    fn renewable_share_skipped_without_total() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(PERT, 12.5), (GWP, 45.0)]));
        assert_scores(&scores, &[(GWP, 45.0)]);
    }

    #[test]
    fn renewable_share_skipped_for_zero_total() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(PERT, 12.5), (PET, 0.0)]));
        assert_scores(&scores, &[(PET, 4.0), (PE, 4.0)]);
    }

    #[test]
    fn renewable_ident_without_thresholds_is_omitted() {
        let calculator = BnbFixedValuesBenchmarkCalculator::new(&en15804_thresholds());
        let scores = calculator.compute(&values(&[(PERE, 5.0), (PET, 50.0)]));
        assert_scores(&scores, &[(PET, 40.0), (PE, 40.0)]);
    }

    #[test]
    fn explicit_mode_overrides_detection() {
        let calculator =
            BnbFixedValuesBenchmarkCalculator::with_mode(&legacy_thresholds(), ComplianceMode::En15804);
        let scores = calculator.compute(&values(&[(PE_EM, 12.5), (PET, 50.0)]));
        assert_scores(&scores, &[(PET, 50.0), (PE, 50.0)]);
    }
}
