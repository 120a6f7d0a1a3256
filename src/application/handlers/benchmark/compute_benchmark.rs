//! ComputeBenchmarkHandler - Query handler scoring the indicator totals of a
//! building variant against a benchmark system version.
//!
//! The version decides the model: fixed threshold values (EN 15804 or legacy
//! primary energy idents) or the ratio to a reference building. Scores are
//! mapped to group captions where the version defines groups.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::benchmark::{
    BenchmarkGroup, BnbFixedValuesBenchmarkCalculator, BnbRefValueBenchmarkCalculator,
    ComplianceMode, GroupResult,
};
use crate::domain::foundation::BenchmarkVersionId;
use crate::domain::indicator::{BenchmarkScores, IndicatorIdent, IndicatorValues};
use crate::ports::{BenchmarkVersionReader, VariantRecord};

/// Query to benchmark one set of indicator totals.
#[derive(Debug, Clone)]
pub struct ComputeBenchmarkQuery {
    pub benchmark_version_id: BenchmarkVersionId,
    /// Threshold category; uncategorized thresholds apply either way.
    pub category: Option<String>,
    pub indicator_values: IndicatorValues,
    /// Operation values of the reference building. Only used by the
    /// reference model.
    pub ref_operation_values: IndicatorValues,
}

impl ComputeBenchmarkQuery {
    /// Builds the query for a dataset variant, falling back to the given
    /// defaults where the variant leaves version or category open.
    pub fn from_variant(
        variant: &VariantRecord,
        default_version: Option<BenchmarkVersionId>,
        default_category: Option<&str>,
    ) -> Result<Self, ApplicationError> {
        let benchmark_version_id = variant
            .benchmark_version_id
            .map(BenchmarkVersionId::new)
            .or(default_version)
            .ok_or(ApplicationError::NoBenchmarkVersion)?;

        Ok(Self {
            benchmark_version_id,
            category: variant
                .category
                .clone()
                .or_else(|| default_category.map(str::to_string)),
            indicator_values: variant.indicator_values()?,
            ref_operation_values: variant.ref_operation_values()?,
        })
    }
}

/// Benchmark model a version was evaluated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum BenchmarkModel {
    FixedValues { mode: ComplianceMode },
    ReferenceModel,
}

/// Scores of one benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkReport {
    pub benchmark_version_id: BenchmarkVersionId,
    pub benchmark_version_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub model: BenchmarkModel,
    pub scores: BenchmarkScores,
    pub groups: BTreeMap<IndicatorIdent, GroupResult>,
}

/// Handler for benchmark runs.
pub struct ComputeBenchmarkHandler {
    reader: Arc<dyn BenchmarkVersionReader>,
}

impl ComputeBenchmarkHandler {
    pub fn new(reader: Arc<dyn BenchmarkVersionReader>) -> Self {
        Self { reader }
    }

    pub async fn handle(&self, query: ComputeBenchmarkQuery) -> Result<BenchmarkReport, ApplicationError> {
        let version = self
            .reader
            .find_by_id(query.benchmark_version_id)
            .await?
            .ok_or(ApplicationError::BenchmarkVersionNotFound(query.benchmark_version_id))?;

        let thresholds = version.thresholds_for(query.category.as_deref())?;

        let (model, scores) = if version.use_reference_model {
            let calculator =
                BnbRefValueBenchmarkCalculator::new(&thresholds, version.ref_construction_values()?);
            (
                BenchmarkModel::ReferenceModel,
                calculator.compute(&query.indicator_values, &query.ref_operation_values),
            )
        } else {
            let mode = version.compliance_mode(&thresholds);
            let calculator = BnbFixedValuesBenchmarkCalculator::with_mode(&thresholds, mode);
            (
                BenchmarkModel::FixedValues { mode },
                calculator.compute(&query.indicator_values),
            )
        };

        let groups = BenchmarkGroup::group_scores(&version.groups()?, &scores);

        debug!(
            benchmark_version_id = %query.benchmark_version_id,
            model = ?model,
            scores = scores.len(),
            "Benchmark computed"
        );

        Ok(BenchmarkReport {
            benchmark_version_id: query.benchmark_version_id,
            benchmark_version_name: version.name,
            category: query.category,
            model,
            scores,
            groups,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryBenchmarkVersionReader;
    use crate::domain::indicator::{GWP, PE, PENRT, PERT, PET};
    use crate::ports::{
        BenchmarkGroupRecord, BenchmarkVersionRecord, GroupThresholdRecord,
        IndicatorThresholdsRecord, ThresholdRecord,
    };

    // ─────────────────────────────────────────────────────────────────────
    // Fixtures
    // ─────────────────────────────────────────────────────────────────────

    fn table(indicator: &str, category: Option<&str>, pairs: &[(i32, f64)]) -> IndicatorThresholdsRecord {
        IndicatorThresholdsRecord {
            indicator: indicator.to_string(),
            category: category.map(str::to_string),
            thresholds: pairs
                .iter()
                .map(|(score, value)| ThresholdRecord {
                    score: *score,
                    value: *value,
                })
                .collect(),
        }
    }

    fn fixed_version() -> BenchmarkVersionRecord {
        BenchmarkVersionRecord {
            id: 1,
            name: "BNB-BN 2015".to_string(),
            use_reference_model: false,
            en15804_compliant: None,
            thresholds: vec![
                table("gwp", None, &[(10, 30.9), (100, 79.8)]),
                table("gwp", Some("special"), &[(10, 20.0), (100, 40.0)]),
                table("pet", None, &[(4, 4.0), (20, 20.0), (40, 40.0)]),
                table("pert", None, &[(2, 2.0), (10, 10.0), (20, 20.0)]),
                table("penrt", None, &[(6, 6.0), (30, 30.0), (60, 60.0)]),
            ],
            ref_construction_values: BTreeMap::new(),
            groups: vec![BenchmarkGroupRecord {
                name: "Ökologische Qualität".to_string(),
                indicators: vec!["gwp".to_string()],
                thresholds: [(10, "Bronze"), (50, "Silber"), (80, "Gold")]
                    .iter()
                    .map(|(score, caption)| GroupThresholdRecord {
                        score: *score,
                        caption: caption.to_string(),
                    })
                    .collect(),
            }],
        }
    }

    fn reference_version() -> BenchmarkVersionRecord {
        BenchmarkVersionRecord {
            id: 2,
            name: "BNB-BN 2011".to_string(),
            use_reference_model: true,
            en15804_compliant: Some(false),
            thresholds: vec![table("gwp", None, &[(10, 10.0), (50, 50.0), (100, 100.0)])],
            ref_construction_values: [("gwp".to_string(), 2.0)].into_iter().collect(),
            groups: vec![],
        }
    }

    fn handler() -> ComputeBenchmarkHandler {
        let reader = InMemoryBenchmarkVersionReader::with_records(vec![fixed_version(), reference_version()]);
        ComputeBenchmarkHandler::new(Arc::new(reader))
    }

    fn values(pairs: &[(&'static str, f64)]) -> IndicatorValues {
        pairs
            .iter()
            .map(|(ident, value)| (IndicatorIdent::from(*ident), *value))
            .collect()
    }

    fn query(version: i64, category: Option<&str>, pairs: &[(&'static str, f64)]) -> ComputeBenchmarkQuery {
        ComputeBenchmarkQuery {
            benchmark_version_id: BenchmarkVersionId::new(version),
            category: category.map(str::to_string),
            indicator_values: values(pairs),
            ref_operation_values: values(&[(GWP, 2.0)]),
        }
    }

    // ─────────────────────────────────────────────────────────────────────
    // Tests
    // ─────────────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn fixed_values_model_scores_primary_energy() {
        let report = handler()
            .handle(query(1, None, &[(GWP, 79.8), (PERT, 12.5), (PENRT, 30.0), (PET, 50.0)]))
            .await
            .unwrap();

        assert_eq!(
            report.model,
            BenchmarkModel::FixedValues {
                mode: ComplianceMode::En15804
            }
        );
        assert!((report.scores[GWP] - 100.0).abs() < 1e-9);
        assert!((report.scores[PET] - 40.0).abs() < 1e-9);
        assert!((report.scores[PERT] - 20.0).abs() < 1e-9);
        assert!((report.scores[PENRT] - 30.0).abs() < 1e-9);
        assert!((report.scores[PE] - 90.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn group_captions_follow_scores() {
        let report = handler().handle(query(1, None, &[(GWP, 79.8)])).await.unwrap();

        let group = &report.groups[GWP];
        assert_eq!(group.name, "Ökologische Qualität");
        assert_eq!(group.caption.as_deref(), Some("Gold"));
        assert_eq!(report.groups.len(), 1);
    }

    #[tokio::test]
    async fn category_thresholds_apply() {
        let report = handler()
            .handle(query(1, Some("special"), &[(GWP, 30.0)]))
            .await
            .unwrap();

        assert!((report.scores[GWP] - 55.0).abs() < 1e-9);
        assert_eq!(report.category.as_deref(), Some("special"));
    }

    #[tokio::test]
    async fn reference_model_scores_ratio() {
        let report = handler().handle(query(2, None, &[(GWP, 50.0)])).await.unwrap();

        assert_eq!(report.model, BenchmarkModel::ReferenceModel);
        assert!((report.scores[GWP] - 12.5).abs() < 1e-9);
        assert!(report.groups.is_empty());
    }

    #[tokio::test]
    async fn unknown_version_is_not_found() {
        let result = handler().handle(query(99, None, &[(GWP, 1.0)])).await;
        assert_eq!(
            result,
            Err(ApplicationError::BenchmarkVersionNotFound(BenchmarkVersionId::new(99)))
        );
    }

    #[test]
    fn variant_query_uses_defaults() {
        let variant = VariantRecord {
            name: "Variant A".to_string(),
            benchmark_version_id: None,
            category: None,
            indicator_values: [("gwp".to_string(), 55.0)].into_iter().collect(),
            ref_operation_values: None,
        };

        let query =
            ComputeBenchmarkQuery::from_variant(&variant, Some(BenchmarkVersionId::new(1)), Some("special"))
                .unwrap();
        assert_eq!(query.benchmark_version_id, BenchmarkVersionId::new(1));
        assert_eq!(query.category.as_deref(), Some("special"));
        assert_eq!(query.indicator_values[GWP], 55.0);

        assert!(matches!(
            ComputeBenchmarkQuery::from_variant(&variant, None, None),
            Err(ApplicationError::NoBenchmarkVersion)
        ));
    }
}
