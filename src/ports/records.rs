//! Raw records exchanged with the persistence and import collaborators.
//!
//! Records carry plain codes and numbers as they are stored. Converting a
//! record into its domain type validates every code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::benchmark::{
    BenchmarkGroup, ComplianceMode, NamedScoreThresholds, ThresholdsByIndicator,
};
use crate::domain::conversion::{Conversion, ConversionType};
use crate::domain::foundation::{
    BenchmarkVersionId, ProcessConfigId, ProcessDbId, ProcessId, ProcessLifeCycleId, Quantity, Unit,
    ValidationError,
};
use crate::domain::indicator::{IndicatorIdent, IndicatorValue, IndicatorValues};
use crate::domain::process::{Module, Process, ProcessLifeCycle};

fn default_ratio() -> f64 {
    1.0
}

/// Converts an ident → value map into indicator values.
pub fn indicator_values_from_map(map: &BTreeMap<String, f64>) -> Result<IndicatorValues, ValidationError> {
    let values = map
        .iter()
        .map(|(ident, value)| Ok(IndicatorValue::new(IndicatorIdent::new(ident.as_str())?, *value)))
        .collect::<Result<Vec<_>, ValidationError>>()?;
    Ok(IndicatorValue::collect_map(values))
}

// ─────────────────────────────────────────────────────────────────────
// Process life cycle
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityRecord {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRecord {
    pub process_id: i64,
    pub module: String,
    pub quantity: QuantityRecord,
    pub name: String,
    #[serde(default = "default_ratio")]
    pub ratio: f64,
    #[serde(default)]
    pub indicator_values: BTreeMap<String, f64>,
}

impl ProcessRecord {
    pub fn to_domain(&self) -> Result<Process, ValidationError> {
        let module = Module::from_code(&self.module)?;
        let unit = Unit::from_code(&self.quantity.unit)?;

        if !(self.quantity.value.is_finite() && self.quantity.value > 0.0) {
            return Err(ValidationError::invalid_format(
                "quantity.value",
                format!("expected a positive number, got {}", self.quantity.value),
            ));
        }
        if !(self.ratio.is_finite() && (0.0..=1.0).contains(&self.ratio)) {
            return Err(ValidationError::out_of_range("ratio", 0.0, 1.0, self.ratio));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }

        Ok(Process::new(
            ProcessId::new(self.process_id),
            module,
            Quantity::new(self.quantity.value, unit),
            self.name.trim(),
            self.ratio,
            indicator_values_from_map(&self.indicator_values)?,
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRecord {
    pub from_unit: String,
    pub to_unit: String,
    pub factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_type: Option<String>,
}

impl ConversionRecord {
    /// Builds a linear conversion, or an imported one when a type ident is set.
    pub fn to_domain(&self) -> Result<Conversion, ValidationError> {
        let from = Unit::from_code(&self.from_unit)?;
        let to = Unit::from_code(&self.to_unit)?;

        if !(self.factor.is_finite() && self.factor > 0.0) {
            return Err(ValidationError::invalid_format(
                "factor",
                format!("expected a positive number, got {}", self.factor),
            ));
        }

        match &self.conversion_type {
            Some(ident) => Ok(Conversion::imported(
                from,
                to,
                self.factor,
                ConversionType::from_ident(ident)?,
            )),
            None => Ok(Conversion::linear(from, to, self.factor)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessLifeCycleRecord {
    pub process_config_id: i64,
    pub process_db_id: i64,
    #[serde(default)]
    pub processes: Vec<ProcessRecord>,
    #[serde(default)]
    pub conversions: Vec<ConversionRecord>,
}

impl ProcessLifeCycleRecord {
    pub fn id(&self) -> ProcessLifeCycleId {
        ProcessLifeCycleId::new(
            ProcessDbId::new(self.process_db_id),
            ProcessConfigId::new(self.process_config_id),
        )
    }

    pub fn to_domain(&self) -> Result<ProcessLifeCycle, ValidationError> {
        let processes = self
            .processes
            .iter()
            .map(ProcessRecord::to_domain)
            .collect::<Result<Vec<_>, _>>()?;
        let conversions = self
            .conversions
            .iter()
            .map(ConversionRecord::to_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProcessLifeCycle::new(
            ProcessConfigId::new(self.process_config_id),
            ProcessDbId::new(self.process_db_id),
            processes,
            conversions,
        ))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Benchmark versions
// ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRecord {
    pub score: i32,
    pub value: f64,
}

/// Thresholds of one indicator, optionally limited to a category such as
/// "with special conditions".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorThresholdsRecord {
    pub indicator: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub thresholds: Vec<ThresholdRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupThresholdRecord {
    pub score: i32,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkGroupRecord {
    pub name: String,
    pub indicators: Vec<String>,
    pub thresholds: Vec<GroupThresholdRecord>,
}

impl BenchmarkGroupRecord {
    pub fn to_domain(&self) -> Result<BenchmarkGroup, ValidationError> {
        let indicators = self
            .indicators
            .iter()
            .map(|ident| IndicatorIdent::new(ident.as_str()))
            .collect::<Result<Vec<_>, _>>()?;
        let thresholds = self
            .thresholds
            .iter()
            .map(|t| (t.score, t.caption.clone()))
            .collect();

        Ok(BenchmarkGroup::new(self.name.clone(), indicators, thresholds))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkVersionRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub use_reference_model: bool,
    /// Explicit compliance flag. Detected from the threshold idents when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en15804_compliant: Option<bool>,
    #[serde(default)]
    pub thresholds: Vec<IndicatorThresholdsRecord>,
    #[serde(default)]
    pub ref_construction_values: BTreeMap<String, f64>,
    #[serde(default)]
    pub groups: Vec<BenchmarkGroupRecord>,
}

impl BenchmarkVersionRecord {
    pub fn id(&self) -> BenchmarkVersionId {
        BenchmarkVersionId::new(self.id)
    }

    /// Threshold tables for a category.
    ///
    /// Uncategorized tables apply to every category; a table of the requested
    /// category replaces the uncategorized one of the same indicator.
    pub fn thresholds_for(&self, category: Option<&str>) -> Result<ThresholdsByIndicator, ValidationError> {
        let mut thresholds = ThresholdsByIndicator::new();

        let uncategorized = self.thresholds.iter().filter(|t| t.category.is_none());
        let categorized = self
            .thresholds
            .iter()
            .filter(|t| category.is_some() && t.category.as_deref() == category);

        for record in uncategorized.chain(categorized) {
            let ident = IndicatorIdent::new(record.indicator.as_str())?;
            let table = NamedScoreThresholds::from_pairs(
                ident.as_str(),
                record.thresholds.iter().map(|t| (t.score, t.value)),
            );
            thresholds.insert(ident, table);
        }

        Ok(thresholds)
    }

    pub fn compliance_mode(&self, thresholds: &ThresholdsByIndicator) -> ComplianceMode {
        self.en15804_compliant
            .map(ComplianceMode::from_flag)
            .unwrap_or_else(|| ComplianceMode::detect(thresholds))
    }

    pub fn ref_construction_values(&self) -> Result<IndicatorValues, ValidationError> {
        indicator_values_from_map(&self.ref_construction_values)
    }

    pub fn groups(&self) -> Result<Vec<BenchmarkGroup>, ValidationError> {
        self.groups.iter().map(BenchmarkGroupRecord::to_domain).collect()
    }
}

// ─────────────────────────────────────────────────────────────────────
// Variants
// ─────────────────────────────────────────────────────────────────────

/// Summed indicator values of one building variant, ready to be benchmarked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantRecord {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark_version_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub indicator_values: BTreeMap<String, f64>,
    /// Operation values of the reference building, used by the reference model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ref_operation_values: Option<BTreeMap<String, f64>>,
}

impl VariantRecord {
    pub fn indicator_values(&self) -> Result<IndicatorValues, ValidationError> {
        indicator_values_from_map(&self.indicator_values)
    }

    pub fn ref_operation_values(&self) -> Result<IndicatorValues, ValidationError> {
        self.ref_operation_values
            .as_ref()
            .map(indicator_values_from_map)
            .unwrap_or_else(|| Ok(IndicatorValues::new()))
    }
}
