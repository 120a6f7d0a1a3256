//! Process - one module dataset of a process life cycle.

use serde::{Deserialize, Serialize};

use super::{Module, Stage};
use crate::domain::foundation::{ProcessId, Quantity};
use crate::domain::indicator::IndicatorValues;

/// Read-only projection of a process dataset.
///
/// Built once from a persisted record and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Process {
    id: ProcessId,
    module: Module,
    quantitative_reference: Quantity,
    name: String,
    ratio: f64,
    indicator_values: IndicatorValues,
}

impl Process {
    pub fn new(
        id: ProcessId,
        module: Module,
        quantitative_reference: Quantity,
        name: impl Into<String>,
        ratio: f64,
        indicator_values: IndicatorValues,
    ) -> Self {
        Self {
            id,
            module,
            quantitative_reference,
            name: name.into(),
            ratio,
            indicator_values,
        }
    }

    pub fn id(&self) -> ProcessId {
        self.id
    }

    pub fn module(&self) -> Module {
        self.module
    }

    pub fn stage(&self) -> Stage {
        self.module.stage()
    }

    pub fn quantitative_reference(&self) -> Quantity {
        self.quantitative_reference
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Share of the module assigned to the process config.
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn indicator_values(&self) -> &IndicatorValues {
        &self.indicator_values
    }

    pub fn indicator_value_for(&self, ident: &str) -> Option<f64> {
        self.indicator_values.get(ident).copied()
    }
}
