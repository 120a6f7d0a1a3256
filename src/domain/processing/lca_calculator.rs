//! ProcessLcaCalculator - indicator results of one process for an amount.

use serde::Serialize;
use tracing::{debug, error};

use super::ProcessingError;
use crate::domain::foundation::{ProcessId, Quantity};
use crate::domain::indicator::{IndicatorIdent, PENRT, PERT, PET, PE_EM, PE_N_EM};
use crate::domain::process::{Module, Process, ProcessLifeCycle, Stage};

/// Indicators that add up to total primary energy.
const PRIMARY_ENERGY_PARTS: [&str; 4] = [PE_EM, PE_N_EM, PERT, PENRT];

/// Result of one indicator. `None` when the process has no value for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorResult {
    pub ident: IndicatorIdent,
    pub value: Option<f64>,
}

impl IndicatorResult {
    pub fn new(ident: IndicatorIdent, value: Option<f64>) -> Self {
        Self { ident, value }
    }

    /// Adds `value`; an undefined result becomes defined.
    pub fn add(&self, value: f64) -> Self {
        Self {
            ident: self.ident.clone(),
            value: Some(self.value.unwrap_or_default() + value),
        }
    }
}

/// Indicator results of a process module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorResults {
    module: Module,
    process_id: Option<ProcessId>,
    module_ratio: Option<f64>,
    results: Vec<IndicatorResult>,
}

impl IndicatorResults {
    pub fn new(
        module: Module,
        results: Vec<IndicatorResult>,
        process_id: Option<ProcessId>,
        module_ratio: Option<f64>,
    ) -> Self {
        Self {
            module,
            process_id,
            module_ratio,
            results,
        }
    }

    /// Results that are not tied to a single process.
    pub fn for_maintenance(results: Vec<IndicatorResult>) -> Self {
        Self::new(Module::Legacy(Stage::Maintenance), results, None, None)
    }

    pub fn module(&self) -> Module {
        self.module
    }

    pub fn stage(&self) -> Stage {
        self.module.stage()
    }

    pub fn process_id(&self) -> Option<ProcessId> {
        self.process_id
    }

    pub fn module_ratio(&self) -> f64 {
        self.module_ratio.unwrap_or(1.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndicatorResult> + '_ {
        self.results.iter()
    }

    pub fn value_for(&self, ident: &str) -> Option<f64> {
        self.results
            .iter()
            .find(|result| result.ident.as_str() == ident)
            .and_then(|result| result.value)
    }

    pub fn change_module(&self, module: Module) -> Self {
        Self {
            module,
            ..self.clone()
        }
    }

    /// Adds the values of `other` to the matching indicators of `self`.
    /// Indicators only present in `other` are ignored.
    pub fn add(&self, other: &IndicatorResults) -> Self {
        let results = self
            .results
            .iter()
            .map(|result| {
                match other.iter().find(|o| o.ident == result.ident).and_then(|o| o.value) {
                    Some(value) => result.add(value),
                    None => result.clone(),
                }
            })
            .collect();

        Self {
            results,
            ..self.clone()
        }
    }
}

/// Computes the indicator results of processes of one life cycle.
#[derive(Debug, Clone)]
pub struct ProcessLcaCalculator<'a> {
    life_cycle: &'a ProcessLifeCycle,
    indicators: Vec<IndicatorIdent>,
}

impl<'a> ProcessLcaCalculator<'a> {
    /// # Errors
    ///
    /// `MissingPetIndicator` if `indicators` does not contain `pet`.
    pub fn new(
        life_cycle: &'a ProcessLifeCycle,
        indicators: Vec<IndicatorIdent>,
    ) -> Result<Self, ProcessingError> {
        if !indicators.iter().any(|ident| ident.as_str() == PET) {
            return Err(ProcessingError::MissingPetIndicator);
        }

        Ok(Self {
            life_cycle,
            indicators,
        })
    }

    /// Computes the indicator results of `process` for `in_quantity`.
    ///
    /// Each indicator value is scaled by the converted amount (times the
    /// module ratio) relative to the process reference quantity. `pet` is
    /// the sum of the primary energy results.
    ///
    /// # Errors
    ///
    /// - `ProcessNotFoundInLifeCycle` if `process` is not part of the life cycle
    /// - `InvalidReferenceQuantity` if the reference quantity is not positive
    /// - `Conversion` if `in_quantity` cannot be expressed in the process unit
    pub fn compute(
        &self,
        process: &Process,
        in_quantity: Quantity,
    ) -> Result<IndicatorResults, ProcessingError> {
        if self.life_cycle.find_process_by_id(process.id()).is_none() {
            return Err(ProcessingError::ProcessNotFoundInLifeCycle {
                process_id: process.id(),
                process_config_id: self.life_cycle.process_config_id(),
            });
        }

        let reference = process.quantitative_reference();
        if !(reference.value().is_finite() && reference.value() > 0.0) {
            return Err(ProcessingError::InvalidReferenceQuantity {
                process_id: process.id(),
            });
        }

        let module_ratio = Self::module_ratio(process);
        let converted = module_ratio * self.convert(in_quantity, process)?;

        debug!(
            "Process {} [{}, {}, {} %] {} >> {}",
            process.name(),
            reference,
            process.module(),
            process.ratio() * 100.0,
            in_quantity,
            converted
        );

        let mut pet = IndicatorResult::new(IndicatorIdent::from(PET), Some(0.0));
        let mut results = Vec::with_capacity(self.indicators.len());

        for ident in self.indicators.iter().filter(|ident| ident.as_str() != PET) {
            let value = process
                .indicator_value_for(ident.as_str())
                .map(|value| value * converted / reference.value());

            if let Some(value) = value {
                if PRIMARY_ENERGY_PARTS.contains(&ident.as_str()) {
                    pet = pet.add(value);
                }
            }

            results.push(IndicatorResult::new(ident.clone(), value));
        }
        results.push(pet);

        Ok(IndicatorResults::new(
            process.module(),
            results,
            Some(process.id()),
            Some(process.ratio()),
        ))
    }

    /// The configured module ratio, or 1 when it is outside `[0, 1]`.
    pub fn module_ratio(process: &Process) -> f64 {
        let ratio = process.ratio();
        if (0.0..=1.0).contains(&ratio) {
            ratio
        } else {
            1.0
        }
    }

    fn convert(&self, in_quantity: Quantity, process: &Process) -> Result<f64, ProcessingError> {
        let to = process.quantitative_reference().unit();

        self.life_cycle
            .converter()
            .convert(in_quantity.value(), in_quantity.unit(), to)
            .map_err(|e| {
                error!(
                    "{}: conversion ({} >> {}) not found",
                    self.life_cycle.process_config_id(),
                    in_quantity.unit(),
                    to
                );
                ProcessingError::from(e)
            })
    }
}
