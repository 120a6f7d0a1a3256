//! ProcessLifeCycle - processes and conversions of one process config.
//!
//! Aggregates the module datasets of a process config within one process
//! database together with the conversions known for that config, and derives
//! which units have to be mutually convertible.

use serde::Serialize;

use super::{Module, Process, Stage};
use crate::domain::conversion::{Conversion, ConversionSet, Converter};
use crate::domain::foundation::{
    ProcessConfigId, ProcessDbId, ProcessId, ProcessLifeCycleId, Quantity, Unit,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessLifeCycle {
    id: ProcessLifeCycleId,
    processes: Vec<Process>,
    conversions: Vec<Conversion>,
    #[serde(skip)]
    conversion_set: ConversionSet,
}

impl ProcessLifeCycle {
    pub fn new(
        process_config_id: ProcessConfigId,
        process_db_id: ProcessDbId,
        processes: Vec<Process>,
        conversions: Vec<Conversion>,
    ) -> Self {
        let conversion_set = conversions.iter().copied().collect();
        Self {
            id: ProcessLifeCycleId::new(process_db_id, process_config_id),
            processes,
            conversions,
            conversion_set,
        }
    }

    pub fn id(&self) -> ProcessLifeCycleId {
        self.id
    }

    pub fn process_config_id(&self) -> ProcessConfigId {
        self.id.process_config_id
    }

    pub fn process_db_id(&self) -> ProcessDbId {
        self.id.process_db_id
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Conversions as they were supplied.
    pub fn conversions(&self) -> &[Conversion] {
        &self.conversions
    }

    pub fn conversion_set(&self) -> &ConversionSet {
        &self.conversion_set
    }

    pub fn converter(&self) -> Converter<'_> {
        Converter::new(&self.conversion_set)
    }

    pub fn has_processes(&self) -> bool {
        !self.processes.is_empty()
    }

    pub fn has_conversions(&self) -> bool {
        !self.conversions.is_empty()
    }

    pub fn production_processes(&self) -> Vec<&Process> {
        self.processes_by_stage(Stage::Production).collect()
    }

    pub fn usage_processes(&self) -> Vec<&Process> {
        self.processes_by_stage(Stage::Usage).collect()
    }

    pub fn find_process_by_id(&self, id: ProcessId) -> Option<&Process> {
        self.processes.iter().find(|process| process.id() == id)
    }

    /// Distinct reference units of all processes outside the usage stage, in
    /// first-seen order.
    ///
    /// Usage processes (e.g. B6 energy in kWh) are referenced per year and
    /// never converted into the production unit.
    pub fn units(&self) -> Vec<Unit> {
        let mut units = Vec::new();
        for process in self.processes.iter().filter(|p| !p.stage().is_usage()) {
            let unit = process.quantitative_reference().unit();
            if !units.contains(&unit) {
                units.push(unit);
            }
        }
        units
    }

    /// Units that must be mutually convertible.
    pub fn required_units(&self) -> Vec<Unit> {
        self.units()
    }

    /// One conversion for every unordered pair of required units.
    ///
    /// A stored conversion is used when present, otherwise a
    /// [`Conversion::Required`] placeholder. Either is flipped when only the
    /// reverse direction has a known conversion type.
    pub fn required_conversions(&self) -> Vec<Conversion> {
        let units = self.required_units();

        let mut conversions = Vec::with_capacity(units.len() * units.len().saturating_sub(1) / 2);
        for (idx, from) in units.iter().enumerate() {
            for to in &units[idx + 1..] {
                let candidate = self
                    .conversion_set
                    .find(*from, *to)
                    .unwrap_or_else(|| Conversion::required(*from, *to));

                let inverted = candidate.invert();
                if !candidate.is_known() && inverted.is_known() {
                    conversions.push(inverted);
                } else {
                    conversions.push(candidate);
                }
            }
        }
        conversions
    }

    /// Stored conversions whose unit pair is not among the required ones.
    pub fn additional_conversions(&self) -> Vec<Conversion> {
        let required: ConversionSet = self.required_conversions().into_iter().collect();

        self.conversion_set
            .iter()
            .filter(|c| !required.has(c.from_unit(), c.to_unit()))
            .copied()
            .collect()
    }

    /// Stored conversions touching at least one required unit.
    pub fn production_conversions(&self) -> Vec<Conversion> {
        let units = self.required_units();

        self.conversion_set
            .iter()
            .filter(|c| units.contains(&c.from_unit()) || units.contains(&c.to_unit()))
            .copied()
            .collect()
    }

    /// Reference quantity of the process config.
    ///
    /// Uses the production rule of [`Self::quantitative_reference_for`] and
    /// falls back to the first usage process when no production process
    /// exists.
    pub fn quantitative_reference(&self) -> Option<Quantity> {
        self.quantitative_reference_for(Stage::Production)
            .or_else(|| self.quantitative_reference_for(Stage::Usage))
    }

    /// Reference quantity for an explicitly requested stage.
    ///
    /// For production the A1-3 process wins over other production modules.
    /// There is no fallback to other stages.
    pub fn quantitative_reference_for(&self, stage: Stage) -> Option<Quantity> {
        if stage.is_production() {
            if let Some(process) = self.processes.iter().find(|p| p.module() == Module::A13) {
                return Some(process.quantitative_reference());
            }
        }

        self.processes_by_stage(stage)
            .next()
            .map(Process::quantitative_reference)
    }

    fn processes_by_stage(&self, stage: Stage) -> impl Iterator<Item = &Process> + '_ {
        self.processes
            .iter()
            .filter(move |process| process.stage() == stage)
    }
}
