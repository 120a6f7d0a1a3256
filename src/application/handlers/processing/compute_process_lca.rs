//! ComputeProcessLcaHandler - Query handler computing the indicator results
//! of one process of a life cycle for a given quantity.

use std::sync::Arc;

use crate::application::handlers::life_cycle_loader::load_life_cycle;
use crate::application::ApplicationError;
use crate::domain::foundation::{ProcessId, ProcessLifeCycleId, Quantity};
use crate::domain::indicator::IndicatorIdent;
use crate::domain::processing::{IndicatorResults, ProcessLcaCalculator, ProcessingError};
use crate::ports::ProcessLifeCycleRepository;

/// Query for the LCA results of one process.
#[derive(Debug, Clone)]
pub struct ComputeProcessLcaQuery {
    pub life_cycle_id: ProcessLifeCycleId,
    pub process_id: ProcessId,
    /// Amount of the element, in any unit convertible to the process unit.
    pub quantity: Quantity,
    /// Indicators to compute. Must contain `pet`.
    pub indicators: Vec<IndicatorIdent>,
}

/// Handler for process LCA results.
pub struct ComputeProcessLcaHandler {
    repository: Arc<dyn ProcessLifeCycleRepository>,
}

impl ComputeProcessLcaHandler {
    pub fn new(repository: Arc<dyn ProcessLifeCycleRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ComputeProcessLcaQuery) -> Result<IndicatorResults, ApplicationError> {
        let life_cycle = load_life_cycle(self.repository.as_ref(), query.life_cycle_id).await?;

        let process = life_cycle.find_process_by_id(query.process_id).ok_or(
            ProcessingError::ProcessNotFoundInLifeCycle {
                process_id: query.process_id,
                process_config_id: life_cycle.process_config_id(),
            },
        )?;

        let calculator = ProcessLcaCalculator::new(&life_cycle, query.indicators)?;
        Ok(calculator.compute(process, query.quantity)?)
    }
}
