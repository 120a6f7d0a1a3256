//! Shared lookup of process life cycles for the query handlers.

use crate::application::ApplicationError;
use crate::domain::foundation::ProcessLifeCycleId;
use crate::domain::process::ProcessLifeCycle;
use crate::ports::ProcessLifeCycleRepository;

/// Loads a stored life cycle and builds the aggregate from it.
///
/// # Errors
///
/// - `LifeCycleNotFound` if nothing is stored under `id`
/// - `Validation` if the stored record has malformed codes
pub(crate) async fn load_life_cycle(
    repository: &dyn ProcessLifeCycleRepository,
    id: ProcessLifeCycleId,
) -> Result<ProcessLifeCycle, ApplicationError> {
    let record = repository
        .find_by_id(id)
        .await?
        .ok_or(ApplicationError::LifeCycleNotFound(id))?;

    Ok(record.to_domain()?)
}
