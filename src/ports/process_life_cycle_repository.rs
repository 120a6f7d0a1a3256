//! Process life cycle repository port.
//!
//! Stores the raw life cycle of a process config within one process
//! database: its processes per module and the declared unit conversions.

use async_trait::async_trait;

use super::records::ProcessLifeCycleRecord;
use super::RepositoryError;
use crate::domain::foundation::ProcessLifeCycleId;

/// Repository port for process life cycles.
#[async_trait]
pub trait ProcessLifeCycleRepository: Send + Sync {
    /// Save a life cycle, replacing any stored one with the same id.
    async fn save(&self, record: &ProcessLifeCycleRecord) -> Result<(), RepositoryError>;

    /// Find the life cycle of a process config within a process database.
    ///
    /// Returns `None` if nothing is stored under the id.
    async fn find_by_id(
        &self,
        id: ProcessLifeCycleId,
    ) -> Result<Option<ProcessLifeCycleRecord>, RepositoryError>;

    /// Ids of all stored life cycles, ascending.
    async fn list_ids(&self) -> Result<Vec<ProcessLifeCycleId>, RepositoryError>;
}
