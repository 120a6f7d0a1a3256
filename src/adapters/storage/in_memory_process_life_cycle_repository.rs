//! In-Memory Process Life Cycle Repository
//!
//! Keeps process life cycle records in memory.
//! Used for tests and as the backing store of a loaded dataset file.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ProcessLifeCycleId;
use crate::ports::{ProcessLifeCycleRecord, ProcessLifeCycleRepository, RepositoryError};

/// In-memory store of process life cycles
#[derive(Debug, Clone)]
pub struct InMemoryProcessLifeCycleRepository {
    life_cycles: Arc<RwLock<HashMap<ProcessLifeCycleId, ProcessLifeCycleRecord>>>,
}

impl InMemoryProcessLifeCycleRepository {
    pub fn new() -> Self {
        Self {
            life_cycles: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository pre-filled with records.
    ///
    /// A later record replaces an earlier one with the same id.
    pub fn with_records(records: impl IntoIterator<Item = ProcessLifeCycleRecord>) -> Self {
        let life_cycles = records
            .into_iter()
            .map(|record| (record.id(), record))
            .collect();
        Self {
            life_cycles: Arc::new(RwLock::new(life_cycles)),
        }
    }

    /// Get the number of stored life cycles
    pub async fn len(&self) -> usize {
        self.life_cycles.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.life_cycles.read().await.is_empty()
    }
}

impl Default for InMemoryProcessLifeCycleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProcessLifeCycleRepository for InMemoryProcessLifeCycleRepository {
    async fn save(&self, record: &ProcessLifeCycleRecord) -> Result<(), RepositoryError> {
        let mut life_cycles = self.life_cycles.write().await;
        life_cycles.insert(record.id(), record.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: ProcessLifeCycleId,
    ) -> Result<Option<ProcessLifeCycleRecord>, RepositoryError> {
        let life_cycles = self.life_cycles.read().await;
        Ok(life_cycles.get(&id).cloned())
    }

    async fn list_ids(&self) -> Result<Vec<ProcessLifeCycleId>, RepositoryError> {
        let life_cycles = self.life_cycles.read().await;
        let mut ids: Vec<_> = life_cycles.keys().copied().collect();
        ids.sort();
        Ok(ids)
    }
}
