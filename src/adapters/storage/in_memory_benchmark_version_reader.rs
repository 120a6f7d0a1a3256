//! In-Memory Benchmark Version Reader
//!
//! Serves benchmark versions held in memory.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::BenchmarkVersionId;
use crate::ports::{BenchmarkVersionReader, BenchmarkVersionRecord, RepositoryError};

/// In-memory store of benchmark versions
#[derive(Debug, Clone)]
pub struct InMemoryBenchmarkVersionReader {
    versions: Arc<RwLock<HashMap<BenchmarkVersionId, BenchmarkVersionRecord>>>,
}

impl InMemoryBenchmarkVersionReader {
    pub fn new() -> Self {
        Self {
            versions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn with_records(records: impl IntoIterator<Item = BenchmarkVersionRecord>) -> Self {
        let versions = records
            .into_iter()
            .map(|record| (record.id(), record))
            .collect();
        Self {
            versions: Arc::new(RwLock::new(versions)),
        }
    }

    /// Add or replace a version
    pub async fn insert(&self, record: BenchmarkVersionRecord) {
        self.versions.write().await.insert(record.id(), record);
    }
}

impl Default for InMemoryBenchmarkVersionReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BenchmarkVersionReader for InMemoryBenchmarkVersionReader {
    async fn find_by_id(
        &self,
        id: BenchmarkVersionId,
    ) -> Result<Option<BenchmarkVersionRecord>, RepositoryError> {
        let versions = self.versions.read().await;
        Ok(versions.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<BenchmarkVersionRecord>, RepositoryError> {
        let versions = self.versions.read().await;
        let mut records: Vec<_> = versions.values().cloned().collect();
        records.sort_by_key(|record| record.id);
        Ok(records)
    }
}
