//! Benchmark version reader port (read side).
//!
//! Benchmark versions are reference data: threshold tables per indicator,
//! reference construction values and group captions.

use async_trait::async_trait;

use super::records::BenchmarkVersionRecord;
use super::RepositoryError;
use crate::domain::foundation::BenchmarkVersionId;

/// Reader port for benchmark system versions.
#[async_trait]
pub trait BenchmarkVersionReader: Send + Sync {
    /// Find a benchmark version by id.
    async fn find_by_id(
        &self,
        id: BenchmarkVersionId,
    ) -> Result<Option<BenchmarkVersionRecord>, RepositoryError>;

    /// All benchmark versions, ordered by id.
    async fn list(&self) -> Result<Vec<BenchmarkVersionRecord>, RepositoryError>;
}
