//! Errors shared by the persistence ports.

use crate::domain::foundation::{
    BenchmarkVersionId, DomainError, ErrorCode, ProcessLifeCycleId, ValidationError,
};

/// Errors that can occur while reading or writing stored records
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("Process life cycle not found: {0}")]
    LifeCycleNotFound(ProcessLifeCycleId),

    #[error("Benchmark version not found: {0}")]
    BenchmarkVersionNotFound(BenchmarkVersionId),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Failed to serialize record: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize record: {0}")]
    DeserializationFailed(String),

    #[error("Invalid record: {0}")]
    Invalid(#[from] ValidationError),
}

impl From<RepositoryError> for DomainError {
    fn from(err: RepositoryError) -> Self {
        match &err {
            RepositoryError::LifeCycleNotFound(id) => {
                DomainError::new(ErrorCode::ProcessLifeCycleNotFound, err.to_string())
                    .with_detail("process_db_id", id.process_db_id.to_string())
                    .with_detail("process_config_id", id.process_config_id.to_string())
            }
            RepositoryError::BenchmarkVersionNotFound(id) => {
                DomainError::new(ErrorCode::BenchmarkVersionNotFound, err.to_string())
                    .with_detail("benchmark_version_id", id.to_string())
            }
            RepositoryError::Invalid(inner) => inner.clone().into(),
            RepositoryError::IoError(_)
            | RepositoryError::SerializationFailed(_)
            | RepositoryError::DeserializationFailed(_) => {
                DomainError::new(ErrorCode::StorageError, err.to_string())
            }
        }
    }
}
