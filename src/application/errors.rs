//! Errors raised by the application handlers.

use thiserror::Error;

use crate::domain::foundation::{
    BenchmarkVersionId, DomainError, ErrorCode, ProcessLifeCycleId, ValidationError,
};
use crate::domain::processing::ProcessingError;
use crate::ports::RepositoryError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    #[error("Process life cycle not found: {0}")]
    LifeCycleNotFound(ProcessLifeCycleId),

    #[error("Benchmark version not found: {0}")]
    BenchmarkVersionNotFound(BenchmarkVersionId),

    #[error("No benchmark version given and no default configured")]
    NoBenchmarkVersion,

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

impl From<ApplicationError> for DomainError {
    fn from(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::LifeCycleNotFound(id) => {
                RepositoryError::LifeCycleNotFound(id).into()
            }
            ApplicationError::BenchmarkVersionNotFound(id) => {
                RepositoryError::BenchmarkVersionNotFound(id).into()
            }
            ApplicationError::NoBenchmarkVersion => {
                DomainError::validation("benchmark_version_id", message)
            }
            ApplicationError::Repository(inner) => inner.into(),
            ApplicationError::Validation(inner) => inner.into(),
            ApplicationError::Processing(inner) => inner.into(),
        }
    }
}
