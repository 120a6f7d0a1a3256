//! Benchmark error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BenchmarkError {
    /// A threshold table needs at least two calibration points to interpolate.
    #[error("Thresholds '{name}' have {entries} entries, at least 2 are required")]
    DegenerateThresholds { name: String, entries: usize },
}

impl From<BenchmarkError> for DomainError {
    fn from(err: BenchmarkError) -> Self {
        match &err {
            BenchmarkError::DegenerateThresholds { name, .. } => {
                DomainError::new(ErrorCode::DegenerateThresholds, err.to_string())
                    .with_detail("thresholds", name.clone())
            }
        }
    }
}
