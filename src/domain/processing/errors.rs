//! Processing error types.

use thiserror::Error;

use crate::domain::conversion::ConversionError;
use crate::domain::foundation::{DomainError, ErrorCode, ProcessConfigId, ProcessId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessingError {
    #[error("Process {process_id} is not part of the life cycle of process config {process_config_id}")]
    ProcessNotFoundInLifeCycle {
        process_id: ProcessId,
        process_config_id: ProcessConfigId,
    },

    #[error("No pet indicator was found in the set of indicators")]
    MissingPetIndicator,

    #[error("Process {process_id} has a non-positive reference quantity")]
    InvalidReferenceQuantity { process_id: ProcessId },

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}

impl From<ProcessingError> for DomainError {
    fn from(err: ProcessingError) -> Self {
        match &err {
            ProcessingError::ProcessNotFoundInLifeCycle {
                process_id,
                process_config_id,
            } => DomainError::new(ErrorCode::ProcessNotFound, err.to_string())
                .with_detail("process_id", process_id.to_string())
                .with_detail("process_config_id", process_config_id.to_string()),
            ProcessingError::MissingPetIndicator => {
                DomainError::new(ErrorCode::MissingIndicator, err.to_string())
                    .with_detail("indicator", crate::domain::indicator::PET)
            }
            ProcessingError::InvalidReferenceQuantity { process_id } => {
                DomainError::new(ErrorCode::ValidationFailed, err.to_string())
                    .with_detail("process_id", process_id.to_string())
            }
            ProcessingError::Conversion(inner) => inner.clone().into(),
        }
    }
}
