//! Dataset file configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::DatasetFormat;

/// Location of the dataset file to load
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    /// Path to a `.json`, `.yaml` or `.yml` dataset file
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl DatasetConfig {
    /// Validate dataset configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("dataset.path"));
        }
        if DatasetFormat::from_path(&self.path).is_none() {
            return Err(ValidationError::UnsupportedDatasetFormat(
                self.path.display().to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("data/dataset.yaml")
}
