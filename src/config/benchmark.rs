//! Benchmark run configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::BenchmarkVersionId;

/// Defaults for variants that do not name a benchmark version or category
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BenchmarkConfig {
    /// Benchmark version used when a variant names none
    pub default_version_id: Option<i64>,

    /// Threshold category used when a variant names none
    pub default_category: Option<String>,
}

impl BenchmarkConfig {
    pub fn default_version(&self) -> Option<BenchmarkVersionId> {
        self.default_version_id.map(BenchmarkVersionId::new)
    }

    pub fn default_category(&self) -> Option<&str> {
        self.default_category.as_deref()
    }

    /// Validate benchmark configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(id) = self.default_version_id {
            if id <= 0 {
                return Err(ValidationError::InvalidBenchmarkVersionId(id));
            }
        }
        if matches!(&self.default_category, Some(category) if category.trim().is_empty()) {
            return Err(ValidationError::BlankBenchmarkCategory);
        }
        Ok(())
    }
}
