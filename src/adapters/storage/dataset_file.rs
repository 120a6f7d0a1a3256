//! Dataset File Adapter
//!
//! Reads and writes a whole LCA dataset (process life cycles, benchmark
//! versions and building variants) as one JSON or YAML file. The format is
//! chosen by the file extension.

use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use super::{InMemoryBenchmarkVersionReader, InMemoryProcessLifeCycleRepository};
use crate::ports::{BenchmarkVersionRecord, ProcessLifeCycleRecord, RepositoryError, VariantRecord};

/// Serialization format of a dataset file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Yaml,
}

impl DatasetFormat {
    /// Format for a path, by extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(DatasetFormat::Json),
            "yaml" | "yml" => Some(DatasetFormat::Yaml),
            _ => None,
        }
    }
}

/// Contents of a dataset file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetFile {
    #[serde(default)]
    pub life_cycles: Vec<ProcessLifeCycleRecord>,
    #[serde(default)]
    pub benchmark_versions: Vec<BenchmarkVersionRecord>,
    #[serde(default)]
    pub variants: Vec<VariantRecord>,
}

impl DatasetFile {
    /// Load a dataset from disk
    ///
    /// # Errors
    /// - `IoError` if the file cannot be read
    /// - `DeserializationFailed` if the extension is unsupported or the
    ///   content does not parse
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RepositoryError> {
        let path = path.as_ref();
        let format = Self::format_of(path)
            .map_err(RepositoryError::DeserializationFailed)?;

        let content = fs::read_to_string(path)
            .await
            .map_err(|e| RepositoryError::IoError(format!("{}: {}", path.display(), e)))?;

        let dataset: DatasetFile = match format {
            DatasetFormat::Json => serde_json::from_str(&content)
                .map_err(|e| RepositoryError::DeserializationFailed(e.to_string()))?,
            DatasetFormat::Yaml => serde_yaml::from_str(&content)
                .map_err(|e| RepositoryError::DeserializationFailed(e.to_string()))?,
        };

        debug!(
            path = %path.display(),
            life_cycles = dataset.life_cycles.len(),
            benchmark_versions = dataset.benchmark_versions.len(),
            variants = dataset.variants.len(),
            "Dataset loaded"
        );
        Ok(dataset)
    }

    /// Write the dataset to disk, creating parent directories as needed
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<(), RepositoryError> {
        let path = path.as_ref();
        let format = Self::format_of(path).map_err(RepositoryError::SerializationFailed)?;

        let content = match format {
            DatasetFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| RepositoryError::SerializationFailed(e.to_string()))?,
            DatasetFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| RepositoryError::SerializationFailed(e.to_string()))?,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RepositoryError::IoError(e.to_string()))?;
        }

        fs::write(path, content)
            .await
            .map_err(|e| RepositoryError::IoError(e.to_string()))
    }

    /// In-memory repository over the dataset's life cycles
    pub fn life_cycle_repository(&self) -> InMemoryProcessLifeCycleRepository {
        InMemoryProcessLifeCycleRepository::with_records(self.life_cycles.iter().cloned())
    }

    /// In-memory reader over the dataset's benchmark versions
    pub fn benchmark_version_reader(&self) -> InMemoryBenchmarkVersionReader {
        InMemoryBenchmarkVersionReader::with_records(self.benchmark_versions.iter().cloned())
    }

    fn format_of(path: &Path) -> Result<DatasetFormat, String> {
        DatasetFormat::from_path(path)
            .ok_or_else(|| format!("unsupported dataset format: {}", path.display()))
    }
}
