//! Storage Adapters
//!
//! Implementations of the persistence ports.
//!
//! ## Available Adapters
//!
//! - **InMemoryProcessLifeCycleRepository** - Process life cycles in memory
//! - **InMemoryBenchmarkVersionReader** - Benchmark versions in memory
//! - **DatasetFile** - A whole dataset as one JSON or YAML file
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::DatasetFile;
//!
//! let dataset = DatasetFile::load("./data/dataset.yaml").await?;
//! let life_cycles = dataset.life_cycle_repository();
//! let benchmarks = dataset.benchmark_version_reader();
//! ```

mod dataset_file;
mod in_memory_benchmark_version_reader;
mod in_memory_process_life_cycle_repository;

pub use dataset_file::{DatasetFile, DatasetFormat};
pub use in_memory_benchmark_version_reader::InMemoryBenchmarkVersionReader;
pub use in_memory_process_life_cycle_repository::InMemoryProcessLifeCycleRepository;
