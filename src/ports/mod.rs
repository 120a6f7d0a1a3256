//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the LCA core and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `ProcessLifeCycleRepository` - Process life cycles per process config
//! - `BenchmarkVersionReader` - Benchmark system versions (read only)
//!
//! ## Records
//!
//! `records` holds the raw DTOs the collaborators exchange with the core,
//! together with their validating conversions into domain types.

mod benchmark_version_reader;
mod process_life_cycle_repository;
pub mod records;
mod repository_error;

pub use benchmark_version_reader::BenchmarkVersionReader;
pub use process_life_cycle_repository::ProcessLifeCycleRepository;
pub use records::{
    BenchmarkGroupRecord, BenchmarkVersionRecord, ConversionRecord, GroupThresholdRecord,
    IndicatorThresholdsRecord, ProcessLifeCycleRecord, ProcessRecord, QuantityRecord,
    ThresholdRecord, VariantRecord,
};
pub use repository_error::RepositoryError;
