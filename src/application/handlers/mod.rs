//! Application handlers.
//!
//! Query handlers that load records through the ports and run the LCA core.

pub mod benchmark;
pub mod conversion;
mod life_cycle_loader;
pub mod processing;

#[cfg(test)]
pub(crate) mod fixtures;

pub use benchmark::{BenchmarkModel, BenchmarkReport, ComputeBenchmarkHandler, ComputeBenchmarkQuery};
pub use conversion::{
    ConversionFilter, GetProcessConversionsHandler, GetProcessConversionsQuery,
    GetProcessConversionsResult,
};
pub use processing::{ComputeProcessLcaHandler, ComputeProcessLcaQuery};
