//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

mod errors;
pub mod handlers;

pub use errors::ApplicationError;
pub use handlers::{
    BenchmarkModel, BenchmarkReport, ComputeBenchmarkHandler, ComputeBenchmarkQuery,
    ComputeProcessLcaHandler, ComputeProcessLcaQuery, ConversionFilter,
    GetProcessConversionsHandler, GetProcessConversionsQuery, GetProcessConversionsResult,
};
