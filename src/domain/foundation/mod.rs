//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the LCA domain.

mod errors;
mod ids;
mod quantity;
mod unit;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{BenchmarkVersionId, ProcessConfigId, ProcessDbId, ProcessId, ProcessLifeCycleId};
pub use quantity::Quantity;
pub use unit::Unit;
