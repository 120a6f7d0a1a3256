//! Domain layer containing the LCA computation types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (units, quantities, IDs, errors)
//! - `conversion` - Unit conversions, conversion sets and the converter
//! - `process` - Life cycle modules, processes and the process life cycle
//! - `indicator` - Environmental indicator idents and values
//! - `benchmark` - Score thresholds, interpolation and benchmark calculators
//! - `processing` - Per-process LCA calculation

pub mod benchmark;
pub mod conversion;
pub mod foundation;
pub mod indicator;
pub mod process;
pub mod processing;
