//! Processing module - LCA results of processes.

mod errors;
mod lca_calculator;

pub use errors::ProcessingError;
pub use lca_calculator::{IndicatorResult, IndicatorResults, ProcessLcaCalculator};
