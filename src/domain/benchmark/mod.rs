//! Benchmark module - Score thresholds, interpolation and the BNB benchmark
//! calculators.
//!
//! Raw indicator values are turned into calibrated scores either against
//! fixed threshold values or as a ratio to a reference building.

mod compliance;
mod errors;
mod fixed_values;
mod group;
mod interpolator;
mod ref_value;
mod thresholds;

pub use compliance::ComplianceMode;
pub use errors::BenchmarkError;
pub use fixed_values::BnbFixedValuesBenchmarkCalculator;
pub use group::{BenchmarkGroup, GroupResult};
pub use interpolator::{LinearScoreInterpolator, ThresholdsByIndicator};
pub use ref_value::BnbRefValueBenchmarkCalculator;
pub use thresholds::NamedScoreThresholds;
