//! Benchmark query handlers.

mod compute_benchmark;

pub use compute_benchmark::{
    BenchmarkModel, BenchmarkReport, ComputeBenchmarkHandler, ComputeBenchmarkQuery,
};
