//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the LCA core to external systems:
//! - `storage` - In-memory stores and the dataset file loader

pub mod storage;

pub use storage::{
    DatasetFile, DatasetFormat, InMemoryBenchmarkVersionReader, InMemoryProcessLifeCycleRepository,
};
