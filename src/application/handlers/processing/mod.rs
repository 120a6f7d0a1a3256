//! Process LCA query handlers.

mod compute_process_lca;

pub use compute_process_lca::{ComputeProcessLcaHandler, ComputeProcessLcaQuery};
