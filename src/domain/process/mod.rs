//! Process module - Life cycle modules, process datasets and the life cycle
//! aggregate that homogenizes their units.

mod life_cycle;
mod module;
mod process;

pub use life_cycle::ProcessLifeCycle;
pub use module::{Module, Stage};
pub use process::Process;
