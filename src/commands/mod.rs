//! Command implementations

pub mod simple;
pub mod simulate;
pub mod stats;

pub use simple::{ConsolePresenter, run_simple};
pub use simulate::{SimulateConfig, SimulationResult, run_simulation};
pub use stats::{run_export, run_import, run_stats};
