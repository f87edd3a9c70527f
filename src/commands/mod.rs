//! Command implementations

pub mod show;
pub mod solve;

pub use show::{LayoutInfo, inspect_layout};
pub use solve::{SolveConfig, SolveResult, run_solve};
