//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_layout_info, print_solve_result};
