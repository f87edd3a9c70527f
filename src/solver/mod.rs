//! Backtracking search over a board
//!
//! Exhaustive depth-first search with chronological backtracking and optional
//! progress hooks.

mod engine;

pub use engine::{SolveError, solve, solve_observed};
