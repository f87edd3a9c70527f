//! Board solving command
//!
//! Runs the search on a layout and collects the outcome together with search
//! statistics for display. Statistics come purely from the observation hooks;
//! the search itself never depends on them.

use crate::board::{Board, Move};
use crate::solver::{self, SolveError};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// How many played moves pass between spinner updates
const SPINNER_UPDATE_EVERY: u64 = 1024;

/// Configuration for solving a layout
pub struct SolveConfig<'a> {
    pub layout: &'a [String],
    /// Show a live spinner with the moves-tried count while searching
    pub progress: bool,
}

impl<'a> SolveConfig<'a> {
    #[must_use]
    pub const fn new(layout: &'a [String]) -> Self {
        Self {
            layout,
            progress: false,
        }
    }
}

/// Result of a solve run
pub struct SolveResult {
    pub solved: bool,
    /// Winning jumps in play order; empty when unsolved or already solved
    pub moves: Vec<Move>,
    pub moves_tried: u64,
    pub backtracks: u64,
    pub duration: Duration,
    pub initial_pieces: usize,
    /// The board after the search: solved, or restored to the start
    pub final_board: Board,
}

/// Solve a layout and gather statistics
///
/// # Errors
///
/// Returns an error if:
/// - The layout fails to parse (unknown tile code, ragged rows, no rows)
/// - The search aborts on a tile contract violation
///
/// An exhausted search is not an error here; it is reported through
/// `SolveResult::solved` with the board restored to its starting state.
pub fn run_solve(config: &SolveConfig) -> Result<SolveResult, String> {
    let mut board = Board::parse(config.layout).map_err(|e| format!("Invalid layout: {e}"))?;
    let initial_pieces = board.piece_count();

    let spinner = config.progress.then(search_spinner);
    let mut moves_tried: u64 = 0;
    let mut backtracks: u64 = 0;

    let started = Instant::now();
    let outcome = solver::solve_observed(
        &mut board,
        |_| {
            moves_tried += 1;
            if let Some(spinner) = &spinner {
                if moves_tried % SPINNER_UPDATE_EVERY == 0 {
                    spinner.set_message(format!("{moves_tried} moves tried"));
                }
            }
        },
        |_| backtracks += 1,
    );
    let duration = started.elapsed();

    if let Some(spinner) = &spinner {
        spinner.finish_and_clear();
    }

    let (solved, moves) = match outcome {
        Ok(moves) => (true, moves),
        Err(SolveError::Unsolvable) => (false, Vec::new()),
        Err(error @ SolveError::Tile(_)) => return Err(format!("Search aborted: {error}")),
    };

    Ok(SolveResult {
        solved,
        moves,
        moves_tried,
        backtracks,
        duration,
        initial_pieces,
        final_board: board,
    })
}

fn search_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} Searching... {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;

    fn rows(layout: &[&str]) -> Vec<String> {
        layout.iter().map(|&row| row.to_string()).collect()
    }

    #[test]
    fn solves_the_goal_row() {
        let layout = rows(&["OOG"]);
        let result = run_solve(&SolveConfig::new(&layout)).unwrap();

        assert!(result.solved);
        assert_eq!(result.moves.len(), 1);
        assert_eq!(result.initial_pieces, 2);
        assert!(result.final_board.is_solved());
        assert!(result.moves_tried >= 1);
    }

    #[test]
    fn reports_unsolvable_with_board_restored() {
        let layout = rows(&["OOO "]);
        let result = run_solve(&SolveConfig::new(&layout)).unwrap();

        assert!(!result.solved);
        assert!(result.moves.is_empty());
        assert_eq!(result.final_board.piece_count(), 3);
        assert_eq!(result.moves_tried, result.backtracks);
    }

    #[test]
    fn already_solved_layout_needs_no_moves() {
        let layout = rows(&["X O"]);
        let result = run_solve(&SolveConfig::new(&layout)).unwrap();

        assert!(result.solved);
        assert!(result.moves.is_empty());
        assert_eq!(result.moves_tried, 0);
    }

    #[test]
    fn move_sequence_is_in_play_order() {
        let layout = rows(&["OO O"]);
        let result = run_solve(&SolveConfig::new(&layout)).unwrap();

        assert!(result.solved);
        assert_eq!(result.moves.len(), 2);
        assert_eq!(result.moves[0].start(), Position::new(0, 0));
        assert_eq!(result.moves[1].start(), Position::new(0, 3));
    }

    #[test]
    fn invalid_layout_returns_error() {
        let layout = rows(&["OO?"]);
        let result = run_solve(&SolveConfig::new(&layout));
        assert!(result.is_err());
    }

    #[test]
    fn ragged_layout_returns_error() {
        let layout = rows(&["OOO", "OO"]);
        assert!(run_solve(&SolveConfig::new(&layout)).is_err());
    }
}
