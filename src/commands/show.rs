//! Layout inspection command
//!
//! Parses a layout and reports its dimensions, pegs and goals without running
//! the search.

use crate::board::Board;
use crate::core::Position;

/// Properties of a parsed layout
pub struct LayoutInfo {
    pub rendered: String,
    pub height: usize,
    pub width: usize,
    pub pieces: usize,
    pub goals: Vec<Position>,
    pub already_solved: bool,
}

/// Parse a layout and describe it
///
/// # Errors
///
/// Returns an error if the layout fails to parse (unknown tile code, ragged
/// rows, no rows).
pub fn inspect_layout(layout: &[String]) -> Result<LayoutInfo, String> {
    let board = Board::parse(layout).map_err(|e| format!("Invalid layout: {e}"))?;

    Ok(LayoutInfo {
        rendered: board.to_string(),
        height: board.height(),
        width: board.width(),
        pieces: board.piece_count(),
        goals: board.goals(),
        already_solved: board.is_solved(),
    })
}
