//! Formatting utilities for terminal output

use crate::board::Move;

/// Format the winning jumps, one numbered line per move in play order
#[must_use]
pub fn format_move_list(moves: &[Move]) -> Vec<String> {
    moves
        .iter()
        .enumerate()
        .map(|(index, jump)| format!("{:>3}. {jump}", index + 1))
        .collect()
}

/// Bar of `█` glyphs, one per remaining peg, padded with `░` up to `width`
#[must_use]
pub fn piece_bar(pieces: usize, width: usize) -> String {
    let filled = pieces.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::core::{Direction, Position};

    #[test]
    fn move_list_is_numbered_from_one() {
        let board = Board::parse(&["OO  "]).unwrap();
        let jump = Move::new(&board, Position::new(0, 0), Direction::Right);

        let lines = format_move_list(&[jump, jump]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  1. (0, 0) right -> (0, 2)");
        assert_eq!(lines[1], "  2. (0, 0) right -> (0, 2)");
    }

    #[test]
    fn empty_move_list_formats_to_nothing() {
        assert!(format_move_list(&[]).is_empty());
    }

    #[test]
    fn piece_bar_fills_one_glyph_per_peg() {
        assert_eq!(piece_bar(3, 6), "███░░░");
    }

    #[test]
    fn piece_bar_empty_and_full() {
        assert_eq!(piece_bar(0, 4), "░░░░");
        assert_eq!(piece_bar(4, 4), "████");
    }

    #[test]
    fn piece_bar_clamps_to_width() {
        assert_eq!(piece_bar(10, 4), "████");
    }
}
