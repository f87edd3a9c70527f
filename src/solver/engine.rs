//! Depth-first backtracking search
//!
//! The solver tries jumps in raster order: row ascending, column ascending,
//! then the four directions in `Direction::ALL` order. Every legal jump is
//! played, the reduced board searched recursively and the jump undone when the
//! branch fails. The first branch to reach a solved configuration wins and is
//! committed as-is. There is no move ordering, pruning or transposition table;
//! worst-case time is exponential in the peg count, which is inherent to the
//! puzzle rather than a defect.

use crate::board::{Board, Move};
use crate::core::{Direction, Position, TileError};
use std::fmt;

/// Error type for a finished search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// Exhaustive search found no winning sequence. The ordinary negative
    /// outcome, not a bug; the board is left exactly as it was before the
    /// call.
    Unsolvable,
    /// A tile transition failed mid-search. This can only happen when move
    /// legality checking is broken and is an unrecoverable invariant
    /// violation, never an expected outcome on any input.
    Tile(TileError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsolvable => write!(f, "Board can't be solved"),
            Self::Tile(error) => write!(f, "Tile contract violated during search: {error}"),
        }
    }
}

impl std::error::Error for SolveError {}

impl From<TileError> for SolveError {
    fn from(error: TileError) -> Self {
        Self::Tile(error)
    }
}

/// Solve `board` by exhaustive depth-first search
///
/// On success the board is left in the solved configuration and the returned
/// moves, in play order, lead from the starting layout to it. A board that is
/// already solved yields an empty sequence.
///
/// # Errors
/// Returns `SolveError::Unsolvable` when no jump sequence wins; the board is
/// then restored tile-for-tile to its pre-call state.
///
/// # Examples
/// ```
/// use peg_solitaire::board::Board;
/// use peg_solitaire::solver;
///
/// let mut board = Board::parse(&["OOG"]).unwrap();
/// let moves = solver::solve(&mut board).unwrap();
/// assert_eq!(moves.len(), 1);
/// assert!(board.is_solved());
/// ```
pub fn solve(board: &mut Board) -> Result<Vec<Move>, SolveError> {
    solve_observed(board, |_| {}, |_| {})
}

/// Solve `board`, reporting every played and undone jump
///
/// `on_play` runs synchronously after each jump is applied and `on_undo`
/// after each backtracking step, both seeing the board in its state right
/// after the event. The hooks are for progress display only: they cannot
/// mutate the board and supplying them does not change what the search
/// explores or returns.
///
/// # Errors
/// Same contract as [`solve`].
pub fn solve_observed<P, U>(
    board: &mut Board,
    mut on_play: P,
    mut on_undo: U,
) -> Result<Vec<Move>, SolveError>
where
    P: FnMut(&Board),
    U: FnMut(&Board),
{
    let mut engine = Engine {
        board,
        trace: Vec::new(),
    };
    if engine.search(&mut on_play, &mut on_undo)? {
        Ok(engine.trace)
    } else {
        Err(SolveError::Unsolvable)
    }
}

/// Search state: the board being mutated and the jumps currently applied
///
/// The trace is a last-in-first-out record; the top is always the most recent
/// jump still on the board, so failing branches unwind by popping.
struct Engine<'a> {
    board: &'a mut Board,
    trace: Vec<Move>,
}

impl Engine<'_> {
    /// One level of the recursion; true means a solved state was reached
    ///
    /// On true the applied moves stay committed. On false every jump this
    /// level played has been undone and popped, leaving the board exactly as
    /// the caller handed it over.
    fn search<P, U>(&mut self, on_play: &mut P, on_undo: &mut U) -> Result<bool, TileError>
    where
        P: FnMut(&Board),
        U: FnMut(&Board),
    {
        if self.board.is_solved() {
            return Ok(true);
        }

        for row in 0..self.board.height() {
            for column in 0..self.board.width() {
                for direction in Direction::ALL {
                    let mut candidate =
                        Move::new(self.board, Position::new(row, column), direction);
                    if !candidate.is_valid(self.board) {
                        continue;
                    }

                    candidate.play(self.board)?;
                    self.trace.push(candidate);
                    on_play(self.board);

                    if self.search(on_play, on_undo)? {
                        return Ok(true);
                    }

                    if let Some(mut played) = self.trace.pop() {
                        played.undo(self.board)?;
                        on_undo(self.board);
                    }
                }
            }
        }

        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_two_pieces_onto_a_goal() {
        let mut board = Board::parse(&["OOG"]).unwrap();
        let moves = solve(&mut board).unwrap();

        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].start(), Position::new(0, 0));
        assert_eq!(moves[0].direction(), Direction::Right);
        assert_eq!(moves[0].target(), Some(Position::new(0, 2)));

        assert!(board.is_solved());
        assert!(!board.get(Position::new(0, 0)).unwrap().is_occupied());
        assert!(!board.get(Position::new(0, 1)).unwrap().is_occupied());
        assert!(board.get(Position::new(0, 2)).unwrap().is_occupied());
    }

    #[test]
    fn returns_moves_in_play_order() {
        let mut board = Board::parse(&["OO O"]).unwrap();
        let moves = solve(&mut board).unwrap();

        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].start(), Position::new(0, 0));
        assert_eq!(moves[0].direction(), Direction::Right);
        assert_eq!(moves[1].start(), Position::new(0, 3));
        assert_eq!(moves[1].direction(), Direction::Left);
        assert!(board.is_solved());
        assert_eq!(board.piece_count(), 1);
    }

    #[test]
    fn already_solved_board_yields_empty_sequence() {
        let mut board = Board::parse(&["X O"]).unwrap();
        let moves = solve(&mut board).unwrap();
        assert!(moves.is_empty());
        assert!(board.is_solved());
    }

    #[test]
    fn three_pieces_in_four_cells_is_unsolvable() {
        // Two pegs always survive regardless of jump order
        let mut board = Board::parse(&["OOO "]).unwrap();
        assert_eq!(solve(&mut board), Err(SolveError::Unsolvable));
    }

    #[test]
    fn unsolvable_search_restores_the_board() {
        let mut board = Board::parse(&["OOOO "]).unwrap();
        let before = board.clone();

        assert_eq!(solve(&mut board), Err(SolveError::Unsolvable));
        assert_eq!(board, before);
    }

    #[test]
    fn hooks_see_every_play_and_undo() {
        let mut board = Board::parse(&["OOOO "]).unwrap();
        let mut plays = 0u64;
        let mut undos = 0u64;

        let outcome = solve_observed(&mut board, |_| plays += 1, |_| undos += 1);

        assert_eq!(outcome, Err(SolveError::Unsolvable));
        // Exhaustion unwinds everything it tried
        assert_eq!(plays, undos);
        assert!(plays > 0);
    }

    #[test]
    fn successful_search_keeps_committed_moves_played() {
        let mut board = Board::parse(&["OOG"]).unwrap();
        let mut plays = 0u64;
        let mut undos = 0u64;

        let moves = solve_observed(&mut board, |_| plays += 1, |_| undos += 1).unwrap();

        assert_eq!(plays, undos + moves.len() as u64);
    }

    #[test]
    fn hooks_observe_current_piece_counts() {
        let mut board = Board::parse(&["OO O"]).unwrap();
        let mut counts = Vec::new();

        solve_observed(&mut board, |b| counts.push(b.piece_count()), |_| {}).unwrap();

        // Each played jump removes exactly one peg
        assert_eq!(counts, vec![2, 1]);
    }

    #[test]
    fn chains_two_jumps_onto_a_goal() {
        let mut board = Board::parse(&["OO OG"]).unwrap();
        let moves = solve(&mut board).unwrap();

        assert_eq!(moves.len(), 2);
        assert!(board.get(Position::new(0, 4)).unwrap().is_occupied());
        assert_eq!(board.piece_count(), 1);
        assert!(board.is_solved());
    }

    #[test]
    fn survivor_off_the_goal_does_not_count() {
        // A single peg remains but the goal cell is empty
        let mut board = Board::parse(&["OO G"]).unwrap();
        assert_eq!(solve(&mut board), Err(SolveError::Unsolvable));
        assert_eq!(board.piece_count(), 2);
    }

    #[test]
    fn single_peg_with_goals_unoccupied_is_unsolvable() {
        // The lone peg cannot move and sits off the goal
        let mut board = Board::parse(&["O G"]).unwrap();
        assert_eq!(solve(&mut board), Err(SolveError::Unsolvable));
    }
}
