//! Jump moves
//!
//! A move jumps a peg from its start cell over an adjacent occupied cell (the
//! obstacle) into a free cell two steps away (the target), removing the jumped
//! peg. The search constructs a move for every candidate cell and direction,
//! so construction never fails: positions that fall off the board simply leave
//! the move permanently invalid, and no tile is ever looked up out of bounds.

use super::grid::Board;
use crate::core::{Direction, Position, TileError};
use std::fmt;

/// Cells a jump spans from start to target
const JUMP_LENGTH: usize = 2;

/// A single jump of a peg
///
/// Records the start, obstacle and target cells at construction and carries a
/// played flag distinguishing "legal but not yet applied" from "applied,
/// pending possible undo".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    start: Position,
    direction: Direction,
    obstacle: Option<Position>,
    target: Option<Position>,
    played: bool,
}

impl Move {
    /// The candidate jump from `start` in `direction` on `board`
    ///
    /// The obstacle and target positions are derived arithmetically; either is
    /// `None` when it falls outside `board`.
    #[must_use]
    pub fn new(board: &Board, start: Position, direction: Direction) -> Self {
        let on_board = |position: Position| board.contains(position).then_some(position);
        let obstacle = start.step(direction, JUMP_LENGTH / 2).and_then(on_board);
        let target = start.step(direction, JUMP_LENGTH).and_then(on_board);
        Self {
            start,
            direction,
            obstacle,
            target,
            played: false,
        }
    }

    #[must_use]
    pub const fn start(&self) -> Position {
        self.start
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// The cell jumped over, when it lies on the board
    #[must_use]
    pub const fn obstacle(&self) -> Option<Position> {
        self.obstacle
    }

    /// The cell the peg lands on, when it lies on the board
    #[must_use]
    pub const fn target(&self) -> Option<Position> {
        self.target
    }

    /// Whether this move is currently applied to its board
    #[must_use]
    pub const fn is_played(&self) -> bool {
        self.played
    }

    /// Whether the jump is legal on the current state of `board`
    ///
    /// False whenever start, obstacle or target lies off the board; the check
    /// short-circuits before any tile access in that case. Otherwise start and
    /// obstacle must be playable and occupied and the target playable and
    /// free.
    #[must_use]
    pub fn is_valid(&self, board: &Board) -> bool {
        let (Some(obstacle), Some(target)) = (self.obstacle, self.target) else {
            return false;
        };
        let Some(start) = board.get(self.start) else {
            return false;
        };
        let (Some(obstacle), Some(target)) = (board.get(obstacle), board.get(target)) else {
            return false;
        };
        start.is_playable()
            && obstacle.is_playable()
            && target.is_playable()
            && start.is_occupied()
            && obstacle.is_occupied()
            && !target.is_occupied()
    }

    /// Apply the jump to `board`
    ///
    /// Removes the pegs from start and obstacle, lands one on the target and
    /// marks the move played. Calling this on a move that is not currently
    /// valid is a silent no-op; the search always validates before playing.
    ///
    /// # Errors
    /// Propagates `TileError` when a tile transition fails. That cannot happen
    /// once `is_valid` holds; it indicates a broken legality check rather than
    /// a property of the board.
    pub fn play(&mut self, board: &mut Board) -> Result<(), TileError> {
        if !self.is_valid(board) {
            return Ok(());
        }
        // is_valid established that both cells exist
        let (Some(obstacle), Some(target)) = (self.obstacle, self.target) else {
            return Ok(());
        };
        remove_piece(board, self.start)?;
        remove_piece(board, obstacle)?;
        add_piece(board, target)?;
        self.played = true;
        Ok(())
    }

    /// Reverse a previously played jump
    ///
    /// Restores start and obstacle to occupied, frees the target and clears
    /// the played flag. Calling this when the move has not been played is a
    /// no-op, so repeated undo leaves the board unchanged.
    ///
    /// # Errors
    /// Propagates `TileError` under the same contract as [`Move::play`].
    pub fn undo(&mut self, board: &mut Board) -> Result<(), TileError> {
        if !self.played {
            return Ok(());
        }
        let (Some(obstacle), Some(target)) = (self.obstacle, self.target) else {
            return Ok(());
        };
        add_piece(board, self.start)?;
        add_piece(board, obstacle)?;
        remove_piece(board, target)?;
        self.played = false;
        Ok(())
    }

    /// Re-apply this jump's recorded cells to a different board
    ///
    /// Used to walk a found solution on a fresh copy of the starting layout
    /// without rerunning the search. The recorded positions are applied as-is.
    ///
    /// # Errors
    /// Returns `TileError` when the cells of `board` do not line up with the
    /// recorded jump, e.g. when `board` holds a different layout.
    pub fn replay(&self, board: &mut Board) -> Result<(), TileError> {
        let (Some(obstacle), Some(target)) = (self.obstacle, self.target) else {
            return Ok(());
        };
        remove_piece(board, self.start)?;
        remove_piece(board, obstacle)?;
        add_piece(board, target)?;
        Ok(())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => write!(f, "{} {} -> {}", self.start, self.direction, target),
            None => write!(f, "{} {} -> off the board", self.start, self.direction),
        }
    }
}

fn remove_piece(board: &mut Board, position: Position) -> Result<(), TileError> {
    board
        .get_mut(position)
        .ok_or(TileError::NotPlayable)?
        .remove_piece()
}

fn add_piece(board: &mut Board, position: Position) -> Result<(), TileError> {
    board
        .get_mut(position)
        .ok_or(TileError::NotPlayable)?
        .add_piece()
}
