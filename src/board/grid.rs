//! Board state
//!
//! A rectangular grid of tiles parsed from a textual layout. The board holds
//! nothing beyond its tiles; peg count and goal positions are recomputed on
//! demand so they can never drift out of sync with the grid. Tiles change only
//! through move application and undo.

use crate::core::{Position, Tile};
use std::fmt;

/// Error type for malformed board layouts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The layout contains a character outside `{X, O, G, space}`
    InvalidTileCode { code: char, position: Position },
    /// A row differs in length from the first row
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The layout has no rows
    EmptyLayout,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTileCode { code, position } => {
                write!(f, "Invalid tile code {code:?} at {position}")
            }
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Row {row} has {actual} cells, expected {expected} like the first row"
                )
            }
            Self::EmptyLayout => write!(f, "Layout has no rows"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A rectangular peg-solitaire board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
}

impl Board {
    /// Parse a board from a textual layout, one string per row
    ///
    /// Tile codes are `X` (edge), `O` (occupied), `G` (free goal) and space
    /// (free), case-insensitive. The first row fixes the width; trailing
    /// spaces are significant.
    ///
    /// # Errors
    /// Returns `ParseError::EmptyLayout` for an empty slice,
    /// `ParseError::RaggedRow` when any row's length differs from the first
    /// row's, and `ParseError::InvalidTileCode` on any unknown character.
    /// No partial board is ever produced.
    ///
    /// # Examples
    /// ```
    /// use peg_solitaire::board::Board;
    ///
    /// let board = Board::parse(&["OOG"]).unwrap();
    /// assert_eq!(board.piece_count(), 2);
    /// assert_eq!(board.goals().len(), 1);
    /// ```
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseError> {
        let first = rows.first().ok_or(ParseError::EmptyLayout)?;
        let width = first.as_ref().chars().count();
        let height = rows.len();

        let mut tiles = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let actual = line.chars().count();
            if actual != width {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }
            for (column, code) in line.chars().enumerate() {
                let tile = Tile::from_code(code).ok_or(ParseError::InvalidTileCode {
                    code,
                    position: Position::new(row, column),
                })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    /// Number of rows
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether `position` lies on the board
    #[inline]
    #[must_use]
    pub const fn contains(&self, position: Position) -> bool {
        position.row < self.height && position.column < self.width
    }

    /// Tile at `position`, or `None` when off the board
    #[must_use]
    pub fn get(&self, position: Position) -> Option<&Tile> {
        if self.contains(position) {
            self.tiles.get(position.row * self.width + position.column)
        } else {
            None
        }
    }

    pub(crate) fn get_mut(&mut self, position: Position) -> Option<&mut Tile> {
        if self.contains(position) {
            self.tiles
                .get_mut(position.row * self.width + position.column)
        } else {
            None
        }
    }

    /// Every position in raster order: row ascending, then column ascending
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let (height, width) = (self.height, self.width);
        (0..height).flat_map(move |row| (0..width).map(move |column| Position::new(row, column)))
    }

    /// Number of pegs on the board
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_occupied()).count()
    }

    /// Positions of all goal tiles in raster order
    #[must_use]
    pub fn goals(&self) -> Vec<Position> {
        self.positions()
            .filter(|&position| self.get(position).is_some_and(|tile| tile.is_goal()))
            .collect()
    }

    /// Whether the board is in a winning configuration
    ///
    /// With goal tiles present: every goal holds a peg and the peg count
    /// equals the goal count, so no peg sits anywhere else. Without goals:
    /// exactly one peg remains, which means an empty board does not count as
    /// solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let goals = self.goals();
        if goals.is_empty() {
            return self.piece_count() == 1;
        }
        self.piece_count() == goals.len()
            && goals
                .iter()
                .all(|&goal| self.get(goal).is_some_and(|tile| tile.is_occupied()))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for column in 0..self.width {
                if let Some(tile) = self.get(Position::new(row, column)) {
                    write!(f, "{tile}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
