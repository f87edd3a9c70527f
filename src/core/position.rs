//! Board coordinates and jump directions
//!
//! A `Position` is a zero-based (row, column) pair, row-major. Directions are
//! the four orthogonal unit steps a peg can jump along; no diagonals exist.

use std::fmt;

/// Zero-based (row, column) coordinate on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Step `distance` cells in `direction`
    ///
    /// Returns `None` when the step would cross the top or left edge of the
    /// coordinate space. Steps past the bottom or right edge are not detected
    /// here; callers check the result against the board dimensions.
    ///
    /// # Examples
    /// ```
    /// use peg_solitaire::core::{Direction, Position};
    ///
    /// let origin = Position::new(2, 2);
    /// assert_eq!(origin.step(Direction::Right, 2), Some(Position::new(2, 4)));
    /// assert_eq!(origin.step(Direction::Up, 3), None);
    /// ```
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize) -> Option<Self> {
        let (row_delta, column_delta) = direction.offset();
        let row = offset_coordinate(self.row, row_delta, distance)?;
        let column = offset_coordinate(self.column, column_delta, distance)?;
        Some(Self { row, column })
    }
}

fn offset_coordinate(coordinate: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(coordinate),
        d if d < 0 => coordinate.checked_sub(distance),
        _ => coordinate.checked_add(distance),
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// One of the four orthogonal jump directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Every direction, in the fixed order the search enumerates candidates
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Unit (row, column) offset of this direction
    #[must_use]
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_one_unit_per_direction() {
        let origin = Position::new(3, 3);
        assert_eq!(origin.step(Direction::Up, 1), Some(Position::new(2, 3)));
        assert_eq!(origin.step(Direction::Right, 1), Some(Position::new(3, 4)));
        assert_eq!(origin.step(Direction::Down, 1), Some(Position::new(4, 3)));
        assert_eq!(origin.step(Direction::Left, 1), Some(Position::new(3, 2)));
    }

    #[test]
    fn step_two_cells_reaches_jump_target() {
        let origin = Position::new(3, 3);
        assert_eq!(origin.step(Direction::Up, 2), Some(Position::new(1, 3)));
        assert_eq!(origin.step(Direction::Left, 2), Some(Position::new(3, 1)));
    }

    #[test]
    fn step_off_top_edge_is_none() {
        assert_eq!(Position::new(1, 5).step(Direction::Up, 2), None);
        assert_eq!(Position::new(0, 0).step(Direction::Up, 1), None);
    }

    #[test]
    fn step_off_left_edge_is_none() {
        assert_eq!(Position::new(5, 1).step(Direction::Left, 2), None);
        assert_eq!(Position::new(0, 0).step(Direction::Left, 1), None);
    }

    #[test]
    fn step_zero_distance_is_identity() {
        let origin = Position::new(2, 7);
        for direction in Direction::ALL {
            assert_eq!(origin.step(direction, 0), Some(origin));
        }
    }

    #[test]
    fn direction_order_matches_search_enumeration() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::Up,
                Direction::Right,
                Direction::Down,
                Direction::Left
            ]
        );
    }

    #[test]
    fn position_equality_by_coordinates() {
        assert_eq!(Position::new(1, 2), Position::new(1, 2));
        assert_ne!(Position::new(1, 2), Position::new(2, 1));
    }

    #[test]
    fn display_formats() {
        assert_eq!(Position::new(4, 2).to_string(), "(4, 2)");
        assert_eq!(Direction::Right.to_string(), "right");
    }
}
