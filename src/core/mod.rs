//! Core domain types for peg solitaire
//!
//! This module contains the fundamental value types with zero external
//! dependencies: coordinates, jump directions and board tiles.

mod position;
mod tile;

pub use position::{Direction, Position};
pub use tile::{Tile, TileError, TileKind, TileState};
