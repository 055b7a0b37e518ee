//! Board data model: coordinates, pieces, and the 8x8 grid.
//!
//! Everything here is a plain value with serde support. The rule engine
//! in [`crate::rules`] consumes these and never mutates shared state.

pub mod coord;
pub mod grid;
pub mod piece;

pub use coord::{Coord, Move, BOARD_SIZE};
pub use grid::Board;
pub use piece::{Color, Piece, Tier};
