//! Board coordinates and moves.
//!
//! ## Coord
//!
//! A checked (row, col) position on the 8x8 grid. Coordinates are
//! 0-indexed and can only be constructed in bounds, so the rest of the
//! engine never has to re-validate them.
//!
//! ## Move
//!
//! A (from, to) pair. Legality (adjacency, empty destination, ownership)
//! is the validator's job, not the type's.

use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const BOARD_SIZE: u8 = 8;

/// A position on the board.
///
/// Row and column are 0-indexed and always less than [`BOARD_SIZE`].
///
/// ```
/// use crys_chess::board::Coord;
///
/// let c = Coord::new(3, 4);
/// assert_eq!(c.row(), 3);
/// assert_eq!(c.col(), 4);
/// assert!(Coord::try_new(8, 0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// Create a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if either component is out of bounds. Use [`Coord::try_new`]
    /// for untrusted input.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        Self::try_new(row, col).expect("coordinate out of bounds")
    }

    /// Create a coordinate, returning `None` if out of bounds.
    #[must_use]
    pub const fn try_new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Create a coordinate from signed components, `None` if out of bounds.
    #[must_use]
    pub const fn from_signed(row: i8, col: i8) -> Option<Self> {
        if row >= 0 && col >= 0 {
            Self::try_new(row as u8, col as u8)
        } else {
            None
        }
    }

    /// Row index (0-based).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Column index (0-based).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Offset by a signed delta, `None` if the result leaves the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Self::from_signed(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    pub fn manhattan(self, other: Self) -> u8 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether another coordinate is orthogonally adjacent.
    #[must_use]
    pub fn is_adjacent(self, other: Self) -> bool {
        self.manhattan(other) == 1
    }

    /// Iterate over every coordinate on the board, row-major.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord { row, col }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A proposed move from one cell to another.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source cell.
    pub from: Coord,
    /// Destination cell.
    pub to: Coord,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
