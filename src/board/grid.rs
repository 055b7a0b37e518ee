//! The board: an 8x8 grid of cells.
//!
//! `Board` is a plain value. Engine operations take a board and return a
//! new one; nothing in this crate mutates a board shared with a caller.
//! At 64 `Option<Piece>` cells the copy is trivially cheap, so the
//! "snapshot" the resolution pass reads from is just the input value.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_SIZE};
use super::piece::{Color, Piece, Tier};

/// An 8x8 grid of cells, each empty or holding one piece.
///
/// Serializes transparently as the nested cell array, so the wire form
/// is `[[null, "red", ...], ...]` with no wrapper object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// An empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The starting position: rows 0-1 filled with red plain stones,
    /// rows 6-7 with blue.
    #[must_use]
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for col in 0..BOARD_SIZE {
            for row in 0..2 {
                board.set(Coord::new(row, col), Some(Piece::plain(Color::Red)));
            }
            for row in BOARD_SIZE - 2..BOARD_SIZE {
                board.set(Coord::new(row, col), Some(Piece::plain(Color::Blue)));
            }
        }
        board
    }

    /// Cell contents at a coordinate.
    #[must_use]
    pub fn get(&self, at: Coord) -> Option<Piece> {
        self.cells[at.row() as usize][at.col() as usize]
    }

    /// Set a cell.
    pub fn set(&mut self, at: Coord, cell: Option<Piece>) {
        self.cells[at.row() as usize][at.col() as usize] = cell;
    }

    /// Whether a cell is empty.
    #[must_use]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.get(at).is_none()
    }

    /// Color of the piece at a coordinate, if any.
    ///
    /// Run matching uses this: tier never affects whether cells match.
    #[must_use]
    pub fn color_at(&self, at: Coord) -> Option<Color> {
        self.get(at).map(|p| p.color)
    }

    /// Whether the cell holds a piece of the opposing color.
    #[must_use]
    pub fn is_enemy(&self, at: Coord, us: Color) -> bool {
        self.color_at(at) == Some(us.opponent())
    }

    /// Replace the tier of the piece at `at`, keeping its color.
    ///
    /// Silently does nothing on an empty cell; the resolution pass guards
    /// its spawns on the expected color before calling this.
    pub fn upgrade(&mut self, at: Coord, tier: Tier) {
        if let Some(piece) = self.get(at) {
            self.set(at, Some(Piece::new(piece.color, tier)));
        }
    }

    /// Number of stones of one color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.iter()
            .filter(|(_, piece)| piece.color == color)
            .count()
    }

    /// Total number of stones on the board.
    #[must_use]
    pub fn total_count(&self) -> usize {
        Coord::all().filter(|&c| !self.is_empty(c)).count()
    }

    /// Iterate over occupied cells as (coordinate, piece) pairs, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|c| self.get(c).map(|p| (c, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.total_count(), 0);
        assert!(board.is_empty(Coord::new(0, 0)));
    }

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();

        assert_eq!(board.count(Color::Red), 16);
        assert_eq!(board.count(Color::Blue), 16);

        for col in 0..BOARD_SIZE {
            assert_eq!(board.get(Coord::new(0, col)), Some(Piece::plain(Color::Red)));
            assert_eq!(board.get(Coord::new(1, col)), Some(Piece::plain(Color::Red)));
            assert!(board.is_empty(Coord::new(3, col)));
            assert_eq!(board.get(Coord::new(6, col)), Some(Piece::plain(Color::Blue)));
            assert_eq!(board.get(Coord::new(7, col)), Some(Piece::plain(Color::Blue)));
        }
    }

    #[test]
    fn test_set_and_get() {
        let mut board = Board::empty();
        let at = Coord::new(4, 4);

        board.set(at, Some(Piece::plain(Color::Red)));
        assert_eq!(board.color_at(at), Some(Color::Red));

        board.set(at, None);
        assert!(board.is_empty(at));
    }

    #[test]
    fn test_is_enemy() {
        let mut board = Board::empty();
        board.set(Coord::new(0, 0), Some(Piece::plain(Color::Red)));

        assert!(board.is_enemy(Coord::new(0, 0), Color::Blue));
        assert!(!board.is_enemy(Coord::new(0, 0), Color::Red));
        assert!(!board.is_enemy(Coord::new(1, 1), Color::Blue)); // empty
    }

    #[test]
    fn test_upgrade_keeps_color() {
        let mut board = Board::empty();
        let at = Coord::new(2, 2);
        board.set(at, Some(Piece::plain(Color::Blue)));

        board.upgrade(at, Tier::Star);
        assert_eq!(board.get(at), Some(Piece::new(Color::Blue, Tier::Star)));

        // Upgrading an empty cell is a no-op.
        board.upgrade(Coord::new(3, 3), Tier::Quad);
        assert!(board.is_empty(Coord::new(3, 3)));
    }

    #[test]
    fn test_board_is_a_value() {
        let board = Board::initial();
        let mut copy = board;
        copy.set(Coord::new(0, 0), None);

        assert_eq!(board.get(Coord::new(0, 0)), Some(Piece::plain(Color::Red)));
        assert!(copy.is_empty(Coord::new(0, 0)));
    }

    #[test]
    fn test_board_serialization_round_trip() {
        let board = Board::initial();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back, board);
    }
}
