//! Move validation.
//!
//! A move is legal iff the source holds a piece of the color whose turn
//! it is, the destination is empty, and the two cells are orthogonally
//! adjacent (Manhattan distance exactly 1). Validation has no side
//! effects; a rejected move is simply ignored by the caller and the turn
//! does not change.

use crate::board::{Board, Color, Move};

/// Why a proposed move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveError {
    /// Source cell is empty.
    SourceEmpty,
    /// Source piece belongs to the other player.
    NotYourPiece,
    /// Destination cell is occupied.
    DestinationOccupied,
    /// Cells are not orthogonally adjacent.
    NotAdjacent,
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            MoveError::SourceEmpty => "source cell is empty",
            MoveError::NotYourPiece => "piece belongs to the other player",
            MoveError::DestinationOccupied => "destination cell is occupied",
            MoveError::NotAdjacent => "cells are not orthogonally adjacent",
        };
        f.write_str(msg)
    }
}

/// Check a move against the current board and turn.
///
/// Coordinates are in bounds by construction ([`crate::board::Coord`]),
/// so out-of-bounds input cannot reach this point.
pub fn check(board: &Board, mv: Move, turn: Color) -> Result<(), MoveError> {
    match board.color_at(mv.from) {
        None => return Err(MoveError::SourceEmpty),
        Some(color) if color != turn => return Err(MoveError::NotYourPiece),
        Some(_) => {}
    }

    if !board.is_empty(mv.to) {
        return Err(MoveError::DestinationOccupied);
    }

    if !mv.from.is_adjacent(mv.to) {
        return Err(MoveError::NotAdjacent);
    }

    Ok(())
}

/// Boolean form of [`check`], matching the external contract.
#[must_use]
pub fn validate(board: &Board, mv: Move, turn: Color) -> bool {
    check(board, mv, turn).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Piece};

    fn board_with(at: Coord, color: Color) -> Board {
        let mut board = Board::empty();
        board.set(at, Some(Piece::plain(color)));
        board
    }

    #[test]
    fn test_legal_orthogonal_step() {
        let from = Coord::new(3, 3);
        let board = board_with(from, Color::Red);

        for to in [
            Coord::new(2, 3),
            Coord::new(4, 3),
            Coord::new(3, 2),
            Coord::new(3, 4),
        ] {
            assert!(validate(&board, Move::new(from, to), Color::Red));
        }
    }

    #[test]
    fn test_rejects_empty_source() {
        let board = Board::empty();
        let mv = Move::new(Coord::new(3, 3), Coord::new(3, 4));
        assert_eq!(check(&board, mv, Color::Red), Err(MoveError::SourceEmpty));
    }

    #[test]
    fn test_rejects_opponent_piece() {
        let from = Coord::new(3, 3);
        let board = board_with(from, Color::Blue);
        let mv = Move::new(from, Coord::new(3, 4));
        assert_eq!(check(&board, mv, Color::Red), Err(MoveError::NotYourPiece));
    }

    #[test]
    fn test_rejects_occupied_destination() {
        let from = Coord::new(3, 3);
        let to = Coord::new(3, 4);
        let mut board = board_with(from, Color::Red);
        board.set(to, Some(Piece::plain(Color::Blue)));

        assert_eq!(
            check(&board, Move::new(from, to), Color::Red),
            Err(MoveError::DestinationOccupied)
        );
    }

    #[test]
    fn test_rejects_diagonal_and_long_moves() {
        let from = Coord::new(3, 3);
        let board = board_with(from, Color::Red);

        let diagonal = Move::new(from, Coord::new(4, 4));
        assert_eq!(check(&board, diagonal, Color::Red), Err(MoveError::NotAdjacent));

        let jump = Move::new(from, Coord::new(3, 5));
        assert_eq!(check(&board, jump, Color::Red), Err(MoveError::NotAdjacent));

        let in_place = Move::new(from, from);
        // Own piece occupies the cell, so occupancy fires before adjacency.
        assert_eq!(
            check(&board, in_place, Color::Red),
            Err(MoveError::DestinationOccupied)
        );
    }

    #[test]
    fn test_validation_has_no_side_effects() {
        let from = Coord::new(3, 3);
        let board = board_with(from, Color::Red);
        let before = board;

        let _ = validate(&board, Move::new(from, Coord::new(3, 4)), Color::Red);
        let _ = validate(&board, Move::new(from, Coord::new(5, 5)), Color::Red);

        assert_eq!(board, before);
    }
}
