//! Transport and persistence snapshot.
//!
//! The surrounding transport layer ships the whole game state as one
//! blob: an 8x8 array of cells (each `null` or a tag like `"red-quad"`)
//! plus whose turn it is. `BoardState` is that blob as a typed value; in
//! JSON it matches the collaborator format exactly:
//!
//! ```json
//! {"board": [[null, "red", "red-quad", ...], ...], "turn": "red"}
//! ```
//!
//! Bincode gives the compact byte form for persistence.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

/// A full game snapshot at the transport boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardState {
    /// The 8x8 grid, serialized as nested arrays of cell tags.
    pub board: Board,
    /// Color to move next.
    pub turn: Color,
}

impl BoardState {
    /// Snapshot from parts.
    #[must_use]
    pub const fn new(board: Board, turn: Color) -> Self {
        Self { board, turn }
    }

    /// The starting snapshot: initial layout, red to move.
    #[must_use]
    pub fn initial() -> Self {
        Self::new(Board::initial(), Color::Red)
    }

    /// Compact byte encoding for persistence.
    pub fn to_bytes(&self) -> bincode::Result<Vec<u8>> {
        bincode::serialize(self)
    }

    /// Decode a persisted snapshot. Fails on unrecognized cell tags or a
    /// malformed grid; such input is rejected, never repaired.
    pub fn from_bytes(bytes: &[u8]) -> bincode::Result<Self> {
        bincode::deserialize(bytes)
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Coord, Piece, Tier};

    #[test]
    fn test_json_shape_matches_transport_format() {
        let mut board = Board::empty();
        board.set(Coord::new(0, 0), Some(Piece::plain(Color::Red)));
        board.set(Coord::new(0, 1), Some(Piece::new(Color::Blue, Tier::Quad)));
        let state = BoardState::new(board, Color::Blue);

        let json: serde_json::Value = serde_json::to_value(state).unwrap();

        assert_eq!(json["turn"], "blue");
        assert_eq!(json["board"][0][0], "red");
        assert_eq!(json["board"][0][1], "blue-quad");
        assert_eq!(json["board"][0][2], serde_json::Value::Null);
        assert_eq!(json["board"].as_array().unwrap().len(), 8);
        assert_eq!(json["board"][0].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_json_round_trip_exact() {
        let state = BoardState::initial();
        let json = serde_json::to_string(&state).unwrap();
        let back: BoardState = serde_json::from_str(&json).unwrap();

        assert_eq!(back, state);
        // Re-serializing the parsed value reproduces the bytes.
        assert_eq!(serde_json::to_string(&back).unwrap(), json);
    }

    #[test]
    fn test_bincode_round_trip() {
        let state = BoardState::initial();
        let bytes = state.to_bytes().unwrap();
        let back = BoardState::from_bytes(&bytes).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_rejects_unknown_tier_tag() {
        let json = r#"{"board": [[ "red-mega", null, null, null, null, null, null, null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null],
            [null,null,null,null,null,null,null,null]], "turn": "red"}"#;

        let result: Result<BoardState, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_wrong_dimensions() {
        let json = r#"{"board": [[null, null]], "turn": "red"}"#;
        let result: Result<BoardState, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
