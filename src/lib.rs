//! # crys-chess
//!
//! Rule engine for CrysChess: a two-player, turn-based game on an 8x8
//! grid of colored stones where exact-length runs capture adjacent
//! enemies and upgrade into pieces with area abilities.
//!
//! ## Design Principles
//!
//! 1. **Boards Are Values**: Every operation takes a board and returns a
//!    new one. The session layer owns the single current board per game
//!    and replaces it on commit; nothing mutates shared state in place.
//!
//! 2. **One Snapshot Per Resolution**: All run detection for a pass reads
//!    the same immutable post-move board. Only the final application step
//!    builds the new state, so simultaneous runs never see each other's
//!    effects.
//!
//! 3. **Reports, Not Callbacks**: Resolution and activation return the
//!    final state plus a destroy/spawn report. Animation, delays, and
//!    delivery are presentation concerns applied to the report.
//!
//! 4. **Silent Rejection**: Illegal moves and empty activations return an
//!    error without touching state or the turn; callers drop them.
//!
//! ## Modules
//!
//! - `board`: Coordinates, pieces (color + tier), the 8x8 grid
//! - `rules`: Move validation, run resolution, abilities, win check
//! - `session`: Committed games and the per-game-id sequence point
//! - `wire`: Transport snapshot (tagged-string cells, `{board, turn}`)

pub mod board;
pub mod rules;
pub mod session;
pub mod wire;

// Re-export commonly used types
pub use crate::board::{Board, Color, Coord, Move, Piece, Tier, BOARD_SIZE};

pub use crate::rules::{
    activate, check_end, resolve, validate,
    Blast, MoveError, Outcome, Resolution, Spawn, MIN_STONES,
};

pub use crate::session::{ActionError, Game, GameId, GameTable, PlayerAction, TurnRecord};

pub use crate::wire::BoardState;
