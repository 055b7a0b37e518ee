//! Session layer: committed games and the per-game sequence point.
//!
//! [`Game`] owns the single current board for one match and applies the
//! rule engine's results on commit; [`GameTable`] serializes concurrent
//! submissions per game id, as the networked deployment requires.

pub mod game;
pub mod table;

pub use game::{ActionError, Game, PlayerAction, TurnRecord};
pub use table::{GameId, GameTable};
