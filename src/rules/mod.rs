//! The rule engine: validation, run resolution, abilities, win check.
//!
//! Every operation here is pure: it takes a board (plus move/coordinate
//! context) and returns a fresh board with a report of what happened.
//! The session layer in [`crate::session`] owns the single current board
//! per game and commits these results.

pub mod abilities;
pub mod outcome;
pub mod runs;
pub mod validator;

pub use abilities::{activate, Blast};
pub use outcome::{check_end, Outcome, MIN_STONES};
pub use runs::{resolve, Resolution, Spawn, RUN_LENGTHS};
pub use validator::{check, validate, MoveError};
