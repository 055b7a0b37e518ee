//! A single committed game.
//!
//! `Game` owns the authoritative board, turn, and outcome for one match
//! and is the only place state is replaced: each accepted action runs
//! the full pipeline (validate, apply, resolve, win check) against the
//! current board and commits the result atomically. Rejected actions
//! return an error and change nothing (no board mutation, no turn flip),
//! which gives callers the silent-ignore policy for free.
//!
//! Every commit appends a `TurnRecord` so the transport layer can replay
//! what was destroyed and spawned (the report the UI animates from).

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Color, Coord, Move, Piece, Tier};
use crate::rules::{self, MoveError, Outcome, Spawn};
use crate::wire::BoardState;

/// An action a player can submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Slide a stone to an adjacent empty cell.
    Move(Move),
    /// Consume an upgraded piece to fire its blast.
    Activate(Coord),
}

/// Why a submitted action was rejected.
///
/// Rejection never changes state and never flips the turn; callers may
/// simply drop the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionError {
    /// The game already reached a terminal outcome.
    GameOver,
    /// The submitting player is not the color to move.
    NotYourTurn,
    /// The move failed validation.
    IllegalMove(MoveError),
    /// The cell does not hold an upgraded piece of the acting color.
    NotActivatable,
    /// The blast would destroy nothing.
    NoTargets,
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::GameOver => f.write_str("game is over"),
            ActionError::NotYourTurn => f.write_str("not your turn"),
            ActionError::IllegalMove(err) => write!(f, "illegal move: {err}"),
            ActionError::NotActivatable => f.write_str("cell holds no activatable piece"),
            ActionError::NoTargets => f.write_str("activation would destroy nothing"),
        }
    }
}

impl From<MoveError> for ActionError {
    fn from(err: MoveError) -> Self {
        ActionError::IllegalMove(err)
    }
}

/// One committed action and its effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Who acted.
    pub actor: Color,
    /// What they did.
    pub action: PlayerAction,
    /// Cells cleared by the commit (captures, blast targets, and for an
    /// activation the consumed piece itself).
    pub destroyed: FxHashSet<Coord>,
    /// Upgrades produced by run resolution; always empty for activations.
    pub spawned: SmallVec<[Spawn; 4]>,
    /// 1-based index of the commit within the game.
    pub turn_number: u32,
}

/// One game: the current board, whose turn it is, and how it ended.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    turn: Color,
    outcome: Outcome,
    turn_number: u32,
    history: Vector<TurnRecord>,
}

impl Game {
    /// A fresh game: initial layout, red to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(BoardState::initial())
    }

    /// Resume a game from a transport snapshot.
    ///
    /// The outcome is recomputed from the board, so a snapshot taken
    /// after a win stays terminal.
    #[must_use]
    pub fn from_state(state: BoardState) -> Self {
        Self {
            board: state.board,
            turn: state.turn,
            outcome: rules::check_end(&state.board),
            turn_number: 1,
            history: Vector::new(),
        }
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Color to move next.
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// Current outcome.
    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Committed actions, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<TurnRecord> {
        &self.history
    }

    /// Transport snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> BoardState {
        BoardState::new(self.board, self.turn)
    }

    /// Submit a move for `actor`.
    ///
    /// On success the move is applied, triggered runs are resolved, the
    /// turn flips, and the win condition is re-checked; the returned
    /// record reports the capture/upgrade effects.
    pub fn try_move(&mut self, actor: Color, mv: Move) -> Result<TurnRecord, ActionError> {
        self.check_actor(actor)?;
        rules::check(&self.board, mv, actor)?;

        let piece = self.board.get(mv.from);
        let mut moved = self.board;
        moved.set(mv.to, piece);
        moved.set(mv.from, None);

        let resolution = rules::resolve(&moved);

        self.commit(
            resolution.board,
            TurnRecord {
                actor,
                action: PlayerAction::Move(mv),
                destroyed: resolution.destroyed,
                spawned: resolution.spawned,
                turn_number: self.turn_number,
            },
        )
    }

    /// Submit an ability activation for `actor`.
    ///
    /// The piece at `at` must be an upgraded piece of the acting color
    /// and its blast must hit at least one enemy; otherwise the game is
    /// untouched and the turn stays with `actor`.
    pub fn try_activate(&mut self, actor: Color, at: Coord) -> Result<TurnRecord, ActionError> {
        self.check_actor(actor)?;

        match self.board.get(at) {
            Some(Piece { color, tier }) if color == actor && tier != Tier::Plain => {}
            _ => return Err(ActionError::NotActivatable),
        }

        let blast = rules::activate(&self.board, at, actor).ok_or(ActionError::NoTargets)?;

        let mut destroyed = blast.destroyed;
        destroyed.insert(at); // the consumed piece is part of the report

        self.commit(
            blast.board,
            TurnRecord {
                actor,
                action: PlayerAction::Activate(at),
                destroyed,
                spawned: SmallVec::new(),
                turn_number: self.turn_number,
            },
        )
    }

    fn check_actor(&self, actor: Color) -> Result<(), ActionError> {
        if self.outcome.is_terminal() {
            return Err(ActionError::GameOver);
        }
        if actor != self.turn {
            return Err(ActionError::NotYourTurn);
        }
        Ok(())
    }

    /// Replace the board, record the action, flip the turn, re-check the
    /// win condition. The single commit point for both action kinds.
    fn commit(&mut self, board: Board, record: TurnRecord) -> Result<TurnRecord, ActionError> {
        self.board = board;
        self.turn = self.turn.opponent();
        self.turn_number += 1;
        self.outcome = rules::check_end(&self.board);
        self.history.push_back(record.clone());
        Ok(record)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
