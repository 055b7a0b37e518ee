//! The game table: one sequence point per live game.
//!
//! Each game id maps to a mutex-guarded [`Game`], so all submissions for
//! one game serialize through a single lock while distinct games never
//! contend. The engine itself is pure computation; this is the only
//! synchronization the crate carries, and delivery of the resulting
//! state to both clients stays with the transport layer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::game::Game;

/// Identifier of a live game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    /// Create a game id.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "game {}", self.0)
    }
}

/// Registry of live games, keyed by id.
#[derive(Debug, Default)]
pub struct GameTable {
    games: Mutex<FxHashMap<GameId, Arc<Mutex<Game>>>>,
    /// Game created by `find_or_create` that still waits for an opponent.
    waiting: Mutex<Option<GameId>>,
    next_id: AtomicU64,
}

impl GameTable {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a fresh game and return its id.
    pub fn create(&self) -> GameId {
        self.insert(Game::new())
    }

    /// Register an existing game (e.g. resumed from a snapshot).
    pub fn insert(&self, game: Game) -> GameId {
        let id = GameId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.games
            .lock()
            .expect("game table lock poisoned")
            .insert(id, Arc::new(Mutex::new(game)));
        id
    }

    /// Matchmaking entry: the first caller opens a game and waits, the
    /// second is paired into it, the third opens the next one.
    pub fn find_or_create(&self) -> GameId {
        let mut waiting = self.waiting.lock().expect("game table lock poisoned");
        match waiting.take() {
            Some(id) => id,
            None => {
                let id = self.create();
                *waiting = Some(id);
                id
            }
        }
    }

    /// Handle to a game, if it exists.
    #[must_use]
    pub fn get(&self, id: GameId) -> Option<Arc<Mutex<Game>>> {
        self.games
            .lock()
            .expect("game table lock poisoned")
            .get(&id)
            .cloned()
    }

    /// Run `f` against the game under its lock.
    ///
    /// This is the per-game sequence point: two players submitting at
    /// once are applied one after the other, never interleaved.
    pub fn with_game<R>(&self, id: GameId, f: impl FnOnce(&mut Game) -> R) -> Option<R> {
        let game = self.get(id)?;
        let mut guard = game.lock().expect("game lock poisoned");
        Some(f(&mut guard))
    }

    /// Drop a finished game. Returns whether it was present.
    pub fn remove(&self, id: GameId) -> bool {
        let mut waiting = self.waiting.lock().expect("game table lock poisoned");
        if *waiting == Some(id) {
            *waiting = None;
        }
        self.games
            .lock()
            .expect("game table lock poisoned")
            .remove(&id)
            .is_some()
    }

    /// Number of live games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.lock().expect("game table lock poisoned").len()
    }

    /// Whether no games are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
