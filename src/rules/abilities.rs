//! Ability activation for upgraded pieces.
//!
//! A player may consume one of their non-plain pieces instead of moving.
//! The piece's tier picks the blast area:
//! - Star: every enemy in the same row
//! - Quad: every enemy in the 3x3 neighborhood (bounds-clipped)
//! - Hexa: every enemy in the same row and the same column
//!
//! The activating piece is always consumed along with its targets. If
//! the area holds no enemy at all, the activation is a no-op: `None` is
//! returned, nothing changes, and the caller must not flip the turn.
//! Activation never spawns an upgrade.

use rustc_hash::FxHashSet;

use crate::board::{Board, Color, Coord, Tier, BOARD_SIZE};

/// The outcome of a successful activation.
#[derive(Clone, Debug)]
pub struct Blast {
    /// Board after the blast, with the activating piece consumed.
    pub board: Board,
    /// Enemy cells cleared. Never empty; a blast with no targets is
    /// reported as `None` by [`activate`] instead.
    pub destroyed: FxHashSet<Coord>,
}

/// Activate the piece at `at` for `color`.
///
/// Returns `None` when the preconditions fail (empty cell, enemy piece,
/// plain tier) or when the blast would destroy nothing.
#[must_use]
pub fn activate(board: &Board, at: Coord, color: Color) -> Option<Blast> {
    let piece = board.get(at)?;
    if piece.color != color || piece.tier == Tier::Plain {
        return None;
    }

    let destroyed = targets(board, at, color, piece.tier);
    if destroyed.is_empty() {
        return None;
    }

    let mut next = *board;
    for &target in &destroyed {
        next.set(target, None);
    }
    next.set(at, None); // the piece is consumed

    Some(Blast { board: next, destroyed })
}

/// Enemy cells the blast would clear, excluding the piece's own cell.
fn targets(board: &Board, at: Coord, color: Color, tier: Tier) -> FxHashSet<Coord> {
    let mut out = FxHashSet::default();
    let mut add = |c: Coord| {
        if c != at && board.is_enemy(c, color) {
            out.insert(c);
        }
    };

    match tier {
        Tier::Plain => {}
        Tier::Star => {
            for col in 0..BOARD_SIZE {
                add(Coord::new(at.row(), col));
            }
        }
        Tier::Quad => {
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if let Some(c) = at.offset(dr, dc) {
                        add(c);
                    }
                }
            }
        }
        Tier::Hexa => {
            for col in 0..BOARD_SIZE {
                add(Coord::new(at.row(), col));
            }
            for row in 0..BOARD_SIZE {
                add(Coord::new(row, at.col()));
            }
        }
    }

    out
}
