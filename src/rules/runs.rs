//! Run detection and resolution.
//!
//! After every committed move the board is scanned for exact-length runs
//! of same-colored stones, 3 to 6 long, along every row and column. A
//! window only counts if it is exact: a neighbor of the same color on
//! either side means the window sits inside a longer run and is skipped,
//! so a run of 7 or more triggers nothing at all.
//!
//! Lengths are scanned in priority order 6, 5, 4, 3, horizontal before
//! vertical, and every window reads the same immutable snapshot (the
//! input board). Only the final application step builds the new board:
//! the union of destroy marks is cleared first, then upgrade spawns are
//! applied in detection order, so when two runs nominate the same
//! endpoint cell the later mark wins.
//!
//! Capture and upgrade rules per exact length:
//! - 4, 5, 6: triggers only with an enemy stone directly past one of the
//!   run's ends. The after side (higher index) is preferred when both
//!   ends have enemies. The chosen enemy is destroyed and the run
//!   endpoint on that side upgrades to Quad, Star, or Hexa respectively.
//! - 3: each end with an adjacent enemy destroys it (both ends may fire);
//!   triples never upgrade.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Color, Coord, Tier, BOARD_SIZE};

/// Exact lengths detected, in priority order.
pub const RUN_LENGTHS: [u8; 4] = [6, 5, 4, 3];

/// An upgrade produced by a triggered run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    /// Run endpoint that was upgraded.
    pub at: Coord,
    /// Tier it was upgraded to.
    pub tier: Tier,
}

/// The outcome of one resolution pass.
#[derive(Clone, Debug)]
pub struct Resolution {
    /// Board after all destroys and upgrades were applied.
    pub board: Board,
    /// Cells cleared by this pass. Multiple runs nominating the same cell
    /// destroy it once.
    pub destroyed: FxHashSet<Coord>,
    /// Upgrades in detection order. On a shared endpoint cell the last
    /// entry is the one left standing.
    pub spawned: SmallVec<[Spawn; 4]>,
}

impl Resolution {
    /// Whether the pass had no effect at all.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.destroyed.is_empty() && self.spawned.is_empty()
    }
}

/// A scan line: one row or one column.
#[derive(Clone, Copy, Debug)]
enum Axis {
    Row,
    Col,
}

impl Axis {
    /// Cell at signed offset `idx` along line `line`, `None` off-board.
    fn cell(self, line: u8, idx: i16) -> Option<Coord> {
        if idx < 0 || idx >= i16::from(BOARD_SIZE) {
            return None;
        }
        let idx = idx as u8;
        match self {
            Axis::Row => Coord::try_new(line, idx),
            Axis::Col => Coord::try_new(idx, line),
        }
    }
}

/// Marks accumulated during the scan, applied atomically afterwards.
#[derive(Default)]
struct Marks {
    destroyed: FxHashSet<Coord>,
    // Color kept alongside each spawn so application can guard on it.
    spawns: Vec<(Coord, Tier, Color)>,
}

/// Resolve all runs on a post-move board.
///
/// Detection reads only from `board`; the returned [`Resolution`] holds
/// the new board. Applying `resolve` to a board it already produced is a
/// no-op unless the caller changed something in between.
#[must_use]
pub fn resolve(board: &Board) -> Resolution {
    let mut marks = Marks::default();

    for len in RUN_LENGTHS {
        let upgrade = Tier::for_run_len(len);
        scan_axis(board, len, upgrade, Axis::Row, &mut marks);
        scan_axis(board, len, upgrade, Axis::Col, &mut marks);
    }

    let mut next = *board;
    for &at in &marks.destroyed {
        next.set(at, None);
    }
    for &(at, tier, color) in &marks.spawns {
        // Run members are never destroy targets, so this only yields to a
        // competing spawn on the same cell.
        if next.color_at(at) == Some(color) {
            next.upgrade(at, tier);
        }
    }

    Resolution {
        board: next,
        destroyed: marks.destroyed,
        spawned: marks
            .spawns
            .iter()
            .map(|&(at, tier, _)| Spawn { at, tier })
            .collect(),
    }
}

/// Scan every window of `len` cells along every line of one axis.
fn scan_axis(board: &Board, len: u8, upgrade: Option<Tier>, axis: Axis, marks: &mut Marks) {
    for line in 0..BOARD_SIZE {
        for start in 0..=BOARD_SIZE - len {
            let start = i16::from(start);
            let first = axis.cell(line, start).expect("window start in bounds");
            let Some(color) = board.color_at(first) else {
                continue;
            };

            let same = |idx: i16| {
                axis.cell(line, idx)
                    .is_some_and(|c| board.color_at(c) == Some(color))
            };

            if !(1..i16::from(len)).all(|k| same(start + k)) {
                continue;
            }

            // Exactness: a same-colored neighbor past either end means the
            // window is a slice of a longer run.
            let before = start - 1;
            let after = start + i16::from(len);
            if same(before) || same(after) {
                continue;
            }

            let enemy_at = |idx: i16| {
                axis.cell(line, idx)
                    .filter(|&c| board.is_enemy(c, color))
            };

            match upgrade {
                // Triples: capture at each enemy-occupied end, no upgrade.
                None => {
                    for idx in [before, after] {
                        if let Some(enemy) = enemy_at(idx) {
                            marks.destroyed.insert(enemy);
                        }
                    }
                }
                // 4-6: one enemy end required; prefer the after side.
                Some(tier) => {
                    let before_enemy = enemy_at(before);
                    let after_enemy = enemy_at(after);

                    let (enemy, endpoint) = match (before_enemy, after_enemy) {
                        (_, Some(enemy)) => (enemy, after - 1),
                        (Some(enemy), None) => (enemy, start),
                        (None, None) => continue,
                    };

                    marks.destroyed.insert(enemy);
                    let endpoint = axis.cell(line, endpoint).expect("run endpoint in bounds");
                    marks.spawns.push((endpoint, tier, color));
                }
            }
        }
    }
}
