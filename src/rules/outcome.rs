//! Win condition.
//!
//! A color drops out of the game when its stone count falls below
//! [`MIN_STONES`]. Checked after every committed move or activation.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Color};

/// Minimum stones a color needs to stay in the game.
pub const MIN_STONES: usize = 3;

/// Result of the end-of-game check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Both colors still have enough stones.
    Ongoing,
    /// The other color dropped below the minimum.
    Win(Color),
    /// Both colors dropped below the minimum at once.
    Draw,
}

impl Outcome {
    /// Whether the game is over.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// Whether a color won.
    #[must_use]
    pub fn is_winner(self, color: Color) -> bool {
        self == Outcome::Win(color)
    }
}

/// Count stones per color and decide whether the game is over.
#[must_use]
pub fn check_end(board: &Board) -> Outcome {
    let red_alive = board.count(Color::Red) >= MIN_STONES;
    let blue_alive = board.count(Color::Blue) >= MIN_STONES;

    match (red_alive, blue_alive) {
        (true, true) => Outcome::Ongoing,
        (true, false) => Outcome::Win(Color::Red),
        (false, true) => Outcome::Win(Color::Blue),
        (false, false) => Outcome::Draw,
    }
}
