//! Player identity, home rows, and movement direction.
//!
//! The game is strictly two-player. Each player has a fixed home row and a
//! fixed direction of travel: White starts on the last row and advances
//! toward row 0, Black starts on row 0 and advances toward the last row.

use serde::{Deserialize, Serialize};

use super::position::BOARD_SIZE;

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// The row on which this player deploys new pieces.
    #[must_use]
    pub const fn home_row(self) -> usize {
        match self {
            Player::White => BOARD_SIZE - 1,
            Player::Black => 0,
        }
    }

    /// Row delta for a one-step forward move.
    ///
    /// White advances toward row 0, Black toward the last row.
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => write!(f, "White"),
            Player::Black => write!(f, "Black"),
        }
    }
}
