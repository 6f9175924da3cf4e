//! Board coordinates and rank-file labels.
//!
//! A `Position` is a (row, col) pair in `[0, BOARD_SIZE)` squared. The UI
//! boundary addresses cells with a rank-file label (file A-E = column,
//! rank digit = row), e.g. `"A4"`. Parsing a label never fails: malformed
//! components default to 0 rather than erroring, so a `Position` obtained
//! from a label is always on the grid.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 5;

/// A (row, col) board coordinate.
///
/// Construction is unchecked; `Board` operations bounds-check on use, and
/// the step helpers (`offset`, `forward`, ...) only ever produce on-grid
/// positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on the grid.
    #[must_use]
    pub const fn on_board(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Step by (row delta, col delta), returning `None` if the result
    /// leaves the grid.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        let pos = Self { row, col };
        pos.on_board().then_some(pos)
    }

    /// One step in `player`'s direction of travel.
    #[must_use]
    pub fn forward(self, player: Player) -> Option<Self> {
        self.offset(player.forward(), 0)
    }

    /// One lateral step to `player`'s left.
    ///
    /// Facing the direction of travel: White's left is column minus one,
    /// Black's left is column plus one.
    #[must_use]
    pub fn left(self, player: Player) -> Option<Self> {
        match player {
            Player::White => self.offset(0, -1),
            Player::Black => self.offset(0, 1),
        }
    }

    /// One lateral step to `player`'s right.
    #[must_use]
    pub fn right(self, player: Player) -> Option<Self> {
        match player {
            Player::White => self.offset(0, 1),
            Player::Black => self.offset(0, -1),
        }
    }

    /// Rank-file label for this position, e.g. `"A4"` for (row 4, col 0).
    #[must_use]
    pub fn label(self) -> String {
        let file = (b'A' + self.col as u8) as char;
        format!("{}{}", file, self.row)
    }

    /// Parse a rank-file label.
    ///
    /// Malformed or out-of-range components default to 0, so the result is
    /// always on the grid.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let mut chars = label.chars();
        let col = match chars.next() {
            Some(c @ 'A'..='E') => (c as u8 - b'A') as usize,
            Some(c @ 'a'..='e') => (c as u8 - b'a') as usize,
            _ => 0,
        };
        let row = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as usize)
            .filter(|&d| d < BOARD_SIZE)
            .unwrap_or(0);
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
