//! The 5x5 board: cells, traversal primitives, and text notation.
//!
//! A `Board` is an ordered 2-D array of `Cell`. Every operation returns a
//! new `Board` value; callers treat each board as immutable once observed.
//! Out-of-range positions never panic: lookups yield `None` and writes are
//! the identity.
//!
//! ## Text Notation
//!
//! `show`/`parse` round-trip to a compact fixture format for tests and
//! debugging: `-` is an empty cell, `P` a White piece, `p` a Black piece,
//! rows joined by `/`. Row 0 comes first:
//!
//! ```
//! use hegemony::board::Board;
//!
//! let board = Board::parse("-p---/-----/-----/-----/---P-").unwrap();
//! assert_eq!(board.show(), "-p---/-----/-----/-----/---P-");
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, Position, BOARD_SIZE};

/// Separator between rows in the text notation.
pub const ROW_SEPARATOR: char = '/';

/// One square of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Piece(Player),
}

impl Cell {
    /// Whether the cell holds no piece.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Whether the cell holds a piece owned by `player`.
    #[must_use]
    pub fn holds(self, player: Player) -> bool {
        self == Cell::Piece(player)
    }
}

/// The 5x5 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// An all-empty board.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The cell at `pos`, or `None` if `pos` is off the grid.
    #[must_use]
    pub fn lookup(&self, pos: Position) -> Option<Cell> {
        if pos.on_board() {
            Some(self.cells[pos.row][pos.col])
        } else {
            None
        }
    }

    /// A board with `cell` written at `pos`.
    ///
    /// Identity if `pos` is off the grid.
    #[must_use]
    pub fn with(&self, pos: Position, cell: Cell) -> Self {
        if !pos.on_board() {
            return *self;
        }
        let mut next = *self;
        next.cells[pos.row][pos.col] = cell;
        next
    }

    /// Relocate whatever occupies `from` to `to`, clearing `from`.
    ///
    /// Unvalidated: moving an `Empty` cell is effectively a no-op move of
    /// nothing, and either position being off-grid leaves the board as is.
    #[must_use]
    pub fn move_piece(&self, from: Position, to: Position) -> Self {
        if from == to {
            return *self;
        }
        match self.lookup(from) {
            Some(cell) => self.with(to, cell).with(from, Cell::Empty),
            None => *self,
        }
    }

    /// Apply `f` to every cell.
    #[must_use]
    pub fn map(&self, f: impl Fn(Cell) -> Cell) -> Self {
        self.map_with_index(|_, cell| f(cell))
    }

    /// Apply `f` to every (position, cell) pair.
    #[must_use]
    pub fn map_with_index(&self, f: impl Fn(Position, Cell) -> Cell) -> Self {
        let mut next = *self;
        for (row, cells) in next.cells.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = f(Position::new(row, col), *cell);
            }
        }
        next
    }

    /// Fold over every (position, cell) pair in row-major order.
    pub fn reduce_with_index<A>(&self, init: A, mut f: impl FnMut(A, Position, Cell) -> A) -> A {
        let mut acc = init;
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                acc = f(acc, Position::new(row, col), *cell);
            }
        }
        acc
    }

    /// All positions currently holding a piece owned by `player`.
    #[must_use]
    pub fn positions_of(&self, player: Player) -> SmallVec<[Position; 8]> {
        self.reduce_with_index(SmallVec::new(), |mut acc, pos, cell| {
            if cell.holds(player) {
                acc.push(pos);
            }
            acc
        })
    }

    /// Render the board in text notation.
    #[must_use]
    pub fn show(&self) -> String {
        let rows: Vec<String> = self
            .cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '-',
                        Cell::Piece(Player::White) => 'P',
                        Cell::Piece(Player::Black) => 'p',
                    })
                    .collect()
            })
            .collect();
        rows.join(&ROW_SEPARATOR.to_string())
    }

    /// Parse text notation back into a board.
    ///
    /// Returns `None` unless the input is exactly five rows of five valid
    /// cell characters.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let mut board = Self::empty();
        let rows: Vec<&str> = text.split(ROW_SEPARATOR).collect();
        if rows.len() != BOARD_SIZE {
            return None;
        }
        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != BOARD_SIZE {
                return None;
            }
            for (col, ch) in line.chars().enumerate() {
                board.cells[row][col] = match ch {
                    '-' => Cell::Empty,
                    'P' => Cell::Piece(Player::White),
                    'p' => Cell::Piece(Player::Black),
                    _ => return None,
                };
            }
        }
        Some(board)
    }
}
