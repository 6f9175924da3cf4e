//! # hegemony
//!
//! Rules engine for a two-player abstract strategy game played on a 5x5
//! grid, where pieces advance across the board using a deck-building card
//! mechanic (hand/draw/discard piles, a shared supply market, and a
//! per-turn point economy).
//!
//! ## Design Principles
//!
//! 1. **Value-In/Value-Out**: Every transition is a pure function from a
//!    `Game` snapshot (plus action parameters) to a new `Game` snapshot.
//!    Nothing holds hidden mutable state; the embedding application owns
//!    the state lifecycle.
//!
//! 2. **Absence Is Data**: Selection lookups return `Option`, card
//!    resolution returns `Result<Game, PlayError>`. No panics on any input
//!    reachable from engine state.
//!
//! 3. **Persistent Data Structures**: Deck piles and the supply use `im`
//!    sequences so cloning a whole snapshot per action stays cheap.
//!
//! ## Modules
//!
//! - `core`: players, positions, the point economy, RNG
//! - `board`: the 5x5 grid and its traversal primitives
//! - `cards`: the closed card catalog (tactic and strategy identities)
//! - `deck`: per-player hand/draw/discard/played piles
//! - `supply`: the shared purchasable card market
//! - `game`: the aggregate state, card resolution, and the command layer

pub mod board;
pub mod cards;
pub mod core;
pub mod deck;
pub mod game;
pub mod supply;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Player, PointsPool, Position, BOARD_SIZE};

pub use crate::board::{Board, Cell};

pub use crate::cards::{Card, CardKind, PlayCost};

pub use crate::deck::Deck;

pub use crate::supply::{Supply, SupplyPile, SUPPLY_SIZE};

pub use crate::game::{Game, GameAction, GameSetup, PlayError};
