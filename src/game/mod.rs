//! The game aggregate and its transition layers.
//!
//! Three tiers, innermost first:
//!
//! - `state`: the `Game` snapshot and its pure transition primitives
//!   (placement, relocation, end-of-turn progression, point bookkeeping).
//! - `play`: the card-effect state machine. Validates a card against a
//!   target and either produces a new `Game` or a named `PlayError`.
//! - `action`: the command layer the UI dispatches against. Collapses
//!   every play-layer failure into an unchanged `Game`; the action API
//!   itself never surfaces an error.

pub mod action;
pub mod play;
pub mod state;

pub use action::GameAction;
pub use play::PlayError;
pub use state::{Game, GameSetup};
