//! Card system: the closed catalog of card identities.
//!
//! ## Key Types
//!
//! - `Card`: closed enum of every card identity (tactic and strategy)
//! - `CardKind`: tactic (movement/combat) vs strategy (economy)
//! - `PlayCost`: a strategy-point cost XOR a tactic-point cost
//!
//! Cards are values, not entities: a deck may contain many copies of the
//! same identity, and every attribute of an identity is fixed static data
//! resolved by exhaustive match. Adding a new identity forces every
//! dispatch site to be revisited.

pub mod card;
pub mod catalog;

pub use card::{Card, CardKind, PlayCost};
