//! Core engine types: players, positions, the point economy, RNG.
//!
//! These are the leaf building blocks everything else composes. They carry
//! no game-flow logic of their own.

pub mod player;
pub mod points;
pub mod position;
pub mod rng;

pub use player::Player;
pub use points::PointsPool;
pub use position::{Position, BOARD_SIZE};
pub use rng::{GameRng, GameRngState};
