//! The per-turn point economy.
//!
//! A `PointsPool` is an additive vector of five independently tracked
//! counters. Card play values grant pools, card costs consume them.
//! Combination is pointwise addition; consumption is pointwise subtraction.
//! Sufficiency is a separate question (`covers`) answered before a cost is
//! deducted; the arithmetic itself is unconditional.

use serde::{Deserialize, Serialize};

/// A vector of five resource counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointsPool {
    /// Piece-placement points.
    pub hoplite: i32,
    /// Strategy points (card plays, supply purchases).
    pub strategy: i32,
    /// Tactic points (movement and combat).
    pub tactic: i32,
    /// Resource points (resource-commitment mechanics).
    pub resource: i32,
    /// Draw points.
    pub draw: i32,
}

impl PointsPool {
    /// The empty pool.
    pub const ZERO: Self = Self {
        hoplite: 0,
        strategy: 0,
        tactic: 0,
        resource: 0,
        draw: 0,
    };

    /// The baseline every player starts each turn with.
    pub const TURN_BASELINE: Self = Self {
        strategy: 1,
        tactic: 1,
        ..Self::ZERO
    };

    /// Pointwise addition.
    #[must_use]
    pub const fn add(self, other: Self) -> Self {
        Self {
            hoplite: self.hoplite + other.hoplite,
            strategy: self.strategy + other.strategy,
            tactic: self.tactic + other.tactic,
            resource: self.resource + other.resource,
            draw: self.draw + other.draw,
        }
    }

    /// Pointwise subtraction. No floor check; see `covers`.
    #[must_use]
    pub const fn sub(self, other: Self) -> Self {
        self.add(other.negate())
    }

    /// Pointwise negation.
    #[must_use]
    pub const fn negate(self) -> Self {
        Self {
            hoplite: -self.hoplite,
            strategy: -self.strategy,
            tactic: -self.tactic,
            resource: -self.resource,
            draw: -self.draw,
        }
    }

    /// Whether every counter is at least as large as the corresponding
    /// counter of `cost`.
    #[must_use]
    pub const fn covers(self, cost: Self) -> bool {
        self.hoplite >= cost.hoplite
            && self.strategy >= cost.strategy
            && self.tactic >= cost.tactic
            && self.resource >= cost.resource
            && self.draw >= cost.draw
    }
}
