//! The shared supply market.
//!
//! The supply is an ordered sequence of piles, each a card identity plus a
//! remaining count. It is built at game setup from the identities enabled
//! in the configuration, every pile seeded at `SUPPLY_SIZE`. The only
//! mutation is decrementing a single pile's count when a purchase
//! succeeds; a pile at count 0 can never be purchased.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Starting count of every supply pile.
pub const SUPPLY_SIZE: u32 = 8;

/// One purchasable pile in the market.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyPile {
    pub card: Card,
    pub count: u32,
}

/// The shared card market.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supply {
    piles: Vector<SupplyPile>,
}

impl Supply {
    /// Build the market from the enabled card identities, each pile at
    /// full count.
    #[must_use]
    pub fn build(enabled: &[Card]) -> Self {
        Self {
            piles: enabled
                .iter()
                .map(|&card| SupplyPile {
                    card,
                    count: SUPPLY_SIZE,
                })
                .collect(),
        }
    }

    /// The pile at `idx`, if any.
    #[must_use]
    pub fn pile_at(&self, idx: usize) -> Option<SupplyPile> {
        self.piles.get(idx).copied()
    }

    /// Take one card from the pile at `idx`.
    ///
    /// Returns `None` (leaving the supply untouched) if `idx` is out of
    /// range or the pile is exhausted.
    pub fn take_at(&mut self, idx: usize) -> Option<Card> {
        let pile = self.piles.get_mut(idx)?;
        if pile.count == 0 {
            return None;
        }
        pile.count -= 1;
        Some(pile.card)
    }

    /// Number of piles in the market.
    #[must_use]
    pub fn len(&self) -> usize {
        self.piles.len()
    }

    /// Whether the market has no piles at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.piles.is_empty()
    }

    /// Iterate over the piles in market order.
    pub fn iter(&self) -> impl Iterator<Item = &SupplyPile> {
        self.piles.iter()
    }
}
