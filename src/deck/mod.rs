//! Per-player card piles: hand, draw pile, discard pile, played mat.
//!
//! Piles are `im::Vector`s so a whole `Deck` clones in O(1)-ish when the
//! `Game` snapshot is replaced. Every operation conserves the total
//! physical card count except `shuffle_disc_into_draw`, which reorders
//! (never creates or destroys).
//!
//! Drawing moves cards from the front of the draw pile and prepends them
//! to the hand; an undersized draw pile yields what is available and never
//! errors or auto-reshuffles. Reshuffling the discard pile into the draw
//! pile is a distinct, explicit operation.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::GameRng;

/// One player's card piles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    hand: Vector<Card>,
    draw: Vector<Card>,
    disc: Vector<Card>,
    played: Vector<Card>,
}

impl Deck {
    /// Create a deck with the given starting hand and draw pile.
    #[must_use]
    pub fn new(
        hand: impl IntoIterator<Item = Card>,
        draw: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            draw: draw.into_iter().collect(),
            disc: Vector::new(),
            played: Vector::new(),
        }
    }

    /// Create a deck from all four piles. Mostly useful in tests.
    #[must_use]
    pub fn from_piles(
        hand: impl IntoIterator<Item = Card>,
        draw: impl IntoIterator<Item = Card>,
        disc: impl IntoIterator<Item = Card>,
        played: impl IntoIterator<Item = Card>,
    ) -> Self {
        Self {
            hand: hand.into_iter().collect(),
            draw: draw.into_iter().collect(),
            disc: disc.into_iter().collect(),
            played: played.into_iter().collect(),
        }
    }

    // === Projections ===

    /// The hand.
    #[must_use]
    pub fn hand(&self) -> &Vector<Card> {
        &self.hand
    }

    /// The draw pile (front is drawn first).
    #[must_use]
    pub fn draw_pile(&self) -> &Vector<Card> {
        &self.draw
    }

    /// The discard pile.
    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.disc
    }

    /// The played-cards mat.
    #[must_use]
    pub fn played(&self) -> &Vector<Card> {
        &self.played
    }

    /// The hand card at `idx`, if any.
    #[must_use]
    pub fn card_at(&self, idx: usize) -> Option<Card> {
        self.hand.get(idx).copied()
    }

    /// Total physical card count across all four piles.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.hand.len() + self.draw.len() + self.disc.len() + self.played.len()
    }

    /// Multiset of all cards in the deck, keyed by identity.
    #[must_use]
    pub fn counts(&self) -> FxHashMap<Card, usize> {
        let mut counts = FxHashMap::default();
        for card in self
            .hand
            .iter()
            .chain(&self.draw)
            .chain(&self.disc)
            .chain(&self.played)
        {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }

    // === Operations ===

    /// Move up to `n` cards from the front of the draw pile into the hand.
    ///
    /// Drawn cards are prepended, preserving their draw order. If fewer
    /// than `n` remain, only those move; an empty draw pile is a no-op.
    pub fn draw(&mut self, n: usize) {
        let k = n.min(self.draw.len());
        let rest = self.draw.split_off(k);
        let mut new_hand = std::mem::replace(&mut self.draw, rest);
        new_hand.append(std::mem::take(&mut self.hand));
        self.hand = new_hand;
    }

    /// Empty the hand into the discard pile (appended).
    pub fn discard_hand(&mut self) {
        let hand = std::mem::take(&mut self.hand);
        self.disc.append(hand);
    }

    /// Empty the played-cards mat into the discard pile (appended).
    pub fn discard_played(&mut self) {
        let played = std::mem::take(&mut self.played);
        self.disc.append(played);
    }

    /// Randomly permute the discard pile and append it to the draw pile,
    /// emptying the discard pile. The hand and mat are untouched.
    pub fn shuffle_disc_into_draw(&mut self, rng: &mut GameRng) {
        let mut cards: Vec<Card> = self.disc.iter().copied().collect();
        rng.shuffle(&mut cards);
        self.disc.clear();
        self.draw.extend(cards);
    }

    /// Append one externally acquired card (e.g. a supply purchase)
    /// directly to the discard pile.
    pub fn add_card_to_discard(&mut self, card: Card) {
        self.disc.push_back(card);
    }

    /// Move the hand card at `idx` to the played mat.
    ///
    /// Returns the card, or `None` (leaving the deck untouched) if `idx`
    /// is stale.
    pub fn play_card_at(&mut self, idx: usize) -> Option<Card> {
        if idx >= self.hand.len() {
            return None;
        }
        let card = self.hand.remove(idx);
        self.played.push_back(card);
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_deck() -> Deck {
        Deck::new(
            [Card::DeployHoplite, Card::Charge],
            [Card::ManeuverForward, Card::Oracle, Card::Tribute],
        )
    }

    #[test]
    fn test_draw_prepends_in_order() {
        let mut deck = sample_deck();
        deck.draw(2);

        let hand: Vec<Card> = deck.hand().iter().copied().collect();
        assert_eq!(
            hand,
            vec![
                Card::ManeuverForward,
                Card::Oracle,
                Card::DeployHoplite,
                Card::Charge,
            ]
        );
        let draw: Vec<Card> = deck.draw_pile().iter().copied().collect();
        assert_eq!(draw, vec![Card::Tribute]);
    }

    #[test]
    fn test_draw_from_empty_pile_is_noop() {
        let mut deck = Deck::new([Card::DeployHoplite, Card::DeployHoplite], []);
        deck.draw(1);

        assert_eq!(deck.hand().len(), 2);
        assert!(deck.draw_pile().is_empty());
    }

    #[test]
    fn test_draw_short_pile_moves_what_is_available() {
        let mut deck = sample_deck();
        deck.draw(10);

        assert_eq!(deck.hand().len(), 5);
        assert!(deck.draw_pile().is_empty());
    }

    #[test]
    fn test_discard_hand_appends() {
        let mut deck = Deck::from_piles(
            [Card::Charge],
            [],
            [Card::Oracle],
            [],
        );
        deck.discard_hand();

        assert!(deck.hand().is_empty());
        let disc: Vec<Card> = deck.discard_pile().iter().copied().collect();
        assert_eq!(disc, vec![Card::Oracle, Card::Charge]);
    }

    #[test]
    fn test_discard_played() {
        let mut deck = Deck::from_piles([], [], [], [Card::Agora, Card::Stoa]);
        deck.discard_played();

        assert!(deck.played().is_empty());
        assert_eq!(deck.discard_pile().len(), 2);
    }

    #[test]
    fn test_shuffle_preserves_multiset_and_empties_disc() {
        let mut deck = Deck::from_piles(
            [Card::Charge],
            [Card::Oracle],
            [Card::Tribute, Card::Tribute, Card::Agora, Card::Stoa],
            [],
        );
        let before = deck.counts();
        let hand_before: Vec<Card> = deck.hand().iter().copied().collect();

        let mut rng = GameRng::new(42);
        deck.shuffle_disc_into_draw(&mut rng);

        assert!(deck.discard_pile().is_empty());
        assert_eq!(deck.draw_pile().len(), 5);
        assert_eq!(deck.counts(), before);
        let hand_after: Vec<Card> = deck.hand().iter().copied().collect();
        assert_eq!(hand_before, hand_after);
    }

    #[test]
    fn test_conservation_across_operations() {
        let mut deck = sample_deck();
        let total = deck.total_len();

        deck.draw(2);
        assert_eq!(deck.total_len(), total);

        deck.play_card_at(0);
        assert_eq!(deck.total_len(), total);

        deck.discard_hand();
        deck.discard_played();
        assert_eq!(deck.total_len(), total);

        let mut rng = GameRng::new(7);
        deck.shuffle_disc_into_draw(&mut rng);
        assert_eq!(deck.total_len(), total);
    }

    #[test]
    fn test_add_card_to_discard() {
        let mut deck = Deck::default();
        deck.add_card_to_discard(Card::SilverMine);

        assert_eq!(deck.discard_pile().len(), 1);
        assert_eq!(deck.total_len(), 1);
    }

    #[test]
    fn test_card_at() {
        let deck = sample_deck();
        assert_eq!(deck.card_at(0), Some(Card::DeployHoplite));
        assert_eq!(deck.card_at(1), Some(Card::Charge));
        assert_eq!(deck.card_at(2), None);
    }

    #[test]
    fn test_play_card_at() {
        let mut deck = sample_deck();

        assert_eq!(deck.play_card_at(1), Some(Card::Charge));
        assert_eq!(deck.hand().len(), 1);
        let played: Vec<Card> = deck.played().iter().copied().collect();
        assert_eq!(played, vec![Card::Charge]);

        assert_eq!(deck.play_card_at(5), None);
        assert_eq!(deck.hand().len(), 1);
    }

    #[test]
    fn test_serialization() {
        let deck = sample_deck();
        let json = serde_json::to_string(&deck).unwrap();
        let back: Deck = serde_json::from_str(&json).unwrap();
        assert_eq!(deck, back);
    }
}
