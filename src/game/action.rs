//! The command layer: the five actions a UI can dispatch.
//!
//! `Game::apply` is the single entry point. It takes the current snapshot
//! and an action and always returns a `Game` - never an error. Every
//! play-layer failure (bad cost, bad target, stale selection) collapses
//! into the unchanged game, so an embedding UI simply re-renders whatever
//! it gets back.
//!
//! The state machine is implicit in the snapshot: `selected_card` being
//! `None` means "awaiting selection", `Some` means "card selected,
//! awaiting target".

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{PointsPool, Position};

use super::play::{self, PlayError};
use super::state::Game;

/// One UI-dispatched command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    /// Select (or re-select) the hand card at an index.
    SelectHandCard(usize),
    /// Buy from the supply pile at an index.
    SelectSupplyPile(usize),
    /// Resolve the selected card against the play mat.
    SelectPlayMat,
    /// Resolve the selected card against a board cell.
    SelectCell(Position),
    /// Cycle decks, advance the board, hand the turn over.
    EndTurn,
}

impl Game {
    /// Apply one action, producing the next snapshot.
    ///
    /// Invalid actions return the game unchanged; this layer never
    /// surfaces an error.
    #[must_use]
    pub fn apply(&self, action: GameAction) -> Game {
        match action {
            GameAction::SelectHandCard(idx) => self.select_hand_card(idx),
            GameAction::SelectSupplyPile(idx) => self.select_supply_pile(idx),
            GameAction::SelectPlayMat => self.resolve_selected(|card, game| {
                play::play_mat_card(card, game)
            }),
            GameAction::SelectCell(pos) => self.resolve_selected(move |card, game| {
                play::play_piece_card(card, pos, game)
            }),
            GameAction::EndTurn => self.end_turn(),
        }
    }

    /// Unconditional selection; re-selecting overwrites.
    fn select_hand_card(&self, idx: usize) -> Game {
        let mut next = self.clone();
        next.selected_card = Some(idx);
        next
    }

    /// Purchase from the supply.
    ///
    /// Out-of-range index, exhausted pile, and missing strategy point are
    /// each a silent no-op; the caller cannot distinguish them. On success
    /// the card lands in the acting player's discard pile, the pile count
    /// drops by one, and one strategy point is consumed - together or not
    /// at all.
    fn select_supply_pile(&self, idx: usize) -> Game {
        if self.turn_points.strategy < 1 {
            return self.clone();
        }
        let mut next = self.clone();
        let Some(card) = next.supply.take_at(idx) else {
            return self.clone();
        };
        next.current_deck_mut().add_card_to_discard(card);
        next.turn_points.strategy -= 1;
        next
    }

    /// Look up the selected hand card, validate its cost, and run `resolve`.
    ///
    /// Missing selection, stale index, or any play error returns the game
    /// unchanged. On success the played card moves from hand to mat and
    /// the selection clears.
    fn resolve_selected(
        &self,
        resolve: impl FnOnce(Card, &Game) -> Result<Game, PlayError>,
    ) -> Game {
        let Some(idx) = self.selected_card else {
            return self.clone();
        };
        let Some(card) = self.current_deck().card_at(idx) else {
            return self.clone();
        };
        if play::validate_card_cost(card, self).is_err() {
            return self.clone();
        }
        match resolve(card, self) {
            Ok(mut next) => {
                next.current_deck_mut().play_card_at(idx);
                next.selected_card = None;
                next
            }
            Err(_) => self.clone(),
        }
    }

    /// End the acting player's turn. Always succeeds.
    ///
    /// Discards the played mat and the remaining hand, draws back up to a
    /// full hand (shuffling the discard pile into the draw pile first if
    /// the draw pile cannot cover it), advances the board via `progress`
    /// (which also hands the turn over), clears the selection, and resets
    /// the turn pool for the incoming player.
    fn end_turn(&self) -> Game {
        let mut next = self.clone();
        let hand_size = next.hand_size;
        {
            let (deck, rng) = next.current_deck_and_rng_mut();
            deck.discard_played();
            deck.discard_hand();
            if deck.draw_pile().len() < hand_size {
                deck.shuffle_disc_into_draw(rng);
            }
            deck.draw(hand_size);
        }
        let mut next = next.progress();
        next.selected_card = None;
        next.turn_points = PointsPool::TURN_BASELINE;
        next
    }
}
