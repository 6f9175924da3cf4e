//! The aggregate game state and its pure transition primitives.
//!
//! `Game` is the single source of truth. Every transition takes the
//! current snapshot by reference and returns an entirely new, structurally
//! independent snapshot; no call retains references into a previous one,
//! so the engine is safe to drive from any event loop.
//!
//! The primitives here are deliberately unvalidated where the spec layers
//! validation elsewhere: `move_piece` trusts its caller, the point
//! consumers have no floor check (sufficiency is enforced by the play
//! layer's cost validation), and `add_piece` silently ignores out-of-row
//! placement rather than erroring.

use crate::board::{Board, Cell};
use crate::cards::Card;
use crate::core::{GameRng, Player, PointsPool, Position};
use crate::deck::Deck;
use crate::supply::Supply;

/// Configuration for a fresh game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSetup {
    /// Cards each player holds at the start of turn one.
    pub starting_hand: Vec<Card>,
    /// Cards each player's draw pile starts with, front first.
    pub starting_draw: Vec<Card>,
    /// Hand size drawn back up to at end of turn.
    pub hand_size: usize,
    /// Card identities enabled in the supply market.
    pub supply_cards: Vec<Card>,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            starting_hand: vec![
                Card::DeployHoplite,
                Card::DeployHoplite,
                Card::ManeuverForward,
                Card::ManeuverForward,
                Card::Charge,
            ],
            starting_draw: vec![
                Card::DeployHoplite,
                Card::AssaultForward,
                Card::ManeuverLeft,
                Card::ManeuverRight,
                Card::Oracle,
            ],
            hand_size: 5,
            supply_cards: vec![
                Card::MilitaryReforms,
                Card::PoliticalReforms,
                Card::Oracle,
                Card::Agora,
                Card::Tribute,
                Card::SilverMine,
                Card::Phalanx,
                Card::Trireme,
                Card::Academy,
                Card::Harbor,
            ],
        }
    }
}

/// The whole game state.
///
/// Replaced wholesale on every action; see the module docs.
#[derive(Clone, Debug, PartialEq)]
pub struct Game {
    pub board: Board,
    pub current_player: Player,
    pub deck_white: Deck,
    pub deck_black: Deck,
    /// The current player's point pool for this turn.
    pub turn_points: PointsPool,
    pub supply: Supply,
    /// Starts at 1; increments after Black's turn ends.
    pub turn_count: u32,
    pub hegemony_white: u32,
    pub hegemony_black: u32,
    /// Index into the current player's hand, when a card is selected.
    pub selected_card: Option<usize>,
    /// Hand size drawn back up to at end of turn.
    pub hand_size: usize,
    rng: GameRng,
}

impl Game {
    /// Create a fresh game. White moves first.
    #[must_use]
    pub fn new(setup: &GameSetup, seed: u64) -> Self {
        let deck = Deck::new(
            setup.starting_hand.iter().copied(),
            setup.starting_draw.iter().copied(),
        );
        Self {
            board: Board::empty(),
            current_player: Player::White,
            deck_white: deck.clone(),
            deck_black: deck,
            turn_points: PointsPool::TURN_BASELINE,
            supply: Supply::build(&setup.supply_cards),
            turn_count: 1,
            hegemony_white: 0,
            hegemony_black: 0,
            selected_card: None,
            hand_size: setup.hand_size,
            rng: GameRng::new(seed),
        }
    }

    // === Projections ===

    /// A player's deck.
    #[must_use]
    pub fn deck(&self, player: Player) -> &Deck {
        match player {
            Player::White => &self.deck_white,
            Player::Black => &self.deck_black,
        }
    }

    /// The acting player's deck.
    #[must_use]
    pub fn current_deck(&self) -> &Deck {
        self.deck(self.current_player)
    }

    /// A player's hegemony score.
    #[must_use]
    pub fn hegemony(&self, player: Player) -> u32 {
        match player {
            Player::White => self.hegemony_white,
            Player::Black => self.hegemony_black,
        }
    }

    /// Board text plus the acting player's label, for equality-based
    /// testing and debugging.
    #[must_use]
    pub fn show(&self) -> String {
        format!("{} {}", self.board.show(), self.current_player)
    }

    pub(crate) fn current_deck_mut(&mut self) -> &mut Deck {
        match self.current_player {
            Player::White => &mut self.deck_white,
            Player::Black => &mut self.deck_black,
        }
    }

    pub(crate) fn current_deck_and_rng_mut(&mut self) -> (&mut Deck, &mut GameRng) {
        match self.current_player {
            Player::White => (&mut self.deck_white, &mut self.rng),
            Player::Black => (&mut self.deck_black, &mut self.rng),
        }
    }

    // === Transition primitives ===

    /// Place one of the acting player's pieces at `pos`.
    ///
    /// Restricted to the acting player's home row; placement anywhere else
    /// is a silent no-op. Emptiness of the target is validated by the card
    /// layer, not here.
    #[must_use]
    pub fn add_piece(&self, pos: Position) -> Self {
        if pos.row != self.current_player.home_row() {
            return self.clone();
        }
        let mut next = self.clone();
        next.board = next.board.with(pos, Cell::Piece(self.current_player));
        next
    }

    /// Relocate whatever occupies `from` to `to`, clearing `from`.
    ///
    /// Unconditional; used only after the play layer has validated the
    /// move.
    #[must_use]
    pub fn move_piece(&self, from: Position, to: Position) -> Self {
        let mut next = self.clone();
        next.board = next.board.move_piece(from, to);
        next
    }

    /// End-of-turn board advance.
    ///
    /// Every piece of the acting player moves one row in its direction of
    /// travel. Pieces whose next position lies off the board have crossed
    /// the far edge: they are removed and score one hegemony point each.
    /// The current player is toggled afterwards; the turn counter
    /// increments when the mover was Black.
    #[must_use]
    pub fn progress(&self) -> Self {
        let mut next = self.clone();
        let player = self.current_player;

        // Collect before clearing; clearing is keyed on current occupancy.
        let positions = self.board.positions_of(player);

        let mut board = self.board;
        for &pos in &positions {
            board = board.with(pos, Cell::Empty);
        }
        for &pos in &positions {
            match pos.forward(player) {
                Some(dest) => board = board.with(dest, Cell::Piece(player)),
                None => match player {
                    Player::White => next.hegemony_white += 1,
                    Player::Black => next.hegemony_black += 1,
                },
            }
        }

        next.board = board;
        next.toggle_player_mut();
        next
    }

    /// Subtract one strategy point. No floor check; trusts its caller.
    #[must_use]
    pub fn consume_strategy_point(&self) -> Self {
        let mut next = self.clone();
        next.turn_points.strategy -= 1;
        next
    }

    /// Subtract one tactic point. No floor check; trusts its caller.
    #[must_use]
    pub fn consume_tactic_point(&self) -> Self {
        let mut next = self.clone();
        next.turn_points.tactic -= 1;
        next
    }

    /// Subtract one hoplite point. No floor check; trusts its caller.
    #[must_use]
    pub fn consume_hoplite_point(&self) -> Self {
        let mut next = self.clone();
        next.turn_points.hoplite -= 1;
        next
    }

    /// Reset the turn pool to the per-turn baseline.
    #[must_use]
    pub fn reset_turn_points(&self) -> Self {
        let mut next = self.clone();
        next.turn_points = PointsPool::TURN_BASELINE;
        next
    }

    /// Hand the turn to the other player.
    #[must_use]
    pub fn toggle_player(&self) -> Self {
        let mut next = self.clone();
        next.toggle_player_mut();
        next
    }

    /// Clear the hand-card selection.
    #[must_use]
    pub fn unselect_hand_card(&self) -> Self {
        let mut next = self.clone();
        next.selected_card = None;
        next
    }

    fn toggle_player_mut(&mut self) {
        if self.current_player == Player::Black {
            self.turn_count += 1;
        }
        self.current_player = self.current_player.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::new(&GameSetup::default(), 42)
    }

    #[test]
    fn test_new_game() {
        let game = game();

        assert_eq!(game.current_player, Player::White);
        assert_eq!(game.turn_count, 1);
        assert_eq!(game.turn_points, PointsPool::TURN_BASELINE);
        assert_eq!(game.hegemony_white, 0);
        assert_eq!(game.hegemony_black, 0);
        assert_eq!(game.selected_card, None);
        assert_eq!(game.board, Board::empty());
        assert_eq!(game.deck(Player::White).hand().len(), 5);
        assert_eq!(game.deck(Player::Black).hand().len(), 5);
        assert_eq!(game.supply.len(), 10);
    }

    #[test]
    fn test_add_piece_home_row_only() {
        let game = game();

        let placed = game.add_piece(Position::new(4, 2));
        assert_eq!(
            placed.board.lookup(Position::new(4, 2)),
            Some(Cell::Piece(Player::White))
        );

        // Out of the home row: silent no-op.
        let rejected = game.add_piece(Position::new(2, 2));
        assert_eq!(rejected, game);
    }

    #[test]
    fn test_add_piece_black_home_row() {
        let mut game = game();
        game.current_player = Player::Black;

        let placed = game.add_piece(Position::new(0, 0));
        assert_eq!(
            placed.board.lookup(Position::new(0, 0)),
            Some(Cell::Piece(Player::Black))
        );

        let rejected = game.add_piece(Position::new(4, 0));
        assert_eq!(rejected, game);
    }

    #[test]
    fn test_move_piece_is_unvalidated() {
        let mut game = game();
        game.board = Board::parse("-----/-----/--P--/-----/-----").unwrap();

        let next = game.move_piece(Position::new(2, 2), Position::new(0, 0));
        assert_eq!(next.board.show(), "P----/-----/-----/-----/-----");
    }

    #[test]
    fn test_progress_advances_one_row() {
        let mut game = game();
        game.board = Board::parse("-----/-----/--P--/-----/-p---").unwrap();

        let next = game.progress();
        assert_eq!(next.board.show(), "-----/--P--/-----/-----/-p---");
        assert_eq!(next.current_player, Player::Black);
        assert_eq!(next.hegemony_white, 0);
    }

    #[test]
    fn test_progress_scores_on_exit() {
        let mut game = game();
        game.board = Board::parse("--P--/-----/-----/-----/-----").unwrap();

        let next = game.progress();
        assert_eq!(next.board, Board::empty());
        assert_eq!(next.hegemony_white, 1);
        assert_eq!(next.hegemony_black, 0);
    }

    #[test]
    fn test_progress_black_scores_across_far_edge() {
        let mut game = game();
        game.current_player = Player::Black;
        game.board = Board::parse("-----/-----/-----/-----/p-p--").unwrap();

        let next = game.progress();
        assert_eq!(next.board, Board::empty());
        assert_eq!(next.hegemony_black, 2);
    }

    #[test]
    fn test_progress_only_moves_acting_player() {
        let mut game = game();
        game.board = Board::parse("-----/--p--/-----/--P--/-----").unwrap();

        let next = game.progress();
        assert_eq!(next.board.show(), "-----/--p--/--P--/-----/-----");
    }

    #[test]
    fn test_turn_count_increments_after_black() {
        let game = game();
        assert_eq!(game.turn_count, 1);

        let after_white = game.toggle_player();
        assert_eq!(after_white.turn_count, 1);
        assert_eq!(after_white.current_player, Player::Black);

        let after_black = after_white.toggle_player();
        assert_eq!(after_black.turn_count, 2);
        assert_eq!(after_black.current_player, Player::White);
    }

    #[test]
    fn test_point_consumers_are_unconditional() {
        let game = game();

        let spent = game
            .consume_strategy_point()
            .consume_tactic_point()
            .consume_hoplite_point();
        assert_eq!(spent.turn_points.strategy, 0);
        assert_eq!(spent.turn_points.tactic, 0);
        assert_eq!(spent.turn_points.hoplite, -1);

        let reset = spent.reset_turn_points();
        assert_eq!(reset.turn_points, PointsPool::TURN_BASELINE);
    }

    #[test]
    fn test_unselect_hand_card() {
        let mut game = game();
        game.selected_card = Some(2);

        let next = game.unselect_hand_card();
        assert_eq!(next.selected_card, None);
    }

    #[test]
    fn test_show() {
        let mut game = game();
        game.board = Board::parse("-p---/-----/-----/-----/---P-").unwrap();
        assert_eq!(game.show(), "-p---/-----/-----/-----/---P- White");
    }
}
