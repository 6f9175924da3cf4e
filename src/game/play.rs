//! The card-effect state machine.
//!
//! Every resolution function is total: it either produces a new `Game` or
//! one of the named `PlayError` values. Nothing here panics on reachable
//! input, and the card's play cost is deducted only on successful
//! resolution (validation upstream passes the game through unchanged).
//!
//! Two disjoint targeting families:
//!
//! - **Piece cards** (deployment, movement, combat) resolve against a
//!   board position via [`play_piece_card`].
//! - **Mat cards** (the economy strategy cards) resolve against the
//!   abstract play mat via [`play_mat_card`].
//!
//! Feeding a card through the wrong family fails with
//! `InvalidPieceSelection` / `InvalidPlayMatSelection`.

use thiserror::Error;

use crate::board::Cell;
use crate::cards::{Card, CardKind, PlayCost};
use crate::core::{Player, PointsPool, Position};

use super::state::Game;

/// The closed taxonomy of card-resolution failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("not enough strategy points")]
    NotEnoughStrategyPoints,
    #[error("not enough tactic points")]
    NotEnoughTacticPoints,
    #[error("selected cell does not hold one of your pieces")]
    InvalidPieceSelection,
    #[error("card does not resolve against the play mat")]
    InvalidPlayMatSelection,
    #[error("maneuver would leave the board")]
    InvalidManeuverOffBoard,
    #[error("maneuver onto your own piece")]
    InvalidManeuverOntoOwnPiece,
    #[error("maneuver onto an enemy piece")]
    InvalidManeuverOntoOtherPiece,
    #[error("assault must land on an enemy piece")]
    InvalidAssaultNotOntoOtherPiece,
    #[error("charge onto your own piece")]
    InvalidChargeOntoOwnPiece,
    #[error("flank left would leave the board")]
    InvalidFlankLeftOffBoard,
    #[error("flank left onto your own piece")]
    InvalidFlankLeftOntoOwnPiece,
    #[error("flank right would leave the board")]
    InvalidFlankRightOffBoard,
    #[error("flank right onto your own piece")]
    InvalidFlankRightOntoOwnPiece,
    #[error("placement must target an empty home-row cell")]
    InvalidPlacement,
}

/// One-step movement directions, player-relative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Forward,
    Left,
    Right,
}

impl Step {
    fn target(self, player: Player, from: Position) -> Option<Position> {
        match self {
            Step::Forward => from.forward(player),
            Step::Left => from.left(player),
            Step::Right => from.right(player),
        }
    }
}

/// Check that the acting player can pay the card's play cost.
///
/// Passes the game through unchanged on success; the cost itself is
/// deducted on successful resolution, not here.
pub fn validate_card_cost(card: Card, game: &Game) -> Result<(), PlayError> {
    match card.play_cost() {
        PlayCost::Strategy(n) if game.turn_points.strategy < n => {
            Err(PlayError::NotEnoughStrategyPoints)
        }
        PlayCost::Tactic(n) if game.turn_points.tactic < n => {
            Err(PlayError::NotEnoughTacticPoints)
        }
        _ => Ok(()),
    }
}

/// Resolve a piece-targeting card against a board position.
pub fn play_piece_card(card: Card, target: Position, game: &Game) -> Result<Game, PlayError> {
    match card {
        Card::DeployHoplite => deploy(target, game),
        Card::ManeuverForward => maneuver(target, Step::Forward, game),
        Card::ManeuverLeft => maneuver(target, Step::Left, game),
        Card::ManeuverRight => maneuver(target, Step::Right, game),
        Card::AssaultForward => assault(target, Step::Forward, game),
        Card::AssaultLeft => assault(target, Step::Left, game),
        Card::AssaultRight => assault(target, Step::Right, game),
        Card::Charge => charge(target, game),
        Card::FlankLeft => flank(
            target,
            Step::Left,
            PlayError::InvalidFlankLeftOffBoard,
            PlayError::InvalidFlankLeftOntoOwnPiece,
            game,
        ),
        Card::FlankRight => flank(
            target,
            Step::Right,
            PlayError::InvalidFlankRightOffBoard,
            PlayError::InvalidFlankRightOntoOwnPiece,
            game,
        ),
        // Strategy cards need the play mat, not a board cell.
        _ => Err(PlayError::InvalidPieceSelection),
    }
}

/// Resolve a mat-targeting card.
///
/// Strategy cards grant their fixed play value to the turn pool; there is
/// no board interaction and no failure path beyond the cost validation
/// done upstream.
pub fn play_mat_card(card: Card, game: &Game) -> Result<Game, PlayError> {
    match card.kind() {
        CardKind::Tactic => Err(PlayError::InvalidPlayMatSelection),
        CardKind::Strategy => {
            let mut next = game.clone();
            next.turn_points = next
                .turn_points
                .sub(cost_pool(card))
                .add(card.play_value());
            Ok(next)
        }
    }
}

fn cost_pool(card: Card) -> PointsPool {
    let mut pool = PointsPool::ZERO;
    match card.play_cost() {
        PlayCost::Strategy(n) => pool.strategy = n,
        PlayCost::Tactic(n) => pool.tactic = n,
    }
    pool
}

/// The acting player's piece at `src`, or `InvalidPieceSelection`.
fn require_own_piece(src: Position, game: &Game) -> Result<(), PlayError> {
    match game.board.lookup(src) {
        Some(cell) if cell.holds(game.current_player) => Ok(()),
        _ => Err(PlayError::InvalidPieceSelection),
    }
}

fn deploy(target: Position, game: &Game) -> Result<Game, PlayError> {
    let player = game.current_player;
    if target.row != player.home_row() || game.board.lookup(target) != Some(Cell::Empty) {
        return Err(PlayError::InvalidPlacement);
    }
    Ok(game.add_piece(target).consume_strategy_point())
}

fn maneuver(src: Position, step: Step, game: &Game) -> Result<Game, PlayError> {
    require_own_piece(src, game)?;
    let player = game.current_player;
    let dest = step
        .target(player, src)
        .ok_or(PlayError::InvalidManeuverOffBoard)?;
    match game.board.lookup(dest) {
        Some(Cell::Piece(p)) if p == player => Err(PlayError::InvalidManeuverOntoOwnPiece),
        Some(Cell::Piece(_)) => Err(PlayError::InvalidManeuverOntoOtherPiece),
        _ => Ok(game.move_piece(src, dest).consume_tactic_point()),
    }
}

fn assault(src: Position, step: Step, game: &Game) -> Result<Game, PlayError> {
    require_own_piece(src, game)?;
    let player = game.current_player;
    // Off-board, empty, and own-piece destinations fail uniformly.
    let dest = step
        .target(player, src)
        .ok_or(PlayError::InvalidAssaultNotOntoOtherPiece)?;
    match game.board.lookup(dest) {
        Some(Cell::Piece(p)) if p == player.opponent() => {
            Ok(game.move_piece(src, dest).consume_tactic_point())
        }
        _ => Err(PlayError::InvalidAssaultNotOntoOtherPiece),
    }
}

fn charge(src: Position, game: &Game) -> Result<Game, PlayError> {
    require_own_piece(src, game)?;
    let player = game.current_player;
    match src.forward(player) {
        // Charging off the far edge removes the piece; scoring stays an
        // end-of-turn concern (see Game::progress).
        None => {
            let mut next = game.clone();
            next.board = next.board.with(src, Cell::Empty);
            Ok(next.consume_tactic_point())
        }
        Some(dest) => match game.board.lookup(dest) {
            Some(Cell::Piece(p)) if p == player => Err(PlayError::InvalidChargeOntoOwnPiece),
            _ => Ok(game.move_piece(src, dest).consume_tactic_point()),
        },
    }
}

fn flank(
    src: Position,
    step: Step,
    off_board: PlayError,
    onto_own: PlayError,
    game: &Game,
) -> Result<Game, PlayError> {
    require_own_piece(src, game)?;
    let player = game.current_player;
    let dest = step.target(player, src).ok_or(off_board)?;
    match game.board.lookup(dest) {
        Some(Cell::Piece(p)) if p == player => Err(onto_own),
        _ => Ok(game.move_piece(src, dest).consume_tactic_point()),
    }
}
