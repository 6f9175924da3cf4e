//! Movement and combat legality matrices.
//!
//! All scenarios share one fixture board, White to act:
//!
//! ```text
//! ---P-     row 0: White piece one step from the far edge
//! -----
//! -----
//! -Pp--     row 3: White and Black adjacent
//! PPP--     row 4: White's home row, three pieces
//! ```

use hegemony::game::play::{play_piece_card, play_mat_card};
use hegemony::{Board, Card, Cell, Game, GameSetup, PlayError, Player, PointsPool, Position};

const FIXTURE: &str = "---P-/-----/-----/-Pp--/PPP--";

fn game() -> Game {
    let mut game = Game::new(&GameSetup::default(), 42);
    game.board = Board::parse(FIXTURE).unwrap();
    game.turn_points = PointsPool {
        strategy: 1,
        tactic: 1,
        ..PointsPool::ZERO
    };
    game
}

#[test]
fn maneuver_forward_onto_empty_succeeds() {
    let next = play_piece_card(Card::ManeuverForward, Position::new(3, 1), &game()).unwrap();
    assert_eq!(next.board.show(), "---P-/-----/-P---/--p--/PPP--");
    assert_eq!(next.turn_points.tactic, 0);
}

#[test]
fn maneuver_from_empty_source_fails() {
    assert_eq!(
        play_piece_card(Card::ManeuverForward, Position::new(2, 2), &game()),
        Err(PlayError::InvalidPieceSelection)
    );
}

#[test]
fn maneuver_from_opponent_piece_fails() {
    assert_eq!(
        play_piece_card(Card::ManeuverForward, Position::new(3, 2), &game()),
        Err(PlayError::InvalidPieceSelection)
    );
}

#[test]
fn maneuver_onto_own_piece_fails() {
    assert_eq!(
        play_piece_card(Card::ManeuverForward, Position::new(4, 1), &game()),
        Err(PlayError::InvalidManeuverOntoOwnPiece)
    );
}

#[test]
fn maneuver_onto_opponent_piece_fails() {
    // Maneuver never captures.
    assert_eq!(
        play_piece_card(Card::ManeuverForward, Position::new(4, 2), &game()),
        Err(PlayError::InvalidManeuverOntoOtherPiece)
    );
}

#[test]
fn maneuver_off_board_fails() {
    assert_eq!(
        play_piece_card(Card::ManeuverForward, Position::new(0, 3), &game()),
        Err(PlayError::InvalidManeuverOffBoard)
    );
}

#[test]
fn maneuver_lateral_steps() {
    // White's left is column minus one.
    let next = play_piece_card(Card::ManeuverLeft, Position::new(3, 1), &game()).unwrap();
    assert_eq!(next.board.show(), "---P-/-----/-----/P-p--/PPP--");

    // White's right is column plus one, blocked here by the Black piece.
    assert_eq!(
        play_piece_card(Card::ManeuverRight, Position::new(3, 1), &game()),
        Err(PlayError::InvalidManeuverOntoOtherPiece)
    );
}

#[test]
fn assault_captures_opponent_piece() {
    let next = play_piece_card(Card::AssaultForward, Position::new(4, 2), &game()).unwrap();
    assert_eq!(next.board.show(), "---P-/-----/-----/-PP--/PP---");
    assert_eq!(next.turn_points.tactic, 0);
}

#[test]
fn assault_onto_empty_fails() {
    assert_eq!(
        play_piece_card(Card::AssaultForward, Position::new(3, 1), &game()),
        Err(PlayError::InvalidAssaultNotOntoOtherPiece)
    );
}

#[test]
fn assault_onto_own_piece_fails() {
    assert_eq!(
        play_piece_card(Card::AssaultForward, Position::new(4, 1), &game()),
        Err(PlayError::InvalidAssaultNotOntoOtherPiece)
    );
}

#[test]
fn assault_off_board_fails_with_same_error() {
    assert_eq!(
        play_piece_card(Card::AssaultForward, Position::new(0, 3), &game()),
        Err(PlayError::InvalidAssaultNotOntoOtherPiece)
    );
}

#[test]
fn assault_from_empty_or_opponent_source_fails() {
    assert_eq!(
        play_piece_card(Card::AssaultForward, Position::new(1, 1), &game()),
        Err(PlayError::InvalidPieceSelection)
    );
    assert_eq!(
        play_piece_card(Card::AssaultForward, Position::new(3, 2), &game()),
        Err(PlayError::InvalidPieceSelection)
    );
}

#[test]
fn charge_onto_empty_succeeds() {
    let next = play_piece_card(Card::Charge, Position::new(3, 1), &game()).unwrap();
    assert_eq!(next.board.show(), "---P-/-----/-P---/--p--/PPP--");
}

#[test]
fn charge_captures_opponent_piece() {
    let next = play_piece_card(Card::Charge, Position::new(4, 2), &game()).unwrap();
    assert_eq!(next.board.show(), "---P-/-----/-----/-PP--/PP---");
}

#[test]
fn charge_off_board_removes_piece_without_scoring() {
    let next = play_piece_card(Card::Charge, Position::new(0, 3), &game()).unwrap();
    assert_eq!(next.board.show(), "-----/-----/-----/-Pp--/PPP--");
    assert_eq!(next.hegemony_white, 0);
    assert_eq!(next.turn_points.tactic, 0);
}

#[test]
fn charge_onto_own_piece_fails() {
    assert_eq!(
        play_piece_card(Card::Charge, Position::new(4, 1), &game()),
        Err(PlayError::InvalidChargeOntoOwnPiece)
    );
}

#[test]
fn flank_left_onto_empty_succeeds() {
    let next = play_piece_card(Card::FlankLeft, Position::new(3, 1), &game()).unwrap();
    assert_eq!(next.board.show(), "---P-/-----/-----/P-p--/PPP--");
}

#[test]
fn flank_right_captures_opponent_piece() {
    let next = play_piece_card(Card::FlankRight, Position::new(3, 1), &game()).unwrap();
    assert_eq!(next.board.show(), "---P-/-----/-----/--P--/PPP--");
    assert_eq!(next.board.lookup(Position::new(3, 2)), Some(Cell::Piece(Player::White)));
}

#[test]
fn flank_left_off_board_fails() {
    assert_eq!(
        play_piece_card(Card::FlankLeft, Position::new(4, 0), &game()),
        Err(PlayError::InvalidFlankLeftOffBoard)
    );
}

#[test]
fn flank_right_off_board_fails() {
    // White piece at column 4.
    let mut game = game();
    game.board = Board::parse("----P/-----/-----/-----/-----").unwrap();
    assert_eq!(
        play_piece_card(Card::FlankRight, Position::new(0, 4), &game),
        Err(PlayError::InvalidFlankRightOffBoard)
    );
}

#[test]
fn flank_onto_own_piece_fails() {
    assert_eq!(
        play_piece_card(Card::FlankRight, Position::new(4, 1), &game()),
        Err(PlayError::InvalidFlankRightOntoOwnPiece)
    );
    assert_eq!(
        play_piece_card(Card::FlankLeft, Position::new(4, 1), &game()),
        Err(PlayError::InvalidFlankLeftOntoOwnPiece)
    );
}

#[test]
fn black_moves_along_the_opposite_direction() {
    let mut game = game();
    game.current_player = Player::Black;

    // Black forward is row plus one: (3,2) -> (4,2) holds a White piece.
    let next = play_piece_card(Card::AssaultForward, Position::new(3, 2), &game).unwrap();
    assert_eq!(next.board.show(), "---P-/-----/-----/-P---/PPp--");
}

#[test]
fn strategy_card_cannot_target_the_board() {
    assert_eq!(
        play_piece_card(Card::PoliticalReforms, Position::new(3, 1), &game()),
        Err(PlayError::InvalidPieceSelection)
    );
}

#[test]
fn movement_card_cannot_target_the_mat() {
    assert_eq!(
        play_mat_card(Card::ManeuverForward, &game()),
        Err(PlayError::InvalidPlayMatSelection)
    );
}
