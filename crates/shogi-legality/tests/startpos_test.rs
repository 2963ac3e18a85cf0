//! 初期局面の合法手数

mod common;

use common::{STARTPOS, board, init_logger, sq};
use shogi_legality::{Color, MoveValidator, Piece, PieceStand, ShogiMove};

#[test]
fn test_startpos_black_has_30_moves() {
    init_logger();
    let validator = MoveValidator::new();
    let board = board(STARTPOS);
    assert_eq!(validator.generate_legal_moves(Color::Black, &board, &PieceStand::new()), 30);
}

#[test]
fn test_startpos_white_has_30_moves_after_neutral_ply() {
    init_logger();
    let validator = MoveValidator::new();
    let board = board(STARTPOS);

    // 先手の端歩を突く
    let mv = ShogiMove::board(sq(0, 6), sq(0, 5), Piece::B_PAWN, None, false);
    let status = validator.is_legal_move(Color::Black, &board, &PieceStand::new(), &mv);
    assert!(status.non_promoting_move_exists);

    let pos = shogi_legality::load_position(&board, &PieceStand::new());
    let next = pos.after_move(Color::Black, &mv).unwrap();
    assert_eq!(
        validator.generate_legal_moves(Color::White, &next.cells(), &next.stand()),
        30
    );
}

#[test]
fn test_startpos_no_checks() {
    init_logger();
    let validator = MoveValidator::new();
    let board = board(STARTPOS);
    assert_eq!(validator.check_if_king_in_check(Color::Black, &board), 0);
    assert_eq!(validator.check_if_king_in_check(Color::White, &board), 0);
}

#[test]
fn test_startpos_listing_is_stable() {
    init_logger();
    let validator = MoveValidator::new();
    let board = board(STARTPOS);
    let first = validator.legal_moves(Color::Black, &board, &PieceStand::new());
    let second = validator.legal_moves(Color::Black, &board, &PieceStand::new());
    assert_eq!(first.len(), 30);
    assert_eq!(first, second);
    assert!(first.iter().all(|m| !m.promote && m.captured_piece.is_none()));
}
