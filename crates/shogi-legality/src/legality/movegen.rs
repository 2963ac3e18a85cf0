//! 候補手の列挙
//!
//! 列挙順は固定:
//! 1. 盤上の手: 移動元の升順、移動先は利きの順、同じ移動では不成 → 成
//! 2. 駒打ち: 歩 香 桂 銀 金 角 飛 の順、各駒種ごとに升順
//!
//! 件数・一覧・合法手の有無はすべてここを通るので、数えた手と一覧の手は一致する。

use std::ops::ControlFlow;

use super::pseudo::{can_promote_on_move, is_mandatory_promotion};
use super::simulate::is_legal_after_simulation;
use crate::attacks::collect_destinations;
use crate::position::Position;
use crate::types::{Color, Move, Piece, PieceType, Square};

/// 疑似合法の候補手を順に渡す（自駒のある升・行き所のない升は先に除く）
///
/// `f` が `Break` を返した時点で列挙を打ち切る。
pub fn for_each_candidate<B>(
    pos: &Position,
    color: Color,
    mut f: impl FnMut(&Move) -> ControlFlow<B>,
) -> ControlFlow<B> {
    for (from, piece) in pos.pieces_of(color) {
        for to in collect_destinations(pos, from, piece) {
            if pos.piece_on(to).is_some_and(|p| p.color() == color) {
                continue;
            }
            if !is_mandatory_promotion(color, piece, to) {
                f(&Move::Normal {
                    from,
                    to,
                    piece,
                    promote: false,
                })?;
            }
            if can_promote_on_move(color, piece, from, to) {
                f(&Move::Normal {
                    from,
                    to,
                    piece,
                    promote: true,
                })?;
            }
        }
    }

    let hand = pos.hand(color);
    for pt in PieceType::HAND_PIECES {
        if !hand.has(pt) {
            continue;
        }
        let piece = Piece::new(color, pt);
        for to in Square::all().filter(|&sq| pos.is_empty(sq)) {
            f(&Move::Drop { to, piece })?;
        }
    }

    ControlFlow::Continue(())
}

/// 合法手だけを順に渡す
pub fn for_each_legal_move<B>(
    pos: &Position,
    color: Color,
    check_pawn_drop_mate: bool,
    mut f: impl FnMut(&Move) -> ControlFlow<B>,
) -> ControlFlow<B> {
    for_each_candidate(pos, color, |mv| {
        if is_legal_after_simulation(pos, color, mv, check_pawn_drop_mate).is_ok() {
            f(mv)
        } else {
            ControlFlow::Continue(())
        }
    })
}

/// 合法手の数
pub fn count_legal_moves(pos: &Position, color: Color, check_pawn_drop_mate: bool) -> usize {
    let mut count = 0;
    let _ = for_each_legal_move(pos, color, check_pawn_drop_mate, |_| {
        count += 1;
        ControlFlow::<()>::Continue(())
    });
    count
}

/// 合法手の一覧
pub fn collect_legal_moves(pos: &Position, color: Color, check_pawn_drop_mate: bool) -> Vec<Move> {
    let mut moves = Vec::new();
    let _ = for_each_legal_move(pos, color, check_pawn_drop_mate, |mv| {
        moves.push(*mv);
        ControlFlow::<()>::Continue(())
    });
    moves
}
