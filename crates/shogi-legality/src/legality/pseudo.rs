//! 疑似合法手の判定
//!
//! 駒の利き・升の占有・駒打ちの制限・成りの可否だけを見る。
//! 着手後に自玉が取られるかどうかは `simulate` が判定する。

use crate::attacks::attacks_square;
use crate::error::IllegalMove;
use crate::position::Position;
use crate::types::{Color, Move, Piece, PieceType, Square};

/// この移動で成れるか（成れる駒で、移動元か移動先が敵陣）
#[inline]
pub fn can_promote_on_move(color: Color, piece: Piece, from: Square, to: Square) -> bool {
    piece.piece_type().can_promote()
        && (from.rank().can_promote(color) || to.rank().can_promote(color))
}

/// 行き所のない升か（歩・香は最奥段、桂は奥2段）
///
/// 不成の禁止と駒打ちの禁止の両方に使う。
#[inline]
pub fn is_dead_square(color: Color, pt: PieceType, sq: Square) -> bool {
    let rel = sq.rank().relative(color).index();
    match pt {
        PieceType::Pawn | PieceType::Lance => rel == 0,
        PieceType::Knight => rel <= 1,
        _ => false,
    }
}

/// 不成が許されない移動か
#[inline]
pub fn is_mandatory_promotion(color: Color, piece: Piece, to: Square) -> bool {
    is_dead_square(color, piece.piece_type(), to)
}

/// 疑似合法かどうか
pub fn is_pseudo_legal(pos: &Position, color: Color, mv: &Move) -> Result<(), IllegalMove> {
    let to = mv.to();
    if pos.piece_on(to).is_some_and(|p| p.color() == color) {
        return Err(IllegalMove::OwnPieceOnDestination);
    }

    match *mv {
        Move::Drop { piece, .. } => check_drop(pos, color, piece, to),
        Move::Normal {
            from,
            piece,
            promote,
            ..
        } => check_board_move(pos, color, from, to, piece, promote),
    }
}

fn check_drop(pos: &Position, color: Color, piece: Piece, to: Square) -> Result<(), IllegalMove> {
    let pt = piece.piece_type();
    if piece.color() != color {
        return Err(IllegalMove::PieceMismatch { declared: piece });
    }
    if pt.hand_index().is_none() {
        return Err(IllegalMove::NotDroppable(pt));
    }
    if !pos.hand(color).has(pt) {
        return Err(IllegalMove::NotInHand(pt));
    }
    if !pos.is_empty(to) {
        return Err(IllegalMove::DropOnOccupied);
    }
    if pt == PieceType::Pawn && pos.has_pawn_on_file(color, to.file()) {
        return Err(IllegalMove::DoublePawn(to.file()));
    }
    if is_dead_square(color, pt, to) {
        return Err(IllegalMove::DeadDrop(pt, to));
    }
    Ok(())
}

fn check_board_move(
    pos: &Position,
    color: Color,
    from: Square,
    to: Square,
    piece: Piece,
    promote: bool,
) -> Result<(), IllegalMove> {
    let Some(actual) = pos.piece_on(from) else {
        return Err(IllegalMove::NoPieceToMove);
    };
    if actual.color() != color {
        return Err(IllegalMove::NoPieceToMove);
    }
    if actual != piece {
        return Err(IllegalMove::PieceMismatch { declared: piece });
    }
    if !attacks_square(pos, from, to, actual) {
        return Err(IllegalMove::Unreachable(actual.piece_type()));
    }

    if promote {
        if !can_promote_on_move(color, actual, from, to) {
            return Err(IllegalMove::PromotionUnavailable);
        }
    } else if is_mandatory_promotion(color, actual, to) {
        return Err(IllegalMove::PromotionRequired);
    }
    Ok(())
}
