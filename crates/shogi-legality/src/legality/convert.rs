//! 呼び出し側の指し手記述（ShogiMove）と内部表現（Move）の変換
//!
//! ShogiMove に書かれた駒・取る駒・駒台の擬似座標は信用せず、局面と照合する。
//! 一致しなければ非合法として扱う。

use super::simulate::{apply_move, is_legal_after_simulation};
use crate::error::IllegalMove;
use crate::position::Position;
use crate::types::{Color, Move, ShogiMove, hand_file, hand_rank};

/// 指し手記述が局面と矛盾しないか
///
/// - 移動先は盤内
/// - 取る駒を申告しているなら移動先の駒と一致
/// - 盤上の手: 移動元に手番の駒があり、申告した駒と一致
/// - 駒打ち: 手番の駒台の擬似座標で、段が打つ駒と対応し、その駒を持っている
pub fn check_metadata(pos: &Position, color: Color, mv: &ShogiMove) -> Result<(), IllegalMove> {
    let to = mv.to.square().ok_or(IllegalMove::OffBoard)?;

    if let Some(declared) = mv.captured_piece
        && pos.piece_on(to) != Some(declared)
    {
        return Err(IllegalMove::CaptureMismatch { declared });
    }

    if let Some(from) = mv.from.square() {
        let actual = pos
            .piece_on(from)
            .filter(|p| p.color() == color)
            .ok_or(IllegalMove::NoPieceToMove)?;
        if actual != mv.moving_piece {
            return Err(IllegalMove::PieceMismatch {
                declared: mv.moving_piece,
            });
        }
        return Ok(());
    }

    if mv.from.x != hand_file(color) {
        return Err(IllegalMove::InvalidSource);
    }
    let piece = mv.moving_piece;
    if piece.color() != color {
        return Err(IllegalMove::PieceMismatch { declared: piece });
    }
    let pt = piece.piece_type();
    let rank = hand_rank(color, pt).ok_or(IllegalMove::NotDroppable(pt))?;
    if rank != mv.from.y {
        return Err(IllegalMove::HandSlotMismatch { piece });
    }
    if !pos.hand(color).has(pt) {
        return Err(IllegalMove::NotInHand(pt));
    }
    Ok(())
}

/// 内部表現に変換する
///
/// 盤上の手の駒は局面から取り直す。`promote` は指し手記述の成り申告の代わりに使う。
pub fn to_internal_move(
    pos: &Position,
    mv: &ShogiMove,
    promote: bool,
) -> Result<Move, IllegalMove> {
    let to = mv.to.square().ok_or(IllegalMove::OffBoard)?;

    match mv.from.square() {
        Some(from) => {
            let piece = pos.piece_on(from).ok_or(IllegalMove::NoPieceToMove)?;
            Ok(Move::Normal {
                from,
                to,
                piece,
                promote,
            })
        }
        None if promote => Err(IllegalMove::DropWithPromotion),
        None => Ok(Move::Drop {
            to,
            piece: mv.moving_piece,
        }),
    }
}

/// 呼び出し側の指し手記述に戻す（取る駒は局面から補う）
pub fn to_shogi_move(pos: &Position, mv: &Move) -> ShogiMove {
    match *mv {
        Move::Normal {
            from,
            to,
            piece,
            promote,
        } => ShogiMove::board(from, to, piece, pos.piece_on(to), promote),
        Move::Drop { to, piece } => ShogiMove::drop(piece, to),
    }
}

/// 指し手記述を照合し、指定の成り・不成で合法なら内部表現を返す
pub fn resolve_move(
    pos: &Position,
    color: Color,
    mv: &ShogiMove,
    promote: bool,
    check_pawn_drop_mate: bool,
) -> Result<Move, IllegalMove> {
    check_metadata(pos, color, mv)?;
    let internal = to_internal_move(pos, mv, promote)?;
    is_legal_after_simulation(pos, color, &internal, check_pawn_drop_mate)?;
    Ok(internal)
}

impl Position {
    /// 合法手を指した後の局面（非合法なら None）
    ///
    /// 成り・不成は `mv.promote` に従う。打ち歩詰めも判定する。
    pub fn after_move(&self, color: Color, mv: &ShogiMove) -> Option<Position> {
        let internal = resolve_move(self, color, mv, mv.promote, true).ok()?;
        apply_move(self, color, &internal).ok()
    }
}
