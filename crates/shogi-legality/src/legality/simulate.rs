//! 着手のシミュレーションによる合法性判定
//!
//! 局面をコピーして指し手を適用し、自玉の安全と打ち歩詰めを確認する。
//! コピーは判定が終われば捨てる。

use log::trace;

use super::movegen::for_each_legal_move;
use super::pseudo::is_pseudo_legal;
use crate::check::{find_king_square, own_king_in_check};
use crate::error::IllegalMove;
use crate::position::Position;
use crate::types::{Color, Move, PieceType};

/// 指し手を適用した局面のコピー
///
/// 手駒のない駒打ちや移動元が空の手は適用できず、その理由を返す。
pub fn apply_move(pos: &Position, color: Color, mv: &Move) -> Result<Position, IllegalMove> {
    let mut next = *pos;
    if next.apply_move(color, mv) {
        Ok(next)
    } else {
        Err(match *mv {
            Move::Drop { piece, .. } => IllegalMove::NotInHand(piece.piece_type()),
            Move::Normal { .. } => IllegalMove::NoPieceToMove,
        })
    }
}

/// 歩を打って直接王手をかける手か（相手玉のちょうど1マス前に打つ歩）
pub fn gives_direct_pawn_check(pos: &Position, color: Color, mv: &Move) -> bool {
    let Move::Drop { to, piece } = *mv else {
        return false;
    };
    if piece.piece_type() != PieceType::Pawn {
        return false;
    }
    let Some(king_sq) = find_king_square(pos, color.opponent()) else {
        return false;
    };
    to.offset(0, color.forward()) == Some(king_sq)
}

/// 合法手かどうか
///
/// 1. 疑似合法でなければ非合法
/// 2. 着手後に自玉が王手されていれば非合法
/// 3. `check_pawn_drop_mate` が真で、歩打ちの直接王手に相手の応手がなければ打ち歩詰め
///
/// 3 で呼ぶ応手の探索は王手を解消しない手を 2 で落とすため、歩打ちへの応手として
/// さらに歩打ちの詰み判定に入ることはない。
pub fn is_legal_after_simulation(
    pos: &Position,
    color: Color,
    mv: &Move,
    check_pawn_drop_mate: bool,
) -> Result<(), IllegalMove> {
    if let Err(reason) = is_pseudo_legal(pos, color, mv) {
        trace!("{mv:?} rejected: {reason}");
        return Err(reason);
    }

    let next = apply_move(pos, color, mv)?;
    if own_king_in_check(&next, color) {
        trace!("{mv:?} rejected: leaves {color:?} king in check");
        return Err(IllegalMove::LeavesKingInCheck);
    }

    if check_pawn_drop_mate
        && gives_direct_pawn_check(pos, color, mv)
        && !has_any_legal_move(color.opponent(), &next, true)
    {
        trace!("{mv:?} rejected: pawn drop mate");
        return Err(IllegalMove::PawnDropMate);
    }

    Ok(())
}

/// 手番に合法手が1つでもあるか（見つかった時点で打ち切る）
pub fn has_any_legal_move(color: Color, pos: &Position, check_pawn_drop_mate: bool) -> bool {
    for_each_legal_move(pos, color, check_pawn_drop_mate, |_| std::ops::ControlFlow::Break(()))
        .is_break()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::{PieceStand, load_position};
    use crate::test_util::{board_from_rows, sq};
    use crate::types::Piece;

    /// 後手玉の頭に歩を打つと逃げ道がなくなる形（後手は歩だけ動ける）
    fn pawn_drop_mate_position() -> Position {
        let board = board_from_rows([
            "........k",
            "......G..",
            "p......S.",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "K........",
        ]);
        let mut stand = PieceStand::new();
        stand.insert(Piece::B_PAWN, 1);
        load_position(&board, &stand)
    }

    #[test]
    fn test_gives_direct_pawn_check() {
        let pos = pawn_drop_mate_position();
        let drop = Move::Drop {
            to: sq(8, 1),
            piece: Piece::B_PAWN,
        };
        assert!(gives_direct_pawn_check(&pos, Color::Black, &drop));

        let aside = Move::Drop {
            to: sq(7, 1),
            piece: Piece::B_PAWN,
        };
        assert!(!gives_direct_pawn_check(&pos, Color::Black, &aside));
    }

    #[test]
    fn test_pawn_drop_mate_is_illegal() {
        let pos = pawn_drop_mate_position();
        let drop = Move::Drop {
            to: sq(8, 1),
            piece: Piece::B_PAWN,
        };
        assert_eq!(
            is_legal_after_simulation(&pos, Color::Black, &drop, true),
            Err(IllegalMove::PawnDropMate)
        );
        assert_eq!(is_legal_after_simulation(&pos, Color::Black, &drop, false), Ok(()));
    }

    #[test]
    fn test_pawn_drop_check_with_escape_is_legal() {
        let board = board_from_rows([
            "........k",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "K........",
        ]);
        let mut stand = PieceStand::new();
        stand.insert(Piece::B_PAWN, 1);
        let pos = load_position(&board, &stand);
        let drop = Move::Drop {
            to: sq(8, 1),
            piece: Piece::B_PAWN,
        };
        // 玉で歩を取れる
        assert_eq!(is_legal_after_simulation(&pos, Color::Black, &drop, true), Ok(()));
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let board = board_from_rows([
            "....r....",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            ".........",
            "....G....",
            "....K....",
        ]);
        let pos = load_position(&board, &PieceStand::new());
        let sideways = Move::Normal {
            from: sq(4, 7),
            to: sq(3, 7),
            piece: Piece::B_GOLD,
            promote: false,
        };
        assert_eq!(
            is_legal_after_simulation(&pos, Color::Black, &sideways, true),
            Err(IllegalMove::LeavesKingInCheck)
        );
        let forward = Move::Normal {
            from: sq(4, 7),
            to: sq(4, 6),
            piece: Piece::B_GOLD,
            promote: false,
        };
        assert_eq!(is_legal_after_simulation(&pos, Color::Black, &forward, true), Ok(()));
    }

    #[test]
    fn test_has_any_legal_move() {
        let pos = pawn_drop_mate_position();
        assert!(has_any_legal_move(Color::Black, &pos, true));

        let drop = Move::Drop {
            to: sq(8, 1),
            piece: Piece::B_PAWN,
        };
        let Ok(mated) = apply_move(&pos, Color::Black, &drop) else {
            panic!("drop should apply");
        };
        assert!(!has_any_legal_move(Color::White, &mated, true));
        assert!(has_any_legal_move(Color::White, &pos, true));
    }
}
