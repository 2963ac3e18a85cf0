//! 王手の検出

use crate::attacks::attacks_square;
use crate::position::Position;
use crate::types::{Color, Piece, PieceType, Square};

/// 手番の玉の升（盤上にない場合は None）
pub fn find_king_square(pos: &Position, color: Color) -> Option<Square> {
    let king = Piece::new(color, PieceType::King);
    Square::all().find(|&sq| pos.piece_on(sq) == Some(king))
}

/// 手番の玉に利いている相手の駒の数
///
/// 玉がなければ 0。
pub fn count_checks(pos: &Position, color: Color) -> usize {
    let Some(king_sq) = find_king_square(pos, color) else {
        return 0;
    };
    pos.pieces_of(color.opponent())
        .filter(|&(sq, piece)| attacks_square(pos, sq, king_sq, piece))
        .count()
}

/// 手番の玉が王手されているか
#[inline]
pub fn own_king_in_check(pos: &Position, color: Color) -> bool {
    count_checks(pos, color) > 0
}
