//! 駒の利き（Geometry Oracle）
//!
//! 駒種ごとの動きを「1マスの跳び」と「走り」の組で表す。方向は手番から見た
//! 相対座標 (dx, 前方への段数) で持ち、実際の段方向は `Color::forward()` を掛けて得る。
//! 走りの経路は両端を除いた途中の升だけを見る。移動先にある駒は呼び出し側が判定する。

use smallvec::SmallVec;

use crate::position::Position;
use crate::types::{Color, Piece, PieceType, Square};

/// 移動先リスト（大駒でも20升に収まる）
pub type Destinations = SmallVec<[Square; 20]>;

type Dirs = &'static [(i32, i32)];

const KING_STEPS: Dirs = &[
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];
const GOLD_STEPS: Dirs = &[(-1, 1), (0, 1), (1, 1), (-1, 0), (1, 0), (0, -1)];
const SILVER_STEPS: Dirs = &[(-1, 1), (0, 1), (1, 1), (-1, -1), (1, -1)];
const KNIGHT_STEPS: Dirs = &[(-1, 2), (1, 2)];
const PAWN_STEPS: Dirs = &[(0, 1)];
const DIAGONAL: Dirs = &[(-1, 1), (1, 1), (-1, -1), (1, -1)];
const ORTHOGONAL: Dirs = &[(0, 1), (-1, 0), (1, 0), (0, -1)];
const FORWARD: Dirs = &[(0, 1)];
const NONE: Dirs = &[];

/// 駒種の動き（跳び, 走り）
const fn movement(pt: PieceType) -> (Dirs, Dirs) {
    match pt {
        PieceType::Pawn => (PAWN_STEPS, NONE),
        PieceType::Lance => (NONE, FORWARD),
        PieceType::Knight => (KNIGHT_STEPS, NONE),
        PieceType::Silver => (SILVER_STEPS, NONE),
        PieceType::Gold
        | PieceType::ProPawn
        | PieceType::ProLance
        | PieceType::ProKnight
        | PieceType::ProSilver => (GOLD_STEPS, NONE),
        PieceType::King => (KING_STEPS, NONE),
        PieceType::Bishop => (NONE, DIAGONAL),
        PieceType::Rook => (NONE, ORTHOGONAL),
        // 角の走り + 縦横1マス（斜め1マスは走りに含まれる）
        PieceType::Horse => (ORTHOGONAL, DIAGONAL),
        PieceType::Dragon => (DIAGONAL, ORTHOGONAL),
    }
}

/// 相対方向を盤上の (dx, dy) に直す
#[inline]
const fn absolute(color: Color, (dx, fwd): (i32, i32)) -> (i32, i32) {
    (dx, fwd * color.forward())
}

/// `from` にある `piece` が `to` に利いているか
///
/// 盤面は走りの遮りを見るためだけに使う。`from` に実際に `piece` があるかは問わない。
pub fn attacks_square(pos: &Position, from: Square, to: Square, piece: Piece) -> bool {
    if from == to {
        return false;
    }
    let color = piece.color();
    let (steps, rays) = movement(piece.piece_type());
    let (fx, fy) = from.coords();
    let (tx, ty) = to.coords();
    let delta = (tx - fx, ty - fy);

    if steps
        .iter()
        .any(|&dir| absolute(color, dir) == delta)
    {
        return true;
    }

    rays.iter().any(|&dir| {
        let (dx, dy) = absolute(color, dir);
        ray_reaches(pos, from, to, dx, dy)
    })
}

/// `from` から (dx, dy) 方向に進んで、途中を遮られずに `to` に着くか
fn ray_reaches(pos: &Position, from: Square, to: Square, dx: i32, dy: i32) -> bool {
    let mut cur = from;
    while let Some(next) = cur.offset(dx, dy) {
        if next == to {
            return true;
        }
        if !pos.is_empty(next) {
            return false;
        }
        cur = next;
    }
    false
}

/// `from` にある `piece` の移動先候補（王手放置・自駒は考慮しない）
///
/// 走りは最初に駒がある升（敵味方を問わない）を含めて止まる。
pub fn collect_destinations(pos: &Position, from: Square, piece: Piece) -> Destinations {
    let color = piece.color();
    let (steps, rays) = movement(piece.piece_type());
    let mut dests = Destinations::new();

    for &dir in steps {
        let (dx, dy) = absolute(color, dir);
        if let Some(to) = from.offset(dx, dy) {
            dests.push(to);
        }
    }

    for &dir in rays {
        let (dx, dy) = absolute(color, dir);
        let mut cur = from;
        while let Some(next) = cur.offset(dx, dy) {
            dests.push(next);
            if !pos.is_empty(next) {
                break;
            }
            cur = next;
        }
    }

    dests
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::sq;

    fn with(pieces: &[(Square, Piece)]) -> Position {
        let mut pos = Position::empty();
        for &(s, p) in pieces {
            pos.set_piece(s, Some(p));
        }
        pos
    }

    #[test]
    fn test_pawn_attacks_forward_only() {
        let pos = Position::empty();
        assert!(attacks_square(&pos, sq(4, 4), sq(4, 3), Piece::B_PAWN));
        assert!(!attacks_square(&pos, sq(4, 4), sq(4, 5), Piece::B_PAWN));
        assert!(attacks_square(&pos, sq(4, 4), sq(4, 5), Piece::W_PAWN));
        assert!(!attacks_square(&pos, sq(4, 4), sq(4, 3), Piece::W_PAWN));
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let pos = with(&[(sq(4, 3), Piece::W_GOLD), (sq(3, 3), Piece::B_GOLD)]);
        assert!(attacks_square(&pos, sq(4, 4), sq(3, 2), Piece::B_KNIGHT));
        assert!(attacks_square(&pos, sq(4, 4), sq(5, 2), Piece::B_KNIGHT));
        assert!(!attacks_square(&pos, sq(4, 4), sq(3, 6), Piece::B_KNIGHT));
        assert!(attacks_square(&pos, sq(4, 4), sq(3, 6), Piece::W_KNIGHT));
    }

    #[test]
    fn test_silver_and_gold_shapes() {
        let pos = Position::empty();
        let from = sq(4, 4);
        // 銀: 真横・真後ろには行けない
        assert!(attacks_square(&pos, from, sq(3, 5), Piece::B_SILVER));
        assert!(!attacks_square(&pos, from, sq(3, 4), Piece::B_SILVER));
        assert!(!attacks_square(&pos, from, sq(4, 5), Piece::B_SILVER));
        // 金: 斜め後ろには行けない
        assert!(attacks_square(&pos, from, sq(3, 4), Piece::B_GOLD));
        assert!(attacks_square(&pos, from, sq(4, 5), Piece::B_GOLD));
        assert!(!attacks_square(&pos, from, sq(3, 5), Piece::B_GOLD));
        // と金は金と同じ
        assert!(!attacks_square(&pos, from, sq(5, 3), Piece::W_PRO_PAWN));
        assert!(attacks_square(&pos, from, sq(5, 5), Piece::W_PRO_PAWN));
    }

    #[test]
    fn test_lance_blocked() {
        let pos = with(&[(sq(0, 5), Piece::W_PAWN)]);
        assert!(attacks_square(&pos, sq(0, 8), sq(0, 5), Piece::B_LANCE));
        assert!(!attacks_square(&pos, sq(0, 8), sq(0, 4), Piece::B_LANCE));
        assert!(!attacks_square(&pos, sq(0, 8), sq(0, 8), Piece::B_LANCE));
    }

    #[test]
    fn test_bishop_and_rook_rays() {
        let pos = with(&[(sq(2, 2), Piece::B_PAWN)]);
        assert!(attacks_square(&pos, sq(0, 0), sq(2, 2), Piece::W_BISHOP));
        assert!(!attacks_square(&pos, sq(0, 0), sq(3, 3), Piece::W_BISHOP));
        assert!(!attacks_square(&pos, sq(0, 0), sq(0, 1), Piece::W_BISHOP));
        assert!(attacks_square(&pos, sq(2, 8), sq(2, 3), Piece::B_ROOK));
        assert!(!attacks_square(&pos, sq(2, 8), sq(2, 0), Piece::B_ROOK));
    }

    #[test]
    fn test_horse_and_dragon_add_king_steps() {
        let pos = Position::empty();
        assert!(attacks_square(&pos, sq(4, 4), sq(4, 3), Piece::B_HORSE));
        assert!(!attacks_square(&pos, sq(4, 4), sq(4, 2), Piece::B_HORSE));
        assert!(attacks_square(&pos, sq(4, 4), sq(8, 8), Piece::B_HORSE));
        assert!(attacks_square(&pos, sq(4, 4), sq(5, 5), Piece::W_DRAGON));
        assert!(!attacks_square(&pos, sq(4, 4), sq(6, 6), Piece::W_DRAGON));
        assert!(attacks_square(&pos, sq(4, 4), sq(4, 0), Piece::W_DRAGON));
    }

    #[test]
    fn test_collect_destinations_rook_stops_at_first_piece() {
        let pos = with(&[(sq(4, 2), Piece::W_PAWN), (sq(6, 4), Piece::B_PAWN)]);
        let dests = collect_destinations(&pos, sq(4, 4), Piece::B_ROOK);
        assert!(dests.contains(&sq(4, 3)));
        assert!(dests.contains(&sq(4, 2)));
        assert!(!dests.contains(&sq(4, 1)));
        assert!(dests.contains(&sq(6, 4)));
        assert!(!dests.contains(&sq(7, 4)));
        assert!(dests.contains(&sq(4, 8)));
        assert!(dests.contains(&sq(0, 4)));
        // 上2 + 右2 + 下4 + 左4
        assert_eq!(dests.len(), 12);
    }

    #[test]
    fn test_collect_destinations_edge() {
        let pos = Position::empty();
        assert!(collect_destinations(&pos, sq(0, 0), Piece::B_PAWN).is_empty());
        assert_eq!(collect_destinations(&pos, sq(0, 0), Piece::B_KING).len(), 3);
        assert_eq!(collect_destinations(&pos, sq(4, 4), Piece::B_DRAGON).len(), 20);
    }
}
