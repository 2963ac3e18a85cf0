//! 指し手（ShogiMove / Move）
//!
//! - `ShogiMove`: 呼び出し側から渡される指し手記述。座標は検証前の生の値で、
//!   駒打ちは「駒台の擬似座標」を移動元に持つ。
//! - `Move`: 局面と照合済みの内部表現。盤上の手と駒打ちの直和。

use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceType, Square};

/// 先手駒台の擬似筋
pub const BLACK_HAND_FILE: i32 = 9;

/// 後手駒台の擬似筋
pub const WHITE_HAND_FILE: i32 = 10;

/// 手番の駒台の擬似筋
#[inline]
pub const fn hand_file(color: Color) -> i32 {
    match color {
        Color::Black => BLACK_HAND_FILE,
        Color::White => WHITE_HAND_FILE,
    }
}

/// 駒台上での駒の擬似段
///
/// 先手は 歩0 香1 桂2 銀3 金4 角5 飛6、後手は 飛2 角3 金4 銀5 桂6 香7 歩8。
/// 手駒にならない駒種は None。
pub const fn hand_rank(color: Color, pt: PieceType) -> Option<i32> {
    let rank = match (color, pt) {
        (Color::Black, PieceType::Pawn) => 0,
        (Color::Black, PieceType::Lance) => 1,
        (Color::Black, PieceType::Knight) => 2,
        (Color::Black, PieceType::Silver) => 3,
        (Color::Black, PieceType::Gold) => 4,
        (Color::Black, PieceType::Bishop) => 5,
        (Color::Black, PieceType::Rook) => 6,
        (Color::White, PieceType::Rook) => 2,
        (Color::White, PieceType::Bishop) => 3,
        (Color::White, PieceType::Gold) => 4,
        (Color::White, PieceType::Silver) => 5,
        (Color::White, PieceType::Knight) => 6,
        (Color::White, PieceType::Lance) => 7,
        (Color::White, PieceType::Pawn) => 8,
        _ => return None,
    };
    Some(rank)
}

/// 検証前の座標（x = 筋、y = 段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Coord {
        Coord { x, y }
    }

    /// 盤内の升に変換（盤外なら None）
    #[inline]
    pub const fn square(self) -> Option<Square> {
        Square::from_coords(self.x, self.y)
    }
}

impl From<Square> for Coord {
    fn from(sq: Square) -> Coord {
        let (x, y) = sq.coords();
        Coord { x, y }
    }
}

/// 呼び出し側の指し手記述
///
/// 内容の正しさは保証されない。エンジンは局面から移動元の駒と手の種類を
/// 導き直し、ここに書かれた駒・取った駒と食い違えば非合法として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShogiMove {
    /// 移動元（駒打ちは駒台の擬似座標）
    pub from: Coord,
    /// 移動先
    pub to: Coord,
    /// 動かす駒（駒打ちは打つ駒）
    pub moving_piece: Piece,
    /// 取る駒（申告なしは None）
    pub captured_piece: Option<Piece>,
    /// 成りの申告
    pub promote: bool,
}

impl ShogiMove {
    /// 盤上の手
    pub fn board(
        from: Square,
        to: Square,
        moving_piece: Piece,
        captured_piece: Option<Piece>,
        promote: bool,
    ) -> ShogiMove {
        ShogiMove {
            from: from.into(),
            to: to.into(),
            moving_piece,
            captured_piece,
            promote,
        }
    }

    /// 駒打ち（移動元は打つ駒の手番の駒台の擬似座標になる）
    pub fn drop(piece: Piece, to: Square) -> ShogiMove {
        let color = piece.color();
        let rank = hand_rank(color, piece.piece_type()).unwrap_or(-1);
        ShogiMove {
            from: Coord::new(hand_file(color), rank),
            to: to.into(),
            moving_piece: piece,
            captured_piece: None,
            promote: false,
        }
    }
}

/// 局面と照合済みの指し手
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// 盤上の駒を動かす手
    Normal {
        from: Square,
        to: Square,
        piece: Piece,
        promote: bool,
    },
    /// 手駒を打つ手
    Drop { to: Square, piece: Piece },
}

impl Move {
    /// 移動先
    #[inline]
    pub const fn to(&self) -> Square {
        match *self {
            Move::Normal { to, .. } | Move::Drop { to, .. } => to,
        }
    }

    /// 動かす（打つ）駒
    #[inline]
    pub const fn piece(&self) -> Piece {
        match *self {
            Move::Normal { piece, .. } | Move::Drop { piece, .. } => piece,
        }
    }
}

/// 成り・不成それぞれの合法性
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LegalMoveStatus {
    /// 不成の手が合法か
    pub non_promoting_move_exists: bool,
    /// 成る手が合法か
    pub promoting_move_exists: bool,
}

impl LegalMoveStatus {
    #[inline]
    pub const fn new(non_promoting_move_exists: bool, promoting_move_exists: bool) -> Self {
        Self {
            non_promoting_move_exists,
            promoting_move_exists,
        }
    }

    /// どちらかが合法か
    #[inline]
    pub const fn any(self) -> bool {
        self.non_promoting_move_exists || self.promoting_move_exists
    }
}
