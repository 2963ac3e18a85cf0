//! 駒（Piece）
//!
//! 内部表現は 5bit ラッパー。
//! - bit 0-3: `PieceType`（1..=14）
//! - bit 4: `Color`（0 = Black, 1 = White）
//!
//! 空マスは `Option<Piece>` の `None` で表すので、`Piece` は常に有効な駒を指す。
//!
//! 盤面スナップショットの1文字表記（セルコード）との相互変換も持つ。
//! 大文字が先手、小文字が後手で、成駒は `Q`(と) `M`(成香) `O`(成桂) `T`(成銀)
//! `C`(馬) `U`(龍) を使う。

use serde::{Deserialize, Serialize};

use super::{Color, PieceType};
use crate::error::PieceCharError;

/// 駒（先後の区別あり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
#[repr(transparent)]
pub struct Piece(u8);

impl Piece {
    // 先手の駒
    pub const B_PAWN: Piece = Piece(1);
    pub const B_LANCE: Piece = Piece(2);
    pub const B_KNIGHT: Piece = Piece(3);
    pub const B_SILVER: Piece = Piece(4);
    pub const B_BISHOP: Piece = Piece(5);
    pub const B_ROOK: Piece = Piece(6);
    pub const B_GOLD: Piece = Piece(7);
    pub const B_KING: Piece = Piece(8);
    pub const B_PRO_PAWN: Piece = Piece(9);
    pub const B_PRO_LANCE: Piece = Piece(10);
    pub const B_PRO_KNIGHT: Piece = Piece(11);
    pub const B_PRO_SILVER: Piece = Piece(12);
    pub const B_HORSE: Piece = Piece(13);
    pub const B_DRAGON: Piece = Piece(14);

    // 後手の駒（+16）
    pub const W_PAWN: Piece = Piece(17);
    pub const W_LANCE: Piece = Piece(18);
    pub const W_KNIGHT: Piece = Piece(19);
    pub const W_SILVER: Piece = Piece(20);
    pub const W_BISHOP: Piece = Piece(21);
    pub const W_ROOK: Piece = Piece(22);
    pub const W_GOLD: Piece = Piece(23);
    pub const W_KING: Piece = Piece(24);
    pub const W_PRO_PAWN: Piece = Piece(25);
    pub const W_PRO_LANCE: Piece = Piece(26);
    pub const W_PRO_KNIGHT: Piece = Piece(27);
    pub const W_PRO_SILVER: Piece = Piece(28);
    pub const W_HORSE: Piece = Piece(29);
    pub const W_DRAGON: Piece = Piece(30);

    /// ColorとPieceTypeから生成
    #[inline]
    pub const fn new(color: Color, piece_type: PieceType) -> Piece {
        Piece(piece_type as u8 | ((color as u8) << 4))
    }

    /// 駒種を取得
    #[inline]
    pub const fn piece_type(self) -> PieceType {
        // SAFETY: Piece は new() 経由でのみ作られるので下位4bitは 1..=14
        unsafe { std::mem::transmute(self.0 & 0x0F) }
    }

    /// 手番を取得
    #[inline]
    pub const fn color(self) -> Color {
        // SAFETY: (self.0 >> 4) & 1 は 0 or 1 なので有効なColor値
        unsafe { std::mem::transmute((self.0 >> 4) & 1) }
    }

    /// 成り駒を返す
    #[inline]
    pub const fn promote(self) -> Option<Piece> {
        match self.piece_type().promote() {
            Some(pt) => Some(Piece::new(self.color(), pt)),
            None => None,
        }
    }

    /// 生駒を返す
    #[inline]
    pub const fn unpromote(self) -> Piece {
        Piece::new(self.color(), self.piece_type().unpromote())
    }

    /// セルコード1文字から変換（未知の文字は None）
    pub const fn from_char(c: char) -> Option<Piece> {
        let piece_type = match c.to_ascii_uppercase() {
            'P' => PieceType::Pawn,
            'L' => PieceType::Lance,
            'N' => PieceType::Knight,
            'S' => PieceType::Silver,
            'G' => PieceType::Gold,
            'B' => PieceType::Bishop,
            'R' => PieceType::Rook,
            'K' => PieceType::King,
            'Q' => PieceType::ProPawn,
            'M' => PieceType::ProLance,
            'O' => PieceType::ProKnight,
            'T' => PieceType::ProSilver,
            'C' => PieceType::Horse,
            'U' => PieceType::Dragon,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() { Color::Black } else { Color::White };
        Some(Piece::new(color, piece_type))
    }

    /// セルコード1文字に変換
    pub const fn to_char(self) -> char {
        let c = match self.piece_type() {
            PieceType::Pawn => 'P',
            PieceType::Lance => 'L',
            PieceType::Knight => 'N',
            PieceType::Silver => 'S',
            PieceType::Gold => 'G',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::King => 'K',
            PieceType::ProPawn => 'Q',
            PieceType::ProLance => 'M',
            PieceType::ProKnight => 'O',
            PieceType::ProSilver => 'T',
            PieceType::Horse => 'C',
            PieceType::Dragon => 'U',
        };
        match self.color() {
            Color::Black => c,
            Color::White => c.to_ascii_lowercase(),
        }
    }
}

impl TryFrom<char> for Piece {
    type Error = PieceCharError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Piece::from_char(c).ok_or(PieceCharError(c))
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> char {
        piece.to_char()
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
