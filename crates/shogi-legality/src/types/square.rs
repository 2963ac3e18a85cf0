//! 升目（Square）

use super::{File, Rank};

/// 升目（0-80）
///
/// 配置: 盤面スナップショットと同じ行優先
/// index = rank * 9 + file（file, rank ともに 0 始まり）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Square(u8);

impl Square {
    /// 升目の数
    pub const NUM: usize = 81;

    /// FileとRankからSquareを生成
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Square {
        Square(rank as u8 * 9 + file as u8)
    }

    /// 筋を取得
    #[inline]
    pub const fn file(self) -> File {
        // SAFETY: self.0 % 9 は 0..=8 なので有効なFile値
        unsafe { std::mem::transmute(self.0 % 9) }
    }

    /// 段を取得
    #[inline]
    pub const fn rank(self) -> Rank {
        // SAFETY: self.0 / 9 は 0..=8 なので有効なRank値
        unsafe { std::mem::transmute(self.0 / 9) }
    }

    /// インデックスとして使用
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// 符号付き座標から生成（盤外なら None）
    #[inline]
    pub const fn from_coords(x: i32, y: i32) -> Option<Square> {
        if x >= 0 && x < 9 && y >= 0 && y < 9 {
            Some(Square((y * 9 + x) as u8))
        } else {
            None
        }
    }

    /// 筋・段を符号付き座標で返す
    #[inline]
    pub const fn coords(self) -> (i32, i32) {
        ((self.0 % 9) as i32, (self.0 / 9) as i32)
    }

    /// (dx, dy) だけずらした升（盤外なら None）
    #[inline]
    pub const fn offset(self, dx: i32, dy: i32) -> Option<Square> {
        let (x, y) = self.coords();
        Square::from_coords(x + dx, y + dy)
    }

    /// 全ての升を返すイテレータ
    pub fn all() -> impl Iterator<Item = Square> {
        (0..81).map(Square)
    }
}
