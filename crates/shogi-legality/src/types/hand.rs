//! 手駒（Hand）

use super::PieceType;

/// 手駒（片方の手番の駒台）
///
/// 駒種ごとの枚数を `PieceType::HAND_PIECES` の並びで保持する。
/// 枚数は非負で、玉と成駒は持てない（指定しても無視される）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hand([u32; PieceType::HAND_NUM]);

impl Hand {
    /// 空の手駒
    pub const EMPTY: Hand = Hand([0; PieceType::HAND_NUM]);

    /// 指定駒種の枚数を取得
    #[inline]
    pub const fn count(self, pt: PieceType) -> u32 {
        match pt.hand_index() {
            Some(i) => self.0[i],
            None => 0,
        }
    }

    /// 指定駒種を持っているか
    #[inline]
    pub const fn has(self, pt: PieceType) -> bool {
        self.count(pt) > 0
    }

    /// 1枚追加
    #[inline]
    pub fn add(self, pt: PieceType) -> Hand {
        let mut counts = self.0;
        if let Some(i) = pt.hand_index() {
            counts[i] = counts[i].saturating_add(1);
        }
        Hand(counts)
    }

    /// 1枚減らす（0枚なら変化しない）
    #[inline]
    pub fn sub(self, pt: PieceType) -> Hand {
        let mut counts = self.0;
        if let Some(i) = pt.hand_index() {
            counts[i] = counts[i].saturating_sub(1);
        }
        Hand(counts)
    }

    /// 指定枚数をセット
    #[inline]
    pub fn set(self, pt: PieceType, count: u32) -> Hand {
        let mut counts = self.0;
        if let Some(i) = pt.hand_index() {
            counts[i] = count;
        }
        Hand(counts)
    }

    /// 持っている駒種と枚数の一覧（0枚の駒種は除く）
    pub fn iter(self) -> impl Iterator<Item = (PieceType, u32)> {
        PieceType::HAND_PIECES
            .into_iter()
            .zip(self.0)
            .filter(|&(_, n)| n > 0)
    }
}
