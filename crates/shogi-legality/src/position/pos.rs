//! 局面本体

use std::collections::BTreeMap;

use crate::types::{Color, File, Hand, Move, Piece, PieceType, Rank, Square};

/// 駒台スナップショット（駒 → 枚数）
///
/// 持ち主は駒の手番から決まる（大文字 = 先手、小文字 = 後手）。
pub type PieceStand = BTreeMap<Piece, i32>;

/// 局面（盤面 + 手駒）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    board: [Option<Piece>; Square::NUM],
    hands: [Hand; Color::NUM],
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

/// スナップショットから局面を構築する
///
/// - 盤面は先頭から最大81セルをそのまま写す。足りない分は空マス、余分は捨てる。
/// - 駒台は駒の手番を持ち主とし、生駒の駒種のスロットに枚数（負数は0）を入れる。
///   玉など手駒にならない駒は無視する。
pub fn load_position(board: &[Option<Piece>], stand: &PieceStand) -> Position {
    let mut pos = Position::empty();

    for (cell, &piece) in pos.board.iter_mut().zip(board) {
        *cell = piece;
    }

    for (&piece, &count) in stand {
        let base = piece.piece_type().unpromote();
        if base.hand_index().is_none() {
            continue;
        }
        let owner = piece.color();
        pos.hands[owner.index()] = pos.hands[owner.index()].set(base, count.max(0) as u32);
    }

    pos
}

impl Position {
    /// 空の局面
    pub const fn empty() -> Position {
        Position {
            board: [None; Square::NUM],
            hands: [Hand::EMPTY; Color::NUM],
        }
    }

    /// 升にある駒
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    /// 升が空か
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.board[sq.index()].is_none()
    }

    /// 升に駒を置く（None で取り除く）
    #[inline]
    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.board[sq.index()] = piece;
    }

    /// 手駒
    #[inline]
    pub fn hand(&self, color: Color) -> Hand {
        self.hands[color.index()]
    }

    /// 手駒を差し替える
    #[inline]
    pub fn set_hand(&mut self, color: Color, hand: Hand) {
        self.hands[color.index()] = hand;
    }

    /// 指定手番の駒とその升
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_on(sq) {
            Some(p) if p.color() == color => Some((sq, p)),
            _ => None,
        })
    }

    /// 指定筋に指定手番の生歩があるか
    pub fn has_pawn_on_file(&self, color: Color, file: File) -> bool {
        let pawn = Piece::new(color, PieceType::Pawn);
        Rank::ALL
            .iter()
            .any(|&rank| self.piece_on(Square::new(file, rank)) == Some(pawn))
    }

    /// 盤面セル列（81要素）
    pub fn cells(&self) -> Vec<Option<Piece>> {
        self.board.to_vec()
    }

    /// 駒台スナップショット（0枚の駒種は含めない）
    pub fn stand(&self) -> PieceStand {
        let mut stand = PieceStand::new();
        for color in [Color::Black, Color::White] {
            for (pt, count) in self.hand(color).iter() {
                stand.insert(Piece::new(color, pt), count as i32);
            }
        }
        stand
    }

    /// 指し手をこの局面に適用する（合法性は確認しない）
    ///
    /// 駒打ちは手駒を1枚減らして置く。盤上の手は移動元を空け、成りなら成駒を置き、
    /// 取った駒は生駒に戻して手番側の手駒に加える。
    /// 手駒がない駒打ちや移動元が空の手は何もせず false を返す。
    pub(crate) fn apply_move(&mut self, color: Color, mv: &Move) -> bool {
        match *mv {
            Move::Drop { to, piece } => {
                let pt = piece.piece_type();
                if !self.hand(color).has(pt) {
                    return false;
                }
                self.set_hand(color, self.hand(color).sub(pt));
                self.set_piece(to, Some(piece));
                true
            }
            Move::Normal {
                from, to, promote, ..
            } => {
                let Some(piece) = self.piece_on(from) else {
                    return false;
                };
                let captured = self.piece_on(to);

                let placed = if promote {
                    piece.promote().unwrap_or(piece)
                } else {
                    piece
                };
                self.set_piece(from, None);
                self.set_piece(to, Some(placed));

                if let Some(captured) = captured {
                    let base = captured.piece_type().unpromote();
                    self.set_hand(color, self.hand(color).add(base));
                }
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{board_from_rows, sq};

    #[test]
    fn test_load_position_pads_and_truncates() {
        let short = vec![Some(Piece::B_KING); 10];
        let pos = load_position(&short, &PieceStand::new());
        assert_eq!(pos.piece_on(sq(0, 0)), Some(Piece::B_KING));
        assert_eq!(pos.piece_on(sq(0, 1)), Some(Piece::B_KING));
        assert_eq!(pos.piece_on(sq(1, 1)), None);

        let long = vec![Some(Piece::W_PAWN); 100];
        let pos = load_position(&long, &PieceStand::new());
        assert_eq!(pos.cells().len(), 81);
        assert!(pos.cells().iter().all(|c| *c == Some(Piece::W_PAWN)));
    }

    #[test]
    fn test_load_position_hands() {
        let mut stand = PieceStand::new();
        stand.insert(Piece::B_PAWN, 3);
        stand.insert(Piece::W_ROOK, 1);
        stand.insert(Piece::W_GOLD, -2);
        stand.insert(Piece::B_KING, 1);
        let pos = load_position(&[], &stand);

        assert_eq!(pos.hand(Color::Black).count(PieceType::Pawn), 3);
        assert_eq!(pos.hand(Color::White).count(PieceType::Rook), 1);
        assert_eq!(pos.hand(Color::White).count(PieceType::Gold), 0);
        assert_eq!(pos.hand(Color::Black).count(PieceType::King), 0);
        assert_eq!(pos.hand(Color::White).count(PieceType::Pawn), 0);
    }

    #[test]
    fn test_stand_round_trip() {
        let mut stand = PieceStand::new();
        stand.insert(Piece::B_SILVER, 2);
        stand.insert(Piece::W_PAWN, 5);
        let pos = load_position(&[], &stand);
        assert_eq!(pos.stand(), stand);
    }

    #[test]
    fn test_has_pawn_on_file_ignores_promoted() {
        let board = board_from_rows([
            "....k....",
            ".........",
            ".........",
            ".........",
            "Q........",
            ".........",
            ".P.......",
            ".........",
            "....K....",
        ]);
        let pos = load_position(&board, &PieceStand::new());
        assert!(!pos.has_pawn_on_file(Color::Black, File::File1));
        assert!(pos.has_pawn_on_file(Color::Black, File::File2));
        assert!(!pos.has_pawn_on_file(Color::White, File::File2));
    }

    #[test]
    fn test_apply_capture_adds_unpromoted_piece_to_hand() {
        let mut pos = Position::empty();
        pos.set_piece(sq(4, 4), Some(Piece::B_ROOK));
        pos.set_piece(sq(4, 1), Some(Piece::W_HORSE));

        let mv = Move::Normal {
            from: sq(4, 4),
            to: sq(4, 1),
            piece: Piece::B_ROOK,
            promote: true,
        };
        assert!(pos.apply_move(Color::Black, &mv));
        assert_eq!(pos.piece_on(sq(4, 4)), None);
        assert_eq!(pos.piece_on(sq(4, 1)), Some(Piece::B_DRAGON));
        assert_eq!(pos.hand(Color::Black).count(PieceType::Bishop), 1);
    }

    #[test]
    fn test_apply_drop_requires_hand_piece() {
        let mut pos = Position::empty();
        let mv = Move::Drop {
            to: sq(3, 3),
            piece: Piece::W_GOLD,
        };
        assert!(!pos.apply_move(Color::White, &mv));

        pos.set_hand(Color::White, Hand::EMPTY.add(PieceType::Gold));
        assert!(pos.apply_move(Color::White, &mv));
        assert_eq!(pos.piece_on(sq(3, 3)), Some(Piece::W_GOLD));
        assert_eq!(pos.hand(Color::White), Hand::EMPTY);
    }
}
