//! 局面の妥当性検証
//!
//! 合法手判定そのものは局面の妥当性を前提にしない。ここでの検証は
//! 呼び出し側が明示的に呼ぶか、`ValidatorConfig::validate_input` を有効にした場合だけ行う。

use crate::error::PositionError;
use crate::legality::is_dead_square;
use crate::position::{PieceStand, Position, load_position};
use crate::types::{Color, File, Piece, PieceType, Rank, Square};

const COLORS: [Color; Color::NUM] = [Color::Black, Color::White];

/// 枚数を数える駒種（生駒 + 玉）
const COUNTED: [PieceType; 8] = [
    PieceType::Pawn,
    PieceType::Lance,
    PieceType::Knight,
    PieceType::Silver,
    PieceType::Gold,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::King,
];

/// 局面スナップショットを検証する
///
/// 二歩 → 駒数超過 → 行き所のない駒 → 玉の数 の順に調べ、最初の違反を返す。
pub fn validate_position(board: &[Option<Piece>], stand: &PieceStand) -> Result<(), PositionError> {
    validate(&load_position(board, stand))
}

pub(crate) fn validate(pos: &Position) -> Result<(), PositionError> {
    check_double_pawn(pos)?;
    check_piece_count(pos)?;
    check_dead_pieces(pos)?;
    check_king_count(pos)
}

fn check_double_pawn(pos: &Position) -> Result<(), PositionError> {
    for color in COLORS {
        let pawn = Piece::new(color, PieceType::Pawn);
        for file in File::ALL {
            let pawns = Rank::ALL
                .iter()
                .filter(|&&rank| pos.piece_on(Square::new(file, rank)) == Some(pawn))
                .count();
            if pawns > 1 {
                return Err(PositionError::DoublePawn { color, file });
            }
        }
    }
    Ok(())
}

fn check_piece_count(pos: &Position) -> Result<(), PositionError> {
    for color in COLORS {
        let mut counts = [0u32; PieceType::NUM + 1];
        for (_, piece) in pos.pieces_of(color) {
            counts[piece.piece_type().unpromote().index()] += 1;
        }
        for (pt, n) in pos.hand(color).iter() {
            counts[pt.index()] = counts[pt.index()].saturating_add(n);
        }

        for piece_type in COUNTED {
            let count = counts[piece_type.index()];
            let max = piece_type.max_count();
            if count > max {
                return Err(PositionError::TooManyPieces {
                    color,
                    piece_type,
                    count,
                    max,
                });
            }
        }
    }
    Ok(())
}

fn check_dead_pieces(pos: &Position) -> Result<(), PositionError> {
    for square in Square::all() {
        if let Some(piece) = pos.piece_on(square)
            && is_dead_square(piece.color(), piece.piece_type(), square)
        {
            return Err(PositionError::DeadPiece { piece, square });
        }
    }
    Ok(())
}

fn check_king_count(pos: &Position) -> Result<(), PositionError> {
    for color in COLORS {
        let king = Piece::new(color, PieceType::King);
        let count = Square::all()
            .filter(|&sq| pos.piece_on(sq) == Some(king))
            .count() as u32;
        if count != 1 {
            return Err(PositionError::KingCount { color, count });
        }
    }
    Ok(())
}
