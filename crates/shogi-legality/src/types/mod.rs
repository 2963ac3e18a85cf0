//! 基本型モジュール
//!
//! 合法手判定で使う基本的な型を定義する。
//!
//! # 型の依存関係
//!
//! ```text
//! Color
//!   ↓
//! File, Rank
//!   ↓
//! Square
//!   ↓
//! PieceType
//!   ↓
//! Piece ← ShogiMove, Move
//!   ↓
//! Hand
//! ```

mod color;
mod file;
mod hand;
mod moves;
mod piece;
mod piece_type;
mod rank;
mod square;

pub use color::Color;
pub use file::File;
pub use hand::Hand;
pub use moves::{
    BLACK_HAND_FILE, Coord, LegalMoveStatus, Move, ShogiMove, WHITE_HAND_FILE, hand_file,
    hand_rank,
};
pub use piece::Piece;
pub use piece_type::PieceType;
pub use rank::Rank;
pub use square::Square;
