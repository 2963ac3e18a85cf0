//! # shogi-legality
//!
//! 将棋の合法手判定・王手検出ライブラリ。
//!
//! 呼び出し側が持つ局面スナップショット（81マスの盤面と駒台）と指し手記述を受け取り、
//! 合法性・合法手の数・王手の数を返す。棋譜形式の読み書きや探索は扱わない。
//!
//! ## モジュール構成
//!
//! - `types`: 基本型（Color, Square, Piece, Hand, ShogiMove, etc.）
//! - `position`: 局面表現とスナップショットの読み込み
//! - `attacks`: 駒の利き
//! - `check`: 王手の検出
//! - `legality`: 疑似合法判定・シミュレーション・打ち歩詰め・候補手列挙
//! - `validation`: 局面の妥当性検証
//! - `validator`: 公開API（`MoveValidator`）
//!
//! ```
//! use shogi_legality::{Color, MoveValidator, Piece, PieceStand};
//!
//! let board: Vec<Option<Piece>> = [
//!     "lnsgkgsnl",
//!     ".r.....b.",
//!     "ppppppppp",
//!     ".........",
//!     ".........",
//!     ".........",
//!     "PPPPPPPPP",
//!     ".B.....R.",
//!     "LNSGKGSNL",
//! ]
//! .iter()
//! .flat_map(|row| row.chars().map(Piece::from_char))
//! .collect();
//!
//! let validator = MoveValidator::new();
//! assert_eq!(validator.generate_legal_moves(Color::Black, &board, &PieceStand::new()), 30);
//! assert_eq!(validator.check_if_king_in_check(Color::Black, &board), 0);
//! ```

pub mod types;

pub mod position;

pub mod attacks;
pub mod check;

pub mod legality;

pub mod validation;

pub mod config;
pub mod error;
pub mod validator;

pub use config::ValidatorConfig;
pub use error::{ConfigError, IllegalMove, PieceCharError, PositionError};
pub use position::{PieceStand, Position, Snapshot, load_position};
pub use types::{
    Color, Coord, File, Hand, LegalMoveStatus, Move, Piece, PieceType, Rank, ShogiMove, Square,
};
pub use validation::validate_position;
pub use validator::{MoveValidator, TraceEvent};
