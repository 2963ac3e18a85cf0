//! serde 用の局面スナップショット

use serde::{Deserialize, Serialize};

use super::{PieceStand, Position, load_position};
use crate::types::{Color, Piece};

/// 手番・盤面・駒台をまとめたスナップショット
///
/// 駒は1文字のセルコード（大文字 = 先手、小文字 = 後手）で表す。
///
/// ```json
/// { "turn": "black", "board": ["l", "n", null, ...], "stand": { "P": 1 } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub turn: Color,
    pub board: Vec<Option<Piece>>,
    #[serde(default)]
    pub stand: PieceStand,
}

impl Snapshot {
    /// 局面から作る
    pub fn from_position(turn: Color, pos: &Position) -> Snapshot {
        Snapshot {
            turn,
            board: pos.cells(),
            stand: pos.stand(),
        }
    }

    /// 局面に変換する
    pub fn to_position(&self) -> Position {
        load_position(&self.board, &self.stand)
    }
}
