//! 局面表現モジュール
//!
//! - `Position`: 81マスの盤面配列と両手番の手駒だけを持つ値型
//! - `load_position`: 呼び出し側のスナップショット（盤面セル列・駒台の枚数表）から構築
//! - `Snapshot`: serde でやり取りするためのスナップショット
//!
//! 合法手判定は毎回スナップショットから新しい `Position` を作り、
//! シミュレーションはそのコピーの上で行って破棄する。呼び出しをまたいで
//! 保持される状態はない。

mod pos;
mod snapshot;

pub use pos::{PieceStand, Position, load_position};
pub use snapshot::Snapshot;
