//! 合法手判定
//!
//! - `pseudo`: 利き・占有・駒打ちの制限・成りの可否（疑似合法）
//! - `simulate`: 局面のコピーに指して自玉の安全と打ち歩詰めを確認
//! - `movegen`: 候補手の列挙（件数・一覧・合法手の有無で共有）
//! - `convert`: 呼び出し側の指し手記述との照合と変換

mod convert;
mod movegen;
mod pseudo;
mod simulate;

pub use convert::{check_metadata, resolve_move, to_internal_move, to_shogi_move};
pub use movegen::{
    collect_legal_moves, count_legal_moves, for_each_candidate, for_each_legal_move,
};
pub use pseudo::{can_promote_on_move, is_dead_square, is_mandatory_promotion, is_pseudo_legal};
pub use simulate::{
    apply_move, gives_direct_pawn_check, has_any_legal_move, is_legal_after_simulation,
};
