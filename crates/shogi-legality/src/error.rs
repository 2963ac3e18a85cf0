//! エラー型
//!
//! 公開の合法手判定APIは bool / 件数だけを返す。ここで定義する型は
//! 内部の判定経路と診断用API・局面検証・設定読み込みで使う。

use crate::types::{Color, File, Piece, PieceType, Square};

/// 指し手が非合法と判定された理由
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// 移動先（または盤上の移動元）が盤外
    #[error("square is off the board")]
    OffBoard,

    /// 移動元が盤内でも手番の駒台でもない
    #[error("source is neither a board square nor the mover's hand")]
    InvalidSource,

    /// 申告された駒が局面と一致しない
    #[error("declared piece {declared} does not match the position")]
    PieceMismatch { declared: Piece },

    /// 申告された取る駒が移動先の駒と一致しない
    #[error("declared captured piece {declared} does not match the destination")]
    CaptureMismatch { declared: Piece },

    /// 駒台の擬似座標が打つ駒と一致しない
    #[error("hand coordinate does not match {piece}")]
    HandSlotMismatch { piece: Piece },

    /// 移動元に手番の駒がない
    #[error("no piece of the side to move on the source square")]
    NoPieceToMove,

    /// 自駒のある升へ移動しようとした
    #[error("destination is occupied by the mover's own piece")]
    OwnPieceOnDestination,

    /// 駒の利きで移動先に届かない（経路が塞がれている場合を含む）
    #[error("{0:?} cannot reach the destination")]
    Unreachable(PieceType),

    /// 成れない手で成りを申告した
    #[error("promotion is not available for this move")]
    PromotionUnavailable,

    /// 行き所のない駒になる不成
    #[error("this move must promote")]
    PromotionRequired,

    /// 駒打ちで成りを申告した
    #[error("a dropped piece cannot promote")]
    DropWithPromotion,

    /// 成駒・玉など手駒にならない駒を打とうとした
    #[error("{0:?} cannot be dropped")]
    NotDroppable(PieceType),

    /// 手駒にない駒を打とうとした
    #[error("{0:?} is not in hand")]
    NotInHand(PieceType),

    /// 駒のある升に打とうとした
    #[error("drop destination is occupied")]
    DropOnOccupied,

    /// 二歩
    #[error("an unpromoted pawn of the same side is already on {0:?}")]
    DoublePawn(File),

    /// 行き所のない升への駒打ち
    #[error("{0:?} dropped on {1:?} could never move")]
    DeadDrop(PieceType, Square),

    /// 着手後に自玉が王手されている
    #[error("move leaves own king in check")]
    LeavesKingInCheck,

    /// 打ち歩詰め
    #[error("pawn drop gives checkmate")]
    PawnDropMate,
}

/// 局面検証のエラー
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionError {
    /// 同じ筋に同じ手番の生歩が2枚以上ある
    #[error("{color:?} has two unpromoted pawns on {file:?}")]
    DoublePawn { color: Color, file: File },

    /// 駒の枚数が上限を超えている
    #[error("{color:?} has {count} {piece_type:?}, more than the maximum {max}")]
    TooManyPieces {
        color: Color,
        piece_type: PieceType,
        count: u32,
        max: u32,
    },

    /// 行き所のない駒が盤上にある
    #[error("{piece} on {square:?} can never move")]
    DeadPiece { piece: Piece, square: Square },

    /// 玉がちょうど1枚ではない
    #[error("{color:?} has {count} kings")]
    KingCount { color: Color, count: u32 },
}

/// セルコードに対応しない文字
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid piece character {0:?}")]
pub struct PieceCharError(pub char);

/// 設定読み込みのエラー
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse validator config: {0}")]
    Parse(#[from] toml::de::Error),
}
