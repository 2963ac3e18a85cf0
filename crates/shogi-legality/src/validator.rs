//! 合法手判定の公開API
//!
//! すべての入口は呼び出し側のスナップショットから毎回 `Position` を作り直す。
//! 呼び出しをまたいで残る状態はなく、同じ入力には常に同じ結果を返す。

use std::fmt;
use std::sync::Arc;

use log::{debug, warn};

use crate::check::count_checks;
use crate::config::ValidatorConfig;
use crate::error::{IllegalMove, PositionError};
use crate::legality::{
    check_metadata, collect_legal_moves, count_legal_moves, has_any_legal_move,
    is_legal_after_simulation, resolve_move, to_internal_move, to_shogi_move,
};
use crate::position::{PieceStand, Position, load_position};
use crate::types::{Color, LegalMoveStatus, Piece, ShogiMove};
use crate::validation::validate;

/// 判定結果の通知
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// `is_legal_move` の結果
    MoveChecked {
        turn: Color,
        mv: ShogiMove,
        status: LegalMoveStatus,
    },
    /// 指し手記述が局面と矛盾していた
    MetadataRejected {
        turn: Color,
        mv: ShogiMove,
        reason: IllegalMove,
    },
    /// `generate_legal_moves` / `legal_moves` の件数
    MovesCounted { turn: Color, count: usize },
    /// `has_legal_move` の結果
    LegalMoveFound { turn: Color, found: bool },
    /// `check_if_king_in_check` の結果
    ChecksCounted { turn: Color, count: usize },
    /// `validate_input` 有効時に入力局面の検証で見つかった違反（判定は続ける）
    InputRejected { error: PositionError },
}

type TraceHook = Arc<dyn Fn(&TraceEvent) + Send + Sync>;

/// 合法手判定器
#[derive(Clone, Default)]
pub struct MoveValidator {
    config: ValidatorConfig,
    trace: Option<TraceHook>,
}

impl fmt::Debug for MoveValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MoveValidator")
            .field("config", &self.config)
            .field("trace", &self.trace.is_some())
            .finish()
    }
}

impl MoveValidator {
    /// 既定設定の判定器
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            config,
            trace: None,
        }
    }

    /// 判定結果ごとに呼ばれるコールバックを設定する
    pub fn with_trace(mut self, hook: impl Fn(&TraceEvent) + Send + Sync + 'static) -> Self {
        self.trace = Some(Arc::new(hook));
        self
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// 指し手の不成・成それぞれの合法性
    ///
    /// 指し手記述が局面と矛盾すれば両方 false。駒打ちの成りは常に false。
    pub fn is_legal_move(
        &self,
        turn: Color,
        board: &[Option<Piece>],
        stand: &PieceStand,
        mv: &ShogiMove,
    ) -> LegalMoveStatus {
        let pos = self.load(board, stand);

        if let Err(reason) = check_metadata(&pos, turn, mv) {
            debug!("{turn:?} {mv:?}: metadata mismatch: {reason}");
            self.emit(TraceEvent::MetadataRejected {
                turn,
                mv: *mv,
                reason,
            });
            return LegalMoveStatus::default();
        }

        let status = LegalMoveStatus::new(
            self.variant_is_legal(&pos, turn, mv, false),
            self.variant_is_legal(&pos, turn, mv, true),
        );
        self.emit(TraceEvent::MoveChecked {
            turn,
            mv: *mv,
            status,
        });
        status
    }

    /// 手番の合法手の数（成・不成の両方が合法な手は2手と数える）
    pub fn generate_legal_moves(
        &self,
        turn: Color,
        board: &[Option<Piece>],
        stand: &PieceStand,
    ) -> usize {
        let pos = self.load(board, stand);
        let count = count_legal_moves(&pos, turn, self.config.enforce_pawn_drop_mate);
        debug!("{turn:?}: {count} legal moves");
        self.emit(TraceEvent::MovesCounted { turn, count });
        count
    }

    /// 手番の玉に利いている相手の駒の数（玉がなければ 0）
    ///
    /// 王手の判定に手駒は関係しないので盤面だけを受け取る。
    pub fn check_if_king_in_check(&self, turn: Color, board: &[Option<Piece>]) -> usize {
        let pos = self.load(board, &PieceStand::new());
        let count = count_checks(&pos, turn);
        debug!("{turn:?}: {count} checks");
        self.emit(TraceEvent::ChecksCounted { turn, count });
        count
    }

    /// 手番の合法手の一覧（`generate_legal_moves` が数える手と同じ順・同じ集合）
    pub fn legal_moves(
        &self,
        turn: Color,
        board: &[Option<Piece>],
        stand: &PieceStand,
    ) -> Vec<ShogiMove> {
        let pos = self.load(board, stand);
        let moves: Vec<ShogiMove> =
            collect_legal_moves(&pos, turn, self.config.enforce_pawn_drop_mate)
                .iter()
                .map(|mv| to_shogi_move(&pos, mv))
                .collect();
        debug!("{turn:?}: listed {} legal moves", moves.len());
        self.emit(TraceEvent::MovesCounted {
            turn,
            count: moves.len(),
        });
        moves
    }

    /// 手番に合法手が1つでもあるか（詰み・手詰まりの判定用）
    pub fn has_legal_move(&self, turn: Color, board: &[Option<Piece>], stand: &PieceStand) -> bool {
        let pos = self.load(board, stand);
        let found = has_any_legal_move(turn, &pos, self.config.enforce_pawn_drop_mate);
        debug!("{turn:?}: has legal move = {found}");
        self.emit(TraceEvent::LegalMoveFound { turn, found });
        found
    }

    /// 指定した成り・不成で指し手が非合法になる理由
    pub fn explain_move(
        &self,
        turn: Color,
        board: &[Option<Piece>],
        stand: &PieceStand,
        mv: &ShogiMove,
        promote: bool,
    ) -> Result<(), IllegalMove> {
        let pos = self.load(board, stand);
        resolve_move(&pos, turn, mv, promote, self.config.enforce_pawn_drop_mate).map(|_| ())
    }

    fn variant_is_legal(&self, pos: &Position, turn: Color, mv: &ShogiMove, promote: bool) -> bool {
        to_internal_move(pos, mv, promote)
            .and_then(|internal| {
                is_legal_after_simulation(pos, turn, &internal, self.config.enforce_pawn_drop_mate)
            })
            .is_ok()
    }

    fn load(&self, board: &[Option<Piece>], stand: &PieceStand) -> Position {
        let pos = load_position(board, stand);
        if self.config.validate_input
            && let Err(e) = validate(&pos)
        {
            warn!("malformed position: {e}");
            self.emit(TraceEvent::InputRejected { error: e });
        }
        pos
    }

    fn emit(&self, event: TraceEvent) {
        if let Some(hook) = &self.trace {
            hook(&event);
        }
    }
}
