//! 統合テスト共通ヘルパー

#![allow(dead_code)]

use shogi_legality::{Piece, PieceStand, Square};

/// テスト用ロガーの初期化（RUST_LOG=trace で判定の詳細が出る）
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// 9行の文字列から盤面を作る（'.' は空マス、左から筋0..8、上から段0..8）
pub fn board(rows: [&str; 9]) -> Vec<Option<Piece>> {
    rows.iter().flat_map(|row| row.chars().map(Piece::from_char)).collect()
}

pub fn sq(file: i32, rank: i32) -> Square {
    Square::from_coords(file, rank).unwrap()
}

pub fn stand(entries: &[(Piece, i32)]) -> PieceStand {
    entries.iter().copied().collect()
}

pub const STARTPOS: [&str; 9] = [
    "lnsgkgsnl",
    ".r.....b.",
    "ppppppppp",
    ".........",
    ".........",
    ".........",
    "PPPPPPPPP",
    ".B.....R.",
    "LNSGKGSNL",
];
