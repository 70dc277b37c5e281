//! 井字棋 AI 引擎
//!
//! 包含:
//! - 局面判定（胜负/和棋/未结束）
//! - 完整 Minimax 搜索

mod evaluate;
mod search;

pub use evaluate::{evaluate, Evaluator};
pub use search::{select_move, AiEngine};
