//! 错误类型定义

use thiserror::Error;

/// 对局规则错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// 格子索引越界
    #[error("Cell index out of range: {index}")]
    CellOutOfRange { index: usize },

    /// 格子已有棋子
    #[error("Cell {index} is already taken")]
    CellOccupied { index: usize },

    /// 不是你的回合
    #[error("Not your turn")]
    NotYourTurn,

    /// 游戏已结束
    #[error("Game is already over")]
    GameOver,

    /// 无效的棋盘记谱
    #[error("Invalid board notation: {reason}")]
    InvalidNotation { reason: String },
}

/// 对局操作结果类型
pub type Result<T> = std::result::Result<T, GameError>;
