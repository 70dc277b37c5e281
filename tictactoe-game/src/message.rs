//! 事件与更新消息定义

use std::time::Duration;

use tictactoe_core::{Board, GameError};

use crate::session::GamePhase;

/// 进入事件循环的事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// 玩家在指定格子落子
    PlayerMove(usize),
    /// AI 计算完成（index 为 None 表示无子可下）
    OpponentMove { round: u64, index: Option<usize> },
    /// 自动重开计时到期
    Restart { round: u64 },
    /// 手动重开
    Reset,
    /// 退出
    Quit,
}

/// 事件循环发给前端的更新
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    /// 最新局面
    Board {
        board: Board,
        phase: GamePhase,
        round: u64,
    },
    /// 玩家操作被拒绝
    Rejected(GameError),
    /// 已安排自动重开
    RestartScheduled { delay: Duration },
    /// 事件循环已结束
    Closed,
}
