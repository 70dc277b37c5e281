//! 对局结果

use serde::{Deserialize, Serialize};

use crate::piece::Mark;

/// 对局结果（始终由棋盘重新计算，不单独保存）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// 尚未结束
    Ongoing,
    /// 玩家获胜
    PlayerWins,
    /// AI 获胜
    OpponentWins,
    /// 和棋（下满且无人连成一线）
    Tie,
}

impl Outcome {
    /// 指定标记获胜时的结果
    pub fn win_for(mark: Mark) -> Outcome {
        match mark {
            Mark::Player => Outcome::PlayerWins,
            Mark::Opponent => Outcome::OpponentWins,
        }
    }

    /// 是否已结束
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::PlayerWins => Some(Mark::Player),
            Outcome::OpponentWins => Some(Mark::Opponent),
            Outcome::Ongoing | Outcome::Tie => None,
        }
    }
}
