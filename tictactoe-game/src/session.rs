//! 对局状态机
//!
//! 玩家（X）总是先手。每次落子后重新判定局面：
//! 未结束则轮到对方，已结束则进入 `GameOver`。

use tictactoe_ai::{evaluate, select_move};
use tictactoe_core::{Board, GameError, Mark, Outcome, Result};
use tracing::{debug, error, info};

/// 对局阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// 等待玩家落子
    PlayerTurn,
    /// 等待 AI 落子
    OpponentTurn,
    /// 对局结束
    GameOver(Outcome),
}

impl GamePhase {
    /// 是否已结束
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver(_))
    }
}

/// 一局游戏
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    phase: GamePhase,
    /// 最后一步 (标记, 格子)
    last_move: Option<(Mark, usize)>,
    /// 局数，每次重开 +1，用于丢弃过期的异步结果
    round: u64,
}

impl GameSession {
    /// 开始第一局
    pub fn new() -> Self {
        Self {
            board: Board::empty(),
            phase: GamePhase::PlayerTurn,
            last_move: None,
            round: 1,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn last_move(&self) -> Option<(Mark, usize)> {
        self.last_move
    }

    /// 当前局面结果（每次从棋盘重新计算）
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// 是否轮到玩家
    pub fn is_player_turn(&self) -> bool {
        self.phase == GamePhase::PlayerTurn
    }

    /// 玩家落子
    pub fn player_move(&mut self, index: usize) -> Result<GamePhase> {
        match self.phase {
            GamePhase::PlayerTurn => self.place(index, Mark::Player),
            GamePhase::OpponentTurn => Err(GameError::NotYourTurn),
            GamePhase::GameOver(_) => Err(GameError::GameOver),
        }
    }

    /// 应用 AI 已算好的落子
    pub fn apply_opponent_move(&mut self, index: usize) -> Result<GamePhase> {
        match self.phase {
            GamePhase::OpponentTurn => self.place(index, Mark::Opponent),
            GamePhase::PlayerTurn => Err(GameError::NotYourTurn),
            GamePhase::GameOver(_) => Err(GameError::GameOver),
        }
    }

    /// 同步计算并执行 AI 落子，不是 AI 回合或无子可下时返回 None
    pub fn opponent_move(&mut self) -> Option<usize> {
        if self.phase != GamePhase::OpponentTurn {
            return None;
        }
        let index = select_move(&self.board)?;
        match self.place(index, Mark::Opponent) {
            Ok(_) => Some(index),
            Err(e) => {
                error!(index, "AI 落子失败: {}", e);
                None
            }
        }
    }

    /// 重开一局
    pub fn reset(&mut self) {
        self.board.clear();
        self.phase = GamePhase::PlayerTurn;
        self.last_move = None;
        self.round += 1;
        info!(round = self.round, "新对局开始");
    }

    fn place(&mut self, index: usize, mark: Mark) -> Result<GamePhase> {
        self.board.place(index, mark)?;
        self.last_move = Some((mark, index));
        debug!(round = self.round, %mark, index, "落子");

        let outcome = evaluate(&self.board);
        self.phase = if outcome.is_terminal() {
            info!(round = self.round, ?outcome, "对局结束");
            GamePhase::GameOver(outcome)
        } else {
            match mark {
                Mark::Player => GamePhase::OpponentTurn,
                Mark::Opponent => GamePhase::PlayerTurn,
            }
        };

        Ok(self.phase)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
