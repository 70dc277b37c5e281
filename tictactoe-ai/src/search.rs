//! 搜索引擎
//!
//! 实现完整 Minimax（不剪枝、不缓存），AI 取极大，玩家取极小

use tictactoe_core::{Board, Mark, Outcome};
use tracing::debug;

use crate::evaluate::Evaluator;

/// AI 获胜得分
const WIN_SCORE: i32 = 1;

/// 玩家获胜得分
const LOSS_SCORE: i32 = -1;

/// 和棋得分
const TIE_SCORE: i32 = 0;

/// 终局得分（不按深度折扣），未结束返回 None
fn terminal_score(outcome: Outcome) -> Option<i32> {
    match outcome {
        Outcome::OpponentWins => Some(WIN_SCORE),
        Outcome::PlayerWins => Some(LOSS_SCORE),
        Outcome::Tie => Some(TIE_SCORE),
        Outcome::Ongoing => None,
    }
}

/// AI 引擎
#[derive(Debug, Default)]
pub struct AiEngine {
    nodes_searched: u64,
}

impl AiEngine {
    /// 创建新的 AI 引擎
    pub fn new() -> Self {
        Self::default()
    }

    /// 搜索最佳落子格
    ///
    /// 按索引升序尝试每个空格，只有严格更高的分数才替换当前最佳，
    /// 因此同分时取索引最小者。没有空格时返回 None。
    pub fn search(&mut self, board: &Board) -> Option<usize> {
        self.nodes_searched = 0;

        let mut best_move = None;
        let mut best_score = i32::MIN;

        for index in board.empty_cells() {
            let next = board.with_mark(index, Mark::Opponent);
            let score = self.minimax(&next, false);

            if score > best_score {
                best_score = score;
                best_move = Some(index);
            }
        }

        debug!(
            best_move = ?best_move,
            best_score,
            nodes = self.nodes_searched,
            "搜索完成"
        );

        best_move
    }

    /// Minimax 递归
    fn minimax(&mut self, board: &Board, maximizing: bool) -> i32 {
        self.nodes_searched += 1;

        if let Some(score) = terminal_score(Evaluator::evaluate(board)) {
            return score;
        }

        // 未结束的局面必有空格，所以下面的循环至少执行一次
        if maximizing {
            let mut best_score = i32::MIN;
            for index in board.empty_cells() {
                let next = board.with_mark(index, Mark::Opponent);
                best_score = best_score.max(self.minimax(&next, false));
            }
            best_score
        } else {
            let mut best_score = i32::MAX;
            for index in board.empty_cells() {
                let next = board.with_mark(index, Mark::Player);
                best_score = best_score.min(self.minimax(&next, true));
            }
            best_score
        }
    }

    /// 获取上次搜索的节点数
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }
}

/// 计算 AI 的最佳落子格
pub fn select_move(board: &Board) -> Option<usize> {
    AiEngine::new().search(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::evaluate;
    use tictactoe_core::Notation;

    fn board(notation: &str) -> Board {
        Notation::parse(notation).unwrap()
    }

    #[test]
    fn test_takes_winning_move() {
        assert_eq!(select_move(&board("OO./XX./...")), Some(2));
    }

    #[test]
    fn test_blocks_player() {
        assert_eq!(select_move(&board("XX./OO./...")), Some(2));
    }

    #[test]
    fn test_single_empty_cell() {
        assert_eq!(select_move(&board("XOX/OOX/X.O")), Some(7));
        assert_eq!(select_move(&board(".OX/XOO/OXX")), Some(0));
    }

    #[test]
    fn test_full_board_returns_none() {
        assert_eq!(select_move(&board("XOX/OXO/OXO")), None);
    }

    #[test]
    fn test_does_not_mutate_input() {
        let b = board("X../.O./..X");
        let copy = b;
        let _ = select_move(&b);
        assert_eq!(b, copy);
    }

    #[test]
    fn test_first_index_wins_ties() {
        // 空棋盘上每个格子都是和棋，同分取最小索引
        assert_eq!(select_move(&Board::empty()), Some(0));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // AI 可在 5 取胜，同时玩家威胁 2：取胜优先
        assert_eq!(select_move(&board("XX./OO./X..")), Some(5));
    }

    #[test]
    fn test_never_returns_occupied_cell() {
        let boards = [
            "X../.../...",
            ".X./.../...",
            ".../.X./...",
            "X.O/.X./...",
            "XOX/.O./..X",
        ];
        for notation in boards {
            let b = board(notation);
            let index = select_move(&b).unwrap();
            assert!(b.is_empty_cell(index), "{} -> {}", notation, index);
        }
    }

    #[test]
    fn test_nodes_counted() {
        let mut engine = AiEngine::new();
        engine.search(&board("XX./OO./..."));
        assert!(engine.nodes_searched() > 0);

        engine.search(&board("XOX/OXO/OXO"));
        assert_eq!(engine.nodes_searched(), 0);
    }

    /// 穷举玩家所有应对，AI 每步都用 select_move：玩家永远赢不了
    fn assert_player_never_wins(board: Board, player_to_move: bool) {
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            assert_ne!(outcome, Outcome::PlayerWins, "玩家获胜: {}", Notation::to_string(&board));
            return;
        }

        if player_to_move {
            for index in board.empty_cells() {
                assert_player_never_wins(board.with_mark(index, Mark::Player), false);
            }
        } else {
            let index = select_move(&board).expect("未结束的局面必有空格");
            assert!(board.is_empty_cell(index));
            assert_player_never_wins(board.with_mark(index, Mark::Opponent), true);
        }
    }

    #[test]
    fn test_opponent_first_never_loses() {
        assert_player_never_wins(Board::empty(), false);
    }

    #[test]
    fn test_player_first_never_loses() {
        assert_player_never_wins(Board::empty(), true);
    }
}
