//! 终端渲染
//!
//! 纯文本格式化，便于测试

use tictactoe_ai::Evaluator;
use tictactoe_core::{Board, Outcome, BOARD_SIZE};

use crate::session::GamePhase;

/// 渲染棋盘：空格显示编号（1-9），获胜连线上的棋子用 `*` 包围
pub fn render_board(board: &Board) -> String {
    let winning_line = Evaluator::winning_line(board);

    board
        .cells()
        .chunks(BOARD_SIZE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let index = row * BOARD_SIZE + col;
                    let highlighted = winning_line.is_some_and(|line| line.contains(&index));
                    match (cell, highlighted) {
                        (Some(mark), true) => format!("*{}*", mark),
                        (Some(mark), false) => format!(" {} ", mark),
                        (None, _) => format!(" {} ", index + 1),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}

/// 状态行
pub fn status_line(phase: GamePhase) -> String {
    match phase {
        GamePhase::PlayerTurn => "Your turn".to_string(),
        GamePhase::OpponentTurn => "Opponent is thinking...".to_string(),
        GamePhase::GameOver(Outcome::Tie) => "It's a tie!".to_string(),
        GamePhase::GameOver(outcome) => match outcome.winner() {
            Some(mark) => format!("Winner is: {}", mark),
            None => "Game over".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Notation;

    #[test]
    fn test_render_empty_board() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 ";
        assert_eq!(render_board(&Board::empty()), expected);
    }

    #[test]
    fn test_render_marks() {
        let board = Notation::parse("X../.O./...").unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with(" X | 2 | 3 "));
        assert!(rendered.contains(" 4 | O | 6 "));
    }

    #[test]
    fn test_render_winning_line() {
        let board = Notation::parse("OOO/XX./X..").unwrap();
        let rendered = render_board(&board);
        assert!(rendered.starts_with("*O*|*O*|*O*"));
        assert!(rendered.contains(" X | X | 6 "));
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(status_line(GamePhase::PlayerTurn), "Your turn");
        assert_eq!(status_line(GamePhase::OpponentTurn), "Opponent is thinking...");
        assert_eq!(
            status_line(GamePhase::GameOver(Outcome::OpponentWins)),
            "Winner is: O"
        );
        assert_eq!(
            status_line(GamePhase::GameOver(Outcome::PlayerWins)),
            "Winner is: X"
        );
        assert_eq!(status_line(GamePhase::GameOver(Outcome::Tie)), "It's a tie!");
    }
}
