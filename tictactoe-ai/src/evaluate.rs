//! 局面判定（胜负/和棋/未结束）

use tictactoe_core::{Board, Line, Outcome, LINES};

/// 评估器
pub struct Evaluator;

impl Evaluator {
    /// 判定局面结果
    ///
    /// 按 `LINES` 的声明顺序扫描，第一条三格同色的连线决定胜方；
    /// 无连线且下满为和棋，否则未结束。不检查非法局面（双方同时连成一线）。
    pub fn evaluate(board: &Board) -> Outcome {
        if let Some(line) = Self::winning_line(board) {
            if let Some(mark) = board.get(line[0]) {
                return Outcome::win_for(mark);
            }
        }

        if board.is_full() {
            Outcome::Tie
        } else {
            Outcome::Ongoing
        }
    }

    /// 第一条连成的线
    pub fn winning_line(board: &Board) -> Option<Line> {
        LINES.iter().copied().find(|&[a, b, c]| {
            board.get(a).is_some() && board.get(a) == board.get(b) && board.get(a) == board.get(c)
        })
    }
}

/// 判定局面结果
pub fn evaluate(board: &Board) -> Outcome {
    Evaluator::evaluate(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, Notation};

    fn board(notation: &str) -> Board {
        Notation::parse(notation).unwrap()
    }

    #[test]
    fn test_empty_board_is_ongoing() {
        assert_eq!(evaluate(&Board::empty()), Outcome::Ongoing);
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        assert_eq!(evaluate(&board("XOX/OXO/OXO")), Outcome::Tie);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for mark in [Mark::Player, Mark::Opponent] {
                let mut b = Board::empty();
                for index in line {
                    b.set(index, Some(mark));
                }
                assert_eq!(evaluate(&b), Outcome::win_for(mark), "line {:?}", line);
                assert_eq!(Evaluator::winning_line(&b), Some(line));
            }
        }
    }

    #[test]
    fn test_partial_board_is_ongoing() {
        assert_eq!(evaluate(&board("XX./OO./...")), Outcome::Ongoing);
        assert_eq!(evaluate(&board("XOX/OXO/O..")), Outcome::Ongoing);
        assert_eq!(Evaluator::winning_line(&board("XOX/OXO/O..")), None);
    }

    #[test]
    fn test_win_on_full_board_beats_tie() {
        // 最后一步连成一线且恰好下满，应判胜而不是和棋
        let b = board("XOX/OXO/OXX");
        assert!(b.is_full());
        assert_eq!(evaluate(&b), Outcome::PlayerWins);
    }

    #[test]
    fn test_first_line_in_scan_order_wins() {
        // 行先于列扫描：第一行与第一列同时成线时返回第一行
        let b = board("XXX/X../X..");
        assert_eq!(Evaluator::winning_line(&b), Some([0, 1, 2]));
        assert_eq!(evaluate(&b), Outcome::PlayerWins);
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        assert_eq!(evaluate(&board("XXO/.../...")), Outcome::Ongoing);
    }
}
