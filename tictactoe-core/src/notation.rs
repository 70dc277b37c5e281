//! 棋盘记谱解析和生成
//!
//! 记谱格式：按行优先写出 9 个格子，行之间可选用 `/` 分隔。
//! `X` 为玩家，`O` 为 AI，`.`、`_`、`-` 为空格（大小写不敏感）。
//!
//! 示例：
//! `OO./XX./...` 与 `OO.XX....` 表示同一局面

use crate::board::Board;
use crate::constants::{BOARD_SIZE, CELL_COUNT};
use crate::error::GameError;
use crate::piece::Mark;

/// 空棋盘记谱
pub const EMPTY_NOTATION: &str = ".../.../...";

/// 记谱处理
pub struct Notation;

impl Notation {
    /// 解析记谱为棋盘
    pub fn parse(notation: &str) -> Result<Board, GameError> {
        let mut board = Board::empty();
        let mut index = 0usize;

        for c in notation.chars() {
            if c == '/' || c.is_whitespace() {
                continue;
            }

            if index >= CELL_COUNT {
                return Err(GameError::InvalidNotation {
                    reason: format!("Too many cells, expected {}", CELL_COUNT),
                });
            }

            let cell = match c {
                '.' | '_' | '-' => None,
                _ => match Mark::from_char(c) {
                    Some(mark) => Some(mark),
                    None => {
                        return Err(GameError::InvalidNotation {
                            reason: format!("Invalid cell character: {}", c),
                        })
                    }
                },
            };
            board.set(index, cell);
            index += 1;
        }

        if index != CELL_COUNT {
            return Err(GameError::InvalidNotation {
                reason: format!("Got {} cells, expected {}", index, CELL_COUNT),
            });
        }

        Ok(board)
    }

    /// 将棋盘转换为记谱（带 `/` 行分隔）
    pub fn to_string(board: &Board) -> String {
        board
            .cells()
            .chunks(BOARD_SIZE)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', |mark| mark.to_char()))
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}
