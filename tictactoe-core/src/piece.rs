//! 棋子（标记）与坐标定义

use serde::{Deserialize, Serialize};

use crate::constants::BOARD_SIZE;

/// 落子标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// 玩家（X，先手）
    Player,
    /// AI 对手（O，后手）
    Opponent,
}

impl Mark {
    /// 获取对方标记
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }

    /// 显示字符
    pub fn to_char(&self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }

    /// 从字符解析（大小写均可）
    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'x' | 'X' => Some(Mark::Player),
            'o' | 'O' => Some(Mark::Opponent),
            _ => None,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// 棋盘坐标（行、列均从 0 开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// 创建坐标，越界返回 None
    pub fn new(row: u8, col: u8) -> Option<Self> {
        let pos = Self { row, col };
        if pos.is_valid() {
            Some(pos)
        } else {
            None
        }
    }

    /// 创建坐标（不检查边界）
    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// 检查坐标是否在棋盘内
    pub fn is_valid(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    /// 转换为行优先的格子索引
    pub fn to_index(&self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_opponent() {
        assert_eq!(Mark::Player.opponent(), Mark::Opponent);
        assert_eq!(Mark::Opponent.opponent(), Mark::Player);
    }

    #[test]
    fn test_mark_chars() {
        assert_eq!(Mark::Player.to_char(), 'X');
        assert_eq!(Mark::Opponent.to_char(), 'O');
        assert_eq!(Mark::from_char('x'), Some(Mark::Player));
        assert_eq!(Mark::from_char('O'), Some(Mark::Opponent));
        assert_eq!(Mark::from_char('.'), None);
    }

    #[test]
    fn test_position_index() {
        let pos = Position::new(1, 2).unwrap();
        assert_eq!(pos.to_index(), 5);
        assert_eq!(Position::new_unchecked(2, 2).to_index(), 8);
    }

    #[test]
    fn test_position_bounds() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(3, 0).is_none());
        assert!(Position::new(0, 3).is_none());
    }
}
