//! 棋盘状态

use serde::{Deserialize, Serialize};

use crate::constants::CELL_COUNT;
use crate::error::GameError;
use crate::piece::Mark;

/// 3x3 棋盘，索引为 row * 3 + col
///
/// 固定长度数组保证棋盘永远恰好 9 格；棋盘是 `Copy` 的，搜索时按值复制即可。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// 创建空棋盘
    pub fn empty() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// 从 9 个格子创建棋盘
    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// 全部格子
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// 获取指定格子，越界返回 None
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// 设置指定格子（不检查规则，越界忽略）
    pub fn set(&mut self, index: usize, mark: Option<Mark>) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = mark;
        }
    }

    /// 在空格落子
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), GameError> {
        match self.cells.get(index) {
            None => Err(GameError::CellOutOfRange { index }),
            Some(Some(_)) => Err(GameError::CellOccupied { index }),
            Some(None) => {
                self.cells[index] = Some(mark);
                Ok(())
            }
        }
    }

    /// 返回在指定格子落子后的新棋盘（原棋盘不变）
    pub fn with_mark(&self, index: usize, mark: Mark) -> Board {
        let mut next = *self;
        next.set(index, Some(mark));
        next
    }

    /// 格子是否为空（越界视为非空）
    pub fn is_empty_cell(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// 按索引升序列出所有空格
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    /// 棋盘是否已下满
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// 棋盘是否全空
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// 统计某方的落子数
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// 清空棋盘
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }
}
