//! 棋盘常量定义

/// 棋盘边长（行数 = 列数）
pub const BOARD_SIZE: usize = 3;

/// 格子总数
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// 一条连线（三个格子索引）
pub type Line = [usize; 3];

/// 全部 8 条连线，按声明顺序：行（上到下）、列（左到右）、两条对角线
///
/// 胜负判定按此顺序扫描，先匹配者为准。
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 对局结束后自动重开的默认延迟（毫秒）
pub const DEFAULT_RESTART_DELAY_MS: u64 = 2000;
