//! 输入处理
//!
//! 把终端输入的一行文本转换为事件

use tictactoe_core::Position;

use crate::message::GameEvent;

/// 输入提示
pub const INPUT_HINT: &str = "Enter 1-9 (or \"row col\") to place X, r to reset, q to quit";

/// 解析一行输入，无法识别返回 None
///
/// - `1`..`9`：按行优先编号落子
/// - `行 列`（均从 1 开始）：按坐标落子
/// - `r` / `reset`：重开
/// - `q` / `quit` / `exit`：退出
pub fn parse_input(line: &str) -> Option<GameEvent> {
    let line = line.trim().to_ascii_lowercase();

    match line.as_str() {
        "r" | "reset" => return Some(GameEvent::Reset),
        "q" | "quit" | "exit" => return Some(GameEvent::Quit),
        _ => {}
    }

    let numbers: Vec<u8> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    let index = match numbers.as_slice() {
        [cell @ 1..=9] => (*cell - 1) as usize,
        [row, col] if *row >= 1 && *col >= 1 => Position::new(row - 1, col - 1)?.to_index(),
        _ => return None,
    };

    Some(GameEvent::PlayerMove(index))
}
