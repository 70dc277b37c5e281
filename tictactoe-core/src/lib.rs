//! 井字棋共享类型库
//!
//! 包含:
//! - 棋盘、标记、坐标等核心数据结构
//! - 连线常量与对局结果
//! - 棋盘记谱格式
//! - 错误类型

mod board;
mod constants;
mod error;
mod notation;
mod outcome;
mod piece;

pub use board::Board;
pub use constants::*;
pub use error::{GameError, Result};
pub use notation::{Notation, EMPTY_NOTATION};
pub use outcome::Outcome;
pub use piece::{Mark, Position};
