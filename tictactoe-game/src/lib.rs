//! 井字棋对局层
//!
//! 包含:
//! - 对局状态机
//! - 自动重开计时器
//! - 事件循环
//! - 终端输入与渲染
//! - 游戏设置

pub mod game_loop;
pub mod input;
pub mod message;
pub mod render;
pub mod session;
pub mod settings;
pub mod timer;

pub use game_loop::GameLoop;
pub use message::{GameEvent, GameUpdate};
pub use session::{GamePhase, GameSession};
pub use settings::{GameSettings, LogLevel};
pub use timer::RestartTimer;
