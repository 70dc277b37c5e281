//! 自动重开计时器
//!
//! 对局结束后在延迟到期时向事件循环投递一次 `GameEvent::Restart`

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::GameEvent;

/// 重开计时器
#[derive(Debug)]
pub struct RestartTimer {
    delay: Duration,
    /// 正在等待的计时任务
    pending: Option<JoinHandle<()>>,
}

impl RestartTimer {
    /// 创建计时器
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// 安排一次重开（会替换尚未触发的计时）
    ///
    /// 必须在 tokio 运行时内调用。
    pub fn schedule(&mut self, events: mpsc::Sender<GameEvent>, round: u64) {
        self.cancel();

        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(GameEvent::Restart { round }).await;
        }));
    }

    /// 取消尚未触发的计时
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    /// 是否有尚未触发的计时
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for RestartTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
