//! 事件循环
//!
//! 串行处理 `GameEvent`，驱动 `GameSession` 状态机，并把局面推送给前端。
//! AI 计算放在阻塞线程池中执行；计算期间如果对局被重开，结果按局数丢弃。

use std::time::Duration;

use tictactoe_ai::select_move;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::message::{GameEvent, GameUpdate};
use crate::session::{GamePhase, GameSession};
use crate::settings::GameSettings;
use crate::timer::RestartTimer;

/// 事件通道容量
const EVENT_CHANNEL_CAPACITY: usize = 32;

/// 事件循环
pub struct GameLoop {
    session: GameSession,
    restart_timer: RestartTimer,
    auto_restart: bool,
    opponent_delay: Duration,
    /// 弱引用：前端全部断开后通道即可关闭
    events_tx: mpsc::WeakSender<GameEvent>,
    events_rx: mpsc::Receiver<GameEvent>,
    updates: mpsc::Sender<GameUpdate>,
}

impl GameLoop {
    /// 创建事件循环，返回循环本体和事件发送端
    pub fn new(
        settings: &GameSettings,
        updates: mpsc::Sender<GameUpdate>,
    ) -> (Self, mpsc::Sender<GameEvent>) {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        let game_loop = Self {
            session: GameSession::new(),
            restart_timer: RestartTimer::new(settings.restart_delay()),
            auto_restart: settings.auto_restart,
            opponent_delay: settings.opponent_delay(),
            events_tx: events_tx.downgrade(),
            events_rx,
            updates,
        };

        (game_loop, events_tx)
    }

    /// 运行直到收到 `Quit` 或所有发送端关闭，返回最终的对局
    pub async fn run(mut self) -> GameSession {
        info!(round = self.session.round(), "新对局开始");
        self.publish_board().await;

        while let Some(event) = self.events_rx.recv().await {
            if !self.handle(event).await {
                break;
            }
        }

        self.restart_timer.cancel();
        let _ = self.updates.send(GameUpdate::Closed).await;
        info!("事件循环结束");
        self.session
    }

    /// 处理单个事件，返回 false 表示退出
    async fn handle(&mut self, event: GameEvent) -> bool {
        match event {
            GameEvent::PlayerMove(index) => self.handle_player_move(index).await,
            GameEvent::OpponentMove { round, index } => {
                self.handle_opponent_move(round, index).await
            }
            GameEvent::Restart { round } => self.handle_restart(round).await,
            GameEvent::Reset => {
                self.restart_timer.cancel();
                self.session.reset();
                self.publish_board().await;
            }
            GameEvent::Quit => return false,
        }
        true
    }

    async fn handle_player_move(&mut self, index: usize) {
        match self.session.player_move(index) {
            Ok(phase) => {
                self.publish_board().await;
                self.after_move(phase).await;
            }
            Err(e) => {
                warn!(index, "玩家落子被拒绝: {}", e);
                let _ = self.updates.send(GameUpdate::Rejected(e)).await;
            }
        }
    }

    async fn handle_opponent_move(&mut self, round: u64, index: Option<usize>) {
        // 检查局数，确保计算期间没有重开
        if round != self.session.round() {
            debug!(round, current = self.session.round(), "丢弃过期的 AI 落子");
            return;
        }

        let Some(index) = index else {
            warn!("AI 无法找到可落子的格子");
            return;
        };

        match self.session.apply_opponent_move(index) {
            Ok(phase) => {
                self.publish_board().await;
                self.after_move(phase).await;
            }
            Err(e) => error!(index, "AI 落子失败: {}", e),
        }
    }

    async fn handle_restart(&mut self, round: u64) {
        if round != self.session.round() || !self.session.phase().is_over() {
            debug!(round, "丢弃过期的重开计时");
            return;
        }
        self.session.reset();
        self.publish_board().await;
    }

    /// 落子后的后续调度：轮到 AI 则启动计算，结束则安排重开
    async fn after_move(&mut self, phase: GamePhase) {
        match phase {
            GamePhase::PlayerTurn => {}
            GamePhase::OpponentTurn => self.spawn_opponent(),
            GamePhase::GameOver(_) => {
                if !self.auto_restart {
                    return;
                }
                let Some(events) = self.events_tx.upgrade() else {
                    return;
                };
                self.restart_timer.schedule(events, self.session.round());
                let delay = self.restart_timer.delay();
                let _ = self.updates.send(GameUpdate::RestartScheduled { delay }).await;
            }
        }
    }

    /// 在后台计算 AI 落子，结果作为事件投递回循环
    fn spawn_opponent(&self) {
        let Some(events) = self.events_tx.upgrade() else {
            return;
        };
        let board = *self.session.board();
        let round = self.session.round();
        let delay = self.opponent_delay;

        tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            match tokio::task::spawn_blocking(move || select_move(&board)).await {
                Ok(index) => {
                    let _ = events.send(GameEvent::OpponentMove { round, index }).await;
                }
                Err(e) => error!("AI 计算任务失败: {}", e),
            }
        });
    }

    async fn publish_board(&self) {
        let update = GameUpdate::Board {
            board: *self.session.board(),
            phase: self.session.phase(),
            round: self.session.round(),
        };
        let _ = self.updates.send(update).await;
    }
}
