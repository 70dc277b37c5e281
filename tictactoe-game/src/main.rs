use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_game::input::{parse_input, INPUT_HINT};
use tictactoe_game::render::{render_board, status_line};
use tictactoe_game::{GameEvent, GameLoop, GameSettings, GameUpdate, LogLevel};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 终端井字棋：玩家执 X 先手，AI 执 O
#[derive(Debug, Parser)]
#[command(name = "tictactoe", version)]
struct Args {
    /// 设置文件路径（默认位于系统配置目录）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 对局结束后自动重开的延迟（毫秒）
    #[arg(long)]
    restart_delay_ms: Option<u64>,

    /// AI 落子前的等待时间（毫秒）
    #[arg(long)]
    opponent_delay_ms: Option<u64>,

    /// 对局结束后不自动重开
    #[arg(long)]
    no_auto_restart: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// 把生效的设置（含命令行覆盖）写回设置文件
    #[arg(long)]
    save_settings: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 先读设置再初始化日志，加载失败的提示在日志就绪后补记
    let path = args.config.clone().or_else(GameSettings::settings_path);
    let loaded = match &path {
        Some(path) => GameSettings::try_load_from(path),
        None => Ok(None),
    };
    let mut settings = match &loaded {
        Ok(Some(settings)) => settings.clone(),
        _ => GameSettings::default(),
    };
    apply_overrides(&mut settings, &args);

    init_tracing(settings.log_level)?;
    match loaded {
        Ok(Some(_)) => {
            if let Some(path) = &path {
                info!("已加载设置: {}", path.display());
            }
        }
        Ok(None) => info!("设置文件不存在，使用默认设置"),
        Err(e) => warn!("{:#}，使用默认设置", e),
    }

    if args.save_settings {
        let path = path.context("无法获取配置目录")?;
        settings.save_to(&path)?;
    }

    let (updates_tx, mut updates) = mpsc::channel(32);
    let (game_loop, events) = GameLoop::new(&settings, updates_tx);
    tokio::spawn(game_loop.run());
    tokio::spawn(read_input(events));

    println!("{}", INPUT_HINT);
    while let Some(update) = updates.recv().await {
        match update {
            GameUpdate::Board { board, phase, round } => {
                println!(
                    "\nGame #{}\n{}\n{}",
                    round,
                    render_board(&board),
                    status_line(phase)
                );
            }
            GameUpdate::Rejected(e) => println!("{}", e),
            GameUpdate::RestartScheduled { delay } => {
                println!("New game in {:.1}s (r to start now)", delay.as_secs_f32());
            }
            GameUpdate::Closed => break,
        }
    }

    Ok(())
}

fn apply_overrides(settings: &mut GameSettings, args: &Args) {
    if let Some(ms) = args.restart_delay_ms {
        settings.restart_delay_ms = ms;
    }
    if let Some(ms) = args.opponent_delay_ms {
        settings.opponent_delay_ms = ms;
    }
    if args.no_auto_restart {
        settings.auto_restart = false;
    }
    if let Some(level) = args.log_level {
        settings.log_level = level;
    }
}

/// 初始化日志（输出到 stderr，避免与棋盘混在一起）
fn init_tracing(level: LogLevel) -> Result<()> {
    let level = level.as_str();
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!(
            "tictactoe={level},tictactoe_game={level},tictactoe_ai={level}"
        ))
    })?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
    Ok(())
}

/// 读取标准输入并转换为事件，EOF 或退出命令时结束
async fn read_input(events: mpsc::Sender<GameEvent>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let event = match lines.next_line().await {
            Ok(Some(line)) => match parse_input(&line) {
                Some(event) => event,
                None => {
                    println!("{}", INPUT_HINT);
                    continue;
                }
            },
            Ok(None) => GameEvent::Quit,
            Err(e) => {
                warn!("读取输入失败: {}", e);
                GameEvent::Quit
            }
        };

        let quit = event == GameEvent::Quit;
        if events.send(event).await.is_err() || quit {
            break;
        }
    }
}
