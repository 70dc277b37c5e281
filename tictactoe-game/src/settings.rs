//! 游戏设置模块
//!
//! 提供设置数据结构和 JSON 持久化

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tictactoe_core::DEFAULT_RESTART_DELAY_MS;

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// 作为 EnvFilter 指令使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// 游戏设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 对局结束后自动重开的延迟（毫秒）
    pub restart_delay_ms: u64,
    /// AI 落子前的等待时间（毫秒）
    pub opponent_delay_ms: u64,
    /// 对局结束后是否自动重开
    pub auto_restart: bool,
    /// 日志级别
    pub log_level: LogLevel,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            restart_delay_ms: DEFAULT_RESTART_DELAY_MS,
            opponent_delay_ms: 0,
            auto_restart: true,
            log_level: LogLevel::default(),
        }
    }
}

impl GameSettings {
    /// 获取默认设置文件路径
    pub fn settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut path| {
            path.push("tictactoe");
            path.push("settings.json");
            path
        })
    }

    /// 自动重开延迟
    pub fn restart_delay(&self) -> Duration {
        Duration::from_millis(self.restart_delay_ms)
    }

    /// AI 落子等待时间
    pub fn opponent_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_delay_ms)
    }

    /// 读取设置文件，文件不存在返回 Ok(None)
    pub fn try_load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取设置文件: {:?}", path))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("设置文件格式无效: {:?}", path))?;
        Ok(Some(settings))
    }

    /// 保存设置到指定文件
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("无法创建配置目录: {:?}", parent))?;
        }

        let content = serde_json::to_string_pretty(self).context("序列化设置失败")?;
        std::fs::write(path, content)
            .with_context(|| format!("写入设置文件失败: {:?}", path))?;

        tracing::info!("设置已保存: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = GameSettings::default();
        assert_eq!(settings.restart_delay(), Duration::from_secs(2));
        assert_eq!(settings.opponent_delay(), Duration::ZERO);
        assert!(settings.auto_restart);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = GameSettings {
            restart_delay_ms: 500,
            opponent_delay_ms: 250,
            auto_restart: false,
            log_level: LogLevel::Debug,
        };
        settings.save_to(&path).unwrap();

        assert_eq!(GameSettings::try_load_from(&path).unwrap(), Some(settings));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");

        assert_eq!(GameSettings::try_load_from(&path).unwrap(), None);
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();

        let err = GameSettings::try_load_from(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("设置文件格式无效"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "restart_delay_ms": 100 }"#).unwrap();

        let settings = GameSettings::try_load_from(&path).unwrap().unwrap();
        assert_eq!(settings.restart_delay_ms, 100);
        assert!(settings.auto_restart);
        assert_eq!(settings.log_level, LogLevel::Info);
    }

    #[test]
    fn test_log_level_names() {
        assert_eq!(LogLevel::Warn.as_str(), "warn");
        assert_eq!(LogLevel::Trace.as_str(), "trace");
    }
}
