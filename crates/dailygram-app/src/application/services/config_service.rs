use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::RwLock;
use tracing::{info, warn};

use dailygram_infrastructure::config::LeaderboardConfig;

const CONFIG_FILE_NAME: &str = "app_config.json";

/// Log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 1,
    Warn = 2,
    #[default]
    Info = 3,
    Debug = 4,
    Trace = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            1 => LogLevel::Error,
            2 => LogLevel::Warn,
            4 => LogLevel::Debug,
            5 => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

/// Persistent configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: LogLevel,
    pub leaderboard: LeaderboardConfig,
}

/// Application configuration service
///
/// A missing or unreadable config file falls back to defaults; nothing is
/// written until a setter is called.
pub struct ConfigService {
    log_level: AtomicU8,
    leaderboard: RwLock<LeaderboardConfig>,
    config_path: PathBuf,
}

impl ConfigService {
    /// `~/.config/dailygram` on Linux, the platform equivalent elsewhere.
    pub fn default_config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("dailygram"))
    }

    pub fn new(config_dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(config_dir)?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let config = load_config(&config_path);

        info!("Config loaded from: {:?}", config_path);
        info!("Initial log level: {}", config.log_level.as_str());

        Ok(Self {
            log_level: AtomicU8::new(config.log_level as u8),
            leaderboard: RwLock::new(config.leaderboard),
            config_path,
        })
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn get_log_level(&self) -> LogLevel {
        LogLevel::from_u8(self.log_level.load(Ordering::Relaxed))
    }

    /// Persisted; takes effect on the next start.
    pub fn set_log_level(&self, level: LogLevel) -> Result<()> {
        info!("Changing log level to: {}", level.as_str());
        self.log_level.store(level as u8, Ordering::Relaxed);
        self.persist()
    }

    pub fn leaderboard_config(&self) -> LeaderboardConfig {
        self.leaderboard
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn set_leaderboard_config(&self, config: LeaderboardConfig) -> Result<()> {
        config.validate()?;
        *self
            .leaderboard
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = config;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let config = AppConfig {
            log_level: self.get_log_level(),
            leaderboard: self.leaderboard_config(),
        };

        let content = serde_json::to_string_pretty(&config)?;
        std::fs::write(&self.config_path, content)?;

        info!("Config saved to: {:?}", self.config_path);
        Ok(())
    }
}

fn load_config(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| Ok(serde_json::from_str::<AppConfig>(&content)?));

    let mut config = match parsed {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring unreadable config {:?}: {}", path, e);
            return AppConfig::default();
        }
    };

    if let Err(e) = config.leaderboard.validate() {
        warn!("Ignoring invalid leaderboard config: {}", e);
        config.leaderboard = LeaderboardConfig::default();
    }

    config
}
