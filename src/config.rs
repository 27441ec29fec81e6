//! Runtime configuration: compiled-in defaults, overridable from the environment
//! and then from the command line.

use std::path::PathBuf;

use crate::api::{LoadTuning, API_BASE};
use crate::fetch::RetryPolicy;
use crate::state::DEFAULT_HISTORY_LIMIT;

#[derive(Debug, Clone, PartialEq)]
pub struct LogConfig {
    /// Write a log file at all.
    pub enabled: bool,
    pub dir: PathBuf,
    pub file_name: String,
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: PathBuf::from("logs"),
            file_name: "pokedex.log".to_string(),
            level: "pokedex=info,warn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_base: String,
    pub retry: RetryPolicy,
    pub tuning: LoadTuning,
    pub history_limit: usize,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: API_BASE.to_string(),
            retry: RetryPolicy::default(),
            tuning: LoadTuning::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Defaults with `POKEDEX_*` environment overrides applied.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(base) = lookup("POKEDEX_API_BASE") {
            config.api_base = base;
        }
        if let Some(dir) = lookup("POKEDEX_LOG_DIR") {
            config.log.dir = PathBuf::from(dir);
        }
        if let Some(enabled) = lookup("POKEDEX_LOG") {
            config.log.enabled = enabled != "0";
        }
        if let Some(limit) = lookup("POKEDEX_HISTORY_LIMIT").and_then(|v| v.parse().ok()) {
            config.history_limit = limit;
        }
        if let Some(size) = lookup("POKEDEX_CHUNK_SIZE").and_then(|v| v.parse().ok()) {
            config.tuning.chunk_size = size;
        }
        config
    }

    pub fn log_file(&self) -> PathBuf {
        self.log.dir.join(&self.log.file_name)
    }
}
