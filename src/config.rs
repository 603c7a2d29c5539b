//! Application configuration, read once from the environment at start-up.
//!
//! # Environment Variables
//!
//! - `KEYWORD_MATCH_DATA_DIR` / `KEYWORD_MATCH_NO_SAVE`: see [`StoreConfig`]
//! - `KEYWORD_MATCH_SEED`: Fixed RNG seed (default: derived from the clock)
//! - `KEYWORD_MATCH_LOG_PATH`: Append logs to this file (default: no logging)
//! - `KEYWORD_MATCH_LOG`: Log filter directives (default: "info")

use std::path::PathBuf;

use crate::store::StoreConfig;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub seed: Option<u32>,
    /// The terminal is in raw mode, so logs only ever go to a file.
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            seed: None,
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any variable source (`key -> value`).
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let seed = var("KEYWORD_MATCH_SEED").and_then(|s| s.trim().parse().ok());

        let log_path = var("KEYWORD_MATCH_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) });

        let log_filter = var("KEYWORD_MATCH_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            store: StoreConfig::from_lookup(&var),
            seed,
            log_path,
            log_filter,
        }
    }
}
