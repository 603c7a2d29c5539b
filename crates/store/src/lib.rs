//! Store module - best-effort local persistence for the quiz
//!
//! The quiz keeps two independent records, each a small JSON document named
//! after a fixed identifier:
//!
//! - `b1_used_keywords.json`: object mapping keyword to last-shown epoch ms
//! - `b1_keyword_game_scores.json`: array of `{ "time": <ms>, "date": "<ISO-8601>" }`
//!
//! Writes go through a temporary file in the same directory and are renamed
//! into place, so a crash mid-write leaves the previous document intact.
//! Reads never fail: a missing or unreadable record loads as empty.
//!
//! # Environment Variables
//!
//! - `KEYWORD_MATCH_DATA_DIR`: Directory holding the records (default: ".keyword-match")
//! - `KEYWORD_MATCH_NO_SAVE`: Set to "1" or "true" to keep everything in memory

pub mod config;
pub mod error;
pub mod json;

pub use keyword_match_core as core;
pub use keyword_match_types as types;

pub use config::StoreConfig;
pub use error::StoreError;
pub use json::JsonFileStore;

use keyword_match_core::{MemoryStore, QuizStore};

/// Open the store described by `config`.
pub fn open_store(config: &StoreConfig) -> Box<dyn QuizStore> {
    if config.disabled {
        tracing::info!("saving disabled, using in-memory store");
        Box::new(MemoryStore::default())
    } else {
        tracing::info!(dir = %config.data_dir.display(), "using json file store");
        Box::new(JsonFileStore::new(&config.data_dir))
    }
}
