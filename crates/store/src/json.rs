//! JSON file store.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::config::record_path;
use crate::core::{QuizStore, ScoreRecord, UsageMap};
use crate::error::StoreError;
use crate::types::{SCORES_KEY, USED_KEYWORDS_KEY};

/// On-disk shape of one score.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
struct ScoreEntry {
    time: u64,
    date: DateTime<Utc>,
}

impl From<&ScoreRecord> for ScoreEntry {
    fn from(record: &ScoreRecord) -> Self {
        Self {
            time: record.elapsed_ms,
            date: record.completed_at,
        }
    }
}

impl From<ScoreEntry> for ScoreRecord {
    fn from(entry: ScoreEntry) -> Self {
        ScoreRecord::new(entry.time, entry.date)
    }
}

/// Keeps each record as `<dir>/<identifier>.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn usage_path(&self) -> PathBuf {
        record_path(&self.dir, USED_KEYWORDS_KEY)
    }

    pub fn scores_path(&self) -> PathBuf {
        record_path(&self.dir, SCORES_KEY)
    }

    /// Read a record, treating anything unreadable as absent.
    fn load_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> T {
        match read_json(path) {
            Ok(value) => value,
            Err(e) if e.is_not_found() => T::default(),
            Err(e) => {
                tracing::warn!("ignoring unreadable record: {e}");
                T::default()
            }
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `value` via a temporary file in the same directory.
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent).map_err(io_err)?;

    let temp = NamedTempFile::new_in(parent).map_err(io_err)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        serde_json::to_writer(&mut writer, value).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        writer.flush().map_err(io_err)?;
    }

    temp.persist(path).map_err(|source| StoreError::Persist {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

impl QuizStore for JsonFileStore {
    fn load_usage(&mut self) -> UsageMap {
        let raw: BTreeMap<String, u64> = self.load_or_default(&self.usage_path());
        raw.into_iter().collect()
    }

    fn save_usage(&mut self, usage: &UsageMap) -> Result<()> {
        let raw: BTreeMap<&str, u64> = usage.iter().collect();
        write_json(&self.usage_path(), &raw)?;
        Ok(())
    }

    fn load_scores(&mut self) -> Vec<ScoreRecord> {
        // Decoded per entry: a malformed entry is skipped, not the whole list.
        let raw: Vec<serde_json::Value> = self.load_or_default(&self.scores_path());
        let total = raw.len();
        let mut entries: Vec<ScoreEntry> = raw
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect();
        if entries.len() < total {
            tracing::warn!(skipped = total - entries.len(), "ignoring malformed score entries");
        }
        entries.sort_by_key(|e| e.time);
        entries.into_iter().map(ScoreRecord::from).collect()
    }

    fn save_scores(&mut self, scores: &[ScoreRecord]) -> Result<()> {
        let mut entries: Vec<ScoreEntry> = scores.iter().map(ScoreEntry::from).collect();
        entries.sort_by_key(|e| e.time);
        write_json(&self.scores_path(), &entries)?;
        Ok(())
    }
}
