//! Persistence seam for a quiz session.
//!
//! The core never touches the filesystem. A session loads its usage map and
//! score list once through [`QuizStore`] and writes them back whenever they
//! change. Loads cannot fail: implementations degrade missing or unreadable
//! data to an empty default.

use anyhow::Result;

use crate::scoring::ScoreRecord;
use crate::selector::UsageMap;

pub trait QuizStore {
    fn load_usage(&mut self) -> UsageMap;
    fn save_usage(&mut self, usage: &UsageMap) -> Result<()>;
    fn load_scores(&mut self) -> Vec<ScoreRecord>;
    fn save_scores(&mut self, scores: &[ScoreRecord]) -> Result<()>;
}

impl<T: QuizStore + ?Sized> QuizStore for Box<T> {
    fn load_usage(&mut self) -> UsageMap {
        (**self).load_usage()
    }

    fn save_usage(&mut self, usage: &UsageMap) -> Result<()> {
        (**self).save_usage(usage)
    }

    fn load_scores(&mut self) -> Vec<ScoreRecord> {
        (**self).load_scores()
    }

    fn save_scores(&mut self, scores: &[ScoreRecord]) -> Result<()> {
        (**self).save_scores(scores)
    }
}

/// Store that keeps everything in memory (tests, or saving disabled).
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub usage: UsageMap,
    pub scores: Vec<ScoreRecord>,
}

impl QuizStore for MemoryStore {
    fn load_usage(&mut self) -> UsageMap {
        self.usage.clone()
    }

    fn save_usage(&mut self, usage: &UsageMap) -> Result<()> {
        self.usage = usage.clone();
        Ok(())
    }

    fn load_scores(&mut self) -> Vec<ScoreRecord> {
        self.scores.clone()
    }

    fn save_scores(&mut self, scores: &[ScoreRecord]) -> Result<()> {
        self.scores = scores.to_vec();
        Ok(())
    }
}
