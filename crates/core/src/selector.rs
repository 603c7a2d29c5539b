//! Round selector - least-recently-shown content selection
//!
//! Every entry carries the epoch-millisecond time it was last dealt (0 when it
//! has never been dealt). A round takes the [`ROUND_SIZE`] stalest entries and
//! stamps them with the current time, which spreads rounds evenly across the
//! whole content set without remembering any history beyond one timestamp per
//! keyword.

use std::collections::{BTreeMap, HashSet};

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::{KeywordEntry, ROUND_SIZE};

/// The entries dealt for one round, in slot order.
pub type RoundState = ArrayVec<KeywordEntry, ROUND_SIZE>;

/// Keyword -> last-shown epoch-millisecond timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageMap {
    last_used: BTreeMap<String, u64>,
}

impl UsageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last time `keyword` was dealt, or 0 if never.
    pub fn last_used(&self, keyword: &str) -> u64 {
        self.last_used.get(keyword).copied().unwrap_or(0)
    }

    pub fn stamp(&mut self, keyword: &str, now_ms: u64) {
        self.last_used.insert(keyword.to_owned(), now_ms);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.last_used.iter().map(|(k, &v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.last_used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_used.is_empty()
    }
}

impl FromIterator<(String, u64)> for UsageMap {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        Self {
            last_used: iter.into_iter().collect(),
        }
    }
}

/// Pick the entries for a new round and stamp them in `usage`.
///
/// Entries are deduplicated by keyword. With at least [`ROUND_SIZE`] distinct
/// keywords the result is the stalest [`ROUND_SIZE`] of them; ties are broken
/// randomly. With fewer, the whole set is shuffled and returned.
pub fn select_round(
    content: &[KeywordEntry],
    usage: &mut UsageMap,
    now_ms: u64,
    rng: &mut SimpleRng,
) -> RoundState {
    let mut seen = HashSet::new();
    let mut candidates: Vec<&KeywordEntry> = content
        .iter()
        .filter(|entry| seen.insert(entry.keyword.as_ref()))
        .collect();

    // Shuffle first so the stable sort below orders equal timestamps randomly.
    rng.shuffle(&mut candidates);

    if candidates.len() >= ROUND_SIZE {
        candidates.sort_by_key(|entry| usage.last_used(&entry.keyword));
    } else {
        tracing::debug!(
            available = candidates.len(),
            "content set smaller than a round, dealing a shuffled set"
        );
    }

    let round: RoundState = candidates
        .into_iter()
        .take(ROUND_SIZE)
        .cloned()
        .collect();

    for entry in &round {
        usage.stamp(&entry.keyword, now_ms);
    }

    tracing::debug!(
        keywords = ?round.iter().map(|e| e.keyword.as_ref()).collect::<Vec<_>>(),
        "round selected"
    );
    round
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::CELL_BIOLOGY;

    fn keywords(round: &RoundState) -> Vec<String> {
        round.iter().map(|e| e.keyword.to_string()).collect()
    }

    fn letters(n: usize) -> Vec<KeywordEntry> {
        (0..n)
            .map(|i| {
                let k = ((b'A' + i as u8) as char).to_string();
                KeywordEntry::owned(k.clone(), format!("definition of {k}"))
            })
            .collect()
    }

    #[test]
    fn selects_five_distinct_entries() {
        let mut usage = UsageMap::new();
        let mut rng = SimpleRng::new(1);
        let round = select_round(CELL_BIOLOGY, &mut usage, 1_000, &mut rng);

        let mut ks = keywords(&round);
        assert_eq!(ks.len(), ROUND_SIZE);
        ks.sort();
        ks.dedup();
        assert_eq!(ks.len(), ROUND_SIZE);
    }

    #[test]
    fn stamps_selected_entries_only() {
        let mut usage = UsageMap::new();
        let mut rng = SimpleRng::new(1);
        let round = select_round(CELL_BIOLOGY, &mut usage, 42, &mut rng);

        assert_eq!(usage.len(), ROUND_SIZE);
        for entry in &round {
            assert_eq!(usage.last_used(&entry.keyword), 42);
        }
    }

    #[test]
    fn prefers_never_used_then_oldest() {
        let content = letters(8);
        let mut usage = UsageMap::new();
        // A..E recently used, F..H never used, A is the oldest of the used ones.
        usage.stamp("A", 10);
        for k in ["B", "C", "D", "E"] {
            usage.stamp(k, 500);
        }

        let mut rng = SimpleRng::new(7);
        let round = select_round(&content, &mut usage, 1_000, &mut rng);
        let mut ks = keywords(&round);
        ks.sort();

        // F, G, H (never used) and A (oldest) must be in; one of B..E fills the last seat.
        for k in ["A", "F", "G", "H"] {
            assert!(ks.contains(&k.to_string()), "missing {k}: {ks:?}");
        }
    }

    #[test]
    fn never_selects_newer_over_older() {
        let content = letters(10);
        let mut usage = UsageMap::new();
        for (i, entry) in content.iter().enumerate() {
            usage.stamp(&entry.keyword, (i as u64 + 1) * 100);
        }
        let before = usage.clone();

        let mut rng = SimpleRng::new(3);
        let round = select_round(&content, &mut usage, 10_000, &mut rng);

        let newest_chosen = round
            .iter()
            .map(|e| before.last_used(&e.keyword))
            .max()
            .unwrap();
        for entry in &content {
            if !round.contains(entry) {
                assert!(before.last_used(&entry.keyword) >= newest_chosen);
            }
        }
    }

    #[test]
    fn consecutive_rounds_cover_the_set_evenly() {
        let content = letters(10);
        let mut usage = UsageMap::new();
        let mut rng = SimpleRng::new(11);

        let first = keywords(&select_round(&content, &mut usage, 1, &mut rng));
        let second = keywords(&select_round(&content, &mut usage, 2, &mut rng));
        for k in &second {
            assert!(!first.contains(k), "{k} repeated before the set was covered");
        }
    }

    #[test]
    fn five_entry_set_still_deals_five_on_immediate_replay() {
        let content = letters(5);
        let mut usage = UsageMap::new();
        let mut rng = SimpleRng::new(5);

        let first = select_round(&content, &mut usage, 100, &mut rng);
        assert_eq!(first.len(), ROUND_SIZE);
        for entry in &content {
            assert_eq!(usage.last_used(&entry.keyword), 100);
        }

        let second = select_round(&content, &mut usage, 100, &mut rng);
        let mut ks = keywords(&second);
        ks.sort();
        assert_eq!(ks, vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn small_set_falls_back_to_whole_set() {
        let content = letters(3);
        let mut usage = UsageMap::new();
        let mut rng = SimpleRng::new(9);

        let round = select_round(&content, &mut usage, 100, &mut rng);
        let mut ks = keywords(&round);
        ks.sort();
        assert_eq!(ks, vec!["A", "B", "C"]);
    }

    #[test]
    fn duplicate_keywords_are_dealt_once() {
        let mut content = letters(5);
        content.push(KeywordEntry::owned("A", "another A"));
        let mut usage = UsageMap::new();
        let mut rng = SimpleRng::new(9);

        let round = select_round(&content, &mut usage, 1, &mut rng);
        let mut ks = keywords(&round);
        ks.sort();
        ks.dedup();
        assert_eq!(ks.len(), ROUND_SIZE);
    }

    #[test]
    fn empty_content_gives_empty_round() {
        let mut usage = UsageMap::new();
        let mut rng = SimpleRng::new(1);
        let round = select_round(&[], &mut usage, 1, &mut rng);
        assert!(round.is_empty());
        assert!(usage.is_empty());
    }
}
