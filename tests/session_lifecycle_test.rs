//! Integration tests for the round lifecycle

use std::collections::BTreeSet;

use anyhow::{bail, Result};

use keyword_match::core::{MemoryStore, QuizSession, QuizStore, ScoreRecord, UsageMap};
use keyword_match::types::{DropTarget, Mark, Phase, QuizAction, SlotId, TileId, ROUND_SIZE};

fn place(session: &mut QuizSession<MemoryStore>, tile: u8, slot: u8, now: u64) {
    assert!(session.apply_action(QuizAction::PickUp(TileId(tile)), now));
    assert!(session.apply_action(QuizAction::Drop(DropTarget::Slot(SlotId(slot))), now));
}

fn round_keywords(session: &QuizSession<MemoryStore>) -> Vec<String> {
    session
        .board()
        .tiles()
        .iter()
        .map(|t| t.keyword.to_string())
        .collect()
}

#[test]
fn test_perfect_round_is_recorded() {
    let mut session = QuizSession::with_shipped_content(MemoryStore::default(), 12345);
    assert_eq!(session.phase(), Phase::Idle);

    session.apply_action(QuizAction::StartGame, 1_000);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.board().len(), ROUND_SIZE);

    for i in 0..ROUND_SIZE as u8 {
        place(&mut session, i, i, 5_000);
    }
    session.apply_action(QuizAction::CheckAnswers, 43_000);

    assert_eq!(session.phase(), Phase::Finished);
    let result = session.result().unwrap();
    assert!(result.is_perfect());
    assert_eq!(result.elapsed_ms, 42_000);
    assert_eq!(
        session.feedback().as_deref(),
        Some("🎉 Excellent! You got all 5 correct in 00:42!")
    );

    let saved = &session.store().scores;
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].elapsed_ms, 42_000);
    assert_eq!(saved[0].completed_at.timestamp_millis(), 43_000);
}

#[test]
fn test_imperfect_round_persists_nothing() {
    let mut session = QuizSession::with_shipped_content(MemoryStore::default(), 7);
    session.apply_action(QuizAction::StartGame, 1_000);

    // Every tile one slot off.
    for i in 0..ROUND_SIZE as u8 {
        place(&mut session, i, (i + 1) % ROUND_SIZE as u8, 2_000);
    }
    session.apply_action(QuizAction::CheckAnswers, 3_000);

    let result = session.result().unwrap();
    assert_eq!(result.correct, 0);
    assert!(result.marks().iter().all(|&m| m == Mark::Incorrect));
    assert_eq!(
        session.feedback().as_deref(),
        Some("You got 0 out of 5 correct. Keep practicing!")
    );
    assert!(session.store().scores.is_empty());
    assert!(session.leaderboard().is_empty());
}

#[test]
fn test_empty_slots_count_as_wrong() {
    let mut session = QuizSession::with_shipped_content(MemoryStore::default(), 7);
    session.apply_action(QuizAction::StartGame, 1_000);
    place(&mut session, 0, 0, 1_500);
    place(&mut session, 1, 1, 1_500);
    place(&mut session, 2, 2, 1_500);
    session.apply_action(QuizAction::CheckAnswers, 2_000);

    let result = session.result().unwrap();
    assert_eq!((result.correct, result.total), (3, 5));
    assert_eq!(
        session.feedback().as_deref(),
        Some("You got 3 out of 5 correct. Keep practicing!")
    );
}

#[test]
fn test_pause_excludes_time_and_blocks_dragging() {
    let mut session = QuizSession::with_shipped_content(MemoryStore::default(), 99);
    session.apply_action(QuizAction::StartGame, 0);

    assert!(session.apply_action(QuizAction::Pause, 5_000));
    assert!(session.paused());
    assert!(!session.apply_action(QuizAction::Pause, 6_000));
    assert!(!session.apply_action(QuizAction::PickUp(TileId(0)), 7_000));
    assert!(!session.apply_action(QuizAction::CheckAnswers, 8_000));
    assert_eq!(session.next_wakeup(), None);

    assert!(session.apply_action(QuizAction::Continue, 65_000));
    for i in 0..ROUND_SIZE as u8 {
        place(&mut session, i, i, 66_000);
    }
    session.apply_action(QuizAction::CheckAnswers, 70_000);

    assert_eq!(session.result().unwrap().elapsed_ms, 10_000);
    assert_eq!(session.leaderboard().records()[0].elapsed_ms, 10_000);
}

#[test]
fn test_rounds_prefer_unseen_keywords() {
    let mut session = QuizSession::with_shipped_content(MemoryStore::default(), 3);
    let mut seen = BTreeSet::new();

    // 23 shipped entries: four rounds fit inside the never-shown set.
    for round in 1..=4u64 {
        session.apply_action(QuizAction::StartGame, round * 1_000);
        let keywords = round_keywords(&session);
        assert_eq!(keywords.len(), ROUND_SIZE);
        for k in keywords {
            assert!(seen.insert(k), "keyword repeated before content ran out");
        }
    }
    assert_eq!(seen.len(), 20);

    // Round five takes the three never-shown entries plus two from round one.
    session.apply_action(QuizAction::StartGame, 5_000);
    let fresh = round_keywords(&session)
        .into_iter()
        .filter(|k| !seen.contains(k))
        .count();
    assert_eq!(fresh, 3);
    assert_eq!(session.usage().len(), 23);
}

#[test]
fn test_play_again_only_after_finishing() {
    let mut session = QuizSession::with_shipped_content(MemoryStore::default(), 5);
    assert!(!session.apply_action(QuizAction::PlayAgain, 1_000));

    session.apply_action(QuizAction::StartGame, 1_000);
    assert!(!session.apply_action(QuizAction::PlayAgain, 2_000));

    session.apply_action(QuizAction::CheckAnswers, 3_000);
    assert!(session.apply_action(QuizAction::PlayAgain, 4_000));
    assert_eq!(session.phase(), Phase::Playing);
    assert!(session.result().is_none());
    assert_eq!(session.assignment().placed_count(), 0);
}

#[test]
fn test_keyboard_round_trip() {
    let mut session = QuizSession::with_shipped_content(MemoryStore::default(), 21);
    session.apply_action(QuizAction::StartGame, 1_000);

    let first = session.snapshot().pool[0].id;
    assert!(session.apply_action(QuizAction::Activate, 1_100));
    assert_eq!(session.drag().dragging(), Some(first));

    assert!(session.apply_action(QuizAction::Activate, 1_200));
    assert_eq!(session.assignment().occupant(SlotId(0)), Some(first));
    assert_eq!(session.drag().dragging(), None);
    assert_eq!(session.snapshot().pool.len(), ROUND_SIZE - 1);
}

struct FailingStore;

impl QuizStore for FailingStore {
    fn load_usage(&mut self) -> UsageMap {
        UsageMap::new()
    }

    fn save_usage(&mut self, _usage: &UsageMap) -> Result<()> {
        bail!("disk full")
    }

    fn load_scores(&mut self) -> Vec<ScoreRecord> {
        Vec::new()
    }

    fn save_scores(&mut self, _scores: &[ScoreRecord]) -> Result<()> {
        bail!("disk full")
    }
}

#[test]
fn test_store_failures_do_not_stop_play() {
    let mut session = QuizSession::with_shipped_content(FailingStore, 1);
    session.apply_action(QuizAction::StartGame, 1_000);
    for i in 0..ROUND_SIZE as u8 {
        session.apply_action(QuizAction::PickUp(TileId(i)), 2_000);
        session.apply_action(QuizAction::Drop(DropTarget::Slot(SlotId(i))), 2_000);
    }
    session.apply_action(QuizAction::CheckAnswers, 9_000);

    assert_eq!(session.phase(), Phase::Finished);
    assert_eq!(session.leaderboard().len(), 1);
}
