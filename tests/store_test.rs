//! Persistence across sessions through the JSON file store

use std::fs;

use tempfile::TempDir;

use keyword_match::core::{QuizSession, QuizStore};
use keyword_match::store::{open_store, JsonFileStore, StoreConfig};
use keyword_match::types::{DropTarget, QuizAction, SlotId, TileId, ROUND_SIZE};

fn play_perfect<S: QuizStore>(session: &mut QuizSession<S>, start: u64, finish: u64) {
    session.apply_action(QuizAction::StartGame, start);
    for i in 0..ROUND_SIZE as u8 {
        session.apply_action(QuizAction::PickUp(TileId(i)), start + 1);
        session.apply_action(QuizAction::Drop(DropTarget::Slot(SlotId(i))), start + 1);
    }
    session.apply_action(QuizAction::CheckAnswers, finish);
}

#[test]
fn scores_and_usage_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    let mut first = QuizSession::with_shipped_content(JsonFileStore::new(dir.path()), 1);
    play_perfect(&mut first, 1_000, 31_000);
    play_perfect(&mut first, 40_000, 52_000);

    let second = QuizSession::with_shipped_content(JsonFileStore::new(dir.path()), 2);
    let times: Vec<_> = second
        .leaderboard()
        .records()
        .iter()
        .map(|r| r.elapsed_ms)
        .collect();
    assert_eq!(times, [12_000, 30_000]);
    assert_eq!(second.usage().len(), 2 * ROUND_SIZE);
}

#[test]
fn records_use_fixed_file_names() {
    let dir = TempDir::new().unwrap();
    let mut session = QuizSession::with_shipped_content(JsonFileStore::new(dir.path()), 4);
    play_perfect(&mut session, 1_000, 2_000);

    let usage = fs::read_to_string(dir.path().join("b1_used_keywords.json")).unwrap();
    let usage: serde_json::Value = serde_json::from_str(&usage).unwrap();
    assert_eq!(usage.as_object().unwrap().len(), ROUND_SIZE);
    assert!(usage.as_object().unwrap().values().all(|v| v == 1_000));

    let scores = fs::read_to_string(dir.path().join("b1_keyword_game_scores.json")).unwrap();
    let scores: serde_json::Value = serde_json::from_str(&scores).unwrap();
    assert_eq!(scores[0]["time"], 1_000);
    assert!(scores[0]["date"].is_string());
}

#[test]
fn corrupt_files_start_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("b1_used_keywords.json"), "[1, 2").unwrap();
    fs::write(dir.path().join("b1_keyword_game_scores.json"), "null").unwrap();

    let session = QuizSession::with_shipped_content(JsonFileStore::new(dir.path()), 1);
    assert!(session.usage().is_empty());
    assert!(session.leaderboard().is_empty());
}

#[test]
fn disabled_store_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = StoreConfig {
        data_dir: dir.path().join("data"),
        disabled: true,
    };

    let mut session = QuizSession::with_shipped_content(open_store(&config), 1);
    play_perfect(&mut session, 1_000, 2_000);

    assert_eq!(session.leaderboard().len(), 1);
    assert!(!config.data_dir.exists());
}
