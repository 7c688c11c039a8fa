//! Best-score store tests

use std::fs;

use tempfile::tempdir;
use tui_2048::core::GameState;
use tui_2048::persist::BestScoreStore;
use tui_2048::types::Direction;

#[test]
fn test_missing_file_reads_zero() {
    let dir = tempdir().unwrap();
    let mut store = BestScoreStore::new(dir.path().join("best_score.json"));
    assert_eq!(store.load().unwrap(), 0);
    assert_eq!(store.load_or_default(), 0);
}

#[test]
fn test_save_then_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("best_score.json");

    BestScoreStore::new(&path).save(3932).unwrap();
    assert_eq!(BestScoreStore::new(&path).load().unwrap(), 3932);
}

#[test]
fn test_corrupt_file_is_error_but_defaults_to_zero() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("best_score.json");
    fs::write(&path, "not json").unwrap();

    let mut store = BestScoreStore::new(&path);
    assert!(store.load().is_err());
    assert_eq!(store.load_or_default(), 0);
}

#[test]
fn test_unknown_version_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("best_score.json");
    fs::write(&path, r#"{"version": 2, "best_score": 100}"#).unwrap();

    let err = BestScoreStore::new(&path).load().unwrap_err();
    assert!(format!("{:#}", err).contains("version 2"));
}

#[test]
fn test_lower_score_never_replaces_unreadable_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("best_score.json");
    let newer = r#"{ "version": 2, "best_score": 50000 }"#;
    fs::write(&path, newer).unwrap();

    let mut store = BestScoreStore::new(&path);
    assert_eq!(store.load_or_default(), 0);
    assert!(store.checkpoint(120).unwrap());

    // The record written by a newer build survives next to the new file.
    assert_eq!(fs::read_to_string(store.backup_path()).unwrap(), newer);
    assert_eq!(BestScoreStore::new(&path).load().unwrap(), 120);
}

#[test]
fn test_best_score_survives_restart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("best_score.json");

    let mut store = BestScoreStore::new(&path);
    let mut game = GameState::new(9);
    game.set_best_score(store.load_or_default());
    for _ in 0..100 {
        for direction in Direction::ALL {
            game.apply_move(direction);
        }
    }
    let best = game.best_score();
    assert!(best > 0);
    store.checkpoint(best).unwrap();

    let mut next = GameState::new(10);
    next.set_best_score(BestScoreStore::new(&path).load_or_default());
    assert_eq!(next.best_score(), best);
    assert_eq!(next.score(), 0);
}
