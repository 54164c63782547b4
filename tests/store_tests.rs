//! File-backed persistence across engine instances

use std::fs;
use std::path::PathBuf;

use tui_riddles::core::{load_board, GameEngine, KeyValueStore, RiddleCatalog};
use tui_riddles::store::FileStore;
use tui_riddles::types::{FEEDBACK_REVEAL_MS, HIGH_SCORES_KEY};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tui-riddles-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

fn lose_first_riddle(engine: &mut GameEngine) {
    engine.start().unwrap();
    engine.submit_answer(1).unwrap();
    engine.update(FEEDBACK_REVEAL_MS);
    engine.next_level().unwrap();
    engine.submit_answer(3).unwrap();
    engine.update(FEEDBACK_REVEAL_MS);
    engine.restart().unwrap();
}

#[test]
fn test_scores_survive_restart_of_the_program() {
    let dir = scratch_dir("survive");

    let store = FileStore::open(&dir).unwrap();
    let mut engine = GameEngine::new(RiddleCatalog::builtin(), Box::new(store));
    lose_first_riddle(&mut engine);
    let first = engine.high_scores().clone();
    assert_eq!(first.len(), 1);
    drop(engine);

    let store = FileStore::open(&dir).unwrap();
    let engine = GameEngine::new(RiddleCatalog::builtin(), Box::new(store));
    assert_eq!(engine.high_scores(), &first);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_persisted_shape_is_camel_case_json() {
    let dir = scratch_dir("shape");
    let store = FileStore::open(&dir).unwrap();
    let mut engine = GameEngine::new(RiddleCatalog::builtin(), Box::new(store));
    lose_first_riddle(&mut engine);

    let raw = fs::read_to_string(dir.join(format!("{HIGH_SCORES_KEY}.json"))).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entry = &value.as_array().unwrap()[0];
    assert_eq!(entry["score"], 400);
    assert_eq!(entry["levelsCompleted"], 1);
    assert!(entry["date"].as_str().unwrap().contains('T'));

    let reread = load_board(engine.store()).unwrap();
    assert_eq!(&reread, engine.high_scores());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_file_starts_with_empty_board() {
    let dir = scratch_dir("corrupt");
    let mut store = FileStore::open(&dir).unwrap();
    store.set(HIGH_SCORES_KEY, "{{{").unwrap();

    let engine = GameEngine::new(RiddleCatalog::builtin(), Box::new(store));
    assert!(engine.high_scores().is_empty());

    let _ = fs::remove_dir_all(&dir);
}
