//! Key-value persistence seam for the high-score board.
//!
//! The engine only needs "read one value at startup, rewrite it in full".
//! Durable backends live outside core; [`MemoryStore`] covers tests and
//! sessions that should not persist anything.

use std::collections::HashMap;

use crate::error::StoreError;
use crate::scoring::HighScoreBoard;
use crate::types::HIGH_SCORES_KEY;

/// String-valued key-value storage
pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Volatile store backed by a `HashMap`
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the persisted board. A missing key is an empty board.
pub fn load_board(store: &dyn KeyValueStore) -> Result<HighScoreBoard, StoreError> {
    match store.get(HIGH_SCORES_KEY)? {
        Some(json) => {
            let board: HighScoreBoard = serde_json::from_str(&json)?;
            // Normalize in case the stored value was edited by hand.
            Ok(HighScoreBoard::from_entries(board.entries().to_vec()))
        }
        None => Ok(HighScoreBoard::new()),
    }
}

/// Rewrite the persisted board in full.
pub fn save_board(store: &mut dyn KeyValueStore, board: &HighScoreBoard) -> Result<(), StoreError> {
    let json = serde_json::to_string(board)?;
    store.set(HIGH_SCORES_KEY, &json)
}
