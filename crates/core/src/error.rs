//! Error types for the riddle engine

use thiserror::Error;

use crate::types::Phase;

/// Why an intent was refused
///
/// `InvalidTransition` is routine (the intent does not apply to the current
/// phase) and never reaches the player. `InsufficientScore`,
/// `HintAlreadyUsed` and `HintUnavailable` are accompanied by a notice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{intent} is not valid while {}", phase.as_str())]
    InvalidTransition { intent: &'static str, phase: Phase },

    #[error("index {index} out of range (len {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("hint costs {required} points, only {available} available")]
    InsufficientScore { required: u32, available: u32 },

    #[error("hint for riddle {index} already used")]
    HintAlreadyUsed { index: usize },

    #[error("riddle {index} has no hint")]
    HintUnavailable { index: usize },
}

/// Catalog validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("catalog has no riddles")]
    Empty,

    #[error("riddle {id} needs at least two options")]
    TooFewOptions { id: u32 },

    #[error("riddle {id} marks a correct answer that is not one of its options")]
    AnswerOutOfRange { id: u32 },

    #[error("riddle {id} has a zero time limit")]
    ZeroTimeLimit { id: u32 },

    #[error("riddle id {id} appears more than once")]
    DuplicateId { id: u32 },
}

/// Key-value persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage i/o failed for key {key}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to (de)serialize stored value")]
    Serialize(#[from] serde_json::Error),

    #[error("invalid storage key {key:?}")]
    InvalidKey { key: String },
}

/// Audio output failures (always swallowed by the engine)
#[derive(Debug, Error)]
pub enum SoundError {
    #[error("audio output failed")]
    Io(#[from] std::io::Error),

    #[error("audio unavailable: {0}")]
    Unavailable(String),
}
