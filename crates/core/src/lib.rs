//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the riddle catalog, the scoring rules, the high-score
//! board and the session state machine. It never touches a terminal, a real
//! clock or the filesystem directly:
//!
//! - **Deterministic**: timers advance only when the caller says time passed
//! - **Testable**: storage and audio are traits with in-memory stand-ins
//! - **Portable**: the same engine drives the terminal UI and headless tests
//!
//! # Module Structure
//!
//! - [`catalog`]: riddle definitions, validation and the built-in set
//! - [`engine`]: the session state machine and its intents
//! - [`hints`]: which riddles had their hint bought this play-through
//! - [`scoring`]: answer points and the capped high-score board
//! - [`snapshot`]: read-only view handed to the presentation layer
//! - [`store`]: key-value persistence seam plus board load/save
//! - [`sound`]: sound notification seam
//! - [`timer`]: cancellable millisecond timers
//!
//! # Game Rules
//!
//! - **Countdown**: each riddle has its own limit; reaching zero ends the game
//! - **Answering**: the verdict is revealed one second after the choice and the
//!   countdown stops meanwhile
//! - **Scoring**: 100 points plus 10 per second left when the answer was chosen
//! - **Hints**: 50 points each, at most once per riddle, never below zero
//! - **High scores**: every finished play-through is recorded, best 10 kept
//!
//! # Example
//!
//! ```
//! use tui_riddles_core::{GameEngine, RiddleCatalog};
//! use tui_riddles_types::{Phase, FEEDBACK_REVEAL_MS};
//!
//! let mut engine = GameEngine::headless(RiddleCatalog::builtin());
//! engine.start().unwrap();
//!
//! // Pick the right option and let the verdict land.
//! let answer = engine.current_riddle().correct_answer;
//! engine.submit_answer(answer).unwrap();
//! engine.update(FEEDBACK_REVEAL_MS);
//!
//! assert_eq!(engine.phase(), Phase::LevelComplete);
//! assert_eq!(engine.score(), 100 + 30 * 10);
//! ```
//!
//! # Timing
//!
//! Call [`GameEngine::update`](engine::GameEngine::update) every frame with the
//! elapsed milliseconds. The countdown fires every 1000ms and the answer reveal
//! fires once, 1000ms after submission.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod hints;
pub mod scoring;
pub mod snapshot;
pub mod sound;
pub mod store;
pub mod timer;

pub use tui_riddles_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Riddle, RiddleCatalog};
pub use engine::GameEngine;
pub use error::{CatalogError, EngineError, SoundError, StoreError};
pub use hints::HintUsage;
pub use scoring::{compute_answer_score, is_new_record, record_entry, HighScoreBoard, HighScoreEntry};
pub use snapshot::{Feedback, GameOverReason, GameSnapshot, Notice};
pub use sound::{NullSound, SoundSink};
pub use store::{load_board, save_board, KeyValueStore, MemoryStore};
pub use timer::Timer;
