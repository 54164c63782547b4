//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Intent`]s. The same key
//! means different things in different phases (Enter starts a game from the
//! menu but restarts it from the game-over screen), so the mapping takes the
//! current [`crate::types::Phase`].

pub mod map;

pub use tui_riddles_types as types;

pub use map::{handle_key_event, option_for_key, should_quit};
