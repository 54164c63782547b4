//! TUI Riddles (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binary, integration
//! tests and benches can write `tui_riddles::core::GameEngine` and friends.
//! Runtime configuration and logging setup live here as well.

pub mod clock;
pub mod config;
pub mod logging;

pub use tui_riddles_core as core;
pub use tui_riddles_input as input;
pub use tui_riddles_store as store;
pub use tui_riddles_term as term;
pub use tui_riddles_types as types;

pub use clock::FrameClock;
pub use config::AppConfig;
