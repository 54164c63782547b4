//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: screens are drawn into a plain
//! framebuffer from a `core::GameSnapshot` and flushed to the terminal as a
//! diff. No widget toolkit is involved.
//!
//! - [`fb`]: framebuffer, palette and drawing helpers
//! - [`game_view`]: one screen per game phase
//! - [`renderer`]: raw-mode terminal output with diffing
//! - [`toast`]: the most recent notice and its lifetime
//! - [`bell`]: terminal bell `SoundSink`

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod toast;

pub use tui_riddles_core as core;
pub use tui_riddles_types as types;

pub use bell::BellSink;
pub use fb::{palette, wrap_text, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use toast::Toasts;
