//! Core types module - shared enums and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data with no external dependencies, so they can be
//! shared by the engine, the terminal view, and the key mapping alike.
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Fixed timestep of the terminal loop (~60 FPS) |
//! | `COUNTDOWN_STEP_MS` | 1000 | One countdown second |
//! | `FEEDBACK_REVEAL_MS` | 1000 | Delay between an answer and its verdict |
//! | `TOAST_MS` | 2500 | How long a notice stays on screen |
//!
//! # Scoring Constants
//!
//! - `BASE_ANSWER_SCORE`: 100 points for any correct answer
//! - `TIME_BONUS_PER_SECOND`: 10 points per second left on the clock
//! - `HINT_COST`: 50 points, paid up front
//! - `HIGH_SCORE_CAP`: the board keeps the best 10 results
//!
//! # Examples
//!
//! ```
//! use tui_riddles_types::{Intent, Phase, SoundEvent, HINT_COST};
//!
//! assert_eq!(Phase::LevelComplete.as_str(), "levelComplete");
//! assert_eq!(Intent::SubmitAnswer(2).as_str(), "submitAnswer");
//! assert_eq!(SoundEvent::UrgentTick.as_str(), "urgentTick");
//! assert_eq!(HINT_COST, 50);
//! ```

/// Fixed timestep interval of the terminal loop in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Length of one countdown step (one second)
pub const COUNTDOWN_STEP_MS: u32 = 1000;

/// Delay before a submitted answer is resolved, so the view can show the verdict
pub const FEEDBACK_REVEAL_MS: u32 = 1000;

/// How long the most recent notice stays visible
pub const TOAST_MS: u32 = 2500;

/// Points awarded for any correct answer before the time bonus
pub const BASE_ANSWER_SCORE: u32 = 100;

/// Time bonus per remaining second
pub const TIME_BONUS_PER_SECOND: u32 = 10;

/// Price of revealing a hint
pub const HINT_COST: u32 = 50;

/// Countdown values at or below this (and above zero) are urgent
pub const URGENT_THRESHOLD_SECS: u32 = 5;

/// Outside the urgent band a plain tick sounds on multiples of this
pub const TICK_SOUND_EVERY_SECS: u32 = 5;

/// Maximum number of retained high-score entries
pub const HIGH_SCORE_CAP: usize = 10;

/// Storage key of the persisted high-score board
pub const HIGH_SCORES_KEY: &str = "riddle-high-scores";

/// Lifecycle phase of a play-through
///
/// The progression is:
/// `Menu` → `Playing` → {`LevelComplete`, `GameOver`, `Victory`},
/// `LevelComplete` → `Playing`, and `GameOver`/`Victory` → `Menu`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Menu,
    Playing,
    LevelComplete,
    GameOver,
    Victory,
}

impl Phase {
    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Playing => "playing",
            Phase::LevelComplete => "levelComplete",
            Phase::GameOver => "gameOver",
            Phase::Victory => "victory",
        }
    }
}

/// User intents dispatched into the engine
///
/// The periodic countdown tick is not an intent: it is driven by the
/// engine's own timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Begin a new play-through from the menu
    Start,
    /// Choose an option (zero-based) for the current riddle
    SubmitAnswer(usize),
    /// Advance past a solved riddle
    NextLevel,
    /// Return to the menu
    Restart,
    /// Buy the hint for the current riddle
    UseHint,
    /// Flip the sound preference
    ToggleSound,
}

impl Intent {
    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::SubmitAnswer(_) => "submitAnswer",
            Intent::NextLevel => "nextLevel",
            Intent::Restart => "restart",
            Intent::UseHint => "useHint",
            Intent::ToggleSound => "toggleSound",
        }
    }
}

/// Semantic sound notifications emitted by the engine
///
/// How (or whether) they are rendered is up to the sound sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEvent {
    /// Game start and sound-on confirmation
    Click,
    Correct,
    Wrong,
    /// Countdown reached a multiple of five seconds
    Tick,
    /// Countdown is in the last five seconds
    UrgentTick,
    Hint,
    LevelComplete,
    Victory,
    GameOver,
}

impl SoundEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEvent::Click => "click",
            SoundEvent::Correct => "correct",
            SoundEvent::Wrong => "wrong",
            SoundEvent::Tick => "tick",
            SoundEvent::UrgentTick => "urgentTick",
            SoundEvent::Hint => "hint",
            SoundEvent::LevelComplete => "levelComplete",
            SoundEvent::Victory => "victory",
            SoundEvent::GameOver => "gameOver",
        }
    }
}

/// Tone of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoring_and_timing_defaults() {
        assert_eq!(COUNTDOWN_STEP_MS, 1000);
        assert_eq!(FEEDBACK_REVEAL_MS, 1000);
        assert_eq!(BASE_ANSWER_SCORE, 100);
        assert_eq!(TIME_BONUS_PER_SECOND, 10);
        assert_eq!(HINT_COST, 50);
        assert_eq!(URGENT_THRESHOLD_SECS, 5);
        assert_eq!(HIGH_SCORE_CAP, 10);
    }

    #[test]
    fn names_are_camel_case() {
        assert_eq!(Phase::GameOver.as_str(), "gameOver");
        assert_eq!(Intent::SubmitAnswer(3).as_str(), "submitAnswer");
        assert_eq!(Intent::ToggleSound.as_str(), "toggleSound");
        assert_eq!(SoundEvent::LevelComplete.as_str(), "levelComplete");
    }
}
