use crate::catalog::Riddle;
use crate::scoring::HighScoreEntry;
use crate::types::{NoticeKind, Phase, URGENT_THRESHOLD_SECS};

/// The answer waiting for its verdict to be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback {
    pub selected: usize,
    pub correct: bool,
    /// Countdown value when the answer was submitted (used for the bonus).
    pub time_left: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOverReason {
    TimeUp,
    WrongAnswer,
}

/// Transient user-facing message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Read-only view of the engine for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameSnapshot<'a> {
    pub phase: Phase,
    /// Zero-based index of the current riddle.
    pub level: usize,
    pub level_count: usize,
    pub score: u32,
    pub time_left: u32,
    pub time_limit: u32,
    pub riddle: &'a Riddle,
    /// Hint text, only while it is revealed.
    pub hint: Option<&'a str>,
    pub hint_used: bool,
    pub feedback: Option<Feedback>,
    pub sound_enabled: bool,
    pub game_over: Option<GameOverReason>,
    pub new_record: bool,
    pub high_scores: &'a [HighScoreEntry],
    pub time_limit_range: (u32, u32),
}

impl GameSnapshot<'_> {
    /// Share of the catalog reached, counting the current riddle.
    pub fn progress_percent(&self) -> u32 {
        if self.level_count == 0 {
            return 0;
        }
        (((self.level + 1) * 100) / self.level_count) as u32
    }

    pub fn time_percent(&self) -> u32 {
        if self.time_limit == 0 {
            return 0;
        }
        self.time_left.min(self.time_limit) * 100 / self.time_limit
    }

    pub fn is_urgent(&self) -> bool {
        self.time_left <= URGENT_THRESHOLD_SECS
    }

    pub fn best_score(&self) -> Option<u32> {
        self.high_scores.first().map(|e| e.score)
    }
}
