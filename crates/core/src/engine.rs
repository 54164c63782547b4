//! Game engine module - the riddle play-through state machine
//!
//! The engine owns the whole session (riddle index, score, countdown,
//! hint usage, lifecycle stage) and mutates it only through the named
//! intents. Its two timers, the one-second countdown and the answer
//! reveal delay, are advanced by [`GameEngine::update`].

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::catalog::{Riddle, RiddleCatalog};
use crate::error::EngineError;
use crate::hints::HintUsage;
use crate::scoring::{compute_answer_score, HighScoreBoard, HighScoreEntry};
use crate::snapshot::{Feedback, GameOverReason, GameSnapshot, Notice};
use crate::sound::{NullSound, SoundSink};
use crate::store::{load_board, save_board, KeyValueStore, MemoryStore};
use crate::timer::Timer;
use crate::types::*;

/// Lifecycle stage, carrying the data that only exists in that stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Menu,
    Playing {
        feedback: Option<Feedback>,
        hint_visible: bool,
    },
    LevelComplete,
    GameOver(GameOverReason),
    Victory {
        new_record: bool,
    },
}

impl Stage {
    fn fresh_round() -> Self {
        Stage::Playing {
            feedback: None,
            hint_visible: false,
        }
    }

    fn phase(&self) -> Phase {
        match self {
            Stage::Menu => Phase::Menu,
            Stage::Playing { .. } => Phase::Playing,
            Stage::LevelComplete => Phase::LevelComplete,
            Stage::GameOver(_) => Phase::GameOver,
            Stage::Victory { .. } => Phase::Victory,
        }
    }
}

/// One play-through
#[derive(Debug, Clone, PartialEq, Eq)]
struct GameSession {
    index: usize,
    score: u32,
    time_left: u32,
    stage: Stage,
    hints: HintUsage,
}

impl GameSession {
    fn new(stage: Stage, first_time_limit: u32) -> Self {
        Self {
            index: 0,
            score: 0,
            time_left: first_time_limit,
            stage,
            hints: HintUsage::cleared(),
        }
    }
}

/// Riddle game state machine
pub struct GameEngine {
    catalog: RiddleCatalog,
    session: GameSession,
    board: HighScoreBoard,
    countdown: Timer,
    reveal: Timer,
    sound_enabled: bool,
    store: Box<dyn KeyValueStore>,
    sound: Box<dyn SoundSink>,
    clock: fn() -> DateTime<Utc>,
    notices: Vec<Notice>,
    last_entry: Option<HighScoreEntry>,
}

impl GameEngine {
    /// Create an engine in the menu, loading the high-score board from `store`.
    ///
    /// A board that cannot be read is replaced by an empty one.
    pub fn new(catalog: RiddleCatalog, store: Box<dyn KeyValueStore>) -> Self {
        let board = match load_board(store.as_ref()) {
            Ok(board) => board,
            Err(err) => {
                warn!(error = %err, "could not load high scores, starting empty");
                HighScoreBoard::new()
            }
        };
        let first_limit = catalog.current(0).time_limit;

        Self {
            catalog,
            session: GameSession::new(Stage::Menu, first_limit),
            board,
            countdown: Timer::idle(),
            reveal: Timer::idle(),
            sound_enabled: true,
            store,
            sound: Box::new(NullSound),
            clock: Utc::now,
            notices: Vec::new(),
            last_entry: None,
        }
    }

    /// Engine with an in-memory store and no audio.
    pub fn headless(catalog: RiddleCatalog) -> Self {
        Self::new(catalog, Box::new(MemoryStore::new()))
    }

    pub fn with_sound(mut self, sound: Box<dyn SoundSink>) -> Self {
        self.sound = sound;
        self
    }

    pub fn with_sound_enabled(mut self, enabled: bool) -> Self {
        self.sound_enabled = enabled;
        self
    }

    /// Replace the wall clock used to date high-score entries.
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub fn phase(&self) -> Phase {
        self.session.stage.phase()
    }

    pub fn level(&self) -> usize {
        self.session.index
    }

    pub fn score(&self) -> u32 {
        self.session.score
    }

    pub fn time_left(&self) -> u32 {
        self.session.time_left
    }

    pub fn sound_enabled(&self) -> bool {
        self.sound_enabled
    }

    pub fn catalog(&self) -> &RiddleCatalog {
        &self.catalog
    }

    pub fn current_riddle(&self) -> &Riddle {
        self.catalog.current(self.session.index)
    }

    pub fn high_scores(&self) -> &HighScoreBoard {
        &self.board
    }

    pub fn hint_usage(&self) -> &HintUsage {
        &self.session.hints
    }

    /// Entry recorded when the last play-through ended.
    pub fn last_entry(&self) -> Option<&HighScoreEntry> {
        self.last_entry.as_ref()
    }

    pub fn feedback(&self) -> Option<Feedback> {
        match self.session.stage {
            Stage::Playing { feedback, .. } => feedback,
            _ => None,
        }
    }

    pub fn feedback_pending(&self) -> bool {
        self.feedback().is_some()
    }

    pub fn hint_visible(&self) -> bool {
        matches!(
            self.session.stage,
            Stage::Playing {
                hint_visible: true,
                ..
            }
        )
    }

    pub fn countdown_armed(&self) -> bool {
        self.countdown.is_armed()
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Take and clear the queued notices.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn snapshot(&self) -> GameSnapshot<'_> {
        let riddle = self.current_riddle();
        let (hint_visible, feedback) = match self.session.stage {
            Stage::Playing {
                feedback,
                hint_visible,
            } => (hint_visible, feedback),
            _ => (false, None),
        };
        let game_over = match self.session.stage {
            Stage::GameOver(reason) => Some(reason),
            _ => None,
        };
        let new_record = matches!(self.session.stage, Stage::Victory { new_record: true });

        GameSnapshot {
            phase: self.phase(),
            level: self.session.index,
            level_count: self.catalog.count(),
            score: self.session.score,
            time_left: self.session.time_left,
            time_limit: riddle.time_limit,
            riddle,
            hint: if hint_visible { riddle.hint.as_deref() } else { None },
            hint_used: self.session.hints.is_used(self.session.index),
            feedback,
            sound_enabled: self.sound_enabled,
            game_over,
            new_record,
            high_scores: self.board.entries(),
            time_limit_range: self.catalog.time_limit_range(),
        }
    }

    /// Begin a play-through from the menu.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.session.stage != Stage::Menu {
            return Err(self.invalid(Intent::Start));
        }

        let first_limit = self.catalog.riddle_at(0)?.time_limit;
        self.session = GameSession::new(Stage::fresh_round(), first_limit);
        self.countdown = Timer::interval(COUNTDOWN_STEP_MS);
        self.reveal.cancel();
        self.last_entry = None;
        self.play(SoundEvent::Click);

        info!(riddles = self.catalog.count(), "play-through started");
        Ok(())
    }

    /// One countdown second.
    ///
    /// Normally driven by the engine's own interval timer through [`update`](Self::update).
    /// Refused while an answer is awaiting its verdict.
    pub fn tick(&mut self) -> Result<(), EngineError> {
        let counting = matches!(self.session.stage, Stage::Playing { feedback: None, .. })
            && self.session.time_left > 0;
        if !counting {
            return Err(EngineError::InvalidTransition {
                intent: "tick",
                phase: self.phase(),
            });
        }

        self.session.time_left -= 1;
        let left = self.session.time_left;

        if left == 0 {
            self.timeout();
        } else if left <= URGENT_THRESHOLD_SECS {
            self.play(SoundEvent::UrgentTick);
        } else if left % TICK_SOUND_EVERY_SECS == 0 {
            self.play(SoundEvent::Tick);
        }
        Ok(())
    }

    /// Choose an option for the current riddle.
    ///
    /// The verdict is applied `FEEDBACK_REVEAL_MS` later by [`update`](Self::update);
    /// until then further answers are ignored and the countdown is stopped.
    pub fn submit_answer(&mut self, option: usize) -> Result<(), EngineError> {
        if !matches!(self.session.stage, Stage::Playing { feedback: None, .. }) {
            return Err(self.invalid(Intent::SubmitAnswer(option)));
        }

        let riddle = self.catalog.riddle_at(self.session.index)?;
        if option >= riddle.options.len() {
            return Err(EngineError::OutOfRange {
                index: option,
                len: riddle.options.len(),
            });
        }
        let pending = Feedback {
            selected: option,
            correct: riddle.is_correct(option),
            time_left: self.session.time_left,
        };

        if let Stage::Playing { feedback, .. } = &mut self.session.stage {
            *feedback = Some(pending);
        }
        self.countdown.cancel();
        self.reveal = Timer::one_shot(FEEDBACK_REVEAL_MS);

        debug!(
            level = self.session.index,
            option,
            correct = pending.correct,
            "answer submitted"
        );
        Ok(())
    }

    /// Move on to the next riddle after a correct answer.
    pub fn next_level(&mut self) -> Result<(), EngineError> {
        if self.session.stage != Stage::LevelComplete {
            return Err(self.invalid(Intent::NextLevel));
        }

        let next = self.session.index + 1;
        let limit = self.catalog.riddle_at(next)?.time_limit;
        self.session.index = next;
        self.session.time_left = limit;
        self.session.stage = Stage::fresh_round();
        self.countdown = Timer::interval(COUNTDOWN_STEP_MS);
        self.play(SoundEvent::LevelComplete);

        info!(level = next, time_limit = limit, "next riddle");
        Ok(())
    }

    /// Hard reset back to the menu. Accepted in every phase.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        self.countdown.cancel();
        self.reveal.cancel();
        let first_limit = self.catalog.current(0).time_limit;
        self.session = GameSession::new(Stage::Menu, first_limit);
        debug!("back to menu");
        Ok(())
    }

    /// Buy the hint for the current riddle.
    pub fn use_hint(&mut self) -> Result<(), EngineError> {
        if !matches!(self.session.stage, Stage::Playing { feedback: None, .. }) {
            return Err(self.invalid(Intent::UseHint));
        }

        let index = self.session.index;
        let available = self.session.score;
        if available < HINT_COST {
            self.notify(
                NoticeKind::Error,
                format!("A hint costs {HINT_COST} points"),
            );
            return Err(EngineError::InsufficientScore {
                required: HINT_COST,
                available,
            });
        }
        if self.session.hints.is_used(index) {
            self.notify(NoticeKind::Info, "Hint already used for this riddle");
            return Err(EngineError::HintAlreadyUsed { index });
        }
        if self.catalog.riddle_at(index)?.hint.is_none() {
            self.notify(NoticeKind::Info, "No hint for this riddle");
            return Err(EngineError::HintUnavailable { index });
        }

        self.session.score -= HINT_COST;
        self.session.hints = self.session.hints.mark_used(index);
        if let Stage::Playing { hint_visible, .. } = &mut self.session.stage {
            *hint_visible = true;
        }
        self.play(SoundEvent::Hint);

        info!(level = index, score = self.session.score, "hint revealed");
        Ok(())
    }

    /// Flip the sound preference. Only the preference changes.
    pub fn toggle_sound(&mut self) -> Result<(), EngineError> {
        self.sound_enabled = !self.sound_enabled;
        if self.sound_enabled {
            self.play(SoundEvent::Click);
        }
        Ok(())
    }

    /// Apply an intent, logging and discarding any refusal.
    pub fn apply(&mut self, intent: Intent) -> bool {
        let result = match intent {
            Intent::Start => self.start(),
            Intent::SubmitAnswer(option) => self.submit_answer(option),
            Intent::NextLevel => self.next_level(),
            Intent::Restart => self.restart(),
            Intent::UseHint => self.use_hint(),
            Intent::ToggleSound => self.toggle_sound(),
        };

        match result {
            Ok(()) => true,
            Err(err) => {
                debug!(
                    intent = intent.as_str(),
                    phase = self.phase().as_str(),
                    error = %err,
                    "intent refused"
                );
                false
            }
        }
    }

    /// Advance the engine's timers by `elapsed_ms`.
    ///
    /// Returns true if any timer fired.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        let mut fired = false;

        if self.reveal.advance(elapsed_ms) > 0 {
            self.resolve_feedback();
            fired = true;
        }

        for _ in 0..self.countdown.advance(elapsed_ms) {
            if self.tick().is_err() {
                break;
            }
            fired = true;
        }

        fired
    }

    fn resolve_feedback(&mut self) {
        let Stage::Playing {
            feedback: Some(verdict),
            ..
        } = self.session.stage
        else {
            return;
        };

        self.countdown.cancel();
        self.reveal.cancel();
        let index = self.session.index;

        if verdict.correct {
            let gained = compute_answer_score(verdict.time_left);
            self.session.score = self.session.score.saturating_add(gained);
            self.play(SoundEvent::Correct);
            self.notify(NoticeKind::Success, format!("Correct! +{gained} points"));

            if self.catalog.is_last(index) {
                let new_record = self.board.is_new_record(self.session.score);
                self.record(self.catalog.count());
                self.session.stage = Stage::Victory { new_record };
                self.play(SoundEvent::Victory);
                if new_record {
                    self.notify(
                        NoticeKind::Info,
                        format!("New personal best: {}", self.session.score),
                    );
                }
                info!(score = self.session.score, new_record, "all riddles solved");
            } else {
                self.session.stage = Stage::LevelComplete;
                info!(level = index, gained, score = self.session.score, "riddle solved");
            }
        } else {
            self.play(SoundEvent::Wrong);
            self.notify(NoticeKind::Error, "Wrong answer! Try again");
            self.record(index);
            self.session.stage = Stage::GameOver(GameOverReason::WrongAnswer);
            info!(level = index, score = self.session.score, "wrong answer");
        }
    }

    fn timeout(&mut self) {
        self.countdown.cancel();
        self.reveal.cancel();
        let index = self.session.index;

        self.record(index);
        self.notify(NoticeKind::Error, "Time's up!");
        self.play(SoundEvent::GameOver);
        self.session.stage = Stage::GameOver(GameOverReason::TimeUp);
        info!(level = index, score = self.session.score, "time ran out");
    }

    /// Add the finished play-through to the board and persist it.
    fn record(&mut self, levels_completed: usize) {
        let now = (self.clock)();
        self.board = self
            .board
            .record_entry(self.session.score, levels_completed, now);
        self.last_entry = Some(HighScoreEntry {
            score: self.session.score,
            date: now,
            levels_completed,
        });

        match save_board(self.store.as_mut(), &self.board) {
            Ok(()) => info!(score = self.session.score, levels_completed, "high score recorded"),
            Err(err) => warn!(error = %err, "could not persist high scores"),
        }
    }

    fn play(&mut self, event: SoundEvent) {
        if !self.sound_enabled {
            return;
        }
        if let Err(err) = self.sound.play(event) {
            debug!(event = event.as_str(), error = %err, "sound dropped");
        }
    }

    fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notices.push(Notice::new(kind, text));
    }

    fn invalid(&self, intent: Intent) -> EngineError {
        EngineError::InvalidTransition {
            intent: intent.as_str(),
            phase: self.phase(),
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::headless(RiddleCatalog::builtin())
    }
}
