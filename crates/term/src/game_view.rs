//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameOverReason, GameSnapshot, HighScoreEntry, Notice};
use crate::fb::{palette, wrap_text, Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{NoticeKind, Phase, HINT_COST};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Smallest viewport a screen is drawn in.
pub const MIN_WIDTH: u16 = 32;
pub const MIN_HEIGHT: u16 = 14;

const OPTION_LABELS: [char; 9] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Renders one screen per phase.
pub struct GameView {
    /// Widest the content panel grows.
    max_width: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            max_width: 64,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Column, width and running row inside the content panel
struct Panel {
    x: u16,
    w: u16,
    y: u16,
}

impl Panel {
    fn next(&mut self) -> u16 {
        let y = self.y;
        self.y += 1;
        y
    }

    fn skip(&mut self, rows: u16) {
        self.y += rows;
    }
}

impl GameView {
    pub fn new(max_width: u16) -> Self {
        Self {
            max_width: max_width.max(MIN_WIDTH),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into a fresh framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        notice: Option<&Notice>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, notice, viewport, &mut fb);
        fb
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        notice: Option<&Notice>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        if viewport.width < MIN_WIDTH || viewport.height < MIN_HEIGHT {
            let y = viewport.height / 2;
            fb.put_str_centered(0, y, viewport.width, "Terminal too small", text(palette::DANGER));
            return;
        }

        let w = viewport.width.min(self.max_width) - 2;
        let x = (viewport.width - w) / 2;
        let content_h = match snap.phase {
            Phase::Menu => 14 + snap.high_scores.len().min(10) as u16,
            Phase::Playing => 18,
            _ => 10,
        };
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(content_h) / 2,
            AnchorY::Top => 1,
        };
        let mut panel = Panel { x, w, y };

        match snap.phase {
            Phase::Menu => self.draw_menu(fb, snap, &mut panel, viewport.height),
            Phase::Playing => self.draw_playing(fb, snap, &mut panel),
            Phase::LevelComplete => self.draw_level_complete(fb, snap, &mut panel),
            Phase::GameOver => self.draw_game_over(fb, snap, &mut panel),
            Phase::Victory => self.draw_victory(fb, snap, &mut panel),
        }

        if let Some(notice) = notice {
            draw_notice(fb, notice, viewport);
        }
        draw_status(fb, snap, viewport);
    }

    fn draw_menu(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, p: &mut Panel, height: u16) {
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, "R I D D L E S", text(palette::ACCENT).bold());
        let y = p.next();
        let (min, max) = snap.time_limit_range;
        let limits = if min == max {
            format!("{} riddles, {}s each", snap.level_count, max)
        } else {
            format!("{} riddles, {}-{}s each", snap.level_count, min, max)
        };
        fb.put_str_centered(p.x, y, p.w, &limits, text(palette::MUTED));
        p.skip(1);

        let y = p.next();
        let best = match snap.best_score() {
            Some(best) => format!("Best score: {best}"),
            None => "No games played yet".to_string(),
        };
        fb.put_str_centered(p.x, y, p.w, &best, text(palette::GOLD));
        p.skip(1);

        for rule in [
            "Answer before the clock runs out.",
            "100 points per riddle, +10 per second left.",
            "A hint costs 50 points.",
            "One wrong answer ends the game.",
        ] {
            let y = p.next();
            fb.put_str_centered(p.x, y, p.w, rule, text(palette::TEXT));
        }
        p.skip(1);

        if !snap.high_scores.is_empty() {
            let room = height.saturating_sub(p.y + 5) as usize;
            draw_high_scores(fb, snap.high_scores, p, room);
            p.skip(1);
        }

        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, "Enter  start", text(palette::ACCENT).bold());
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, p: &mut Panel) {
        // Header: score left, riddle counter right.
        let y = p.next();
        fb.put_str(p.x, y, &format!("Score: {}", snap.score), text(palette::GOLD).bold());
        let counter = format!("Riddle {}/{}", snap.level + 1, snap.level_count);
        put_right(fb, p.x + p.w, y, &counter, text(palette::TEXT));
        let y = p.next();
        fb.draw_gauge(p.x, y, p.w, snap.progress_percent(), palette::ACCENT);
        p.skip(1);

        let urgent = snap.is_urgent();
        let clock = if urgent { palette::DANGER } else { palette::SUCCESS };
        let y = p.next();
        let countdown = format!("{}s", snap.time_left);
        let style = if urgent { text(clock).bold() } else { text(clock) };
        fb.put_str_centered(p.x, y, p.w, &countdown, style);
        let y = p.next();
        fb.draw_gauge(p.x, y, p.w, snap.time_percent(), clock);
        p.skip(1);

        // Question box.
        let lines = wrap_text(&snap.riddle.question, p.w.saturating_sub(4) as usize);
        let box_h = lines.len() as u16 + 2;
        fb.draw_box(p.x, p.y, p.w, box_h, text(palette::MUTED));
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_centered(p.x + 2, p.y + 1 + i as u16, p.w - 4, line, text(palette::TEXT).bold());
        }
        p.skip(box_h + 1);

        for (i, option) in snap.riddle.options.iter().enumerate() {
            let y = p.next();
            let label = OPTION_LABELS.get(i).copied().unwrap_or('?');
            let (marker, style) = option_look(snap, i);
            let line = format!("{marker} {label}) {option}");
            fb.put_str(p.x + 2, y, &line, style);
        }
        p.skip(1);

        let y = p.next();
        if let Some(hint) = snap.hint {
            let line = format!("Hint: {hint}");
            for (i, part) in wrap_text(&line, p.w as usize).iter().enumerate() {
                fb.put_str(p.x, y + i as u16, part, text(palette::GOLD));
            }
        } else if !snap.hint_used && snap.feedback.is_none() && snap.riddle.hint.is_some() {
            let style = if snap.score >= HINT_COST {
                text(palette::INFO)
            } else {
                text(palette::MUTED).dim()
            };
            fb.put_str(p.x, y, &format!("h  hint (-{HINT_COST} points)"), style);
        }
    }

    fn draw_level_complete(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, p: &mut Panel) {
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, "Correct!", text(palette::SUCCESS).bold());
        p.skip(1);
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, &format!("Score: {}", snap.score), text(palette::GOLD));
        let y = p.next();
        let solved = format!("Riddles solved: {}/{}", snap.level + 1, snap.level_count);
        fb.put_str_centered(p.x, y, p.w, &solved, text(palette::TEXT));
        let y = p.next();
        fb.draw_gauge(p.x, y, p.w, snap.progress_percent(), palette::ACCENT);
        p.skip(1);
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, "Enter  next riddle", text(palette::ACCENT).bold());
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, p: &mut Panel) {
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, "GAME OVER", text(palette::DANGER).bold());
        let y = p.next();
        let reason = match snap.game_over {
            Some(GameOverReason::TimeUp) => "Time's up!",
            Some(GameOverReason::WrongAnswer) => "Wrong answer!",
            None => "",
        };
        fb.put_str_centered(p.x, y, p.w, reason, text(palette::MUTED));
        p.skip(1);

        if snap.game_over == Some(GameOverReason::WrongAnswer) {
            let y = p.next();
            let answer = snap
                .riddle
                .options
                .get(snap.riddle.correct_answer)
                .map(String::as_str)
                .unwrap_or_default();
            fb.put_str_centered(p.x, y, p.w, &format!("Answer: {answer}"), text(palette::SUCCESS));
        }
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, &format!("Score: {}", snap.score), text(palette::GOLD));
        let y = p.next();
        let solved = format!("Riddles solved: {}/{}", snap.level, snap.level_count);
        fb.put_str_centered(p.x, y, p.w, &solved, text(palette::TEXT));
        p.skip(1);
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, "Enter  try again", text(palette::ACCENT).bold());
    }

    fn draw_victory(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, p: &mut Panel) {
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, "VICTORY!", text(palette::GOLD).bold());
        let y = p.next();
        let all = format!("All {} riddles solved", snap.level_count);
        fb.put_str_centered(p.x, y, p.w, &all, text(palette::TEXT));
        p.skip(1);
        let y = p.next();
        let score = format!("Final score: {}", snap.score);
        fb.put_str_centered(p.x, y, p.w, &score, text(palette::GOLD).bold());
        if snap.new_record {
            let y = p.next();
            fb.put_str_centered(p.x, y, p.w, "New personal best!", text(palette::SUCCESS).bold());
        }
        p.skip(1);
        let y = p.next();
        fb.put_str_centered(p.x, y, p.w, "Enter  play again", text(palette::ACCENT).bold());
    }
}

fn text(fg: Rgb) -> CellStyle {
    CellStyle::fg(fg)
}

fn put_right(fb: &mut FrameBuffer, right: u16, y: u16, s: &str, style: CellStyle) {
    let len = s.chars().count() as u16;
    fb.put_str(right.saturating_sub(len), y, s, style);
}

/// Marker and style for option `i`, reflecting a pending verdict.
fn option_look(snap: &GameSnapshot, i: usize) -> (char, CellStyle) {
    let Some(feedback) = snap.feedback else {
        return (' ', text(palette::TEXT));
    };
    if i == feedback.selected {
        if feedback.correct {
            ('✓', text(palette::SUCCESS).bold())
        } else {
            ('✗', text(palette::DANGER).bold())
        }
    } else {
        (' ', text(palette::MUTED).dim())
    }
}

fn draw_high_scores(fb: &mut FrameBuffer, entries: &[HighScoreEntry], p: &mut Panel, room: usize) {
    let y = p.next();
    fb.put_str_centered(p.x, y, p.w, "High scores", text(palette::ACCENT).bold());
    let y = p.next();
    let header = format!("{:>2}  {:>6}  {:>6}  {:<10}", "#", "Score", "Solved", "Date");
    fb.put_str_centered(p.x, y, p.w, &header, text(palette::MUTED));

    for (rank, entry) in entries.iter().take(room).enumerate() {
        let y = p.next();
        let row = format!(
            "{:>2}  {:>6}  {:>6}  {:<10}",
            rank + 1,
            entry.score,
            entry.levels_completed,
            entry.date.format("%Y-%m-%d")
        );
        let style = if rank == 0 {
            text(palette::GOLD)
        } else {
            text(palette::TEXT)
        };
        fb.put_str_centered(p.x, y, p.w, &row, style);
    }
}

fn draw_notice(fb: &mut FrameBuffer, notice: &Notice, viewport: Viewport) {
    let color = match notice.kind {
        NoticeKind::Success => palette::SUCCESS,
        NoticeKind::Error => palette::DANGER,
        NoticeKind::Info => palette::INFO,
    };
    let y = viewport.height.saturating_sub(3);
    let body = format!(" {} ", notice.text);
    fb.put_str_centered(0, y, viewport.width, &body, CellStyle::fg(palette::BACKGROUND).on(color).bold());
}

/// Bottom line: key help and sound state.
fn draw_status(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport) {
    let y = viewport.height - 1;
    let sound = if snap.sound_enabled { "m sound: on" } else { "m sound: off" };
    let keys = match snap.phase {
        Phase::Playing => "1-4/a-d answer  h hint  q quit",
        _ => "q quit",
    };
    fb.put_str(1, y, keys, text(palette::MUTED));
    put_right(fb, viewport.width - 1, y, sound, text(palette::MUTED));
}
