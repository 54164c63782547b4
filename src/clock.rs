//! Wall-clock pacing for the terminal loop.
//!
//! The loop wakes roughly every `FRAME_MS`, but polls overshoot and renders
//! stall. [`FrameClock`] hands the engine the time that really passed, so the
//! riddle countdown keeps pace with the wall clock whatever the frame rate.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    /// Instant up to which time has been handed out.
    last: Instant,
    step: Duration,
}

impl FrameClock {
    pub fn new(step_ms: u32, now: Instant) -> Self {
        Self {
            last: now,
            step: Duration::from_millis(step_ms.max(1) as u64),
        }
    }

    /// How long to wait for input before the next step is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        (self.last + self.step).saturating_duration_since(now)
    }

    /// Whole milliseconds elapsed since the last step, once a step is due.
    ///
    /// The sub-millisecond remainder is carried into the next step.
    pub fn advance(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.step {
            return None;
        }
        let ms = elapsed.as_millis().min(u32::MAX as u128) as u32;
        self.last += Duration::from_millis(ms as u64);
        Some(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameEngine, RiddleCatalog};
    use crate::types::{Phase, FRAME_MS};

    #[test]
    fn nothing_before_a_step_is_due() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(FRAME_MS, t0);
        assert_eq!(clock.advance(t0 + Duration::from_millis(15)), None);
        assert_eq!(clock.poll_timeout(t0 + Duration::from_millis(10)), Duration::from_millis(6));
        assert_eq!(clock.advance(t0 + Duration::from_millis(16)), Some(16));
        assert_eq!(clock.poll_timeout(t0 + Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn slow_frames_hand_out_all_elapsed_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(FRAME_MS, t0);
        let total: u32 = (1..=1500)
            .filter_map(|i| clock.advance(t0 + Duration::from_millis(20 * i)))
            .sum();
        assert_eq!(total, 30_000);
    }

    #[test]
    fn fractional_frames_carry_remainder() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(FRAME_MS, t0);
        // 600 frames of 16.667ms = 10_000.2ms
        let total: u32 = (1..=600)
            .filter_map(|i| clock.advance(t0 + Duration::from_micros(16_667 * i)))
            .sum();
        assert_eq!(total, 10_000);
    }

    #[test]
    fn stall_is_handed_out_in_one_step() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(FRAME_MS, t0);
        assert_eq!(clock.advance(t0 + Duration::from_secs(5)), Some(5000));
    }

    #[test]
    fn countdown_keeps_wall_clock_pace_at_low_frame_rate() {
        let mut engine = GameEngine::headless(RiddleCatalog::builtin());
        engine.start().unwrap();
        let limit = engine.time_left();

        let t0 = Instant::now();
        let mut clock = FrameClock::new(FRAME_MS, t0);
        for i in 1..=(limit as u64 * 1000 / 20) {
            if let Some(elapsed) = clock.advance(t0 + Duration::from_millis(20 * i)) {
                engine.update(elapsed);
            }
        }
        assert_eq!(engine.phase(), Phase::GameOver);
        assert_eq!(engine.time_left(), 0);
    }
}
