//! Cancellable timers driven by elapsed milliseconds.
//!
//! The engine owns its timers and advances them from the fixed-timestep
//! loop, so nothing here touches a real clock and tests stay deterministic.

/// A one-shot or recurring timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timer {
    /// `Some` for recurring timers.
    period_ms: Option<u32>,
    remaining_ms: u32,
    armed: bool,
}

impl Timer {
    /// A disarmed timer.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Fires every `period_ms` until cancelled.
    pub fn interval(period_ms: u32) -> Self {
        let period_ms = period_ms.max(1);
        Self {
            period_ms: Some(period_ms),
            remaining_ms: period_ms,
            armed: true,
        }
    }

    /// Fires once after `delay_ms`, then disarms.
    pub fn one_shot(delay_ms: u32) -> Self {
        Self {
            period_ms: None,
            remaining_ms: delay_ms,
            armed: true,
        }
    }

    pub fn cancel(&mut self) {
        self.armed = false;
        self.remaining_ms = 0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Advance by `elapsed_ms` and return how many times the timer fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }

        if elapsed_ms < self.remaining_ms {
            self.remaining_ms -= elapsed_ms;
            return 0;
        }

        let overshoot = elapsed_ms - self.remaining_ms;
        match self.period_ms {
            Some(period) => {
                let fires = 1 + overshoot / period;
                self.remaining_ms = period - overshoot % period;
                fires
            }
            None => {
                self.cancel();
                1
            }
        }
    }
}
