//! Most-recent-notice display with a fixed lifetime.

use crate::core::Notice;
use crate::types::TOAST_MS;

/// Holds the latest notice until it expires
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    current: Option<Notice>,
    remaining_ms: u32,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `notice`, replacing whatever was on screen.
    pub fn push(&mut self, notice: Notice) {
        self.current = Some(notice);
        self.remaining_ms = TOAST_MS;
    }

    /// Push a batch; only the last one stays visible.
    pub fn extend(&mut self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.push(notice);
        }
    }

    /// Age the visible notice. Returns true if it just expired.
    pub fn update(&mut self, elapsed_ms: u32) -> bool {
        if self.current.is_none() {
            return false;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(elapsed_ms);
        if self.remaining_ms == 0 {
            self.current = None;
            return true;
        }
        false
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.remaining_ms = 0;
    }
}
