//! Hint usage for the current play-through.

use std::collections::BTreeSet;

/// Riddle indices whose hint has been bought
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HintUsage {
    used: BTreeSet<usize>,
}

impl HintUsage {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn is_used(&self, index: usize) -> bool {
        self.used.contains(&index)
    }

    /// Copy of this set with `index` added.
    pub fn mark_used(&self, index: usize) -> Self {
        let mut used = self.used.clone();
        used.insert(index);
        Self { used }
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
