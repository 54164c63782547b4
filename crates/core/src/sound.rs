//! Sound notification seam.
//!
//! The engine reports semantic events; a sink turns them into audio (or
//! nothing). Sink failures never affect game state.

use crate::error::SoundError;
use crate::types::SoundEvent;

pub trait SoundSink {
    fn play(&mut self, event: SoundEvent) -> Result<(), SoundError>;
}

/// Discards every event (headless runs and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSound;

impl SoundSink for NullSound {
    fn play(&mut self, _event: SoundEvent) -> Result<(), SoundError> {
        Ok(())
    }
}
