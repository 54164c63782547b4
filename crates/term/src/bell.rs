//! Terminal bell as the only audio device.
//!
//! A terminal cannot play distinct tones, so events are grouped: routine
//! feedback rings once, outcomes ring twice, and per-second ticks stay silent
//! unless the countdown is urgent.

use std::io::{self, Write};

use crate::core::{SoundError, SoundSink};
use crate::types::SoundEvent;

/// Number of BEL characters written for an event.
pub fn rings_for(event: SoundEvent) -> usize {
    match event {
        SoundEvent::Tick => 0,
        SoundEvent::Click
        | SoundEvent::Hint
        | SoundEvent::UrgentTick
        | SoundEvent::Correct
        | SoundEvent::Wrong
        | SoundEvent::LevelComplete => 1,
        SoundEvent::GameOver | SoundEvent::Victory => 2,
    }
}

/// `SoundSink` that writes BEL (0x07) to a writer
pub struct BellSink<W: Write = io::Stdout> {
    out: W,
}

impl BellSink<io::Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SoundSink for BellSink<W> {
    fn play(&mut self, event: SoundEvent) -> Result<(), SoundError> {
        let rings = rings_for(event);
        if rings == 0 {
            return Ok(());
        }
        for _ in 0..rings {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()?;
        Ok(())
    }
}
