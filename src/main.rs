//! Terminal riddle game (default binary).
//!
//! crossterm for input, the framebuffer renderer for output. Each frame the
//! engine's timers advance by the wall time measured with [`FrameClock`].

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event};
use tracing::{info, warn};

use tui_riddles::core::{GameEngine, KeyValueStore, MemoryStore, RiddleCatalog};
use tui_riddles::input::{handle_key_event, should_quit};
use tui_riddles::store::FileStore;
use tui_riddles::term::{BellSink, FrameBuffer, GameView, TerminalRenderer, Toasts, Viewport};
use tui_riddles::types::FRAME_MS;
use tui_riddles::{logging, AppConfig, FrameClock};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref());
    info!(?config, "starting");

    let engine = build_engine(&config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, engine);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        warn!(error = %err, "game loop ended with an error");
    }
    result
}

fn build_engine(config: &AppConfig) -> GameEngine {
    let store: Box<dyn KeyValueStore> = if config.persist {
        match FileStore::open(&config.data_dir) {
            Ok(store) => Box::new(store),
            Err(err) => {
                warn!(error = %err, "falling back to in-memory scores");
                Box::new(MemoryStore::new())
            }
        }
    } else {
        Box::new(MemoryStore::new())
    };
    // The bell stays wired up when muted so `m` can turn it back on.
    GameEngine::new(RiddleCatalog::builtin(), store)
        .with_sound(Box::new(BellSink::stdout()))
        .with_sound_enabled(config.sound_enabled)
}

fn run(term: &mut TerminalRenderer, mut engine: GameEngine) -> Result<()> {
    let view = GameView::default();
    let mut toasts = Toasts::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut clock = FrameClock::new(FRAME_MS, Instant::now());

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&engine.snapshot(), toasts.current(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        if event::poll(clock.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(intent) = handle_key_event(key, engine.phase()) {
                        engine.apply(intent);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick with the time that actually passed.
        if let Some(elapsed) = clock.advance(Instant::now()) {
            engine.update(elapsed);
            toasts.update(elapsed);
        }
        toasts.extend(engine.take_notices());
    }
}
