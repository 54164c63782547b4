use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_riddles::core::{GameEngine, HighScoreBoard, RiddleCatalog};
use tui_riddles::term::{GameView, Viewport};
use tui_riddles::types::FRAME_MS;

fn bench_update(c: &mut Criterion) {
    let mut engine = GameEngine::headless(RiddleCatalog::builtin());
    engine.start().unwrap();

    c.bench_function("engine_update_16ms", |b| {
        b.iter(|| {
            // Keep the countdown from running out mid-benchmark.
            if engine.time_left() <= 1 {
                engine.restart().unwrap();
                engine.start().unwrap();
            }
            engine.update(black_box(FRAME_MS));
        })
    });
}

fn bench_record_entry(c: &mut Criterion) {
    let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let mut board = HighScoreBoard::new();
    for score in (0..10).map(|i| i * 100) {
        board = board.record_entry(score, 3, now);
    }

    c.bench_function("record_entry_full_board", |b| {
        b.iter(|| board.record_entry(black_box(450), 2, now))
    });
}

fn bench_render(c: &mut Criterion) {
    let mut engine = GameEngine::headless(RiddleCatalog::builtin());
    engine.start().unwrap();
    let view = GameView::default();
    let mut fb = tui_riddles::term::FrameBuffer::new(80, 30);

    c.bench_function("render_playing_80x30", |b| {
        b.iter(|| {
            view.render_into(&engine.snapshot(), None, Viewport::new(80, 30), &mut fb);
        })
    });
}

criterion_group!(benches, bench_update, bench_record_entry, bench_render);
criterion_main!(benches);
