use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iso_dungeon::core::{draw_scene, GameSession, GameSnapshot};
use iso_dungeon::term::{Atlas, FrameBuffer, GameView, IsoCanvas, Viewport};
use iso_dungeon::types::GameAction;

fn playing() -> GameSession {
    let mut s = GameSession::new();
    s.step(&[GameAction::Confirm]);
    s
}

fn bench_tick(c: &mut Criterion) {
    let mut s = playing();

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if !s.tick() {
                s = playing();
            }
        })
    });
}

fn bench_attack(c: &mut Criterion) {
    c.bench_function("player_attack", |b| {
        b.iter(|| {
            let mut s = playing();
            s.player_mut().body.place(4, 3);
            black_box(s.attack());
        })
    });
}

fn bench_step_with_input(c: &mut Criterion) {
    let mut s = playing();
    let moves = [GameAction::MoveRight, GameAction::MoveLeft];
    let mut i = 0;

    c.bench_function("session_step_move", |b| {
        b.iter(|| {
            i ^= 1;
            s.step(black_box(&moves[i..=i]));
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let s = playing();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            s.snapshot_into(&mut snap);
            black_box(snap.fingerprint());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let s = playing();
    let snap = s.snapshot();
    let view = GameView::default();
    let vp = Viewport::new(120, 40);
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("game_view_render_into", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), vp, &mut fb);
        })
    });

    let atlas = Atlas::empty();
    c.bench_function("draw_scene", |b| {
        b.iter(|| {
            draw_scene(black_box(&snap), &mut IsoCanvas::new(&mut fb, &atlas));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_attack,
    bench_step_with_input,
    bench_snapshot,
    bench_render
);
criterion_main!(benches);
