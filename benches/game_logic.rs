use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stacktris::core::{
    clear_full_rows, move_tetromino, rotate_tetromino, spawn_tetromino, update_background,
    EngineConfig, GameState, Grid,
};
use stacktris::types::{Move, TetrominoKind};

fn started() -> GameState {
    spawn_tetromino(&GameState::new(EngineConfig::default(), 12345), None)
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started();

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            state = update_background(black_box(&state));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut rows = vec![vec![0u8; 10]; 20];
    for row in rows.iter_mut().skip(16) {
        row.fill(1);
    }
    let background = Grid::from_rows(&rows).unwrap();

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| clear_full_rows(black_box(&background)))
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let state = GameState::new(EngineConfig::default(), 12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| spawn_tetromino(black_box(&state), Some(TetrominoKind::T)))
    });
}

fn bench_move(c: &mut Criterion) {
    let state = started();

    c.bench_function("move_left", |b| {
        b.iter(|| move_tetromino(black_box(&state), Move::Left))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let state = started();

    c.bench_function("rotate_cw", |b| b.iter(|| rotate_tetromino(black_box(&state))));
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
