use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::SmallRng, SeedableRng};
use toroidal_snake::{
    controller::StandardGame,
    engine,
    types::{ColumnRenderableGame, Direction},
    BoardSnapshot, StandardBoard,
};

fn bench_tick_loop(c: &mut Criterion) {
    let mut game = StandardGame::seeded(42).expect("16x8 is a supported size");
    let mut i = 0usize;
    c.bench_function("tick with turning input", |b| {
        b.iter(|| {
            i += 1;
            if i % 5 == 0 {
                game.request_direction(Direction::from_index(i / 5));
            }
            black_box(game.tick())
        })
    });
}

fn bench_full_display_refresh(c: &mut Criterion) {
    let game = StandardGame::seeded(42).expect("16x8 is a supported size");
    c.bench_function("render all columns", |b| {
        b.iter(|| {
            for x in 0..16 {
                black_box(game.render_column(black_box(x)));
            }
        })
    });
}

fn bench_eat_and_place_reward(c: &mut Criterion) {
    let fixture = include_str!("../fixtures/reward_ahead.json");
    let snapshot = BoardSnapshot::from_json(fixture).expect("the json literal is valid");
    let board = StandardBoard::from_snapshot(&snapshot).expect("fixture is a valid board");
    let mut rng = SmallRng::seed_from_u64(7);
    c.bench_function("step onto reward", |b| {
        b.iter(|| {
            let mut board = black_box(board);
            engine::step(&mut board, Some(Direction::Left), &mut rng)
        })
    });
}

criterion_group!(
    benches,
    bench_tick_loop,
    bench_full_display_refresh,
    bench_eat_and_place_reward
);
criterion_main!(benches);
