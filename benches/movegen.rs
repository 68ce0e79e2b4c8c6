use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lib::chess::{Board, Color};
use lib::rules::{all_legal_moves, perft, status};

fn movegen(c: &mut Criterion) {
    let board = Board::default();

    c.benchmark_group("benches")
        .bench_function("movegen/legal", |b| {
            b.iter(|| all_legal_moves(Color::White, black_box(&board)))
        })
        .bench_function("movegen/status", |b| {
            b.iter(|| status(Color::White, black_box(&board)))
        })
        .bench_function("movegen/perft", |b| {
            b.iter(|| perft(Color::White, black_box(&board), 3))
        });
}

criterion_group!(benches, movegen);
criterion_main!(benches);
