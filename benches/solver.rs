use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use connect4_solver::{
    bitboard::Position, solver::Solver, transposition_table::TranspositionTable,
};

// any prime capacity with capacity * 2^32 >= 2^49 keeps lookups sound
const BENCH_TABLE_SIZE: usize = 131_101;

fn bench_non_losing_moves(c: &mut Criterion) {
    let position = Position::from_moves("7422341735").unwrap();

    c.bench_function("position_non_losing_moves", |b| {
        b.iter(|| black_box(position).non_losing_moves())
    });
}

fn bench_canonical_key(c: &mut Criterion) {
    let position = Position::from_moves("32164625116371152").unwrap();

    c.bench_function("position_canonical_key", |b| {
        b.iter(|| black_box(position).key())
    });
}

fn bench_solve_midgame(c: &mut Criterion) {
    let position = Position::from_moves("32164625116371152").unwrap();

    c.bench_function("solve_midgame", |b| {
        b.iter(|| {
            let mut solver = Solver::with_transposition_table(TranspositionTable::with_capacity(
                BENCH_TABLE_SIZE,
            ));
            solver.solve(black_box(position)).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_non_losing_moves,
    bench_canonical_key,
    bench_solve_midgame
);
criterion_main!(benches);
