//! Benchmarks for the king slide puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rustc_hash::FxHashSet;

use kingslide::geometry::Position;
use kingslide::solver;
use kingslide::state::{Move, PuzzleState};
use kingslide::StateSpace;

/// Benchmark the complete breadth-first search.
fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve_puzzle", |b| {
        b.iter(|| solver::solve(black_box(PuzzleState::initial())))
    });
}

/// Benchmark enumerating the legal moves of one state.
fn bench_legal_moves(c: &mut Criterion) {
    let state = PuzzleState::initial();

    c.bench_function("legal_moves", |b| {
        b.iter(|| black_box(&state).legal_moves())
    });
}

/// Benchmark a single move legality check.
fn bench_is_legal(c: &mut Criterion) {
    let state = PuzzleState::initial();
    let legal = Move::new(Position::new(1, 1), Position::new(1, 2));
    let illegal = Move::new(Position::new(1, 0), Position::new(1, 2));

    c.bench_function("is_legal", |b| {
        b.iter(|| {
            black_box(state.is_legal(black_box(legal)));
            black_box(state.is_legal(black_box(illegal)));
        })
    });
}

/// Benchmark visited-set insertion along a short walk.
fn bench_state_dedup(c: &mut Criterion) {
    let mut states = Vec::new();
    let mut state = PuzzleState::initial();
    for _ in 0..16 {
        states.push(state.clone());
        let next = state.legal_moves().into_iter().min().unwrap();
        state = StateSpace::apply(&state, next);
    }

    c.bench_function("state_dedup", |b| {
        b.iter(|| {
            let mut seen: FxHashSet<PuzzleState> = FxHashSet::default();
            for state in &states {
                seen.insert(black_box(state).clone());
            }
            seen.len()
        })
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_legal_moves,
    bench_is_legal,
    bench_state_dedup
);
criterion_main!(benches);
