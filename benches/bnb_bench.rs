//! Criterion benchmarks for the branch-and-bound and backtracking solvers.
//!
//! Uses seeded random knapsack instances so every run measures the same
//! search trees.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_branchbound::knapsack::{random_problem, BnbConfig, BnbRunner};
use u_branchbound::queens::{QueensConfig, QueensRunner};

// ===========================================================================
// Knapsack
// ===========================================================================

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack_bnb");
    group.sample_size(20);

    for &n in &[10usize, 20, 40] {
        let problem = random_problem(n, 100, 100, 0.5, 42).expect("valid generator arguments");

        let traced = BnbConfig::default();
        group.bench_with_input(
            BenchmarkId::new("traced", n),
            &(problem.clone(), traced),
            |b, (p, c)| {
                b.iter(|| {
                    let result = BnbRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );

        let quiet = BnbConfig::default().with_record_trace(false);
        group.bench_with_input(BenchmarkId::new("quiet", n), &(problem, quiet), |b, (p, c)| {
            b.iter(|| {
                let result = BnbRunner::run(black_box(p), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

// ===========================================================================
// N-Queens
// ===========================================================================

fn bench_queens(c: &mut Criterion) {
    let mut group = c.benchmark_group("queens_all_solutions");
    group.sample_size(10);

    for &n in &[6usize, 8, 10] {
        let config = QueensConfig::new(n).with_record_trace(false);
        group.bench_with_input(BenchmarkId::from_parameter(n), &config, |b, c| {
            b.iter(|| {
                let result = QueensRunner::run(black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack, bench_queens);
criterion_main!(benches);
