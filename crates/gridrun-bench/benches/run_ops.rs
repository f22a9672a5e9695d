//! Criterion benchmarks for whole runs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gridrun_bench::{random_fleet, reference_profile, stress_profile};
use gridrun_engine::Session;

/// Benchmark: validate and build a session for the reference profile.
fn bench_build_reference(c: &mut Criterion) {
    let config = reference_profile(42);
    c.bench_function("build_reference", |b| {
        b.iter(|| black_box(Session::from_config(&config).unwrap()));
    });
}

/// Benchmark: run the reference profile once (setup excluded).
fn bench_run_reference(c: &mut Criterion) {
    let config = reference_profile(42);
    c.bench_function("run_reference", |b| {
        b.iter_batched(
            || Session::from_config(&config).unwrap(),
            |mut session| black_box(session.run().unwrap()),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: run a crowded 20x20 field where most cars freeze early.
fn bench_run_crowded(c: &mut Criterion) {
    let config = random_fleet(20, 20, 200, 200, 7);
    c.bench_function("run_crowded_20x20", |b| {
        b.iter_batched(
            || Session::from_config(&config).unwrap(),
            |mut session| black_box(session.run().unwrap()),
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: run the stress profile once.
fn bench_run_stress(c: &mut Criterion) {
    let config = stress_profile(42);
    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("run_stress", |b| {
        b.iter_batched(
            || Session::from_config(&config).unwrap(),
            |mut session| black_box(session.run().unwrap()),
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_build_reference,
    bench_run_reference,
    bench_run_crowded,
    bench_run_stress
);
criterion_main!(benches);
