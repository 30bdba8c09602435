//! Criterion benchmarks for schedule cost evaluation and annealing.
//!
//! Cost is recomputed from scratch on every annealing step, so `get_cost`
//! dominates `optimize`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use match_schedule::Schedule;

fn bench_get_cost(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_cost");

    for &(teams, quota) in &[(18usize, 6usize), (30, 12), (60, 12)] {
        let mut schedule = Schedule::with_seed(teams, quota, 42).unwrap();
        schedule.shuffle();
        group.bench_with_input(
            BenchmarkId::new(format!("t{}_q{}", teams, quota), teams),
            &schedule,
            |b, s| b.iter(|| black_box(s.get_cost().unwrap())),
        );
    }
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize");
    group.sample_size(10);

    for &teams in &[18usize, 30, 60] {
        group.bench_with_input(BenchmarkId::from_parameter(teams), &teams, |b, &t| {
            b.iter(|| {
                let mut schedule = Schedule::with_seed(t, 12, 42).unwrap();
                schedule.shuffle();
                let result = schedule.optimize(black_box(1000.0), black_box(1000)).unwrap();
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_get_cost, bench_optimize);
criterion_main!(benches);
