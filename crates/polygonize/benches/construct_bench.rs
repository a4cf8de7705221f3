//! Criterion benchmarks for construction and full repair runs.
//! Focus sizes: n in {10, 25, 50}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polygonize::construct::{AntCfg, ConstructionMethod};
use polygonize::improve::Policy;
use polygonize::point::PointSet;
use polygonize::sample::{draw_points, BoxCfg, ReplayToken};
use polygonize::session::Session;

fn points(n: usize, seed: u64) -> PointSet {
    draw_points(
        BoxCfg {
            count: n,
            bound: 100,
        },
        ReplayToken { seed, index: 0 },
    )
    .unwrap()
}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    for &n in &[10usize, 25, 50] {
        let pts = points(n, 7);
        group.bench_with_input(BenchmarkId::new("nearest_neighbor", n), &pts, |b, pts| {
            let mut s = Session::seeded(1);
            b.iter(|| {
                s.construct(
                    pts,
                    ConstructionMethod::NearestNeighbor {
                        random_start: false,
                    },
                )
                .unwrap()
            })
        });

        group.bench_with_input(BenchmarkId::new("ant_colony", n), &pts, |b, pts| {
            b.iter_batched(
                || Session::seeded(2),
                |mut s| {
                    // Fresh table per run; degenerate colonies are part of the cost.
                    let _ = s.construct(pts, ConstructionMethod::AntColony(AntCfg::default()));
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("repair_best_first", n), &pts, |b, pts| {
            b.iter_batched(
                || {
                    let mut s = Session::seeded(3);
                    let t = s
                        .construct(pts, ConstructionMethod::RandomPermutation)
                        .unwrap();
                    (s, t)
                },
                |(mut s, t)| {
                    let _ = s.improver(t, Policy::BestFirst).run_with_budget(10_000);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_construct);
criterion_main!(benches);
