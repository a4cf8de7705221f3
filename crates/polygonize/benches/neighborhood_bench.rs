//! Criterion benchmarks for crossing detection and 2-exchange neighborhoods.
//! Focus sizes: n in {10, 25, 50, 100} random points in a 201x201 box.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use polygonize::construct::random_permutation;
use polygonize::sample::{draw_points, BoxCfg, ReplayToken};
use polygonize::tour::{Neighborhood, Tour};
use rand::{rngs::StdRng, SeedableRng};

fn random_tour(n: usize, seed: u64) -> Tour {
    let pts = draw_points(
        BoxCfg {
            count: n,
            bound: 100,
        },
        ReplayToken { seed, index: 0 },
    )
    .unwrap();
    random_permutation(&pts, &mut StdRng::seed_from_u64(seed))
}

fn bench_neighborhood(c: &mut Criterion) {
    let mut group = c.benchmark_group("tour");
    for &n in &[10usize, 25, 50, 100] {
        group.bench_with_input(BenchmarkId::new("crossings", n), &n, |b, &n| {
            b.iter_batched(
                || random_tour(n, 41),
                |t| t.intersection_count(),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("neighborhood", n), &n, |b, &n| {
            b.iter_batched(
                || random_tour(n, 42),
                |t| Neighborhood::generate(&t).len(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_neighborhood);
criterion_main!(benches);
