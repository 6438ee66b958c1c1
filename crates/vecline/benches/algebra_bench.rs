//! Criterion benchmarks for decimal vector and line operations.
//! Focus dimensions: n in {2, 3, 8, 32}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p vecline

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use vecline::{Decimal, Line, Vector};

fn random_vector(n: usize, rng: &mut StdRng) -> Vector {
    let coords = (0..n)
        .map(|_| Decimal::new(rng.gen_range(-10_000i64..10_000), 3))
        .collect();
    Vector::from_decimals(coords).unwrap()
}

fn random_line(rng: &mut StdRng) -> Line {
    let n = random_vector(2, rng);
    Line::new(n, Decimal::new(rng.gen_range(-10_000i64..10_000), 3)).unwrap()
}

fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");
    for &n in &[2usize, 3, 8, 32] {
        group.bench_with_input(BenchmarkId::new("normalize", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(43);
            b.iter_batched(
                || random_vector(n, &mut rng),
                |v| {
                    let _u = v.normalize();
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("is_parallel", n), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(44);
            b.iter_batched(
                || (random_vector(n, &mut rng), random_vector(n, &mut rng)),
                |(v, w)| {
                    let _p = v.is_parallel(&w).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");
    group.bench_function("intersect", |b| {
        let mut rng = StdRng::seed_from_u64(45);
        b.iter_batched(
            || (random_line(&mut rng), random_line(&mut rng)),
            |(l1, l2)| {
                let _x = l1.intersect(&l2);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_vector, bench_line);
criterion_main!(benches);
