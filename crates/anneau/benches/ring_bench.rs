//! Benchmarks for the generic ring algorithms.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use anneau::prelude::*;
use anneau::rings::MatrixAlgebra;

/// Generators with a known common factor.
fn ideal_generators(count: usize) -> Vec<Integer> {
    (0..count)
        .map(|i| Integer::new(6 * ((i as i64 % 97) + 1) * 1_000_003))
        .collect()
}

fn bench_roots_of_unity(c: &mut Criterion) {
    let mut group = c.benchmark_group("zeta_all");

    for p in [101u64, 1009, 10009] {
        let field = IntegerModRing::new(p).unwrap();
        field.is_field(true).unwrap();

        group.bench_with_input(BenchmarkId::new("F_p order 4", p), &p, |b, _| {
            b.iter(|| black_box(field.zeta_all(4).unwrap()))
        });
    }

    group.finish();
}

fn bench_ideal_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("ideal_gcd");
    let zz = IntegerRing::new();

    for count in [2, 16, 128, 1024] {
        let gens = ideal_generators(count);

        group.bench_with_input(BenchmarkId::new("ZZ", count), &count, |b, _| {
            b.iter(|| black_box(zz.ideal(gens.clone(), IdealOptions::default()).unwrap()))
        });
    }

    group.finish();
}

fn bench_extension_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("extension_arithmetic");

    let f2 = IntegerModRing::new(2).unwrap();
    let gf4 = f2
        .extension(vec![1u64, 1, 1], "x", &ExtensionOptions::default())
        .unwrap();
    let g = gf4.gens().remove(0);

    group.bench_function("GF(4) power", |b| {
        b.iter(|| black_box(gf4.power(&g, 1_000_001)))
    });
    group.bench_function("GF(4) inverse", |b| {
        b.iter(|| black_box(gf4.checked_inverse(&g)))
    });

    group.finish();
}

fn bench_matrix_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_inverse");
    group.sample_size(50);

    let qq = RationalField::new();
    for n in [2usize, 4, 8] {
        let algebra = MatrixAlgebra::new(&qq, n).unwrap();
        let rows = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        let entry = ((i + 1) * (j + 2) % 7) as i64 + i64::from(i == j);
                        Rational::from_i64(entry, 1)
                    })
                    .collect()
            })
            .collect();
        let m = algebra.matrix(rows).unwrap();

        group.bench_with_input(BenchmarkId::new("QQ", n), &n, |b, _| {
            b.iter(|| black_box(algebra.checked_inverse(&m)))
        });
    }

    group.finish();
}

fn bench_random_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_nonzero");
    let f7 = IntegerModRing::new(7).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    group.bench_function("F_7", |b| {
        b.iter(|| black_box(f7.random_nonzero_element(&mut rng).unwrap()))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_roots_of_unity,
    bench_ideal_gcd,
    bench_extension_arithmetic,
    bench_matrix_inverse,
    bench_random_elements
);

criterion_main!(benches);
