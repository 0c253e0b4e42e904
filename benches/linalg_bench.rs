//! Benchmarks for exact matrix algorithms.
//!
//! Includes:
//! - Cofactor expansion vs elimination determinants
//! - Reduced row echelon form
//! - Inverse via Gauss-Jordan
//! - Sequential vs parallel products

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use exacta::prelude::*;

/// Dense `n x n` matrix with small, mostly distinct entries.
fn test_matrix(n: usize) -> Matrix {
    let columns = (0..n)
        .map(|c| {
            (0..n)
                .map(|r| {
                    let v = ((r * 7 + c * 3 + r * c) % 11) as i64 - 5;
                    Scalar::from(if r == c { v + 12 } else { v })
                })
                .collect()
        })
        .collect();
    Matrix::from_columns(columns).unwrap()
}

/// Benchmark both determinant strategies.
fn bench_determinant(c: &mut Criterion) {
    let mut group = c.benchmark_group("determinant");

    for n in [3, 4, 5] {
        let m = test_matrix(n);

        group.bench_with_input(BenchmarkId::new("cofactor", n), &m, |b, m| {
            b.iter(|| black_box(m.cofactor_determinant()))
        });

        group.bench_with_input(BenchmarkId::new("elimination", n), &m, |b, m| {
            b.iter(|| black_box(m.elimination_determinant()))
        });
    }

    group.finish();
}

/// Benchmark RREF and inversion.
fn bench_elimination(c: &mut Criterion) {
    let mut group = c.benchmark_group("elimination");

    for n in [5, 10, 20] {
        let m = test_matrix(n);

        group.bench_with_input(BenchmarkId::new("rref", n), &m, |b, m| {
            b.iter(|| black_box(m.rref()))
        });

        group.bench_with_input(BenchmarkId::new("inverse", n), &m, |b, m| {
            b.iter(|| black_box(m.inverse()))
        });
    }

    group.finish();
}

/// Benchmark matrix products with and without rayon.
fn bench_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("product");

    let sequential = Limits {
        parallel_threshold: usize::MAX,
        ..Limits::default()
    };
    let parallel = Limits {
        parallel_threshold: 0,
        ..Limits::default()
    };

    for n in [8, 16, 32] {
        let m = test_matrix(n);

        group.bench_with_input(BenchmarkId::new("sequential", n), &m, |b, m| {
            b.iter(|| black_box(m.try_mul_with(m, &sequential)))
        });

        group.bench_with_input(BenchmarkId::new("parallel", n), &m, |b, m| {
            b.iter(|| black_box(m.try_mul_with(m, &parallel)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_determinant, bench_elimination, bench_product);
criterion_main!(benches);
