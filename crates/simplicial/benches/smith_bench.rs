//! Criterion benchmarks for diagonalization and full homology builds.
//! Focus sizes: n in {4, 8, 16, 32} for random matrices, S^1..S^4 for spheres.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use simplicial::complex::Complex;
use simplicial::sample::{clique_complex, random_int_matrix, sphere, CliqueParams};
use simplicial::smith::{diagonalize, diagonalize_with_transforms};

fn bench_smith(c: &mut Criterion) {
    let mut group = c.benchmark_group("smith");
    for &n in &[4usize, 8, 16, 32] {
        group.bench_with_input(BenchmarkId::new("diagonalize", n), &n, |b, &n| {
            b.iter_batched(
                || random_int_matrix(n, n, 5, 43),
                |a| {
                    let _d = diagonalize(&a).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("with_transforms", n), &n, |b, &n| {
            b.iter_batched(
                || random_int_matrix(n, n, 5, 44),
                |a| {
                    let _d = diagonalize_with_transforms(&a).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("complex");
    for &n in &[1usize, 2, 3, 4] {
        group.bench_with_input(BenchmarkId::new("sphere", n), &n, |b, &n| {
            b.iter_batched(
                || sphere(n),
                |s| {
                    let _c = Complex::from_simplices(s).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    let params = CliqueParams {
        vertices: 12,
        edge_prob: 0.4,
        max_dim: 3,
    };
    group.bench_function(BenchmarkId::new("clique", "12v-0.4"), |b| {
        b.iter_batched(
            || clique_complex(params, 7).unwrap(),
            |s| {
                let _c = Complex::from_simplices(s).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_smith, bench_complex);
criterion_main!(benches);
