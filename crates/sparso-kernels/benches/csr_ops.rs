//! Benchmarks for COO to CSR conversion and SpMV
//!
//! Measures the conversion pass and the SpMV kernel across matrix sizes
//! and densities.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use sparso_core::{CooMatrix, Triplet};
use sparso_kernels::CsrMatrix;
use std::hint::black_box;

/// Generate a random sparse matrix in COO form with specified density
fn random_coo_matrix(nrows: usize, ncols: usize, density: f64) -> CooMatrix<f64> {
    let nnz = ((nrows * ncols) as f64 * density).max(1.0) as usize;

    let mut entries = Vec::with_capacity(nnz);

    // Simple pseudo-random generation for reproducibility
    let mut seed = 12345u64;
    for _ in 0..nnz {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let i = (seed % nrows as u64) as usize;
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let j = (seed % ncols as u64) as usize;
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let val = (seed % 10000) as f64 / 10000.0;

        entries.push(Triplet::new(i, j, val));
    }

    CooMatrix::new(nrows, ncols, entries)
}

/// Generate a random dense vector
fn random_dense_vector(size: usize) -> Array1<f64> {
    let mut seed = 98765u64;
    Array1::from_shape_fn(size, |_| {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        (seed % 10000) as f64 / 10000.0
    })
}

/// Benchmark COO to CSR conversion
fn bench_from_coo(c: &mut Criterion) {
    let mut group = c.benchmark_group("from_coo");

    for size in [100, 500, 1000].iter() {
        for density in [0.01, 0.05, 0.1].iter() {
            let coo = random_coo_matrix(*size, *size, *density);
            group.throughput(Throughput::Elements(coo.nnz() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{size}x{size}"), density),
                &coo,
                |b, coo| b.iter(|| CsrMatrix::from_coo(black_box(coo)).unwrap()),
            );
        }
    }

    group.finish();
}

/// Benchmark SpMV against a pre-converted CSR matrix
fn bench_spmv(c: &mut Criterion) {
    let mut group = c.benchmark_group("spmv");

    for size in [100, 500, 1000].iter() {
        for density in [0.01, 0.05, 0.1].iter() {
            let coo = random_coo_matrix(*size, *size, *density);
            let csr = CsrMatrix::from_coo(&coo).expect("conversion failed");
            let x = random_dense_vector(*size);

            group.throughput(Throughput::Elements(csr.nnz() as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("{size}x{size}"), density),
                &(csr, x),
                |b, (csr, x)| b.iter(|| csr.spmv(black_box(&x.view())).unwrap()),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_from_coo, bench_spmv);
criterion_main!(benches);
