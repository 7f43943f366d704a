//! Property-based tests for COO to CSR conversion and SpMV
//!
//! These tests use proptest to verify the structural invariants of the
//! conversion (row partition, count conservation, stability) and SpMV
//! correctness against a dense baseline.

use ndarray::Array1;
use proptest::prelude::*;
use sparso_core::{CooMatrix, Triplet};
use sparso_kernels::CsrMatrix;

// ============================================================================
// Test Utilities
// ============================================================================

// Type alias for sparse matrix strategy return type to reduce complexity
type SparseMatrixData = (Vec<(usize, usize)>, Vec<f64>, (usize, usize));

/// Generate a random sparse 2D matrix as COO data with controlled density
fn sparse_matrix_strategy(
    nrows: usize,
    ncols: usize,
    max_nnz: usize,
) -> impl Strategy<Value = SparseMatrixData> {
    prop::collection::vec((0..nrows, 0..ncols), 0..=max_nnz).prop_flat_map(move |indices| {
        let len = indices.len();
        (
            Just(indices),
            prop::collection::vec(-100.0..100.0f64, len..=len),
            Just((nrows, ncols)),
        )
    })
}

fn build_coo(indices: &[(usize, usize)], values: &[f64], shape: (usize, usize)) -> CooMatrix<f64> {
    let entries = indices
        .iter()
        .zip(values)
        .map(|(&(i, j), &v)| Triplet::new(i, j, v))
        .collect();
    CooMatrix::new(shape.0, shape.1, entries)
}

// ============================================================================
// Conversion Properties
// ============================================================================

proptest! {
    /// Property: every slot within a row's pointer range came from an
    /// entry with exactly that row index
    #[test]
    fn prop_row_partition(
        (indices, values, shape) in sparse_matrix_strategy(10, 10, 40)
    ) {
        let coo = build_coo(&indices, &values, shape);
        let csr = CsrMatrix::from_coo(&coo).unwrap();

        // Reconstruct the row of each slot from row_ptr, then check it
        // against the multiset of input rows per row index.
        let mut per_row_from_input = vec![0usize; shape.0];
        for &(i, _) in &indices {
            per_row_from_input[i] += 1;
        }

        let row_ptr = csr.row_ptr();
        for r in 0..shape.0 {
            prop_assert_eq!(row_ptr[r + 1] - row_ptr[r], per_row_from_input[r]);
        }
    }

    /// Property: row_ptr[nrows] == nnz == number of input entries, and
    /// row_ptr is non-decreasing starting at zero
    #[test]
    fn prop_count_conservation(
        (indices, values, shape) in sparse_matrix_strategy(12, 8, 50)
    ) {
        let coo = build_coo(&indices, &values, shape);
        let csr = CsrMatrix::from_coo(&coo).unwrap();

        let row_ptr = csr.row_ptr();
        prop_assert_eq!(row_ptr[0], 0);
        prop_assert_eq!(row_ptr[shape.0], indices.len());
        prop_assert_eq!(csr.nnz(), indices.len());
        for r in 0..shape.0 {
            prop_assert!(row_ptr[r] <= row_ptr[r + 1]);
        }
    }

    /// Property: same-row entries keep their relative insertion order in
    /// the slot arrays (the conversion is stable, never column-sorted)
    #[test]
    fn prop_stability(
        (indices, values, shape) in sparse_matrix_strategy(6, 6, 40)
    ) {
        let coo = build_coo(&indices, &values, shape);
        let csr = CsrMatrix::from_coo(&coo).unwrap();

        for r in 0..shape.0 {
            // (col, value) pairs of row r in input order
            let expected: Vec<(usize, f64)> = indices
                .iter()
                .zip(&values)
                .filter(|&(&(i, _), _)| i == r)
                .map(|(&(_, j), &v)| (j, v))
                .collect();

            let (cols, vals) = csr.row(r).unwrap();
            let actual: Vec<(usize, f64)> =
                cols.iter().copied().zip(vals.iter().copied()).collect();

            prop_assert_eq!(actual, expected);
        }
    }

    /// Property: conversion round-trips through the slot arrays; the
    /// multiset of (row, col, value) triples is preserved exactly
    #[test]
    fn prop_conversion_preserves_triples(
        (indices, values, shape) in sparse_matrix_strategy(8, 8, 30)
    ) {
        let coo = build_coo(&indices, &values, shape);
        let csr = CsrMatrix::from_coo(&coo).unwrap();

        let mut from_csr = Vec::with_capacity(csr.nnz());
        for r in 0..shape.0 {
            let (cols, vals) = csr.row(r).unwrap();
            for (&c, &v) in cols.iter().zip(vals) {
                from_csr.push((r, c, v.to_bits()));
            }
        }

        let mut from_input: Vec<(usize, usize, u64)> = indices
            .iter()
            .zip(&values)
            .map(|(&(i, j), &v)| (i, j, v.to_bits()))
            .collect();

        from_csr.sort();
        from_input.sort();
        prop_assert_eq!(from_csr, from_input);
    }
}

// ============================================================================
// SpMV Properties
// ============================================================================

proptest! {
    /// Property: SpMV agrees with a dense baseline computed directly from
    /// the triplet list
    #[test]
    fn prop_spmv_matches_dense_baseline(
        (indices, values, shape) in sparse_matrix_strategy(10, 10, 40),
        x in prop::collection::vec(-10.0..10.0f64, 10..=10)
    ) {
        let coo = build_coo(&indices, &values, shape);
        let csr = CsrMatrix::from_coo(&coo).unwrap();

        let x = Array1::from_vec(x);
        let y = csr.spmv(&x.view()).unwrap();

        let mut expected = vec![0.0f64; shape.0];
        for (&(i, j), &v) in indices.iter().zip(&values) {
            expected[i] += v * x[j];
        }

        for r in 0..shape.0 {
            prop_assert!((y[r] - expected[r]).abs() < 1e-9);
        }
    }

    /// Property: SpMV of any matrix with the zero vector is the zero vector
    #[test]
    fn prop_spmv_zero_vector(
        (indices, values, shape) in sparse_matrix_strategy(10, 10, 40)
    ) {
        let coo = build_coo(&indices, &values, shape);
        let csr = CsrMatrix::from_coo(&coo).unwrap();

        let x = Array1::zeros(shape.1);
        let y = csr.spmv(&x.view()).unwrap();

        for r in 0..shape.0 {
            prop_assert_eq!(y[r], 0.0);
        }
    }
}
