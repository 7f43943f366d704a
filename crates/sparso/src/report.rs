//! Descriptive statistics over a triplet stream
//!
//! Computes per-row and whole-matrix summary statistics directly from a
//! [`CooMatrix`], in a single pass over the entry sequence. The report
//! consumes the triplet store, not the CSR form: none of these statistics
//! need the compressed layout.
//!
//! Like the tabular adapter, the report is lenient: an entry whose row
//! index falls outside the declared row count is counted in the matrix-wide
//! absolute sum but contributes to no per-row bucket. The store does not
//! validate bounds, so the report cannot assume them.
//!
//! # Examples
//!
//! ```
//! use sparso::report::summarize;
//! use sparso::{CooMatrix, Triplet};
//!
//! let coo = CooMatrix::new(
//!     2,
//!     2,
//!     vec![
//!         Triplet::new(0, 0, 1.0),
//!         Triplet::new(0, 1, -2.0),
//!         Triplet::new(1, 0, 3.0),
//!     ],
//! );
//!
//! let summary = summarize(&coo);
//! assert_eq!(summary.nnz, 3);
//! assert_eq!(summary.rows[0].nnz, 2);
//! assert_eq!(summary.rows[0].abs_sum, 3.0);
//! assert!(summary.rows[0].has_diagonal);
//! assert!(!summary.rows[1].has_diagonal);
//! assert_eq!(summary.diag_coverage, 0.5);
//! ```

use num_traits::Float;
use sparso_core::CooMatrix;

/// Per-row statistics of a sparse matrix in triplet form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowStats<T> {
    /// Number of stored entries in this row
    pub nnz: usize,
    /// Sum of absolute values of this row's entries
    pub abs_sum: T,
    /// Whether this row stores an entry on the main diagonal
    pub has_diagonal: bool,
}

/// Whole-matrix summary of a sparse matrix in triplet form
#[derive(Debug, Clone, PartialEq)]
pub struct CooSummary<T> {
    /// Number of rows (as declared by the store)
    pub nrows: usize,
    /// Number of columns (as declared by the store)
    pub ncols: usize,
    /// Total number of stored entries, duplicates included
    pub nnz: usize,
    /// Per-row statistics, one element per declared row
    pub rows: Vec<RowStats<T>>,
    /// Average stored entries per row (0 for a rowless matrix)
    pub avg_nnz_per_row: f64,
    /// Fraction of rows storing a diagonal entry (0 for a rowless matrix)
    pub diag_coverage: f64,
    /// Sum of absolute values over all stored entries
    pub abs_sum: T,
}

/// Summarize a COO matrix in one pass over its entries
pub fn summarize<T: Float>(coo: &CooMatrix<T>) -> CooSummary<T> {
    let (nrows, ncols) = coo.shape();
    let nnz = coo.nnz();

    let mut rows = vec![
        RowStats {
            nnz: 0,
            abs_sum: T::zero(),
            has_diagonal: false,
        };
        nrows
    ];
    let mut abs_sum = T::zero();

    for t in coo.entries() {
        abs_sum = abs_sum + t.value.abs();

        if t.row < nrows {
            let row = &mut rows[t.row];
            row.nnz += 1;
            row.abs_sum = row.abs_sum + t.value.abs();
            if t.row == t.col {
                row.has_diagonal = true;
            }
        }
    }

    let diag_rows = rows.iter().filter(|r| r.has_diagonal).count();
    let (avg_nnz_per_row, diag_coverage) = if nrows > 0 {
        (nnz as f64 / nrows as f64, diag_rows as f64 / nrows as f64)
    } else {
        (0.0, 0.0)
    };

    CooSummary {
        nrows,
        ncols,
        nnz,
        rows,
        avg_nnz_per_row,
        diag_coverage,
        abs_sum,
    }
}
