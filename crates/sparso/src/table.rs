//! Lenient tabular-column adapter
//!
//! Builds a [`CooMatrix`] from three aligned numeric columns (row index,
//! column index, value) of the kind produced by a tabular data source. The
//! matrix shape is inferred from the data: `nrows = 1 + max(row index)` and
//! `ncols = 1 + max(col index)` over the rows that survive screening.
//!
//! Malformed rows are skipped rather than rejected: a row whose index cells
//! are non-finite, negative, or fractional, or whose value cell is
//! non-finite, contributes nothing. This leniency is an adapter-boundary
//! policy; the CSR conversion in `sparso-kernels` keeps its strict index
//! validation regardless.
//!
//! # Examples
//!
//! ```
//! use sparso::table::coo_from_columns;
//!
//! let rows = [0.0, 1.0, f64::NAN, 1.0];
//! let cols = [1.0, 0.0, 0.0, 1.0];
//! let vals = [2.0, 3.0, 9.0, 4.0];
//!
//! let coo = coo_from_columns(&rows, &cols, &vals);
//! assert_eq!(coo.shape(), (2, 2));
//! assert_eq!(coo.nnz(), 3); // the NaN row was skipped
//! ```

use sparso_core::{CooMatrix, Triplet};

/// Interpret a numeric cell as a 0-based index
///
/// Accepts finite, non-negative, integral values that fit in `usize`.
/// Anything larger would saturate on the cast and overflow the inferred
/// shape, so it counts as malformed like any other bad cell.
fn cell_as_index(cell: f64) -> Option<usize> {
    if !cell.is_finite() || cell < 0.0 || cell.fract() != 0.0 || cell >= usize::MAX as f64 {
        return None;
    }
    Some(cell as usize)
}

/// Build a COO matrix from three aligned numeric columns
///
/// Cells are consumed up to the shortest column length. Rows that fail
/// screening are skipped silently; every surviving triplet is in range for
/// the inferred shape by construction, so the result always converts to
/// CSR without error. Explicitly stored zeros are kept as slots. If no row
/// survives, the result is an empty 0×0 matrix.
///
/// # Arguments
///
/// * `row_idx` - Row index column
/// * `col_idx` - Column index column
/// * `values` - Value column
pub fn coo_from_columns(row_idx: &[f64], col_idx: &[f64], values: &[f64]) -> CooMatrix<f64> {
    let len = row_idx.len().min(col_idx.len()).min(values.len());

    let mut entries = Vec::with_capacity(len);
    let mut nrows = 0usize;
    let mut ncols = 0usize;

    for k in 0..len {
        let (i, j) = match (cell_as_index(row_idx[k]), cell_as_index(col_idx[k])) {
            (Some(i), Some(j)) => (i, j),
            _ => continue,
        };
        let v = values[k];
        if !v.is_finite() {
            continue;
        }

        nrows = nrows.max(i + 1);
        ncols = ncols.max(j + 1);
        entries.push(Triplet::new(i, j, v));
    }

    CooMatrix::new(nrows, ncols, entries)
}
