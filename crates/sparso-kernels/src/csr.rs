//! CSR (Compressed Sparse Row) format and kernels
//!
//! CSR is optimized for row-wise operations and is the standard format for
//! sparse matrix-vector products.
//!
//! # Format
//!
//! For an m×n sparse matrix with nnz stored entries:
//! - `row_ptr`: `Vec<usize>` of length m+1 - the half-open slot range
//!   `[row_ptr[r], row_ptr[r+1])` holds exactly the entries of row r
//! - `col_indices`: `Vec<usize>` of length nnz - column index per slot
//! - `values`: `Vec<T>` of length nnz - value per slot
//! - `shape`: (m, n) - dimensions of the matrix
//!
//! `row_ptr[0] == 0`, `row_ptr[m] == nnz`, and `row_ptr` is non-decreasing.
//! Within a row's slot range, slots appear in the insertion order of the
//! source triplets; the conversion never sorts by column, and duplicate
//! (row, col) pairs remain distinct slots.
//!
//! # Examples
//!
//! ```
//! use sparso_kernels::CsrMatrix;
//!
//! // A 3×4 sparse matrix:
//! // [1.0  0   2.0  0  ]
//! // [0    3.0 0    0  ]
//! // [4.0  0   0    5.0]
//!
//! let row_ptr = vec![0, 2, 3, 5];
//! let col_indices = vec![0, 2, 1, 0, 3];
//! let values = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! let csr = CsrMatrix::new(row_ptr, col_indices, values, (3, 4)).unwrap();
//! assert_eq!(csr.nnz(), 5);
//! ```

use ndarray::{Array1, ArrayView1};
use num_traits::Float;
use sparso_core::CooMatrix;
use thiserror::Error;

/// Error type for CSR construction, conversion, and kernels
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CsrError {
    /// A triplet's row index is out of range for the declared dimensions
    #[error("Row index out of range: {index} >= {nrows}")]
    RowIndexOutOfRange { index: usize, nrows: usize },

    /// A triplet's column index is out of range for the declared dimensions
    #[error("Column index out of range: {index} >= {ncols}")]
    ColIndexOutOfRange { index: usize, ncols: usize },

    /// SpMV input vector length disagrees with the matrix column count
    #[error("Dimension mismatch: matrix has {expected} columns but vector has length {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// SpMV input vector contains a NaN or infinite element
    #[error("Non-finite input vector element at index {index}")]
    NonFiniteInput { index: usize },

    /// Row pointer array has the wrong length
    #[error("Invalid row pointers: length {len} for {nrows} rows (expected {expected})")]
    InvalidRowPtr {
        len: usize,
        nrows: usize,
        expected: usize,
    },

    /// Row pointer array is not non-decreasing
    #[error("Row pointer not sorted at index {idx}: {curr} > {next}")]
    RowPtrNotSorted {
        idx: usize,
        curr: usize,
        next: usize,
    },

    /// Parallel arrays disagree in length
    #[error("Length mismatch: {col_indices} col_indices but {values} values")]
    LengthMismatch { col_indices: usize, values: usize },
}

/// CSR (Compressed Sparse Row) matrix
///
/// Produced once by [`CsrMatrix::from_coo`] and read-only afterward; a
/// single CSR matrix may serve many [`CsrMatrix::spmv`] calls without
/// re-conversion. The three parallel arrays live in one structure so the
/// row-partition and count-conservation invariants are enforced at the
/// constructor boundary rather than scattered across containers.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T> {
    /// Row pointers: row_ptr[r] = start slot of row r
    /// Length: nrows + 1, with row_ptr[nrows] = nnz
    row_ptr: Vec<usize>,

    /// Column index for each slot
    col_indices: Vec<usize>,

    /// Value for each slot
    values: Vec<T>,

    /// Shape: (nrows, ncols)
    shape: (usize, usize),
}

impl<T: Clone> CsrMatrix<T> {
    /// Create a new CSR matrix from its raw parts
    ///
    /// Zero-dimensional shapes are legal: a 0×n matrix has
    /// `row_ptr == [0]` and no slots.
    ///
    /// # Arguments
    ///
    /// * `row_ptr` - Row pointers (length nrows+1)
    /// * `col_indices` - Column index per slot
    /// * `values` - Value per slot
    /// * `shape` - (nrows, ncols)
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - row_ptr length is not nrows+1
    /// - col_indices and values have different lengths
    /// - row_ptr is not non-decreasing, or row_ptr\[nrows\] != nnz
    /// - any column index is out of bounds
    pub fn new(
        row_ptr: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<T>,
        shape: (usize, usize),
    ) -> Result<Self, CsrError> {
        let (nrows, ncols) = shape;

        if row_ptr.len() != nrows + 1 {
            return Err(CsrError::InvalidRowPtr {
                len: row_ptr.len(),
                nrows,
                expected: nrows + 1,
            });
        }

        if col_indices.len() != values.len() {
            return Err(CsrError::LengthMismatch {
                col_indices: col_indices.len(),
                values: values.len(),
            });
        }

        for i in 0..nrows {
            if row_ptr[i] > row_ptr[i + 1] {
                return Err(CsrError::RowPtrNotSorted {
                    idx: i,
                    curr: row_ptr[i],
                    next: row_ptr[i + 1],
                });
            }
        }

        let nnz = col_indices.len();
        if row_ptr[nrows] != nnz {
            return Err(CsrError::InvalidRowPtr {
                len: row_ptr[nrows],
                nrows,
                expected: nnz,
            });
        }

        for &col_idx in &col_indices {
            if col_idx >= ncols {
                return Err(CsrError::ColIndexOutOfRange {
                    index: col_idx,
                    ncols,
                });
            }
        }

        Ok(Self {
            row_ptr,
            col_indices,
            values,
            shape,
        })
    }

    /// Create an empty CSR matrix (an all-zero matrix) with given shape
    pub fn zeros(shape: (usize, usize)) -> Self {
        let (nrows, _) = shape;
        Self {
            row_ptr: vec![0; nrows + 1],
            col_indices: Vec::new(),
            values: Vec::new(),
            shape,
        }
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Shape of the matrix (nrows, ncols)
    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.shape.0
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.shape.1
    }

    /// Get row pointers
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Get column indices
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Get values
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Compute density (nnz / total_elements)
    ///
    /// Returns 0.0 for a matrix with zero total elements.
    pub fn density(&self) -> f64 {
        let total = self.nrows() * self.ncols();
        if total == 0 {
            0.0
        } else {
            self.nnz() as f64 / total as f64
        }
    }

    /// Get a row as (col_indices, values) slices
    pub fn row(&self, i: usize) -> Option<(&[usize], &[T])> {
        if i >= self.nrows() {
            return None;
        }

        let start = self.row_ptr[i];
        let end = self.row_ptr[i + 1];

        Some((&self.col_indices[start..end], &self.values[start..end]))
    }
}

impl<T: Float> CsrMatrix<T> {
    /// Convert from COO format
    ///
    /// Counting-sort by row: one counting pass, an exclusive prefix sum
    /// into `row_ptr`, and a scatter pass driven by a private cursor array.
    /// Same-row entries keep their relative insertion order, and duplicate
    /// (row, col) pairs stay distinct slots; nothing is sorted by column or
    /// coalesced.
    ///
    /// # Errors
    ///
    /// Fails on the first entry whose row or column index is out of range
    /// for the declared dimensions. Validation runs over the whole entry
    /// list before any output is built, so a failed conversion leaves no
    /// partial CSR behind.
    ///
    /// # Complexity
    ///
    /// Time: O(nnz + nrows)
    /// Space: O(nnz + nrows)
    ///
    /// # Examples
    ///
    /// ```
    /// use sparso_core::{CooMatrix, Triplet};
    /// use sparso_kernels::CsrMatrix;
    ///
    /// let coo = CooMatrix::new(
    ///     2,
    ///     2,
    ///     vec![
    ///         Triplet::new(0, 1, 2.0),
    ///         Triplet::new(1, 0, 3.0),
    ///         Triplet::new(1, 1, 4.0),
    ///     ],
    /// );
    /// let csr = CsrMatrix::from_coo(&coo).unwrap();
    /// assert_eq!(csr.row_ptr(), &[0, 1, 3]);
    /// assert_eq!(csr.col_indices(), &[1, 0, 1]);
    /// assert_eq!(csr.values(), &[2.0, 3.0, 4.0]);
    /// ```
    pub fn from_coo(coo: &CooMatrix<T>) -> Result<Self, CsrError> {
        let (nrows, ncols) = coo.shape();
        let nnz = coo.nnz();

        // Validate every index up front; no output exists yet on failure.
        for t in coo.entries() {
            if t.row >= nrows {
                return Err(CsrError::RowIndexOutOfRange {
                    index: t.row,
                    nrows,
                });
            }
            if t.col >= ncols {
                return Err(CsrError::ColIndexOutOfRange {
                    index: t.col,
                    ncols,
                });
            }
        }

        // Count entries per row
        let mut row_ptr = vec![0usize; nrows + 1];
        for t in coo.entries() {
            row_ptr[t.row + 1] += 1;
        }

        // Exclusive prefix sum: final, immutable row boundaries
        for i in 0..nrows {
            row_ptr[i + 1] += row_ptr[i];
        }

        // Scatter in insertion order. The cursor array is an independent
        // copy of row_ptr, discarded after this pass, so the returned
        // row_ptr never aliases mutable state. Each row's cursor only
        // advances within its own slot range, which keeps same-row entries
        // in their original relative order.
        let mut next = row_ptr.clone();
        let mut col_indices = vec![0usize; nnz];
        let mut values = vec![T::zero(); nnz];

        for t in coo.entries() {
            let pos = next[t.row];
            next[t.row] += 1;
            col_indices[pos] = t.col;
            values[pos] = t.value;
        }

        Self::new(row_ptr, col_indices, values, (nrows, ncols))
    }

    /// Sparse Matrix-Vector product: y = A * x
    ///
    /// # Arguments
    ///
    /// * `x` - Dense vector of length ncols; every element must be finite
    ///
    /// # Returns
    ///
    /// Freshly allocated dense vector y of length nrows where
    /// y\[r\] = sum over row r's slots of value * x\[col\]. Accumulation
    /// runs in slot order, so the result is deterministic for a fixed
    /// input order; with duplicate-column slots or cancellation the exact
    /// floating-point sum depends on that order, which is accepted since
    /// slots are never coalesced. The matrix is never mutated.
    ///
    /// # Errors
    ///
    /// Returns [`CsrError::DimensionMismatch`] if x.len() != ncols, and
    /// [`CsrError::NonFiniteInput`] for the first NaN or infinite element
    /// of x. Both checks run before any accumulation.
    ///
    /// # Complexity
    ///
    /// O(nnz + nrows)
    ///
    /// # Examples
    ///
    /// ```
    /// use ndarray::array;
    /// use sparso_kernels::CsrMatrix;
    ///
    /// // Matrix: [1 0 2]
    /// //         [0 3 0]
    /// let row_ptr = vec![0, 2, 3];
    /// let col_indices = vec![0, 2, 1];
    /// let values = vec![1.0, 2.0, 3.0];
    /// let csr = CsrMatrix::new(row_ptr, col_indices, values, (2, 3)).unwrap();
    ///
    /// let x = array![1.0, 2.0, 3.0];
    /// let y = csr.spmv(&x.view()).unwrap();
    /// assert_eq!(y[0], 7.0); // 1*1 + 2*3
    /// assert_eq!(y[1], 6.0); // 3*2
    /// ```
    pub fn spmv(&self, x: &ArrayView1<T>) -> Result<Array1<T>, CsrError> {
        if x.len() != self.ncols() {
            return Err(CsrError::DimensionMismatch {
                expected: self.ncols(),
                actual: x.len(),
            });
        }

        for (index, &xi) in x.iter().enumerate() {
            if !xi.is_finite() {
                return Err(CsrError::NonFiniteInput { index });
            }
        }

        let mut y = Array1::<T>::zeros(self.nrows());

        for row in 0..self.nrows() {
            let start = self.row_ptr[row];
            let end = self.row_ptr[row + 1];

            let mut sum = T::zero();
            for idx in start..end {
                let col = self.col_indices[idx];
                let value = self.values[idx];
                sum = sum + value * x[col];
            }
            y[row] = sum;
        }

        Ok(y)
    }
}
