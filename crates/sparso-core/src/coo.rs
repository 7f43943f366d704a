//! COO (Coordinate/triplet) sparse matrix storage
//!
//! The coordinate format stores a sparse matrix as a list of
//! (row, column, value) triplets plus declared dimensions. It is the most
//! flexible sparse format and serves as the input to CSR compression.
//!
//! # Format
//!
//! For an m×n sparse matrix:
//! - `nrows`, `ncols` - declared dimensions
//! - `entries`: `Vec<Triplet<T>>` - stored entries in insertion order
//!
//! Entry order carries no sorting requirement, and duplicate (row, col)
//! pairs are legal: both copies are kept as independent slots. Bounds of the
//! stored indices against the declared dimensions are checked by the CSR
//! conversion in `sparso-kernels`, not here; the store is a pure data
//! holder.
//!
//! # Examples
//!
//! ```
//! use sparso_core::{CooMatrix, Triplet};
//!
//! // A 3x4 sparse matrix with 3 stored entries
//! let entries = vec![
//!     Triplet::new(0, 1, 2.5),
//!     Triplet::new(1, 2, 3.0),
//!     Triplet::new(2, 0, 1.5),
//! ];
//! let coo = CooMatrix::new(3, 4, entries);
//! assert_eq!(coo.nnz(), 3);
//! assert_eq!(coo.shape(), (3, 4));
//! ```

/// A single stored entry of a [`CooMatrix`]: (row, column, value).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet<T> {
    /// Row index, 0-based
    pub row: usize,
    /// Column index, 0-based
    pub col: usize,
    /// Stored value
    pub value: T,
}

impl<T> Triplet<T> {
    /// Create a new triplet
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }
}

/// COO (coordinate) sparse matrix
///
/// Declared dimensions plus an insertion-ordered triplet sequence. Built
/// once by the caller, immutable thereafter; the CSR conversion only reads
/// it. Index bounds are deliberately not validated at construction time
/// (the conversion validates eagerly before producing any output), so
/// construction is infallible.
#[derive(Debug, Clone, PartialEq)]
pub struct CooMatrix<T> {
    /// Number of rows
    nrows: usize,

    /// Number of columns
    ncols: usize,

    /// Stored entries, in insertion order
    entries: Vec<Triplet<T>>,
}

impl<T> CooMatrix<T> {
    /// Create a new COO matrix from declared dimensions and a triplet list
    ///
    /// # Arguments
    ///
    /// * `nrows` - Number of rows
    /// * `ncols` - Number of columns
    /// * `entries` - Stored entries, kept in the given order
    pub fn new(nrows: usize, ncols: usize, entries: Vec<Triplet<T>>) -> Self {
        Self {
            nrows,
            ncols,
            entries,
        }
    }

    /// Create an empty COO matrix (an all-zero matrix) with given dimensions
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            entries: Vec::new(),
        }
    }

    /// Number of stored entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Shape of the matrix (nrows, ncols)
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Number of rows
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Stored entries in insertion order
    pub fn entries(&self) -> &[Triplet<T>] {
        &self.entries
    }

    /// Whether the matrix stores no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compute density (nnz / total_elements)
    ///
    /// Returns 0.0 for a matrix with zero total elements.
    pub fn density(&self) -> f64 {
        let total = self.nrows * self.ncols;
        if total == 0 {
            0.0
        } else {
            self.nnz() as f64 / total as f64
        }
    }
}
