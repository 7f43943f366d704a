//! # Sparso - Sparse Triplet Analysis Toolkit
//!
//! COO triplet storage, CSR compression, SpMV, and tabular adapters.
//!
//! This is the meta crate that re-exports the Sparso components and hosts
//! the adapter layer sitting between tabular data and the numeric core.
//!
//! ## Components
//!
//! ### Triplet Store (`sparso-core`)
//!
//! [`CooMatrix`] holds a sparse matrix as declared dimensions plus an
//! insertion-ordered triplet list. It is a pure data holder: bounds are
//! validated by the CSR conversion, not at construction.
//!
//! ```
//! use sparso::{CooMatrix, Triplet};
//!
//! let coo = CooMatrix::new(2, 2, vec![Triplet::new(0, 1, 2.0)]);
//! assert_eq!(coo.nnz(), 1);
//! ```
//!
//! ### Compressed-Row Kernel (`sparso-kernels`)
//!
//! [`CsrMatrix::from_coo`] compresses a triplet store in O(nnz + nrows)
//! while preserving the insertion order of same-row entries, and
//! [`CsrMatrix::spmv`] evaluates y = A·x against the compressed form.
//!
//! ```
//! use ndarray::array;
//! use sparso::{CooMatrix, CsrMatrix, Triplet};
//!
//! let coo = CooMatrix::new(
//!     2,
//!     2,
//!     vec![
//!         Triplet::new(0, 1, 2.0),
//!         Triplet::new(1, 0, 3.0),
//!         Triplet::new(1, 1, 4.0),
//!     ],
//! );
//! let csr = CsrMatrix::from_coo(&coo)?;
//! let y = csr.spmv(&array![1.0, 1.0].view())?;
//! assert_eq!(y[0], 2.0);
//! assert_eq!(y[1], 7.0);
//! # Ok::<(), sparso::CsrError>(())
//! ```
//!
//! ### Adapters ([`table`], [`report`])
//!
//! [`table::coo_from_columns`] builds a triplet store from three aligned
//! numeric columns, skipping malformed rows; [`report::summarize`] computes
//! per-row and whole-matrix descriptive statistics in a single pass over
//! the triplet stream. The adapters are deliberately lenient where the
//! kernel is strict: skipping a malformed analytic row is an adapter
//! policy, and the kernel's index validation is never relaxed to match it.

#![deny(warnings)]

pub mod report;
pub mod table;

pub use sparso_core::{CooMatrix, Triplet};
pub use sparso_kernels::{CsrError, CsrMatrix};

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::report::{summarize, CooSummary, RowStats};
    pub use crate::table::coo_from_columns;
    pub use sparso_core::{CooMatrix, Triplet};
    pub use sparso_kernels::{CsrError, CsrMatrix};
}
