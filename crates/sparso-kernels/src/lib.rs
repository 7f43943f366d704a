//! # sparso-kernels
//!
//! COO to CSR compression and the SpMV kernel for Sparso.
//!
//! This crate provides [`CsrMatrix`], the compressed-sparse-row form of a
//! `sparso_core::CooMatrix`, built by a single counting-sort pass that keeps
//! the insertion order of same-row entries, plus the sparse matrix-vector
//! product evaluated against that form.
//!
//! ## Quick Start
//!
//! ```
//! use ndarray::array;
//! use sparso_core::{CooMatrix, Triplet};
//! use sparso_kernels::CsrMatrix;
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
//!
//! let csr = CsrMatrix::from_coo(&coo).unwrap();
//! assert_eq!(csr.row_ptr(), &[0, 1, 3]);
//!
//! let x = array![1.0, 1.0];
//! let y = csr.spmv(&x.view()).unwrap();
//! assert_eq!(y[0], 2.0);
//! assert_eq!(y[1], 7.0);
//! ```

#![deny(warnings)]

pub mod csr;

pub use csr::{CsrError, CsrMatrix};
