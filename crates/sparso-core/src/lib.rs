//! # sparso-core
//!
//! Triplet (COO) sparse matrix storage for Sparso.
//!
//! This crate provides the leaf data type of the Sparso stack: [`CooMatrix`],
//! an immutable in-memory sparse matrix stored as declared dimensions plus an
//! insertion-ordered sequence of [`Triplet`] entries. Compression to CSR and
//! the numeric kernels live in `sparso-kernels`.

#![deny(warnings)]

pub mod coo;

pub use coo::{CooMatrix, Triplet};
