//! End-to-end analysis workflow example
//!
//! This example demonstrates the full Sparso pipeline:
//! - Building a COO matrix from tabular columns (lenient adapter)
//! - Summarizing the triplet stream
//! - Converting to CSR and running SpMV
//!
//! Run with: cargo run --example analyze_workflow

use ndarray::Array1;
use sparso::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("=== Sparso: Analysis Workflow Example ===\n");

    // 1. Three aligned columns of a 5x5 matrix, with one malformed row
    println!("1. Building COO matrix from tabular columns...");
    let row_idx = [0.0, 0.0, 1.0, 2.0, 2.0, f64::NAN, 3.0, 4.0];
    let col_idx = [0.0, 2.0, 1.0, 0.0, 3.0, 1.0, 4.0, 2.0];
    let values = [5.0, 3.0, 8.0, 2.0, 6.0, 7.0, 1.0, 4.0];

    let coo = coo_from_columns(&row_idx, &col_idx, &values);
    println!(
        "   COO matrix: {}x{}, {} non-zeros (1 malformed row skipped), density: {:.1}%\n",
        coo.nrows(),
        coo.ncols(),
        coo.nnz(),
        coo.density() * 100.0
    );

    // 2. Summary statistics straight from the triplet stream
    println!("2. Summarizing the triplet stream...");
    let summary = summarize(&coo);
    println!(
        "   avg nnz/row: {:.2}, diagonal coverage: {:.0}%, total |v|: {}",
        summary.avg_nnz_per_row,
        summary.diag_coverage * 100.0,
        summary.abs_sum
    );
    for (r, stats) in summary.rows.iter().enumerate() {
        println!(
            "   row {}: nnz={}, |v| sum={}, diagonal={}",
            r, stats.nnz, stats.abs_sum, stats.has_diagonal
        );
    }
    println!();

    // 3. Convert once, multiply many times
    println!("3. Converting to CSR and running SpMV...");
    let csr = CsrMatrix::from_coo(&coo)?;
    println!(
        "   CSR matrix: {}x{}, row_ptr = {:?}",
        csr.nrows(),
        csr.ncols(),
        csr.row_ptr()
    );

    let x = Array1::from_elem(csr.ncols(), 1.0);
    let y = csr.spmv(&x.view())?;
    println!("   y = A * [1, ..., 1] = {:?}\n", y.to_vec());

    println!("=== Done ===");
    Ok(())
}
