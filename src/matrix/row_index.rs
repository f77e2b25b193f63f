//! CSR-style row index over a canonical triplet sequence

use std::ops::Range;

use crate::matrix::Triplet;
use crate::utils::{bucket_counts, exclusive_scan};

/// Maps each 1-based row to the half-open range of its entries
///
/// Built by a forward prefix count, so empty rows (including rows past the
/// last populated one) get an empty range positioned at the next row's
/// start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowIndex {
    /// `starts[i - 1]..starts[i]` is row `i` (size: rows + 1)
    starts: Vec<usize>,
}

impl RowIndex {
    /// Builds the index for `rows` rows over row-major sorted `entries`
    pub fn build<T>(rows: usize, entries: &[Triplet<T>]) -> Self {
        let counts = bucket_counts(rows, entries.iter().map(|t| t.row));
        Self {
            starts: exclusive_scan(&counts),
        }
    }

    /// Number of rows covered
    pub fn rows(&self) -> usize {
        self.starts.len() - 1
    }

    /// Entry offsets of row `row` (1-based)
    ///
    /// # Panics
    ///
    /// Panics if `row` is zero or greater than `rows()`.
    pub fn row_range(&self, row: usize) -> Range<usize> {
        assert!(
            row >= 1 && row <= self.rows(),
            "Row {} out of bounds (rows = {})",
            row,
            self.rows()
        );
        self.starts[row - 1]..self.starts[row]
    }

    /// Raw start offsets, one per row plus a trailing total
    pub fn starts(&self) -> &[usize] {
        &self.starts
    }
}
