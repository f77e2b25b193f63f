//! Dense materialization of a canonical matrix

use std::fmt;
use std::io::{self, Write};
use std::iter::Peekable;
use std::slice;

use ndarray::Array2;

use crate::matrix::{Scalar, SparseMatrix, Triplet};

/// Iterator over the rows of the dense grid
///
/// A single cursor walks the canonical entries alongside the grid, so the
/// whole grid costs one pass: O(rows × cols). A grid without columns has
/// no rows to print.
pub struct DenseRows<'a, T> {
    cursor: Peekable<slice::Iter<'a, Triplet<T>>>,
    row: usize,
    rows: usize,
    cols: usize,
}

impl<'a, T: Scalar> Iterator for DenseRows<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.rows {
            return None;
        }
        self.row += 1;

        let mut values = Vec::with_capacity(self.cols);
        for col in 1..=self.cols {
            let value = match self.cursor.peek() {
                Some(t) if t.key() == (self.row, col) => {
                    let value = t.value;
                    self.cursor.next();
                    value
                }
                _ => T::zero(),
            };
            values.push(value);
        }
        Some(values)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.rows - self.row;
        (remaining, Some(remaining))
    }
}

impl<'a, T: Scalar> ExactSizeIterator for DenseRows<'a, T> {}

impl<T: Scalar> SparseMatrix<T> {
    /// Rows of the full dense grid, top to bottom
    pub fn dense_rows(&self) -> DenseRows<'_, T> {
        DenseRows {
            cursor: self.entries().iter().peekable(),
            row: 0,
            rows: if self.cols() == 0 { 0 } else { self.rows() },
            cols: self.cols(),
        }
    }

    /// Writes `rows cols` followed by the dense grid, one row per line
    ///
    /// Same text as the `Display` impl.
    pub fn write_dense<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    /// Converts to a dense ndarray
    pub fn to_dense(&self) -> Array2<T> {
        let mut dense = Array2::zeros((self.rows(), self.cols()));
        for t in self.entries() {
            dense[[t.row - 1, t.col - 1]] = t.value;
        }
        dense
    }
}

fn write_grid<F: fmt::Write, T: Scalar>(out: &mut F, matrix: &SparseMatrix<T>) -> fmt::Result {
    writeln!(out, "{} {}", matrix.rows(), matrix.cols())?;
    for row in matrix.dense_rows() {
        for (j, value) in row.iter().enumerate() {
            if j > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{}", value)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

impl<T: Scalar> fmt::Display for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self)
    }
}
