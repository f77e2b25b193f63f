//! Sparse multiplication by row-index join
//!
//! The right operand is transposed so that each of its columns becomes a
//! contiguous run keyed by the join index. Row indices over both sides
//! then give O(1) slices, and every (row, column) pair is a two-cursor
//! merge-join of two sorted runs.

use log::debug;

use crate::error::{MatrixError, Operation, Result};
use crate::matrix::{transpose, Scalar, SparseMatrix, Triplet};

/// Returns `a × b` for canonical matrices with `a.cols() == b.rows()`
///
/// Output rows and columns are visited in ascending order and only
/// non-zero dot products are emitted, so the result is canonical without
/// a sort.
pub fn multiply<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.cols() != b.rows() {
        return Err(MatrixError::DimensionMismatch {
            op: Operation::Multiply,
            left: a.shape(),
            right: b.shape(),
        });
    }

    let bt = transpose(b);
    let a_index = a.row_index();
    let bt_index = bt.row_index();

    let lhs = a.entries();
    let rhs = bt.entries();
    let mut store = a.store().empty_like(lhs.len());

    for i in 1..=a.rows() {
        let a_row = &lhs[a_index.row_range(i)];
        if a_row.is_empty() {
            continue;
        }

        for j in 1..=b.cols() {
            let b_col = &rhs[bt_index.row_range(j)];
            if b_col.is_empty() {
                continue;
            }

            let dot = dot_product(a_row, b_col);
            if !dot.is_zero() {
                store.append(i, j, dot);
            }
        }
    }

    debug!(
        "multiply {}x{} by {}x{}: {} terms",
        a.rows(),
        a.cols(),
        b.rows(),
        b.cols(),
        store.len()
    );
    Ok(SparseMatrix::from_parts(a.rows(), b.cols(), store))
}

/// Dot product of two runs sorted by `col`, with wrapping accumulation
fn dot_product<T: Scalar>(left: &[Triplet<T>], right: &[Triplet<T>]) -> T {
    let mut sum = T::zero();
    let (mut p, mut q) = (0, 0);
    while p < left.len() && q < right.len() {
        let (lk, rk) = (left[p].col, right[q].col);
        if lk < rk {
            p += 1;
        } else if rk < lk {
            q += 1;
        } else {
            sum = sum.wrapping_add(&left[p].value.wrapping_mul(&right[q].value));
            p += 1;
            q += 1;
        }
    }
    sum
}
