//! Sparse addition by two-cursor merge

use std::cmp::Ordering;

use log::debug;

use crate::error::{MatrixError, Operation, Result};
use crate::matrix::{Scalar, SparseMatrix};

/// Returns `a + b` for two canonical matrices of the same shape
///
/// Walks both entry sequences in key order: the smaller key is copied,
/// equal keys are summed and kept only when the sum is non-zero.
/// O(terms(a) + terms(b)).
pub fn add<T: Scalar>(a: &SparseMatrix<T>, b: &SparseMatrix<T>) -> Result<SparseMatrix<T>> {
    if a.shape() != b.shape() {
        return Err(MatrixError::DimensionMismatch {
            op: Operation::Add,
            left: a.shape(),
            right: b.shape(),
        });
    }

    let lhs = a.entries();
    let rhs = b.entries();
    let mut store = a.store().empty_like(lhs.len() + rhs.len());

    let (mut i, mut j) = (0, 0);
    while i < lhs.len() && j < rhs.len() {
        match lhs[i].key().cmp(&rhs[j].key()) {
            Ordering::Less => {
                store.push(lhs[i]);
                i += 1;
            }
            Ordering::Greater => {
                store.push(rhs[j]);
                j += 1;
            }
            Ordering::Equal => {
                let sum = lhs[i].value.wrapping_add(&rhs[j].value);
                if !sum.is_zero() {
                    store.append(lhs[i].row, lhs[i].col, sum);
                }
                i += 1;
                j += 1;
            }
        }
    }
    for &t in &lhs[i..] {
        store.push(t);
    }
    for &t in &rhs[j..] {
        store.push(t);
    }

    debug!("add {}x{}: {} terms", a.rows(), a.cols(), store.len());
    Ok(SparseMatrix::from_parts(a.rows(), a.cols(), store))
}
