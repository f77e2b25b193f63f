//! Utilities for converting between our matrix format and sprs

use sprs::CsMat;

use crate::error::Result;
use crate::matrix::{Scalar, SparseMatrix};

/// Converts a canonical matrix to a sprs CSR matrix
///
/// sprs indices are 0-based; the canonical order is already row-major, so
/// the column and value arrays are taken over unchanged.
pub fn to_sprs_csr<T: Scalar>(matrix: &SparseMatrix<T>) -> CsMat<T> {
    let indptr = matrix.row_index().starts().to_vec();
    let indices = matrix.iter().map(|t| t.col - 1).collect();
    let data = matrix.iter().map(|t| t.value).collect();

    CsMat::new((matrix.rows(), matrix.cols()), indptr, indices, data)
}

/// Converts a sprs matrix in either storage order to a canonical matrix
///
/// Explicitly stored zeros are dropped.
pub fn from_sprs<T: Scalar>(matrix: &CsMat<T>) -> Result<SparseMatrix<T>> {
    let (rows, cols) = matrix.shape();
    SparseMatrix::from_triplets(
        rows,
        cols,
        matrix.iter().map(|(&value, (r, c))| (r + 1, c + 1, value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csr_roundtrip() {
        let original = SparseMatrix::from_dense(3, 3, &[1, 2, 0, 0, 3, 0, 4, 0, 5]).unwrap();

        let sprs_mat = to_sprs_csr(&original);
        assert_eq!(sprs_mat.shape(), (3, 3));
        assert_eq!(sprs_mat.nnz(), 5);
        assert_eq!(sprs_mat.indptr().raw_storage(), &[0, 2, 3, 5]);

        let roundtrip = from_sprs(&sprs_mat).unwrap();
        assert_eq!(roundtrip, original);
    }

    #[test]
    fn test_from_csc() {
        // [1 0]
        // [2 3]
        let csc = CsMat::new_csc((2, 2), vec![0, 2, 3], vec![0, 1, 1], vec![1, 2, 3]);
        let matrix = from_sprs(&csc).unwrap();

        let triplets: Vec<_> = matrix.iter().map(|t| (t.row, t.col, t.value)).collect();
        assert_eq!(triplets, vec![(1, 1, 1), (2, 1, 2), (2, 2, 3)]);
    }

    #[test]
    fn test_explicit_zero_dropped() {
        let csr = CsMat::new((1, 2), vec![0, 2], vec![0, 1], vec![0, 7]);
        let matrix = from_sprs(&csr).unwrap();
        assert_eq!(matrix.terms(), 1);
        assert_eq!(matrix.get(1, 2), 7);
    }
}
