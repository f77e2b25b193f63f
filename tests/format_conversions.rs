//! Conversions between the triplet matrix, sprs and ndarray

use ndarray::array;
use sprs::CsMat;
use tripmat::{from_sprs, multiply, to_sprs_csr, transpose, SparseMatrix};

#[test]
fn test_to_sprs_matches_structure() {
    // [1 2 0]
    // [0 0 0]
    // [4 0 5]
    let matrix = SparseMatrix::from_dense(3, 3, &[1, 2, 0, 0, 0, 0, 4, 0, 5]).unwrap();
    let csr = to_sprs_csr(&matrix);

    assert!(csr.is_csr());
    assert_eq!(csr.indptr().raw_storage(), &[0, 2, 2, 4]);
    assert_eq!(csr.indices(), &[0, 1, 0, 2]);
    assert_eq!(csr.data(), &[1, 2, 4, 5]);
    assert_eq!(csr.get(2, 2), Some(&5));
}

#[test]
fn test_product_agrees_with_sprs() {
    let a = SparseMatrix::from_dense(3, 4, &[1, 0, 2, 0, 0, 3, 0, 0, 4, 0, 0, 5]).unwrap();
    let b = SparseMatrix::from_dense(4, 2, &[1, 0, 0, 2, 3, 0, 0, 4]).unwrap();

    let ours = multiply(&a, &b).unwrap();
    let theirs: CsMat<i32> = &to_sprs_csr(&a) * &to_sprs_csr(&b);

    assert_eq!(ours, from_sprs(&theirs).unwrap());
}

#[test]
fn test_transpose_agrees_with_sprs() {
    let a = SparseMatrix::from_dense(2, 3, &[0, 7, 0, 8, 0, 9]).unwrap();
    let theirs = to_sprs_csr(&a).transpose_into();

    assert!(theirs.is_csc());
    assert_eq!(transpose(&a), from_sprs(&theirs).unwrap());
}

#[test]
fn test_ndarray_roundtrip() {
    let dense = array![[0, 0, 3], [1, 0, 0]];
    let matrix = SparseMatrix::from_array(dense.view());

    assert_eq!(matrix.terms(), 2);
    assert_eq!(matrix.to_dense(), dense);
}
