//! Concrete end-to-end scenarios for load, transpose, add and multiply

use tripmat::{add, multiply, transpose, MatrixError, Operation, SparseMatrix};

fn triplets(matrix: &SparseMatrix<i32>) -> Vec<(usize, usize, i32)> {
    matrix.iter().map(|t| (t.row, t.col, t.value)).collect()
}

/// 2×2 dense [1 0; 0 2]
fn scenario_a() -> SparseMatrix<i32> {
    SparseMatrix::from_dense(2, 2, &[1, 0, 0, 2]).unwrap()
}

#[test]
fn test_dense_load_and_output() {
    let a = scenario_a();
    assert_eq!(triplets(&a), vec![(1, 1, 1), (2, 2, 2)]);

    let mut out = Vec::new();
    a.write_dense(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "2 2\n1 0\n0 2\n");
}

#[test]
fn test_transpose_of_diagonal() {
    let t = transpose(&scenario_a());
    assert_eq!(t.shape(), (2, 2));
    assert_eq!(triplets(&t), vec![(1, 1, 1), (2, 2, 2)]);
}

#[test]
fn test_add_to_itself() {
    let a = scenario_a();
    let sum = add(&a, &a).unwrap();
    assert_eq!(triplets(&sum), vec![(1, 1, 2), (2, 2, 4)]);
}

#[test]
fn test_multiply_by_itself() {
    let a = scenario_a();
    let product = multiply(&a, &a).unwrap();
    assert_eq!(triplets(&product), vec![(1, 1, 1), (2, 2, 4)]);
}

/// A shape mismatch does not leave the receiver untouched: it ends up
/// holding a copy of the operand. This is the engine's documented
/// behavior and callers depend on it.
#[test]
fn test_add_mismatch_replaces_receiver_with_operand() {
    let mut current = scenario_a();
    let operand =
        SparseMatrix::from_triplets(3, 3, vec![(3, 3, 9), (1, 2, 4), (2, 1, -1)]).unwrap();

    let err = current.add_in_place(&operand).unwrap_err();
    assert_eq!(
        err,
        MatrixError::DimensionMismatch {
            op: Operation::Add,
            left: (2, 2),
            right: (3, 3),
        }
    );

    assert_eq!(current.shape(), (3, 3));
    assert_eq!(triplets(&current), vec![(1, 2, 4), (2, 1, -1), (3, 3, 9)]);
    assert_eq!(current, operand);
}

#[test]
fn test_multiply_mismatch_replaces_receiver_with_operand() {
    let mut current = scenario_a();
    let operand = SparseMatrix::from_dense(3, 1, &[1, 2, 3]).unwrap();

    assert!(current.multiply_in_place(&operand).is_err());
    assert_eq!(current, operand);
}

#[test]
fn test_current_matrix_chain() {
    // [1 2 0]
    // [0 0 3]
    let mut current = SparseMatrix::from_dense(2, 3, &[1, 2, 0, 0, 0, 3]).unwrap();

    current.transpose_in_place();
    assert_eq!(current.shape(), (3, 2));

    let b = SparseMatrix::from_triplets(2, 2, vec![(2, 2, 1), (1, 1, 1)]).unwrap();
    current.multiply_in_place(&b).unwrap();
    assert_eq!(current.shape(), (3, 2));

    let c = SparseMatrix::from_triplets(3, 2, vec![(1, 1, -1), (3, 2, 1)]).unwrap();
    current.add_in_place(&c).unwrap();

    assert_eq!(triplets(&current), vec![(2, 1, 2), (3, 2, 4)]);
    assert!(current.is_canonical());
}

#[test]
fn test_identity_multiplication() {
    let a = SparseMatrix::from_dense(3, 3, &[0, 1, 2, 3, 0, 4, 5, 6, 0]).unwrap();
    let identity = SparseMatrix::identity(3);

    assert_eq!(multiply(&a, &identity).unwrap(), a);
    assert_eq!(multiply(&identity, &a).unwrap(), a);
}

#[test]
fn test_empty_operands() {
    let empty = SparseMatrix::<i32>::new();
    let product = multiply(&empty, &empty).unwrap();
    assert_eq!(product.shape(), (0, 0));
    assert_eq!(product.terms(), 0);

    let tall = SparseMatrix::<i32>::zeros(4, 0);
    let wide = SparseMatrix::<i32>::zeros(0, 3);
    let outer = multiply(&tall, &wide).unwrap();
    assert_eq!(outer.shape(), (4, 3));
    assert_eq!(outer.terms(), 0);
}
