//! Canonical triplet-form sparse matrix
//!
//! A `SparseMatrix` owns a `TripletStore` whose entries are kept in
//! canonical form after every public operation:
//! - sorted ascending by `(row, col)`
//! - unique keys
//! - no zero values
//! - `1 <= row <= rows` and `1 <= col <= cols`
//!
//! Transforms build a complete new matrix and only then replace the
//! receiver, so a partially built result is never observable.

use std::fmt;

use log::debug;
use ndarray::ArrayView2;

use crate::error::{MatrixError, Result};
use crate::matrix::canonical::{coalesce, is_canonical, sort_by_position};
use crate::matrix::config::EngineConfig;
use crate::matrix::{add, multiply, transpose, RowIndex, Scalar, Triplet, TripletStore};

/// A sparse integer matrix stored as canonical triplets
pub struct SparseMatrix<T = i32> {
    /// Number of rows in the matrix
    rows: usize,

    /// Number of columns in the matrix
    cols: usize,

    /// Non-zero entries in row-major order
    store: TripletStore<T>,
}

impl<T: Scalar> SparseMatrix<T> {
    /// Creates an empty 0×0 matrix with the default configuration
    pub fn new() -> Self {
        Self::with_config(&EngineConfig::default())
    }

    /// Creates an empty 0×0 matrix with the given storage configuration
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            rows: 0,
            cols: 0,
            store: TripletStore::with_growth_floor(config.initial_capacity, config.growth_floor),
        }
    }

    /// Creates an all-zero matrix with the given dimensions
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let mut matrix = Self::new();
        matrix.rows = rows;
        matrix.cols = cols;
        matrix
    }

    /// Creates an identity matrix of the given size
    pub fn identity(n: usize) -> Self {
        let config = EngineConfig::default();
        let mut store = TripletStore::with_growth_floor(n, config.growth_floor);
        for i in 1..=n {
            store.append(i, i, T::one());
        }
        Self::from_parts(n, n, store)
    }

    /// Creates a matrix from row-major dense cells
    pub fn from_dense(rows: usize, cols: usize, cells: &[T]) -> Result<Self> {
        let mut matrix = Self::new();
        matrix.load_dense(rows, cols, cells)?;
        Ok(matrix)
    }

    /// Creates a matrix from `(row, col, value)` triplets in any order
    pub fn from_triplets<I>(rows: usize, cols: usize, triplets: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut matrix = Self::new();
        matrix.load_triplets(rows, cols, triplets)?;
        Ok(matrix)
    }

    /// Creates a matrix from a dense ndarray view
    pub fn from_array(array: ArrayView2<'_, T>) -> Self {
        let (rows, cols) = array.dim();
        let mut matrix = Self::new();
        matrix.rows = rows;
        matrix.cols = cols;
        // indexed_iter visits cells in logical row-major order
        for ((r, c), &value) in array.indexed_iter() {
            if !value.is_zero() {
                matrix.store.append(r + 1, c + 1, value);
            }
        }
        matrix
    }

    pub(crate) fn from_parts(rows: usize, cols: usize, store: TripletStore<T>) -> Self {
        Self { rows, cols, store }
    }

    /// Loads a dense grid given in row-major order
    ///
    /// Only non-zero cells are stored. Cells arrive in row-major order, so
    /// no sorting is needed. On error the matrix is left unchanged.
    pub fn load_dense(&mut self, rows: usize, cols: usize, cells: &[T]) -> Result<()> {
        let expected = rows
            .checked_mul(cols)
            .ok_or(MatrixError::GridTooLarge { rows, cols })?;
        if cells.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                expected,
                got: cells.len(),
            });
        }

        self.rows = rows;
        self.cols = cols;
        self.store.clear();
        if cols > 0 {
            for (i, row) in cells.chunks(cols).enumerate() {
                for (j, &value) in row.iter().enumerate() {
                    if !value.is_zero() {
                        self.store.append(i + 1, j + 1, value);
                    }
                }
            }
        }

        debug!("dense load {}x{}: {} terms", rows, cols, self.terms());
        Ok(())
    }

    /// Loads explicit triplets in arbitrary order
    ///
    /// Entries are appended as given and then canonicalized: sorted by
    /// `(row, col)`, duplicates summed, zeros dropped. Fails without
    /// touching the matrix if any triplet lies outside `rows × cols`.
    pub fn load_triplets<I>(&mut self, rows: usize, cols: usize, triplets: I) -> Result<()>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut store = self.store.empty_like(self.store.capacity());
        for (row, col, value) in triplets {
            if row == 0 || row > rows || col == 0 || col > cols {
                return Err(MatrixError::IndexOutOfBounds {
                    row,
                    col,
                    rows,
                    cols,
                });
            }
            store.append(row, col, value);
        }

        if store.len() > 1 {
            sort_by_position(store.as_mut_slice());
        }
        let len = coalesce(store.as_mut_slice());
        store.truncate(len);

        self.rows = rows;
        self.cols = cols;
        self.store = store;

        debug!("sparse load {}x{}: {} terms", rows, cols, self.terms());
        Ok(())
    }

    /// Replaces this matrix with an independent copy of `other`
    ///
    /// The borrow rules make `self` and `other` distinct, so there is no
    /// self-assignment case to handle.
    pub fn assign(&mut self, other: &Self) {
        self.rows = other.rows;
        self.cols = other.cols;
        self.store.replace_with(&other.store);
    }

    /// Replaces this matrix with `self + other`
    ///
    /// On a shape mismatch the sum is not computed: the receiver is
    /// replaced by a copy of `other` and `DimensionMismatch` is returned.
    pub fn add_in_place(&mut self, other: &Self) -> Result<()> {
        match add(self, other) {
            Ok(sum) => {
                *self = sum;
                Ok(())
            }
            Err(err) => {
                debug!("{}; receiver replaced by operand", err);
                self.assign(other);
                Err(err)
            }
        }
    }

    /// Replaces this matrix with `self × other`
    ///
    /// On an inner-dimension mismatch the product is not computed: the
    /// receiver is replaced by a copy of `other` and `DimensionMismatch`
    /// is returned.
    pub fn multiply_in_place(&mut self, other: &Self) -> Result<()> {
        match multiply(self, other) {
            Ok(product) => {
                *self = product;
                Ok(())
            }
            Err(err) => {
                debug!("{}; receiver replaced by operand", err);
                self.assign(other);
                Err(err)
            }
        }
    }

    /// Replaces this matrix with its transpose
    pub fn transpose_in_place(&mut self) {
        *self = transpose(self);
    }

    /// Value at `(row, col)`, zero when no entry is stored
    pub fn get(&self, row: usize, col: usize) -> T {
        self.entries()
            .binary_search_by(|t| t.key().cmp(&(row, col)))
            .map(|i| self.entries()[i].value)
            .unwrap_or_else(|_| T::zero())
    }

    /// Returns true when the entries are in canonical form and in bounds
    pub fn is_canonical(&self) -> bool {
        is_canonical(self.entries())
            && self
                .entries()
                .iter()
                .all(|t| t.row >= 1 && t.row <= self.rows && t.col >= 1 && t.col <= self.cols)
    }

    /// Builds the CSR-style row index over the entries
    pub fn row_index(&self) -> RowIndex {
        RowIndex::build(self.rows, self.entries())
    }
}

impl<T> SparseMatrix<T> {
    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of stored non-zero entries
    pub fn terms(&self) -> usize {
        self.store.len()
    }

    /// Logical capacity of the entry buffer
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Entries in canonical order
    pub fn entries(&self) -> &[Triplet<T>] {
        self.store.as_slice()
    }

    /// Iterates over the entries in canonical order
    pub fn iter(&self) -> std::slice::Iter<'_, Triplet<T>> {
        self.store.iter()
    }

    pub(crate) fn store(&self) -> &TripletStore<T> {
        &self.store
    }
}

impl<T: Scalar> Default for SparseMatrix<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> Clone for SparseMatrix<T> {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            store: self.store.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for SparseMatrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.store.as_slice() == other.store.as_slice()
    }
}

impl<T: Eq> Eq for SparseMatrix<T> {}

impl<'a, T> IntoIterator for &'a SparseMatrix<T> {
    type Item = &'a Triplet<T>;
    type IntoIter = std::slice::Iter<'a, Triplet<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SparseMatrix {{")?;
        writeln!(f, "  dimensions: {} × {}", self.rows, self.cols)?;
        writeln!(f, "  terms: {} (capacity {})", self.terms(), self.capacity())?;

        let max_terms_to_print = self.terms().min(8);
        if max_terms_to_print > 0 {
            write!(f, "  entries: ")?;
            for t in &self.entries()[..max_terms_to_print] {
                write!(f, "({}, {}, {:?}) ", t.row, t.col, t.value)?;
            }
            if self.terms() > max_terms_to_print {
                write!(f, "... ({} more)", self.terms() - max_terms_to_print)?;
            }
            writeln!(f)?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn triplets(matrix: &SparseMatrix<i32>) -> Vec<(usize, usize, i32)> {
        matrix.iter().map(|t| (t.row, t.col, t.value)).collect()
    }

    #[test]
    fn test_new_is_empty() {
        let matrix = SparseMatrix::<i32>::new();
        assert_eq!(matrix.shape(), (0, 0));
        assert_eq!(matrix.terms(), 0);
        assert_eq!(matrix.capacity(), 20);
    }

    #[test]
    fn test_dense_load_skips_zeros() {
        let matrix = SparseMatrix::from_dense(2, 3, &[0, 4, 0, -1, 0, 2]).unwrap();
        assert_eq!(triplets(&matrix), vec![(1, 2, 4), (2, 1, -1), (2, 3, 2)]);
        assert!(matrix.is_canonical());
    }

    #[test]
    fn test_dense_load_wrong_length() {
        let mut matrix = SparseMatrix::from_dense(1, 1, &[5]).unwrap();
        let err = matrix.load_dense(2, 2, &[1, 2, 3]).unwrap_err();
        assert_eq!(err, MatrixError::ShapeMismatch { expected: 4, got: 3 });
        assert_eq!(triplets(&matrix), vec![(1, 1, 5)]);
    }

    #[test]
    fn test_dense_load_overflowing_shape() {
        let mut matrix = SparseMatrix::from_dense(1, 1, &[5]).unwrap();
        let err = matrix.load_dense(usize::MAX, 2, &[]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::GridTooLarge {
                rows: usize::MAX,
                cols: 2
            }
        );
        assert_eq!(triplets(&matrix), vec![(1, 1, 5)]);
    }

    #[test]
    fn test_dense_load_replaces_previous_contents() {
        let mut matrix = SparseMatrix::from_dense(2, 2, &[1, 1, 1, 1]).unwrap();
        matrix.load_dense(1, 2, &[0, 3]).unwrap();
        assert_eq!(matrix.shape(), (1, 2));
        assert_eq!(triplets(&matrix), vec![(1, 2, 3)]);
    }

    #[test]
    fn test_sparse_load_sorts() {
        let matrix =
            SparseMatrix::from_triplets(3, 3, vec![(3, 1, 5), (1, 2, 7), (2, 3, 1), (1, 1, 2)])
                .unwrap();
        assert_eq!(
            triplets(&matrix),
            vec![(1, 1, 2), (1, 2, 7), (2, 3, 1), (3, 1, 5)]
        );
    }

    #[test]
    fn test_sparse_load_merges_duplicates_and_zeros() {
        let matrix =
            SparseMatrix::from_triplets(2, 2, vec![(1, 1, 3), (2, 2, 0), (1, 1, 4)]).unwrap();
        assert_eq!(triplets(&matrix), vec![(1, 1, 7)]);
        assert!(matrix.is_canonical());
    }

    #[test]
    fn test_sparse_load_out_of_bounds() {
        let mut matrix = SparseMatrix::identity(2);
        let err = matrix.load_triplets(2, 2, vec![(1, 1, 1), (3, 1, 1)]).unwrap_err();
        assert_eq!(
            err,
            MatrixError::IndexOutOfBounds {
                row: 3,
                col: 1,
                rows: 2,
                cols: 2
            }
        );
        assert_eq!(matrix, SparseMatrix::identity(2));

        assert!(matrix.load_triplets(2, 2, vec![(0, 1, 1)]).is_err());
    }

    #[test]
    fn test_from_array() {
        let dense = array![[0, 2], [3, 0], [0, 0]];
        let matrix = SparseMatrix::from_array(dense.view());
        assert_eq!(matrix.shape(), (3, 2));
        assert_eq!(triplets(&matrix), vec![(1, 2, 2), (2, 1, 3)]);

        let transposed = SparseMatrix::from_array(dense.t());
        assert_eq!(triplets(&transposed), vec![(1, 2, 3), (2, 1, 2)]);
    }

    #[test]
    fn test_get() {
        let matrix = SparseMatrix::from_dense(2, 2, &[1, 0, 0, 2]).unwrap();
        assert_eq!(matrix.get(1, 1), 1);
        assert_eq!(matrix.get(1, 2), 0);
        assert_eq!(matrix.get(2, 2), 2);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = SparseMatrix::from_dense(1, 2, &[1, 2]).unwrap();
        let mut copy = original.clone();
        copy.add_in_place(&original).unwrap();

        assert_eq!(triplets(&original), vec![(1, 1, 1), (1, 2, 2)]);
        assert_eq!(triplets(&copy), vec![(1, 1, 2), (1, 2, 4)]);
        assert_ne!(original.entries().as_ptr(), copy.entries().as_ptr());
    }

    #[test]
    fn test_assign_copies_shape_and_entries() {
        let source = SparseMatrix::from_dense(1, 3, &[0, 0, 9]).unwrap();
        let mut target = SparseMatrix::identity(4);
        target.assign(&source);
        assert_eq!(target, source);
        assert_ne!(target.entries().as_ptr(), source.entries().as_ptr());
    }

    #[test]
    fn test_multiply_mismatch_replaces_receiver() {
        let mut current = SparseMatrix::from_dense(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
        let operand = SparseMatrix::from_dense(2, 2, &[7, 0, 0, 7]).unwrap();

        let err = current.multiply_in_place(&operand).unwrap_err();
        assert!(matches!(err, MatrixError::DimensionMismatch { .. }));
        assert_eq!(current, operand);
    }

    #[test]
    fn test_transpose_in_place() {
        let mut matrix = SparseMatrix::from_dense(2, 3, &[1, 0, 2, 0, 3, 0]).unwrap();
        matrix.transpose_in_place();
        assert_eq!(matrix.shape(), (3, 2));
        assert_eq!(triplets(&matrix), vec![(1, 1, 1), (2, 2, 3), (3, 1, 2)]);
    }

    #[test]
    fn test_debug_output() {
        let matrix = SparseMatrix::from_dense(1, 2, &[0, 5]).unwrap();
        let text = format!("{:?}", matrix);
        assert!(text.contains("dimensions: 1 × 2"));
        assert!(text.contains("(1, 2, 5)"));
    }
}
