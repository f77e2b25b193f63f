//! Triplet records and the integer scalar bound

use std::fmt;
use std::str::FromStr;

use num_traits::{PrimInt, WrappingAdd, WrappingMul};

/// Integer value type stored in a matrix
///
/// Sums and products wrap at the type's width, so accumulating in `T`
/// gives the same result as accumulating in a wider type and truncating.
pub trait Scalar:
    PrimInt + WrappingAdd + WrappingMul + Default + fmt::Debug + fmt::Display + FromStr
{
}

impl<T> Scalar for T where
    T: PrimInt + WrappingAdd + WrappingMul + Default + fmt::Debug + fmt::Display + FromStr
{
}

/// One non-zero cell of a sparse matrix
///
/// `row` and `col` are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triplet<T> {
    /// Row index (1-based)
    pub row: usize,

    /// Column index (1-based)
    pub col: usize,

    /// Cell value
    pub value: T,
}

impl<T> Triplet<T> {
    /// Creates a triplet
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// Row-major ordering key
    #[inline]
    pub fn key(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<T> From<(usize, usize, T)> for Triplet<T> {
    fn from((row, col, value): (usize, usize, T)) -> Self {
        Self { row, col, value }
    }
}
