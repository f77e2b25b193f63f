//! # tripmat: canonical triplet sparse matrices
//!
//! A persistent sparse integer matrix stored as `(row, col, value)`
//! triplets and transformed by addition, multiplication and transposition,
//! each producing a new canonical representation.
//!
//! ## Overview
//!
//! Every matrix keeps its entries in canonical form: sorted by
//! `(row, col)`, one entry per key, no zero values, 1-based indices within
//! bounds. The operations rely on that order instead of re-sorting:
//!
//! 1. **Transpose**: bucket scatter by column, O(cols + terms).
//! 2. **Add**: two-cursor merge of both entry sequences.
//! 3. **Multiply**: transpose the right operand, build CSR-style row
//!    indices over both sides and merge-join each row against each column.
//!
//! Values are primitive integers; sums and products wrap at the type's
//! width.
//!
//! ## Usage
//!
//! ```
//! use tripmat::SparseMatrix;
//!
//! let mut current = SparseMatrix::from_dense(2, 2, &[1, 0, 0, 2]).unwrap();
//! let operand = current.clone();
//!
//! current.multiply_in_place(&operand).unwrap();
//! assert_eq!(current.to_string(), "2 2\n1 0\n0 4\n");
//! ```
//!
//! The instruction-stream driver runs the same engine from text input:
//!
//! ```
//! use tripmat::Session;
//!
//! let mut session = Session::<i32>::new();
//! let mut out = Vec::new();
//! session.run("3\n1 1 2 0 5\n5\n4\n", &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "2 1\n0\n5\n");
//! ```

pub mod constants;
pub mod driver;
pub mod error;
pub mod matrix;
pub mod utils;

// Re-export primary components
pub use driver::{Instruction, RunSummary, Session};
pub use error::{DriverError, MatrixError, Operation, ParseError, Result};
pub use matrix::{add, multiply, transpose};
pub use matrix::{EngineConfig, RowIndex, Scalar, SparseMatrix, Triplet, TripletStore};
pub use utils::{from_sprs, to_sprs_csr};

/// Version information for the tripmat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
