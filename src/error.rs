//! Error types for tripmat

use std::fmt;
use std::io;

use thiserror::Error;

/// Result type alias using tripmat's matrix error
pub type Result<T> = std::result::Result<T, MatrixError>;

/// Binary operation that can reject its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Element-wise sum
    Add,
    /// Matrix product
    Multiply,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Multiply => write!(f, "multiply"),
        }
    }
}

/// Errors raised by matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Operand shapes are incompatible for the operation
    #[error("Dimension mismatch in {op}: {left:?} vs {right:?}")]
    DimensionMismatch {
        /// The rejected operation
        op: Operation,
        /// Shape of the receiver
        left: (usize, usize),
        /// Shape of the operand
        right: (usize, usize),
    },

    /// A triplet lies outside the 1-based bounds of its matrix
    #[error("Entry ({row}, {col}) out of bounds for {rows}x{cols} matrix")]
    IndexOutOfBounds {
        /// Row of the offending entry
        row: usize,
        /// Column of the offending entry
        col: usize,
        /// Row count of the matrix
        rows: usize,
        /// Column count of the matrix
        cols: usize,
    },

    /// rows × cols overflows the address space
    #[error("Dense grid {rows}x{cols} is too large")]
    GridTooLarge {
        /// Declared rows
        rows: usize,
        /// Declared columns
        cols: usize,
    },

    /// Dense input does not hold exactly rows × cols cells
    #[error("Shape mismatch: expected {expected} cells, got {got}")]
    ShapeMismatch {
        /// rows × cols
        expected: usize,
        /// Number of cells supplied
        got: usize,
    },
}

/// Errors raised while reading the instruction stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The stream ended before a required token
    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEof {
        /// Description of the missing token
        expected: &'static str,
    },

    /// A token is not a valid integer of the required type
    #[error("Invalid integer '{token}' for {expected}")]
    InvalidInteger {
        /// The rejected token
        token: String,
        /// Description of the token's role
        expected: &'static str,
    },

    /// A dimension or index token is negative
    #[error("Negative value {value} for {expected}")]
    NegativeDimension {
        /// The rejected value
        value: i64,
        /// Description of the token's role
        expected: &'static str,
    },

    /// A dimension exceeds the largest size the driver accepts
    #[error("Value {value} for {expected} exceeds the limit of {limit}")]
    DimensionTooLarge {
        /// The rejected value
        value: usize,
        /// The accepted maximum
        limit: usize,
        /// Description of the token's role
        expected: &'static str,
    },

    /// rows × cols does not fit in memory addressing
    #[error("Dense grid {rows}x{cols} is too large")]
    GridTooLarge {
        /// Declared rows
        rows: usize,
        /// Declared columns
        cols: usize,
    },
}

/// Errors that stop the instruction driver
#[derive(Error, Debug)]
pub enum DriverError {
    /// Malformed or truncated instruction stream
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// Operand rejected by the engine for a reason other than a dimension mismatch
    #[error("Matrix error: {0}")]
    Matrix(#[from] MatrixError),

    /// Failure writing output
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
