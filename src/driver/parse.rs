//! Token reader and instruction decoding

use std::str::{FromStr, SplitAsciiWhitespace};

use crate::constants::{
    MAX_DIMENSION, OP_ADD, OP_LOAD_DENSE, OP_MULTIPLY, OP_PRINT, OP_TRANSPOSE,
};
use crate::error::ParseError;
use crate::matrix::Scalar;

/// Sparse operand as read from the stream: `n m t` then `t` triplets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseOperand<T> {
    /// Declared rows
    pub rows: usize,
    /// Declared columns
    pub cols: usize,
    /// `(row, col, value)` in stream order
    pub triplets: Vec<(usize, usize, T)>,
}

/// One decoded instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction<T> {
    /// Op 1: dense-load the current matrix
    LoadDense {
        /// Rows of the grid
        rows: usize,
        /// Columns of the grid
        cols: usize,
        /// Row-major cells
        cells: Vec<T>,
    },
    /// Op 2: `current = current × operand`
    Multiply(SparseOperand<T>),
    /// Op 3: `current = current + operand`
    Add(SparseOperand<T>),
    /// Op 4: print the current matrix
    Print,
    /// Op 5: transpose the current matrix
    Transpose,
    /// Any other op code; carries no operands and is skipped
    Unknown(i64),
}

/// Whitespace-separated integer tokens
pub struct TokenStream<'a> {
    tokens: SplitAsciiWhitespace<'a>,
}

impl<'a> TokenStream<'a> {
    /// Wraps an input text
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: input.split_ascii_whitespace(),
        }
    }

    fn next_token(&mut self, expected: &'static str) -> Result<&'a str, ParseError> {
        self.tokens
            .next()
            .ok_or(ParseError::UnexpectedEof { expected })
    }

    /// Reads one integer of type `V`
    pub fn next_integer<V: FromStr>(&mut self, expected: &'static str) -> Result<V, ParseError> {
        let token = self.next_token(expected)?;
        token.parse().map_err(|_| ParseError::InvalidInteger {
            token: token.to_string(),
            expected,
        })
    }

    /// Reads a non-negative count
    pub fn next_count(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let value: i64 = self.next_integer(expected)?;
        usize::try_from(value).map_err(|_| ParseError::NegativeDimension { value, expected })
    }

    /// Reads a matrix dimension or index, at most `MAX_DIMENSION`
    pub fn next_dimension(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let value = self.next_count(expected)?;
        if value > MAX_DIMENSION {
            return Err(ParseError::DimensionTooLarge {
                value,
                limit: MAX_DIMENSION,
                expected,
            });
        }
        Ok(value)
    }

    /// Reads the leading instruction count
    pub fn instruction_count(&mut self) -> Result<usize, ParseError> {
        self.next_count("instruction count")
    }

    /// Reads one complete instruction with its operands
    pub fn next_instruction<T: Scalar>(&mut self) -> Result<Instruction<T>, ParseError> {
        let op: i64 = self.next_integer("op code")?;
        let instruction = match op {
            OP_LOAD_DENSE => {
                let rows = self.next_dimension("dense rows")?;
                let cols = self.next_dimension("dense cols")?;
                let cells = rows
                    .checked_mul(cols)
                    .ok_or(ParseError::GridTooLarge { rows, cols })?;
                let cells = (0..cells)
                    .map(|_| self.next_integer("dense cell"))
                    .collect::<Result<Vec<T>, _>>()?;
                Instruction::LoadDense { rows, cols, cells }
            }
            OP_MULTIPLY => Instruction::Multiply(self.sparse_operand()?),
            OP_ADD => Instruction::Add(self.sparse_operand()?),
            OP_PRINT => Instruction::Print,
            OP_TRANSPOSE => Instruction::Transpose,
            other => Instruction::Unknown(other),
        };
        Ok(instruction)
    }

    fn sparse_operand<T: Scalar>(&mut self) -> Result<SparseOperand<T>, ParseError> {
        let rows = self.next_dimension("operand rows")?;
        let cols = self.next_dimension("operand cols")?;
        let terms = self.next_count("operand term count")?;

        let mut triplets = Vec::new();
        for _ in 0..terms {
            let row = self.next_dimension("triplet row")?;
            let col = self.next_dimension("triplet col")?;
            let value = self.next_integer("triplet value")?;
            triplets.push((row, col, value));
        }

        Ok(SparseOperand {
            rows,
            cols,
            triplets,
        })
    }
}
