//! Execution of an instruction stream against one long-lived matrix

use std::io::Write;

use log::{debug, warn};

use crate::constants::MISMATCH_MARKER;
use crate::driver::{Instruction, SparseOperand, TokenStream};
use crate::error::{DriverError, MatrixError};
use crate::matrix::{EngineConfig, Scalar, SparseMatrix};

/// Outcome of running a whole instruction stream
#[derive(Debug)]
pub struct RunSummary {
    /// Instruction count announced at the head of the stream
    pub declared: usize,
    /// Instructions fully executed
    pub executed: usize,
    /// Why processing stopped early, if it did
    pub stopped_by: Option<DriverError>,
}

impl RunSummary {
    /// Returns true when every declared instruction was executed
    pub fn completed(&self) -> bool {
        self.stopped_by.is_none() && self.executed == self.declared
    }
}

/// Holds the current matrix and applies instructions to it
pub struct Session<T = i32> {
    current: SparseMatrix<T>,
    config: EngineConfig,
}

impl<T: Scalar> Session<T> {
    /// Creates a session whose current matrix is empty (0×0)
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Creates a session with a specific storage configuration
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            current: SparseMatrix::with_config(&config),
            config,
        }
    }

    /// The current matrix
    pub fn current(&self) -> &SparseMatrix<T> {
        &self.current
    }

    /// Applies one instruction, writing any output to `out`
    ///
    /// A dimension mismatch is not an error here: the marker line is
    /// written and the current matrix holds the operand afterwards.
    pub fn execute<W: Write>(
        &mut self,
        instruction: Instruction<T>,
        out: &mut W,
    ) -> Result<(), DriverError> {
        match instruction {
            Instruction::LoadDense { rows, cols, cells } => {
                self.current.load_dense(rows, cols, &cells)?;
            }
            Instruction::Multiply(operand) => {
                let operand = self.load_operand(operand)?;
                let outcome = self.current.multiply_in_place(&operand);
                self.report(outcome, out)?;
            }
            Instruction::Add(operand) => {
                let operand = self.load_operand(operand)?;
                let outcome = self.current.add_in_place(&operand);
                self.report(outcome, out)?;
            }
            Instruction::Print => self.current.write_dense(out)?,
            Instruction::Transpose => self.current.transpose_in_place(),
            Instruction::Unknown(op) => debug!("skipping unknown op code {}", op),
        }
        Ok(())
    }

    fn load_operand(&self, operand: SparseOperand<T>) -> Result<SparseMatrix<T>, MatrixError> {
        let mut matrix = SparseMatrix::with_config(&self.config);
        matrix.load_triplets(operand.rows, operand.cols, operand.triplets)?;
        Ok(matrix)
    }

    fn report<W: Write>(
        &self,
        outcome: Result<(), MatrixError>,
        out: &mut W,
    ) -> Result<(), DriverError> {
        match outcome {
            Ok(()) => Ok(()),
            Err(MatrixError::DimensionMismatch { .. }) => {
                writeln!(out, "{}", MISMATCH_MARKER)?;
                Ok(())
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Runs a complete instruction stream
    ///
    /// Reads the instruction count, then executes instructions until the
    /// count is reached. A malformed or truncated instruction is abandoned
    /// and stops processing; output already written stays written. Only
    /// I/O failures are returned as errors.
    pub fn run<W: Write>(&mut self, input: &str, out: &mut W) -> Result<RunSummary, DriverError> {
        let mut tokens = TokenStream::new(input);
        let declared = match tokens.instruction_count() {
            Ok(count) => count,
            Err(err) => {
                return Ok(RunSummary {
                    declared: 0,
                    executed: 0,
                    stopped_by: Some(err.into()),
                })
            }
        };

        let mut executed = 0;
        let mut stopped_by = None;
        while executed < declared {
            let step = tokens
                .next_instruction()
                .map_err(DriverError::from)
                .and_then(|instruction| self.execute(instruction, out));
            match step {
                Ok(()) => executed += 1,
                Err(DriverError::Io(err)) => return Err(DriverError::Io(err)),
                Err(err) => {
                    warn!("instruction {} abandoned: {}", executed + 1, err);
                    stopped_by = Some(err);
                    break;
                }
            }
        }

        Ok(RunSummary {
            declared,
            executed,
            stopped_by,
        })
    }
}

impl<T: Scalar> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}
