//! Instruction-stream driver
//!
//! Decodes the integer instruction stream (op code followed by operands)
//! and drives a single "current" matrix through it.

pub mod parse;
pub mod session;

pub use parse::{Instruction, SparseOperand, TokenStream};
pub use session::{RunSummary, Session};
