//! Centralized constants for the tripmat engine
//!
//! Every tuning value and wire-format literal used by the crate lives here.

// ============================================================================
// STORAGE
// ============================================================================

/// Capacity a freshly created matrix starts with
pub const DEFAULT_INITIAL_CAPACITY: usize = 20;

/// Capacity used when a store with zero capacity has to grow
pub const DEFAULT_GROWTH_FLOOR: usize = 10;

/// Multiplier applied to the capacity when a store is full
pub const GROWTH_FACTOR: usize = 2;

// ============================================================================
// CANONICALIZATION
// ============================================================================

/// Slices at or below this length are finished with insertion sort
pub const INSERTION_SORT_THRESHOLD: usize = 16;

// ============================================================================
// INSTRUCTION STREAM
// ============================================================================

/// Op code: dense-load the current matrix
pub const OP_LOAD_DENSE: i64 = 1;

/// Op code: multiply an operand into the current matrix
pub const OP_MULTIPLY: i64 = 2;

/// Op code: add an operand into the current matrix
pub const OP_ADD: i64 = 3;

/// Op code: print the current matrix as a dense grid
pub const OP_PRINT: i64 = 4;

/// Op code: transpose the current matrix
pub const OP_TRANSPOSE: i64 = 5;

/// Largest row or column count the driver accepts
///
/// Row and column indices are sized by the declared dimensions, so an
/// unchecked dimension turns into an allocation of that many counters.
pub const MAX_DIMENSION: usize = 1 << 24;

/// Line printed when an operand has incompatible dimensions
pub const MISMATCH_MARKER: &str = "-1";
