//! Configuration for matrix storage

use crate::constants::{DEFAULT_GROWTH_FLOOR, DEFAULT_INITIAL_CAPACITY};

/// Storage parameters shared by a matrix and every result derived from it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Capacity a new, empty matrix reserves for its entries
    pub initial_capacity: usize,

    /// Capacity used when growing a store whose capacity is zero
    pub growth_floor: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            growth_floor: DEFAULT_GROWTH_FLOOR,
        }
    }
}

impl EngineConfig {
    /// Create a config with a specific initial capacity and the default growth floor
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            initial_capacity,
            ..Self::default()
        }
    }
}
