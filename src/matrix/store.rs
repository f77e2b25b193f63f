//! Growable triplet storage with explicit capacity tracking
//!
//! The store keeps its own logical capacity instead of relying on the
//! allocator's: capacity changes only when an append would overflow it,
//! and then it grows by `GROWTH_FACTOR` (or to the growth floor when it
//! was zero). Existing entries keep their order across growth.

use log::trace;

use crate::constants::{DEFAULT_GROWTH_FLOOR, GROWTH_FACTOR};
use crate::matrix::Triplet;

/// Owned buffer of triplets
#[derive(Debug)]
pub struct TripletStore<T> {
    entries: Vec<Triplet<T>>,
    capacity: usize,
    growth_floor: usize,
}

impl<T: Copy> TripletStore<T> {
    /// Creates an empty store with the given capacity and the default growth floor
    pub fn new(initial_capacity: usize) -> Self {
        Self::with_growth_floor(initial_capacity, DEFAULT_GROWTH_FLOOR)
    }

    /// Creates an empty store with the given capacity and growth floor
    ///
    /// A growth floor of zero is treated as one so that growth always
    /// makes room.
    pub fn with_growth_floor(initial_capacity: usize, growth_floor: usize) -> Self {
        Self {
            entries: Vec::with_capacity(initial_capacity),
            capacity: initial_capacity,
            growth_floor: growth_floor.max(1),
        }
    }

    /// Creates an empty store sharing this store's growth policy
    pub fn empty_like(&self, capacity: usize) -> Self {
        Self::with_growth_floor(capacity, self.growth_floor)
    }

    /// Wraps an already-built entry buffer
    pub(crate) fn from_entries(
        mut entries: Vec<Triplet<T>>,
        capacity: usize,
        growth_floor: usize,
    ) -> Self {
        let capacity = capacity.max(entries.len());
        entries.reserve_exact(capacity - entries.len());
        Self {
            entries,
            capacity,
            growth_floor: growth_floor.max(1),
        }
    }

    /// Appends an entry at the next free slot, growing if the store is full
    pub fn append(&mut self, row: usize, col: usize, value: T) {
        self.push(Triplet::new(row, col, value));
    }

    /// Appends a triplet, growing if the store is full
    pub fn push(&mut self, triplet: Triplet<T>) {
        if self.entries.len() >= self.capacity {
            self.grow();
        }
        self.entries.push(triplet);
    }

    fn grow(&mut self) {
        let new_capacity = if self.capacity == 0 {
            self.growth_floor
        } else {
            self.capacity.saturating_mul(GROWTH_FACTOR)
        };
        // reserve_exact either succeeds with every entry in place or aborts
        self.entries.reserve_exact(new_capacity - self.entries.len());
        trace!(
            "triplet store grew from {} to {} (len {})",
            self.capacity,
            new_capacity,
            self.entries.len()
        );
        self.capacity = new_capacity;
    }

    /// Replaces this store's contents with an independent copy of `other`
    pub fn replace_with(&mut self, other: &Self) {
        self.clone_from(other);
    }

    /// Removes every entry, keeping the capacity
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [Triplet<T>] {
        &mut self.entries
    }
}

impl<T> TripletStore<T> {
    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no entries are stored
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Logical capacity of the buffer
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Capacity adopted when growing from zero
    pub fn growth_floor(&self) -> usize {
        self.growth_floor
    }

    /// Stored entries in insertion order
    pub fn as_slice(&self) -> &[Triplet<T>] {
        &self.entries
    }

    /// Iterates over the stored entries
    pub fn iter(&self) -> std::slice::Iter<'_, Triplet<T>> {
        self.entries.iter()
    }
}

impl<T: Copy> Clone for TripletStore<T> {
    fn clone(&self) -> Self {
        let mut entries = Vec::with_capacity(self.capacity);
        entries.extend_from_slice(&self.entries);
        Self {
            entries,
            capacity: self.capacity,
            growth_floor: self.growth_floor,
        }
    }
}
