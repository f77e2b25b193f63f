//! Canonical ordering of triplet sequences
//!
//! A canonical sequence is sorted ascending by `(row, col)`, holds each
//! key once and stores no zero values.

use std::cmp::Ordering;

use crate::constants::INSERTION_SORT_THRESHOLD;
use crate::matrix::{Scalar, Triplet};

/// Sorts triplets by `(row, col)` in place
///
/// Quicksort with a median-of-three pivot so that already sorted and
/// reverse sorted input partitions evenly. Short slices are finished with
/// insertion sort. The recursion always descends into the smaller half,
/// which bounds stack depth by `log2(n)`. Not stable.
pub fn sort_by_position<T: Copy>(entries: &mut [Triplet<T>]) {
    let mut slice = entries;
    loop {
        if slice.len() <= INSERTION_SORT_THRESHOLD {
            insertion_sort(slice);
            return;
        }

        let split = partition(slice);
        let (left, right) = slice.split_at_mut(split + 1);
        if left.len() < right.len() {
            sort_by_position(left);
            slice = right;
        } else {
            sort_by_position(right);
            slice = left;
        }
    }
}

/// Orders the first, middle and last element so the middle holds their median
fn median_of_three<T: Copy>(entries: &mut [Triplet<T>], mid: usize) {
    let last = entries.len() - 1;
    if entries[mid].key() < entries[0].key() {
        entries.swap(mid, 0);
    }
    if entries[last].key() < entries[0].key() {
        entries.swap(last, 0);
    }
    if entries[last].key() < entries[mid].key() {
        entries.swap(last, mid);
    }
}

/// Hoare partition around the median-of-three pivot
///
/// Returns `j` such that every key in `[0, j]` is `<=` the pivot and every
/// key in `[j + 1, len)` is `>=` it, with `j < len - 1`.
fn partition<T: Copy>(entries: &mut [Triplet<T>]) -> usize {
    let mid = (entries.len() - 1) / 2;
    median_of_three(entries, mid);
    let pivot = entries[mid].key();

    let mut i = 0;
    let mut j = entries.len() - 1;
    loop {
        while entries[i].key() < pivot {
            i += 1;
        }
        while entries[j].key() > pivot {
            j -= 1;
        }
        if i >= j {
            return j;
        }
        entries.swap(i, j);
        i += 1;
        j -= 1;
    }
}

fn insertion_sort<T: Copy>(entries: &mut [Triplet<T>]) {
    for i in 1..entries.len() {
        let current = entries[i];
        let mut j = i;
        while j > 0 && entries[j - 1].key() > current.key() {
            entries[j] = entries[j - 1];
            j -= 1;
        }
        entries[j] = current;
    }
}

/// Merges runs of equal keys in a sorted slice and drops zero values
///
/// Duplicate values are summed with wrapping arithmetic. The surviving
/// entries are compacted to the front of the slice; the returned length
/// is how many of them there are.
pub fn coalesce<T: Scalar>(entries: &mut [Triplet<T>]) -> usize {
    let mut write = 0;
    let mut read = 0;
    while read < entries.len() {
        let mut merged = entries[read];
        read += 1;
        while read < entries.len() && entries[read].key() == merged.key() {
            merged.value = merged.value.wrapping_add(&entries[read].value);
            read += 1;
        }
        if !merged.value.is_zero() {
            entries[write] = merged;
            write += 1;
        }
    }
    write
}

/// Checks that a sequence is strictly ascending by key with no zero values
pub fn is_canonical<T: Scalar>(entries: &[Triplet<T>]) -> bool {
    entries
        .windows(2)
        .all(|pair| pair[0].key().cmp(&pair[1].key()) == Ordering::Less)
        && entries.iter().all(|t| !t.value.is_zero())
}
