//! Utility functions and helpers

pub mod formats;

pub use formats::{from_sprs, to_sprs_csr};

/// Computes an exclusive prefix sum (scan) for a vector
///
/// The result has `input.len() + 1` elements: `result[i]` is the sum of
/// `input[..i]`, and the last element is the total.
pub fn exclusive_scan(input: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(input.len() + 1);
    let mut sum = 0;

    result.push(0);

    for &val in input {
        sum += val;
        result.push(sum);
    }

    result
}

/// Counts entries per 1-based bucket, returning `buckets` counters
pub fn bucket_counts<I>(buckets: usize, keys: I) -> Vec<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut counts = vec![0; buckets];
    for key in keys {
        counts[key - 1] += 1;
    }
    counts
}
