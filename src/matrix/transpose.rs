//! Linear-time transpose by bucket scatter

use log::debug;

use crate::matrix::{Scalar, SparseMatrix, Triplet, TripletStore};
use crate::utils::{bucket_counts, exclusive_scan};

/// Returns the transpose of a canonical matrix
///
/// Entries are counted per column, the counts are prefix-summed into the
/// offset where each column starts in the output, and every entry is then
/// written straight to its slot. Scanning the input in row-major order
/// fills each output row in ascending original-row order, so the result
/// is canonical without a sort. O(cols + terms).
pub fn transpose<T: Scalar>(matrix: &SparseMatrix<T>) -> SparseMatrix<T> {
    let entries = matrix.entries();

    let counts = bucket_counts(matrix.cols(), entries.iter().map(|t| t.col));
    let mut next_slot = exclusive_scan(&counts);

    let mut scattered = vec![Triplet::new(0, 0, T::zero()); entries.len()];
    for t in entries {
        let slot = &mut next_slot[t.col - 1];
        scattered[*slot] = Triplet::new(t.col, t.row, t.value);
        *slot += 1;
    }

    let growth_floor = matrix.store().growth_floor();
    let capacity = entries.len().max(growth_floor);
    let store = TripletStore::from_entries(scattered, capacity, growth_floor);

    debug!(
        "transpose {}x{} -> {}x{}: {} terms",
        matrix.rows(),
        matrix.cols(),
        matrix.cols(),
        matrix.rows(),
        store.len()
    );
    SparseMatrix::from_parts(matrix.cols(), matrix.rows(), store)
}
