//! Bounded top-k selection over a frequency table.
//!
//! Selection runs in O(n log k) time and O(k) extra space for a table of n
//! distinct trigrams, instead of sorting the whole table.

mod heap;

pub use heap::BoundedMinHeap;

use crate::table::FrequencyTable;
use tricount_types::RankedEntry;

/// Returns the `k` most frequent trigrams, highest count first.
///
/// The table is only read. The result holds `min(k, table.len())` value
/// copies; equal counts are ordered lexicographically by trigram.
///
/// # Example
///
/// ```
/// use tricount_core::select::select_top_k;
/// use tricount_core::table::FrequencyTable;
/// use tricount_types::Trigram;
///
/// let table: FrequencyTable = vec![
///     (Trigram::new("a", "b", "c"), 3),
///     (Trigram::new("b", "c", "d"), 7),
///     (Trigram::new("c", "d", "e"), 1),
/// ]
/// .into_iter()
/// .collect();
///
/// let top = select_top_k(&table, 2);
/// assert_eq!(top.len(), 2);
/// assert_eq!(top[0].count, 7);
/// assert_eq!(top[1].count, 3);
/// ```
#[inline(never)]
pub fn select_top_k(table: &FrequencyTable, k: usize) -> Vec<RankedEntry> {
    if k == 0 || table.is_empty() {
        return Vec::new();
    }

    let mut heap = BoundedMinHeap::with_capacity(k.min(table.len()));
    for (trigram, count) in table.iter() {
        if heap.is_full() && heap.min_count().is_some_and(|min| count <= min) {
            continue;
        }
        heap.push_bounded(RankedEntry::new(trigram.clone(), count));
    }

    let mut ranked = heap.into_vec();
    ranked.sort_unstable();
    ranked
}
