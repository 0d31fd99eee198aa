//! Trigram frequency table and the accumulator that fills it.
//!
//! Lifecycle:
//! - created empty at the start of a run
//! - mutated only by [`Accumulator`] while sources are ingested
//! - read-only once selection begins
//!
//! Counts only ever grow; an entry exists iff its count is at least 1.
//!
//! Threading:
//! - Single-threaded. Nothing here locks; sources are ingested strictly
//!   one after another.

mod accumulator;
mod stats;

pub use accumulator::Accumulator;
pub use stats::TableStats;

use rustc_hash::FxHashMap;
use tricount_types::{Count, Trigram};

/// Mapping from trigram to the number of times it was observed.
///
/// Backed by an `FxHashMap`. Its hasher is unseeded, so iteration order is
/// unspecified but identical across runs for the same insertion sequence.
#[derive(Debug, Default, Clone)]
pub struct FrequencyTable {
    counts: FxHashMap<Trigram, Count>,
    total: Count,
}

impl FrequencyTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more occurrence of `trigram`.
    #[inline]
    pub fn increment(&mut self, trigram: Trigram) {
        *self.counts.entry(trigram).or_insert(0) += 1;
        self.total += 1;
    }

    /// Count for `trigram`, or 0 if it was never seen.
    #[inline]
    #[must_use]
    pub fn get(&self, trigram: &Trigram) -> Count {
        self.counts.get(trigram).copied().unwrap_or(0)
    }

    /// Number of distinct trigrams.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Returns `true` if no trigram has been recorded.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (every full window ever ingested).
    #[inline(always)]
    #[must_use]
    pub fn total(&self) -> Count {
        self.total
    }

    /// Iterates `(trigram, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&Trigram, Count)> + '_ {
        self.counts.iter().map(|(t, &c)| (t, c))
    }
}

impl FromIterator<(Trigram, Count)> for FrequencyTable {
    /// Builds a table from explicit counts. Zero counts are skipped and
    /// repeated keys accumulate.
    fn from_iter<I: IntoIterator<Item = (Trigram, Count)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (trigram, count) in iter {
            if count == 0 {
                continue;
            }
            *table.counts.entry(trigram).or_insert(0) += count;
            table.total += count;
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(a: &str, b: &str, c: &str) -> Trigram {
        Trigram::new(a, b, c)
    }

    #[test]
    fn increment_creates_and_grows() {
        let mut table = FrequencyTable::new();
        assert!(table.is_empty());

        table.increment(t("a", "b", "c"));
        table.increment(t("a", "b", "c"));
        table.increment(t("b", "c", "d"));

        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
        assert_eq!(table.get(&t("a", "b", "c")), 2);
        assert_eq!(table.get(&t("b", "c", "d")), 1);
        assert_eq!(table.get(&t("x", "y", "z")), 0);
    }

    #[test]
    fn every_entry_has_positive_count() {
        let table: FrequencyTable = vec![
            (t("a", "b", "c"), 0),
            (t("b", "c", "d"), 3),
            (t("b", "c", "d"), 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(table.len(), 1);
        assert_eq!(table.get(&t("b", "c", "d")), 5);
        assert!(table.iter().all(|(_, c)| c >= 1));
    }

    #[test]
    fn iteration_visits_every_entry_once() {
        let mut table = FrequencyTable::new();
        for i in 0..50 {
            table.increment(t("w", "x", &i.to_string()));
        }
        let mut seen: Vec<String> = table
            .iter()
            .map(|(tri, _)| tri.third().to_string())
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 50);
    }
}
