//! Statistics and TableStats.

use super::FrequencyTable;
use tricount_types::Count;

/// A snapshot of frequency table statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableStats {
    /// Cleaned words admitted to the window.
    pub words: u64,
    /// Number of distinct trigrams.
    pub distinct_trigrams: usize,
    /// Total trigram occurrences (sum of all counts).
    pub total_trigrams: Count,
    /// Highest single count, if the table is non-empty.
    pub max_count: Option<Count>,
}

impl FrequencyTable {
    /// Returns table statistics. `words` is supplied by the accumulator
    /// that filled the table.
    pub fn stats(&self, words: u64) -> TableStats {
        TableStats {
            words,
            distinct_trigrams: self.len(),
            total_trigrams: self.total(),
            max_count: self.iter().map(|(_, c)| c).max(),
        }
    }
}

impl TableStats {
    /// Fraction of trigram occurrences that were repeats of an earlier one.
    pub fn repetition_ratio(&self) -> f64 {
        if self.total_trigrams == 0 {
            return 0.0;
        }
        1.0 - self.distinct_trigrams as f64 / self.total_trigrams as f64
    }
}

impl core::fmt::Display for TableStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} words, {} trigrams, {} distinct",
            self.words, self.total_trigrams, self.distinct_trigrams
        )?;

        if let Some(max) = self.max_count {
            write!(
                f,
                ", max count {} ({:.1}% repeated)",
                max,
                self.repetition_ratio() * 100.0
            )?;
        }

        Ok(())
    }
}
