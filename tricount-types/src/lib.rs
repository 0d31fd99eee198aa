//! Core types for the tricount trigram analyzer.
//!
//! This crate holds the values that cross crate boundaries:
//!
//! - **Trigram**: an ordered triple of cleaned words
//! - **RankedEntry**: a trigram paired with its count, produced by selection
//! - **AnalysisConfig**: run parameters shared by the core and the CLI
//! - **TricountError**: the failure surface of a run

#![warn(missing_docs)]

use core::fmt;
use std::io;

/// Number of times a trigram was observed.
pub type Count = u64;

/// Number of results returned when nothing else is configured.
pub const DEFAULT_TOP_K: i64 = 100;

/// An ordered triple of three consecutive cleaned words.
///
/// Equality and hashing are structural: two trigrams are the same key iff
/// all three words match in order. The derived `Ord` is lexicographic on
/// `(first, second, third)` and is only used to break ties between equal
/// counts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Trigram {
    first: String,
    second: String,
    third: String,
}

impl Trigram {
    /// Creates a trigram from three words.
    #[inline]
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            third: third.into(),
        }
    }

    /// The oldest word of the window.
    #[inline(always)]
    pub fn first(&self) -> &str {
        &self.first
    }

    /// The middle word of the window.
    #[inline(always)]
    pub fn second(&self) -> &str {
        &self.second
    }

    /// The most recent word of the window.
    #[inline(always)]
    pub fn third(&self) -> &str {
        &self.third
    }

    /// Returns the three words in order.
    #[inline(always)]
    pub fn words(&self) -> [&str; 3] {
        [&self.first, &self.second, &self.third]
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.first, self.second, self.third)
    }
}

/// A trigram and its count, copied out of the frequency table.
///
/// Ranked entries are values: holding one never borrows the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankedEntry {
    /// The word triple.
    pub trigram: Trigram,
    /// How often it occurred.
    pub count: Count,
}

impl RankedEntry {
    /// Creates a new ranked entry.
    #[inline]
    pub fn new(trigram: Trigram, count: Count) -> Self {
        Self { trigram, count }
    }
}

impl PartialOrd for RankedEntry {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RankedEntry {
    /// Ranking order: higher count first, then lexicographically smaller
    /// trigram first. `Less` means "ranks ahead".
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        match other.count.cmp(&self.count) {
            core::cmp::Ordering::Equal => self.trigram.cmp(&other.trigram),
            ord => ord,
        }
    }
}

impl fmt::Display for RankedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.count, self.trigram)
    }
}

/// Parameters of one analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// How many ranked entries to report. Zero or negative reports nothing.
    pub top_k: i64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration with the given result count.
    pub const fn with_top_k(top_k: i64) -> Self {
        Self { top_k }
    }

    /// Result count as a selector capacity. Negatives clamp to zero; counts
    /// wider than `usize` saturate.
    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        usize::try_from(self.top_k.max(0)).unwrap_or(usize::MAX)
    }
}

/// Errors that abort an analysis run.
#[derive(thiserror::Error, Debug)]
pub enum TricountError {
    /// An input source could not be opened or read.
    #[error("cannot read source {name}: {source}")]
    Source {
        /// Human-readable name of the source (a path or `<stdin>`).
        name: String,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The report could not be written to the output sink.
    #[error("cannot write report: {0}")]
    Output(#[from] io::Error),
}

impl TricountError {
    /// Wraps an I/O error with the name of the source it came from.
    pub fn unavailable(name: impl Into<String>, source: io::Error) -> Self {
        TricountError::Source {
            name: name.into(),
            source,
        }
    }
}

/// Result alias used across the workspace.
pub type TricountResult<T> = Result<T, TricountError>;
