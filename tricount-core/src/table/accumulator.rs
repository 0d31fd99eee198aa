//! Word sequence -> frequency table.

use std::io::{self, BufRead};

use tracing::debug;

use super::FrequencyTable;
use crate::analyzer::{TrigramWindow, WordStream};

/// Slides a three-word window over cleaned words and counts every full window.
///
/// The window lives in the accumulator, not in any single call, so feeding
/// several sources one after another behaves like feeding their
/// concatenation: the first words of a source complete trigrams started by
/// the last words of the previous one.
#[derive(Debug, Default)]
pub struct Accumulator {
    window: TrigramWindow,
    words_seen: u64,
}

impl Accumulator {
    /// Creates an accumulator with an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes an entire word sequence, incrementing `table` once per full
    /// window. Empty words are skipped.
    pub fn ingest<I>(&mut self, words: I, table: &mut FrequencyTable)
    where
        I: IntoIterator<Item = String>,
    {
        for word in words {
            self.admit(word, table);
        }
    }

    /// Streams one source through the tokenizer into `table`.
    ///
    /// # Errors
    ///
    /// Returns the reader's error if a read fails. Words read before the
    /// failure have already been counted.
    pub fn ingest_reader<R: BufRead>(
        &mut self,
        reader: R,
        table: &mut FrequencyTable,
    ) -> io::Result<()> {
        let before = self.words_seen;
        for word in WordStream::new(reader) {
            self.admit(word?, table);
        }
        debug!(words = self.words_seen - before, "source drained");
        Ok(())
    }

    /// Shifts one word into the window and counts the trigram it completes.
    #[inline]
    fn admit(&mut self, word: String, table: &mut FrequencyTable) {
        if word.is_empty() {
            return;
        }
        self.words_seen += 1;
        if let Some(trigram) = self.window.push(word) {
            table.increment(trigram);
        }
    }

    /// Total cleaned words admitted so far, across every source.
    #[inline(always)]
    #[must_use]
    pub fn words_seen(&self) -> u64 {
        self.words_seen
    }
}
