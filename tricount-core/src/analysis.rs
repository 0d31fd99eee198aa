//! One analysis run: ingest every source, then rank.

use std::io::{BufRead, Write};

use tracing::{debug, info};
use tricount_types::{AnalysisConfig, RankedEntry, TricountError, TricountResult};

use crate::output::write_ranked;
use crate::select::select_top_k;
use crate::source::Source;
use crate::table::{Accumulator, FrequencyTable, TableStats};

/// Owns the accumulator and frequency table for a single run.
///
/// Sources are ingested strictly in order into the same table; the sliding
/// window carries across source boundaries. Ranking only reads the table.
///
/// # Example
///
/// ```
/// use tricount_core::Analysis;
/// use tricount_types::AnalysisConfig;
///
/// let mut analysis = Analysis::new(AnalysisConfig::with_top_k(1));
/// analysis.ingest_reader("doc", "a b c a b c".as_bytes()).unwrap();
///
/// let mut out = Vec::new();
/// analysis.write_report(&mut out).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "2 - a b c\n");
/// ```
#[derive(Debug, Default)]
pub struct Analysis {
    config: AnalysisConfig,
    accumulator: Accumulator,
    table: FrequencyTable,
    sources: usize,
}

impl Analysis {
    /// Creates an empty run.
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Opens and ingests one source.
    ///
    /// # Errors
    ///
    /// Returns [`TricountError::Source`] naming the source if it cannot be
    /// opened or a read fails.
    pub fn ingest_source(&mut self, source: &Source) -> TricountResult<()> {
        let name = source.name();
        let reader = source
            .open()
            .map_err(|e| TricountError::unavailable(name.clone(), e))?;
        self.ingest_reader(&name, reader)
    }

    /// Ingests an already-open reader under the given name.
    ///
    /// # Errors
    ///
    /// Returns [`TricountError::Source`] if a read fails.
    pub fn ingest_reader<R: BufRead>(&mut self, name: &str, reader: R) -> TricountResult<()> {
        debug!(source = name, "ingesting");
        self.accumulator
            .ingest_reader(reader, &mut self.table)
            .map_err(|e| TricountError::unavailable(name, e))?;
        self.sources += 1;
        Ok(())
    }

    /// The frequency table built so far.
    #[inline(always)]
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Number of sources fully ingested.
    #[inline(always)]
    pub fn sources(&self) -> usize {
        self.sources
    }

    /// Statistics of the table built so far.
    pub fn stats(&self) -> TableStats {
        self.table.stats(self.accumulator.words_seen())
    }

    /// The configured number of most frequent trigrams, highest first.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let ranked = select_top_k(&self.table, self.config.limit());
        info!(
            sources = self.sources,
            requested = self.config.top_k,
            returned = ranked.len(),
            "{}",
            self.stats()
        );
        ranked
    }

    /// Ranks and writes the report to `sink`.
    ///
    /// # Errors
    ///
    /// Returns [`TricountError::Output`] if writing fails.
    pub fn write_report<W: Write>(&self, sink: &mut W) -> TricountResult<()> {
        let ranked = self.ranked();
        write_ranked(&ranked, sink)?;
        sink.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::io::{self, BufReader, Read};
    use tricount_types::Trigram;

    fn report(analysis: &Analysis) -> String {
        let mut out = Vec::new();
        analysis
            .write_report(&mut out)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("report is UTF-8")
    }

    #[test]
    fn cat_sentence_top_two() {
        let mut analysis = Analysis::new(AnalysisConfig::with_top_k(2));
        analysis
            .ingest_reader("text", "The cat sat. The cat ran.".as_bytes())
            .expect("in-memory reads cannot fail");

        let table = analysis.table();
        assert_eq!(table.len(), 4);
        for t in [
            Trigram::new("the", "cat", "sat"),
            Trigram::new("cat", "sat", "the"),
            Trigram::new("sat", "the", "cat"),
            Trigram::new("the", "cat", "ran"),
        ] {
            assert_eq!(table.get(&t), 1);
        }

        let ranked = analysis.ranked();
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|e| e.count == 1));
        let distinct: HashSet<_> = ranked.iter().map(|e| &e.trigram).collect();
        assert_eq!(distinct.len(), 2);

        assert_eq!(analysis.ranked(), ranked);
    }

    #[test]
    fn sources_are_concatenated() {
        let mut analysis = Analysis::new(AnalysisConfig::default());
        analysis.ingest_reader("one", "a b".as_bytes()).unwrap();
        analysis.ingest_reader("two", "c d".as_bytes()).unwrap();

        assert_eq!(analysis.sources(), 2);
        assert_eq!(report(&analysis), "1 - a b c, 1 - b c d\n");
    }

    #[test]
    fn negative_top_k_reports_nothing() {
        let mut analysis = Analysis::new(AnalysisConfig::with_top_k(-5));
        analysis.ingest_reader("text", "a b c d e".as_bytes()).unwrap();
        assert_eq!(report(&analysis), "");
    }

    #[test]
    fn short_input_reports_nothing() {
        let mut analysis = Analysis::new(AnalysisConfig::default());
        analysis.ingest_reader("text", "only two".as_bytes()).unwrap();
        assert!(analysis.table().is_empty());
        assert_eq!(report(&analysis), "");
    }

    #[test]
    fn missing_file_names_the_source() {
        let mut analysis = Analysis::new(AnalysisConfig::default());
        let err = analysis
            .ingest_source(&Source::from_arg("/no/such/dir/input.txt"))
            .unwrap_err();

        assert!(matches!(err, TricountError::Source { .. }));
        assert!(err.to_string().contains("/no/such/dir/input.txt"));
        assert_eq!(analysis.sources(), 0);
    }

    #[test]
    fn read_failure_names_the_source() {
        struct Failing;
        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "device went away"))
            }
        }

        let mut analysis = Analysis::new(AnalysisConfig::default());
        let reader = BufReader::new("a b c d ".as_bytes().chain(Failing));
        let err = analysis.ingest_reader("broken.txt", reader).unwrap_err();

        assert!(matches!(err, TricountError::Source { ref name, .. } if name == "broken.txt"));
        assert!(err.to_string().contains("device went away"));
        assert_eq!(analysis.sources(), 0);
    }

    #[test]
    fn stats_track_words() {
        let mut analysis = Analysis::new(AnalysisConfig::default());
        analysis.ingest_reader("text", "x y z x y z".as_bytes()).unwrap();

        let stats = analysis.stats();
        assert_eq!(stats.words, 6);
        assert_eq!(stats.total_trigrams, 4);
        assert_eq!(stats.distinct_trigrams, 3);
        assert_eq!(stats.max_count, Some(2));
    }
}
