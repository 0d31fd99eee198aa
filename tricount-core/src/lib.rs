//! Word trigram frequency analysis.
//!
//! Raw bytes flow through four stages:
//!
//! ```text
//! bytes -> analyzer (tokenize, clean) -> table (sliding window, counts)
//!       -> select (bounded min-heap) -> output (one ranked line)
//! ```
//!
//! [`Analysis`] wires the stages together for a run over one or more
//! [`Source`]s.

pub mod analyzer;
pub mod output;
pub mod select;
pub mod source;
pub mod table;

mod analysis;

pub use analysis::Analysis;
pub use output::write_ranked;
pub use select::select_top_k;
pub use source::Source;
pub use table::{Accumulator, FrequencyTable, TableStats};
