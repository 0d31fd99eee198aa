//! Report formatting.

use std::io::{self, Write};

use tricount_types::RankedEntry;

/// Writes ranked entries as one line: `count - w1 w2 w3, count - w1 w2 w3`.
///
/// The line ends with `\n` only if at least one entry was written; an empty
/// list writes nothing at all.
pub fn write_ranked<W: Write>(entries: &[RankedEntry], sink: &mut W) -> io::Result<()> {
    if entries.is_empty() {
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            sink.write_all(b", ")?;
        }
        write!(sink, "{entry}")?;
    }
    sink.write_all(b"\n")
}
