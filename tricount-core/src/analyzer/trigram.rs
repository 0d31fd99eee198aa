//! Trigram extraction module.
//!
//! Builds word trigrams from a cleaned word sequence with a sliding window
//! of step 1: `[a, b, c, d]` yields `(a, b, c)` then `(b, c, d)`. For N
//! words exactly N - 2 trigrams are produced.

use tricount_types::Trigram;

/// The three most recently seen cleaned words.
///
/// The window is empty until three words have been pushed; partial windows
/// never produce a trigram. After that every push shifts the slots left by
/// one and yields the new full window.
///
/// # Example
///
/// ```
/// use tricount_core::analyzer::TrigramWindow;
/// use tricount_types::Trigram;
///
/// let mut window = TrigramWindow::new();
/// assert_eq!(window.push("a".into()), None);
/// assert_eq!(window.push("b".into()), None);
/// assert_eq!(window.push("c".into()), Some(Trigram::new("a", "b", "c")));
/// assert_eq!(window.push("d".into()), Some(Trigram::new("b", "c", "d")));
/// ```
#[derive(Debug, Default, Clone)]
pub struct TrigramWindow {
    first: String,
    second: String,
    third: String,
    filled: u8,
}

impl TrigramWindow {
    /// Creates an empty window.
    pub fn new() -> Self {
        Self::default()
    }

    /// Admits a new word and returns the trigram it completes, if any.
    ///
    /// Empty words are ignored and do not advance the window.
    #[inline]
    pub fn push(&mut self, word: String) -> Option<Trigram> {
        if word.is_empty() {
            return None;
        }

        self.first = core::mem::replace(
            &mut self.second,
            core::mem::replace(&mut self.third, word),
        );

        if self.filled < 3 {
            self.filled += 1;
        }

        self.is_full().then(|| {
            Trigram::new(
                self.first.as_str(),
                self.second.as_str(),
                self.third.as_str(),
            )
        })
    }

    /// `true` once three words have been seen.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.filled == 3
    }
}
