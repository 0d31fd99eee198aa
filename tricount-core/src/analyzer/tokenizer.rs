//! Streaming Tokenizer Module
//!
//! Splits raw bytes into words. This is the first stage of the pipeline:
//! raw input goes in, cleaned words come out and feed the trigram window.
//!
//! ## What It Does
//!
//! Given input like `"The cat\tsat.\r\nThe cat ran."`, the word stream yields:
//!
//! ```ignore
//! "the", "cat", "sat", "the", "cat", "ran"
//! ```
//!
//! ## Delimiters
//!
//! Words are delimited by ASCII whitespace: space, tab, line feed, vertical
//! tab, form feed and carriage return. Runs of delimiters collapse, so no
//! empty token is ever produced. Every other byte (including non-ASCII
//! whitespace) is part of a word.
//!
//! ## Two Shapes
//!
//! - [`Tokenizer`]: zero-allocation callback over an in-memory byte slice.
//!   Tokens are subslices of the input, emitted raw (not cleaned).
//! - [`WordStream`]: lazy iterator over any [`BufRead`], yielding cleaned,
//!   non-empty words. Tokens that straddle a buffer refill are reassembled.
//!
//! Both shapes find delimiters through [`Tokenizer::next_delimiter`].
//!
//! A read failure of the underlying reader is the only error, and it
//! surfaces as the reader's own [`io::Error`].

use std::io::{self, BufRead};

use smallvec::SmallVec;

use super::normalizer::WordNormalizer;

/// Inline capacity of the pending-token buffer; longer words spill to the heap.
const INLINE_WORD_BYTES: usize = 32;

#[inline(always)]
const fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\t' | b'\r' | 0x0B | 0x0C)
}

/// In-memory tokenizer - splits a byte slice on delimiters.
///
/// ## Example
///
/// ```
/// use tricount_core::analyzer::Tokenizer;
///
/// let mut tokens = Vec::new();
/// Tokenizer::new().tokenize(b"hello  world\n", |t| tokens.push(t.to_vec()));
///
/// assert_eq!(tokens, vec![b"hello".to_vec(), b"world".to_vec()]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Index of the first delimiter byte in `bytes`, if any.
    #[inline(always)]
    pub fn next_delimiter(&self, bytes: &[u8]) -> Option<usize> {
        bytes.iter().position(|&b| is_delimiter(b))
    }

    /// Emits every non-empty run of non-delimiter bytes, left to right.
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, input: &'n [u8], mut emit: F)
    where
        F: FnMut(&'n [u8]),
    {
        let mut rest = input;

        while let Some(i) = self.next_delimiter(rest) {
            if i > 0 {
                emit(&rest[..i]);
            }
            rest = &rest[i + 1..];
        }

        if !rest.is_empty() {
            emit(rest);
        }
    }
}

/// Lazy sequence of cleaned words read from a [`BufRead`].
///
/// Words that clean down to the empty string are skipped. After the reader
/// reports end of input (or an error), the stream is finished.
///
/// ```
/// use tricount_core::analyzer::WordStream;
///
/// let words: Vec<String> = WordStream::new("The cat sat.".as_bytes())
///     .collect::<std::io::Result<_>>()
///     .unwrap();
/// assert_eq!(words, ["the", "cat", "sat"]);
/// ```
pub struct WordStream<R> {
    reader: R,
    tokenizer: Tokenizer,
    normalizer: WordNormalizer,
    pending: SmallVec<[u8; INLINE_WORD_BYTES]>,
    done: bool,
}

impl<R: BufRead> WordStream<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            tokenizer: Tokenizer::new(),
            normalizer: WordNormalizer::new(),
            pending: SmallVec::new(),
            done: false,
        }
    }

    /// Cleans and clears the pending token. `None` if it cleaned to nothing.
    fn flush_pending(&mut self) -> Option<String> {
        if self.pending.is_empty() {
            return None;
        }
        let mut word = String::with_capacity(self.pending.len());
        self.normalizer.clean_into(&self.pending, &mut word);
        self.pending.clear();
        (!word.is_empty()).then_some(word)
    }

    /// Reads up to the end of the next raw token. Returns `false` at end of input.
    fn fill_token(&mut self) -> io::Result<bool> {
        loop {
            let buf = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if buf.is_empty() {
                return Ok(false);
            }

            match self.tokenizer.next_delimiter(buf) {
                Some(i) => {
                    self.pending.extend_from_slice(&buf[..i]);
                    self.reader.consume(i + 1);
                    if !self.pending.is_empty() {
                        return Ok(true);
                    }
                }
                None => {
                    let len = buf.len();
                    self.pending.extend_from_slice(buf);
                    self.reader.consume(len);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for WordStream<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            match self.fill_token() {
                Ok(more) => {
                    if !more {
                        self.done = true;
                    }
                    if let Some(word) = self.flush_pending() {
                        return Some(Ok(word));
                    }
                }
                Err(e) => {
                    self.done = true;
                    self.pending.clear();
                    return Some(Err(e));
                }
            }
        }
        None
    }
}
