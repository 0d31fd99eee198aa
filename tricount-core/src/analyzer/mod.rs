//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Tokenizer**: Splits raw bytes into tokens on whitespace
//! - **Normalizer**: Lowercases tokens and strips punctuation
//! - **Trigram**: Slides a three-word window over the cleaned words

pub mod normalizer;
pub mod tokenizer;
pub mod trigram;

pub use normalizer::WordNormalizer;
pub use tokenizer::{Tokenizer, WordStream};
pub use trigram::TrigramWindow;
