//! Word cleaning.
//!
//! Every raw token produced by the tokenizer passes through
//! [`WordNormalizer`] before it reaches the trigram window. Cleaning:
//!
//! - removes every character in a Unicode punctuation category
//!   (`Pc`, `Pd`, `Ps`, `Pe`, `Pi`, `Pf`, `Po`)
//! - removes `\r` and `\n` even though the tokenizer already splits on them
//! - lowercases what remains
//!
//! Symbols are not punctuation: `$`, `+`, `<`, `=`, `>`, `^`, `` ` ``, `|`
//! and `~` survive cleaning, as does U+FFFD produced for invalid UTF-8.
//!
//! ASCII input takes a table-driven fast path; anything else is decoded
//! lossily and processed per `char`.

use unicode_general_category::{get_general_category, GeneralCategory};

const DROP: u8 = 0xFF;

/// ASCII byte -> cleaned byte, or `DROP` for punctuation and line breaks.
#[rustfmt::skip]
const ASCII_CLEAN_TABLE: [u8; 128] = {
    let mut table = [0u8; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        table[i] = match b {
            b'\r' | b'\n' => DROP,
            b'!' | b'"' | b'#' | b'%' | b'&' | b'\'' | b'(' | b')' | b'*' | b','
            | b'-' | b'.' | b'/' | b':' | b';' | b'?' | b'@' | b'[' | b'\\' | b']'
            | b'_' | b'{' | b'}' => DROP,
            b'A'..=b'Z' => b + 32,
            _ => b,
        };
        i += 1;
    }
    table
};

#[inline(always)]
fn is_punctuation(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::ConnectorPunctuation
            | GeneralCategory::DashPunctuation
            | GeneralCategory::OpenPunctuation
            | GeneralCategory::ClosePunctuation
            | GeneralCategory::InitialPunctuation
            | GeneralCategory::FinalPunctuation
            | GeneralCategory::OtherPunctuation
    )
}

/// Cleans raw tokens into canonical words.
///
/// Stateless and `Copy`; one instance can be shared by any number of
/// tokenizers.
///
/// # Examples
///
/// ```
/// use tricount_core::analyzer::WordNormalizer;
///
/// let normalizer = WordNormalizer::new();
/// assert_eq!(normalizer.clean("Hello,"), "hello");
/// assert_eq!(normalizer.clean("don't"), "dont");
/// assert_eq!(normalizer.clean("--"), "");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct WordNormalizer;

impl WordNormalizer {
    /// Creates a new normalizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Cleans a raw token into an existing buffer.
    ///
    /// The buffer is cleared first and its capacity reused. Invalid UTF-8
    /// sequences become U+FFFD. An empty buffer afterwards means the token
    /// should be discarded.
    #[inline]
    pub fn clean_into(&self, raw: &[u8], out: &mut String) {
        out.clear();
        out.reserve(raw.len());

        if raw.is_ascii() {
            for &b in raw {
                let cleaned = ASCII_CLEAN_TABLE[b as usize];
                if cleaned != DROP {
                    out.push(cleaned as char);
                }
            }
            return;
        }

        let decoded = String::from_utf8_lossy(raw);
        for ch in decoded.chars() {
            if ch == '\r' || ch == '\n' || is_punctuation(ch) {
                continue;
            }
            out.extend(ch.to_lowercase());
        }
    }

    /// Cleans a word and returns a new `String`.
    #[inline]
    pub fn clean(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        self.clean_into(word.as_bytes(), &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Hello", "hello")]
    #[case("WORLD!", "world")]
    #[case("cat.", "cat")]
    #[case("\"quoted\"", "quoted")]
    #[case("don't", "dont")]
    #[case("well-known", "wellknown")]
    #[case("snake_case", "snakecase")]
    #[case("(a)[b]{c}", "abc")]
    #[case("line\r\n", "line")]
    #[case("a@b#c%d&e*f", "abcdef")]
    fn strips_ascii_punctuation(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(WordNormalizer::new().clean(raw), expected);
    }

    #[rstest]
    #[case("$100", "$100")]
    #[case("a+b=c", "a+b=c")]
    #[case("<tag>", "<tag>")]
    #[case("x^y|z~", "x^y|z~")]
    #[case("`tick`", "`tick`")]
    fn keeps_ascii_symbols(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(WordNormalizer::new().clean(raw), expected);
    }

    #[test]
    fn all_punctuation_becomes_empty() {
        let n = WordNormalizer::new();
        assert_eq!(n.clean("..."), "");
        assert_eq!(n.clean("--"), "");
        assert_eq!(n.clean("\r"), "");
    }

    #[test]
    fn unicode_lowercase() {
        let n = WordNormalizer::new();
        assert_eq!(n.clean("ÉCOLE"), "école");
        assert_eq!(n.clean("ΣΟΦΙΑ"), "σοφια");
    }

    #[test]
    fn unicode_punctuation_is_stripped() {
        let n = WordNormalizer::new();
        assert_eq!(n.clean("«bonjour»"), "bonjour");
        assert_eq!(n.clean("“quoted”"), "quoted");
        assert_eq!(n.clean("wait…"), "wait");
        assert_eq!(n.clean("¿qué?"), "qué");
        assert_eq!(n.clean("a—b"), "ab");
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        let mut out = String::new();
        WordNormalizer::new().clean_into(b"ab\xffcd", &mut out);
        assert_eq!(out, "ab\u{FFFD}cd");
    }

    #[test]
    fn clean_into_reuses_buffer() {
        let n = WordNormalizer::new();
        let mut out = String::from("leftover");
        n.clean_into(b"Fresh", &mut out);
        assert_eq!(out, "fresh");
    }

    #[test]
    fn cleaning_is_idempotent() {
        let n = WordNormalizer::new();
        for raw in ["The", "cat.", "«Ünïcödé»", "a-b_c", "$+<>", "İstanbul", "ß"] {
            let once = n.clean(raw);
            assert_eq!(n.clean(&once), once, "not idempotent for {raw:?}");
        }
    }
}
