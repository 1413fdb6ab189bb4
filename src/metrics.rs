//! Raw text measurement
//!
//! This module provides the pure extraction step that turns a document's
//! full text into word/line/character figures. No state, no I/O.

use memchr::memchr_iter;

/// Measured figures for a single document.
///
/// Values are replaced wholesale on re-extraction, never mutated in place.
/// `line_count` is always at least 1, even for empty text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentMetrics {
    pub word_count: usize,
    pub line_count: usize,
    /// Characters remaining after removing all whitespace, a measure of
    /// non-whitespace content rather than raw length.
    pub character_count: usize,
}

pub struct MetricsExtractor;

impl MetricsExtractor {
    /// Measure a document's full text.
    ///
    /// Handles empty input, pure-whitespace input and single-line input
    /// without special cases: whitespace-only text has zero words and zero
    /// characters, and text with no line separator is one line.
    pub fn extract(text: &str) -> DocumentMetrics {
        DocumentMetrics {
            word_count: text.split_whitespace().count(),
            line_count: Self::count_separators(text.as_bytes()) + 1,
            character_count: text.chars().filter(|c| !c.is_whitespace()).count(),
        }
    }

    /// Count line separators, recognizing `\r\n`, `\r` and `\n` as one
    /// separator each.
    fn count_separators(bytes: &[u8]) -> usize {
        let newlines = memchr_iter(b'\n', bytes).count();
        // A `\r\n` pair was already counted through its `\n`; only bare
        // carriage returns add a separator of their own.
        let bare_carriage_returns = memchr_iter(b'\r', bytes)
            .filter(|&i| bytes.get(i + 1) != Some(&b'\n'))
            .count();
        newlines + bare_carriage_returns
    }
}
