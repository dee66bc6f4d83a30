//! Trigram extraction.
//!
//! Provides sliding-window extraction of 3-scalar-value sequences from a
//! line of text. Trigrams are the signature unit the identifier compares
//! languages by.
//!
//! Windows run over Unicode scalar values, not bytes: a multi-byte scalar
//! (an accented letter, an emoji) is a single unit and is never split
//! across window boundaries.

use smallvec::SmallVec;

/// Char-boundary offsets for most lines fit on the stack.
const INLINE_OFFSETS: usize = 128;

/// Extracts trigrams from a line using a sliding window.
///
/// For a line shorter than 3 scalar values, no trigrams are emitted.
/// For a line of N scalar values, exactly N-2 trigrams are emitted: the
/// windows starting at offsets 0..=N-3. Each trigram is passed to the
/// callback as a borrowed slice of the input line.
///
/// # Example
///
/// ```
/// use glossa_core::analyzer::trigram::extract_trigrams;
///
/// let mut trigrams = Vec::new();
/// extract_trigrams("hello", |t| trigrams.push(t.to_owned()));
///
/// assert_eq!(trigrams, ["hel", "ell", "llo"]);
/// ```
#[inline]
pub fn extract_trigrams<'a, F>(line: &'a str, mut callback: F)
where
    F: FnMut(&'a str),
{
    // Byte offset of every scalar boundary, including the end of the line.
    let mut offsets: SmallVec<[usize; INLINE_OFFSETS]> =
        line.char_indices().map(|(i, _)| i).collect();
    offsets.push(line.len());

    // offsets.len() is the scalar count plus one; windows of four
    // boundaries span exactly three scalars, and the last full window
    // starts at scalar N-3.
    for w in offsets.windows(4) {
        callback(&line[w[0]..w[3]]);
    }
}

/// Counts the trigrams a line yields, without allocating the windows.
///
/// Returns 0 for lines shorter than 3 scalar values.
#[inline]
#[must_use]
pub fn count_trigrams(line: &str) -> usize {
    let scalars = line.chars().count();
    if scalars < 3 {
        0
    } else {
        scalars - 2
    }
}
