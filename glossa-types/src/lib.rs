//! Core types for the Glossa language identifier.
//!
//! This crate provides the fundamental types shared across the Glossa
//! ecosystem. Keeping types separate ensures:
//!
//! - **Cross-crate compatibility**: core and CLI share the same types
//! - **Clean boundaries**: no circular dependencies between crates
//! - **Zero dependencies**: these types pull in nothing

#![warn(missing_docs)]

use core::fmt;

/// An input text as an ordered sequence of lines.
///
/// A `Text` is the unit of identification: trigrams are extracted per line
/// and never span line boundaries. Lines are stored as decoded UTF-8
/// strings; a trailing carriage-return artifact from CRLF input may still
/// be present and is stripped by the profile builder, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    lines: Vec<String>,
}

impl Text {
    /// Creates an empty text.
    #[inline(always)]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Creates a text from a vector of lines.
    #[inline(always)]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Appends a line to the text.
    #[inline(always)]
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Returns the lines of this text.
    #[inline(always)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consumes the text, returning its lines.
    #[inline(always)]
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Returns the number of lines.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns `true` if the text contains no lines.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl FromIterator<String> for Text {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

/// A scored candidate language.
///
/// Matches are ordered by score (higher = greater), then by language code
/// for deterministic ordering when scores are equal. The score is a sparse
/// dot product, meaningful for ranking candidates within a single
/// identification call only.
#[derive(Debug, Clone, Copy)]
pub struct LanguageMatch<'a> {
    /// Language code of the candidate (opaque short identifier).
    pub code: &'a str,
    /// Similarity score (higher is better).
    pub score: f32,
}

impl<'a> LanguageMatch<'a> {
    /// Creates a new match.
    #[inline(always)]
    pub const fn new(code: &'a str, score: f32) -> Self {
        Self { code, score }
    }
}

impl PartialEq for LanguageMatch<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.score == other.score
    }
}

impl Eq for LanguageMatch<'_> {}

impl PartialOrd for LanguageMatch<'_> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LanguageMatch<'_> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        // Primary: score (higher = greater). Secondary: code, for
        // deterministic ordering when scores are equal.
        match self.score.total_cmp(&other.score) {
            core::cmp::Ordering::Equal => self.code.cmp(other.code),
            ord => ord,
        }
    }
}

impl fmt::Display for LanguageMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lang={} score={:.6}", self.code, self.score)
    }
}

/// Errors that can occur while decoding raw bytes into a [`Text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A line is not valid UTF-8.
    InvalidUtf8 {
        /// 1-based number of the offending line.
        line: usize,
        /// Byte offset within the line up to which the content was valid.
        valid_up_to: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidUtf8 { line, valid_up_to } => {
                write!(
                    f,
                    "line {} is not valid UTF-8 (valid up to byte {})",
                    line, valid_up_to
                )
            }
        }
    }
}

impl core::error::Error for DecodeError {}

/// Errors that can occur while normalizing a trigram profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizeError {
    /// The profile holds no trigrams, so its total weight is zero and
    /// dividing by it would poison every weight with NaN.
    EmptyProfile,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::EmptyProfile => {
                write!(f, "cannot normalize an empty trigram profile")
            }
        }
    }
}

impl core::error::Error for NormalizeError {}
