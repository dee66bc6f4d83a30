//! Trigram frequency profiles.
//!
//! A [`TrigramProfile`] is a sparse mapping from trigram to a
//! floating-point weight. Freshly built profiles hold raw occurrence
//! counts; [`TrigramProfile::normalize`] rescales them so profiles built
//! from corpora of different sizes become comparable.

pub mod similarity;

pub use similarity::cosine_similarity;

use crate::analyzer::trigram::extract_trigrams;
use glossa_types::{NormalizeError, Text};
use rustc_hash::FxHashMap;

/// A sparse trigram frequency vector.
///
/// Keys are exact 3-scalar-value sequences; an absent key has implicit
/// weight 0. Before normalization a weight is the raw occurrence count;
/// after, it is `count / sqrt(Σ counts)` across the whole profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrigramProfile {
    weights: FxHashMap<String, f32>,
}

impl TrigramProfile {
    /// Creates an empty profile.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            weights: FxHashMap::default(),
        }
    }

    /// Records one occurrence of a trigram.
    ///
    /// The first occurrence sets weight 1.0; each repeat adds 1.0. The
    /// key is only allocated on first occurrence.
    #[inline]
    pub fn record(&mut self, trigram: &str) {
        match self.weights.get_mut(trigram) {
            Some(weight) => *weight += 1.0,
            None => {
                self.weights.insert(trigram.to_owned(), 1.0);
            }
        }
    }

    /// Sets the weight of a trigram directly.
    ///
    /// Used when reconstructing a profile from persisted counts.
    #[inline]
    pub fn insert(&mut self, trigram: impl Into<String>, weight: f32) {
        self.weights.insert(trigram.into(), weight);
    }

    /// Returns the weight of a trigram, 0.0 if absent.
    #[inline(always)]
    pub fn weight(&self, trigram: &str) -> f32 {
        self.weights.get(trigram).copied().unwrap_or(0.0)
    }

    /// Returns the number of distinct trigrams.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` if the profile holds no trigrams.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the sum of all weights.
    #[inline]
    pub fn total_weight(&self) -> f32 {
        self.weights.values().sum()
    }

    /// Iterates over `(trigram, weight)` pairs in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.weights.iter().map(|(t, &w)| (t.as_str(), w))
    }

    /// Normalizes the profile in place.
    ///
    /// Every weight is divided by `sqrt(Σ weights)`: the square root of
    /// the summed counts, not the Euclidean norm of the count vector.
    /// Persisted reference profiles are normalized with this exact
    /// formula, so it must not be swapped for a true L2 norm unless every
    /// stored profile is regenerated with the replacement.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::EmptyProfile`] if the total weight is
    /// zero; the weights are left untouched rather than poisoned with
    /// NaN.
    pub fn normalize(&mut self) -> Result<(), NormalizeError> {
        let total = self.total_weight();
        if total == 0.0 {
            return Err(NormalizeError::EmptyProfile);
        }

        let divisor = total.sqrt();
        for weight in self.weights.values_mut() {
            *weight /= divisor;
        }
        Ok(())
    }
}

/// Builds the trigram profile of a text.
///
/// Each line is processed independently; windows never span line
/// boundaries. A single trailing carriage return is stripped from a line
/// before extraction, so CRLF input profiles identically to LF input.
/// Lines shorter than 3 scalar values contribute nothing.
///
/// The returned profile holds raw counts; callers building reference
/// profiles normalize afterwards, while query profiles are scored as-is.
///
/// # Example
///
/// ```
/// use glossa_core::profile::build_trigram_profile;
/// use glossa_types::Text;
///
/// let text = Text::from_lines(vec!["banana".to_string()]);
/// let profile = build_trigram_profile(&text);
///
/// assert_eq!(profile.weight("ana"), 2.0);
/// assert_eq!(profile.weight("ban"), 1.0);
/// ```
pub fn build_trigram_profile(text: &Text) -> TrigramProfile {
    let mut profile = TrigramProfile::new();

    for line in text.lines() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        extract_trigrams(line, |trigram| profile.record(trigram));
    }

    profile
}
