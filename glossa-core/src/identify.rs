//! Language identification.
//!
//! Orchestrates the pipeline: build the query text's trigram profile,
//! score it against every candidate language, and select the best match.

use crate::profile::{build_trigram_profile, cosine_similarity, TrigramProfile};
use glossa_types::{LanguageMatch, Text};

/// A candidate language: a code paired with its normalized reference
/// profile.
///
/// Reference profiles are built offline from a large corpus and
/// normalized once; they are read-only during identification.
#[derive(Debug, Clone)]
pub struct LanguageProfile {
    code: String,
    profile: TrigramProfile,
}

impl LanguageProfile {
    /// Creates a language profile.
    ///
    /// The profile is expected to be already normalized; the identifier
    /// scores against it as-is.
    pub fn new(code: impl Into<String>, profile: TrigramProfile) -> Self {
        Self {
            code: code.into(),
            profile,
        }
    }

    /// Returns the language code.
    #[inline(always)]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the reference trigram profile.
    #[inline(always)]
    pub fn profile(&self) -> &TrigramProfile {
        &self.profile
    }
}

/// An ordered collection of candidate languages.
///
/// Order matters only for tie-breaking: the first language to reach the
/// maximal score wins.
pub type LanguageProfiles = Vec<LanguageProfile>;

/// Identifies the most probable language of a text.
///
/// The query profile is left unnormalized: its normalization constant
/// would be the same in every comparison of the call, so the ranking is
/// unchanged and the division is skipped.
///
/// Candidates are scored in collection order under strict-greater-than
/// comparison, so a later language with an equal score never displaces
/// the first-seen winner. Returns `None` when no candidate scores
/// strictly above zero. That is an expected outcome for texts too short
/// to window or with no trigram overlap, not an error.
///
/// # Example
///
/// ```
/// use glossa_core::identify::{identify_language, LanguageProfile};
/// use glossa_core::profile::build_trigram_profile;
/// use glossa_types::Text;
///
/// let mut english = build_trigram_profile(&Text::from_lines(vec![
///     "the cat sat on the mat".to_string(),
/// ]));
/// english.normalize().unwrap();
/// let languages = vec![LanguageProfile::new("en", english)];
///
/// let text = Text::from_lines(vec!["the cat".to_string()]);
/// let best = identify_language(&text, &languages).unwrap();
/// assert_eq!(best.code, "en");
/// ```
pub fn identify_language<'a>(
    text: &Text,
    languages: &'a [LanguageProfile],
) -> Option<LanguageMatch<'a>> {
    let query = build_trigram_profile(text);

    let mut best: Option<LanguageMatch<'a>> = None;
    let mut max_score = 0.0f32;

    for language in languages {
        let score = cosine_similarity(&query, language.profile());
        if score > max_score {
            max_score = score;
            best = Some(LanguageMatch::new(language.code(), score));
        }
    }

    best
}

/// Scores a text against every candidate language.
///
/// Returns one entry per candidate, sorted by descending score; the sort
/// is stable, so equal scores keep their collection order and the first
/// entry agrees with [`identify_language`] whenever any score is
/// positive. Zero-score candidates are included.
pub fn rank_languages<'a>(
    text: &Text,
    languages: &'a [LanguageProfile],
) -> Vec<LanguageMatch<'a>> {
    let query = build_trigram_profile(text);

    let mut ranking: Vec<LanguageMatch<'a>> = languages
        .iter()
        .map(|language| {
            LanguageMatch::new(language.code(), cosine_similarity(&query, language.profile()))
        })
        .collect();

    ranking.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranking
}
