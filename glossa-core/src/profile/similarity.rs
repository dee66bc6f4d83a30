//! Similarity scoring between trigram profiles.

use crate::profile::TrigramProfile;

/// Computes the cosine-style similarity of two profiles.
///
/// The profiles are treated as sparse vectors over the union of their
/// trigram keys; the result is their dot product. Only keys present in
/// both profiles contribute, so iteration runs over the smaller profile.
/// That is a cost choice only; the dot product is symmetric either way.
///
/// This is a true cosine similarity only when both sides are
/// unit-normalized. During identification the query side carries raw
/// counts, which scales every candidate's score by the same constant:
/// fine for ranking, not for comparing scores across different texts.
///
/// Returns 0.0 when the profiles share no trigrams.
#[must_use]
pub fn cosine_similarity(a: &TrigramProfile, b: &TrigramProfile) -> f32 {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    smaller
        .iter()
        .map(|(trigram, weight)| weight * larger.weight(trigram))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::build_trigram_profile;
    use glossa_types::Text;

    fn profile_of(line: &str) -> TrigramProfile {
        build_trigram_profile(&Text::from_lines(vec![line.to_string()]))
    }

    #[test]
    fn overlap_scores_positive() {
        let a = profile_of("the cat sat");
        let b = profile_of("the cat");
        assert!(cosine_similarity(&a, &b) > 0.0);
    }

    #[test]
    fn symmetric() {
        let a = profile_of("the quick brown fox");
        let b = profile_of("the lazy dog");
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn disjoint_profiles_score_zero() {
        let a = profile_of("aaaa");
        let b = profile_of("zzzz");
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn empty_profile_scores_zero() {
        let empty = TrigramProfile::new();
        let other = profile_of("hello");
        assert_eq!(cosine_similarity(&empty, &other), 0.0);
        assert_eq!(cosine_similarity(&other, &empty), 0.0);
    }

    #[test]
    fn identical_profiles_score_sum_of_squares() {
        let a = profile_of("banana");
        // "ban" 1, "ana" 2, "nan" 1 -> sum of squares = 1 + 4 + 1
        let score = cosine_similarity(&a, &a);
        assert!((score - 6.0).abs() < 1e-6);

        let expected: f32 = a.iter().map(|(_, w)| w * w).sum();
        assert!((score - expected).abs() < 1e-6);
    }

    #[test]
    fn absent_keys_contribute_nothing() {
        let mut a = TrigramProfile::new();
        a.insert("abc", 2.0);
        a.insert("def", 7.0);

        let mut b = TrigramProfile::new();
        b.insert("abc", 0.5);
        b.insert("zzz", 100.0);

        assert_eq!(cosine_similarity(&a, &b), 1.0);
    }

    #[test]
    fn inputs_not_mutated() {
        let a = profile_of("hello world");
        let b = profile_of("hello there");
        let a_before = a.clone();
        let b_before = b.clone();

        let _ = cosine_similarity(&a, &b);

        assert_eq!(a, a_before);
        assert_eq!(b, b_before);
    }
}
