//! Trigram-based natural language identification.
//!
//! Glossa identifies the most probable natural language of a text by
//! comparing its character-trigram frequency signature against a set of
//! precomputed per-language reference signatures.
//!
//! The pipeline runs in one direction:
//!
//! 1. **Decode** raw bytes into lines ([`analyzer::decode`])
//! 2. **Extract** a trigram frequency profile ([`profile::build_trigram_profile`])
//! 3. **Score** the profile against each candidate language
//!    ([`profile::similarity`])
//! 4. **Select** the best match ([`identify::identify_language`])
//!
//! Everything here is pure computation over in-memory data: no I/O, no
//! shared mutable state, no suspension points. Reference profiles are
//! read-only during identification, so concurrent calls may share them
//! freely by borrow.

pub mod analyzer;
pub mod identify;
pub mod profile;

pub use identify::{identify_language, rank_languages, LanguageProfile, LanguageProfiles};
pub use profile::{build_trigram_profile, TrigramProfile};
