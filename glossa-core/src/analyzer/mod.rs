//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Decode**: converts raw bytes into a line-oriented [`glossa_types::Text`]
//! - **Trigram**: extracts 3-scalar-value windows from a line

pub mod decode;
pub mod trigram;

pub use decode::decode_text;
pub use trigram::{count_trigrams, extract_trigrams};
