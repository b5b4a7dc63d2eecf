//! Text preparation for taamim analysis
//!
//! This module turns raw verse text into the token stream the analysis
//! pipeline works on: codepoint classification, normalization and
//! tokenization into letter clusters.

pub mod unicode;
pub mod normalize;
pub mod tokenize;

pub use normalize::normalize_text;
pub use tokenize::tokenize;
pub use unicode::{PASEK, SOF_PASUQ};
