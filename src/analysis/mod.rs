//! The analysis pipeline
//!
//! `analyze` is the single entry point: normalize, tokenize, identify
//! each word locally, then build the four role layers. Pure and
//! stateless — analyses of different verses are fully independent.

pub mod local;
pub mod syllables;
pub mod engine;
pub mod inventory;
pub mod rows;

use serde::{Deserialize, Serialize};

use crate::models::classify::EnrichedToken;
use crate::models::spans::{RoleLayers, RolesDebug};
use crate::models::token::Token;
use crate::text::normalize::normalize_text;
use crate::text::tokenize::tokenize;

/// The complete result of analyzing one verse
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalyzeResult {
    pub normalized: String,
    pub tokens: Vec<Token>,
    pub layers: RoleLayers,
    /// Per-token enriched classification, index-aligned with `tokens`
    pub taamim: Vec<EnrichedToken>,
    pub debug: RolesDebug,
}

/// Analyze one verse of Hebrew text annotated with cantillation marks.
pub fn analyze(text: &str) -> AnalyzeResult {
    let normalized = normalize_text(text);
    let tokens = tokenize(&normalized);

    let local = local::identify(&tokens);
    let out = engine::build_role_layers(&tokens, &local);

    AnalyzeResult {
        normalized,
        tokens,
        layers: out.layers,
        taamim: out.enriched,
        debug: out.debug,
    }
}
