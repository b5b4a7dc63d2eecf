//! Flattening for relational persistence
//!
//! One row per token, keyed by (verse id, analysis version, 1-based token
//! position). The verse id and version are opaque caller-supplied tags —
//! the analysis itself knows nothing about storage. Punctuation rows
//! carry null identification and syllable columns.

use serde::{Deserialize, Serialize};

use crate::models::taam::{Role, Taam};
use crate::models::inference::InferenceReason;
use crate::models::token::Token;
use crate::registry::GlyphKey;

use super::syllables::{count_syllables_in_range, count_vowel_nuclei_in_range};
use super::AnalyzeResult;

/// One flattened token of one analyzed verse
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VerseTokenRow {
    pub verse_id: u32,
    pub analysis_version: String,

    /// 1-based position within the verse
    pub token_index: usize,

    pub raw: String,
    pub letters: Option<String>,
    pub is_pasek: bool,
    pub is_sof_pasuq: bool,

    pub has_pasek_after: Option<bool>,
    pub has_sof_pasuq_after: Option<bool>,

    pub identified_taam: Option<Taam>,
    pub identified_role: Option<Role>,
    pub identified_heb_name: Option<String>,
    pub consumed_keys: Option<Vec<GlyphKey>>,
    pub anchor_cluster: Option<usize>,

    pub effective_taam: Option<Taam>,
    pub effective_role: Option<Role>,
    pub effective_heb_name: Option<String>,
    pub reason_code: Option<InferenceReason>,
    pub reason: Option<String>,

    pub vowel_nuclei_total: Option<usize>,
    pub vowel_nuclei_until_anchor: Option<usize>,
    pub syllables_total: Option<usize>,
    pub syllables_until_anchor: Option<usize>,
}

/// Flatten an analysis result into per-token rows for the given verse
/// and version tags.
pub fn verse_token_rows(
    result: &AnalyzeResult,
    verse_id: u32,
    analysis_version: &str,
) -> Vec<VerseTokenRow> {
    result
        .tokens
        .iter()
        .zip(&result.taamim)
        .enumerate()
        .map(|(idx0, (token, enriched))| {
            let word = token.as_word();
            let n_clusters = word.map_or(0, |w| w.clusters.len());
            let anchor_cluster = enriched.identified.as_ref().map(|k| k.anchor_cluster);

            let (vowel_total, vowel_until, syll_total, syll_until) = match word {
                Some(w) if n_clusters > 0 => {
                    let total_v = count_vowel_nuclei_in_range(w, 0, n_clusters - 1);
                    let total_s = count_syllables_in_range(w, 0, n_clusters - 1);
                    let until_v = anchor_cluster.map(|a| count_vowel_nuclei_in_range(w, 0, a));
                    let until_s = anchor_cluster.map(|a| count_syllables_in_range(w, 0, a));
                    (Some(total_v), until_v, Some(total_s), until_s)
                }
                _ => (None, None, None, None),
            };

            let identified = enriched.identified.as_ref();
            let effective = word.map(|_| &enriched.effective);

            VerseTokenRow {
                verse_id,
                analysis_version: analysis_version.to_string(),
                token_index: idx0 + 1,

                raw: token.raw().to_string(),
                letters: word.map(|w| w.letters.clone()),
                is_pasek: matches!(token, Token::Pasek),
                is_sof_pasuq: matches!(token, Token::SofPasuq),

                has_pasek_after: word.map(|_| enriched.observed.has_pasek_after),
                has_sof_pasuq_after: word.map(|_| enriched.observed.has_sof_pasuq_after),

                identified_taam: identified.map(|k| k.taam),
                identified_role: identified.map(|k| k.taam.role()),
                identified_heb_name: identified.map(|k| k.taam.heb_name().to_string()),
                consumed_keys: identified.map(|k| k.consumed.clone()),
                anchor_cluster,

                effective_taam: effective.map(|e| e.taam),
                effective_role: effective.map(|e| e.role),
                effective_heb_name: effective.map(|e| e.heb_name.clone()),
                reason_code: effective.map(|e| e.reason),
                reason: effective.map(|e| e.reason_text.clone()),

                vowel_nuclei_total: vowel_total,
                vowel_nuclei_until_anchor: vowel_until,
                syllables_total: syll_total,
                syllables_until_anchor: syll_until,
            }
        })
        .collect()
}
