//! Local identification and enriched classification types
//!
//! Local identification looks at one word (plus its trailing punctuation
//! context) and yields at most one taam: the highest-priority directly
//! observable accent. The engine later overwrites this "effective"
//! classification when an inference applies.

use serde::{Deserialize, Serialize};

use super::inference::InferenceReason;
use super::taam::{Role, Taam};
use crate::registry::GlyphKey;

/// Punctuation context observed next to a word
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct ObservedContext {
    pub has_pasek_after: bool,
    pub has_sof_pasuq_after: bool,
}

/// The single best locally identified taam of a word.
///
/// Absence is modeled as `Option<IdentifiedTaam>`: a word with no
/// recognizable accent simply has none.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct IdentifiedTaam {
    pub taam: Taam,

    /// Cluster index of the defining glyph (for silluq: the meteg)
    pub anchor_cluster: usize,

    /// Glyph keys consumed by this identification
    pub consumed: Vec<GlyphKey>,
}

impl IdentifiedTaam {
    pub fn role(&self) -> Role {
        self.taam.role()
    }
}

/// Per-token result of the local identification pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LocalToken {
    pub observed: ObservedContext,

    pub identified: Option<IdentifiedTaam>,

    /// Cluster of a stress meteg (a meteg that is not the silluq anchor)
    pub stress_meteg_cluster: Option<usize>,
}

impl LocalToken {
    /// Is this token locally identified as the given taam?
    pub fn is_known(&self, taam: Taam) -> bool {
        self.identified.as_ref().map_or(false, |k| k.taam == taam)
    }

    /// Does the local identification carry a conjunctive role?
    pub fn is_mesharet(&self) -> bool {
        self.identified.as_ref().map_or(false, |k| k.taam.is_mesharet())
    }
}

/// Verse-level output of the local identification pass
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct LocalResult {
    pub tokens: Vec<LocalToken>,

    /// Token index of the word carrying silluq, if identified
    pub silluq_index: Option<usize>,

    /// Token index of the sof pasuq, if present
    pub sof_pasuq_index: Option<usize>,
}

/// Effective classification after inference
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EffectiveTaam {
    pub taam: Taam,
    pub role: Role,
    pub heb_name: String,
    pub reason: InferenceReason,
    pub reason_text: String,
}

impl EffectiveTaam {
    pub fn new(taam: Taam, reason: InferenceReason) -> Self {
        Self {
            taam,
            role: taam.role(),
            heb_name: taam.heb_name().to_string(),
            reason,
            reason_text: reason.text().to_string(),
        }
    }
}

/// A word token's full classification: local result plus the effective
/// taam after all inference layers ran. Created once per analysis call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EnrichedToken {
    pub observed: ObservedContext,
    pub identified: Option<IdentifiedTaam>,
    pub stress_meteg_cluster: Option<usize>,
    pub effective: EffectiveTaam,
}

impl EnrichedToken {
    /// Seed an enriched token from its local result; the effective taam
    /// starts as the identified one (or UNKNOWN) with reason "original".
    pub fn from_local(local: &LocalToken) -> Self {
        let taam = local.identified.as_ref().map_or(Taam::Unknown, |k| k.taam);
        Self {
            observed: local.observed,
            identified: local.identified.clone(),
            stress_meteg_cluster: local.stress_meteg_cluster,
            effective: EffectiveTaam::new(taam, InferenceReason::Original),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_local_defaults_to_unknown() {
        let e = EnrichedToken::from_local(&LocalToken::default());
        assert_eq!(e.effective.taam, Taam::Unknown);
        assert_eq!(e.effective.reason, InferenceReason::Original);
        assert_eq!(e.effective.role, Role::Mesharet);
    }

    #[test]
    fn test_from_local_carries_identified() {
        let local = LocalToken {
            observed: ObservedContext::default(),
            identified: Some(IdentifiedTaam {
                taam: Taam::Atnach,
                anchor_cluster: 1,
                consumed: vec![GlyphKey::Atnach],
            }),
            stress_meteg_cluster: None,
        };
        let e = EnrichedToken::from_local(&local);
        assert_eq!(e.effective.taam, Taam::Atnach);
        assert_eq!(e.effective.role, Role::Mafsik);
        assert_eq!(e.effective.heb_name, "אתנח");
    }
}
