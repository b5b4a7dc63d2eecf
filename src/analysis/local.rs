//! Local (per-word) taam identification
//!
//! Each word is classified independently of cross-word context, except
//! for two observations: whether a pasek immediately follows (promoting
//! certain conjunctive glyphs to their disjunctive legarmeh variant) and
//! whether the word stands in final-word context. A fixed-priority,
//! first-match-wins chain picks the single highest-priority observable
//! accent; co-occurring glyphs are resolved by priority, not enumerated.

use crate::models::classify::{IdentifiedTaam, LocalResult, LocalToken, ObservedContext};
use crate::models::taam::Taam;
use crate::models::token::{Token, WordToken};
use crate::registry::{registry, GlyphKey, Registry};

/// Run local identification over the token sequence.
///
/// Besides the per-token results this yields the verse-level anchors:
/// the silluq token index (if a final-context word carries a meteg) and
/// the sof pasuq token index (if present).
pub fn identify(tokens: &[Token]) -> LocalResult {
    let reg = registry();

    let sof_pasuq_index = tokens.iter().position(|t| matches!(t, Token::SofPasuq));
    let last_word_index = match sof_pasuq_index {
        Some(i) => i.checked_sub(1),
        None => tokens.len().checked_sub(1),
    };

    let mut out = Vec::with_capacity(tokens.len());
    let mut silluq_index = None;

    for (i, token) in tokens.iter().enumerate() {
        let Token::Word(word) = token else {
            out.push(LocalToken::default());
            continue;
        };

        let observed = ObservedContext {
            has_pasek_after: matches!(tokens.get(i + 1), Some(Token::Pasek)),
            has_sof_pasuq_after: matches!(tokens.get(i + 1), Some(Token::SofPasuq)),
        };
        let final_context = observed.has_sof_pasuq_after
            || last_word_index == Some(i)
            || i == tokens.len() - 1;

        for mark in word.taam_marks() {
            if reg.glyph_key(mark.ch).is_none() {
                log::debug!("unregistered accent {} in {:?}", mark.id, word.raw);
            }
        }

        let (identified, stress_meteg_cluster) =
            identify_word(word, observed, final_context, reg);

        if identified.as_ref().map_or(false, |k| k.taam == Taam::Silluq) {
            silluq_index = Some(i);
        }

        out.push(LocalToken { observed, identified, stress_meteg_cluster });
    }

    LocalResult { tokens: out, silluq_index, sof_pasuq_index }
}

/// The fixed-priority chain for one word. Returns the single best
/// identification (or none) and the stress-meteg cluster, if any.
fn identify_word(
    word: &WordToken,
    observed: ObservedContext,
    final_context: bool,
    reg: &Registry,
) -> (Option<IdentifiedTaam>, Option<usize>) {
    let (stress, silluq_anchor) = resolve_metegs(word, final_context);

    // 1. Final-word meteg position => SILLUQ
    if let Some(anchor) = silluq_anchor {
        return (Some(known(Taam::Silluq, anchor, vec![])), stress);
    }

    // 2. Explicit atnach glyph
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Atnach) {
        return (Some(known(Taam::Atnach, anchor, vec![GlyphKey::Atnach])), stress);
    }

    // 3. Revia + mugrash mark together, checked before plain revia
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Revia) {
        if has_glyph(word, reg, GlyphKey::Mugrash) {
            let consumed = vec![GlyphKey::Revia, GlyphKey::Mugrash];
            return (Some(known(Taam::ReviaMugrash, anchor, consumed)), stress);
        }
        // 4. Plain revia
        return (Some(known(Taam::Revia, anchor, vec![GlyphKey::Revia])), stress);
    }

    // 5. Pazer
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Pazer) {
        return (Some(known(Taam::Pazer, anchor, vec![GlyphKey::Pazer])), stress);
    }

    // 6. The tube glyph: tsinor on the final letter, tsinorit elsewhere
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Tsinor) {
        let last = word.clusters.len().saturating_sub(1);
        let on_last = glyph_on_cluster(word, reg, GlyphKey::Tsinor, last);
        let (taam, anchor) = if on_last { (Taam::Tsinor, last) } else { (Taam::Tsinorit, anchor) };
        return (Some(known(taam, anchor, vec![GlyphKey::Tsinor])), stress);
    }

    // 7. Dchi
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Dchi) {
        return (Some(known(Taam::Dchi, anchor, vec![GlyphKey::Dchi])), stress);
    }

    // 8. Qadma; a following pasek makes it azla legarmeh
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Qadma) {
        let taam = if observed.has_pasek_after { Taam::AzlaLegarmeh } else { Taam::Qadma };
        return (Some(known(taam, anchor, vec![GlyphKey::Qadma])), stress);
    }

    // 9. Mahapakh; a following pasek makes it mahapakh legarmeh
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Mahapakh) {
        let taam = if observed.has_pasek_after { Taam::MahapakhLegarmeh } else { Taam::Mahapakh };
        return (Some(known(taam, anchor, vec![GlyphKey::Mahapakh])), stress);
    }

    // 10. Shalshelet; a following pasek makes it the gedola variant
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Shalshelet) {
        let taam = if observed.has_pasek_after {
            Taam::ShalsheletGedola
        } else {
            Taam::ShalsheletKetana
        };
        return (Some(known(taam, anchor, vec![GlyphKey::Shalshelet])), stress);
    }

    // 11. Yored: oleh-veyored when the ole partner sits on the same word,
    //     plain mercha otherwise
    if let Some(anchor) = glyph_cluster(word, reg, GlyphKey::Yored) {
        if has_glyph(word, reg, GlyphKey::Ole) {
            let consumed = vec![GlyphKey::Yored, GlyphKey::Ole];
            return (Some(known(Taam::OlehVeyored, anchor, consumed)), stress);
        }
        return (Some(known(Taam::Mercha, anchor, vec![GlyphKey::Yored])), stress);
    }

    // 12-15. Remaining single-glyph accents
    for (key, taam) in [
        (GlyphKey::Tipcha, Taam::Tipcha),
        (GlyphKey::Iluy, Taam::Iluy),
        (GlyphKey::Munach, Taam::Munach),
        (GlyphKey::Galgal, Taam::Galgal),
    ] {
        if let Some(anchor) = glyph_cluster(word, reg, key) {
            return (Some(known(taam, anchor, vec![key])), stress);
        }
    }

    (None, stress)
}

/// Split the word's metegs into a stress marker and a silluq anchor.
///
/// Non-final words expect 0-1 meteg (a stress marker). Final words expect
/// 0 (no silluq), 1 (the silluq anchor) or 2 (stress + silluq). Any other
/// count is a data-quality warning resolved deterministically: first is
/// stress, last is silluq.
fn resolve_metegs(word: &WordToken, final_context: bool) -> (Option<usize>, Option<usize>) {
    let metegs = word.meteg_clusters();

    if final_context {
        match metegs.len() {
            0 => (None, None),
            1 => (None, Some(metegs[0])),
            2 => (Some(metegs[0]), Some(metegs[1])),
            n => {
                log::warn!("final word {:?} carries {n} metegs; keeping first as stress, last as silluq", word.raw);
                (Some(metegs[0]), Some(metegs[n - 1]))
            }
        }
    } else {
        match metegs.len() {
            0 => (None, None),
            1 => (Some(metegs[0]), None),
            n => {
                log::warn!("word {:?} carries {n} metegs; keeping the first as stress", word.raw);
                (Some(metegs[0]), None)
            }
        }
    }
}

fn known(taam: Taam, anchor_cluster: usize, consumed: Vec<GlyphKey>) -> IdentifiedTaam {
    IdentifiedTaam { taam, anchor_cluster, consumed }
}

/// First cluster carrying any codepoint of the given glyph key
pub fn glyph_cluster(word: &WordToken, reg: &Registry, key: GlyphKey) -> Option<usize> {
    word.clusters
        .iter()
        .position(|c| c.taam_marks().any(|m| reg.glyph_key(m.ch) == Some(key)))
}

pub fn has_glyph(word: &WordToken, reg: &Registry, key: GlyphKey) -> bool {
    glyph_cluster(word, reg, key).is_some()
}

fn glyph_on_cluster(word: &WordToken, reg: &Registry, key: GlyphKey, cluster: usize) -> bool {
    word.clusters
        .get(cluster)
        .map_or(false, |c| c.taam_marks().any(|m| reg.glyph_key(m.ch) == Some(key)))
}
