//! Syllable / vowel-nucleus counting
//!
//! Several "is this word too short" rules count vowel nuclei over cluster
//! ranges. The nucleus set is a fixed subset of the niqqud codepoints;
//! dagesh/mappiq and meteg are not nuclei. A range with no nucleus still
//! counts as one syllable.

use crate::models::taam::Taam;
use crate::models::token::{LetterCluster, MarkKind, WordToken};
use crate::registry::{registry, GlyphKey};

/// Vowel marks that indicate a syllable nucleus
const VOWEL_NUCLEI: &[char] = &[
    '\u{05B0}', // sheva
    '\u{05B1}', // hataf segol
    '\u{05B2}', // hataf patah
    '\u{05B3}', // hataf qamats
    '\u{05B4}', // hiriq
    '\u{05B5}', // tsere
    '\u{05B6}', // segol
    '\u{05B7}', // patah
    '\u{05B8}', // qamats
    '\u{05B9}', // holam
    '\u{05BB}', // qubuts
    '\u{05C7}', // qamats qatan
];

pub fn is_vowel_nucleus(ch: char) -> bool {
    VOWEL_NUCLEI.contains(&ch)
}

fn cluster_has_nucleus(cluster: &LetterCluster) -> bool {
    cluster
        .marks
        .iter()
        .any(|m| m.kind == MarkKind::Niqqud && is_vowel_nucleus(m.ch))
}

/// Vowel nuclei in the inclusive cluster range `[from, to]`
pub fn count_vowel_nuclei_in_range(word: &WordToken, from: usize, to: usize) -> usize {
    word.clusters
        .iter()
        .enumerate()
        .filter(|(i, c)| *i >= from && *i <= to && cluster_has_nucleus(c))
        .count()
}

/// Syllables in the inclusive cluster range: the nucleus count, with a
/// zero-count range still counting as one syllable
pub fn count_syllables_in_range(word: &WordToken, from: usize, to: usize) -> usize {
    count_vowel_nuclei_in_range(word, from, to).max(1)
}

/// Cluster carrying the defining glyph of a taam.
///
/// Silluq anchors on the meteg niqqud (the last one, matching the
/// stress-then-silluq reading of a double meteg); every other taam anchors
/// on the first cluster carrying one of its rendering glyphs.
pub fn defining_glyph_cluster(word: &WordToken, taam: Taam) -> Option<usize> {
    if taam == Taam::Silluq {
        return word.meteg_clusters().last().copied();
    }

    let reg = registry();
    for &key in reg.rendering_keys(taam) {
        if let Some(idx) = cluster_with_glyph(word, key) {
            return Some(idx);
        }
    }
    None
}

fn cluster_with_glyph(word: &WordToken, key: GlyphKey) -> Option<usize> {
    let reg = registry();
    word.clusters
        .iter()
        .position(|c| c.taam_marks().any(|m| reg.glyph_key(m.ch) == Some(key)))
}

/// Syllables from word start up to (and including) the defining-glyph
/// cluster of the given taam; `None` when the glyph is absent
pub fn syllables_to_taam_anchor(word: &WordToken, taam: Taam) -> Option<usize> {
    defining_glyph_cluster(word, taam).map(|anchor| count_syllables_in_range(word, 0, anchor))
}

/// The last-syllable cluster range: from the cluster after the
/// second-to-last vowel nucleus through the end of the word
pub fn last_syllable_range(word: &WordToken) -> Option<(usize, usize)> {
    let last = word.clusters.len().checked_sub(1)?;

    let nuclei: Vec<usize> = word
        .clusters
        .iter()
        .enumerate()
        .filter(|(_, c)| cluster_has_nucleus(c))
        .map(|(i, _)| i)
        .collect();

    let from = if nuclei.len() >= 2 {
        (nuclei[nuclei.len() - 2] + 1).min(last)
    } else {
        0
    };

    Some((from, last))
}

/// Does the final syllable of the word already bear an accent glyph?
pub fn final_syllable_bears_taam(word: &WordToken) -> bool {
    let Some((from, to)) = last_syllable_range(word) else {
        return false;
    };
    word.clusters[from..=to].iter().any(|c| c.taam_marks().next().is_some())
}
