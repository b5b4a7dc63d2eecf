//! End-to-end pipeline tests
//!
//! Runs full analyses and checks the structural guarantees that hold for
//! any verse: token/cluster accounting, the verse span, the claim
//! discipline and span partitioning.

use taamim_wasm::analysis::analyze;
use taamim_wasm::models::spans::Span;
use taamim_wasm::models::taam::{Role, Taam};
use taamim_wasm::text::normalize::normalize_text;
use taamim_wasm::text::unicode::{PASEK, SOF_PASUQ};

// munach | atnach word | oleh-veyored word | revia | silluq word
const FULL_VERSE: &str = "ב\u{05A8}ג \u{05C0} ד\u{05AB}ה\u{05A5}ו ז\u{0597}ח ט\u{0591}י כ\u{05B8}ל\u{05B8}מ\u{05B8}\u{05BD}\u{05C3}";

#[test]
fn test_punctuation_tokens_match_sentinel_count() {
    for text in ["א|ב", "אב׃", FULL_VERSE, "א ׀ ב ׀ ג׃"] {
        let r = analyze(text);
        let sentinels = r
            .normalized
            .chars()
            .filter(|&c| c == PASEK || c == SOF_PASUQ)
            .count();
        let punct = r.tokens.iter().filter(|t| t.is_punctuation()).count();
        assert_eq!(punct, sentinels, "text: {text:?}");
    }
}

#[test]
fn test_cluster_count_equals_letter_count() {
    let r = analyze(FULL_VERSE);
    for token in &r.tokens {
        if let Some(word) = token.as_word() {
            assert_eq!(word.clusters.len(), word.letters.chars().count());
        }
    }
}

#[test]
fn test_verse_span_ends_at_silluq() {
    let r = analyze(FULL_VERSE);
    let verse = &r.layers.verse[0];
    assert_eq!(verse.from, 0);
    assert_eq!(Some(verse.to), r.debug.silluq_index);

    // the silluq word is the identified one
    let silluq = r.debug.silluq_index.unwrap();
    assert_eq!(r.taamim[silluq].identified.as_ref().unwrap().taam, Taam::Silluq);
}

#[test]
fn test_verse_span_falls_back_to_last_word() {
    // no meteg anywhere: the last non-punctuation token stands in
    let r = analyze("ב\u{05A3}ג דה\u{05C3}");
    assert_eq!(r.debug.silluq_index, Some(1));
    assert_eq!(r.layers.verse[0].to, 1);
}

#[test]
fn test_no_index_claimed_twice() {
    let r = analyze(FULL_VERSE);
    let mut seen = std::collections::HashSet::new();
    for rec in &r.debug.claims {
        assert!(seen.insert(rec.index), "token {} claimed by two layers", rec.index);
    }
}

#[test]
fn test_sibling_spans_partition_their_parent() {
    let r = analyze(FULL_VERSE);

    let check_children = |parents: &[Span], children: &[Span]| {
        for parent in parents {
            let mut expected_from = parent.from;
            for child in children
                .iter()
                .filter(|s| s.parent_id.as_deref() == Some(parent.id.as_str()))
            {
                assert_eq!(child.from, expected_from, "gap under {}", parent.id);
                assert!(child.to >= child.from);
                assert_eq!(child.caused_by.as_ref().unwrap().token_index, child.to);
                expected_from = child.to + 1;
            }
        }
    };

    check_children(&r.layers.primary, &r.layers.secondary);
    check_children(&r.layers.secondary, &r.layers.tertiary);
}

#[test]
fn test_revia_with_mugrash_mark_is_never_plain_revia() {
    // revia and the mugrash sign on one word
    let r = analyze("ב\u{059D}ג\u{0597}ד ה\u{05B8}\u{05BD}\u{05C3}");
    let k = r.taamim[0].identified.as_ref().unwrap();
    assert_eq!(k.taam, Taam::ReviaMugrash);
    assert_eq!(k.taam.role(), Role::Mafsik);
}

#[test]
fn test_analyze_is_idempotent() {
    let a = analyze(FULL_VERSE);
    let b = analyze(FULL_VERSE);
    assert_eq!(a, b);

    let a_json = serde_json::to_string(&a).unwrap();
    let b_json = serde_json::to_string(&b).unwrap();
    assert_eq!(a_json, b_json);
}

#[test]
fn test_qadma_with_divider_is_azla_legarmeh() {
    // the qadma glyph followed by a divider token
    let r = analyze("ב\u{05A8}ג \u{05C0} ד ה\u{05B8}\u{05BD}\u{05C3}");
    let k = r.taamim[0].identified.as_ref().unwrap();
    assert_eq!(k.taam, Taam::AzlaLegarmeh);
    assert_eq!(k.taam.role(), Role::Mafsik);

    // without the divider it stays the conjunctive qadma
    let r2 = analyze("ב\u{05A8}ג ד ה\u{05B8}\u{05BD}\u{05C3}");
    let k2 = r2.taamim[0].identified.as_ref().unwrap();
    assert_eq!(k2.taam, Taam::Qadma);
    assert_eq!(k2.taam.role(), Role::Mesharet);
}

#[test]
fn test_ascii_shorthand_tokenizes_like_canonical() {
    let ascii = analyze("א|ב");
    let canonical = analyze(&format!("א {PASEK} ב"));
    assert_eq!(ascii.tokens, canonical.tokens);

    let ascii_end = analyze("א:ב");
    let canonical_end = analyze(&format!("א {SOF_PASUQ} ב"));
    assert_eq!(ascii_end.tokens, canonical_end.tokens);
}

#[test]
fn test_normalization_is_idempotent() {
    for text in ["א|ב", FULL_VERSE, "  א \t ב  ׃"] {
        let once = normalize_text(text);
        assert_eq!(normalize_text(&once), once);
    }
}

#[test]
fn test_unregistered_accent_is_diagnostic_not_error() {
    // geresh U+059C has no registry entry: the word stays unidentified
    // and its effective classification is UNKNOWN
    let r = analyze("ב\u{059C}ג ד\u{05B8}\u{05BD}ה\u{05C3}");
    assert!(r.taamim[0].identified.is_none());
    assert_eq!(r.taamim[0].effective.taam, Taam::Unknown);

    // the mark itself is still carried on the token
    let word = r.tokens[0].as_word().unwrap();
    assert_eq!(word.taam_marks().count(), 1);
}
