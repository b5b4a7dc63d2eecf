//! Tokenization of normalized verse text
//!
//! Splits on spaces; the pasek / sof pasuq sentinels become punctuation
//! tokens, everything else becomes a word decomposed into letter clusters.
//! Each Hebrew letter opens a new cluster; every following accent or
//! vowel mark is appended to the most recently opened cluster in
//! encounter order. Marks preceding any letter are dropped with a
//! warning (malformed input is tolerated, never an error).

use crate::models::token::{LetterCluster, Mark, MarkKind, Token, WordToken};

use super::unicode::{is_hebrew_letter, is_niqqud, is_taam, u_plus, PASEK, SOF_PASUQ};

/// Tokenize normalized text. Token order equals input order; the 0-based
/// position in the returned vector is the token's identity.
pub fn tokenize(normalized: &str) -> Vec<Token> {
    normalized
        .split(' ')
        .filter(|part| !part.is_empty())
        .map(tokenize_part)
        .collect()
}

fn tokenize_part(part: &str) -> Token {
    let mut chars = part.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if ch == PASEK {
            return Token::Pasek;
        }
        if ch == SOF_PASUQ {
            return Token::SofPasuq;
        }
    }

    let mut clusters: Vec<LetterCluster> = Vec::new();
    let mut letters = String::new();
    let mut order_in_letter = 0;
    let mut dropped_marks = 0;

    for ch in part.chars() {
        if is_hebrew_letter(ch) {
            letters.push(ch);
            order_in_letter = 0;
            clusters.push(LetterCluster::new(ch));
            continue;
        }

        let letter_index = clusters.len();
        let Some(current) = clusters.last_mut() else {
            if is_taam(ch) || is_niqqud(ch) {
                dropped_marks += 1;
            }
            continue;
        };

        if is_taam(ch) || is_niqqud(ch) {
            let kind = if is_taam(ch) { MarkKind::Taam } else { MarkKind::Niqqud };
            current.marks.push(Mark {
                kind,
                ch,
                id: u_plus(ch),
                letter_index: letter_index - 1,
                order_in_letter,
            });
            order_in_letter += 1;
        }
    }

    if dropped_marks > 0 {
        log::warn!("dropped {dropped_marks} mark(s) preceding any letter in {part:?}");
    }

    Token::Word(WordToken { raw: part.to_string(), letters, clusters })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::normalize::normalize_text;

    #[test]
    fn test_punctuation_tokens() {
        let tokens = tokenize(&normalize_text("אב ׀ גד ׃"));
        assert_eq!(tokens.len(), 4);
        assert!(tokens[0].is_word());
        assert_eq!(tokens[1], Token::Pasek);
        assert!(tokens[2].is_word());
        assert_eq!(tokens[3], Token::SofPasuq);
    }

    #[test]
    fn test_cluster_count_equals_letter_count() {
        let tokens = tokenize("בְּרֵאשִׁ֖ית");
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.clusters.len(), word.letters.chars().count());
        assert_eq!(word.letters, "בראשית");
    }

    #[test]
    fn test_marks_attach_to_preceding_letter_in_order() {
        // bet + sheva + dagesh, resh + tsere
        let tokens = tokenize("בְּרֵ");
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.clusters.len(), 2);

        let bet = &word.clusters[0];
        assert_eq!(bet.marks.len(), 2);
        assert_eq!(bet.marks[0].order_in_letter, 0);
        assert_eq!(bet.marks[1].order_in_letter, 1);
        assert_eq!(bet.marks[0].letter_index, 0);

        let resh = &word.clusters[1];
        assert_eq!(resh.marks.len(), 1);
        assert_eq!(resh.marks[0].letter_index, 1);
        assert_eq!(resh.marks[0].order_in_letter, 0);
    }

    #[test]
    fn test_taam_and_niqqud_kinds() {
        // bet + sheva (niqqud) + tipcha (taam)
        let tokens = tokenize("ב\u{05B0}\u{0596}");
        let word = tokens[0].as_word().unwrap();
        let kinds: Vec<MarkKind> = word.all_marks().map(|m| m.kind).collect();
        assert_eq!(kinds, vec![MarkKind::Niqqud, MarkKind::Taam]);
    }

    #[test]
    fn test_marks_before_any_letter_dropped() {
        let tokens = tokenize("\u{05B7}אב");
        let word = tokens[0].as_word().unwrap();
        assert_eq!(word.clusters.len(), 2);
        assert_eq!(word.all_marks().count(), 0);
        assert_eq!(word.letters, "אב");
    }

    #[test]
    fn test_ascii_shorthand_matches_canonical() {
        let a = tokenize(&normalize_text("א|ב"));
        let b = tokenize(&normalize_text(&format!("א {PASEK} ב")));
        assert_eq!(a, b);

        let c = tokenize(&normalize_text("א:ב"));
        let d = tokenize(&normalize_text(&format!("א {SOF_PASUQ} ב")));
        assert_eq!(c, d);
    }

    #[test]
    fn test_punctuation_count_matches_sentinel_count() {
        let normalized = normalize_text("אֽב׃ ג ׀ ד ׀");
        let sentinels = normalized.chars().filter(|&c| c == PASEK || c == SOF_PASUQ).count();
        let tokens = tokenize(&normalized);
        let punct = tokens.iter().filter(|t| t.is_punctuation()).count();
        assert_eq!(punct, sentinels);
    }
}
