//! Token and letter-cluster structures
//!
//! A normalized verse splits into an ordered token sequence; the 0-based
//! array position is the sole token identity used downstream. Word tokens
//! decompose into letter clusters, one per Hebrew consonant, each carrying
//! its combining marks in encounter order.

use serde::{Deserialize, Serialize};

use crate::text::unicode::METEG;

/// Which kind of combining mark a [`Mark`] is
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarkKind {
    /// Cantillation glyph (U+0591..U+05AF)
    Taam,
    /// Vowel point or other niqqud
    Niqqud,
}

/// One combining mark attached to a letter. Immutable once produced by
/// tokenization.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Mark {
    pub kind: MarkKind,

    /// The mark character itself
    pub ch: char,

    /// Stable identifier, e.g. "U+05B7"
    pub id: String,

    /// Index of the owning letter within the word (0-based)
    pub letter_index: usize,

    /// Order among the marks on that letter (0-based, encounter order)
    pub order_in_letter: usize,
}

/// One consonant plus its marks, in input order
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LetterCluster {
    pub letter: char,
    pub marks: Vec<Mark>,
}

impl LetterCluster {
    pub fn new(letter: char) -> Self {
        Self { letter, marks: Vec::new() }
    }

    /// Taam marks on this letter, in order
    pub fn taam_marks(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| m.kind == MarkKind::Taam)
    }

    pub fn has_mark(&self, ch: char) -> bool {
        self.marks.iter().any(|m| m.ch == ch)
    }
}

/// A word with its letter clusters
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WordToken {
    /// The raw substring, marks included
    pub raw: String,

    /// The bare consonant skeleton
    pub letters: String,

    /// One cluster per Hebrew letter; cluster count equals letter count
    pub clusters: Vec<LetterCluster>,
}

impl WordToken {
    /// All marks of the word in cluster order
    pub fn all_marks(&self) -> impl Iterator<Item = &Mark> {
        self.clusters.iter().flat_map(|c| c.marks.iter())
    }

    /// All taam marks of the word in cluster order
    pub fn taam_marks(&self) -> impl Iterator<Item = &Mark> {
        self.all_marks().filter(|m| m.kind == MarkKind::Taam)
    }

    /// First cluster carrying the given mark character
    pub fn cluster_with_mark(&self, ch: char) -> Option<usize> {
        self.clusters.iter().position(|c| c.has_mark(ch))
    }

    /// Does the last letter of the word carry the given taam character?
    pub fn mark_on_last_letter(&self, ch: char) -> bool {
        match self.clusters.last() {
            Some(c) => c.has_mark(ch),
            None => false,
        }
    }

    /// Cluster indices carrying a meteg, in order
    pub fn meteg_clusters(&self) -> Vec<usize> {
        self.clusters
            .iter()
            .enumerate()
            .filter(|(_, c)| c.marks.iter().any(|m| m.kind == MarkKind::Niqqud && m.ch == METEG))
            .map(|(i, _)| i)
            .collect()
    }
}

/// One unit of the normalized verse: a word or a punctuation sentinel
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Token {
    Word(WordToken),
    /// Word divider ׀ (no letters)
    Pasek,
    /// Verse end ׃ (no letters)
    SofPasuq,
}

impl Token {
    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// Pasek or sof pasuq
    pub fn is_punctuation(&self) -> bool {
        matches!(self, Token::Pasek | Token::SofPasuq)
    }

    pub fn as_word(&self) -> Option<&WordToken> {
        match self {
            Token::Word(w) => Some(w),
            _ => None,
        }
    }

    /// The raw text of this token as it appears in the normalized verse
    pub fn raw(&self) -> &str {
        match self {
            Token::Word(w) => &w.raw,
            Token::Pasek => "\u{05C0}",
            Token::SofPasuq => "\u{05C3}",
        }
    }
}
