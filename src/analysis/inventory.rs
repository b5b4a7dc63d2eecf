//! Accent-mark inventory diagnostics
//!
//! Aggregates every taam mark across the word tokens of a verse: how
//! often it occurs, how often on a word's last letter, and a few example
//! words. Useful when sweeping a corpus for unregistered or misplaced
//! glyphs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::token::{MarkKind, Token};

/// Aggregate entry for one accent codepoint
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MarkInventoryEntry {
    /// Stable identifier, e.g. "U+0591"
    pub id: String,
    pub ch: char,
    pub count: usize,
    /// How often the mark sits on a word's last letter
    pub last_letter_count: usize,
    /// Up to six distinct example words
    pub examples: Vec<String>,
}

const MAX_EXAMPLES: usize = 6;

/// Build the inventory of taam marks over a token sequence, sorted by
/// codepoint id.
pub fn taam_inventory(tokens: &[Token]) -> Vec<MarkInventoryEntry> {
    let mut map: BTreeMap<String, MarkInventoryEntry> = BTreeMap::new();

    for token in tokens {
        let Token::Word(word) = token else { continue };
        let last = word.clusters.len().saturating_sub(1);

        for cluster in &word.clusters {
            for mark in &cluster.marks {
                if mark.kind != MarkKind::Taam {
                    continue;
                }

                let entry = map.entry(mark.id.clone()).or_insert_with(|| MarkInventoryEntry {
                    id: mark.id.clone(),
                    ch: mark.ch,
                    count: 0,
                    last_letter_count: 0,
                    examples: Vec::new(),
                });

                entry.count += 1;
                if !word.clusters.is_empty() && mark.letter_index == last {
                    entry.last_letter_count += 1;
                }
                if entry.examples.len() < MAX_EXAMPLES && !entry.examples.contains(&word.raw) {
                    entry.examples.push(word.raw.clone());
                }
            }
        }
    }

    map.into_values().collect()
}
