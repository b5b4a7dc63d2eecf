//! The claim table
//!
//! Every accepted inference claims its token index for its layer. An
//! index is claimed at most once; a claim by a higher layer can never be
//! reclaimed by a lower one. The table is created fresh per analysis
//! call and threaded by value through the layer builders.

use std::collections::BTreeMap;

use crate::models::spans::{ClaimRecord, Layer};

#[derive(Debug, Clone, Default)]
pub struct ClaimTable {
    claims: BTreeMap<usize, Layer>,
}

impl ClaimTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, index: usize) -> bool {
        self.claims.contains_key(&index)
    }

    /// Claim an index for a layer. Returns false if the index is already
    /// claimed (by any layer).
    pub fn try_claim(&mut self, index: usize, layer: Layer) -> bool {
        if self.claims.contains_key(&index) {
            return false;
        }
        self.claims.insert(index, layer);
        true
    }

    /// The claims in index order, for the debug record
    pub fn records(&self) -> Vec<ClaimRecord> {
        self.claims
            .iter()
            .map(|(&index, &layer)| ClaimRecord { index, layer })
            .collect()
    }
}
