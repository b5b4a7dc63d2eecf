//! Hierarchical spans: the nested pause domains of a verse
//!
//! Layer 1 covers the whole verse up to the silluq word; layers 2-4
//! subdivide it at the primary, secondary and tertiary pause anchors.
//! Sibling spans under one parent are contiguous, non-overlapping, sorted
//! by `from`, and each ends exactly at its anchor's token index.

use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::taam::Taam;

/// The four nested layers, coarsest to finest
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Layer {
    Verse = 1,
    Primary = 2,
    Secondary = 3,
    Tertiary = 4,
}

impl Layer {
    /// Hebrew name of the pause rank this layer carries
    pub fn heb_name(&self) -> &'static str {
        match self {
            Layer::Verse => "קיסר",
            Layer::Primary => "מלך",
            Layer::Secondary => "משנה",
            Layer::Tertiary => "שליש",
        }
    }
}

/// The anchor token a span ends at
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SpanCause {
    pub token_index: usize,
    pub label: String,
}

/// One domain over an inclusive token range
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Span {
    pub id: String,
    pub layer: Layer,
    pub name: String,
    pub from: usize,
    pub to: usize,
    pub caused_by: Option<SpanCause>,
    pub parent_id: Option<String>,
}

impl Span {
    pub fn contains(&self, index: usize) -> bool {
        self.from <= index && index <= self.to
    }
}

/// The four-layer span collection of one verse
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RoleLayers {
    pub verse: Vec<Span>,
    pub primary: Vec<Span>,
    pub secondary: Vec<Span>,
    pub tertiary: Vec<Span>,
}

/// A claim entry: which layer took a token index as its anchor
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClaimRecord {
    pub index: usize,
    pub layer: Layer,
}

/// Anchor summary of the primary layer, for diagnostics
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PrimaryAnchor {
    pub token_index: usize,
    pub taam: Taam,
    pub label: String,
}

/// Debug record retained alongside the spans
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RolesDebug {
    pub silluq_index: Option<usize>,
    pub atnach_index: Option<usize>,
    pub oleh_veyored_index: Option<usize>,
    pub claims: Vec<ClaimRecord>,
    pub primary_anchors: Vec<PrimaryAnchor>,
}
