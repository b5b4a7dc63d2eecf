//! Span construction
//!
//! Child spans slice a parent range at the anchor indices found inside
//! it: each child runs from the end of the previous one and ends exactly
//! at its anchor. The primary layer additionally gets a synthetic span
//! covering everything after the atnach, up to the silluq.

use crate::models::spans::{Layer, Span, SpanCause};

/// An anchor to slice at, with its display strings
#[derive(Debug, Clone)]
pub struct AnchorInfo {
    pub token_index: usize,
    pub label: String,
    pub name: String,
}

/// Slice `parent` into contiguous child spans, one per in-range anchor,
/// sorted by anchor index. Anchors outside the parent range are ignored.
pub fn spans_to_anchors(layer: Layer, parent: &Span, anchors: &[AnchorInfo]) -> Vec<Span> {
    let mut anchors: Vec<&AnchorInfo> = anchors
        .iter()
        .filter(|a| a.token_index >= parent.from && a.token_index <= parent.to)
        .collect();
    anchors.sort_by_key(|a| a.token_index);

    let mut spans = Vec::new();
    let mut start = parent.from;

    for a in anchors {
        if a.token_index < start {
            continue;
        }
        spans.push(Span {
            id: format!("{}/L{}/{}@{}", parent.id, layer as u8, a.name, a.token_index),
            layer,
            name: a.name.clone(),
            from: start,
            to: a.token_index,
            caused_by: Some(SpanCause { token_index: a.token_index, label: a.label.clone() }),
            parent_id: Some(parent.id.clone()),
        });
        start = a.token_index + 1;
    }

    spans
}

/// The synthetic "after the primary pause" span: (atnach, silluq]
pub fn after_atnach_span(parent: &Span, atnach_index: usize, silluq_index: usize) -> Option<Span> {
    let from = atnach_index + 1;
    let to = silluq_index;
    if from > to {
        return None;
    }

    Some(Span {
        id: format!("{}/L2/AFTER_ATNACH", parent.id),
        layer: Layer::Primary,
        name: "אחרי אתנח".to_string(),
        from,
        to,
        caused_by: Some(SpanCause { token_index: silluq_index, label: "סילוק".to_string() }),
        parent_id: Some(parent.id.clone()),
    })
}
