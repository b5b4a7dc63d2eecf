//! The four-layer engine driver
//!
//! Builds the verse span, runs the primary / secondary / tertiary rule
//! chains in order, claims every accepted anchor, applies inferences to
//! the enriched tokens and slices the spans. Layer order and
//! increasing-index order within a layer are correctness-relevant: every
//! rule sees the claim table exactly as the rules before it left it.

use crate::models::classify::{EffectiveTaam, EnrichedToken, LocalResult};
use crate::models::inference::Inference;
use crate::models::spans::{Layer, PrimaryAnchor, RoleLayers, RolesDebug, Span, SpanCause};
use crate::models::taam::Taam;
use crate::models::token::Token;

use super::claims::ClaimTable;
use super::primary::infer_primary;
use super::secondary::{infer_secondary, PrimaryLeader, SecondaryInput};
use super::span_builder::{after_atnach_span, spans_to_anchors, AnchorInfo};
use super::tertiary::{infer_tertiary, TertiaryInput};

/// Everything the engine produces for one verse
#[derive(Debug, Clone)]
pub struct EngineOutput {
    pub layers: RoleLayers,
    pub debug: RolesDebug,
    pub enriched: Vec<EnrichedToken>,
}

/// Build the four role layers of a verse.
///
/// The verse span always covers `[0, silluq_index]`; when local
/// identification found no silluq the last non-punctuation token stands
/// in for it.
pub fn build_role_layers(tokens: &[Token], local: &LocalResult) -> EngineOutput {
    let silluq_index = local.silluq_index.unwrap_or_else(|| fallback_silluq(tokens));

    let mut enriched: Vec<EnrichedToken> =
        local.tokens.iter().map(EnrichedToken::from_local).collect();
    let mut claims = ClaimTable::new();

    let verse_span = Span {
        id: "VERSE".to_string(),
        layer: Layer::Verse,
        name: "קיסר (סילוק)".to_string(),
        from: 0,
        to: silluq_index,
        caused_by: Some(SpanCause { token_index: silluq_index, label: "סילוק".to_string() }),
        parent_id: None,
    };

    // layer 2: primary anchors claim first
    let primary_infs = infer_primary(tokens, local, verse_span.from, verse_span.to);
    for inf in &primary_infs {
        let Some(i) = inf.index else { continue };
        if claims.try_claim(i, Layer::Primary) {
            apply_inference(&mut enriched, inf);
        }
    }

    let atnach_index = anchor_of(&primary_infs, Taam::Atnach);
    let oleh_veyored_index = anchor_of(&primary_infs, Taam::OlehVeyored);

    let mut primary_spans =
        spans_to_anchors(Layer::Primary, &verse_span, &anchor_infos(&primary_infs));
    if let Some(atnach) = atnach_index {
        if let Some(span) = after_atnach_span(&verse_span, atnach, silluq_index) {
            primary_spans.push(span);
        }
    }

    // layer 3: secondary chains, one primary span at a time
    let mut secondary_applied: Vec<Inference> = Vec::new();
    for span in &primary_spans {
        let leader = primary_leader(span, &primary_infs, atnach_index);
        let input = SecondaryInput {
            tokens,
            local,
            claims: &claims,
            from: span.from,
            to: span.to,
            leader,
            oleh_veyored_index,
            silluq_index,
        };
        let infs = infer_secondary(&input);
        for inf in infs {
            let Some(i) = inf.index else { continue };
            if claims.try_claim(i, Layer::Secondary) {
                apply_inference(&mut enriched, &inf);
                secondary_applied.push(inf);
            }
        }
    }
    secondary_applied.sort_by_key(|inf| inf.index);

    let mut secondary_spans = Vec::new();
    for span in &primary_spans {
        let anchors = anchor_infos(
            &secondary_applied
                .iter()
                .filter(|inf| inf.index.map_or(false, |i| span.contains(i)))
                .cloned()
                .collect::<Vec<_>>(),
        );
        secondary_spans.extend(spans_to_anchors(Layer::Secondary, span, &anchors));
    }

    // layer 4: tertiary chains inside every secondary span
    let mut tertiary_applied: Vec<Inference> = Vec::new();
    for span in &secondary_spans {
        let input =
            TertiaryInput { tokens, local, claims: &claims, from: span.from, to: span.to };
        let infs = infer_tertiary(&input);
        for inf in infs {
            let Some(i) = inf.index else { continue };
            if claims.try_claim(i, Layer::Tertiary) {
                apply_inference(&mut enriched, &inf);
                tertiary_applied.push(inf);
            }
        }
    }
    tertiary_applied.sort_by_key(|inf| inf.index);

    let mut tertiary_spans = Vec::new();
    for span in &secondary_spans {
        let anchors = anchor_infos(
            &tertiary_applied
                .iter()
                .filter(|inf| inf.index.map_or(false, |i| span.contains(i)))
                .cloned()
                .collect::<Vec<_>>(),
        );
        tertiary_spans.extend(spans_to_anchors(Layer::Tertiary, span, &anchors));
    }

    let debug = RolesDebug {
        silluq_index: Some(silluq_index),
        atnach_index,
        oleh_veyored_index,
        claims: claims.records(),
        primary_anchors: primary_infs
            .iter()
            .filter_map(|inf| {
                let i = inf.index?;
                let (label, _) = anchor_label(inf.taam);
                Some(PrimaryAnchor { token_index: i, taam: inf.taam, label: label.to_string() })
            })
            .collect(),
    };

    EngineOutput {
        layers: RoleLayers {
            verse: vec![verse_span],
            primary: primary_spans,
            secondary: secondary_spans,
            tertiary: tertiary_spans,
        },
        debug,
        enriched,
    }
}

/// Overwrite the target token's effective classification.
fn apply_inference(enriched: &mut [EnrichedToken], inf: &Inference) {
    let Some(i) = inf.index else { return };
    if let Some(token) = enriched.get_mut(i) {
        token.effective = EffectiveTaam::new(inf.taam, inf.reason);
    }
}

/// Last non-punctuation token index, or 0 for degenerate input.
fn fallback_silluq(tokens: &[Token]) -> usize {
    tokens
        .iter()
        .rposition(|t| !t.is_punctuation())
        .unwrap_or(0)
}

fn anchor_of(infs: &[Inference], taam: Taam) -> Option<usize> {
    infs.iter().find(|inf| inf.taam == taam).and_then(|inf| inf.index)
}

fn anchor_infos(infs: &[Inference]) -> Vec<AnchorInfo> {
    infs.iter()
        .filter_map(|inf| {
            let i = inf.index?;
            let (label, name) = anchor_label(inf.taam);
            Some(AnchorInfo { token_index: i, label: label.to_string(), name: name.to_string() })
        })
        .collect()
}

/// The controlling primary anchor of a primary span
fn primary_leader(
    span: &Span,
    primary_infs: &[Inference],
    atnach_index: Option<usize>,
) -> Option<PrimaryLeader> {
    let is_after_atnach = span.id.ends_with("/L2/AFTER_ATNACH");

    let leader_index = if is_after_atnach {
        atnach_index
    } else {
        span.caused_by.as_ref().map(|c| c.token_index)
    }?;

    let inf = primary_infs.iter().find(|inf| inf.index == Some(leader_index))?;
    Some(PrimaryLeader { index: leader_index, taam: inf.taam, is_after_atnach })
}

/// Display strings for a span anchor
fn anchor_label(taam: Taam) -> (&'static str, &'static str) {
    match taam {
        Taam::OlehVeyored => ("עולה־ויורד", "מלך: עולה־ויורד"),
        Taam::Atnach => ("אתנח", "מלך: אתנח"),

        Taam::Dchi => ("דחי", "משנה: דחי"),
        Taam::Tsinor => ("צינור", "משנה: צינור"),
        Taam::ReviaQatan => ("רביע קטן", "משנה: רביע קטן"),
        Taam::ReviaGadol => ("רביע גדול", "משנה: רביע גדול"),
        Taam::ReviaMugrash => ("רביע מוגרש", "אחרי אתנח: רביע מוגרש"),

        Taam::MahapakhLegarmeh => ("מהפך לגרמיה", "שליש: מהפך לגרמיה"),
        Taam::AzlaLegarmeh => ("אזלא לגרמיה", "שליש: אזלא לגרמיה"),
        Taam::Pazer => ("פזר", "שליש: פזר"),

        other => {
            let name = other.heb_name();
            (name, name)
        }
    }
}
