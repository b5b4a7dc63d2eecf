//! Primary-pause inference (layer 2 anchors)
//!
//! Two ordered chains run inside the verse span. Atnach first, because
//! the oleh-veyored domain ends at the atnach when one is found:
//!
//! atnach: explicit glyph, else a revia within the last three tokens
//! before the verse end acting as an implicit atnach, else the first
//! explicit pazer, else — when the final word is short of three syllables
//! to its silluq — the nearest preceding mesharet promoted to a hidden
//! atnach.
//!
//! oleh-veyored: explicit glyph in [start, atnach-or-verse-end], else an
//! azla legarmeh on the first word substitutes.

use crate::analysis::syllables::syllables_to_taam_anchor;
use crate::models::classify::LocalResult;
use crate::models::inference::{Inference, InferenceReason};
use crate::models::taam::Taam;
use crate::models::token::Token;

/// Infer the primary-pause anchors for the verse span `[from, to]`.
/// Pure: claiming and application stay with the engine driver.
pub fn infer_primary(tokens: &[Token], local: &LocalResult, from: usize, to: usize) -> Vec<Inference> {
    let mut collected: Vec<Inference> = Vec::new();

    if let Some(atnach) = infer_atnach(tokens, local, to) {
        collected.push(atnach);
    }

    // the oleh-veyored domain ends at the atnach if it exists
    let ov_to = collected
        .iter()
        .find(|inf| inf.taam == Taam::Atnach)
        .and_then(|inf| inf.index)
        .unwrap_or(to);

    if let Some(ov) = infer_oleh_veyored(tokens, local, from, ov_to) {
        collected.push(ov);
    }

    sanitize(collected, tokens)
}

fn infer_atnach(tokens: &[Token], local: &LocalResult, verse_to: usize) -> Option<Inference> {
    // explicit atnach
    if let Some(i) = (0..=verse_to).find(|&i| local.tokens[i].is_known(Taam::Atnach)) {
        return Some(Inference::at(i, InferenceReason::AtnachExplicit, Taam::Atnach));
    }

    // revia near the end (within the last three tokens) acts as atnach
    let start = verse_to.saturating_sub(3);
    for i in (start..=verse_to).rev() {
        if tokens[i].is_punctuation() {
            continue;
        }
        if local.tokens[i].is_known(Taam::Revia) || local.tokens[i].is_known(Taam::ReviaMugrash) {
            return Some(Inference::at(i, InferenceReason::AtnachSubReviaNearEnd, Taam::Atnach));
        }
    }

    // first explicit pazer
    if let Some(i) = (0..=verse_to).find(|&i| local.tokens[i].is_known(Taam::Pazer)) {
        return Some(Inference::at(i, InferenceReason::AtnachSubPazer, Taam::Atnach));
    }

    // hidden atnach: fewer than three syllables from the start of the
    // final word to its silluq promotes the nearest preceding mesharet
    let last_word = tokens[verse_to].as_word()?;
    let syllables = syllables_to_taam_anchor(last_word, Taam::Silluq);
    if matches!(syllables, Some(s) if s < 3) {
        for i in (0..verse_to).rev() {
            if tokens[i].is_punctuation() {
                continue;
            }
            if local.tokens[i].is_mesharet() {
                return Some(Inference::at(i, InferenceReason::AtnachHiddenNearSilluq, Taam::Atnach));
            }
        }
    }

    None
}

fn infer_oleh_veyored(
    tokens: &[Token],
    local: &LocalResult,
    from: usize,
    to: usize,
) -> Option<Inference> {
    // explicit oleh-veyored anywhere in the domain
    for i in from..=to {
        if tokens[i].is_punctuation() {
            continue;
        }
        if local.tokens[i].is_known(Taam::OlehVeyored) {
            return Some(Inference::at(i, InferenceReason::OlehVeyoredExplicit, Taam::OlehVeyored));
        }
    }

    // an azla legarmeh opening the verse substitutes
    if local.tokens.get(from).map_or(false, |t| t.is_known(Taam::AzlaLegarmeh)) {
        return Some(Inference::at(
            from,
            InferenceReason::OlehVeyoredSubAzlaLegarmehFirst,
            Taam::OlehVeyored,
        ));
    }

    None
}

/// Keep only word-token targets, one inference per index, sorted by index.
fn sanitize(collected: Vec<Inference>, tokens: &[Token]) -> Vec<Inference> {
    let mut out: Vec<Inference> = Vec::new();
    for inf in collected {
        let Some(i) = inf.index else { continue };
        if !matches!(tokens.get(i), Some(Token::Word(_))) {
            continue;
        }
        if out.iter().any(|x| x.index == inf.index) {
            continue;
        }
        out.push(inf);
    }
    out.sort_by_key(|inf| inf.index);
    out
}
