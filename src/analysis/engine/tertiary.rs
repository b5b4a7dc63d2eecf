//! Tertiary-pause inference (layer 4 anchors)
//!
//! Inside every secondary span, over unclaimed indices: the legarmeh
//! accents (explicit mahapakh legarmeh, explicit azla legarmeh) and,
//! separately, explicit pazer.

use crate::models::classify::LocalResult;
use crate::models::inference::{Inference, InferenceReason};
use crate::models::taam::Taam;
use crate::models::token::Token;

use super::claims::ClaimTable;

pub struct TertiaryInput<'a> {
    pub tokens: &'a [Token],
    pub local: &'a LocalResult,
    pub claims: &'a ClaimTable,
    pub from: usize,
    pub to: usize,
}

impl TertiaryInput<'_> {
    fn open(&self, i: usize) -> bool {
        matches!(self.tokens.get(i), Some(Token::Word(_))) && !self.claims.is_claimed(i)
    }

    fn known(&self, i: usize, taam: Taam) -> bool {
        self.local.tokens[i].is_known(taam)
    }
}

/// Run the tertiary rule chain for one secondary span.
pub fn infer_tertiary(input: &TertiaryInput) -> Vec<Inference> {
    let mut collected: Vec<Inference> = Vec::new();

    for rule in [infer_legarmeh, infer_pazer] {
        for inf in rule(input) {
            let Some(i) = inf.index else { continue };
            if !input.open(i) || collected.iter().any(|x| x.index == inf.index) {
                continue;
            }
            collected.push(inf);
        }
    }

    collected.sort_by_key(|inf| inf.index);
    collected
}

fn infer_legarmeh(input: &TertiaryInput) -> Vec<Inference> {
    let mut out = Vec::new();
    for i in input.from..=input.to {
        if !input.open(i) {
            continue;
        }
        if input.known(i, Taam::MahapakhLegarmeh) {
            out.push(Inference::at(i, InferenceReason::Original, Taam::MahapakhLegarmeh));
            continue;
        }
        if input.known(i, Taam::AzlaLegarmeh) {
            out.push(Inference::at(i, InferenceReason::Original, Taam::AzlaLegarmeh));
        }
    }
    out
}

fn infer_pazer(input: &TertiaryInput) -> Vec<Inference> {
    (input.from..=input.to)
        .filter(|&i| input.open(i) && input.known(i, Taam::Pazer))
        .map(|i| Inference::at(i, InferenceReason::Original, Taam::Pazer))
        .collect()
}
