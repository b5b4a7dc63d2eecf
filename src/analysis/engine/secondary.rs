//! Secondary-pause inference (layer 3 anchors)
//!
//! Runs independently inside every primary span, over indices the claim
//! table has not taken. Rule order is the contract:
//!
//! 1. dchi — explicit anywhere in an atnach-anchored span; else, when the
//!    atnach word is short (≤3 syllables to its glyph), the nearest
//!    preceding mesharet is promoted.
//! 2. tsinor — explicit anywhere in the span.
//! 3. revia family — in the after-atnach span, first resolve the
//!    revia-mugrash equivalent (explicit, shalshelet-gedola substitution,
//!    or hidden near a short silluq); then plain revia anchors, where a
//!    revia immediately before the oleh-veyored word is the qatan variant
//!    and any other is the gadol variant.
//! 4. mahapakh legarmeh — in the after-atnach span only, and only when a
//!    revia-mugrash equivalent exists somewhere in it: an explicit
//!    mahapakh-legarmeh glyph keeps its role; otherwise, if the mugrash
//!    role was realized by a shalshelet gedola, the last mesharet before
//!    the silluq is promoted.

use crate::analysis::syllables::syllables_to_taam_anchor;
use crate::models::classify::LocalResult;
use crate::models::inference::{Inference, InferenceReason};
use crate::models::taam::Taam;
use crate::models::token::Token;

use super::claims::ClaimTable;

/// The primary anchor controlling a span
#[derive(Debug, Clone, Copy)]
pub struct PrimaryLeader {
    pub index: usize,
    pub taam: Taam,
    /// True for the synthetic span after the atnach
    pub is_after_atnach: bool,
}

/// Everything a secondary rule may look at
pub struct SecondaryInput<'a> {
    pub tokens: &'a [Token],
    pub local: &'a LocalResult,
    pub claims: &'a ClaimTable,
    pub from: usize,
    pub to: usize,
    pub leader: Option<PrimaryLeader>,
    pub oleh_veyored_index: Option<usize>,
    pub silluq_index: usize,
}

impl SecondaryInput<'_> {
    /// Is index `i` open for a rule: in range, a word, unclaimed?
    fn open(&self, i: usize) -> bool {
        matches!(self.tokens.get(i), Some(Token::Word(_))) && !self.claims.is_claimed(i)
    }

    fn known(&self, i: usize, taam: Taam) -> bool {
        self.local.tokens[i].is_known(taam)
    }
}

/// Run the secondary rule chain for one primary span. Pure: claiming and
/// application stay with the engine driver.
pub fn infer_secondary(input: &SecondaryInput) -> Vec<Inference> {
    let mut collected: Vec<Inference> = Vec::new();

    for rule in [infer_dchi, infer_tsinor, infer_revia, infer_mahapakh_legarmeh] {
        let infs = sanitize(rule(input), input);
        collected.extend(infs);
    }

    collected.sort_by_key(|inf| inf.index);
    collected
}

fn infer_dchi(input: &SecondaryInput) -> Vec<Inference> {
    // dchi lives in the span that ends exactly at the atnach anchor
    let Some(leader) = input.leader else { return Vec::new() };
    if leader.taam != Taam::Atnach || input.to != leader.index {
        return Vec::new();
    }

    // explicit dchi wins and stops the rule
    for i in input.from..=input.to {
        if input.open(i) && input.known(i, Taam::Dchi) {
            return vec![Inference::at(i, InferenceReason::DchiExplicit, Taam::Dchi)];
        }
    }

    // hidden dchi: a short atnach word promotes its last mesharet
    let Some(atnach_word) = input.tokens[leader.index].as_word() else {
        return Vec::new();
    };
    if matches!(syllables_to_taam_anchor(atnach_word, Taam::Atnach), Some(s) if s <= 3) {
        if let Some(i) = last_mesharet_before(input, input.from, leader.index) {
            return vec![Inference::at(i, InferenceReason::DchiHiddenNearAtnach, Taam::Dchi)];
        }
    }

    Vec::new()
}

fn infer_tsinor(input: &SecondaryInput) -> Vec<Inference> {
    (input.from..=input.to)
        .filter(|&i| input.open(i) && input.known(i, Taam::Tsinor))
        .map(|i| Inference::at(i, InferenceReason::Original, Taam::Tsinor))
        .collect()
}

fn infer_revia(input: &SecondaryInput) -> Vec<Inference> {
    let mut out: Vec<Inference> = Vec::new();

    let is_after_atnach = input.leader.map_or(false, |l| l.is_after_atnach);
    if is_after_atnach {
        if let Some(mug) = infer_revia_mugrash_equivalent(input) {
            let idx = mug.index.unwrap_or(usize::MAX);
            if input.open(idx) {
                out.push(mug);
            }
        }
    }

    for i in input.from..=input.to {
        if !input.open(i) || out.iter().any(|x| x.index == Some(i)) {
            continue;
        }
        // explicit mugrash resolves through the after-atnach chain above
        if input.known(i, Taam::ReviaMugrash) {
            continue;
        }
        if input.known(i, Taam::Revia) {
            let is_qatan = input.oleh_veyored_index.map_or(false, |ov| i + 1 == ov);
            let taam = if is_qatan { Taam::ReviaQatan } else { Taam::ReviaGadol };
            out.push(Inference::at(i, InferenceReason::Original, taam));
        }
    }

    out
}

/// The revia-mugrash-equivalent anchor of the after-atnach span
fn infer_revia_mugrash_equivalent(input: &SecondaryInput) -> Option<Inference> {
    // explicit revia mugrash
    for i in input.from..=input.to {
        if input.tokens[i].is_word() && input.known(i, Taam::ReviaMugrash) {
            return Some(Inference::at(i, InferenceReason::ReviaMugrashExplicit, Taam::ReviaMugrash));
        }
    }

    // shalshelet gedola substitutes for it
    for i in input.from..=input.to {
        if input.tokens[i].is_word()
            && input.known(i, Taam::ShalsheletGedola)
            && input.local.tokens[i].observed.has_pasek_after
        {
            return Some(Inference::at(
                i,
                InferenceReason::ReviaMugrashSubShalsheletGedola,
                Taam::ReviaMugrash,
            ));
        }
    }

    // hidden near a short silluq: the word right before it
    let silluq_word = input.tokens[input.silluq_index].as_word()?;
    if matches!(syllables_to_taam_anchor(silluq_word, Taam::Silluq), Some(s) if s < 3) {
        let candidate = input.silluq_index.checked_sub(1)?;
        if candidate >= input.from
            && candidate <= input.to
            && input.tokens[candidate].is_word()
            && input.local.tokens[candidate].is_mesharet()
        {
            return Some(Inference::at(
                candidate,
                InferenceReason::ReviaMugrashHiddenNearSilluq,
                Taam::ReviaMugrash,
            ));
        }
    }

    None
}

fn infer_mahapakh_legarmeh(input: &SecondaryInput) -> Vec<Inference> {
    if !input.leader.map_or(false, |l| l.is_after_atnach) {
        return Vec::new();
    }

    let mut has_revia_mugrash = false;
    let mut has_shalshelet_gedola = false;
    let mut explicit_legarmeh: Option<usize> = None;

    for i in input.from..=input.to {
        if !input.open(i) {
            continue;
        }
        if input.known(i, Taam::ReviaMugrash) {
            has_revia_mugrash = true;
        }
        if input.known(i, Taam::ShalsheletGedola) {
            has_shalshelet_gedola = true;
        }
        if explicit_legarmeh.is_none() && input.known(i, Taam::MahapakhLegarmeh) {
            explicit_legarmeh = Some(i);
        }
    }

    // no mahapakh legarmeh after the atnach without a revia-mugrash
    // equivalent somewhere before the silluq
    if !has_revia_mugrash && !has_shalshelet_gedola {
        return Vec::new();
    }

    if let Some(i) = explicit_legarmeh {
        return vec![Inference::at(
            i,
            InferenceReason::MahapakhLegarmehAfterAtnach,
            Taam::MahapakhLegarmeh,
        )];
    }

    if has_shalshelet_gedola {
        let silluq = input.to;
        if let Some(i) = last_mesharet_before(input, input.from, silluq) {
            return vec![Inference::at(
                i,
                InferenceReason::MahapakhLegarmehSubShalsheletGedola,
                Taam::MahapakhLegarmeh,
            )];
        }
    }

    Vec::new()
}

/// Last open mesharet word in `[from, before)`, scanning backwards
fn last_mesharet_before(input: &SecondaryInput, from: usize, before: usize) -> Option<usize> {
    for i in (from..before).rev() {
        if input.open(i) && input.local.tokens[i].is_mesharet() {
            return Some(i);
        }
    }
    None
}

/// Keep only open word targets, one inference per index within a rule.
fn sanitize(infs: Vec<Inference>, input: &SecondaryInput) -> Vec<Inference> {
    let mut out: Vec<Inference> = Vec::new();
    for inf in infs {
        let Some(i) = inf.index else { continue };
        if !input.open(i) || out.iter().any(|x| x.index == inf.index) {
            continue;
        }
        out.push(inf);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::local::identify;
    use crate::text::normalize::normalize_text;
    use crate::text::tokenize::tokenize;

    struct Fixture {
        tokens: Vec<Token>,
        local: LocalResult,
        claims: ClaimTable,
    }

    fn setup(text: &str) -> Fixture {
        let tokens = tokenize(&normalize_text(text));
        let local = identify(&tokens);
        Fixture { tokens, local, claims: ClaimTable::new() }
    }

    fn input<'a>(
        f: &'a Fixture,
        from: usize,
        to: usize,
        leader: Option<PrimaryLeader>,
        ov: Option<usize>,
        silluq: usize,
    ) -> SecondaryInput<'a> {
        SecondaryInput {
            tokens: &f.tokens,
            local: &f.local,
            claims: &f.claims,
            from,
            to,
            leader,
            oleh_veyored_index: ov,
            silluq_index: silluq,
        }
    }

    #[test]
    fn test_explicit_dchi_in_atnach_span() {
        // dchi word, munach word, atnach word, silluq word
        let mut f = setup("ב\u{05AD}ג ד\u{05A3}ה ו\u{0591}ז ח\u{05B8}\u{05BD}\u{05C3}");
        f.claims.try_claim(2, crate::models::spans::Layer::Primary);
        let leader = PrimaryLeader { index: 2, taam: Taam::Atnach, is_after_atnach: false };
        let infs = infer_secondary(&input(&f, 0, 2, Some(leader), None, 3));
        assert_eq!(infs.len(), 1);
        assert_eq!(infs[0].index, Some(0));
        assert_eq!(infs[0].reason, InferenceReason::DchiExplicit);
    }

    #[test]
    fn test_hidden_dchi_when_atnach_word_is_short() {
        // munach word directly before a short atnach word
        let mut f = setup("ב\u{05A3}ג ד\u{05B8}\u{0591}ה ו\u{05B8}\u{05BD}\u{05C3}");
        f.claims.try_claim(1, crate::models::spans::Layer::Primary);
        let leader = PrimaryLeader { index: 1, taam: Taam::Atnach, is_after_atnach: false };
        let infs = infer_secondary(&input(&f, 0, 1, Some(leader), None, 2));
        assert_eq!(infs.len(), 1);
        assert_eq!(infs[0].index, Some(0));
        assert_eq!(infs[0].reason, InferenceReason::DchiHiddenNearAtnach);
        assert_eq!(infs[0].taam, Taam::Dchi);
    }

    #[test]
    fn test_revia_qatan_before_oleh_veyored() {
        // revia word immediately before the oleh-veyored word
        let mut f = setup("ב\u{0597}ג ד\u{05AB}ה\u{05A5}ו ז\u{05B8}\u{05BD}\u{05C3}");
        f.claims.try_claim(1, crate::models::spans::Layer::Primary);
        let infs = infer_secondary(&input(&f, 0, 1, None, Some(1), 2));
        assert_eq!(infs.len(), 1);
        assert_eq!(infs[0].index, Some(0));
        assert_eq!(infs[0].taam, Taam::ReviaQatan);
    }

    #[test]
    fn test_revia_gadol_elsewhere() {
        let f = setup("ב\u{0597}ג ד ה\u{05B8}\u{05BD}\u{05C3}");
        let infs = infer_secondary(&input(&f, 0, 1, None, None, 2));
        assert_eq!(infs.len(), 1);
        assert_eq!(infs[0].taam, Taam::ReviaGadol);
    }

    #[test]
    fn test_explicit_revia_mugrash_in_after_atnach_span() {
        // atnach, then revia-mugrash, then silluq
        let mut f = setup("ב\u{0591}ג ד\u{059D}ה\u{0597}ו ז\u{05B8}\u{05BD}\u{05C3}");
        f.claims.try_claim(0, crate::models::spans::Layer::Primary);
        let leader = PrimaryLeader { index: 0, taam: Taam::Atnach, is_after_atnach: true };
        let infs = infer_secondary(&input(&f, 1, 2, Some(leader), None, 2));
        assert_eq!(infs.len(), 1);
        assert_eq!(infs[0].index, Some(1));
        assert_eq!(infs[0].taam, Taam::ReviaMugrash);
        assert_eq!(infs[0].reason, InferenceReason::ReviaMugrashExplicit);
    }

    #[test]
    fn test_shalshelet_gedola_substitutes_and_promotes_legarmeh() {
        // atnach | shalshelet+pasek | munach | silluq
        let mut f =
            setup("ב\u{0591}ג ד\u{0593}ה \u{05C0} ו\u{05A3}ז ח\u{05B8}ט\u{05B8}\u{05BD}\u{05C3}");
        f.claims.try_claim(0, crate::models::spans::Layer::Primary);
        let leader = PrimaryLeader { index: 0, taam: Taam::Atnach, is_after_atnach: true };
        let infs = infer_secondary(&input(&f, 1, 4, Some(leader), None, 4));

        assert_eq!(infs.len(), 2);
        assert_eq!(infs[0].index, Some(1));
        assert_eq!(infs[0].taam, Taam::ReviaMugrash);
        assert_eq!(infs[0].reason, InferenceReason::ReviaMugrashSubShalsheletGedola);
        assert_eq!(infs[1].index, Some(3));
        assert_eq!(infs[1].taam, Taam::MahapakhLegarmeh);
        assert_eq!(infs[1].reason, InferenceReason::MahapakhLegarmehSubShalsheletGedola);
    }

    #[test]
    fn test_legarmeh_guard_requires_mugrash_equivalent() {
        // mahapakh legarmeh after the atnach but no revia mugrash anywhere
        let mut f = setup("ב\u{0591}ג ד\u{05A4}ה \u{05C0} ו\u{05B8}ר\u{05B8}\u{05BD}\u{05C3}");
        f.claims.try_claim(0, crate::models::spans::Layer::Primary);
        let leader = PrimaryLeader { index: 0, taam: Taam::Atnach, is_after_atnach: true };
        let infs = infer_secondary(&input(&f, 1, 3, Some(leader), None, 3));
        assert!(infs.iter().all(|inf| inf.taam != Taam::MahapakhLegarmeh));
    }

    #[test]
    fn test_hidden_revia_mugrash_near_short_silluq() {
        // atnach | munach | short silluq word
        let mut f = setup("ב\u{0591}ג ד\u{05A3}ה ו\u{05B8}\u{05BD}ז\u{05C3}");
        f.claims.try_claim(0, crate::models::spans::Layer::Primary);
        let leader = PrimaryLeader { index: 0, taam: Taam::Atnach, is_after_atnach: true };
        let infs = infer_secondary(&input(&f, 1, 2, Some(leader), None, 2));
        assert_eq!(infs.len(), 1);
        assert_eq!(infs[0].index, Some(1));
        assert_eq!(infs[0].taam, Taam::ReviaMugrash);
        assert_eq!(infs[0].reason, InferenceReason::ReviaMugrashHiddenNearSilluq);
    }
}
