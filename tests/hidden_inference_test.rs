//! Inference-chain scenarios
//!
//! Exercises the substitution and hidden rules of the role-layer engine:
//! implicit atnach, oleh-veyored substitution, the revia family, the
//! after-atnach mugrash chain and the tertiary legarmeh anchors.

use taamim_wasm::analysis::analyze;
use taamim_wasm::models::inference::InferenceReason;
use taamim_wasm::models::spans::Layer;
use taamim_wasm::models::taam::{Role, Taam};

#[test]
fn test_hidden_atnach_near_short_silluq() {
    // no explicit atnach, no revia near the end, no pazer; the final word
    // has two syllables up to its silluq meteg, so the munach before it
    // is promoted to a hidden atnach
    let r = analyze("ב\u{05A3}ג ד\u{05B8}ב\u{05B8}\u{05BD}ר\u{05C3}");

    assert_eq!(r.debug.atnach_index, Some(0));
    let promoted = &r.taamim[0];
    assert_eq!(promoted.identified.as_ref().unwrap().taam, Taam::Munach);
    assert_eq!(promoted.effective.taam, Taam::Atnach);
    assert_eq!(promoted.effective.role, Role::Mafsik);
    assert_eq!(promoted.effective.reason, InferenceReason::AtnachHiddenNearSilluq);
    assert!(!promoted.effective.reason_text.is_empty());
}

#[test]
fn test_long_final_word_keeps_hidden_atnach_off() {
    // three syllables to the silluq: nothing is promoted
    let r = analyze("ב\u{05A3}ג ד\u{05B8}ב\u{05B8}ר\u{05B8}\u{05BD}ש\u{05C3}");
    assert_eq!(r.debug.atnach_index, None);
    assert_eq!(r.taamim[0].effective.taam, Taam::Munach);
}

#[test]
fn test_revia_near_end_acts_as_atnach() {
    let r = analyze("ב\u{0597}ג ד ה\u{05B8}\u{05BD}ו\u{05C3}");
    assert_eq!(r.debug.atnach_index, Some(0));
    assert_eq!(r.taamim[0].effective.taam, Taam::Atnach);
    assert_eq!(r.taamim[0].effective.reason, InferenceReason::AtnachSubReviaNearEnd);
}

#[test]
fn test_pazer_acts_as_atnach_when_nothing_closer() {
    let r = analyze("ב\u{05A1}ג ד ה ו ז\u{05B8}\u{05B7}\u{05B4}\u{05BD}\u{05C3}");
    assert_eq!(r.debug.atnach_index, Some(0));
    assert_eq!(r.taamim[0].effective.reason, InferenceReason::AtnachSubPazer);
}

#[test]
fn test_azla_legarmeh_opening_substitutes_for_oleh_veyored() {
    let r = analyze("ב\u{05A8}ג \u{05C0} ד\u{0591}ה ו\u{05B8}ז\u{05B8}ח\u{05B8}\u{05BD}\u{05C3}");

    assert_eq!(r.debug.oleh_veyored_index, Some(0));
    assert_eq!(r.debug.atnach_index, Some(2));
    assert_eq!(r.taamim[0].effective.taam, Taam::OlehVeyored);
    assert_eq!(
        r.taamim[0].effective.reason,
        InferenceReason::OlehVeyoredSubAzlaLegarmehFirst
    );
}

#[test]
fn test_revia_qatan_immediately_before_oleh_veyored() {
    // revia | oleh-veyored | atnach | silluq
    let r = analyze(
        "ב\u{0597}ג ד\u{05AB}ה\u{05A5}ו ז\u{0591}ח ט\u{05B8}י\u{05B8}כ\u{05B8}\u{05BD}\u{05C3}",
    );

    assert_eq!(r.debug.oleh_veyored_index, Some(1));
    assert_eq!(r.taamim[0].effective.taam, Taam::ReviaQatan);

    // a revia elsewhere in the verse resolves to the gadol variant
    let far = analyze(
        "ב\u{0597}ג ד ה\u{05AB}ו\u{05A5}ז ח\u{0591}ט י\u{05B8}כ\u{05B8}ל\u{05B8}\u{05BD}\u{05C3}",
    );
    assert_eq!(far.debug.oleh_veyored_index, Some(2));
    assert_eq!(far.taamim[0].effective.taam, Taam::ReviaGadol);
}

#[test]
fn test_explicit_revia_mugrash_after_atnach() {
    let r = analyze("ב\u{0591}ג ד\u{059D}ה\u{0597}ו ז\u{05B8}ח\u{05B8}ט\u{05B8}\u{05BD}\u{05C3}");

    assert_eq!(r.debug.atnach_index, Some(0));
    assert_eq!(r.taamim[1].effective.taam, Taam::ReviaMugrash);
    assert_eq!(r.taamim[1].effective.reason, InferenceReason::ReviaMugrashExplicit);

    // claimed by the secondary layer inside the after-atnach span
    let claim = r.debug.claims.iter().find(|c| c.index == 1).unwrap();
    assert_eq!(claim.layer, Layer::Secondary);
}

#[test]
fn test_shalshelet_gedola_realizes_mugrash_and_promotes_legarmeh() {
    // atnach | shalshelet gedola | munach | silluq
    let r = analyze(
        "ב\u{0591}ג ד\u{0593}ה \u{05C0} ו\u{05A3}ז ח\u{05B8}ט\u{05B8}\u{05BD}\u{05C3}",
    );

    // the shalshelet takes the revia-mugrash role
    assert_eq!(r.taamim[1].identified.as_ref().unwrap().taam, Taam::ShalsheletGedola);
    assert_eq!(r.taamim[1].effective.taam, Taam::ReviaMugrash);
    assert_eq!(
        r.taamim[1].effective.reason,
        InferenceReason::ReviaMugrashSubShalsheletGedola
    );

    // and the last mesharet before the silluq becomes mahapakh legarmeh
    assert_eq!(r.taamim[3].identified.as_ref().unwrap().taam, Taam::Munach);
    assert_eq!(r.taamim[3].effective.taam, Taam::MahapakhLegarmeh);
    assert_eq!(
        r.taamim[3].effective.reason,
        InferenceReason::MahapakhLegarmehSubShalsheletGedola
    );
}

#[test]
fn test_mahapakh_legarmeh_after_atnach_needs_mugrash_guard() {
    // mahapakh legarmeh after the atnach, but no revia-mugrash equivalent
    // in the span: the promotion must not fire and the word keeps its
    // locally identified classification
    let r = analyze(
        "ב\u{0591}ג ד\u{0597}ה ו\u{05A4}ז \u{05C0} ח\u{05B8}ט\u{05B8}י\u{05B8}\u{05BD}\u{05C3}",
    );

    assert_eq!(r.taamim[2].identified.as_ref().unwrap().taam, Taam::MahapakhLegarmeh);
    assert_eq!(r.taamim[2].effective.taam, Taam::MahapakhLegarmeh);
    assert_eq!(r.taamim[2].effective.reason, InferenceReason::Original);
}

#[test]
fn test_explicit_mahapakh_legarmeh_with_mugrash_in_span() {
    // atnach | revia mugrash | mahapakh legarmeh | silluq
    let r = analyze(
        "ב\u{0591}ג ד\u{059D}ה\u{0597}ו ז\u{05A4}ח \u{05C0} ט\u{05B8}י\u{05B8}כ\u{05B8}\u{05BD}\u{05C3}",
    );

    assert_eq!(r.taamim[2].effective.taam, Taam::MahapakhLegarmeh);
    assert_eq!(r.taamim[2].effective.reason, InferenceReason::MahapakhLegarmehAfterAtnach);
}

#[test]
fn test_hidden_dchi_before_short_atnach_word() {
    // munach directly before an atnach word with one syllable to its glyph
    let r = analyze("ב\u{05A3}ג ד\u{0591}ה ו\u{05B8}ז\u{05B8}ח\u{05B8}\u{05BD}\u{05C3}");

    assert_eq!(r.debug.atnach_index, Some(1));
    assert_eq!(r.taamim[0].effective.taam, Taam::Dchi);
    assert_eq!(r.taamim[0].effective.reason, InferenceReason::DchiHiddenNearAtnach);

    let claim = r.debug.claims.iter().find(|c| c.index == 0).unwrap();
    assert_eq!(claim.layer, Layer::Secondary);
}

#[test]
fn test_explicit_dchi_wins_over_hidden() {
    // dchi glyph inside the atnach domain
    let r = analyze("ב\u{05AD}ג ד\u{05A3}ה ו\u{0591}ז ח\u{05B8}ט\u{05B8}י\u{05B8}\u{05BD}\u{05C3}");

    assert_eq!(r.taamim[0].effective.taam, Taam::Dchi);
    assert_eq!(r.taamim[0].effective.reason, InferenceReason::DchiExplicit);
    // the munach stays untouched
    assert_eq!(r.taamim[1].effective.taam, Taam::Munach);
}

#[test]
fn test_tsinor_anchors_secondary_layer() {
    // tsinor on the last letter inside the atnach domain
    let r = analyze("בג\u{05AE} ד\u{05A3}ה ו\u{0591}ז ח\u{05B8}ט\u{05B8}י\u{05B8}\u{05BD}\u{05C3}");

    assert_eq!(r.taamim[0].effective.taam, Taam::Tsinor);
    let claim = r.debug.claims.iter().find(|c| c.index == 0).unwrap();
    assert_eq!(claim.layer, Layer::Secondary);
}

#[test]
fn test_tertiary_pazer_inside_secondary_span() {
    // pazer | munach | revia | atnach | long silluq word: the revia
    // anchors a secondary span whose range still contains the pazer
    let r = analyze(
        "ב\u{05A1}ג ד\u{05A3}ה ו\u{0597}ז ח\u{0591}ט י\u{05B8}כ\u{05B8}ל\u{05B8}\u{05BD}\u{05C3}",
    );

    assert_eq!(r.debug.atnach_index, Some(3));
    // revia resolves as a secondary anchor
    assert_eq!(r.taamim[2].effective.taam, Taam::ReviaGadol);
    // pazer keeps its tertiary claim inside the revia span
    let claim = r.debug.claims.iter().find(|c| c.index == 0).unwrap();
    assert_eq!(claim.layer, Layer::Tertiary);
    assert_eq!(r.taamim[0].effective.taam, Taam::Pazer);
}
