//! Inference records produced by the role-layer engine
//!
//! An inference proposes an effective classification for one token. The
//! reason code says how the engine arrived at it: an explicit glyph, a
//! related glyph substituting for the expected one, or a hidden accent
//! implied by the short-word syllable rules.

use serde::{Deserialize, Serialize};

use super::taam::Taam;

/// How an effective classification came to be
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InferenceReason {
    /// The locally identified taam, untouched
    Original,

    AtnachExplicit,
    AtnachSubReviaNearEnd,
    AtnachSubPazer,
    AtnachHiddenNearSilluq,

    OlehVeyoredExplicit,
    OlehVeyoredSubAzlaLegarmehFirst,

    DchiExplicit,
    DchiHiddenNearAtnach,

    ReviaMugrashExplicit,
    ReviaMugrashSubShalsheletGedola,
    ReviaMugrashHiddenNearSilluq,

    MahapakhLegarmehAfterAtnach,
    MahapakhLegarmehSubShalsheletGedola,
}

impl InferenceReason {
    /// Human-readable reason, as shown in the UI
    pub fn text(&self) -> &'static str {
        match self {
            InferenceReason::Original => "הטעם המקורי",

            InferenceReason::AtnachExplicit => "אתנח מפורש",
            InferenceReason::AtnachSubReviaNearEnd => {
                "אין אתנח מפורש; רביע סמוך לסילוק מתפקד כאתנח"
            }
            InferenceReason::AtnachSubPazer => "אין אתנח/רביע סמוך; פזר מתפקד כאתנח",
            InferenceReason::AtnachHiddenNearSilluq => {
                "אתנח נסתר: פחות מ-3 הברות עד סילוק → המשרת האחרון לפני הסילוק"
            }

            InferenceReason::OlehVeyoredExplicit => "עולה־ויורד מפורש",
            InferenceReason::OlehVeyoredSubAzlaLegarmehFirst => {
                "עולה־ויורד חסר; אזלא לגרמיה בתחילת הפסוק מתפקד כעולה־ויורד"
            }

            InferenceReason::DchiExplicit => "דחי מפורש",
            InferenceReason::DchiHiddenNearAtnach => {
                "דחי נסתר: עד 3 הברות עד האתנח → המשרת האחרון לפני האתנח"
            }

            InferenceReason::ReviaMugrashExplicit => "רביע מוגרש מפורש",
            InferenceReason::ReviaMugrashSubShalsheletGedola => {
                "שלשלת גדולה במקום רביע מוגרש לפני הסילוק"
            }
            InferenceReason::ReviaMugrashHiddenNearSilluq => {
                "רביע מוגרש נסתר: פחות מ-3 הברות עד סילוק → המשרת האחרון לפני הסילוק"
            }

            InferenceReason::MahapakhLegarmehAfterAtnach => {
                "מהפך לגרמיה אחרי אתנח, בזכות רביע מוגרש בתחום"
            }
            InferenceReason::MahapakhLegarmehSubShalsheletGedola => {
                "מהפך לגרמיה: שלשלת גדולה ממלאת את תפקיד הרביע המוגרש → המשרת האחרון לפני הסילוק"
            }
        }
    }
}

/// A proposed classification at the verse level
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Inference {
    /// Target token index; `None` means "no override"
    pub index: Option<usize>,

    pub reason: InferenceReason,

    /// The taam the target behaves as
    pub taam: Taam,
}

impl Inference {
    pub fn at(index: usize, reason: InferenceReason, taam: Taam) -> Self {
        Self { index: Some(index), reason, taam }
    }
}
