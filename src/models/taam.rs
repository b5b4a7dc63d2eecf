//! The taam enumeration and its fixed metadata
//!
//! Every taam maps to a fixed Hebrew display name and grammatical role.
//! The role is a property of the taam, never of its context: context only
//! decides *which* taam a glyph realizes (e.g. qadma vs. azla legarmeh).

use serde::{Deserialize, Serialize};

/// Grammatical role of a taam
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Conjunctive: links a word to its successor
    Mesharet,
    /// Disjunctive: marks a syntactic break
    Mafsik,
}

/// Semantic accent categories
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Taam {
    Silluq,
    Atnach,
    OlehVeyored,
    Pazer,
    Revia,
    ReviaMugrash,
    ReviaQatan,
    ReviaGadol,
    Tsinor,
    Tsinorit,
    Dchi,
    MahapakhLegarmeh,
    AzlaLegarmeh,
    Qadma,
    Mahapakh,
    Mercha,
    Munach,
    Tipcha,
    Iluy,
    Galgal,
    ShalsheletGedola,
    ShalsheletKetana,
    Unknown,
}

impl Taam {
    /// Hebrew display name
    pub fn heb_name(&self) -> &'static str {
        match self {
            Taam::Silluq => "סילוק",
            Taam::Atnach => "אתנח",
            Taam::OlehVeyored => "עולה ויורד",
            Taam::Pazer => "פזר",
            Taam::Revia => "רביע",
            Taam::ReviaMugrash => "רביע מוגרש",
            Taam::ReviaQatan => "רביע קטן",
            Taam::ReviaGadol => "רביע גדול",
            Taam::Tsinor => "צינור",
            Taam::Tsinorit => "צינורית",
            Taam::Dchi => "דחי",
            Taam::MahapakhLegarmeh => "מהפך לגרמיה",
            Taam::AzlaLegarmeh => "אזלא לגרמיה",
            Taam::Qadma => "קדמא",
            Taam::Mahapakh => "מהפך",
            Taam::Mercha => "מירכא",
            Taam::Munach => "מונח",
            Taam::Tipcha => "טיפחא",
            Taam::Iluy => "עילוי",
            Taam::Galgal => "גלגל",
            Taam::ShalsheletGedola => "שלשלת גדולה",
            Taam::ShalsheletKetana => "שלשלת קטנה",
            Taam::Unknown => "לא מזוהה",
        }
    }

    /// Fixed grammatical role, never contextual
    pub fn role(&self) -> Role {
        match self {
            Taam::Silluq
            | Taam::Atnach
            | Taam::OlehVeyored
            | Taam::Pazer
            | Taam::Revia
            | Taam::ReviaMugrash
            | Taam::ReviaQatan
            | Taam::ReviaGadol
            | Taam::Tsinor
            | Taam::Dchi
            | Taam::MahapakhLegarmeh
            | Taam::AzlaLegarmeh
            | Taam::ShalsheletGedola => Role::Mafsik,

            Taam::Tsinorit
            | Taam::Qadma
            | Taam::Mahapakh
            | Taam::Mercha
            | Taam::Munach
            | Taam::Tipcha
            | Taam::Iluy
            | Taam::Galgal
            | Taam::ShalsheletKetana
            | Taam::Unknown => Role::Mesharet,
        }
    }

    pub fn is_mafsik(&self) -> bool {
        self.role() == Role::Mafsik
    }

    pub fn is_mesharet(&self) -> bool {
        self.role() == Role::Mesharet
    }

    /// All taam values, for table construction and validation
    pub fn all() -> &'static [Taam] {
        &[
            Taam::Silluq,
            Taam::Atnach,
            Taam::OlehVeyored,
            Taam::Pazer,
            Taam::Revia,
            Taam::ReviaMugrash,
            Taam::ReviaQatan,
            Taam::ReviaGadol,
            Taam::Tsinor,
            Taam::Tsinorit,
            Taam::Dchi,
            Taam::MahapakhLegarmeh,
            Taam::AzlaLegarmeh,
            Taam::Qadma,
            Taam::Mahapakh,
            Taam::Mercha,
            Taam::Munach,
            Taam::Tipcha,
            Taam::Iluy,
            Taam::Galgal,
            Taam::ShalsheletGedola,
            Taam::ShalsheletKetana,
            Taam::Unknown,
        ]
    }
}
