//! Static glyph registry
//!
//! Two constant tables drive the whole identification pipeline:
//! codepoint → glyph key, and taam → rendering glyph keys. A codepoint
//! outside the registry is not an error — it is carried forward as an
//! unclassified mark for diagnostics. A taam whose rendering key has no
//! registered codepoint is a broken table: construction fails before any
//! analysis can run, the only fatal condition in the crate.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::taam::Taam;

/// A rendered accent shape, independent of its grammatical classification.
/// One glyph can realize different taam values by context (e.g. the qadma
/// glyph realizes both QADMA and AZLA_LEGARMEH).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GlyphKey {
    Atnach,
    Shalshelet,
    Tipcha,
    Revia,
    /// The geresh-muqdam sign ֝ forming the revia-mugrash pattern
    Mugrash,
    Pazer,
    Munach,
    Mahapakh,
    /// ֥ — yored below the word, mercha by context
    Yored,
    Qadma,
    Galgal,
    /// ֫ — the ole partner of oleh-veyored
    Ole,
    Iluy,
    Dchi,
    /// ֮ — tsinor on the last letter, tsinorit elsewhere
    Tsinor,
}

/// codepoint → glyph key
const GLYPH_CODEPOINTS: &[(char, GlyphKey)] = &[
    ('\u{0591}', GlyphKey::Atnach),
    ('\u{0593}', GlyphKey::Shalshelet),
    ('\u{0596}', GlyphKey::Tipcha),
    ('\u{0597}', GlyphKey::Revia),
    ('\u{059D}', GlyphKey::Mugrash),
    ('\u{05A1}', GlyphKey::Pazer),
    ('\u{05A3}', GlyphKey::Munach),
    ('\u{05A4}', GlyphKey::Mahapakh),
    ('\u{05A5}', GlyphKey::Yored),
    ('\u{05A8}', GlyphKey::Qadma),
    ('\u{05AA}', GlyphKey::Galgal),
    ('\u{05AB}', GlyphKey::Ole),
    ('\u{05AC}', GlyphKey::Iluy),
    ('\u{05AD}', GlyphKey::Dchi),
    ('\u{05AE}', GlyphKey::Tsinor),
];

/// taam → rendering glyph keys. Silluq renders through the meteg niqqud
/// and owns no accent glyph; UNKNOWN renders nothing.
const TAAM_RENDERINGS: &[(Taam, &[GlyphKey])] = &[
    (Taam::Silluq, &[]),
    (Taam::Atnach, &[GlyphKey::Atnach]),
    (Taam::OlehVeyored, &[GlyphKey::Ole, GlyphKey::Yored]),
    (Taam::Pazer, &[GlyphKey::Pazer]),
    (Taam::Revia, &[GlyphKey::Revia]),
    (Taam::ReviaMugrash, &[GlyphKey::Revia, GlyphKey::Mugrash]),
    (Taam::ReviaQatan, &[GlyphKey::Revia]),
    (Taam::ReviaGadol, &[GlyphKey::Revia]),
    (Taam::Tsinor, &[GlyphKey::Tsinor]),
    (Taam::Tsinorit, &[GlyphKey::Tsinor]),
    (Taam::Dchi, &[GlyphKey::Dchi]),
    (Taam::MahapakhLegarmeh, &[GlyphKey::Mahapakh]),
    (Taam::AzlaLegarmeh, &[GlyphKey::Qadma]),
    (Taam::Qadma, &[GlyphKey::Qadma]),
    (Taam::Mahapakh, &[GlyphKey::Mahapakh]),
    (Taam::Mercha, &[GlyphKey::Yored]),
    (Taam::Munach, &[GlyphKey::Munach]),
    (Taam::Tipcha, &[GlyphKey::Tipcha]),
    (Taam::Iluy, &[GlyphKey::Iluy]),
    (Taam::Galgal, &[GlyphKey::Galgal]),
    (Taam::ShalsheletGedola, &[GlyphKey::Shalshelet]),
    (Taam::ShalsheletKetana, &[GlyphKey::Shalshelet]),
    (Taam::Unknown, &[]),
];

/// Broken static tables. Raised at registry construction, before any
/// analysis runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("taam {taam:?} renders through glyph key {key:?} which has no registered codepoint")]
    UnregisteredRenderingKey { taam: Taam, key: GlyphKey },

    #[error("taam {taam:?} has no rendering entry")]
    MissingTaam { taam: Taam },
}

/// The constructed registry with both lookup directions.
#[derive(Debug, Clone)]
pub struct Registry {
    glyph_by_codepoint: HashMap<char, GlyphKey>,
    codepoints_by_glyph: HashMap<GlyphKey, Vec<char>>,
    renderings: HashMap<Taam, &'static [GlyphKey]>,
}

impl Registry {
    /// Build and validate the registry from the constant tables.
    pub fn build() -> Result<Self, RegistryError> {
        Self::from_tables(GLYPH_CODEPOINTS, TAAM_RENDERINGS)
    }

    /// Build from explicit tables, validating that every rendering glyph
    /// key resolves to at least one codepoint and every taam has an entry.
    fn from_tables(
        glyphs: &[(char, GlyphKey)],
        taam_renderings: &[(Taam, &'static [GlyphKey])],
    ) -> Result<Self, RegistryError> {
        let mut glyph_by_codepoint = HashMap::new();
        let mut codepoints_by_glyph: HashMap<GlyphKey, Vec<char>> = HashMap::new();

        for &(cp, key) in glyphs {
            glyph_by_codepoint.insert(cp, key);
            codepoints_by_glyph.entry(key).or_default().push(cp);
        }

        let mut renderings = HashMap::new();
        for &(taam, keys) in taam_renderings {
            for &key in keys {
                if !codepoints_by_glyph.contains_key(&key) {
                    return Err(RegistryError::UnregisteredRenderingKey { taam, key });
                }
            }
            renderings.insert(taam, keys);
        }

        for &taam in Taam::all() {
            if !renderings.contains_key(&taam) {
                return Err(RegistryError::MissingTaam { taam });
            }
        }

        Ok(Self { glyph_by_codepoint, codepoints_by_glyph, renderings })
    }

    /// Glyph key for an accent codepoint, if registered
    pub fn glyph_key(&self, ch: char) -> Option<GlyphKey> {
        self.glyph_by_codepoint.get(&ch).copied()
    }

    /// Registered codepoints realizing a glyph key
    pub fn codepoints(&self, key: GlyphKey) -> &[char] {
        self.codepoints_by_glyph.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Rendering glyph keys of a taam
    pub fn rendering_keys(&self, taam: Taam) -> &'static [GlyphKey] {
        self.renderings.get(&taam).copied().unwrap_or(&[])
    }
}

static REGISTRY: Lazy<Registry> = Lazy::new(|| {
    Registry::build().unwrap_or_else(|e| panic!("taam registry misconfigured: {e}"))
});

/// The process-wide registry. First access aborts on a broken table.
pub fn registry() -> &'static Registry {
    &REGISTRY
}
