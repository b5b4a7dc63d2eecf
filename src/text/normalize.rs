//! Verse text normalization
//!
//! Canonicalizes combining-character order (NFC), collapses whitespace and
//! rewrites the ASCII `|`/`:` shorthand found in copied texts to the
//! canonical pasek / sof pasuq characters, padded with spaces so the
//! tokenizer sees them as standalone tokens. Normalization is idempotent.

use unicode_normalization::UnicodeNormalization;

use super::unicode::{PASEK, SOF_PASUQ};

/// Normalize raw verse text into the canonical, space-delimited form
/// expected by [`tokenize`](super::tokenize::tokenize).
pub fn normalize_text(input: &str) -> String {
    let composed: String = input.nfc().collect();

    // accept ASCII alternates from copied texts
    let mut s = composed
        .replace("\r\n", "\n")
        .replace('|', &PASEK.to_string())
        .replace(':', &SOF_PASUQ.to_string());

    // pad punctuation so it splits into standalone tokens
    s = s
        .replace(PASEK, &format!(" {} ", PASEK))
        .replace(SOF_PASUQ, &format!(" {} ", SOF_PASUQ));

    collapse_whitespace(&s)
}

/// Collapse every whitespace run to a single space and trim the ends.
fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_space = false;

    for ch in s.chars() {
        if ch.is_whitespace() {
            in_space = true;
            continue;
        }
        if in_space && !out.is_empty() {
            out.push(' ');
        }
        in_space = false;
        out.push(ch);
    }

    out
}
