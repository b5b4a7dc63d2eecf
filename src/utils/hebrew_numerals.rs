//! Hebrew numeral (gematria) formatting
//!
//! Used for chapter and verse labels: 1 = "א׳", 11 = "י״א", 15 = "ט״ו",
//! 116 = "קט״ז". The 15/16 combinations avoid spelling the divine name.

const ONES: [&str; 10] = ["", "א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"];
const TENS: [&str; 10] = ["", "י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"];
const HUNDREDS: [&str; 5] = ["", "ק", "ר", "ש", "ת"]; // 100..400

const GERESH: char = '\u{05F3}';
const GERSHAYIM: char = '\u{05F4}';

/// Format a positive number as a Hebrew numeral. Zero formats as plain
/// decimal (no gematria form exists).
pub fn to_hebrew_numeral(n: u32) -> String {
    if n == 0 {
        return n.to_string();
    }

    let mut x = n;
    let mut out = String::new();

    // 400 and above: repeated tav
    while x >= 400 {
        out.push_str("ת");
        x -= 400;
    }

    if x >= 100 {
        out.push_str(HUNDREDS[(x / 100) as usize]);
        x %= 100;
    }

    // special cases 15/16: tet-vav / tet-zayin
    if x == 15 {
        out.push_str("טו");
        x = 0;
    } else if x == 16 {
        out.push_str("טז");
        x = 0;
    }

    if x >= 10 {
        out.push_str(TENS[(x / 10) as usize]);
        x %= 10;
    }

    if x > 0 {
        out.push_str(ONES[x as usize]);
    }

    // geresh after a single letter, gershayim before the last otherwise
    let count = out.chars().count();
    if count == 1 {
        out.push(GERESH);
        return out;
    }

    let last = out.pop().unwrap_or_default();
    out.push(GERSHAYIM);
    out.push(last);
    out
}
