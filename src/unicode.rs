//! Character-level Unicode classification for Japanese text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Fold a katakana character to its hiragana counterpart.
///
/// Only ァ..ヶ (U+30A1..U+30F6) and the iteration marks ヽヾ have one; ー,
/// ヷ..ヺ and non-katakana characters are returned unchanged.
pub fn katakana_to_hiragana_char(c: char) -> char {
    match c {
        '\u{30A1}'..='\u{30F6}' | '\u{30FD}' | '\u{30FE}' => {
            char::from_u32(c as u32 - 0x60).unwrap_or(c)
        }
        _ => c,
    }
}

/// Convert a katakana string to hiragana, one char for one char.
/// Non-katakana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(katakana_to_hiragana_char).collect()
}

/// Map a full-width ASCII variant (U+FF01..U+FF5E) or the ideographic
/// space (U+3000) to its ASCII equivalent.
pub fn fullwidth_to_ascii(c: char) -> Option<char> {
    match c {
        '\u{3000}' => Some(' '),
        '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - 0xFEE0),
        _ => None,
    }
}
