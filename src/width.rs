//! East-Asian width classification.
//!
//! Placeholder generation replaces every wide character with filler, so
//! anything that takes two columns in a CJK terminal counts as wide:
//! the Wide and Fullwidth categories plus the Ambiguous ones.

use unicode_width::UnicodeWidthChar;

/// Display width class of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Wide,
    Narrow,
}

/// Classify a character by its display width in an East-Asian context.
///
/// Zero-width characters and anything without a defined width are `Narrow`.
pub fn classify(c: char) -> Width {
    match c.width_cjk() {
        Some(w) if w >= 2 => Width::Wide,
        _ => Width::Narrow,
    }
}

pub fn is_wide(c: char) -> bool {
    classify(c) == Width::Wide
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_narrow() {
        for c in ['a', 'Z', '0', ' ', '-', '_', '~'] {
            assert_eq!(classify(c), Width::Narrow, "{c:?}");
        }
    }

    #[test]
    fn cjk_is_wide() {
        for c in ['あ', 'ア', '漢', 'ー', '「', '。'] {
            assert_eq!(classify(c), Width::Wide, "{c:?}");
        }
    }

    #[test]
    fn fullwidth_latin_is_wide() {
        assert!(is_wide('Ａ'));
        assert!(is_wide('！'));
        assert!(is_wide('\u{3000}'));
    }

    #[test]
    fn halfwidth_katakana_is_narrow() {
        assert!(!is_wide('ｱ'));
    }

    #[test]
    fn ambiguous_is_wide() {
        // Greek and box drawing are Ambiguous: two columns in CJK context.
        assert!(is_wide('α'));
        assert!(is_wide('─'));
    }

    #[test]
    fn zero_width_is_narrow() {
        assert!(!is_wide('\u{200B}'));
    }
}
