use super::trie::KanaTrie;
use super::Transliterator;
use crate::unicode::{fullwidth_to_ascii, katakana_to_hiragana};

/// Kana → Hepburn romaji rendering backed by the global [`KanaTrie`].
///
/// Characters without a reading (kanji, ASCII, other scripts) are passed
/// through as their own fragment; placeholder generation deals with them.
pub struct KanaTransliterator {
    trie: &'static KanaTrie,
}

impl KanaTransliterator {
    pub fn new() -> Self {
        Self {
            trie: KanaTrie::global(),
        }
    }

    pub fn with_trie(trie: &'static KanaTrie) -> Self {
        Self { trie }
    }

    /// Consonant doubled by a sokuon in front of `rest`.
    /// "っち" renders as "tchi", so a following "ch" takes a "t".
    fn geminate(&self, rest: &[char]) -> Option<String> {
        let (_, romaji) = self.trie.longest_match(rest)?;
        if romaji.starts_with("ch") {
            return Some("t".to_string());
        }
        let first = romaji.chars().next()?;
        if first.is_ascii_alphabetic() && !is_vowel(first) && first != 'n' {
            Some(first.to_string())
        } else {
            None
        }
    }
}

impl Default for KanaTransliterator {
    fn default() -> Self {
        Self::new()
    }
}

impl Transliterator for KanaTransliterator {
    fn transliterate(&self, token: &str) -> Vec<String> {
        let original: Vec<char> = token.chars().collect();
        let folded: Vec<char> = katakana_to_hiragana(token).chars().collect();

        let mut fragments: Vec<String> = Vec::with_capacity(folded.len());
        // Index of the most recent fragment that came from the kana table.
        let mut last_kana: Option<usize> = None;
        let mut i = 0;

        while i < folded.len() {
            let c = folded[i];

            if c == 'っ' {
                if let Some(g) = self.geminate(&folded[i + 1..]) {
                    fragments.push(g);
                    i += 1;
                    continue;
                }
            }

            if c == 'ー' {
                let vowel = fragments
                    .last()
                    .and_then(|f| f.chars().last())
                    .filter(|&v| is_vowel(v));
                fragments.push(match vowel {
                    Some(v) => v.to_string(),
                    None => "-".to_string(),
                });
                i += 1;
                continue;
            }

            // Iteration marks ゝゞ (and ヽヾ, folded above)
            if c == 'ゝ' || c == 'ゞ' {
                let repeated = last_kana.map(|idx| fragments[idx].clone());
                fragments.push(repeated.unwrap_or_else(|| original[i].to_string()));
                i += 1;
                continue;
            }

            if let Some((len, romaji)) = self.trie.longest_match(&folded[i..]) {
                fragments.push(romaji.to_string());
                last_kana = Some(fragments.len() - 1);
                i += len;
                continue;
            }

            if let Some(ascii) = fullwidth_to_ascii(c) {
                fragments.push(ascii.to_string());
            } else if let Some(sym) = symbol(c) {
                if !sym.is_empty() {
                    fragments.push(sym.to_string());
                }
            } else {
                fragments.push(original[i].to_string());
            }
            i += 1;
        }

        fragments
    }
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Japanese punctuation with an ASCII rendering. Brackets render to nothing.
fn symbol(c: char) -> Option<&'static str> {
    match c {
        '、' => Some(","),
        '。' => Some("."),
        '・' => Some("-"),
        '〜' => Some("~"),
        '「' | '」' | '『' | '』' | '【' | '】' | '〈' | '〉' | '《' | '》' => Some(""),
        _ => None,
    }
}
