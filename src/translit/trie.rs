use std::collections::BTreeMap;
use std::sync::OnceLock;

use lexime_trie::DoubleArray;

use super::config::{parse_table_toml, TableConfigError};
use super::table::DEFAULT_TOML;

static GLOBAL: OnceLock<KanaTrie> = OnceLock::new();

/// Double-array trie over the UTF-8 bytes of hiragana keys, used for
/// longest-match rendering.
pub struct KanaTrie {
    da: DoubleArray<u8>,
    values: Vec<String>,
    /// Longest key in chars; bounds the bytes handed to a prefix search.
    max_key_chars: usize,
}

impl KanaTrie {
    /// Build the process-wide table from `toml_content`. Has to happen before
    /// the first [`KanaTrie::global`] call.
    pub fn init_custom(toml_content: &str) -> Result<(), TableConfigError> {
        let trie = Self::from_map(&parse_table_toml(toml_content)?);
        GLOBAL
            .set(trie)
            .map_err(|_| TableConfigError::AlreadyInitialized)
    }

    /// Process-wide table; the embedded default unless a custom one was
    /// installed.
    pub fn global() -> &'static KanaTrie {
        GLOBAL.get_or_init(|| {
            let map = parse_table_toml(DEFAULT_TOML).expect("embedded kana table is valid");
            Self::from_map(&map)
        })
    }

    /// Build a standalone trie from a parsed table.
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        // BTreeMap<String, _> iterates in byte order, which the build needs.
        let keys: Vec<&[u8]> = map.keys().map(|k| k.as_bytes()).collect();
        let values: Vec<String> = map.values().cloned().collect();
        let max_key_chars = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        KanaTrie {
            da: DoubleArray::<u8>::build(&keys),
            values,
            max_key_chars,
        }
    }

    /// Exact lookup of a kana sequence.
    pub fn get(&self, kana: &str) -> Option<&str> {
        if kana.is_empty() {
            return None;
        }
        let id = self.da.probe(kana.as_bytes()).value?;
        self.values.get(id as usize).map(String::as_str)
    }

    /// Find the longest table key that is a prefix of `chars`.
    ///
    /// Returns the number of characters consumed and the romaji for them.
    pub fn longest_match(&self, chars: &[char]) -> Option<(usize, &str)> {
        let window = &chars[..chars.len().min(self.max_key_chars)];
        if window.is_empty() {
            return None;
        }
        let query: String = window.iter().collect();
        let query_bytes = query.as_bytes();
        let best = self
            .da
            .common_prefix_search(query_bytes)
            .max_by_key(|m| m.len)?;
        // Keys are whole UTF-8 sequences, so a match ends on a char boundary.
        let matched = std::str::from_utf8(&query_bytes[..best.len]).ok()?;
        let romaji = self.values.get(best.value_id as usize)?;
        Some((matched.chars().count(), romaji.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_single_vowel() {
        let trie = KanaTrie::global();
        assert_eq!(trie.get("あ"), Some("a"));
    }

    #[test]
    fn test_youon_get() {
        let trie = KanaTrie::global();
        assert_eq!(trie.get("しゃ"), Some("sha"));
        assert_eq!(trie.get("ちょ"), Some("cho"));
    }

    #[test]
    fn test_unknown_is_none() {
        let trie = KanaTrie::global();
        assert_eq!(trie.get("ア"), None);
        assert_eq!(trie.get("x"), None);
        assert_eq!(trie.get(""), None);
    }

    #[test]
    fn test_longest_match_prefers_youon() {
        let trie = KanaTrie::global();
        assert_eq!(trie.longest_match(&chars("きょう")), Some((2, "kyo")));
    }

    #[test]
    fn test_longest_match_falls_back_to_single() {
        let trie = KanaTrie::global();
        // "きあ" is not a key, so only "き" matches.
        assert_eq!(trie.longest_match(&chars("きあ")), Some((1, "ki")));
    }

    #[test]
    fn test_longest_match_none() {
        let trie = KanaTrie::global();
        assert_eq!(trie.longest_match(&chars("漢字")), None);
        assert_eq!(trie.longest_match(&[]), None);
    }

    #[test]
    fn test_from_map() {
        let mut map = BTreeMap::new();
        map.insert("か".to_string(), "ka".to_string());
        map.insert("かか".to_string(), "kaka".to_string());
        let trie = KanaTrie::from_map(&map);
        assert_eq!(trie.longest_match(&chars("かかか")), Some((2, "kaka")));
        assert_eq!(trie.get("き"), None);
    }

    #[test]
    fn test_longest_match_is_bounded_by_longest_key() {
        let mut map = BTreeMap::new();
        map.insert("し".to_string(), "shi".to_string());
        map.insert("しゃ".to_string(), "sha".to_string());
        let trie = KanaTrie::from_map(&map);
        let long: Vec<char> = "しゃ".chars().chain(std::iter::repeat('ん').take(64)).collect();
        assert_eq!(trie.longest_match(&long), Some((2, "sha")));
        assert_eq!(trie.longest_match(&chars("しん")), Some((1, "shi")));
    }

    #[test]
    fn test_every_table_entry_is_reachable() {
        let trie = KanaTrie::global();
        let map = parse_table_toml(DEFAULT_TOML).unwrap();
        for (kana, romaji) in &map {
            assert_eq!(trie.get(kana), Some(romaji.as_str()), "kana={kana}");
        }
    }
}
