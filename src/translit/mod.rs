//! Phonetic rendering of tokens.
//!
//! [`Transliterator`] is the seam the converter calls into; any engine that
//! turns a token into ordered phonetic fragments can be plugged in. The
//! built-in [`KanaTransliterator`] renders kana with a longest-match trie
//! over a TOML table (embedded default, or a custom one installed with
//! [`KanaTrie::init_custom`]).

mod config;
mod kana;
mod table;
mod trie;

pub use config::{parse_table_toml, TableConfigError};
pub use kana::KanaTransliterator;
pub use table::default_toml;
pub use trie::KanaTrie;

/// Renders a token as an ordered sequence of phonetic fragments.
pub trait Transliterator {
    fn transliterate(&self, token: &str) -> Vec<String>;
}

impl<F> Transliterator for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn transliterate(&self, token: &str) -> Vec<String> {
        self(token)
    }
}
