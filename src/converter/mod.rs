//! Token → placeholder conversion.
//!
//! A [`Converter`] owns one session's [`Mapping`]. Tokens that are already
//! ASCII-safe, or whose phonetic rendering is plain digits or punctuation,
//! pass through unrecorded. Everything else gets a generated placeholder:
//! prefix + capitalized rendering with wide and non-word characters replaced
//! by `x`, suffixed with 1, 2, ... until it is unique within the mapping.

#[cfg(test)]
mod tests;
#[cfg(test)]
pub(crate) mod testutil;

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, debug_span};

use crate::mapping::{fits_mapping_line, Mapping};
use crate::settings::{validate_prefix, Settings, SettingsError};
use crate::translit::{KanaTransliterator, Transliterator};
use crate::width::is_wide;

pub const DEFAULT_PREFIX: &str = "JaWord";

/// Character substituted for wide and non-word characters in placeholders.
pub const FILLER: char = 'x';

/// Outcome of the lookup steps of a conversion, before any placeholder is
/// generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Final output for the token: the token itself, a recorded
    /// placeholder, or an unrecorded fallback rendering.
    Resolved(String),
    /// No existing answer; the token needs a placeholder built from
    /// `rendering`.
    Unresolved { rendering: String },
}

/// One conversion session: a prefix, a transliterator and the mapping built
/// so far.
pub struct Converter<T: Transliterator = KanaTransliterator> {
    prefix: String,
    mapping: Mapping,
    transliterator: T,
}

impl Converter<KanaTransliterator> {
    /// Converter with the default prefix and the built-in kana engine.
    pub fn new() -> Self {
        Self::with_transliterator(KanaTransliterator::new(), DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::with_transliterator(KanaTransliterator::new(), prefix)
    }

    /// Converter configured from settings: prefix and initial avoid list.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_prefix(settings.converter.prefix.clone())
            .with_avoid(settings.converter.avoid.iter().cloned())
    }
}

impl Default for Converter<KanaTransliterator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transliterator> Converter<T> {
    pub fn with_transliterator(transliterator: T, prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            mapping: Mapping::new(),
            transliterator,
        }
    }

    /// Builder form of [`Converter::add_avoid`].
    pub fn with_avoid<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_avoid(tokens);
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn mapping(&self) -> &Mapping {
        &self.mapping
    }

    /// Convert one token, recording a new placeholder if one is generated.
    pub fn convert(&mut self, token: &str) -> String {
        let _span = debug_span!("convert", token).entered();
        match self.resolve(token) {
            Resolution::Resolved(out) => out,
            Resolution::Unresolved { rendering } => self.generate(token, &rendering),
        }
    }

    /// Run the lookup steps of [`Converter::convert`] without recording
    /// anything.
    pub fn resolve(&self, token: &str) -> Resolution {
        if is_ascii_safe(&normalize_lookalikes(token)) {
            return Resolution::Resolved(token.to_string());
        }

        if let Some(existing) = self.mapping.get(token) {
            return Resolution::Resolved(existing.to_string());
        }

        // A mapping file could not hold it, so it is never recorded.
        if !fits_mapping_line(token) {
            debug!("token spans mapping lines, passes through");
            return Resolution::Resolved(token.to_string());
        }

        let rendering = self.transliterator.transliterate(token).concat();
        if rendering.is_empty() {
            debug!("empty rendering, bracket fallback");
            return Resolution::Resolved(normalize_brackets(token));
        }
        if is_digits_or_punctuation(&rendering) {
            debug!(
                rendering = rendering.as_str(),
                "digits/punctuation rendering passes through"
            );
            return Resolution::Resolved(rendering);
        }
        Resolution::Unresolved { rendering }
    }

    /// Build a unique placeholder for `token` and record it.
    fn generate(&mut self, token: &str, rendering: &str) -> String {
        let base = format!("{}{}", self.prefix, placeholder_body(rendering));
        let mut placeholder = base.clone();
        let mut suffix = 1u32;
        while self.mapping.contains_placeholder(&placeholder) {
            placeholder = format!("{base}{suffix}");
            suffix += 1;
        }
        debug!(rendering, placeholder = placeholder.as_str(), "generated");
        self.mapping.insert(token.to_string(), placeholder.clone());
        placeholder
    }

    /// Map each token to itself from now on.
    ///
    /// Tokens that already have an entry (including a generated placeholder
    /// from earlier in the session) are left untouched. A token that is
    /// already some entry's placeholder is skipped, so the mapping stays
    /// invertible; so is one a mapping file could not hold. An ASCII token is
    /// still recorded: it is never looked up, but no placeholder will take
    /// its value.
    pub fn add_avoid<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            let token = token.into();
            if self.mapping.contains_original(&token) {
                continue;
            }
            if self.mapping.contains_placeholder(&token) || !fits_mapping_line(&token) {
                debug!(token = token.as_str(), "avoid token skipped");
                continue;
            }
            self.mapping.insert(token.clone(), token);
        }
    }

    /// Clear the mapping, optionally switching the prefix for future
    /// placeholders.
    pub fn reset(&mut self, prefix: Option<&str>) {
        self.mapping.clear();
        if let Some(prefix) = prefix {
            self.prefix = prefix.to_string();
        }
    }

    /// [`Converter::reset`] with a prefix that is checked first. On error
    /// nothing is cleared.
    pub fn try_reset(&mut self, prefix: Option<&str>) -> Result<(), SettingsError> {
        if let Some(p) = prefix {
            validate_prefix(p)?;
        }
        self.reset(prefix);
        Ok(())
    }

    /// Write the mapping in mapping-file format.
    pub fn write_mapping<W: Write>(&self, writer: W) -> io::Result<()> {
        self.mapping.write_to(writer)
    }

    /// Save the mapping to `path` in mapping-file format.
    pub fn export_mapping(&self, path: &Path) -> io::Result<()> {
        debug!(
            entries = self.mapping.len(),
            path = %path.display(),
            "export mapping"
        );
        self.mapping.save(path)
    }
}

/// Fold full-width punctuation look-alikes to ASCII.
/// Only used to decide whether a token is already ASCII-safe.
fn normalize_lookalikes(token: &str) -> String {
    token
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' => '"',
            '！' => '!',
            '？' => '?',
            '\u{3000}' => ' ',
            _ => c,
        })
        .collect()
}

fn is_ascii_safe(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == ' ')
}

fn normalize_brackets(token: &str) -> String {
    token
        .chars()
        .map(|c| match c {
            '「' => '(',
            '」' => ')',
            _ => c,
        })
        .collect()
}

fn is_digits_or_punctuation(rendering: &str) -> bool {
    rendering.chars().all(|c| c.is_ascii_digit())
        || rendering.chars().all(|c| c.is_ascii_punctuation())
}

/// Filler-substituted, capitalized rendering.
fn placeholder_body(rendering: &str) -> String {
    let filled: String = rendering
        .chars()
        .map(|c| {
            if is_wide(c) || !is_word_char(c) {
                FILLER
            } else {
                c
            }
        })
        .collect();
    capitalize(&filled)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
