use std::collections::BTreeMap;

use serde::Deserialize;

use crate::unicode::is_hiragana;

#[derive(Deserialize)]
struct TableConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableConfigError {
    #[error("invalid kana table TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("kana table has no [mappings] entries")]
    Empty,
    #[error("key is not hiragana: {0}")]
    NonKanaKey(String),
    #[error("kana {0:?} maps to an empty string")]
    EmptyValue(String),
    #[error("non-ASCII value for key {key}: {value}")]
    NonAsciiValue { key: String, value: String },
    #[error("kana table already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<kana, romaji>`.
///
/// Values must be ASCII so that everything the table produces can end up
/// in a placeholder unchanged.
pub fn parse_table_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableConfigError> {
    let config: TableConfig = toml::from_str(toml_str)?;

    if config.mappings.is_empty() {
        return Err(TableConfigError::Empty);
    }

    for (key, value) in &config.mappings {
        if key.is_empty() || !key.chars().all(is_hiragana) {
            return Err(TableConfigError::NonKanaKey(key.clone()));
        }
        if value.is_empty() {
            return Err(TableConfigError::EmptyValue(key.clone()));
        }
        if !value.is_ascii() {
            return Err(TableConfigError::NonAsciiValue {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }

    Ok(config.mappings)
}
