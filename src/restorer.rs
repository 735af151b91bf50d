//! Placeholder → original restoration.
//!
//! Built once from a mapping file or an in-memory original → placeholder
//! table, then read-only. If two originals share a placeholder the later
//! one wins; injectivity is the converter's job and is not re-checked here.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::mapping::{parse_entries, read_entries, Mapping, MappingError};

#[derive(Debug, Clone, Default)]
pub struct Restorer {
    reverse: HashMap<String, String>,
}

impl Restorer {
    /// Build from `(original, placeholder)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let reverse = pairs
            .into_iter()
            .map(|(original, placeholder)| (placeholder.into(), original.into()))
            .collect();
        Self { reverse }
    }

    /// Parse mapping-file text. `origin` names the source in errors.
    pub fn parse(text: &str, origin: &str) -> Result<Self, MappingError> {
        Ok(Self::from_pairs(parse_entries(text, origin)?))
    }

    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self, MappingError> {
        Ok(Self::from_pairs(read_entries(reader, origin)?))
    }

    /// Load a mapping file written by the converter.
    pub fn open(path: &Path) -> Result<Self, MappingError> {
        let file = File::open(path)?;
        let restorer = Self::from_reader(BufReader::new(file), &path.display().to_string())?;
        debug!(entries = restorer.len(), path = %path.display(), "loaded mapping");
        Ok(restorer)
    }

    /// Original for a known placeholder; any other token is returned as is.
    pub fn restore<'a>(&'a self, token: &'a str) -> &'a str {
        self.reverse.get(token).map(String::as_str).unwrap_or(token)
    }

    pub fn len(&self) -> usize {
        self.reverse.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reverse.is_empty()
    }
}

impl From<&Mapping> for Restorer {
    fn from(mapping: &Mapping) -> Self {
        Self::from_pairs(mapping.iter())
    }
}
