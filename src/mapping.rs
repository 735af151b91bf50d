//! Original → placeholder mapping and its persisted text form.
//!
//! The file format is one entry per line, `"<original> -> <placeholder>\n"`,
//! in insertion order. Text containing a line break or `" -> "` cannot be
//! read back from that format: [`fits_mapping_line`] tells such text apart,
//! the converter never records it, and [`Mapping::write_to`] refuses it.

use std::collections::{HashMap, HashSet};
use std::ffi::OsString;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Separator between original and placeholder in a mapping file line.
pub const MAPPING_DELIMITER: &str = " -> ";

#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("unexpected format on line {line} of mapping file ({origin})")]
    Format { origin: String, line: usize },
}

/// Whether `text` can be one side of a mapping-file line and read back
/// unchanged.
///
/// Besides line breaks and the delimiter itself, text ending in `" ->"`
/// is refused: followed by the delimiter it would split one character early.
pub fn fits_mapping_line(text: &str) -> bool {
    !text.contains(|c: char| c == '\n' || c == '\r')
        && !text.contains(MAPPING_DELIMITER)
        && !text.ends_with(" ->")
}

/// Insert-only, ordered association of original tokens to placeholders.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
    placeholders: HashSet<String>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, original: &str) -> Option<&str> {
        self.index
            .get(original)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn contains_original(&self, original: &str) -> bool {
        self.index.contains_key(original)
    }

    /// Whether `placeholder` is already the value of some entry.
    pub fn contains_placeholder(&self, placeholder: &str) -> bool {
        self.placeholders.contains(placeholder)
    }

    /// Insert an entry. Returns `false` (and changes nothing) if `original`
    /// is already mapped; entries are never overwritten.
    pub fn insert(&mut self, original: String, placeholder: String) -> bool {
        if self.index.contains_key(&original) {
            return false;
        }
        self.index.insert(original.clone(), self.entries.len());
        self.placeholders.insert(placeholder.clone());
        self.entries.push((original, placeholder));
        true
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(o, p)| (o.as_str(), p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
        self.placeholders.clear();
    }

    /// Write all entries in mapping-file format.
    ///
    /// Fails with `InvalidData`, before writing anything, if an entry could
    /// not be parsed back.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        if let Some((original, placeholder)) = self
            .entries
            .iter()
            .find(|(o, p)| !fits_mapping_line(o) || !fits_mapping_line(p))
        {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "entry {original:?} -> {placeholder:?} does not fit on one mapping line"
                ),
            ));
        }
        for (original, placeholder) in &self.entries {
            writeln!(writer, "{original}{MAPPING_DELIMITER}{placeholder}")?;
        }
        writer.flush()
    }

    /// Atomic write: write to `<path>.tmp` then rename.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        let mut tmp = OsString::from(path.as_os_str());
        tmp.push(".tmp");
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&tmp, &buf)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

/// Split one mapping-file line into `(original, placeholder)`.
///
/// `line_no` is 1-based and only used for the error.
fn parse_line(line: &str, origin: &str, line_no: usize) -> Result<(String, String), MappingError> {
    let mut parts = line.split(MAPPING_DELIMITER);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(original), Some(placeholder), None) => {
            Ok((original.to_string(), placeholder.to_string()))
        }
        _ => Err(MappingError::Format {
            origin: origin.to_string(),
            line: line_no,
        }),
    }
}

/// Parse mapping-file text. `origin` names the source in errors.
pub fn parse_entries(text: &str, origin: &str) -> Result<Vec<(String, String)>, MappingError> {
    text.lines()
        .enumerate()
        .map(|(i, line)| parse_line(line, origin, i + 1))
        .collect()
}

/// Read mapping-file lines from `reader`. `origin` names the source in errors.
pub fn read_entries<R: BufRead>(
    reader: R,
    origin: &str,
) -> Result<Vec<(String, String)>, MappingError> {
    let mut entries = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        entries.push(parse_line(&line, origin, i + 1)?);
    }
    Ok(entries)
}
