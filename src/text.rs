//! Line-level glue: split lines into tokens on a delimiter, map each token,
//! and rejoin with the same delimiter.

use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug_span;

use crate::converter::Converter;
use crate::restorer::Restorer;
use crate::translit::Transliterator;

pub const CONVERTED_SUFFIX: &str = ".convert";
pub const MAPPING_SUFFIX: &str = ".map";
pub const RESTORED_SUFFIX: &str = ".restore";

/// Counts collected while processing a text stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub lines: usize,
    pub tokens: usize,
    /// Tokens whose output differs from the input.
    pub replaced: usize,
}

/// Convert every token of `line`. An empty delimiter makes the whole line
/// one token.
pub fn convert_line<T: Transliterator>(
    converter: &mut Converter<T>,
    line: &str,
    delimiter: &str,
) -> String {
    map_line(line, delimiter, |token| converter.convert(token))
}

/// Restore every token of `line`. An empty delimiter makes the whole line
/// one token.
pub fn restore_line(restorer: &Restorer, line: &str, delimiter: &str) -> String {
    map_line(line, delimiter, |token| restorer.restore(token).to_string())
}

fn map_line<F>(line: &str, delimiter: &str, mut f: F) -> String
where
    F: FnMut(&str) -> String,
{
    if delimiter.is_empty() {
        return f(line);
    }
    line.split(delimiter)
        .map(&mut f)
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// Convert `reader` line by line into `writer`, one output line per input
/// line.
pub fn convert_stream<T, R, W>(
    converter: &mut Converter<T>,
    reader: R,
    writer: W,
    delimiter: &str,
) -> io::Result<TextStats>
where
    T: Transliterator,
    R: BufRead,
    W: Write,
{
    let _span = debug_span!("convert_stream").entered();
    map_stream(reader, writer, delimiter, |token| converter.convert(token))
}

/// Restore `reader` line by line into `writer`.
pub fn restore_stream<R, W>(
    restorer: &Restorer,
    reader: R,
    writer: W,
    delimiter: &str,
) -> io::Result<TextStats>
where
    R: BufRead,
    W: Write,
{
    let _span = debug_span!("restore_stream").entered();
    map_stream(reader, writer, delimiter, |token| {
        restorer.restore(token).to_string()
    })
}

fn map_stream<R, W, F>(
    reader: R,
    mut writer: W,
    delimiter: &str,
    mut f: F,
) -> io::Result<TextStats>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> String,
{
    let mut stats = TextStats::default();
    for line in reader.lines() {
        let line = line?;
        stats.lines += 1;
        let out = map_line(&line, delimiter, |token| {
            let mapped = f(token);
            stats.tokens += 1;
            if mapped != token {
                stats.replaced += 1;
            }
            mapped
        });
        writeln!(writer, "{out}")?;
    }
    writer.flush()?;
    Ok(stats)
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(suffix);
    PathBuf::from(s)
}

/// `<input>.convert`
pub fn converted_path(input: &Path) -> PathBuf {
    with_suffix(input, CONVERTED_SUFFIX)
}

/// `<input>.convert.map`
pub fn mapping_path(input: &Path) -> PathBuf {
    with_suffix(&converted_path(input), MAPPING_SUFFIX)
}

/// `<input>.restore`
pub fn restored_path(input: &Path) -> PathBuf {
    with_suffix(input, RESTORED_SUFFIX)
}
