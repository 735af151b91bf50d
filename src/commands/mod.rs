//! Handlers behind the `mb-resolver` binary. Each handler reports errors on
//! stderr and exits with status 1.

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod convert_ops;
pub mod restore_ops;

use std::fs;

use crate::settings;
use crate::translit::KanaTrie;

/// Install custom settings and kana table before anything reads them.
pub fn load_config(settings_file: Option<&str>, table_file: Option<&str>) {
    if let Some(file) = settings_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(settings::init_custom(&content), "Error in {file}: {}");
    }
    if let Some(file) = table_file {
        let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
        die!(KanaTrie::init_custom(&content), "Error in {file}: {}");
    }
}

/// Command-line delimiter, falling back to the configured one.
fn resolve_delimiter(delimiter: Option<&str>) -> &str {
    let delimiter = delimiter.unwrap_or(&settings::settings().text.delimiter);
    if delimiter.is_empty() {
        eprintln!("Error: delimiter must not be empty");
        std::process::exit(1);
    }
    delimiter
}
