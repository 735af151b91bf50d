use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::Serialize;

use super::resolve_delimiter;
use crate::settings::{settings, validate_prefix};
use crate::text::{convert_stream, converted_path, mapping_path, TextStats};
use crate::Converter;

pub struct ConvertOptions<'a> {
    pub delimiter: Option<&'a str>,
    pub prefix: Option<&'a str>,
    pub avoid: &'a [String],
    pub json: bool,
}

#[derive(Serialize)]
struct ConvertReport {
    output: String,
    mapping: String,
    mapping_entries: usize,
    #[serde(flatten)]
    stats: TextStats,
}

/// Convert `target_file` into `<file>.convert` and write the session
/// mapping to `<file>.convert.map`.
pub fn convert_cmd(target_file: &str, opts: &ConvertOptions) {
    let config = settings();
    let delimiter = resolve_delimiter(opts.delimiter);
    let prefix = opts.prefix.unwrap_or(&config.converter.prefix);
    die!(validate_prefix(prefix), "Error: {}");

    let mut converter = Converter::with_prefix(prefix)
        .with_avoid(config.converter.avoid.iter().cloned())
        .with_avoid(opts.avoid.iter().cloned());

    let input = Path::new(target_file);
    let output = converted_path(input);
    let mapping = mapping_path(input);
    let output_display = output.display();
    let mapping_display = mapping.display();

    let reader = BufReader::new(die!(
        File::open(input),
        "Error opening {target_file}: {}"
    ));
    let writer = BufWriter::new(die!(
        File::create(&output),
        "Error creating {output_display}: {}"
    ));
    let stats = die!(
        convert_stream(&mut converter, reader, writer, delimiter),
        "Error converting {target_file}: {}"
    );
    die!(
        converter.export_mapping(&mapping),
        "Error writing {mapping_display}: {}"
    );

    if opts.json {
        let report = ConvertReport {
            output: output.display().to_string(),
            mapping: mapping.display().to_string(),
            mapping_entries: converter.mapping().len(),
            stats,
        };
        let json = die!(serde_json::to_string_pretty(&report), "Error: {}");
        println!("{json}");
    } else {
        println!("Converted text is exported to {output_display}.");
        println!("Mapping file is exported to {mapping_display}.");
        println!(
            "{} lines, {} tokens, {} replaced, {} mapping entries",
            stats.lines,
            stats.tokens,
            stats.replaced,
            converter.mapping().len()
        );
    }
}
