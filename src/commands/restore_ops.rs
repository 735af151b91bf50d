use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use super::resolve_delimiter;
use crate::text::{restore_stream, restored_path};
use crate::Restorer;

/// Restore `target_file` into `<file>.restore` using a mapping file
/// written by `convert`.
pub fn restore_cmd(target_file: &str, mapping_file: &str, delimiter: Option<&str>) {
    let delimiter = resolve_delimiter(delimiter);
    let restorer = die!(
        Restorer::open(Path::new(mapping_file)),
        "Error loading mapping file: {}"
    );

    let input = Path::new(target_file);
    let output = restored_path(input);
    let output_display = output.display();

    let reader = BufReader::new(die!(
        File::open(input),
        "Error opening {target_file}: {}"
    ));
    let writer = BufWriter::new(die!(
        File::create(&output),
        "Error creating {output_display}: {}"
    ));
    let stats = die!(
        restore_stream(&restorer, reader, writer, delimiter),
        "Error restoring {target_file}: {}"
    );

    println!("Restored text is exported to {output_display}.");
    println!(
        "{} lines, {} tokens, {} restored",
        stats.lines, stats.tokens, stats.replaced
    );
}
