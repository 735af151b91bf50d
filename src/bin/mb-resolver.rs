use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mb_resolver::commands::{self, config_ops, convert_ops, restore_ops};
use mb_resolver::trace_init;

#[derive(Parser)]
#[command(
    name = "mb-resolver",
    about = "Replace multibyte words with ASCII placeholders and restore them"
)]
struct Cli {
    /// Custom settings TOML (see `settings-export`)
    #[arg(long, global = true)]
    settings: Option<String>,
    /// Custom kana table TOML (see `table-export`)
    #[arg(long, global = true)]
    table: Option<String>,
    /// Write JSON trace events here (requires the `trace` feature)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a text file, writing <file>.convert and <file>.convert.map
    Convert {
        /// Text file to convert
        target_file: String,
        /// Token delimiter (defaults to text.delimiter in settings)
        #[arg(short, long)]
        delimiter: Option<String>,
        /// Placeholder prefix (defaults to converter.prefix in settings)
        #[arg(long)]
        prefix: Option<String>,
        /// Tokens to keep as-is, comma separated
        #[arg(long, value_delimiter = ',')]
        avoid: Vec<String>,
        /// Print a JSON summary instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Restore a converted file, writing <file>.restore
    Restore {
        /// Text file to restore
        target_file: String,
        /// Mapping file written by `convert`
        mapping_file: String,
        /// Token delimiter (defaults to text.delimiter in settings)
        #[arg(short, long)]
        delimiter: Option<String>,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings file
        file: String,
    },
    /// Print the default kana table TOML
    TableExport,
    /// Validate a kana table TOML file
    TableValidate {
        /// Table file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let _trace = cli.log_dir.as_deref().map(trace_init::init_tracing);
    commands::load_config(cli.settings.as_deref(), cli.table.as_deref());

    match cli.command {
        Command::Convert {
            target_file,
            delimiter,
            prefix,
            avoid,
            json,
        } => {
            let opts = convert_ops::ConvertOptions {
                delimiter: delimiter.as_deref(),
                prefix: prefix.as_deref(),
                avoid: &avoid,
                json,
            };
            convert_ops::convert_cmd(&target_file, &opts);
        }
        Command::Restore {
            target_file,
            mapping_file,
            delimiter,
        } => restore_ops::restore_cmd(&target_file, &mapping_file, delimiter.as_deref()),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::TableExport => config_ops::table_export(),
        Command::TableValidate { file } => config_ops::table_validate(&file),
    }
}
