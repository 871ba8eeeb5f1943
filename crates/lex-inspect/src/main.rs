//! CLI entry point for the data quality inspection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use dialoguer::{Input, theme::ColorfulTheme};
use lex_inspect::reporting::{render_report, report_to_json};
use lex_inspect::{FileSource, InspectConfig, Inspector};
use tracing::{debug, error, info};

#[derive(Parser, Debug)]
#[command(
    author = "Lex Machina Team",
    version,
    about = "Data quality inspection for delimited text files",
    long_about = "Loads a delimited text file and reports character counts, nulls and \
                  duplicates, date columns, and an overall quality score.\n\n\
                  When no --file is given, the file name and path are asked for \
                  interactively.\n\n\
                  EXAMPLES:\n  \
                  # Interactive\n  \
                  lex-inspect\n\n  \
                  # Named source\n  \
                  lex-inspect -f ventas=data/ventas.csv\n\n  \
                  # Comma-separated file, JSON output\n  \
                  lex-inspect -f data/clientes.csv -d , --json"
)]
struct Args {
    /// Source to inspect, as NAME=PATH or a bare PATH
    ///
    /// May be repeated; the last source that loads is inspected.
    #[arg(short, long = "file", value_name = "NAME=PATH")]
    files: Vec<FileSource>,

    /// Field separator of the input file
    #[arg(short, long, default_value = ";")]
    delimiter: char,

    /// Number of rows shown in the trimmed preview
    #[arg(long, default_value = "5")]
    preview_rows: usize,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,

    /// Print the report as JSON instead of text blocks
    ///
    /// Logging is reduced to warnings, written to stderr like all logs.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// Logs go to stderr so stdout only carries the report.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet || json_output { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    let Ok(delimiter) = u8::try_from(args.delimiter) else {
        bail!("Delimiter must be a single ASCII character: {:?}", args.delimiter);
    };
    let config = InspectConfig::builder()
        .delimiter(delimiter)
        .preview_rows(args.preview_rows)
        .build()?;
    debug!("Configuration: {:?}", config);

    let sources = if args.files.is_empty() {
        vec![prompt_source()?]
    } else {
        args.files.clone()
    };

    let inspector = Inspector::new(config);
    let report = match inspector.inspect_sources(&sources) {
        Ok(report) => report,
        Err(e) => {
            error!("Inspection failed: {}", e);
            return Err(anyhow!("Inspection failed: {}", e));
        }
    };
    info!("Inspection of '{}' complete", report.source_name);

    if args.json {
        println!("{}", report_to_json(&report)?);
        return Ok(());
    }

    println!();
    println!("{}", "=".repeat(80));
    println!("DATA QUALITY INSPECTION");
    println!("{}", "=".repeat(80));
    print!("{}", render_report(&report));
    println!("{}", "=".repeat(80));

    Ok(())
}

/// Ask for one logical name and its path.
fn prompt_source() -> Result<FileSource> {
    let theme = ColorfulTheme::default();

    let name: String = Input::with_theme(&theme)
        .with_prompt("File name")
        .interact_text()?;
    let path: String = Input::with_theme(&theme)
        .with_prompt(format!("Path of file {}", name))
        .interact_text()?;

    Ok(FileSource::new(name.trim(), path.trim()))
}
