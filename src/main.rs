use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use imo::config::settings::{
    Extensions, Settings, Verbosity, DEFAULT_EXTENSIONS, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_DIR,
};
use imo::core::scanner::Scanner;

#[derive(Parser, Debug)]
#[command(
    name = "imo",
    version,
    about = "Extract images from nested folders into a single directory"
)]
struct Cli {
    /// Input directory
    #[arg(short = 'i', long = "input", default_value = ".")]
    input: PathBuf,

    /// Output directory
    #[arg(short = 'o', long = "output", default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,

    /// Accepted file extensions, separated by '|'
    #[arg(short = 'e', long = "extensions", default_value = DEFAULT_EXTENSIONS)]
    extensions: String,

    /// Maximum search depth
    #[arg(short = 'd', long = "depth", default_value_t = DEFAULT_MAX_DEPTH)]
    depth: usize,

    /// Show error messages (-v) or all messages (-vv)
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    verbose: u8,

    /// Search without copying
    #[arg(short = 's', long = "scan-only")]
    scan_only: bool,

    /// Export the run summary as JSON to file
    #[arg(long)]
    export_json: Option<PathBuf>,

    /// Export the run summary as Markdown to file
    #[arg(long)]
    export_markdown: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbosity = Verbosity::from_occurrences(cli.verbose);

    // Initialize tracing (logs to stderr); RUST_LOG wins over -v
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(verbosity.filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let settings = Settings {
        input_dir: cli.input,
        output_dir: cli.output,
        extensions: Extensions::parse(&cli.extensions)
            .with_context(|| format!("failed to parse extension string '{}'", cli.extensions))?,
        max_depth: cli.depth,
        verbosity,
        scan_only: cli.scan_only,
    }
    .resolve()?;

    settings.create_output_dir()?;

    let summary = Scanner::new(settings).scan();
    print!("{}", imo::export::text::render_summary(&summary));

    if let Some(ref path) = cli.export_json {
        imo::export::json::export_json(&summary, path)?;
        println!("Exported to: {}", path.display());
    }
    if let Some(ref path) = cli.export_markdown {
        imo::export::markdown::export_markdown(&summary, path)?;
        println!("Exported to: {}", path.display());
    }

    Ok(())
}
