mod commands;

use clap::{ArgAction, Parser, Subcommand};
use pdfpeek_core::config::{self, ConfigFile, PeekConfig};
use pdfpeek_core::error::PeekError;
use pdfpeek_core::extraction::BackendKind;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pdfpeek",
    version,
    about = "Preview and extract the text of PDF files"
)]
struct Cli {
    /// TOML config file (default: ./.pdfpeek.toml if present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Extraction backend: lopdf (default) or pdftotext
    #[arg(short, long, global = true, value_name = "NAME")]
    backend: Option<BackendKind>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print bounded previews of every PDF in a directory (or of one PDF)
    Preview {
        /// Directory to scan, or a single PDF file
        source: Option<PathBuf>,

        /// Highest zero-based page index to print
        #[arg(long, value_name = "N")]
        pages: Option<usize>,

        /// Characters printed per page
        #[arg(long, value_name = "N")]
        chars: Option<usize>,
    },
    /// Extract all text of one PDF into a sibling text file
    Extract {
        /// PDF file to extract
        file: Option<PathBuf>,

        /// Characters of the extracted text to echo after writing
        #[arg(long, value_name = "N")]
        chars: Option<usize>,

        /// Extension of the output file
        #[arg(long, value_name = "SUFFIX")]
        suffix: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Defaults, then the config file, then command-line flags.
fn resolve_config(cli_config: Option<&PathBuf>, flags: ConfigFile) -> Result<PeekConfig, PeekError> {
    let cwd = std::env::current_dir()?;
    let file = config::discover_config(cli_config.map(|p| p.as_path()), &cwd)?;
    PeekConfig::default().apply(file).apply(flags).validated()
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Preview {
            source,
            pages,
            chars,
        } => {
            let flags = ConfigFile {
                source,
                page_preview_limit: pages,
                page_char_limit: chars,
                backend: cli.backend,
                ..Default::default()
            };
            resolve_config(cli.config.as_ref(), flags).and_then(|c| commands::preview::run(&c))
        }
        Commands::Extract {
            file,
            chars,
            suffix,
        } => {
            let flags = ConfigFile {
                source: file,
                summary_char_limit: chars,
                output_suffix: suffix,
                backend: cli.backend,
                ..Default::default()
            };
            resolve_config(cli.config.as_ref(), flags).and_then(|c| commands::extract::run(&c))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
