//! Command-line interface for fieldsheet
//!
//! Reads annotated Java field declarations and exports them as a field list document.
//!
//! Usage:
//!   fieldsheet export [INPUT] [--label <prefix>] [--output <path>] [--format <format>]
//!   fieldsheet fields [INPUT]
//!   fieldsheet formats
//!
//! INPUT defaults to stdin. `fieldsheet.toml` in the working directory is loaded when present.

mod commands;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "fieldsheet", version, about = "Turn annotated Java fields into a field list document")]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Additional configuration file (TOML), layered over fieldsheet.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse the input and write the field list document
    Export(ExportArgs),
    /// Print the parsed fields without writing a document
    Fields {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,
    },
    /// List available output formats
    Formats,
}

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Input file, or `-` for stdin
    pub input: Option<PathBuf>,

    /// Prefix for the STT column, rows are numbered `<label>.<n>`
    #[arg(short, long)]
    pub label: Option<String>,

    /// Output path (defaults to the configured file name for docx, stdout for text formats)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (docx, markdown, json)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Page orientation for docx output (portrait, landscape)
    #[arg(long)]
    pub orientation: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Export(args) => commands::export(cli.config.as_deref(), args),
        Command::Fields { input } => commands::fields(input.as_deref()),
        Command::Formats => commands::formats(),
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
