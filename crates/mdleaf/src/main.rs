//! mdleaf CLI - inline markdown to HTML.
//!
//! Provides commands for:
//! - `render`: Render inline markdown to HTML
//! - `spans`: Print the tokenized spans as JSON

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{RenderArgs, SpansArgs};
use output::Output;

/// mdleaf - inline markdown to HTML.
#[derive(Parser)]
#[command(name = "mdleaf", version, about)]
struct Cli {
    /// Enable debug logging (otherwise RUST_LOG applies).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render inline markdown to HTML.
    Render(RenderArgs),
    /// Print tokenized spans as JSON.
    Spans(SpansArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables DEBUG level, otherwise use RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Spans(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
