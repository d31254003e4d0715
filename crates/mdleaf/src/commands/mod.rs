//! CLI command implementations.

pub(crate) mod render;
pub(crate) mod spans;

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

pub(crate) use render::RenderArgs;
pub(crate) use spans::SpansArgs;

/// Where to read markdown from.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// Markdown text (default: read from --file or stdin).
    text: Option<String>,

    /// Read markdown from a file.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover mdleaf.toml).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl InputArgs {
    /// Read the input text from the argument, the file, or stdin.
    pub(crate) fn read(&self) -> std::io::Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        if let Some(path) = &self.file {
            tracing::debug!(path = %path.display(), "Reading input file");
            return std::fs::read_to_string(path);
        }
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

/// Split text into paragraphs separated by blank lines.
///
/// Lines inside a paragraph are joined with `\n`; surrounding whitespace is
/// trimmed from each line.
pub(crate) fn paragraphs(text: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                result.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        result.push(current.join("\n"));
    }

    result
}
