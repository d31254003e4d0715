//! `mdleaf render` command implementation.

use clap::Args;
use mdleaf_config::{CliSettings, Config};
use mdleaf_html::{ContainerNode, Node, render_all};
use mdleaf_inline::InlineParser;

use super::{InputArgs, paragraphs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Wrap each paragraph in this tag, e.g. `p` (overrides config).
    #[arg(short, long)]
    wrap: Option<String>,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input, parsing or rendering fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            wrap_tag: self.wrap,
        };
        let config = Config::load(self.input.config.as_deref(), Some(&cli_settings))?;
        let parser = config.inline_parser()?;

        let text = self.input.read()?;
        let paragraphs = paragraphs(&text);
        if paragraphs.is_empty() {
            output.warning("No input text");
            return Ok(());
        }

        for paragraph in &paragraphs {
            let html = render_paragraph(&parser, paragraph, config.render.wrap_tag.as_deref())?;
            output.result(&html)?;
        }

        Ok(())
    }
}

/// Render one paragraph, optionally wrapped in a container.
fn render_paragraph(
    parser: &InlineParser,
    text: &str,
    wrap_tag: Option<&str>,
) -> Result<String, CliError> {
    let nodes = parser.to_nodes(text)?;
    let html = match wrap_tag {
        Some(tag) => Node::from(ContainerNode::new(tag, nodes)?).render()?,
        None => render_all(&nodes)?,
    };
    Ok(html)
}
