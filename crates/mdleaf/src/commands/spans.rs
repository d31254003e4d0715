//! `mdleaf spans` command implementation.

use clap::Args;
use mdleaf_config::Config;

use super::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the spans command.
#[derive(Args)]
pub(crate) struct SpansArgs {
    #[command(flatten)]
    input: InputArgs,
}

impl SpansArgs {
    /// Execute the spans command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration, input or parsing fails.
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let config = Config::load(self.input.config.as_deref(), None)?;
        let parser = config.inline_parser()?;

        let text = self.input.read()?;
        let spans = parser.parse(text.trim_end_matches('\n'))?;
        output.result(&serde_json::to_string_pretty(&spans)?)?;

        Ok(())
    }
}
