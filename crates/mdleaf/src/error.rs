//! CLI error types.

use mdleaf_config::ConfigError;
use mdleaf_html::HtmlError;
use mdleaf_inline::InlineError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Inline(#[from] InlineError),

    #[error("{0}")]
    Html(#[from] HtmlError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
