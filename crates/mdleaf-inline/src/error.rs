//! Inline tokenizer errors.

use mdleaf_html::HtmlError;

use crate::span::SpanKind;

/// Inline parsing error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InlineError {
    /// A span handed to the delimiter splitter does not contain the delimiter.
    #[error("delimiter {delimiter:?} not found in {text:?}")]
    MalformedMarkup {
        /// Delimiter that was searched for.
        delimiter: String,
        /// Text of the offending span.
        text: String,
    },
    /// Span kind is not valid in this position.
    #[error("invalid span kind `{kind}`: {reason}")]
    InvalidSpanKind {
        /// The rejected kind.
        kind: SpanKind,
        /// Why it was rejected.
        reason: &'static str,
    },
    /// Delimiter string is empty.
    #[error("delimiter cannot be empty")]
    EmptyDelimiter,
    /// Span kind name could not be parsed.
    #[error("unknown span kind: {0:?}")]
    UnknownSpanKind(String),
    /// Rendering the produced nodes failed.
    #[error(transparent)]
    Html(#[from] HtmlError),
}
