//! Configurable inline parsing pipeline.

use mdleaf_html::{Node, render_all};

use crate::convert::span_to_node;
use crate::delimiter::{check_delimiter, split_by_delimiter};
use crate::error::InlineError;
use crate::links::{split_images, split_links};
use crate::span::{Span, SpanKind};

/// A literal delimiter and the span kind it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    marker: String,
    kind: SpanKind,
}

impl Delimiter {
    /// Create a delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`InlineError::EmptyDelimiter`] for an empty marker and
    /// [`InlineError::InvalidSpanKind`] unless `kind` is bold, italic or code.
    pub fn new(marker: impl Into<String>, kind: SpanKind) -> Result<Self, InlineError> {
        let marker = marker.into();
        check_delimiter(&marker, kind)?;
        Ok(Self { marker, kind })
    }

    /// Delimiter text.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Span kind produced between two markers.
    #[must_use]
    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    fn builtin(marker: &str, kind: SpanKind) -> Self {
        Self {
            marker: marker.to_owned(),
            kind,
        }
    }
}

/// Inline markdown parser.
///
/// Runs the delimiter table in order, then extracts images, then links.
/// Code comes first in the default table so that `*` inside backticks is
/// left alone, and `**` precedes `*`.
///
/// Unlike [`split_by_delimiter`], the parser only splits plain spans where
/// the delimiter is balanced and encloses non-empty text; anything else stays
/// literal. Empty plain spans are dropped from the output.
#[derive(Debug, Clone)]
pub struct InlineParser {
    delimiters: Vec<Delimiter>,
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

impl InlineParser {
    /// Parser with the default delimiters: `` ` `` code, `**` bold, `*` italic.
    #[must_use]
    pub fn new() -> Self {
        Self {
            delimiters: vec![
                Delimiter::builtin("`", SpanKind::Code),
                Delimiter::builtin("**", SpanKind::Bold),
                Delimiter::builtin("*", SpanKind::Italic),
            ],
        }
    }

    /// Replace the delimiter table.
    #[must_use]
    pub fn with_delimiters(mut self, delimiters: Vec<Delimiter>) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Append a delimiter to the table.
    ///
    /// # Errors
    ///
    /// See [`Delimiter::new`].
    pub fn with_delimiter(
        mut self,
        marker: impl Into<String>,
        kind: SpanKind,
    ) -> Result<Self, InlineError> {
        self.delimiters.push(Delimiter::new(marker, kind)?);
        Ok(self)
    }

    /// Delimiters in application order.
    #[must_use]
    pub fn delimiters(&self) -> &[Delimiter] {
        &self.delimiters
    }

    /// Tokenize `text` into spans.
    ///
    /// # Errors
    ///
    /// Propagates [`split_by_delimiter`] errors. With the balance check in
    /// place these indicate a bug rather than bad input.
    pub fn parse(&self, text: &str) -> Result<Vec<Span>, InlineError> {
        let mut spans = vec![Span::plain(text)];

        for delimiter in &self.delimiters {
            spans = Self::apply_delimiter(spans, delimiter)?;
            tracing::trace!(
                marker = %delimiter.marker,
                kind = %delimiter.kind,
                spans = spans.len(),
                "Delimiter pass completed"
            );
        }

        let spans: Vec<Span> = split_images(&spans).into_iter().flatten().collect();
        let mut spans = split_links(&spans);
        spans.retain(|span| !(span.is_plain() && span.text().is_empty()));

        tracing::debug!(input_len = text.len(), spans = spans.len(), "Parsed inline text");
        Ok(spans)
    }

    /// Tokenize `text` and convert every span to a leaf node.
    ///
    /// # Errors
    ///
    /// See [`InlineParser::parse`].
    pub fn to_nodes(&self, text: &str) -> Result<Vec<Node>, InlineError> {
        Ok(self.parse(text)?.iter().map(span_to_node).collect())
    }

    /// Tokenize `text` and render the resulting leaves back to back.
    ///
    /// # Errors
    ///
    /// See [`InlineParser::parse`].
    pub fn render(&self, text: &str) -> Result<String, InlineError> {
        Ok(render_all(&self.to_nodes(text)?)?)
    }

    fn apply_delimiter(spans: Vec<Span>, delimiter: &Delimiter) -> Result<Vec<Span>, InlineError> {
        let mut result = Vec::with_capacity(spans.len());
        for span in spans {
            if !span.is_plain() || !span.text().contains(&delimiter.marker) {
                result.push(span);
                continue;
            }
            if !Self::is_well_formed(span.text(), &delimiter.marker) {
                tracing::debug!(
                    marker = %delimiter.marker,
                    text = span.text(),
                    "Unbalanced delimiter left as literal text"
                );
                result.push(span);
                continue;
            }
            result.extend(split_by_delimiter(
                std::slice::from_ref(&span),
                &delimiter.marker,
                delimiter.kind,
            )?);
        }
        Ok(result)
    }

    /// Balanced marker count with non-empty text between each pair.
    fn is_well_formed(text: &str, marker: &str) -> bool {
        let tokens: Vec<&str> = text.split(marker).collect();
        tokens.len() % 2 == 1
            && tokens
                .iter()
                .skip(1)
                .step_by(2)
                .all(|token| !token.is_empty())
    }
}

/// Tokenize `text` with the default [`InlineParser`].
///
/// # Errors
///
/// See [`InlineParser::parse`].
pub fn text_to_spans(text: &str) -> Result<Vec<Span>, InlineError> {
    InlineParser::new().parse(text)
}

/// Tokenize `text` with the default [`InlineParser`] and convert to nodes.
///
/// # Errors
///
/// See [`InlineParser::parse`].
pub fn text_to_nodes(text: &str) -> Result<Vec<Node>, InlineError> {
    InlineParser::new().to_nodes(text)
}
