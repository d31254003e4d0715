//! Span to HTML node conversion.

use mdleaf_html::{Attributes, LeafNode, Node};

use crate::span::{Span, SpanKind};

/// Convert a span into a leaf node.
///
/// | kind   | tag    | value | attributes        |
/// |--------|--------|-------|-------------------|
/// | plain  | none   | text  |                   |
/// | bold   | `b`    | text  |                   |
/// | italic | `i`    | text  |                   |
/// | code   | `code` | text  |                   |
/// | link   | `a`    | text  | `href`            |
/// | image  | `img`  | `""`  | `src`, `alt`      |
#[must_use]
pub fn span_to_node(span: &Span) -> Node {
    let text = span.text();
    let destination = span.destination().unwrap_or_default();

    let leaf = match span.kind() {
        SpanKind::Plain => LeafNode::text(text),
        SpanKind::Bold => LeafNode::new("b", text),
        SpanKind::Italic => LeafNode::new("i", text),
        SpanKind::Code => LeafNode::new("code", text),
        SpanKind::Link => {
            LeafNode::new("a", text).with_attributes(Attributes::new().with("href", destination))
        }
        SpanKind::Image => LeafNode::new("img", "").with_attributes(
            Attributes::new()
                .with("src", destination)
                .with("alt", text),
        ),
    };
    leaf.into()
}

impl From<&Span> for Node {
    fn from(span: &Span) -> Self {
        span_to_node(span)
    }
}

impl From<Span> for Node {
    fn from(span: Span) -> Self {
        span_to_node(&span)
    }
}
