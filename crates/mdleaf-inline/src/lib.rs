//! Inline markdown tokenizer.
//!
//! Turns a flat string with inline markup into typed [`Span`]s and then into
//! [`mdleaf_html::Node`] leaves ready for rendering.
//!
//! # Pipeline
//!
//! 1. [`split_by_delimiter`] splits spans on a literal delimiter (`` ` ``,
//!    `**`, `*`) into alternating plain and styled spans.
//! 2. [`split_images`] and [`split_links`] pull `![alt](src)` and
//!    `[text](href)` out of plain spans.
//! 3. [`span_to_node`] maps every span to a leaf node.
//!
//! [`InlineParser`] wires these stages together with a configurable
//! delimiter table.
//!
//! # Example
//!
//! ```
//! use mdleaf_inline::InlineParser;
//!
//! let html = InlineParser::new()
//!     .render("This is **bold** with a [link](https://example.com)")
//!     .unwrap();
//! assert_eq!(
//!     html,
//!     r#"This is <b>bold</b> with a <a href="https://example.com">link</a>"#
//! );
//! ```

mod convert;
mod delimiter;
mod error;
mod links;
mod parser;
mod span;

pub use convert::span_to_node;
pub use delimiter::split_by_delimiter;
pub use error::InlineError;
pub use links::{extract_images, extract_links, split_images, split_links};
pub use parser::{Delimiter, InlineParser, text_to_nodes, text_to_spans};
pub use span::{Span, SpanKind};
