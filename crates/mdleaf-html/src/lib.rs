//! HTML node tree for rendered inline markdown.
//!
//! A document is a tree of [`Node`]s. Each node is either a [`LeafNode`]
//! (optional tag plus a text value) or a [`ContainerNode`] (required tag plus
//! at least one child). Rendering walks the tree recursively and checks the
//! structural invariants on the way, so an invalid tree can be built but never
//! serialized.
//!
//! # Example
//!
//! ```
//! use mdleaf_html::{ContainerNode, LeafNode, Node};
//!
//! let paragraph = ContainerNode::new(
//!     "p",
//!     vec![
//!         LeafNode::new("b", "Bold text").into(),
//!         LeafNode::text(" and plain text").into(),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     Node::from(paragraph).render().unwrap(),
//!     "<p><b>Bold text</b> and plain text</p>"
//! );
//! ```

mod attributes;
mod error;
mod node;

pub use attributes::Attributes;
pub use error::HtmlError;
pub use node::{ContainerNode, LeafNode, Node, render, render_all};
