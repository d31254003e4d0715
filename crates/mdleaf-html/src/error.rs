//! Structural errors raised while building or rendering a node tree.

/// Node tree invariant violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum HtmlError {
    /// Leaf node has no value.
    #[error("leaf node <{}> has no value", .tag.as_deref().unwrap_or("text"))]
    MissingValue {
        /// Tag of the offending leaf, if any.
        tag: Option<String>,
    },
    /// Container node has an empty tag.
    #[error("container node has no tag")]
    MissingTag,
    /// Container node has no children.
    #[error("container node <{tag}> has no children")]
    EmptyChildren {
        /// Tag of the offending container.
        tag: String,
    },
}
