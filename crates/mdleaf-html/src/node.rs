//! Leaf and container nodes and their recursive rendering.

use crate::attributes::Attributes;
use crate::error::HtmlError;

/// A node in the renderable tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum Node {
    /// Childless node: raw text or a single wrapped tag.
    Leaf(LeafNode),
    /// Tagged node wrapping one or more children.
    Container(ContainerNode),
}

/// Node without children.
///
/// A leaf without a tag renders as its raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeafNode {
    /// Element tag, `None` for raw text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tag: Option<String>,
    /// Text content. Always set by the constructors; rendering fails if absent.
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Option<String>,
    /// Element attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
}

/// Node wrapping an ordered, non-empty list of children under a tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerNode {
    /// Element tag. Empty counts as missing.
    pub tag: String,
    /// Child nodes, rendered in order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<Node>,
    /// Element attributes.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attributes: Attributes,
}

impl LeafNode {
    /// Create a tagged leaf.
    #[must_use]
    pub fn new(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Create a raw text leaf (no tag).
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            tag: None,
            value: Some(value.into()),
            attributes: Attributes::new(),
        }
    }

    /// Attach attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Render this leaf.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::MissingValue`] if the value is absent.
    pub fn render(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Append the rendered leaf to `out`.
    ///
    /// `out` is left untouched on error.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::MissingValue`] if the value is absent.
    pub fn render_into(&self, out: &mut String) -> Result<(), HtmlError> {
        let value = self.value.as_deref().ok_or_else(|| HtmlError::MissingValue {
            tag: self.tag.clone(),
        })?;

        match self.tag.as_deref() {
            None => out.push_str(value),
            Some(tag) => {
                open_tag(tag, &self.attributes, out);
                out.push_str(value);
                close_tag(tag, out);
            }
        }
        Ok(())
    }
}

impl ContainerNode {
    /// Create a container, validating tag and children up front.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError::MissingTag`] for an empty tag and
    /// [`HtmlError::EmptyChildren`] when `children` is empty.
    pub fn new(tag: impl Into<String>, children: Vec<Node>) -> Result<Self, HtmlError> {
        let node = Self {
            tag: tag.into(),
            children,
            attributes: Attributes::new(),
        };
        node.validate()?;
        Ok(node)
    }

    /// Attach attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Check this container's own invariants (not its descendants).
    fn validate(&self) -> Result<(), HtmlError> {
        if self.tag.is_empty() {
            return Err(HtmlError::MissingTag);
        }
        if self.children.is_empty() {
            return Err(HtmlError::EmptyChildren {
                tag: self.tag.clone(),
            });
        }
        Ok(())
    }

    /// Render this container and all of its descendants.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found in the subtree.
    pub fn render(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Append the rendered container to `out`.
    ///
    /// On error `out` may hold a partial rendering.
    ///
    /// # Errors
    ///
    /// Returns the first invariant violation found in the subtree.
    pub fn render_into(&self, out: &mut String) -> Result<(), HtmlError> {
        self.validate()?;

        open_tag(&self.tag, &self.attributes, out);
        for child in &self.children {
            child.render_into(out)?;
        }
        close_tag(&self.tag, out);
        Ok(())
    }
}

impl Node {
    /// Render the node to markup.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError`] if the node or any descendant breaks a structural
    /// invariant.
    pub fn render(&self) -> Result<String, HtmlError> {
        let mut out = String::new();
        self.render_into(&mut out)?;
        Ok(out)
    }

    /// Append the rendered node to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`HtmlError`] if the node or any descendant breaks a structural
    /// invariant.
    pub fn render_into(&self, out: &mut String) -> Result<(), HtmlError> {
        match self {
            Self::Leaf(leaf) => leaf.render_into(out),
            Self::Container(container) => container.render_into(out),
        }
    }

    /// Element tag, if any.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Leaf(leaf) => leaf.tag.as_deref(),
            Self::Container(container) => Some(container.tag.as_str()),
        }
    }

    /// Element attributes.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        match self {
            Self::Leaf(leaf) => &leaf.attributes,
            Self::Container(container) => &container.attributes,
        }
    }
}

impl From<LeafNode> for Node {
    fn from(leaf: LeafNode) -> Self {
        Self::Leaf(leaf)
    }
}

impl From<ContainerNode> for Node {
    fn from(container: ContainerNode) -> Self {
        Self::Container(container)
    }
}

/// Render a single node.
///
/// # Errors
///
/// See [`Node::render`].
pub fn render(node: &Node) -> Result<String, HtmlError> {
    node.render()
}

/// Render a sequence of nodes and concatenate the results.
///
/// # Errors
///
/// Returns the first invariant violation found in any node.
pub fn render_all(nodes: &[Node]) -> Result<String, HtmlError> {
    let mut out = String::new();
    for node in nodes {
        node.render_into(&mut out)?;
    }
    Ok(out)
}

fn open_tag(tag: &str, attributes: &Attributes, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    attributes.write_to(out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}
