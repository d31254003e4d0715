//! Typed inline text spans.

use std::fmt;
use std::str::FromStr;

use crate::error::InlineError;

/// Kind of inline span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SpanKind {
    /// Unstyled text.
    Plain,
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
    /// `` `code` ``
    Code,
    /// `[text](href)`
    Link,
    /// `![alt](src)`
    Image,
}

impl SpanKind {
    /// Lowercase name, as used in configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Code => "code",
            Self::Link => "link",
            Self::Image => "image",
        }
    }

    /// True for kinds that carry a destination URL.
    #[must_use]
    pub fn has_destination(self) -> bool {
        matches!(self, Self::Link | Self::Image)
    }

    /// True for kinds produced by a literal delimiter.
    #[must_use]
    pub fn is_delimited(self) -> bool {
        matches!(self, Self::Bold | Self::Italic | Self::Code)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = InlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "bold" => Ok(Self::Bold),
            "italic" => Ok(Self::Italic),
            "code" => Ok(Self::Code),
            "link" => Ok(Self::Link),
            "image" => Ok(Self::Image),
            other => Err(InlineError::UnknownSpanKind(other.to_owned())),
        }
    }
}

/// Unit of inline text with its kind.
///
/// Links and images always carry a destination; every other kind never does.
/// The constructors enforce this, and a span is never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawSpan"))]
pub struct Span {
    text: String,
    kind: SpanKind,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    destination: Option<String>,
}

impl Span {
    /// Create a span, checking that `destination` matches `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`InlineError::InvalidSpanKind`] if a link or image has no
    /// destination, or any other kind has one.
    pub fn new(
        text: impl Into<String>,
        kind: SpanKind,
        destination: Option<String>,
    ) -> Result<Self, InlineError> {
        match (kind.has_destination(), destination.is_some()) {
            (true, false) => Err(InlineError::InvalidSpanKind {
                kind,
                reason: "requires a destination",
            }),
            (false, true) => Err(InlineError::InvalidSpanKind {
                kind,
                reason: "cannot have a destination",
            }),
            _ => Ok(Self {
                text: text.into(),
                kind,
                destination,
            }),
        }
    }

    /// Plain text span.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self::unchecked(text, SpanKind::Plain, None)
    }

    /// Span of a kind without destination.
    ///
    /// # Errors
    ///
    /// Returns [`InlineError::InvalidSpanKind`] for links and images.
    pub fn styled(text: impl Into<String>, kind: SpanKind) -> Result<Self, InlineError> {
        Self::new(text, kind, None)
    }

    /// Link span.
    #[must_use]
    pub fn link(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self::unchecked(text, SpanKind::Link, Some(href.into()))
    }

    /// Image span. `alt` becomes the span text.
    #[must_use]
    pub fn image(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self::unchecked(alt, SpanKind::Image, Some(src.into()))
    }

    /// Construct without checking; callers uphold the destination invariant.
    pub(crate) fn unchecked(
        text: impl Into<String>,
        kind: SpanKind,
        destination: Option<String>,
    ) -> Self {
        debug_assert_eq!(kind.has_destination(), destination.is_some());
        Self {
            text: text.into(),
            kind,
            destination,
        }
    }

    /// Span text (alt text for images).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Span kind.
    #[must_use]
    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    /// Link or image destination.
    #[must_use]
    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }

    /// True for plain spans.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

/// Deserialization shape for [`Span`]; converted through [`Span::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpan {
    text: String,
    kind: SpanKind,
    #[serde(default)]
    destination: Option<String>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawSpan> for Span {
    type Error = InlineError;

    fn try_from(raw: RawSpan) -> Result<Self, Self::Error> {
        Self::new(raw.text, raw.kind, raw.destination)
    }
}
