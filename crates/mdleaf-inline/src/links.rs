//! Link and image extraction.
//!
//! Recognizes `[text](href)` and `![alt](src)`. Captions may contain word
//! characters and whitespace; destinations may also contain `:`, `/` and `.`.
//! Anything else (including nested or escaped brackets) prevents a match.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::span::Span;

/// Matches both forms; group 1 is the optional `!` image marker.
///
/// A bracket pair preceded by `!` is always consumed as an image here, so
/// filtering on group 1 keeps image syntax out of the link results.
static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([\w\s]*)\]\(([\w\s:/.]*)\)").expect("markup regex is valid")
});

#[derive(Clone, Copy, PartialEq, Eq)]
enum Markup {
    Link,
    Image,
}

impl Markup {
    fn of(caps: &Captures<'_>) -> Self {
        if caps[1].is_empty() {
            Self::Link
        } else {
            Self::Image
        }
    }

    fn span(self, caption: &str, url: &str) -> Span {
        match self {
            Self::Link => Span::link(caption, url),
            Self::Image => Span::image(caption, url),
        }
    }
}

fn extract(text: &str, markup: Markup) -> Vec<(String, String)> {
    MARKUP_RE
        .captures_iter(text)
        .filter(|caps| Markup::of(caps) == markup)
        .map(|caps| (caps[2].to_owned(), caps[3].to_owned()))
        .collect()
}

/// Find all `![alt](src)` occurrences, left to right.
///
/// ```
/// use mdleaf_inline::extract_images;
///
/// assert_eq!(
///     extract_images("![a](http://x/y)"),
///     vec![("a".to_owned(), "http://x/y".to_owned())]
/// );
/// ```
#[must_use]
pub fn extract_images(text: &str) -> Vec<(String, String)> {
    extract(text, Markup::Image)
}

/// Find all `[text](href)` occurrences that are not images, left to right.
#[must_use]
pub fn extract_links(text: &str) -> Vec<(String, String)> {
    extract(text, Markup::Link)
}

/// Split one span around every match of `markup`, appending to `out`.
///
/// Non-plain spans and plain spans without a match are passed through as-is.
/// Empty plain segments between matches are not emitted.
fn split_span(span: &Span, markup: Markup, out: &mut Vec<Span>) {
    if !span.is_plain() {
        out.push(span.clone());
        return;
    }

    let text = span.text();
    let mut cursor = 0;
    let mut matched = false;

    for caps in MARKUP_RE.captures_iter(text) {
        let Some(whole) = caps.get(0) else { continue };
        if Markup::of(&caps) != markup {
            continue;
        }
        push_plain(&text[cursor..whole.start()], out);
        out.push(markup.span(&caps[2], &caps[3]));
        cursor = whole.end();
        matched = true;
    }

    if matched {
        push_plain(&text[cursor..], out);
    } else {
        out.push(span.clone());
    }
}

fn push_plain(text: &str, out: &mut Vec<Span>) {
    if !text.is_empty() {
        out.push(Span::plain(text));
    }
}

/// Split images out of plain spans.
///
/// Returns one list per input span, in input order. Text after the last image
/// is kept as a trailing plain span.
#[must_use]
pub fn split_images(spans: &[Span]) -> Vec<Vec<Span>> {
    spans
        .iter()
        .map(|span| {
            let mut group = Vec::new();
            split_span(span, Markup::Image, &mut group);
            group
        })
        .collect()
}

/// Split links out of plain spans into one flat sequence.
///
/// ```
/// use mdleaf_inline::{Span, split_links};
///
/// let spans = split_links(&[Span::plain("Click [here](https://x.com) now")]);
/// assert_eq!(
///     spans,
///     vec![
///         Span::plain("Click "),
///         Span::link("here", "https://x.com"),
///         Span::plain(" now"),
///     ]
/// );
/// ```
#[must_use]
pub fn split_links(spans: &[Span]) -> Vec<Span> {
    let mut result = Vec::with_capacity(spans.len());
    for span in spans {
        split_span(span, Markup::Link, &mut result);
    }
    result
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::span::SpanKind;

    fn pair(a: &str, b: &str) -> (String, String) {
        (a.to_owned(), b.to_owned())
    }

    #[test]
    fn test_extract_single_image() {
        assert_eq!(
            extract_images("![a](http://x/y)"),
            vec![pair("a", "http://x/y")]
        );
    }

    #[test]
    fn test_extract_links_skips_images() {
        assert!(extract_links("![a](http://x/y)").is_empty());
    }

    #[test]
    fn test_extract_multiple_images() {
        let text = "This is text with a ![rick roll](https://i.imgur.com/aKaOqIh.gif) and ![obi wan](https://i.imgur.com/fJRm4Vk.jpeg)";
        assert_eq!(
            extract_images(text),
            vec![
                pair("rick roll", "https://i.imgur.com/aKaOqIh.gif"),
                pair("obi wan", "https://i.imgur.com/fJRm4Vk.jpeg"),
            ]
        );
    }

    #[test]
    fn test_extract_links_mixed_with_images() {
        let text = "[to boot dev](https://www.boot.dev) and ![img](a.png) and [to youtube](https://www.youtube.com/bootdotdev)";
        assert_eq!(
            extract_links(text),
            vec![
                pair("to boot dev", "https://www.boot.dev"),
                pair("to youtube", "https://www.youtube.com/bootdotdev"),
            ]
        );
        assert_eq!(extract_images(text), vec![pair("img", "a.png")]);
    }

    #[test]
    fn test_extract_adjacent_links() {
        assert_eq!(
            extract_links("[a](x)[b](y)"),
            vec![pair("a", "x"), pair("b", "y")]
        );
    }

    #[test]
    fn test_double_bang_is_image_not_link() {
        assert!(extract_links("!![a](x)").is_empty());
        assert_eq!(extract_images("!![a](x)"), vec![pair("a", "x")]);
    }

    #[test]
    fn test_disallowed_characters_prevent_match() {
        assert!(extract_links("[a-b](x)").is_empty());
        assert!(extract_links("[a](x?y=1)").is_empty());
        assert!(extract_images("![a[b]](x)").is_empty());
    }

    #[test]
    fn test_empty_caption_and_url_match() {
        let text = "[](x) and ![a]()";
        assert_eq!(extract_links(text), vec![pair("", "x")]);
        assert_eq!(extract_images(text), vec![pair("a", "")]);
    }

    #[test]
    fn test_unicode_word_characters_in_caption() {
        let spans = split_links(&[Span::plain("é [ü](ß) ñ")]);
        assert_eq!(
            spans,
            vec![Span::plain("é "), Span::link("ü", "ß"), Span::plain(" ñ")]
        );
    }

    #[test]
    fn test_split_links_end_to_end() {
        let spans = split_links(&[Span::plain("Click [here](https://x.com) now")]);
        assert_eq!(
            spans,
            vec![
                Span::plain("Click "),
                Span::link("here", "https://x.com"),
                Span::plain(" now"),
            ]
        );
    }

    #[test]
    fn test_split_links_match_at_edges() {
        let spans = split_links(&[Span::plain("[a](x) and [b](y)")]);
        assert_eq!(
            spans,
            vec![
                Span::link("a", "x"),
                Span::plain(" and "),
                Span::link("b", "y"),
            ]
        );
    }

    #[test]
    fn test_split_links_leaves_image_text() {
        let spans = split_links(&[Span::plain("![i](a.png) then [l](b)")]);
        assert_eq!(
            spans,
            vec![Span::plain("![i](a.png) then "), Span::link("l", "b")]
        );
    }

    #[test]
    fn test_split_links_passes_through() {
        let code = Span::styled("[a](x)", SpanKind::Code).unwrap();
        let spans = split_links(&[Span::plain("no links"), code.clone(), Span::plain("")]);
        assert_eq!(spans, vec![Span::plain("no links"), code, Span::plain("")]);
    }

    #[test]
    fn test_split_images_groups_per_input() {
        let groups = split_images(&[
            Span::plain("a ![x](x.png) b"),
            Span::plain("none here"),
            Span::plain("![y](y.png)"),
        ]);
        assert_eq!(
            groups,
            vec![
                vec![
                    Span::plain("a "),
                    Span::image("x", "x.png"),
                    Span::plain(" b"),
                ],
                vec![Span::plain("none here")],
                vec![Span::image("y", "y.png")],
            ]
        );
    }

    #[test]
    fn test_split_images_ignores_links() {
        let groups = split_images(&[Span::plain("[l](b) ![i](a.png)")]);
        assert_eq!(
            groups,
            vec![vec![Span::plain("[l](b) "), Span::image("i", "a.png")]]
        );
    }
}
