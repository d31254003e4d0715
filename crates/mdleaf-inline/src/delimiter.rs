//! Literal delimiter splitting (`` ` ``, `**`, `*`).

use crate::error::InlineError;
use crate::span::{Span, SpanKind};

/// Split every span on `delimiter` into alternating plain and `kind` spans.
///
/// The text of each span is split on every occurrence of the delimiter.
/// Tokens at odd positions become `kind`, tokens at even positions become
/// plain, and the last token is always appended as plain. The input span's own
/// kind is not consulted.
///
/// Delimiter balance is not checked: `"a `b"` yields plain `"a "`, code `"b"`
/// and a trailing plain `"b"`. Empty tokens are kept.
///
/// # Errors
///
/// - [`InlineError::MalformedMarkup`] if any span does not contain the
///   delimiter. The whole batch is rejected.
/// - [`InlineError::EmptyDelimiter`] if `delimiter` is empty.
/// - [`InlineError::InvalidSpanKind`] if `kind` is not bold, italic or code.
///
/// # Examples
///
/// ```
/// use mdleaf_inline::{Span, SpanKind, split_by_delimiter};
///
/// let spans = split_by_delimiter(
///     &[Span::plain("This is text with a `code block` word")],
///     "`",
///     SpanKind::Code,
/// )
/// .unwrap();
///
/// assert_eq!(spans[1], Span::styled("code block", SpanKind::Code).unwrap());
/// ```
pub fn split_by_delimiter(
    spans: &[Span],
    delimiter: &str,
    kind: SpanKind,
) -> Result<Vec<Span>, InlineError> {
    check_delimiter(delimiter, kind)?;

    let mut result = Vec::with_capacity(spans.len() * 3);
    for span in spans {
        if !span.text().contains(delimiter) {
            return Err(InlineError::MalformedMarkup {
                delimiter: delimiter.to_owned(),
                text: span.text().to_owned(),
            });
        }

        let tokens: Vec<&str> = span.text().split(delimiter).collect();
        for idx in (1..tokens.len()).step_by(2) {
            result.push(Span::plain(tokens[idx - 1]));
            result.push(Span::unchecked(tokens[idx], kind, None));
        }
        if let Some(last) = tokens.last() {
            result.push(Span::plain(*last));
        }
    }

    Ok(result)
}

/// Validate a delimiter/kind pair.
pub(crate) fn check_delimiter(delimiter: &str, kind: SpanKind) -> Result<(), InlineError> {
    if delimiter.is_empty() {
        return Err(InlineError::EmptyDelimiter);
    }
    if !kind.is_delimited() {
        return Err(InlineError::InvalidSpanKind {
            kind,
            reason: "delimiters can only produce bold, italic or code spans",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn styled(text: &str, kind: SpanKind) -> Span {
        Span::styled(text, kind).unwrap()
    }

    fn kinds(spans: &[Span]) -> Vec<SpanKind> {
        spans.iter().map(Span::kind).collect()
    }

    #[test]
    fn test_split_code() {
        let spans = split_by_delimiter(
            &[Span::plain("This is text with a `code block` word")],
            "`",
            SpanKind::Code,
        )
        .unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with a "),
                styled("code block", SpanKind::Code),
                Span::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_italic_ignores_input_kind() {
        let input = styled("This is text with an *italic* word", SpanKind::Italic);
        let spans = split_by_delimiter(&[input], "*", SpanKind::Italic).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("This is text with an "),
                styled("italic", SpanKind::Italic),
                Span::plain(" word"),
            ]
        );
    }

    #[test]
    fn test_split_bold_multi_char_delimiter() {
        let spans = split_by_delimiter(
            &[Span::plain("This is text with an **bold** word")],
            "**",
            SpanKind::Bold,
        )
        .unwrap();
        assert_eq!(
            kinds(&spans),
            vec![SpanKind::Plain, SpanKind::Bold, SpanKind::Plain]
        );
        assert_eq!(spans[1].text(), "bold");
    }

    #[test]
    fn test_split_multiple_runs() {
        let spans = split_by_delimiter(
            &[Span::plain("This is `text` with multiple `code` block words.")],
            "`",
            SpanKind::Code,
        )
        .unwrap();
        assert_eq!(spans.len(), 5);
        assert_eq!(
            spans.iter().filter(|s| s.kind() == SpanKind::Code).count(),
            2
        );
        assert_eq!(spans.iter().filter(|s| s.is_plain()).count(), 3);
    }

    #[test]
    fn test_split_keeps_empty_tokens() {
        let spans = split_by_delimiter(&[Span::plain("`a`")], "`", SpanKind::Code).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain(""),
                styled("a", SpanKind::Code),
                Span::plain("")
            ]
        );
    }

    #[test]
    fn test_split_unbalanced_repeats_trailing_token() {
        let spans = split_by_delimiter(&[Span::plain("a `b")], "`", SpanKind::Code).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("a "),
                styled("b", SpanKind::Code),
                Span::plain("b"),
            ]
        );
    }

    #[test]
    fn test_split_three_delimiters() {
        let spans = split_by_delimiter(&[Span::plain("a`b`c`d")], "`", SpanKind::Code).unwrap();
        assert_eq!(
            spans,
            vec![
                Span::plain("a"),
                styled("b", SpanKind::Code),
                Span::plain("c"),
                styled("d", SpanKind::Code),
                Span::plain("d"),
            ]
        );
    }

    #[test]
    fn test_split_several_spans_in_order() {
        let spans = split_by_delimiter(
            &[Span::plain("x *y* z"), Span::plain("*w*")],
            "*",
            SpanKind::Italic,
        )
        .unwrap();
        assert_eq!(
            kinds(&spans),
            vec![
                SpanKind::Plain,
                SpanKind::Italic,
                SpanKind::Plain,
                SpanKind::Plain,
                SpanKind::Italic,
                SpanKind::Plain,
            ]
        );
    }

    #[test]
    fn test_missing_delimiter_rejects_batch() {
        let result = split_by_delimiter(
            &[
                Span::plain("has `code` here"),
                Span::plain("This is text with a `code block` word."),
            ],
            "*",
            SpanKind::Code,
        );
        assert_eq!(
            result,
            Err(InlineError::MalformedMarkup {
                delimiter: "*".to_owned(),
                text: "has `code` here".to_owned(),
            })
        );
    }

    #[test]
    fn test_one_bad_span_rejects_batch() {
        let result = split_by_delimiter(
            &[Span::plain("ok `x`"), Span::plain("no delimiter")],
            "`",
            SpanKind::Code,
        );
        assert!(matches!(result, Err(InlineError::MalformedMarkup { .. })));
    }

    #[test]
    fn test_empty_input_is_ok() {
        assert_eq!(split_by_delimiter(&[], "`", SpanKind::Code), Ok(Vec::new()));
    }

    #[test]
    fn test_rejects_plain_target() {
        let result = split_by_delimiter(&[Span::plain("`x`")], "`", SpanKind::Plain);
        assert!(matches!(
            result,
            Err(InlineError::InvalidSpanKind {
                kind: SpanKind::Plain,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_link_target() {
        let result = split_by_delimiter(&[Span::plain("`x`")], "`", SpanKind::Link);
        assert!(matches!(
            result,
            Err(InlineError::InvalidSpanKind {
                kind: SpanKind::Link,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_delimiter() {
        assert_eq!(
            split_by_delimiter(&[Span::plain("x")], "", SpanKind::Bold),
            Err(InlineError::EmptyDelimiter)
        );
    }
}
