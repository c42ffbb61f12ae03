//! Inline resolution: image placeholders first, then bold spans.
use std::sync::LazyLock;

use log::warn;
use regex::Regex;

use crate::{types::InlineSpan, utils};

static IMAGE_PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
  utils::compile_regex("IMAGE_PLACEHOLDER_RE", r"!\[img\]\(([0-9]+)\)")
});

// Non-greedy and single-line; `**` inside a bold span closes it.
static BOLD_RE: LazyLock<Regex> =
  LazyLock::new(|| utils::compile_regex("BOLD_RE", r"\*\*(.+?)\*\*"));

/// Resolve a placeholder index against the image list.
///
/// Returns `None` for indices past the end of the list, including ones too
/// large to fit in a `usize`.
#[must_use]
pub fn resolve_image_index(digits: &str, images: &[String]) -> Option<usize> {
  let index = digits.parse::<usize>().ok().filter(|i| *i < images.len());
  if index.is_none() {
    warn!(
      "Dropping image placeholder {digits}: only {} image(s) available",
      images.len()
    );
  }
  index
}

/// Turn a run of text into inline spans.
///
/// Embedded `![img](N)` placeholders become [`InlineSpan::Image`] when `N`
/// indexes into `images` and are dropped otherwise. The remaining text is
/// split on `**bold**` spans. Unterminated markers stay literal.
#[must_use]
pub fn resolve_inline(text: &str, images: &[String]) -> Vec<InlineSpan> {
  let mut spans = Vec::new();
  let mut last = 0;

  for caps in IMAGE_PLACEHOLDER_RE.captures_iter(text) {
    let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
      continue;
    };
    push_bold_spans(&text[last..whole.start()], &mut spans);
    if let Some(index) = resolve_image_index(digits.as_str(), images) {
      spans.push(InlineSpan::Image { index });
    }
    last = whole.end();
  }
  push_bold_spans(&text[last..], &mut spans);

  spans
}

fn push_bold_spans(text: &str, spans: &mut Vec<InlineSpan>) {
  let mut last = 0;

  for caps in BOLD_RE.captures_iter(text) {
    let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
      continue;
    };
    push_text(&text[last..whole.start()], spans);
    spans.push(InlineSpan::Bold(vec![InlineSpan::Text(
      inner.as_str().to_string(),
    )]));
    last = whole.end();
  }
  push_text(&text[last..], spans);
}

/// Append plain text, merging with a preceding text span. Adjacent text runs
/// appear when a dropped image sat between them.
fn push_text(text: &str, spans: &mut Vec<InlineSpan>) {
  if text.is_empty() {
    return;
  }
  if let Some(InlineSpan::Text(previous)) = spans.last_mut() {
    previous.push_str(text);
  } else {
    spans.push(InlineSpan::Text(text.to_string()));
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn text(s: &str) -> InlineSpan {
    InlineSpan::Text(s.to_string())
  }

  fn bold(s: &str) -> InlineSpan {
    InlineSpan::Bold(vec![text(s)])
  }

  #[test]
  fn test_plain_text() {
    assert_eq!(resolve_inline("hello", &[]), vec![text("hello")]);
  }

  #[test]
  fn test_empty_text_has_no_spans() {
    assert!(resolve_inline("", &[]).is_empty());
  }

  #[test]
  fn test_non_ascii_digit_placeholder_stays_literal() {
    let images = vec!["a.png".to_string()];
    assert_eq!(resolve_inline("看 ![img](٣) 这里", &images), vec![text(
      "看 ![img](٣) 这里"
    )]);
  }

  #[test]
  fn test_bold_span() {
    assert_eq!(resolve_inline("this is **bold** text", &[]), vec![
      text("this is "),
      bold("bold"),
      text(" text"),
    ]);
  }

  #[test]
  fn test_multiple_bold_spans_are_non_greedy() {
    assert_eq!(resolve_inline("**a** and **b**", &[]), vec![
      bold("a"),
      text(" and "),
      bold("b"),
    ]);
  }

  #[test]
  fn test_empty_bold_is_literal() {
    assert_eq!(resolve_inline("a **** b", &[]), vec![text("a **** b")]);
  }

  #[test]
  fn test_unterminated_bold_is_literal() {
    assert_eq!(resolve_inline("a **b c", &[]), vec![text("a **b c")]);
  }

  #[test]
  fn test_bold_does_not_span_lines() {
    assert_eq!(resolve_inline("**a\nb**", &[]), vec![text("**a\nb**")]);
  }

  #[test]
  fn test_embedded_image_in_range() {
    let images = vec!["a.png".to_string()];
    assert_eq!(resolve_inline("see ![img](0) here", &images), vec![
      text("see "),
      InlineSpan::Image { index: 0 },
      text(" here"),
    ]);
  }

  #[test]
  fn test_embedded_image_out_of_range_is_dropped() {
    assert_eq!(resolve_inline("see ![img](3) here", &[]), vec![text(
      "see  here"
    )]);
  }

  #[test]
  fn test_image_index_overflow_is_dropped() {
    assert_eq!(
      resolve_image_index("99999999999999999999999999", &["a".to_string()]),
      None
    );
  }

  #[test]
  fn test_bold_next_to_image() {
    let images = vec!["a.png".to_string()];
    assert_eq!(resolve_inline("**x**![img](0)", &images), vec![
      bold("x"),
      InlineSpan::Image { index: 0 },
    ]);
  }
}
