//! Carousel slide segmentation.
//!
//! A post body is packed into slides for a fixed-aspect carousel. The budget
//! is a soft packing threshold: paragraphs are never split, so a single
//! paragraph longer than the budget becomes its own oversized slide.
//!
//! Paragraphs here are newline-delimited. The article renderer in
//! [`crate::processor`] splits on blank lines instead; slides favour compact
//! text while articles follow Markdown paragraph flow.
//!
//! # Examples
//!
//! ```
//! use postcraft_markup::{Slide, segment};
//!
//! let body = format!("{}\n{}", "A".repeat(50), "B".repeat(80));
//! let slides = segment("Title", &body, 120);
//!
//! assert_eq!(slides, vec![
//!   Slide::Cover { content: "Title".to_string() },
//!   Slide::Content { content: "A".repeat(50) },
//!   Slide::Content { content: "B".repeat(80) },
//! ]);
//! ```
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::{types::Slide, utils};

/// Default per-slide character budget.
pub const DEFAULT_MAX_CHARS: usize = 120;

/// Separator placed between paragraphs packed into the same slide.
const PARAGRAPH_JOINER: &str = "\n\n";

static HASHTAG_RE: LazyLock<Regex> =
  LazyLock::new(|| utils::compile_regex("HASHTAG_RE", r"#\S+"));

/// Collect hashtag tokens (`#` followed by non-whitespace) in source order.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<String> {
  HASHTAG_RE
    .find_iter(text)
    .map(|m| m.as_str().to_string())
    .collect()
}

/// Remove every hashtag token and trim the result.
#[must_use]
pub fn strip_hashtags(text: &str) -> String {
  HASHTAG_RE.replace_all(text, "").trim().to_string()
}

/// Split a post into carousel slides.
///
/// The result always starts with a [`Slide::Cover`] holding `title`, followed
/// by zero or more [`Slide::Content`] slides in paragraph order, followed by a
/// [`Slide::Tags`] slide if the body contains hashtags.
///
/// A paragraph is appended to the current slide while the slide's length plus
/// the paragraph's length stays below `max_chars`; otherwise the slide is
/// flushed and the paragraph starts a new one.
#[must_use]
pub fn segment(title: &str, body: &str, max_chars: usize) -> Vec<Slide> {
  let mut slides = vec![Slide::Cover {
    content: title.to_string(),
  }];

  let tags = extract_hashtags(body).join(" ");
  let cleaned = strip_hashtags(body);

  let mut buffer = String::new();
  let mut buffer_len = 0;

  for paragraph in cleaned.split('\n').filter(|line| !line.trim().is_empty())
  {
    let paragraph_len = utils::char_len(paragraph);

    if buffer_len + paragraph_len < max_chars {
      if !buffer.is_empty() {
        buffer.push_str(PARAGRAPH_JOINER);
        buffer_len += PARAGRAPH_JOINER.len();
      }
      buffer.push_str(paragraph);
      buffer_len += paragraph_len;
    } else {
      if !buffer.is_empty() {
        slides.push(Slide::Content {
          content: std::mem::take(&mut buffer),
        });
      }
      buffer.push_str(paragraph);
      buffer_len = paragraph_len;
    }
  }

  if !buffer.is_empty() {
    slides.push(Slide::Content { content: buffer });
  }

  if !tags.is_empty() {
    slides.push(Slide::Tags { content: tags });
  }

  debug!("Segmented post into {} slides", slides.len());
  slides
}

/// Slide segmenter bound to a character budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segmenter {
  max_chars: usize,
}

impl Segmenter {
  #[must_use]
  pub const fn new(max_chars: usize) -> Self {
    Self { max_chars }
  }

  #[must_use]
  pub const fn max_chars(&self) -> usize {
    self.max_chars
  }

  /// Split a post into slides using this segmenter's budget.
  #[must_use]
  pub fn segment(&self, title: &str, body: &str) -> Vec<Slide> {
    segment(title, body, self.max_chars)
  }
}

impl Default for Segmenter {
  fn default() -> Self {
    Self::new(DEFAULT_MAX_CHARS)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_extract_hashtags_preserves_order() {
    assert_eq!(
      extract_hashtags("a #one b #two\n#three"),
      vec!["#one", "#two", "#three"]
    );
  }

  #[test]
  fn test_extract_hashtags_requires_a_character_after_hash() {
    assert!(extract_hashtags("a # b").is_empty());
  }

  #[test]
  fn test_strip_hashtags_trims() {
    assert_eq!(strip_hashtags("hello #x #y "), "hello");
  }

  #[test]
  fn test_separator_counts_toward_budget() {
    // 5 + 2 + 5 = 12, so a third 5-char line does not fit under 15.
    let slides = segment("t", "aaaaa\nbbbbb\nccccc", 15);
    assert_eq!(slides.len(), 3);
    assert_eq!(slides[1].content(), "aaaaa\n\nbbbbb");
    assert_eq!(slides[2].content(), "ccccc");
  }

  #[test]
  fn test_budget_counts_characters_not_bytes() {
    let body = format!("{}\n{}", "字".repeat(50), "书".repeat(60));
    let slides = segment("t", &body, 120);
    assert_eq!(slides.len(), 2);
  }

  #[test]
  fn test_zero_budget_puts_each_paragraph_on_its_own_slide() {
    let slides = segment("t", "a\nb\nc", 0);
    assert_eq!(slides.len(), 4);
  }

  #[test]
  fn test_segmenter_default_budget() {
    assert_eq!(Segmenter::default().max_chars(), DEFAULT_MAX_CHARS);
    assert_eq!(
      Segmenter::new(10).segment("t", "abcdefgh\nij"),
      segment("t", "abcdefgh\nij", 10)
    );
  }
}
