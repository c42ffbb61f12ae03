//! Parsing of sectioned generation replies.
//!
//! Replies are expected in the format requested by
//! [`crate::prompt::SYSTEM_PROMPT`]:
//!
//! ```text
//! 【标题】
//! title
//!
//! 【正文】
//! body
//!
//! 【话题】
//! #tag #tag
//! ```
//!
//! Models do not always comply, so every section is optional.
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::{types::GeneratedContent, utils};

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
  utils::compile_regex("TITLE_RE", r"(?s)【标题】\s*(.*?)\s*【正文】")
});

static BODY_RE: LazyLock<Regex> = LazyLock::new(|| {
  utils::compile_regex("BODY_RE", r"(?s)【正文】\s*(.*?)\s*(?:【话题】|\z)")
});

static TAGS_RE: LazyLock<Regex> =
  LazyLock::new(|| utils::compile_regex("TAGS_RE", r"(?s)【话题】\s*(.*)"));

fn capture_section(re: &Regex, text: &str) -> String {
  re.captures(text)
    .and_then(|caps| caps.get(1))
    .map_or_else(String::new, |m| m.as_str().trim().to_string())
}

/// Split a reply into title and body.
///
/// The topic section is appended to the body after a blank line, so hashtags
/// reach the slide segmenter. If neither a title nor a body section is found,
/// the whole reply becomes the body and `fallback_title` the title.
///
/// # Examples
///
/// ```
/// use postcraft_markup::parse_response;
///
/// let reply = "【标题】\n周末去露营\n\n【正文】\n带上帐篷\n\n【话题】\n#露营 #周末";
/// let content = parse_response(reply, "露营");
/// assert_eq!(content.title, "周末去露营");
/// assert_eq!(content.body, "带上帐篷\n\n#露营 #周末");
/// ```
#[must_use]
pub fn parse_response(text: &str, fallback_title: &str) -> GeneratedContent {
  let title = capture_section(&TITLE_RE, text);
  let mut body = capture_section(&BODY_RE, text);
  let tags = capture_section(&TAGS_RE, text);

  if !body.is_empty() && !tags.is_empty() {
    body.push_str("\n\n");
    body.push_str(&tags);
  }

  if title.is_empty() && body.is_empty() {
    debug!("Reply has no recognizable sections, using it verbatim");
    return GeneratedContent {
      title: fallback_title.to_string(),
      body:  text.to_string(),
    };
  }

  GeneratedContent { title, body }
}
