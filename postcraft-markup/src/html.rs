//! HTML output for block trees.
//!
//! Every element carries a single class of the form `{platform}-{element}`,
//! e.g. `wechat-h2` or `toutiao-quote`, so one stylesheet can hold the visual
//! treatment for every platform. Text is always escaped.
use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::types::{Block, InlineSpan, Platform};

/// Render blocks as HTML, one element per line.
///
/// Image blocks and embedded images whose index has no entry in `images`
/// render nothing.
#[must_use]
pub fn render_html(
  blocks: &[Block],
  images: &[String],
  platform: Platform,
) -> String {
  blocks
    .iter()
    .filter_map(|block| block_html(block, images, platform))
    .collect::<Vec<_>>()
    .join("\n")
}

fn block_html(
  block: &Block,
  images: &[String],
  platform: Platform,
) -> Option<String> {
  let key = platform.key();
  let html = match block {
    Block::Heading { level, inline } => {
      let level = (*level).clamp(1, 6);
      format!(
        "<h{level} class=\"{key}-h{level}\">{}</h{level}>",
        inline_html(inline, images, platform)
      )
    },
    Block::Quote { inline } => {
      format!(
        "<blockquote class=\"{key}-quote\">{}</blockquote>",
        inline_html(inline, images, platform)
      )
    },
    Block::List { items } => {
      let mut html = format!("<ul class=\"{key}-list\">");
      for item in items {
        let _ = write!(
          html,
          "<li class=\"{key}-list-item\">{}</li>",
          inline_html(item, images, platform)
        );
      }
      html.push_str("</ul>");
      html
    },
    Block::Image { index } => {
      let url = images.get(*index)?;
      format!(
        "<figure class=\"{key}-figure\">{}</figure>",
        image_tag(url, platform)
      )
    },
    Block::Paragraph { inline } => {
      format!(
        "<p class=\"{key}-paragraph\">{}</p>",
        inline_html(inline, images, platform)
      )
    },
  };
  Some(html)
}

fn inline_html(
  spans: &[InlineSpan],
  images: &[String],
  platform: Platform,
) -> String {
  let mut html = String::new();
  for span in spans {
    match span {
      InlineSpan::Text(text) => {
        html.push_str(&encode_text(text).replace('\n', "<br>"));
      },
      InlineSpan::Bold(children) => {
        let _ = write!(
          html,
          "<strong class=\"{}-bold\">{}</strong>",
          platform.key(),
          inline_html(children, images, platform)
        );
      },
      InlineSpan::Image { index } => {
        if let Some(url) = images.get(*index) {
          html.push_str(&image_tag(url, platform));
        }
      },
    }
  }
  html
}

fn image_tag(url: &str, platform: Platform) -> String {
  format!(
    "<img class=\"{}-image\" src=\"{}\" alt=\"\">",
    platform.key(),
    encode_double_quoted_attribute(url)
  )
}
