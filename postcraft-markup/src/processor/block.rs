//! Block classification for the constrained Markdown dialect.
//!
//! Text is split into paragraphs on blank lines. Each paragraph is classified
//! by its first line only, in priority order:
//!
//! 1. a whole-paragraph `![img](N)` placeholder
//! 2. a heading (`#` to `######` followed by whitespace)
//! 3. a quote (`>`)
//! 4. a list (`- `), where every line is an item
//! 5. a plain paragraph
use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use super::inline::{resolve_image_index, resolve_inline};
use crate::{types::Block, utils};

static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
  LazyLock::new(|| utils::compile_regex("PARAGRAPH_BREAK_RE", r"\n\s*\n"));

static WHOLE_IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
  utils::compile_regex("WHOLE_IMAGE_RE", r"^!\[img\]\(([0-9]+)\)$")
});

static HEADING_RE: LazyLock<Regex> =
  LazyLock::new(|| utils::compile_regex("HEADING_RE", r"^(#{1,6})\s+(.*)$"));

static QUOTE_PREFIX_RE: LazyLock<Regex> =
  LazyLock::new(|| utils::compile_regex("QUOTE_PREFIX_RE", r"^>\s*"));

const LIST_MARKER: &str = "- ";

/// Parse text into a sequence of blocks.
#[must_use]
pub fn parse_blocks(text: &str, images: &[String]) -> Vec<Block> {
  let mut blocks = Vec::new();

  for paragraph in PARAGRAPH_BREAK_RE.split(text) {
    let paragraph = paragraph.trim();
    if paragraph.is_empty() {
      continue;
    }
    push_paragraph(paragraph, images, &mut blocks);
  }

  debug!("Parsed {} blocks", blocks.len());
  blocks
}

fn push_paragraph(paragraph: &str, images: &[String], blocks: &mut Vec<Block>) {
  if let Some(caps) = WHOLE_IMAGE_RE.captures(paragraph) {
    if let Some(index) = resolve_image_index(&caps[1], images) {
      blocks.push(Block::Image { index });
    }
    return;
  }

  let (first_line, rest) =
    paragraph.split_once('\n').unwrap_or((paragraph, ""));

  if let Some(caps) = HEADING_RE.captures(first_line) {
    // The pattern caps the run at six, so the conversion cannot fail.
    let level = u8::try_from(caps[1].len()).unwrap_or(6);
    blocks.push(Block::Heading {
      level,
      inline: resolve_inline(caps[2].trim(), images),
    });

    let rest = rest.trim();
    if !rest.is_empty() {
      blocks.push(Block::Paragraph {
        inline: resolve_inline(rest, images),
      });
    }
    return;
  }

  if paragraph.starts_with('>') {
    let quoted = QUOTE_PREFIX_RE.replace(paragraph, "");
    blocks.push(Block::Quote {
      inline: resolve_inline(&quoted, images),
    });
    return;
  }

  if paragraph.starts_with(LIST_MARKER) {
    let items = paragraph
      .lines()
      .map(|line| {
        let line = line.trim();
        line.strip_prefix(LIST_MARKER).unwrap_or(line).trim()
      })
      .filter(|item| !item.is_empty())
      .map(|item| resolve_inline(item, images))
      .collect();
    blocks.push(Block::List { items });
    return;
  }

  blocks.push(Block::Paragraph {
    inline: resolve_inline(paragraph, images),
  });
}
