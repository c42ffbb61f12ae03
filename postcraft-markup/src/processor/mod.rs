//! Constrained Markdown renderer.
//!
//! The dialect is deliberately small: headings (levels 1–6), quotes,
//! unordered lists, `**bold**` spans and `![img](N)` image placeholders.
//! Anything else is kept as literal paragraph text, so rendering never fails.
//!
//! # Architecture
//!
//! - [`block`]: paragraph splitting and first-line block classification
//! - [`inline`]: image placeholder and bold span resolution
//! - [`types`]: renderer options, builder and the [`MarkupRenderer`] itself
pub mod block;
pub mod inline;
pub mod types;

pub use block::parse_blocks;
pub use inline::resolve_inline;
pub use types::{MarkupRenderer, RenderOptions, RenderOptionsBuilder};

use crate::types::Block;

/// Parse text into a block tree.
///
/// `images` is the ordered image list that `![img](N)` placeholders index
/// into; placeholders past its end render nothing.
///
/// # Examples
///
/// ```
/// use postcraft_markup::{Block, InlineSpan, render};
///
/// let blocks = render("- item one\n- item two", &[]);
/// assert_eq!(blocks, vec![Block::List {
///   items: vec![
///     vec![InlineSpan::Text("item one".to_string())],
///     vec![InlineSpan::Text("item two".to_string())],
///   ],
/// }]);
/// ```
#[must_use]
pub fn render(text: &str, images: &[String]) -> Vec<Block> {
  parse_blocks(text, images)
}
