//! Type definitions for the renderer.
//!
//! # Examples
//!
//! ```
//! use postcraft_markup::{MarkupRenderer, Platform, RenderOptions};
//!
//! let options = RenderOptions {
//!   platform: Platform::Toutiao,
//!   ..Default::default()
//! };
//!
//! let renderer = MarkupRenderer::new(options);
//! assert_eq!(renderer.options().platform, Platform::Toutiao);
//! ```
use log::debug;

use super::block::parse_blocks;
use crate::{
  html,
  types::{Block, Platform},
};

/// Options for configuring the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
  /// Style key used by HTML output. Does not affect parsing.
  pub platform: Platform,

  /// Ordered image references that `![img](N)` placeholders index into.
  pub images: Vec<String>,
}

/// Constrained Markdown renderer.
///
/// Cheap to clone; holds only its options.
#[derive(Debug, Clone, Default)]
pub struct MarkupRenderer {
  options: RenderOptions,
}

impl MarkupRenderer {
  #[must_use]
  pub const fn new(options: RenderOptions) -> Self {
    Self { options }
  }

  #[must_use]
  pub const fn options(&self) -> &RenderOptions {
    &self.options
  }

  /// Parse text into a block tree, resolving image placeholders against the
  /// configured image list.
  #[must_use]
  pub fn render(&self, text: &str) -> Vec<Block> {
    parse_blocks(text, &self.options.images)
  }

  /// Parse text and render it as HTML styled for the configured platform.
  #[must_use]
  pub fn render_html(&self, text: &str) -> String {
    let blocks = self.render(text);
    debug!(
      "Rendering {} blocks for platform {}",
      blocks.len(),
      self.options.platform
    );
    html::render_html(&blocks, &self.options.images, self.options.platform)
  }
}

/// Builder for constructing `RenderOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct RenderOptionsBuilder {
  options: RenderOptions,
}

impl RenderOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Set the target platform.
  #[must_use]
  pub const fn platform(mut self, platform: Platform) -> Self {
    self.options.platform = platform;
    self
  }

  /// Replace the image list.
  #[must_use]
  pub fn images(mut self, images: Vec<String>) -> Self {
    self.options.images = images;
    self
  }

  /// Append a single image reference.
  #[must_use]
  pub fn image<S: Into<String>>(mut self, image: S) -> Self {
    self.options.images.push(image.into());
    self
  }

  /// Build the final `RenderOptions`.
  #[must_use]
  pub fn build(self) -> RenderOptions {
    self.options
  }
}
