//! # postcraft-markup
//!
//! Text core of the postcraft studio. Generated post text (a title and a
//! body) is projected into two independent views:
//!
//! - **Carousel slides**: the body is packed into cover/content/tags slides
//!   under a soft character budget, never splitting a paragraph.
//! - **Article blocks**: the body is parsed as a constrained Markdown dialect
//!   (headings, quotes, lists, bold spans and `![img](N)` placeholders) into a
//!   block tree that can be rendered to platform-styled HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use postcraft_markup::{Slide, segment, render};
//!
//! let slides = segment("My title", "First line\nSecond line #tag", 120);
//! assert_eq!(slides.len(), 3);
//! assert!(matches!(slides.last(), Some(Slide::Tags { .. })));
//!
//! let blocks = render("## Hello\nWorld", &[]);
//! assert_eq!(blocks.len(), 2);
//! ```
//!
//! ## Platform styling
//!
//! ```rust
//! use postcraft_markup::{MarkupRenderer, Platform, RenderOptionsBuilder};
//!
//! let options = RenderOptionsBuilder::new()
//!   .platform(Platform::Wechat)
//!   .images(vec!["https://example.com/a.png".to_string()])
//!   .build();
//! let renderer = MarkupRenderer::new(options);
//!
//! let html = renderer.render_html("# Title\n\n![img](0)");
//! assert!(html.contains("wechat-h1"));
//! assert!(html.contains("https://example.com/a.png"));
//! ```
//!
//! Every operation in this crate is pure: the same input always produces the
//! same output, and malformed input degrades to literal text instead of an
//! error.

pub mod carousel;
pub mod html;
pub mod processor;
pub mod prompt;
pub mod response;
pub mod segment;
mod types;
pub mod utils;

pub use crate::{
  carousel::Carousel,
  html::render_html,
  processor::{MarkupRenderer, RenderOptions, RenderOptionsBuilder, render},
  prompt::{GenerationOptions, GenerationRequest, PromptError},
  response::parse_response,
  segment::{DEFAULT_MAX_CHARS, Segmenter, segment},
  types::{Block, GeneratedContent, InlineSpan, Platform, PlatformError, Slide},
};
