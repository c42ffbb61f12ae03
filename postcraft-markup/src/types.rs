//! Types for the postcraft-markup public API.
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// One unit of a carousel presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Slide {
  /// Always the first slide. Holds the post title.
  Cover { content: String },
  /// A run of body paragraphs joined by blank lines.
  Content { content: String },
  /// Space-joined hashtags collected from the body. Always last.
  Tags { content: String },
}

impl Slide {
  /// Text carried by the slide, regardless of its kind.
  #[must_use]
  pub fn content(&self) -> &str {
    match self {
      Self::Cover { content }
      | Self::Content { content }
      | Self::Tags { content } => content.as_str(),
    }
  }

  /// Lowercase name of the slide kind, as used in serialized output.
  #[must_use]
  pub const fn kind(&self) -> &'static str {
    match self {
      Self::Cover { .. } => "cover",
      Self::Content { .. } => "content",
      Self::Tags { .. } => "tags",
    }
  }
}

/// A run of text inside a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineSpan {
  Text(String),
  /// Bold spans are never nested; the children are a single `Text`.
  Bold(Vec<InlineSpan>),
  /// An `![img](N)` placeholder embedded in running text.
  Image { index: usize },
}

/// Structural unit of a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
  Heading { level: u8, inline: Vec<InlineSpan> },
  Quote { inline: Vec<InlineSpan> },
  List { items: Vec<Vec<InlineSpan>> },
  /// Index into the image list supplied at render time.
  Image { index: usize },
  Paragraph { inline: Vec<InlineSpan> },
}

/// Post title and body, as parsed from a generated reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
  pub title: String,
  pub body:  String,
}

/// Target platform. Only selects presentation class names; parsing is the
/// same for every platform.
#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
  #[default]
  Xiaohongshu,
  Wechat,
  Toutiao,
  Baijiahao,
  Sohu,
  Seo,
}

impl Platform {
  /// All supported platforms, in menu order.
  pub const ALL: [Self; 6] = [
    Self::Xiaohongshu,
    Self::Wechat,
    Self::Toutiao,
    Self::Baijiahao,
    Self::Sohu,
    Self::Seo,
  ];

  /// Lowercase key used in config files, the CLI and CSS class names.
  #[must_use]
  pub const fn key(self) -> &'static str {
    match self {
      Self::Xiaohongshu => "xiaohongshu",
      Self::Wechat => "wechat",
      Self::Toutiao => "toutiao",
      Self::Baijiahao => "baijiahao",
      Self::Sohu => "sohu",
      Self::Seo => "seo",
    }
  }

  /// Human-readable platform name.
  #[must_use]
  pub const fn display_name(self) -> &'static str {
    match self {
      Self::Xiaohongshu => "小红书",
      Self::Wechat => "微信公众号",
      Self::Toutiao => "今日头条",
      Self::Baijiahao => "百家号",
      Self::Sohu => "搜狐号",
      Self::Seo => "SEO",
    }
  }
}

impl fmt::Display for Platform {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.key())
  }
}

/// Error returned when a platform key is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown platform '{0}'. Expected one of: xiaohongshu, wechat, toutiao, baijiahao, sohu, seo")]
pub struct PlatformError(pub String);

impl FromStr for Platform {
  type Err = PlatformError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let key = s.trim().to_lowercase();
    Self::ALL
      .into_iter()
      .find(|platform| platform.key() == key)
      .ok_or_else(|| PlatformError(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_platform_from_str_is_case_insensitive() {
    assert_eq!("WeChat".parse::<Platform>(), Ok(Platform::Wechat));
    assert_eq!(" seo ".parse::<Platform>(), Ok(Platform::Seo));
  }

  #[test]
  fn test_platform_from_str_unknown() {
    let err = "myspace".parse::<Platform>().unwrap_err();
    assert_eq!(err, PlatformError("myspace".to_string()));
  }

  #[test]
  fn test_platform_key_roundtrips_through_display() {
    for platform in Platform::ALL {
      assert_eq!(platform.to_string().parse::<Platform>(), Ok(platform));
    }
  }

  #[test]
  fn test_slide_accessors() {
    let slide = Slide::Tags {
      content: "#a #b".to_string(),
    };
    assert_eq!(slide.content(), "#a #b");
    assert_eq!(slide.kind(), "tags");
  }
}
