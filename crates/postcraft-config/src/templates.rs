use std::fmt;

use crate::Config;

/// Error type for template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// The requested configuration format is not supported.
  UnsupportedFormat(String),
  /// The default configuration could not be serialized.
  Serialize(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
      Self::Serialize(e) => {
        write!(f, "Failed to serialize default config: {e}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Default configuration template in TOML, with a comment for every field.
/// Must stay in sync with [`Config::default`].
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# postcraft configuration file

# Soft character budget per carousel slide. Paragraphs are never split, so a
# single long paragraph may still exceed it.
max_chars = 120

# Platform style used for article HTML output. One of:
# xiaohongshu, wechat, toutiao, baijiahao, sohu, seo
platform = "xiaohongshu"

# Ordered image references that ![img](N) placeholders index into.
images = []

# Post type and length used when assembling generation prompts.
post_type = "分享"
word_count = "300字左右"

[generation]
# Quote the title once at the start of the body
quote_title = false
# Ask for plenty of emoji
use_emoji = true
# Ask for hashtags at the end of the body
add_hashtags = true
# Ask the model to filter prohibited words
filter_prohibited = false
# Ask the model to avoid hard-sell marketing language
filter_marketing = false
"#;

/// Get the default configuration in the given format (`toml` or `json`).
///
/// # Errors
///
/// Returns an error if the format is not supported.
pub fn get_template(format: &str) -> Result<String, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE.to_string()),
    "json" => {
      serde_json::to_string_pretty(&Config::default())
        .map_err(|e| TemplateError::Serialize(e.to_string()))
    },
    other => Err(TemplateError::UnsupportedFormat(other.to_string())),
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use super::*;

  #[test]
  fn test_toml_template_matches_defaults() {
    let parsed: Config = toml::from_str(DEFAULT_TOML_TEMPLATE).unwrap();
    assert_eq!(parsed, Config::default());
  }

  #[test]
  fn test_json_template_matches_defaults() {
    let parsed: Config =
      serde_json::from_str(&get_template("JSON").unwrap()).unwrap();
    assert_eq!(parsed, Config::default());
  }

  #[test]
  fn test_unsupported_format() {
    let err = get_template("yaml").unwrap_err();
    assert_eq!(err.to_string(), "Unsupported config format: yaml");
  }
}
