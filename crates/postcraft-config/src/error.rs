use std::{io, path::PathBuf};

use thiserror::Error;

use crate::templates::TemplateError;

/// Errors raised while loading, overriding or writing a [`crate::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
  /// An override or loaded value is not acceptable.
  #[error("Invalid configuration: {0}")]
  Config(String),

  #[error("Failed to read config file {}: {source}", .path.display())]
  Read {
    path:   PathBuf,
    source: io::Error,
  },

  #[error("Failed to parse JSON config from {}: {source}", .path.display())]
  Json {
    path:   PathBuf,
    source: serde_json::Error,
  },

  #[error("Failed to parse TOML config from {}: {source}", .path.display())]
  Toml {
    path:   PathBuf,
    source: toml::de::Error,
  },

  /// The file extension is neither `toml` nor `json`.
  #[error("Unsupported config file format: {}", .0.display())]
  UnsupportedFormat(PathBuf),

  #[error(transparent)]
  Template(#[from] TemplateError),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}
