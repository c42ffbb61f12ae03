use std::{io, path::PathBuf};

use postcraft_config::ConfigError;
use postcraft_markup::PromptError;
use thiserror::Error;

/// Top-level error type for the postcraft CLI.
#[derive(Debug, Error)]
pub enum PostcraftError {
  #[error("Configuration error: {0}")]
  Config(#[from] ConfigError),

  #[error("Prompt error: {0}")]
  Prompt(#[from] PromptError),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Serde error: {0}")]
  Serde(#[from] serde_json::Error),

  #[error(
    "Configuration file already exists: {}. Use --force to overwrite.",
    .0.display()
  )]
  AlreadyExists(PathBuf),
}
