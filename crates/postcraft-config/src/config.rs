use std::{
  fs,
  path::{Path, PathBuf},
  sync::OnceLock,
};

use postcraft_markup::{DEFAULT_MAX_CHARS, GenerationOptions, Platform};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File names searched, in order, relative to the current directory.
const LOCAL_CONFIG_FILES: [&str; 5] = [
  "postcraft.toml",
  "postcraft.json",
  ".postcraft.toml",
  ".postcraft.json",
  ".config/postcraft.toml",
];

/// Configuration for postcraft.
///
/// [`Config`] holds the defaults used by every command: the slide budget,
/// the platform style, the image list placeholders index into, and the
/// prompt parameters. Fields are typically loaded from a TOML or JSON config
/// file, but can also be set via CLI arguments or `KEY=VALUE` overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Soft character budget per carousel slide.
  pub max_chars: usize,

  /// Platform style for article HTML output.
  pub platform: Platform,

  /// Ordered image references for `![img](N)` placeholders.
  pub images: Vec<String>,

  /// Post type used when assembling prompts.
  pub post_type: String,

  /// Requested length used when assembling prompts.
  pub word_count: String,

  /// Content toggles used when assembling prompts.
  pub generation: GenerationOptions,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      max_chars:  DEFAULT_MAX_CHARS,
      platform:   Platform::default(),
      images:     Vec::new(),
      post_type:  "分享".to_string(),
      word_count: "300字左右".to_string(),
      generation: GenerationOptions::default(),
    }
  }
}

impl Config {
  /// Load configuration from a file.
  ///
  /// The format is picked from the file extension (`toml` or `json`).
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content =
      fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
      })?;

    let extension = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(str::to_lowercase);

    match extension.as_deref() {
      Some("json") => {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
          path: path.to_path_buf(),
          source,
        })
      },
      Some("toml") => {
        toml::from_str(&content).map_err(|source| ConfigError::Toml {
          path: path.to_path_buf(),
          source,
        })
      },
      _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
  }

  /// Load configuration from files and overrides.
  ///
  /// Explicit `config_files` are loaded and merged in order. Without any, the
  /// first discovered config file is used, or the defaults if none exists.
  /// `config_overrides` (`KEY=VALUE`) are applied last.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded, an override is invalid, or
  /// the resulting configuration fails validation.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first)?;

      for config_path in rest {
        let additional_config = Self::from_file(config_path)?;
        merged_config.merge(additional_config);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged_config
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config)?
    } else {
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    config.validate()?;
    Ok(config)
  }

  /// Apply a list of `KEY=VALUE` overrides.
  ///
  /// ```rust, ignore
  /// config.apply_overrides(&vec![
  ///     "platform=wechat".to_string(),
  ///     "generation.use_emoji=false".to_string(),
  /// ])?;
  /// ```
  ///
  /// # Errors
  ///
  /// Returns an error if an override is malformed, names an unknown key, or
  /// carries a value of the wrong type.
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a single override.
  ///
  /// `images` takes a comma-separated list that is appended to the current
  /// image list.
  ///
  /// # Errors
  ///
  /// Returns an error for unknown keys or values of the wrong type.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "max_chars" => {
        self.max_chars = value.parse().map_err(|_| {
          ConfigError::Config(format!(
            "Invalid value for '{key}': '{value}' is not a valid number"
          ))
        })?;
      },
      "platform" => {
        self.platform = value
          .parse()
          .map_err(|e: postcraft_markup::PlatformError| {
            ConfigError::Config(e.to_string())
          })?;
      },
      "images" => {
        self.images.extend(
          value
            .split(',')
            .map(str::trim)
            .filter(|image| !image.is_empty())
            .map(ToString::to_string),
        );
      },
      "post_type" => self.post_type = value.to_string(),
      "word_count" => self.word_count = value.to_string(),
      "generation.quote_title" => {
        self.generation.quote_title = parse_bool(key, value)?;
      },
      "generation.use_emoji" => {
        self.generation.use_emoji = parse_bool(key, value)?;
      },
      "generation.add_hashtags" => {
        self.generation.add_hashtags = parse_bool(key, value)?;
      },
      "generation.filter_prohibited" => {
        self.generation.filter_prohibited = parse_bool(key, value)?;
      },
      "generation.filter_marketing" => {
        self.generation.filter_marketing = parse_bool(key, value)?;
      },
      _ => {
        return Err(ConfigError::Config(format!(
          "Unknown configuration key: '{key}'. See documentation for \
           supported keys."
        )));
      },
    }

    Ok(())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Vec<T>`] fields: Other's vec is appended to this config's vec
  /// - Everything else: Other's value always replaces
  pub fn merge(&mut self, other: Self) {
    self.max_chars = other.max_chars;
    self.platform = other.platform;
    self.images.extend(other.images);
    self.post_type = other.post_type;
    self.word_count = other.word_count;
    self.generation = other.generation;
  }

  /// Check that the configuration is usable.
  ///
  /// # Errors
  ///
  /// Returns an error if `max_chars` is zero.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.max_chars == 0 {
      return Err(ConfigError::Config(
        "max_chars must be greater than zero".to_string(),
      ));
    }
    Ok(())
  }

  /// Search for config files in common locations.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    static RESULT: OnceLock<Option<PathBuf>> = OnceLock::new();
    RESULT
      .get_or_init(|| {
        let current_dir = std::env::current_dir().ok()?;
        if let Some(path) = Self::config_file_in(&current_dir) {
          return Some(path);
        }

        if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
          let xdg_config_dir = PathBuf::from(xdg_config_home);
          for filename in &["postcraft.toml", "postcraft.json"] {
            let config_path = xdg_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        if let Ok(home) = std::env::var("HOME") {
          let home_config_dir =
            PathBuf::from(home).join(".config").join("postcraft");
          for filename in &["config.toml", "config.json"] {
            let config_path = home_config_dir.join(filename);
            if config_path.exists() {
              return Some(config_path);
            }
          }
        }

        None
      })
      .clone()
  }

  /// First of the well-known config file names that exists under `dir`.
  #[must_use]
  pub fn config_file_in(dir: &Path) -> Option<PathBuf> {
    LOCAL_CONFIG_FILES
      .iter()
      .map(|filename| dir.join(filename))
      .find(|path| path.exists())
  }

  /// Write the default configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = crate::templates::get_template(format)?;

    fs::write(path, config_content)?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "on" | "1" => Ok(true),
    "false" | "no" | "off" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid value for '{key}': '{value}' is not a boolean"
      )))
    },
  }
}
