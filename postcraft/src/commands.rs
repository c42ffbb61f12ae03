//! Implementations of the postcraft subcommands.
//!
//! Each command takes its already-read input text and writes to any
//! [`Write`], so the binary can hand it stdout and tests can hand it a buffer.

use std::{
  fs,
  io::{self, Read, Write},
  path::Path,
};

use log::{debug, info};
use postcraft_config::Config;
use postcraft_markup::{
  Carousel,
  GenerationOptions,
  GenerationRequest,
  MarkupRenderer,
  Platform,
  RenderOptionsBuilder,
  Segmenter,
  parse_response,
  prompt::{SYSTEM_PROMPT, build_prompt, build_rewrite_prompt},
};
use serde::Serialize;

use crate::{
  cli::{PromptFormat, RenderFormat, SlidesFormat},
  error::PostcraftError,
};

/// Read command input from `path`, or from stdin when `path` is absent or
/// `-`.
///
/// # Errors
///
/// Returns an error if the file or stdin cannot be read.
pub fn read_input(path: Option<&Path>) -> Result<String, PostcraftError> {
  match path {
    Some(path) if path != Path::new("-") => {
      debug!("Reading input from {}", path.display());
      Ok(fs::read_to_string(path)?)
    },
    _ => {
      debug!("Reading input from stdin");
      let mut buffer = String::new();
      io::stdin().read_to_string(&mut buffer)?;
      Ok(buffer)
    },
  }
}

/// Split `text` into a title and body when no explicit title is given: the
/// first non-empty line becomes the title.
fn split_title<'a>(text: &'a str, title: Option<&'a str>) -> (&'a str, &'a str) {
  if let Some(title) = title {
    return (title, text);
  }

  let text = text.trim_start();
  match text.split_once('\n') {
    Some((first, rest)) => (first.trim(), rest),
    None => (text.trim(), ""),
  }
}

/// Segment a post into carousel slides.
///
/// The text format prints every slide under a `topic • n/total` header, the
/// same label a carousel viewer shows.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
pub fn slides<W: Write>(
  out: &mut W,
  text: &str,
  title: Option<&str>,
  config: &Config,
  format: SlidesFormat,
) -> Result<(), PostcraftError> {
  let (title, body) = split_title(text, title);
  let slides = Segmenter::new(config.max_chars).segment(title, body);
  info!("Segmented post into {} slides", slides.len());

  match format {
    SlidesFormat::Json => {
      writeln!(out, "{}", serde_json::to_string_pretty(&slides)?)?;
    },
    SlidesFormat::Text => {
      let mut carousel = Carousel::for_slides(&slides);
      while let Some(slide) = slides.get(carousel.current()) {
        writeln!(
          out,
          "--- {} ({}) ---",
          carousel.page_label(title),
          slide.kind()
        )?;
        writeln!(out, "{}", slide.content())?;
        if !carousel.next_slide() {
          break;
        }
        writeln!(out)?;
      }
    },
  }

  Ok(())
}

/// Render a post as platform-styled HTML, or as the block tree in JSON.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
pub fn render<W: Write>(
  out: &mut W,
  text: &str,
  config: &Config,
  format: RenderFormat,
) -> Result<(), PostcraftError> {
  let renderer = MarkupRenderer::new(
    RenderOptionsBuilder::new()
      .platform(config.platform)
      .images(config.images.clone())
      .build(),
  );

  match format {
    RenderFormat::Html => writeln!(out, "{}", renderer.render_html(text))?,
    RenderFormat::Json => {
      let blocks = renderer.render(text);
      writeln!(out, "{}", serde_json::to_string_pretty(&blocks)?)?;
    },
  }

  Ok(())
}

/// Parse a model reply and print it as JSON.
///
/// # Errors
///
/// Returns an error if the output cannot be written or serialized.
pub fn parse<W: Write>(
  out: &mut W,
  text: &str,
  fallback_title: &str,
) -> Result<(), PostcraftError> {
  let content = parse_response(text, fallback_title);
  writeln!(out, "{}", serde_json::to_string_pretty(&content)?)?;
  Ok(())
}

/// Arguments of the `prompt` command that are not taken from [`Config`].
#[derive(Debug, Clone, Default)]
pub struct PromptArgs {
  pub topic:      String,
  pub extra_info: String,
  pub post_type:  Option<String>,
  pub word_count: Option<String>,
  pub options:    GenerationOptions,
}

#[derive(Serialize)]
struct PromptPair<'a> {
  system: &'a str,
  prompt: &'a str,
}

/// Assemble a generation prompt and print it.
///
/// # Errors
///
/// Returns an error if the topic is empty or the output cannot be written.
pub fn prompt<W: Write>(
  out: &mut W,
  args: PromptArgs,
  config: &Config,
  format: PromptFormat,
) -> Result<(), PostcraftError> {
  let request = GenerationRequest {
    topic:      args.topic,
    extra_info: args.extra_info,
    post_type:  args.post_type.unwrap_or_else(|| config.post_type.clone()),
    word_count: args.word_count.unwrap_or_else(|| config.word_count.clone()),
    options:    args.options,
  };
  let prompt = build_prompt(&request)?;

  match format {
    PromptFormat::Text => writeln!(out, "{prompt}")?,
    PromptFormat::Json => {
      let pair = PromptPair {
        system: SYSTEM_PROMPT,
        prompt: &prompt,
      };
      writeln!(out, "{}", serde_json::to_string_pretty(&pair)?)?;
    },
  }

  Ok(())
}

/// Print a rewrite prompt for `text`.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn rewrite<W: Write>(
  out: &mut W,
  text: &str,
  instruction: Option<&str>,
) -> Result<(), PostcraftError> {
  writeln!(out, "{}", build_rewrite_prompt(text.trim(), instruction))?;
  Ok(())
}

/// Write a default configuration file to `output`.
///
/// # Errors
///
/// Returns an error if the file exists and `force` is not set, or if it cannot
/// be written.
pub fn init(
  output: &Path,
  format: &str,
  force: bool,
) -> Result<(), PostcraftError> {
  if output.exists() && !force {
    return Err(PostcraftError::AlreadyExists(output.to_path_buf()));
  }

  if let Some(parent) = output.parent()
    && !parent.as_os_str().is_empty()
    && !parent.exists()
  {
    fs::create_dir_all(parent)?;
    info!("Created directory: {}", parent.display());
  }

  Config::generate_default_config(format, output)?;
  Ok(())
}

/// Fold CLI render arguments into the loaded configuration.
pub fn apply_render_args(
  config: &mut Config,
  platform: Option<Platform>,
  images: Vec<String>,
) {
  if let Some(platform) = platform {
    config.platform = platform;
  }
  config.images.extend(images);
}
