use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use postcraft_markup::Platform;

/// Command line interface for postcraft
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Postcraft: carousel slides and platform HTML from generated posts"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times). Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(
    short = 'c',
    long = "config-file",
    global = true,
    action = clap::ArgAction::Append
  )]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", global = true, action = clap::ArgAction::Append)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the postcraft CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Split a post into carousel slides.
  Slides {
    /// Title for the cover slide. Defaults to the first non-empty line of the
    /// input, which is then removed from the body.
    #[arg(short, long)]
    title: Option<String>,

    /// Input file, or `-` for stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Soft character budget per slide.
    #[arg(short, long)]
    max_chars: Option<usize>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = SlidesFormat::Json)]
    format: SlidesFormat,
  },

  /// Render a post into platform-styled article HTML.
  Render {
    /// Input file, or `-` for stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Platform style (xiaohongshu, wechat, toutiao, baijiahao, sohu, seo).
    #[arg(short, long)]
    platform: Option<Platform>,

    /// Image reference for `![img](N)` placeholders (can be specified multiple
    /// times). Appended after the configured images.
    #[arg(long = "image", action = clap::ArgAction::Append)]
    images: Vec<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = RenderFormat::Html)]
    format: RenderFormat,
  },

  /// Parse a model reply into a title and body.
  Parse {
    /// Input file, or `-` for stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Title to use when the reply carries no recognizable sections.
    #[arg(short = 't', long = "title", default_value = "")]
    fallback_title: String,
  },

  /// Print the generation prompt for a topic.
  Prompt {
    /// Topic of the post.
    #[arg(short, long)]
    topic: String,

    /// Extra details for the model to work in.
    #[arg(short, long, default_value = "")]
    extra: String,

    /// Post type, e.g. 分享 or 测评.
    #[arg(long)]
    post_type: Option<String>,

    /// Requested length, e.g. 300字左右.
    #[arg(long)]
    word_count: Option<String>,

    /// Ask the model to quote the title at the start of the body.
    #[arg(long)]
    quote_title: bool,

    /// Do not ask for emoji.
    #[arg(long)]
    no_emoji: bool,

    /// Do not ask for hashtags.
    #[arg(long)]
    no_hashtags: bool,

    /// Ask the model to filter prohibited words.
    #[arg(long)]
    filter_prohibited: bool,

    /// Ask the model to avoid hard-sell marketing language.
    #[arg(long)]
    filter_marketing: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = PromptFormat::Text)]
    format: PromptFormat,
  },

  /// Print a rewrite prompt for an existing piece of text.
  Rewrite {
    /// Input file, or `-` for stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// How the text should be rewritten.
    #[arg(short = 'I', long)]
    instruction: Option<String>,
  },

  /// Initialize a new postcraft configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "postcraft.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(long)]
    force: bool,
  },
}

/// Output formats for `slides`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidesFormat {
  Json,
  Text,
}

/// Output formats for `render`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderFormat {
  Json,
  Html,
}

/// Output formats for `prompt`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptFormat {
  Text,
  Json,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
