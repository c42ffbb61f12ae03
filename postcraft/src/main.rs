use std::io::{self, Write};

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info};
use postcraft::{
  cli::{Cli, Commands},
  commands::{self, PromptArgs},
};
use postcraft_config::Config;

fn main() -> Result<()> {
  color_eyre::install()?;

  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging first so we can log during command handling
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  // Init must not depend on an existing, possibly broken, config
  if let Commands::Init {
    output,
    format,
    force,
  } = &cli.command
  {
    commands::init(output, format, *force).wrap_err_with(|| {
      format!("Failed to generate configuration file: {}", output.display())
    })?;
    info!(
      "Configuration file created successfully. Edit it to customize slide \
       and article output."
    );
    return Ok(());
  }

  let mut config = Config::load(&cli.config_files, &cli.config_overrides)
    .wrap_err("Failed to load configuration")?;

  let stdout = io::stdout();
  let mut out = stdout.lock();

  match cli.command {
    Commands::Slides {
      title,
      input,
      max_chars,
      format,
    } => {
      if let Some(max_chars) = max_chars {
        config.max_chars = max_chars;
        config.validate()?;
      }
      let text = commands::read_input(input.as_deref())?;
      commands::slides(&mut out, &text, title.as_deref(), &config, format)?;
    },

    Commands::Render {
      input,
      platform,
      images,
      format,
    } => {
      commands::apply_render_args(&mut config, platform, images);
      let text = commands::read_input(input.as_deref())?;
      commands::render(&mut out, &text, &config, format)?;
    },

    Commands::Parse {
      input,
      fallback_title,
    } => {
      let text = commands::read_input(input.as_deref())?;
      commands::parse(&mut out, &text, &fallback_title)?;
    },

    Commands::Prompt {
      topic,
      extra,
      post_type,
      word_count,
      quote_title,
      no_emoji,
      no_hashtags,
      filter_prohibited,
      filter_marketing,
      format,
    } => {
      let mut options = config.generation.clone();
      options.quote_title |= quote_title;
      options.use_emoji &= !no_emoji;
      options.add_hashtags &= !no_hashtags;
      options.filter_prohibited |= filter_prohibited;
      options.filter_marketing |= filter_marketing;

      let args = PromptArgs {
        topic,
        extra_info: extra,
        post_type,
        word_count,
        options,
      };
      commands::prompt(&mut out, args, &config, format)
        .wrap_err("Failed to build prompt")?;
    },

    Commands::Rewrite { input, instruction } => {
      let text = commands::read_input(input.as_deref())?;
      commands::rewrite(&mut out, &text, instruction.as_deref())?;
    },

    // Handled before the configuration is loaded
    Commands::Init { .. } => {},
  }

  out.flush()?;
  Ok(())
}
