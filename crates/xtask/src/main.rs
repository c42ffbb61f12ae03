use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

/// Binary name used for completion scripts and the man page.
const BIN_NAME: &str = "postcraft";

const SHELLS: [Shell; 5] = [
  Shell::Bash,
  Shell::Zsh,
  Shell::Fish,
  Shell::PowerShell,
  Shell::Elvish,
];

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the postcraft CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with = "manpage_only")]
    completions_only: bool,

    /// Only generate the man page.
    #[arg(long, conflicts_with = "completions_only")]
    manpage_only: bool,
  },
}

fn main() -> Result<()> {
  let xtask = Xtask::parse();

  match xtask.command {
    Commands::Dist {
      output_dir,
      completions_only,
      manpage_only,
    } => {
      if !manpage_only {
        generate_completions(&output_dir)?;
      }
      if !completions_only {
        generate_manpage(&output_dir)?;
      }
    },
  }

  Ok(())
}

/// Write a completion script for every supported shell.
fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir).with_context(|| {
    format!("Failed to create {}", completions_dir.display())
  })?;

  let mut cmd = postcraft::cli::Cli::command();
  for shell in SHELLS {
    let path = generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
    println!("Wrote {}", path.display());
  }
  Ok(())
}

/// Render the section 1 man page for the CLI.
fn generate_manpage(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)
    .with_context(|| format!("Failed to create {}", man_dir.display()))?;

  let file_path = man_dir.join(format!("{BIN_NAME}.1"));
  let mut file = fs::File::create(&file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  Man::new(postcraft::cli::Cli::command())
    .render(&mut file)
    .context("Failed to render manpage")?;
  println!("Wrote {}", file_path.display());
  Ok(())
}
