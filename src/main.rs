use anyhow::Context;
use clap::{ArgAction, Parser};
use gridpaint::Config;
use gridpaint::repl::{ExitReason, Repl};
use std::io;
use std::path::PathBuf;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GRIDPAINT_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "gridpaint")]
#[command(version = VERSION, about = "Interactive command-line raster image editor")]
struct Cli {
    /// Read configuration from PATH instead of ~/.config/gridpaint/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Largest accepted image width (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    max_width: Option<u32>,

    /// Largest accepted image height (overrides the config file)
    #[arg(long, value_name = "PIXELS")]
    max_height: Option<u32>,

    /// Do not print a prompt before each command (for piped input)
    #[arg(long, action = ArgAction::SetTrue)]
    no_prompt: bool,

    /// Write a documented example config to ~/.config/gridpaint/config.toml and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "config")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote example config to {}", path.display());
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };

    if let Some(width) = cli.max_width {
        config.canvas.max_width = width;
    }
    if let Some(height) = cli.max_height {
        config.canvas.max_height = height;
    }
    if cli.no_prompt {
        config.repl.show_prompt = false;
    }
    config.validate_and_clamp();

    log::info!(
        "Canvas limits {}x{}, initial color {}",
        config.canvas.max_width,
        config.canvas.max_height,
        config.canvas.initial_color
    );

    let mut repl = Repl::from_config(&config)?;
    let reason = repl.run(io::stdin().lock(), io::stdout().lock())?;

    if reason == ExitReason::EndOfInput {
        log::info!("Input ended without terminate command");
    }

    Ok(())
}
