//! Marquee CLI - Command-line interface
//!
//! Loads the video library, builds the player service, and either runs a
//! single command or drops into the interactive shell.

mod commands;
mod repl;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use marquee_core::config::{LibraryConfig, MarqueeConfig, PlaybackConfig};
use marquee_core::service::PlayerService;
use marquee_core::{library, tracing_setup};

/// Built-in demo library used when no `--library` file is given.
const DEMO_LIBRARY: &str = include_str!("../data/demo_library.json");

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "An in-memory video catalog and playback manager")]
struct Cli {
    /// Path to a library JSON file (defaults to the built-in demo library)
    #[arg(long)]
    library: Option<PathBuf>,

    /// Seed for random-play selection
    #[arg(long)]
    seed: Option<u64>,

    /// Console log level
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,

    /// Directory for full debug logs (omit to log to console only)
    #[arg(long)]
    logs_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_setup::init_tracing(cli.log_level, cli.logs_dir.as_deref())
        .context("Failed to initialize tracing")?;

    let config = MarqueeConfig {
        library: LibraryConfig { path: cli.library },
        playback: PlaybackConfig {
            random_seed: cli.seed,
            ..Default::default()
        },
    };

    let catalog = match &config.library.path {
        Some(path) => library::load_from_path(path)
            .with_context(|| format!("Failed to load library from {}", path.display()))?,
        None => library::load_from_str(DEMO_LIBRARY).context("Failed to parse demo library")?,
    };

    let mut service = PlayerService::new(catalog, &config);

    match cli.command {
        Some(command) => commands::handle_command(&mut service, command),
        None => repl::run(&mut service)?,
    }

    Ok(())
}
