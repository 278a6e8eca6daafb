use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prompterm_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "prompterm")]
#[command(author, version, about = "A terminal teleprompter")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Script file to prompt (defaults to the stored script)
    script: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start playback
    Play {
        /// Script file to prompt
        script: Option<PathBuf>,
    },
    /// Reset stored settings to defaults
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse before loading config so --help and usage errors never depend
    // on the state of the config file
    let cli = Cli::parse();

    let config = AppConfig::load()?;

    // Initialize logging (RUST_LOG overrides the configured level)
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Some(Commands::Play { script }) => commands::play::run(config, script.or(cli.script)).await,
        Some(Commands::Reset) => commands::reset::run(config).await,
        None => commands::play::run(config, cli.script).await,
    }
}
