//! Tic-tac-toe against an exhaustive minimax opponent.

use anyhow::Result;
use clap::Parser;
use std::io;
use tictactoe_cli::{analyze, play, selfplay, Cli, Command, PlayConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PlayConfig::load(&cli.config)?;
    info!(?config, "Configuration ready");

    let stdout = io::stdout().lock();
    match cli.command {
        Command::Play { human, show_values } => {
            let mut config = config;
            if let Some(human) = human {
                config = config.with_human(human);
            }
            if show_values {
                config = config.with_show_values(true);
            }
            play(&config, io::stdin().lock(), stdout)?;
        }
        Command::Selfplay => {
            selfplay(stdout)?;
        }
        Command::Analyze { board } => analyze(&board, stdout)?,
    }

    Ok(())
}
