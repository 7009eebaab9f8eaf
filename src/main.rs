//! Strictly Rewind - command-line entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_rewind::cli::{Cli, Command, OutputFormat};
use strictly_rewind::{replay, tui, RewindConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = RewindConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    match cli.command {
        Command::Play { sort } => {
            let config = match sort {
                Some(order) => config.with_sort_order(order),
                None => config,
            };
            tui::run_tui(&config)
        }
        Command::Replay {
            moves,
            jump,
            sort,
            format,
        } => run_replay(&config, &moves, jump, sort, format),
    }
}

/// Replays a move list and prints the projection to stdout.
fn run_replay(
    config: &RewindConfig,
    moves: &[usize],
    jump: Option<usize>,
    sort: Option<strictly_rewind::MoveOrder>,
    format: OutputFormat,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let order = sort.unwrap_or(*config.sort_order());
    info!(move_count = moves.len(), ?jump, ?order, "Replaying moves");

    let session = replay::replay(moves, jump, order);
    let view = session.view();
    match format {
        OutputFormat::Text => print!("{}", replay::render_text(&view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
    }
    Ok(())
}
