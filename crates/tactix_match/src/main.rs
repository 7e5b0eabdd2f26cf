//! Tactix - self-play demo for the tic-tac-toe engine.
//!
//! Plays a series of games between two heuristic players and prints the
//! final tally as JSON. The side named in the match configuration gets
//! the configured reply delay; the other side answers immediately.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tactix_core::Mark;
use tactix_match::{GameEvent, HeuristicPlayer, MatchConfig, Orchestrator};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe self-play with a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(about = "Tic-tac-toe self-play with a heuristic opponent", long_about = None)]
#[command(version)]
struct Cli {
    /// Number of games to play in the series
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Artificial delay before the automated side's replies, in milliseconds
    #[arg(long, default_value = "500")]
    delay_ms: u64,

    /// Suppress per-move output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = MatchConfig::new(Some(Mark::O), cli.delay_ms);

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();

    let player_x = Box::new(HeuristicPlayer::new("Player X", Mark::X, Duration::ZERO));
    let player_o = Box::new(
        config
            .automated_player()
            .expect("config names an automated side"),
    );
    let mut orchestrator = Orchestrator::new(player_x, player_o, event_tx);

    let quiet = cli.quiet;
    let printer = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                GameEvent::MoveMade { player, position } if !quiet => {
                    println!("{player}: {position}");
                }
                GameEvent::BoardChanged(board) if !quiet => println!("{board}\n"),
                GameEvent::GameOver { status, .. } => println!("{status}\n"),
                _ => {}
            }
        }
    });

    let score = orchestrator.play_series(cli.games).await?;

    // Closing the channel lets the printer drain and finish
    drop(orchestrator);
    printer.await?;

    println!("{}", serde_json::to_string_pretty(&score)?);
    Ok(())
}
