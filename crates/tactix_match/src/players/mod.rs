//! Player trait and implementations.

mod heuristic;
mod scripted;

pub use heuristic::HeuristicPlayer;
pub use scripted::ScriptedPlayer;

use anyhow::Result;
use tactix_core::{Game, Position};

/// Trait for players that can make moves.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Gets a move from this player.
    ///
    /// Returns the position for the player's next move. The orchestrator
    /// applies it; a rejected position is re-prompted.
    async fn get_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
