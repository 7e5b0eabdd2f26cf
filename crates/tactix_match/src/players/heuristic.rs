//! Automated player backed by the one-ply heuristic.

use super::Player;
use anyhow::Result;
use std::time::Duration;
use tactix_core::{choose_move, Game, Mark, Position};
use tracing::debug;

/// Player that picks win > block > random, after a short pause.
pub struct HeuristicPlayer {
    name: String,
    mark: Mark,
    delay: Duration,
}

impl HeuristicPlayer {
    /// Creates a new heuristic player for the given side.
    pub fn new(name: impl Into<String>, mark: Mark, delay: Duration) -> Self {
        Self {
            name: name.into(),
            mark,
            delay,
        }
    }
}

#[async_trait::async_trait]
impl Player for HeuristicPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Position> {
        // Pacing for a human opponent, nothing more
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let pos = choose_move(game.board(), self.mark, self.mark.opponent())?;
        debug!(player = %self.name, position = %pos, "Heuristic chose position");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
