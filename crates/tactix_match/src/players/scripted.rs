//! Scripted player that plays a fixed sequence of positions.

use super::Player;
use anyhow::Result;
use std::collections::VecDeque;
use tactix_core::{Game, Position};
use tracing::debug;

/// Player that pops moves off a queue.
///
/// Stands in for an interactive player in tests and demos.
pub struct ScriptedPlayer {
    name: String,
    moves: VecDeque<Position>,
}

impl ScriptedPlayer {
    /// Creates a scripted player from a move sequence.
    pub fn new(name: impl Into<String>, moves: impl IntoIterator<Item = Position>) -> Self {
        Self {
            name: name.into(),
            moves: moves.into_iter().collect(),
        }
    }
}

#[async_trait::async_trait]
impl Player for ScriptedPlayer {
    async fn get_move(&mut self, _game: &Game) -> Result<Position> {
        let pos = self
            .moves
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("Script for {} ran out of moves", self.name))?;
        debug!(player = %self.name, position = %pos, "Scripted move");
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
