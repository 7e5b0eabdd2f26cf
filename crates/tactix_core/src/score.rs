//! Running score tally across games.

use crate::types::{GameStatus, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Win/draw tally persisting across game resets.
///
/// Incremented exactly once per completed game. Survives
/// [`crate::Game::reset`]; cleared only by [`ScoreBoard::reset`]. The
/// tally is in-memory only and starts from zero each session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ScoreBoard {
    /// Games won by player X.
    x_wins: u32,
    /// Games won by player O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl ScoreBoard {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game.
    ///
    /// An `InProgress` status is not a completed game; it is ignored
    /// with a warning.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {
                warn!("Ignoring tally request for a game still in progress");
            }
        }
    }

    /// Wins recorded for the given player.
    pub fn wins_for(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total completed games.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Clears the tally back to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
