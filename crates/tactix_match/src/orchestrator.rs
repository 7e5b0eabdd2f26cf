//! Game orchestration between two players.
//!
//! The orchestrator owns the engine and the score tally, asks the player
//! on turn for a move, applies it, and advances the turn only after a
//! non-terminal accepted move. UI layers observe the match through
//! [`GameEvent`] messages.

use crate::players::Player;
use anyhow::Result;
use tactix_core::{Game, GameStatus, Line, Mark, Position, ScoreBoard};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Rejected moves tolerated per turn before the game is abandoned.
const MAX_REJECTED_MOVES: u32 = 3;

/// Messages sent from orchestrator to UI.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// Board changed; a rendered form is attached.
    BoardChanged(String),
    /// The named player is thinking.
    Thinking {
        /// Display name of the player on turn.
        player: String,
    },
    /// Move was made.
    MoveMade {
        /// Display name of the moving player.
        player: String,
        /// The position played.
        position: Position,
    },
    /// Game ended.
    GameOver {
        /// Terminal status of the game.
        status: GameStatus,
        /// The completed line, when the game was won.
        line: Option<Line>,
    },
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    game: Game,
    score: ScoreBoard,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
    event_tx: mpsc::UnboundedSender<GameEvent>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        event_tx: mpsc::UnboundedSender<GameEvent>,
    ) -> Self {
        Self {
            game: Game::new(),
            score: ScoreBoard::new(),
            player_x,
            player_o,
            event_tx,
        }
    }

    /// Returns the engine state.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the running tally.
    pub fn score(&self) -> &ScoreBoard {
        &self.score
    }

    /// Runs one game to completion and records it in the tally.
    pub async fn run_game(&mut self) -> Result<GameStatus> {
        info!(
            player_x = self.player_x.name(),
            player_o = self.player_o.name(),
            "Starting game"
        );
        self.event_tx
            .send(GameEvent::BoardChanged(self.game.board().display()))?;

        loop {
            let status = self.game.status();
            if status.is_terminal() {
                self.score.record(status);
                let line = status.winner().and_then(|w| self.game.winning_line(w));
                self.event_tx.send(GameEvent::GameOver { status, line })?;
                info!(%status, "Game over");
                return Ok(status);
            }

            let mark = self.game.to_move();
            let player_name = match mark {
                Mark::X => self.player_x.name().to_string(),
                Mark::O => self.player_o.name().to_string(),
            };
            self.event_tx.send(GameEvent::Thinking {
                player: player_name.clone(),
            })?;

            let status = self.take_turn(mark, &player_name).await?;

            if status == GameStatus::InProgress {
                self.game.switch_turn();
            }
        }
    }

    /// Asks the player on turn for a move until the engine accepts one.
    async fn take_turn(&mut self, mark: Mark, player_name: &str) -> Result<GameStatus> {
        let mut rejected = 0;

        loop {
            let player = match mark {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };
            let pos = player.get_move(&self.game).await?;
            debug!(player = %player_name, position = %pos, "Move received");

            match self.game.apply_move(pos) {
                Ok(status) => {
                    self.event_tx.send(GameEvent::MoveMade {
                        player: player_name.to_string(),
                        position: pos,
                    })?;
                    self.event_tx
                        .send(GameEvent::BoardChanged(self.game.board().display()))?;
                    return Ok(status);
                }
                Err(err) => {
                    // State is unchanged on rejection; re-prompt the player
                    rejected += 1;
                    warn!(player = %player_name, %err, rejected, "Move rejected");
                    if rejected >= MAX_REJECTED_MOVES {
                        anyhow::bail!(
                            "{player_name} had {rejected} moves rejected in a row: {err}"
                        );
                    }
                }
            }
        }
    }

    /// Resets the game for a rematch. The tally is untouched.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
    }

    /// Plays `games` games back to back and returns the final tally.
    pub async fn play_series(&mut self, games: u32) -> Result<ScoreBoard> {
        for game in 0..games {
            if game > 0 {
                self.restart();
            }
            self.run_game().await?;
        }

        Ok(self.score)
    }
}
