//! Match orchestration for the tactix engine.
//!
//! This crate is the controller collaborator of `tactix_core`: it pairs
//! two [`Player`] implementations over one [`tactix_core::Game`], applies
//! their moves, advances the turn, and keeps the running
//! [`tactix_core::ScoreBoard`] across rematches. UI layers subscribe to
//! [`GameEvent`] messages instead of touching the engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod orchestrator;
mod players;

pub use config::{MatchConfig, DEFAULT_AI_DELAY_MS};
pub use orchestrator::{GameEvent, Orchestrator};
pub use players::{HeuristicPlayer, Player, ScriptedPlayer};
