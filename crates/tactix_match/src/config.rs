//! Match configuration.

use crate::players::HeuristicPlayer;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tactix_core::Mark;

/// Default artificial delay before a heuristic reply, in milliseconds.
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Configuration for a match.
///
/// Names which side, if any, the heuristic opponent plays, and the
/// pacing delay before its replies. The delay is purely presentational
/// and carries no correctness contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MatchConfig {
    /// Side played by the heuristic opponent, if any.
    automated: Option<Mark>,
    /// Artificial delay before each heuristic reply, in milliseconds.
    ai_delay_ms: u64,
}

impl MatchConfig {
    /// Creates a new match configuration.
    pub fn new(automated: Option<Mark>, ai_delay_ms: u64) -> Self {
        Self {
            automated,
            ai_delay_ms,
        }
    }

    /// The heuristic reply delay as a [`Duration`].
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Builds the heuristic player for the automated side, if one is
    /// configured.
    pub fn automated_player(&self) -> Option<HeuristicPlayer> {
        self.automated
            .map(|mark| HeuristicPlayer::new(format!("Computer ({mark})"), mark, self.ai_delay()))
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        // The heuristic traditionally takes O; X goes to the human seat
        Self {
            automated: Some(Mark::O),
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatchConfig::default();
        assert_eq!(*config.automated(), Some(Mark::O));
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_no_automated_side_builds_no_player() {
        let config = MatchConfig::new(None, 0);
        assert!(config.automated_player().is_none());
    }
}
