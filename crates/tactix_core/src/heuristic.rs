//! Three-tier heuristic opponent: win, then block, then random.

use crate::position::Position;
use crate::rules;
use crate::types::{Board, Player};
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Error raised when the heuristic has no square to choose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HeuristicError {
    /// No empty square remains on the board.
    #[display("No empty squares remain on the board")]
    BoardFull,
}

impl std::error::Error for HeuristicError {}

/// Selects a square for `mover`, in strict priority order:
///
/// 1. Win now: complete a line holding two of `mover`'s marks.
/// 2. Block: complete a line holding two of `opponent`'s marks.
/// 3. Uniform random choice among the empty squares.
///
/// Tiers 1 and 2 scan the line table in fixed order, so their result is
/// reproducible. The search is one ply deep and does not see forks, which
/// keeps the opponent beatable.
///
/// Pure with respect to the board: the caller applies the returned
/// position through the engine.
///
/// # Errors
///
/// [`HeuristicError::BoardFull`] if no empty square exists.
#[instrument(skip(board))]
pub fn choose_move(
    board: &Board,
    mover: Player,
    opponent: Player,
) -> Result<Position, HeuristicError> {
    choose_move_with(&mut rand::thread_rng(), board, mover, opponent)
}

/// As [`choose_move`], drawing the random fallback from `rng`.
pub fn choose_move_with<R: rand::Rng + ?Sized>(
    rng: &mut R,
    board: &Board,
    mover: Player,
    opponent: Player,
) -> Result<Position, HeuristicError> {
    if let Some(pos) = rules::winning_square(board, mover) {
        debug!(position = %pos, "Completing own line");
        return Ok(pos);
    }

    if let Some(pos) = rules::winning_square(board, opponent) {
        debug!(position = %pos, "Blocking opponent");
        return Ok(pos);
    }

    Position::valid_moves(board)
        .choose(rng)
        .copied()
        .ok_or(HeuristicError::BoardFull)
}
