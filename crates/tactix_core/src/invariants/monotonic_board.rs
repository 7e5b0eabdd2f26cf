//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::engine::Game;
use crate::types::{Board, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes
/// until a full reset. Verified by replaying the move history and
/// comparing against the live board.
pub struct MonotonicBoard;

impl Invariant<Game> for MonotonicBoard {
    fn holds(game: &Game) -> bool {
        let mut reconstructed = Board::new();

        for mov in game.history() {
            // Square must still be empty when the move lands
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }

            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
