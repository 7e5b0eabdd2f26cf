//! Single winner invariant: both players cannot have completed lines.

use super::Invariant;
use crate::engine::Game;
use crate::types::Player;

/// Invariant: At most one player has three in a row.
///
/// The engine stops accepting moves once a line is complete, so a board
/// where both players hold winning lines is unreachable through
/// `apply_move`.
pub struct SingleWinner;

impl Invariant<Game> for SingleWinner {
    fn holds(game: &Game) -> bool {
        !(game.check_winner(Player::X) && game.check_winner(Player::O))
    }

    fn description() -> &'static str {
        "At most one player has a completed line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_holds_for_new_game() {
        let game = Game::new();
        assert!(SingleWinner::holds(&game));
    }

    #[test]
    fn test_holds_after_win() {
        let mut game = Game::new();
        // X takes the top row, O scatters
        for index in [0, 4, 1, 5, 2] {
            game.apply_move_at(index).expect("valid move");
            if !game.is_terminal() {
                game.switch_turn();
            }
        }

        assert!(game.check_winner(Player::X));
        assert!(SingleWinner::holds(&game));
    }

    #[test]
    fn test_post_win_moves_rejected_preserving_invariant() {
        let mut game = Game::new();
        for index in [0, 4, 1, 5, 2] {
            game.apply_move_at(index).expect("valid move");
            if !game.is_terminal() {
                game.switch_turn();
            }
        }

        // O cannot start a line of its own once X has won
        assert!(game.apply_move_at(8).is_err());
        assert!(SingleWinner::holds(&game));
    }
}
