//! Mutable game engine for tic-tac-toe.
//!
//! The engine owns the board, the player to move, and the move history.
//! Outcome detection and turn advancement are separate steps: applying a
//! move never flips the turn, the owning controller calls
//! [`Game::switch_turn`] after a non-terminal accepted move.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules::{self, Line};
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the game status, recomputed from the board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = rules::check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if rules::is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Returns true if the game reached a terminal state (won or drawn).
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }

    /// Returns true if the game is a draw: full board, no winner.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Returns true if `player` has completed any line.
    pub fn check_winner(&self, player: Player) -> bool {
        self.winning_line(player).is_some()
    }

    /// Returns the line `player` completed, if any (for highlighting).
    pub fn winning_line(&self, player: Player) -> Option<Line> {
        rules::winning_line(&self.board, player)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Returns the recomputed status on success. The turn is NOT
    /// advanced; the controller calls [`Game::switch_turn`] when the
    /// returned status is still [`GameStatus::InProgress`].
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already reached a terminal
    ///   state. The engine guards this itself rather than relying on the
    ///   caller's input handling.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    ///
    /// On error the game state is unchanged.
    #[instrument(skip(self), fields(position = %pos, player = %self.to_move))]
    pub fn apply_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(Move::new(self.to_move, pos));

        #[cfg(debug_assertions)]
        self.assert_invariants();

        let status = self.status();
        debug!(%status, "Move accepted");
        Ok(status)
    }

    /// Places the current player's mark at a raw board index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfBounds`] if `index` is not in 0-8, otherwise as
    /// [`Game::apply_move`].
    pub fn apply_move_at(&mut self, index: usize) -> Result<GameStatus, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.apply_move(pos)
    }

    /// Flips the current player.
    ///
    /// Called by the owning controller after a non-terminal accepted
    /// move, never by the engine itself.
    pub fn switch_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Player::X;
        self.history.clear();
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(self) {
            panic!("Game invariants violated: {violations:?}");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
