//! Tic-tac-toe game logic with a three-tier heuristic opponent.
//!
//! # Architecture
//!
//! - **Engine**: mutable [`Game`] owning the board, the player to move,
//!   and the move history. Turn advancement is an explicit, separate
//!   step so outcome detection and alternation are independently
//!   testable.
//! - **Rules**: pure win/draw evaluation over the fixed line table.
//! - **Heuristic**: one-ply opponent choosing win > block > random.
//! - **Score**: running tally of wins and draws across resets.
//! - **Invariants**: first-class, testable system guarantees.
//!
//! # Example
//!
//! ```
//! use tactix_core::{choose_move, Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! game.apply_move_at(4)?;
//! game.switch_turn();
//!
//! let reply = choose_move(game.board(), Player::O, Player::X)?;
//! let status = game.apply_move(reply)?;
//! assert_eq!(status, GameStatus::InProgress);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
pub mod heuristic;
pub mod invariants;
mod position;
pub mod rules;
mod score;
mod types;

pub use action::{Move, MoveError};
pub use engine::Game;
pub use heuristic::{choose_move, HeuristicError};
pub use position::Position;
pub use rules::{Line, LINES};
pub use score::ScoreBoard;
pub use types::{Board, GameStatus, Mark, Player, Square};
