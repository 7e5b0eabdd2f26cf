//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

/// A winning triple of positions.
pub type Line = [Position; 3];

/// The 8 winning lines: rows, then columns, then diagonals.
///
/// Scan order is fixed. Functions that return "the first qualifying
/// line" mean first in this table, which keeps tie-breaks reproducible.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}

/// Returns the line completed by `player`, if any.
///
/// When more than one line qualifies, the first in table order is
/// returned. Callers use this for highlighting the winning triple.
#[instrument]
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    LINES
        .iter()
        .copied()
        .find(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
}

/// Returns the empty square that would complete a line for `player`.
///
/// Scans lines in table order; the first line holding exactly two of
/// `player`'s marks and one empty square determines the result. Both the
/// win-now and block tiers of the heuristic opponent use this scan.
#[instrument]
pub fn winning_square(board: &Board, player: Player) -> Option<Position> {
    for line in LINES {
        let mut own = 0;
        let mut empty = None;
        for pos in line {
            match board.get(pos) {
                Square::Occupied(p) if p == player => own += 1,
                Square::Empty => empty = Some(pos),
                Square::Occupied(_) => {}
            }
        }
        if own == 2
            && let Some(pos) = empty
        {
            return Some(pos);
        }
    }

    None
}
