//! Game outcome after a move
//!
//! Order of checks:
//! 1. Five (or more) in a row for the mover wins.
//! 2. An open four for the mover wins, unless an opponent holds a four with
//!    an open end; that counter-threat has to play out first.
//! 3. A full board is a draw.
//! 4. A board where no player can still fill any 5-window is a draw.

use crate::board::{in_bounds, Board, Mark, Move, DIRECTIONS, WIN_LENGTH};

use super::threat::{has_four_with_one_open_end, has_open_four};
use super::win::{has_run, has_run_through};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
pub enum Outcome {
    InProgress,
    Win { mark: Mark },
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Decide the game state after `last_move` was applied to `board`.
///
/// Total: an out-of-range or stale `last_move` only costs the hot-path
/// shortcut and falls back to a full-board scan.
pub fn resolve(board: &Board, last_move: &Move) -> Outcome {
    let mover = last_move.mark;

    if mover.is_player() {
        let placed = in_bounds(last_move.row as i64, last_move.col as i64, board.size())
            && board.get(last_move.pos()) == mover;
        let five = if placed {
            has_run_through(board, last_move.pos(), mover, WIN_LENGTH)
        } else {
            has_run(board, mover, WIN_LENGTH)
        };
        if five {
            return Outcome::Win { mark: mover };
        }

        if has_open_four(board, mover) {
            let countered = Mark::PLAYERS
                .iter()
                .filter(|&&m| m != mover)
                .any(|&m| has_four_with_one_open_end(board, m));
            if !countered {
                return Outcome::Win { mark: mover };
            }
        }
    }

    if board.is_full() || !any_player_can_win(board) {
        return Outcome::Draw;
    }

    Outcome::InProgress
}

/// Whether `mark` can still fill the 5-window starting at `origin`
#[inline]
fn window_open_for(board: &Board, origin: (usize, usize), dir: (i32, i32), mark: Mark) -> bool {
    let (r, c) = (origin.0 as i64, origin.1 as i64);
    // Off-board cells fail the check, so windows never hang over the edge
    (0..WIN_LENGTH as i64).all(|k| {
        board
            .get_checked(r + i64::from(dir.0) * k, c + i64::from(dir.1) * k)
            .is_some_and(|m| m == Mark::Empty || m == mark)
    })
}

/// Whether `mark` still has a 5-window free of every other player's marks
pub fn can_still_win(board: &Board, mark: Mark) -> bool {
    if !mark.is_player() {
        return false;
    }
    let size = board.size();
    (0..size).any(|r| {
        (0..size).any(|c| {
            DIRECTIONS
                .iter()
                .any(|&dir| window_open_for(board, (r, c), dir, mark))
        })
    })
}

/// Exhaustive feasibility check over every window for every player mark
pub fn any_player_can_win(board: &Board) -> bool {
    Mark::PLAYERS.iter().any(|&m| can_still_win(board, m))
}
