//! Run detection along the four board directions
//!
//! `has_run` is the full-board reference scan. `has_run_through` only looks at
//! the lines crossing one cell; a new run can only appear through the most
//! recently placed mark, so the search and the outcome resolver use it on
//! their hot paths.

use crate::board::{Board, Mark, Pos, DIRECTIONS};

/// Slide a `run_length` window over every origin in every direction
pub fn has_run(board: &Board, mark: Mark, run_length: usize) -> bool {
    find_run(board, mark, run_length).is_some()
}

/// Cells of the first complete run of `mark`, scanning origins row-major
pub fn find_run(board: &Board, mark: Mark, run_length: usize) -> Option<Vec<Pos>> {
    if run_length == 0 || !mark.is_player() {
        return None;
    }
    let size = board.size();
    let len = run_length as i32;

    for origin in board.positions() {
        if board.get(origin) != mark {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            // Window end must stay on the board
            if origin.offset(dr, dc, len - 1, size).is_none() {
                continue;
            }
            let full = (1..len).all(|k| {
                origin
                    .offset(dr, dc, k, size)
                    .is_some_and(|p| board.get(p) == mark)
            });
            if full {
                return Some(
                    (0..len)
                        .filter_map(|k| origin.offset(dr, dc, k, size))
                        .collect(),
                );
            }
        }
    }
    None
}

/// Length of the contiguous `mark` line through `pos` along `(dr, dc)`.
/// `pos` itself counts as `mark` whatever it currently holds.
#[inline]
pub fn line_length_through(board: &Board, pos: Pos, dr: i32, dc: i32, mark: Mark) -> usize {
    let size = board.size();
    let mut count = 1;
    for sign in [1, -1] {
        let mut k = 1;
        while let Some(p) = pos.offset(dr * sign, dc * sign, k, size) {
            if board.get(p) != mark {
                break;
            }
            count += 1;
            k += 1;
        }
    }
    count
}

/// Fast run check on the lines crossing `pos`.
#[inline]
pub fn has_run_through(board: &Board, pos: Pos, mark: Mark, run_length: usize) -> bool {
    if !mark.is_player() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| line_length_through(board, pos, dr, dc, mark) >= run_length)
}

/// Whether `mark` at the empty cell `pos` would complete a run
#[inline]
pub fn wins_at(board: &Board, pos: Pos, mark: Mark, run_length: usize) -> bool {
    board.is_cell_empty(pos) && has_run_through(board, pos, mark, run_length)
}
