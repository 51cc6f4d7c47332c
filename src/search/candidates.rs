//! Candidate move generation
//!
//! - Empty board: the 3x3 block around the center (center first)
//! - Otherwise: empty cells touching an occupied cell (8-neighbourhood)
//! - Fallback: every empty cell
//!
//! Output order is row-major after the center and is the tie-break order
//! used by the search.

use crate::board::{Board, Mark, Pos};

/// Generate candidate moves in deterministic order
pub fn generate_candidates(board: &Board) -> Vec<Pos> {
    let size = board.size();

    if board.is_empty() {
        let center = board.center();
        let mut moves = vec![center];
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(p) = center.offset(dr, dc, 1, size) {
                    moves.push(p);
                }
            }
        }
        return moves;
    }

    let adjacent: Vec<Pos> = board
        .empty_positions()
        .filter(|&pos| has_neighbor(board, pos))
        .collect();

    if adjacent.is_empty() {
        return board.empty_positions().collect();
    }
    adjacent
}

/// Whether any of the 8 surrounding cells is occupied
#[inline]
pub fn has_neighbor(board: &Board, pos: Pos) -> bool {
    let (r, c) = (pos.row as i64, pos.col as i64);
    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }
            if board
                .get_checked(r + dr, c + dc)
                .is_some_and(|m| m != Mark::Empty)
            {
                return true;
            }
        }
    }
    false
}
