//! Heuristic evaluation function for Gomoku board positions
//!
//! Every 5-cell window in the four directions contributes:
//! - 0 when it is empty or holds stones of two different players (dead)
//! - a positive score when only the evaluated player holds it
//! - a heavier negative score when only one opponent holds it

use crate::board::{Board, Mark, DIRECTIONS, WIN_LENGTH};

use super::patterns::{opponent_window_score, own_window_score};

/// Evaluate the board from the perspective of the given mark.
///
/// Positive values favour `mark`. The result is not symmetric between
/// players because opponent windows are weighted more harshly.
#[must_use]
pub fn evaluate(board: &Board, mark: Mark) -> i32 {
    let size = board.size() as i64;
    let span = WIN_LENGTH as i64 - 1;
    let mut score = 0;

    for r in 0..size {
        for c in 0..size {
            for &(dr, dc) in &DIRECTIONS {
                let (dr, dc) = (i64::from(dr), i64::from(dc));
                let (er, ec) = (r + dr * span, c + dc * span);
                if er < 0 || er >= size || ec < 0 || ec >= size {
                    continue;
                }
                score += score_window(board, r, c, dr, dc, mark);
            }
        }
    }

    score
}

/// Score a single in-bounds window starting at `(r, c)`.
#[inline]
fn score_window(board: &Board, r: i64, c: i64, dr: i64, dc: i64, mark: Mark) -> i32 {
    let mut owner = Mark::Empty;
    let mut count = 0;

    for k in 0..WIN_LENGTH as i64 {
        let Some(cell) = board.get_checked(r + dr * k, c + dc * k) else {
            return 0;
        };
        if cell == Mark::Empty {
            continue;
        }
        if owner == Mark::Empty {
            owner = cell;
        } else if owner != cell {
            return 0; // Dead window: two players in it
        }
        count += 1;
    }

    match owner {
        Mark::Empty => 0,
        o if o == mark => own_window_score(count),
        _ => opponent_window_score(count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new(8).unwrap();
        assert_eq!(evaluate(&board, Mark::PlayerA), 0);
    }

    #[test]
    fn test_single_stone_counts_each_window() {
        // On a 5x5 board the center sits in the row, column and both diagonals
        let mut board = Board::new(5).unwrap();
        board.place(Pos::new(2, 2), Mark::PlayerA);
        assert_eq!(evaluate(&board, Mark::PlayerA), 4 * 5);
        assert_eq!(evaluate(&board, Mark::PlayerB), -4 * 8);
    }

    #[test]
    fn test_dead_window_scores_zero() {
        let board = Board::from_rows(&["XO...", ".....", ".....", ".....", "....."]).unwrap();
        // Row 0 is dead; (0,0) column and diagonal for X, (0,1) column for O
        assert_eq!(evaluate(&board, Mark::PlayerA), 5 + 5 - 8);
    }

    #[test]
    fn test_more_stones_score_higher() {
        let two = Board::from_rows(&[
            "........", "..XX....", "........", "........", "........", "........",
            "........", "........",
        ])
        .unwrap();
        let three = Board::from_rows(&[
            "........", "..XXX...", "........", "........", "........", "........",
            "........", "........",
        ])
        .unwrap();
        assert!(evaluate(&three, Mark::PlayerA) > evaluate(&two, Mark::PlayerA));
    }

    #[test]
    fn test_defense_bias() {
        let board = Board::from_rows(&[
            "........", "..XXX...", "........", "........", "..OOO...", "........",
            "........", "........",
        ])
        .unwrap();
        // Mirror-image threes: the opponent's weigh more
        assert!(evaluate(&board, Mark::PlayerA) < 0);
        assert!(evaluate(&board, Mark::PlayerB) < 0);
    }

    #[test]
    fn test_third_player_is_an_opponent() {
        let board = Board::from_rows(&[".....", ".....", "..Y..", ".....", "....."]).unwrap();
        assert_eq!(evaluate(&board, Mark::PlayerA), -4 * 8);
        assert_eq!(evaluate(&board, Mark::PlayerC), 4 * 5);
    }
}
