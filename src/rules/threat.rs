//! Four and three threat detection
//!
//! All detectors are pure predicates over the whole board. They look at
//! maximal runs (a run whose neighbours along the direction are not the same
//! mark), so a five never reads as a four and a four never reads as a three.

use crate::board::{Board, Mark, Pos, DIRECTIONS};

/// A maximal run of one mark along one direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: Pos,
    pub dir: (i32, i32),
    pub len: usize,
    /// Cell before `start`, `None` when off the board
    pub before: Option<Mark>,
    /// Cell after the last stone, `None` when off the board
    pub after: Option<Mark>,
}

impl Run {
    /// Number of in-bounds empty cells touching the run ends
    #[inline]
    pub fn open_ends(&self) -> usize {
        [self.before, self.after]
            .iter()
            .filter(|m| **m == Some(Mark::Empty))
            .count()
    }

    /// Three in a row with both ends free
    #[inline]
    pub fn is_open_three(&self) -> bool {
        self.len == 3 && self.open_ends() == 2
    }

    /// Exactly four in a row with at least one free end
    #[inline]
    pub fn is_four_with_open_end(&self) -> bool {
        self.len == 4 && self.open_ends() >= 1
    }
}

/// Maximal run of `mark` through `pos` along `dir`, counting `pos` itself as
/// `mark` whatever it currently holds
pub fn run_through(board: &Board, pos: Pos, dir: (i32, i32), mark: Mark) -> Run {
    let size = board.size();
    let (dr, dc) = dir;
    let extent = |sign: i32| {
        let mut k = 1;
        while pos
            .offset(dr * sign, dc * sign, k, size)
            .is_some_and(|p| board.get(p) == mark)
        {
            k += 1;
        }
        k - 1
    };
    let back = extent(-1);
    let len = (1 + back + extent(1)) as usize;
    let start = pos.offset(dr, dc, -back, size).unwrap_or(pos);
    Run {
        start,
        dir,
        len,
        before: start.offset(dr, dc, -1, size).map(|p| board.get(p)),
        after: start.offset(dr, dc, len as i32, size).map(|p| board.get(p)),
    }
}

/// Collect every maximal run of `mark`, origins row-major, directions in
/// `DIRECTIONS` order
pub fn runs(board: &Board, mark: Mark) -> Vec<Run> {
    let size = board.size();
    let mut out = Vec::new();
    if !mark.is_player() {
        return out;
    }

    for start in board.positions() {
        if board.get(start) != mark {
            continue;
        }
        for &(dr, dc) in &DIRECTIONS {
            let before = start.offset(dr, dc, -1, size).map(|p| board.get(p));
            if before == Some(mark) {
                continue; // Not the start of this run
            }
            let mut len = 1;
            while start
                .offset(dr, dc, len as i32, size)
                .is_some_and(|p| board.get(p) == mark)
            {
                len += 1;
            }
            let after = start.offset(dr, dc, len as i32, size).map(|p| board.get(p));
            out.push(Run {
                start,
                dir: (dr, dc),
                len,
                before,
                after,
            });
        }
    }
    out
}

/// `_XXXX_`: four in a row with both extension points free
pub fn has_open_four(board: &Board, mark: Mark) -> bool {
    if !mark.is_player() {
        return false;
    }
    let size = board.size();
    board.positions().any(|origin| {
        board.get(origin) == Mark::Empty
            && DIRECTIONS.iter().any(|&(dr, dc)| {
                (1..=5).all(|k| {
                    origin.offset(dr, dc, k, size).is_some_and(|p| {
                        let expected = if k == 5 { Mark::Empty } else { mark };
                        board.get(p) == expected
                    })
                })
            })
    })
}

/// Exactly four in a row with at least one free end
pub fn has_four_with_one_open_end(board: &Board, mark: Mark) -> bool {
    runs(board, mark)
        .iter()
        .any(|run| run.is_four_with_open_end())
}

/// Exactly three in a row with both ends free
pub fn has_open_three(board: &Board, mark: Mark) -> bool {
    runs(board, mark)
        .iter()
        .any(|run| run.is_open_three())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_four() {
        let board = Board::from_rows(&[
            "......",
            ".XXXX.",
            "......",
            "......",
            "......",
            "......",
        ])
        .unwrap();
        assert!(has_open_four(&board, Mark::PlayerA));
        assert!(has_four_with_one_open_end(&board, Mark::PlayerA));
        assert!(!has_open_four(&board, Mark::PlayerB));
    }

    #[test]
    fn test_edge_four_is_not_open() {
        let board = Board::from_rows(&[
            "XXXX..",
            "......",
            "......",
            "......",
            "......",
            "......",
        ])
        .unwrap();
        assert!(!has_open_four(&board, Mark::PlayerA));
        assert!(has_four_with_one_open_end(&board, Mark::PlayerA));
    }

    #[test]
    fn test_blocked_four() {
        let both_blocked = Board::from_rows(&[
            "OXXXXO",
            "......",
            "......",
            "......",
            "......",
            "......",
        ])
        .unwrap();
        assert!(!has_four_with_one_open_end(&both_blocked, Mark::PlayerA));

        let one_blocked = Board::from_rows(&[
            "OXXXX.",
            "......",
            "......",
            "......",
            "......",
            "......",
        ])
        .unwrap();
        assert!(has_four_with_one_open_end(&one_blocked, Mark::PlayerA));
        assert!(!has_open_four(&one_blocked, Mark::PlayerA));
    }

    #[test]
    fn test_five_is_not_four() {
        let board = Board::from_rows(&[
            ".XXXXX.",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
        ])
        .unwrap();
        assert!(!has_four_with_one_open_end(&board, Mark::PlayerA));
        assert!(!has_open_three(&board, Mark::PlayerA));
    }

    #[test]
    fn test_diagonal_open_four() {
        let board = Board::from_rows(&[
            "......",
            "....O.",
            "...O..",
            "..O...",
            ".O....",
            "......",
        ])
        .unwrap();
        assert!(has_open_four(&board, Mark::PlayerB));
    }

    #[test]
    fn test_open_three() {
        let board = Board::from_rows(&[".....", ".XXX.", ".....", ".....", "....."]).unwrap();
        assert!(has_open_three(&board, Mark::PlayerA));

        let edge = Board::from_rows(&["XXX..", ".....", ".....", ".....", "....."]).unwrap();
        assert!(!has_open_three(&edge, Mark::PlayerA));

        let blocked = Board::from_rows(&["OXXX.", ".....", ".....", ".....", "....."]).unwrap();
        assert!(!has_open_three(&blocked, Mark::PlayerA));
    }

    #[test]
    fn test_runs_are_maximal() {
        let board = Board::from_rows(&[".XXX.", ".....", ".....", ".....", "....."]).unwrap();
        let horizontal: Vec<Run> = runs(&board, Mark::PlayerA)
            .into_iter()
            .filter(|r| r.dir == (0, 1))
            .collect();
        assert_eq!(horizontal.len(), 1);
        assert_eq!(horizontal[0].start, Pos::new(0, 1));
        assert_eq!(horizontal[0].len, 3);
        assert_eq!(horizontal[0].open_ends(), 2);
    }

    #[test]
    fn test_run_through_counts_candidate() {
        let board = Board::from_rows(&["......", "OXX.X.", "......", "......", "......", "......"])
            .unwrap();
        let run = run_through(&board, Pos::new(1, 3), (0, 1), Mark::PlayerA);
        assert_eq!(run.start, Pos::new(1, 1));
        assert_eq!(run.len, 4);
        assert_eq!(run.before, Some(Mark::PlayerB));
        assert_eq!(run.after, Some(Mark::Empty));
        assert!(run.is_four_with_open_end());

        let open = run_through(&board, Pos::new(2, 2), (1, 0), Mark::PlayerA);
        assert_eq!(open.start, Pos::new(1, 2));
        assert_eq!(open.len, 2);
        assert_eq!(open.open_ends(), 2);

        let edge = run_through(&board, Pos::new(0, 0), (0, 1), Mark::PlayerB);
        assert_eq!(edge.len, 1);
        assert_eq!(edge.before, None);
    }
}
