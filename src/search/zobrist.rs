//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when placing/removing
//! marks. The key folds in the mark to move, so a cached score is never reused
//! for the other side.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Mark, Pos};
//! use gomoku::search::ZobristTable;
//!
//! let zt = ZobristTable::new(8, 0x1234_5678_9ABC_DEF0);
//! let mut board = Board::new(8).unwrap();
//!
//! let hash1 = zt.hash(&board, Mark::PlayerA);
//!
//! let pos = Pos::new(4, 4);
//! board.place(pos, Mark::PlayerA);
//! let hash2 = zt.hash(&board, Mark::PlayerB);
//!
//! // Incremental update is equivalent to full recomputation
//! let hash_incremental = zt.update_place(hash1, pos, Mark::PlayerA, Mark::PlayerB);
//! assert_eq!(hash_incremental, hash2);
//! ```

use crate::board::{Board, Mark, Pos};

/// Player marks that can occupy a cell
const MARK_COUNT: usize = 3;

/// Zobrist hash table for one board size.
///
/// Holds `size * size * 3` placement keys plus one side-to-move key per
/// player mark.
pub struct ZobristTable {
    size: usize,
    /// Indexed by `cell * MARK_COUNT + player_index`
    keys: Vec<u64>,
    to_move: [u64; MARK_COUNT],
}

impl ZobristTable {
    /// Create a table with deterministic random values.
    ///
    /// Uses a linear congruential generator (LCG) with the given seed to
    /// ensure reproducible hashes across different runs.
    #[must_use]
    pub fn new(size: usize, seed: u64) -> Self {
        // Constants from Knuth's MMIX LCG
        let mut state = seed;
        let mut next_rand = || {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            // The low bits of an LCG are weak; mix the high half down
            state ^ (state >> 29)
        };

        let keys = (0..size * size * MARK_COUNT).map(|_| next_rand()).collect();
        let mut to_move = [0u64; MARK_COUNT];
        for key in &mut to_move {
            *key = next_rand();
        }

        Self {
            size,
            keys,
            to_move,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn piece_key(&self, pos: Pos, mark: Mark) -> u64 {
        match mark.player_index() {
            Some(i) => self.keys[pos.to_index(self.size) * MARK_COUNT + i],
            None => 0,
        }
    }

    #[inline]
    fn side_key(&self, mark: Mark) -> u64 {
        mark.player_index().map_or(0, |i| self.to_move[i])
    }

    /// Compute the full hash for a board position with `to_move` to play.
    #[must_use]
    pub fn hash(&self, board: &Board, to_move: Mark) -> u64 {
        let mut h = self.side_key(to_move);
        for pos in board.positions() {
            h ^= self.piece_key(pos, board.get(pos));
        }
        h
    }

    /// Incrementally update a hash after `mark` plays at `pos` and the turn
    /// passes to `next`.
    #[inline]
    #[must_use]
    pub fn update_place(&self, hash: u64, pos: Pos, mark: Mark, next: Mark) -> u64 {
        hash ^ self.piece_key(pos, mark) ^ self.side_key(mark) ^ self.side_key(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 0x1234_5678_9ABC_DEF0;

    #[test]
    fn test_zobrist_side_to_move() {
        let zt = ZobristTable::new(8, SEED);
        let board = Board::new(8).unwrap();

        let hash_a = zt.hash(&board, Mark::PlayerA);
        let hash_b = zt.hash(&board, Mark::PlayerB);

        // Different side to move = different hash
        assert_ne!(hash_a, hash_b);
        assert_eq!(hash_a, zt.to_move[0]);
    }

    #[test]
    fn test_zobrist_deterministic() {
        let zt1 = ZobristTable::new(15, SEED);
        let zt2 = ZobristTable::new(15, SEED);
        assert_eq!(zt1.keys, zt2.keys);
        assert_ne!(ZobristTable::new(15, SEED + 1).keys, zt1.keys);
    }

    #[test]
    fn test_zobrist_table_dimensions() {
        let zt = ZobristTable::new(5, SEED);
        assert_eq!(zt.keys.len(), 5 * 5 * 3);
        assert_eq!(zt.size(), 5);
    }

    #[test]
    fn test_zobrist_incremental() {
        let zt = ZobristTable::new(8, SEED);
        let mut board = Board::new(8).unwrap();
        let pos = Pos::new(2, 6);

        let before = zt.hash(&board, Mark::PlayerB);
        board.place(pos, Mark::PlayerB);
        let after = zt.hash(&board, Mark::PlayerC);

        assert_eq!(
            zt.update_place(before, pos, Mark::PlayerB, Mark::PlayerC),
            after
        );
        // XOR is its own inverse
        assert_eq!(
            zt.update_place(after, pos, Mark::PlayerB, Mark::PlayerC),
            before
        );
    }

    #[test]
    fn test_zobrist_same_position_different_path() {
        let zt = ZobristTable::new(8, SEED);
        let mut board1 = Board::new(8).unwrap();
        let mut board2 = Board::new(8).unwrap();

        board1.place(Pos::new(4, 4), Mark::PlayerA);
        board1.place(Pos::new(5, 5), Mark::PlayerB);

        board2.place(Pos::new(5, 5), Mark::PlayerB);
        board2.place(Pos::new(4, 4), Mark::PlayerA);

        assert_eq!(
            zt.hash(&board1, Mark::PlayerA),
            zt.hash(&board2, Mark::PlayerA)
        );
    }

    #[test]
    fn test_zobrist_marks_distinguished() {
        let zt = ZobristTable::new(8, SEED);
        let mut board1 = Board::new(8).unwrap();
        let mut board2 = Board::new(8).unwrap();

        board1.place(Pos::new(4, 4), Mark::PlayerA);
        board2.place(Pos::new(4, 4), Mark::PlayerC);

        assert_ne!(
            zt.hash(&board1, Mark::PlayerB),
            zt.hash(&board2, Mark::PlayerB)
        );
    }

    #[test]
    fn test_zobrist_nearby_positions_differ() {
        let zt = ZobristTable::new(8, SEED);
        let mut board1 = Board::new(8).unwrap();
        let mut board2 = Board::new(8).unwrap();

        board1.place(Pos::new(4, 4), Mark::PlayerA);
        board2.place(Pos::new(4, 5), Mark::PlayerA);

        assert_ne!(
            zt.hash(&board1, Mark::PlayerA),
            zt.hash(&board2, Mark::PlayerA)
        );
    }
}
