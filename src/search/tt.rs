//! Transposition Table for caching search results
//!
//! The table stores minimax scores indexed by Zobrist hash. Hashes already
//! include the mark to move; each entry also records the remaining depth it
//! was searched to and whether the score is exact or a bound, so a score is
//! only reused when it is valid for the current window and depth.
//!
//! # Example
//!
//! ```
//! use gomoku::board::Pos;
//! use gomoku::search::{TranspositionTable, EntryType};
//!
//! let mut tt = TranspositionTable::new(1024);
//!
//! let hash = 0x1234_5678_9ABC_DEF0;
//! tt.store(hash, 3, 120, EntryType::Exact, Some(Pos::new(4, 4)));
//!
//! assert_eq!(tt.probe(hash, 3, -1000, 1000), Some(120));
//! assert_eq!(tt.probe(hash, 4, -1000, 1000), None); // not deep enough
//! ```

use crate::board::Pos;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - true score >= stored value (fail high)
    LowerBound,
    /// Upper bound - true score <= stored value (fail low)
    UpperBound,
}

impl EntryType {
    /// Classify a fail-soft result against the window it was searched with
    #[inline]
    pub fn classify(score: i32, alpha: i32, beta: i32) -> Self {
        if score <= alpha {
            EntryType::UpperBound
        } else if score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        }
    }
}

/// Transposition table entry
#[derive(Debug, Clone, Copy)]
pub struct TTEntry {
    /// Zobrist hash of the position (including mark to move)
    pub hash: u64,
    /// Remaining search depth for this entry
    pub depth: u8,
    /// Minimax score from the engine's perspective
    pub score: i32,
    pub entry_type: EntryType,
    /// Best move found for this position
    pub best_move: Option<Pos>,
}

/// Direct-mapped transposition table owned by a single search.
///
/// Each hash maps to exactly one slot; collisions are resolved with a
/// depth-preferred replacement policy.
pub struct TranspositionTable {
    entries: Vec<Option<TTEntry>>,
}

impl TranspositionTable {
    /// Create a table with `capacity` slots (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: vec![None; capacity.max(1)],
        }
    }

    #[inline]
    fn slot(&self, hash: u64) -> usize {
        (hash % self.entries.len() as u64) as usize
    }

    #[inline]
    fn entry(&self, hash: u64) -> Option<&TTEntry> {
        self.entries[self.slot(hash)]
            .as_ref()
            .filter(|e| e.hash == hash)
    }

    /// Probe the table for a position.
    ///
    /// Returns the cached score only if the entry was searched at least
    /// `depth` deep and its bound settles the `(alpha, beta)` window.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u8, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entry(hash)?;
        if entry.depth < depth {
            return None;
        }
        match entry.entry_type {
            EntryType::Exact => Some(entry.score),
            EntryType::LowerBound if entry.score >= beta => Some(entry.score),
            EntryType::UpperBound if entry.score <= alpha => Some(entry.score),
            _ => None,
        }
    }

    /// Best move from a previous visit, for move ordering
    #[must_use]
    pub fn get_best_move(&self, hash: u64) -> Option<Pos> {
        self.entry(hash).and_then(|e| e.best_move)
    }

    /// Store a position in the table.
    ///
    /// Replaces the slot if it is empty, holds the same position, or the new
    /// search is at least as deep as the existing entry.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u8,
        score: i32,
        entry_type: EntryType,
        best_move: Option<Pos>,
    ) {
        let idx = self.slot(hash);

        let should_replace = match &self.entries[idx] {
            None => true,
            Some(e) => e.hash == hash || e.depth <= depth,
        };

        if should_replace {
            self.entries[idx] = Some(TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_move,
            });
        }
    }

    /// Number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    /// Occupied slots
    pub fn used(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}
