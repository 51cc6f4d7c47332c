//! Search module for the Gomoku engine
//!
//! Contains:
//! - Candidate move generation
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Depth-bounded minimax with alpha-beta pruning

pub mod alphabeta;
pub mod candidates;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchContext, SearchResult, SearchStats, INF};
pub use candidates::{generate_candidates, has_neighbor};
pub use tt::{EntryType, TTEntry, TranspositionTable};
pub use zobrist::ZobristTable;
