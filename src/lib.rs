//! Gomoku move-decision and game-outcome engine
//!
//! Plays free-style Gomoku on any square board of at least 5x5:
//! - Five or more in a row wins (overlines allowed)
//! - An open four wins unless an opponent holds a four with an open end
//! - Two or three players take turns (`X`, `O`, `Y`)
//! - Draw when the board is full or nobody can complete a five any more
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and the JSON wire format
//! - [`rules`]: Win detection, threat patterns and outcome resolution
//! - [`eval`]: Window-based position evaluation
//! - [`search`]: Candidate generation, Zobrist hashing, transposition table
//!   and alpha-beta search
//! - [`engine`]: Decision pipeline tying everything together
//! - [`config`]: Engine settings loadable from TOML
//!
//! # Quick Start
//!
//! ```
//! use gomoku::board::{BoardState, Mark};
//! use gomoku::{decide_move, resolve, Difficulty, Outcome};
//!
//! let state = BoardState::from_json(&format!("[{}]", vec!["\"\""; 64].join(","))).unwrap();
//! let mv = decide_move(&state, Mark::PlayerA, Difficulty::Medium).unwrap();
//! assert_eq!((mv.row, mv.col), (4, 4));
//!
//! let after = BoardState::from(&state.to_board().unwrap().apply(&mv).unwrap());
//! assert_eq!(resolve(&after, &mv), Outcome::InProgress);
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, BoardState, Mark, Move, Pos};
pub use config::{DepthTable, Difficulty, EngineConfig};
pub use engine::{decide_move, resolve, Engine, MoveResult, SearchType};
pub use error::{ConfigError, EngineError, Result};
pub use rules::Outcome;
