//! Move decision and outcome resolution
//!
//! A decision follows a fixed priority order:
//!
//! 1. **Opening**: an empty board gets the center cell
//! 2. **Immediate win**: the first candidate that completes five
//! 3. **Block**: the first cell where an opponent (in turn order) would
//!    complete five
//! 4. **Alpha-Beta**: depth-bounded minimax with a per-call transposition table
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Mark, Pos};
//! use gomoku::{Difficulty, Engine, EngineConfig, SearchType};
//!
//! let engine = Engine::new(EngineConfig::default());
//! let mut board = Board::new(8).unwrap();
//! board.place(Pos::new(4, 4), Mark::PlayerA);
//!
//! let result = engine
//!     .decide_move_with_stats(&board, Mark::PlayerB, Difficulty::Easy)
//!     .unwrap();
//! assert_eq!(result.search_type, SearchType::AlphaBeta);
//! assert_eq!(result.mv.sequence_index, 1);
//! ```

use std::time::Instant;

use crate::board::{Board, BoardState, Mark, Move, Pos, WIN_LENGTH};
use crate::config::{Difficulty, EngineConfig};
use crate::error::{EngineError, Result};
use crate::eval::PatternScore;
use crate::rules::{self, wins_at, Outcome};
use crate::search::{generate_candidates, SearchContext, SearchStats};

/// Phase of the decision that produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum SearchType {
    /// Center cell on an empty board
    Opening,
    /// Completes five right away
    ImmediateWin,
    /// Occupies a cell where an opponent would complete five
    Block,
    /// Regular alpha-beta search result
    AlphaBeta,
}

/// Result of a move decision with search statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    pub mv: Move,
    /// Engine-perspective score of the chosen move
    pub score: i32,
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    pub stats: SearchStats,
}

impl MoveResult {
    #[inline]
    fn shortcut(mv: Move, score: i32, search_type: SearchType, start: Instant) -> Self {
        Self {
            mv,
            score,
            search_type,
            time_ms: start.elapsed().as_millis() as u64,
            stats: SearchStats::default(),
        }
    }
}

/// Gomoku engine.
///
/// Holds configuration only. Every decision builds its own `SearchContext`,
/// so one engine can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Choose a move for `mark` on `board`.
    ///
    /// # Errors
    ///
    /// `InvalidMark` when asked to move for `Mark::Empty`, `NoLegalMoves`
    /// when the board has no empty cell.
    pub fn decide_move(&self, board: &Board, mark: Mark, difficulty: Difficulty) -> Result<Move> {
        self.decide_move_with_stats(board, mark, difficulty)
            .map(|result| result.mv)
    }

    /// Choose a move and report which phase found it.
    pub fn decide_move_with_stats(
        &self,
        board: &Board,
        mark: Mark,
        difficulty: Difficulty,
    ) -> Result<MoveResult> {
        let start = Instant::now();

        if !mark.is_player() {
            return Err(EngineError::InvalidMark);
        }
        if board.is_full() {
            return Err(EngineError::NoLegalMoves);
        }

        let players = self.players_in_game(board, mark);
        let seq = board.mark_count() as u32;

        // 0. Opening
        if board.is_empty() {
            let mv = Move::new(board.center(), mark, seq);
            tracing::debug!(row = mv.row, col = mv.col, "opening move");
            return Ok(MoveResult::shortcut(mv, 0, SearchType::Opening, start));
        }

        let candidates = generate_candidates(board);
        if candidates.is_empty() {
            return Err(EngineError::NoLegalMoves);
        }

        // 1. Immediate win
        if let Some(pos) = find_completion(board, &candidates, mark) {
            let mv = Move::new(pos, mark, seq);
            tracing::debug!(row = mv.row, col = mv.col, "immediate win");
            return Ok(MoveResult::shortcut(
                mv,
                PatternScore::FIVE,
                SearchType::ImmediateWin,
                start,
            ));
        }

        // 2. Block, nearest opponent in turn order first
        for opponent in mark.opponents(players) {
            if let Some(pos) = find_completion(board, &candidates, opponent) {
                let mv = Move::new(pos, mark, seq);
                tracing::debug!(row = mv.row, col = mv.col, ?opponent, "blocking five");
                return Ok(MoveResult::shortcut(
                    mv,
                    PatternScore::BLOCK,
                    SearchType::Block,
                    start,
                ));
            }
        }

        // 3. Alpha-beta
        let depth = self.config.depths.depth(difficulty);
        let mut ctx = SearchContext::new(board.size(), mark, players, &self.config);
        let result = ctx.search(board, depth);
        let pos = result.best_move.ok_or(EngineError::NoLegalMoves)?;
        let time_ms = start.elapsed().as_millis() as u64;

        tracing::debug!(
            row = pos.row,
            col = pos.col,
            score = result.score,
            depth,
            nodes = result.stats.nodes,
            tt_hit_rate = result.stats.tt_hit_rate(),
            time_ms,
            "alpha-beta move"
        );

        Ok(MoveResult {
            mv: Move::new(pos, mark, seq),
            score: result.score,
            search_type: SearchType::AlphaBeta,
            time_ms,
            stats: result.stats,
        })
    }

    /// Game state after `last_move` was applied to `board`.
    #[must_use]
    pub fn resolve(&self, board: &Board, last_move: &Move) -> Outcome {
        rules::resolve(board, last_move)
    }

    /// Turn rotation size: a third mark on the board (or to move) means a
    /// three-player game regardless of configuration.
    fn players_in_game(&self, board: &Board, mark: Mark) -> u8 {
        if mark == Mark::PlayerC || board.contains(Mark::PlayerC) {
            3
        } else {
            self.config.players
        }
    }
}

/// First candidate where `mark` would complete five
fn find_completion(board: &Board, candidates: &[Pos], mark: Mark) -> Option<Pos> {
    candidates
        .iter()
        .copied()
        .find(|&pos| wins_at(board, pos, mark, WIN_LENGTH))
}

/// Choose a move for `mark_to_move` with the default configuration.
///
/// # Errors
///
/// `InvalidBoardSize` / `CellCountMismatch` for a malformed board,
/// `InvalidMark` for `Mark::Empty`, `NoLegalMoves` for a full board.
pub fn decide_move(board: &BoardState, mark_to_move: Mark, difficulty: Difficulty) -> Result<Move> {
    let board = board.to_board()?;
    Engine::default().decide_move(&board, mark_to_move, difficulty)
}

/// Game state after `last_move` was applied.
///
/// Total: a board that is not a square of at least 5x5 cannot hold a five
/// and resolves to `InProgress`.
pub fn resolve(board: &BoardState, last_move: &Move) -> Outcome {
    match board.to_board() {
        Ok(board) => rules::resolve(&board, last_move),
        Err(_) => Outcome::InProgress,
    }
}
