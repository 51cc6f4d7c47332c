//! Minimax search with alpha-beta pruning and transposition table
//!
//! The engine's mark maximizes; every other mark minimizes (in three-player
//! games this is the paranoid assumption that both opponents cooperate).
//! Scores are always from the engine's perspective.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Mark, Pos};
//! use gomoku::search::SearchContext;
//! use gomoku::EngineConfig;
//!
//! let mut board = Board::new(8).unwrap();
//! board.place(Pos::new(4, 4), Mark::PlayerA);
//!
//! let config = EngineConfig::default();
//! let mut ctx = SearchContext::new(board.size(), Mark::PlayerB, 2, &config);
//! let result = ctx.search(&board, 2);
//! assert!(result.best_move.is_some());
//! ```

use std::time::{Duration, Instant};

use crate::board::{Board, Mark, Pos, DIRECTIONS, WIN_LENGTH};
use crate::config::EngineConfig;
use crate::eval::{evaluate, threat_score, PatternScore, ThreatScore};
use crate::rules::{has_run_through, run_through};

use super::candidates::generate_candidates;
use super::{EntryType, TranspositionTable, ZobristTable};

/// Infinity score for alpha-beta bounds
pub const INF: i32 = PatternScore::FIVE + 1_000;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct SearchStats {
    /// Nodes visited below the root
    pub nodes: u64,
    /// Beta cutoffs (window closed before all moves were tried)
    pub beta_cutoffs: u64,
    /// TT probes
    pub tt_probes: u64,
    /// TT probes that returned a usable score
    pub tt_hits: u64,
}

impl SearchStats {
    /// TT score hit rate in percent
    pub fn tt_hit_rate(&self) -> f64 {
        if self.tt_probes == 0 {
            0.0
        } else {
            self.tt_hits as f64 / self.tt_probes as f64 * 100.0
        }
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, `None` only when there was nothing to search
    pub best_move: Option<Pos>,
    /// Minimax score of the best move
    pub score: i32,
    /// Depth bound used
    pub depth: u8,
    /// Root candidates actually searched (fewer if the time budget ran out)
    pub searched: usize,
    pub stats: SearchStats,
}

/// Per-call search state.
///
/// Owns the Zobrist keys and the transposition table. Both are tied to one
/// board size and one engine mark, so a context must not outlive the call
/// that created it.
pub struct SearchContext {
    zobrist: ZobristTable,
    tt: TranspositionTable,
    /// The maximizing mark
    root: Mark,
    players: u8,
    time_limit: Option<Duration>,
    stats: SearchStats,
}

impl SearchContext {
    #[must_use]
    pub fn new(size: usize, root: Mark, players: u8, config: &EngineConfig) -> Self {
        Self {
            zobrist: ZobristTable::new(size, config.zobrist_seed),
            tt: TranspositionTable::new(config.tt_capacity),
            root,
            players,
            time_limit: config.time_limit_ms.map(Duration::from_millis),
            stats: SearchStats::default(),
        }
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search the root position with the engine's mark to move.
    ///
    /// Root candidates are tried in generation order and only a strictly
    /// better score replaces the current best, so ties keep the earliest
    /// candidate. The caller's board is cloned; it is never touched.
    pub fn search(&mut self, board: &Board, depth: u8) -> SearchResult {
        let start = Instant::now();
        let mut work = board.clone();
        let root = self.root;
        let next = root.next(self.players);
        let hash = self.zobrist.hash(&work, root);
        let moves = generate_candidates(&work);
        let depth = depth.max(1);

        let mut alpha = -INF;
        let beta = INF;
        let mut best_score = -INF;
        let mut best_move = None;
        let mut searched = 0;

        for mov in moves {
            if searched > 0 && self.out_of_time(start) {
                tracing::debug!(searched, "time budget exhausted at root");
                break;
            }

            work.place(mov, root);
            let child_hash = self.zobrist.update_place(hash, mov, root, next);
            let score = self.minimax(&mut work, next, depth - 1, alpha, beta, (mov, root), child_hash);
            work.clear(mov);
            searched += 1;

            tracing::trace!(row = mov.row, col = mov.col, score, "root candidate");

            if score > best_score {
                best_score = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
        }

        tracing::debug!(
            searched,
            tt_used = self.tt.used(),
            tt_capacity = self.tt.capacity(),
            tt_hit_rate = self.stats.tt_hit_rate(),
            "root search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            searched,
            stats: self.stats,
        }
    }

    #[inline]
    fn out_of_time(&self, start: Instant) -> bool {
        self.time_limit.is_some_and(|limit| start.elapsed() >= limit)
    }

    /// Recursive minimax with fail-soft alpha-beta.
    ///
    /// `last` is the move that produced this position; only it can have
    /// completed a new five.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        board: &mut Board,
        to_move: Mark,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        last: (Pos, Mark),
        hash: u64,
    ) -> i32 {
        self.stats.nodes += 1;

        let (last_pos, last_mark) = last;
        if has_run_through(board, last_pos, last_mark, WIN_LENGTH) {
            // Prefer quicker wins and slower losses
            let win = PatternScore::FIVE + i32::from(depth);
            return if last_mark == self.root { win } else { -win };
        }

        if depth == 0 || board.is_full() {
            return evaluate(board, self.root);
        }

        self.stats.tt_probes += 1;
        if let Some(score) = self.tt.probe(hash, depth, alpha, beta) {
            self.stats.tt_hits += 1;
            return score;
        }

        let tt_move = self.tt.get_best_move(hash);
        let moves = self.order_moves(board, generate_candidates(board), to_move, tt_move);

        let maximizing = to_move == self.root;
        let next = to_move.next(self.players);
        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for mov in moves {
            board.place(mov, to_move);
            let child_hash = self.zobrist.update_place(hash, mov, to_move, next);
            let score = self.minimax(board, next, depth - 1, alpha, beta, (mov, to_move), child_hash);
            board.clear(mov);

            if maximizing {
                if score > best {
                    best = score;
                    best_move = Some(mov);
                }
                alpha = alpha.max(score);
            } else {
                if score < best {
                    best = score;
                    best_move = Some(mov);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                self.stats.beta_cutoffs += 1;
                break;
            }
        }

        let entry_type = EntryType::classify(best, alpha_orig, beta_orig);
        self.tt.store(hash, depth, best, entry_type, best_move);

        best
    }

    /// Stable sort of inner-node candidates: TT move first, then cells that
    /// make or block the strongest lines.
    fn order_moves(
        &self,
        board: &Board,
        moves: Vec<Pos>,
        to_move: Mark,
        tt_move: Option<Pos>,
    ) -> Vec<Pos> {
        let mut scored: Vec<(Pos, i32)> = moves
            .into_iter()
            .map(|mov| {
                let score = if Some(mov) == tt_move {
                    i32::MAX
                } else {
                    self.score_move(board, mov, to_move)
                };
                (mov, score)
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.into_iter().map(|(mov, _)| mov).collect()
    }

    /// Local threat score of playing `mov`. Each direction scores the run the
    /// mover would form there by length and free ends, plus the run every
    /// opponent would form on the same cell (the value of blocking it).
    fn score_move(&self, board: &Board, mov: Pos, to_move: Mark) -> i32 {
        let opponents = to_move.opponents(self.players);
        let mut score = 0;
        for &dir in &DIRECTIONS {
            let own = run_through(board, mov, dir, to_move);
            score += threat_score(own.len, own.open_ends()) * ThreatScore::ATTACK_WEIGHT;

            for &opp in &opponents {
                let theirs = run_through(board, mov, dir, opp);
                score += threat_score(theirs.len, theirs.open_ends());
            }
        }
        score
    }
}
