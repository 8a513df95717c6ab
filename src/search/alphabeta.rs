//! Alpha-Beta search with iterative deepening and transposition table
//!
//! Negamax with fail-soft alpha-beta, a hash-keyed transposition table, a
//! history ordering table and a wall-clock budget. The board passed in is
//! used as scratch space: every explored line is placed and undone in turn,
//! so the caller gets it back exactly as it went in.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ninuki::board::{Board, Pos};
//! use ninuki::search::Searcher;
//!
//! let mut searcher = Searcher::new(30);
//! let mut board = Board::new(19);
//! board.apply_move(9, 9).unwrap();
//!
//! let result = searcher.search(&mut board, 2, Duration::from_secs(5));
//! assert!(result.best_move.is_some());
//! assert_eq!(board.last_move(), Some(Pos::new(9, 9)));
//! ```

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::board::{Board, Move, Pos};
use crate::eval::{evaluate, PatternScore};

use super::movegen::{generate_moves, HistoryTable};
use super::{EntryType, TTStats, TranspositionTable};

/// Infinity score for alpha-beta bounds
const INF: i64 = i64::MAX;

/// Node visits between wall-clock checks. Must be a power of two.
pub const TIME_CHECK_INTERVAL: u64 = 2048;

/// Fraction of the budget after which no new depth is started.
const DEEPEN_CUTOFF_NUM: u32 = 3;
const DEEPEN_CUTOFF_DEN: u32 = 5;

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found; `None` only when the side to move has no candidates
    pub best_move: Option<Pos>,
    /// Score of the best move from the mover's point of view
    pub score: i64,
    /// Deepest fully completed iteration (0 if none completed)
    pub depth: i8,
    /// Total nodes searched
    pub nodes: u64,
    /// The clock ran out during the search
    pub timed_out: bool,
    /// Transposition table occupancy at the end of the search
    pub tt: TTStats,
}

/// Single-threaded iterative-deepening searcher.
///
/// The transposition and history tables are reset at the start of every
/// top-level [`search`](Searcher::search) call.
#[derive(Debug)]
pub struct Searcher {
    tt: TranspositionTable,
    history: HistoryTable,
    beam_width: usize,
    nodes: u64,
    start: Instant,
    budget: Duration,
    timed_out: bool,
}

impl Searcher {
    /// Searcher keeping at most `beam_width` candidates per node.
    #[must_use]
    pub fn new(beam_width: usize) -> Self {
        Self {
            tt: TranspositionTable::new(),
            history: HistoryTable::new(0),
            beam_width: beam_width.max(1),
            nodes: 0,
            start: Instant::now(),
            budget: Duration::ZERO,
            timed_out: false,
        }
    }

    /// Transposition table left over from the last search.
    #[inline]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Find the best move for the side to move.
    ///
    /// Deepens 2, 4, 6, ... up to `max_depth` (a `max_depth` below 2 runs a
    /// single iteration at that depth, minimum 1). Stops early on a won
    /// position, after spending 60% of `budget` on completed depths, or on
    /// timeout, in which case the last completed depth's move stands. If not
    /// even the first depth completes, the best-ordered candidate is played.
    pub fn search(&mut self, board: &mut Board, max_depth: i8, budget: Duration) -> SearchResult {
        self.tt.clear();
        self.history.clear(board.size());
        self.nodes = 0;
        self.timed_out = false;
        self.start = Instant::now();
        self.budget = budget;

        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            timed_out: false,
            tt: TTStats::default(),
        };

        let candidates = generate_moves(board, &self.history, self.beam_width);
        let Some(first) = candidates.first().copied() else {
            if board.is_board_empty() {
                result.best_move = Some(board.center());
                info!("empty board, opening at center {:?}", board.center());
            } else {
                warn!("no legal candidates for {}", board.side_to_move().name());
            }
            return result;
        };

        // Divide first: any budget up to Duration::MAX stays in range
        let deepen_cutoff = budget / DEEPEN_CUTOFF_DEN * DEEPEN_CUTOFF_NUM;
        let mut depth = if max_depth >= 2 { 2 } else { max_depth.max(1) };
        while depth <= max_depth.max(1) {
            let depth_start = Instant::now();
            let Some(best) = self.search_root(board, depth) else {
                break;
            };

            result.best_move = Some(best.pos);
            result.score = best.score;
            result.depth = depth;
            debug!(
                "depth {} score {} move ({}, {}) nodes {} in {:?}",
                depth,
                best.score,
                best.pos.row,
                best.pos.col,
                self.nodes,
                depth_start.elapsed()
            );

            if best.score >= PatternScore::NEAR_WIN {
                break;
            }
            if self.start.elapsed() > deepen_cutoff {
                break;
            }
            let Some(next) = depth.checked_add(2) else {
                break;
            };
            depth = next;
        }

        if result.best_move.is_none() {
            warn!(
                "depth {} did not finish within {:?}, playing first candidate ({}, {})",
                depth, budget, first.pos.row, first.pos.col
            );
            result.best_move = Some(first.pos);
            result.score = first.score;
        }

        result.nodes = self.nodes;
        result.timed_out = self.timed_out;
        result.tt = self.tt.stats();
        info!(
            "{} plays {:?} score {} depth {} nodes {} in {:?}",
            board.side_to_move().name(),
            result.best_move,
            result.score,
            result.depth,
            result.nodes,
            self.start.elapsed()
        );
        result
    }

    /// One full-width root iteration. `None` if the clock ran out.
    ///
    /// No beta cutoff here: every candidate is compared, but the improving
    /// alpha is passed down so children can still prune.
    fn search_root(&mut self, board: &mut Board, depth: i8) -> Option<Move> {
        let moves = generate_moves(board, &self.history, self.beam_width);
        let mut best = *moves.first()?;
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for mv in &moves {
            let (row, col) = (i32::from(mv.pos.row), i32::from(mv.pos.col));
            let record = board.place(row, col);
            let score = -self.negamax(board, depth - 1, -beta, -alpha);
            board.undo(row, col, &record);

            if self.timed_out {
                return None;
            }

            if score > best_score {
                best_score = score;
                best = Move::new(mv.pos, score);
            }
            alpha = alpha.max(score);
            if alpha >= PatternScore::NEAR_WIN {
                break;
            }
        }

        Some(best)
    }

    /// Negamax with fail-soft alpha-beta, scored for the side to move.
    ///
    /// Returns 0 once the clock has run out; callers must check
    /// `self.timed_out` before trusting the value.
    fn negamax(&mut self, board: &mut Board, depth: i8, mut alpha: i64, mut beta: i64) -> i64 {
        self.nodes += 1;
        if self.nodes & (TIME_CHECK_INTERVAL - 1) == 0 && self.start.elapsed() > self.budget {
            self.timed_out = true;
            return 0;
        }

        let hash = board.hash();
        if let Some(score) = self.tt.probe(hash, depth, &mut alpha, &mut beta) {
            return score;
        }

        // The player who just moved may have won
        if board.has_won(board.side_to_move().opponent()) {
            return -(PatternScore::FIVE + i64::from(depth));
        }

        if depth <= 0 {
            return evaluate(board);
        }

        let mut moves = generate_moves(board, &self.history, self.beam_width);
        if moves.is_empty() {
            return 0;
        }
        if let Some(tt_move) = self.tt.best_move(hash) {
            if let Some(idx) = moves.iter().position(|m| m.pos == tt_move) {
                moves[..=idx].rotate_right(1);
            }
        }

        let alpha_entered = alpha;
        let mut best_score = -INF;
        let mut best_move = None;

        for mv in &moves {
            let (row, col) = (i32::from(mv.pos.row), i32::from(mv.pos.col));
            let record = board.place(row, col);
            let score = -self.negamax(board, depth - 1, -beta, -alpha);
            board.undo(row, col, &record);

            if self.timed_out {
                return 0;
            }

            if score > best_score {
                best_score = score;
                best_move = Some(mv.pos);
            }
            alpha = alpha.max(best_score);
            if alpha >= beta {
                self.history.record_cutoff(mv.pos, depth);
                break;
            }
        }

        let entry_type = if best_score <= alpha_entered {
            EntryType::UpperBound
        } else if best_score >= beta {
            EntryType::LowerBound
        } else {
            EntryType::Exact
        };
        self.tt.store(hash, depth, best_score, entry_type, best_move);

        best_score
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_BEAM_WIDTH)
    }
}
