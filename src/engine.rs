//! Main AI Engine
//!
//! Wraps the searcher with its configuration and turns a search into either a
//! move to play or a resignation.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use ninuki::{AIEngine, Board, EngineConfig};
//!
//! let config = EngineConfig::default()
//!     .with_max_depth(2)
//!     .with_time_budget(Duration::from_secs(5));
//! let mut engine = AIEngine::with_config(config);
//!
//! let mut board = Board::new(19);
//! board.apply_move(9, 9).unwrap();
//!
//! let result = engine.get_move(&mut board).unwrap();
//! println!("White plays ({}, {}) after {}ms", result.best_move.row, result.best_move.col, result.time_ms);
//! ```

use std::time::{Duration, Instant};

use log::warn;

use crate::board::{Board, Move, Pos};
use crate::config::EngineConfig;
use crate::error::GameError;
use crate::search::{SearchResult, Searcher, TTStats};

/// Result of a move search with timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub best_move: Pos,
    /// Search score from the mover's point of view
    pub score: i64,
    /// Deepest completed iteration
    pub depth: i8,
    pub nodes: u64,
    /// Wall time spent, in milliseconds
    pub time_ms: u64,
    pub timed_out: bool,
    /// Transposition table occupancy after the search
    pub tt: TTStats,
}

impl MoveResult {
    fn from_search(result: &SearchResult, best_move: Pos, elapsed: Duration) -> Self {
        Self {
            best_move,
            score: result.score,
            depth: result.depth,
            nodes: result.nodes,
            time_ms: elapsed.as_millis() as u64,
            timed_out: result.timed_out,
            tt: result.tt,
        }
    }

    /// The chosen move carrying its score.
    #[inline]
    pub fn as_move(&self) -> Move {
        Move::new(self.best_move, self.score)
    }
}

/// Main AI engine: configuration plus a reusable searcher.
#[derive(Debug)]
pub struct AIEngine {
    config: EngineConfig,
    searcher: Searcher,
}

impl AIEngine {
    /// Engine with the default configuration (480 ms, depth 10, beam 30).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            searcher: Searcher::new(config.beam_width),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Best move for the side to move using the configured budget and depth.
    ///
    /// The board is searched in place and handed back unchanged.
    pub fn get_move(&mut self, board: &mut Board) -> Result<MoveResult, GameError> {
        let start = Instant::now();
        let result = self
            .searcher
            .search(board, self.config.search_depth(), self.config.time_budget);

        match result.best_move {
            Some(pos) => Ok(MoveResult::from_search(&result, pos, start.elapsed())),
            None => {
                warn!("{} resigns: no legal moves", board.side_to_move().name());
                Err(GameError::NoLegalMoves)
            }
        }
    }

    /// Best move within `time_budget`, deepening at most to `max_depth`.
    ///
    /// Returns [`GameError::NoLegalMoves`] when the side to move has nothing
    /// to play, which callers treat as a resignation.
    pub fn compute_best_move(
        &mut self,
        board: &mut Board,
        time_budget: Duration,
        max_depth: u8,
    ) -> Result<Move, GameError> {
        let saved = self.config;
        self.config = self.config.with_time_budget(time_budget).with_max_depth(max_depth);
        let result = self.get_move(board);
        self.config = saved;
        result.map(|r| r.as_move())
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot search with a fresh default engine.
pub fn compute_best_move(
    board: &mut Board,
    time_budget: Duration,
    max_depth: u8,
) -> Result<Move, GameError> {
    AIEngine::new().compute_best_move(board, time_budget, max_depth)
}
