//! Ninuki-renju game engine
//!
//! A Gomoku engine implementing Ninuki-renju variant rules:
//! - Square board, 19x19 by default
//! - 5-in-a-row to win (overlines allowed)
//! - Capture win: 10 captured stones (5 pairs)
//! - Pair capture rule: X-O-O-X pattern captures the O-O pair
//! - Double-three forbidden for Black
//!
//! # Architecture
//!
//! - [`board`]: Board representation with make/undo and incremental hashing
//! - [`rules`]: Game rules (capture, win, forbidden moves)
//! - [`eval`]: Position evaluation and move-ordering heuristics
//! - [`search`]: Zobrist keys, transposition table, move generation, alpha-beta
//! - [`engine`]: AI engine tying a configuration to a searcher
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use ninuki::{AIEngine, Board, Stone};
//!
//! let mut board = Board::new(19);
//! board.apply_move(9, 9).unwrap();
//!
//! let mut engine = AIEngine::new();
//! let mv = engine.compute_best_move(&mut board, Duration::from_millis(300), 4).unwrap();
//! board.apply_move(i32::from(mv.pos.row), i32::from(mv.pos.col)).unwrap();
//! assert_eq!(board.side_to_move(), Stone::Black);
//! ```
//!
//! # Search
//!
//! Iterative deepening over even depths with negamax alpha-beta. Candidates
//! are empty cells near existing stones, ordered by history, centrality and
//! local run potential, then cut to a fixed beam. The search runs on a single
//! thread inside a wall-clock budget and always leaves the board as it found it.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, MoveRecord, Pos, Stone, BOARD_SIZE, CAPTURE_WIN_STONES, MAX_BOARD_SIZE};
pub use config::EngineConfig;
pub use engine::{compute_best_move, AIEngine, MoveResult};
pub use error::GameError;
