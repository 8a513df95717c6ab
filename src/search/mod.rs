//! Search module for the Ninuki-renju AI
//!
//! Contains:
//! - Zobrist hashing for position identification
//! - Transposition table for caching search results
//! - Candidate generation with history ordering and beam truncation
//! - Alpha-Beta search with iterative deepening

pub mod alphabeta;
pub mod movegen;
pub mod tt;
pub mod zobrist;

pub use alphabeta::{SearchResult, Searcher, TIME_CHECK_INTERVAL};
pub use movegen::{generate_moves, HistoryTable};
pub use tt::{EntryType, TTEntry, TTStats, TranspositionTable};
pub use zobrist::ZobristTable;
