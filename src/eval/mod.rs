//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! The evaluation considers:
//! - Line patterns (twos, threes, fours, fives)
//! - Capture counts
//! - Defensive weighting of the opponent's patterns

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, local_run_score, pattern_score};
pub use patterns::PatternScore;
