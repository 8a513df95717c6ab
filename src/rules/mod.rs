//! Game rules for Gomoku with Ninuki-renju variant
//!
//! This module implements the rule set for Gomoku including:
//! - Capture rules (pair capture)
//! - Win conditions (5-in-a-row, capture win)
//! - Forbidden moves (double-three)

pub mod capture;
pub mod forbidden;
pub mod win;

// Re-exports for convenient access
pub use capture::{bracketed_pairs, has_capture};
pub use forbidden::{count_free_threes, is_double_three};
pub use win::{check_win, five_through, has_five_in_row};
