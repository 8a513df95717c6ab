//! Engine configuration

use std::time::Duration;

use crate::board::BOARD_SIZE;

/// Wall-clock budget per AI move.
pub const DEFAULT_TIME_BUDGET: Duration = Duration::from_millis(480);
/// Deepest iterative-deepening iteration attempted.
pub const DEFAULT_MAX_DEPTH: u8 = 10;
/// Candidates kept per node after ordering.
pub const DEFAULT_BEAM_WIDTH: usize = 30;

/// Tunable search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub time_budget: Duration,
    pub max_depth: u8,
    pub beam_width: usize,
    pub board_size: usize,
}

impl EngineConfig {
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = budget;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, depth: u8) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_beam_width(mut self, width: usize) -> Self {
        self.beam_width = width.max(1);
        self
    }

    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Search depth as the signed ply count the searcher works in.
    #[inline]
    pub fn search_depth(&self) -> i8 {
        i8::try_from(self.max_depth).unwrap_or(i8::MAX)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_budget: DEFAULT_TIME_BUDGET,
            max_depth: DEFAULT_MAX_DEPTH,
            beam_width: DEFAULT_BEAM_WIDTH,
            board_size: BOARD_SIZE,
        }
    }
}
