//! Pattern scores for Gomoku evaluation
//!
//! These constants define the scoring weights for line patterns and captures.
//! Strict ordering keeps forcing lines ahead of incremental gains:
//! FIVE > OPEN_FOUR > CLOSED_FOUR > OPEN_THREE > CAPTURE > CLOSED_THREE > OPEN_TWO.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i64 = 100_000_000;

    /// Open four: _OOOO_ (cannot be blocked in one move)
    pub const OPEN_FOUR: i64 = 10_000_000;
    /// Closed four: XOOOO_ or _OOOOX
    pub const CLOSED_FOUR: i64 = 2_000_000;

    /// Open three: _OOO_ (becomes an open four next move)
    pub const OPEN_THREE: i64 = 1_000_000;
    /// Closed three: XOOO_ or _OOOX
    pub const CLOSED_THREE: i64 = 5_000;

    /// Open two: _OO_
    pub const OPEN_TWO: i64 = 3_000;

    /// Value per captured stone
    pub const CAPTURE: i64 = 150_000;

    /// Scores at or above this are treated as a forced win.
    pub const NEAR_WIN: i64 = Self::FIVE - 10_000;
}

/// Opponent pattern weight as a fixed-point ratio (1.2 = 6/5).
pub const DEFENSE_BIAS_NUM: i64 = 6;
pub const DEFENSE_BIAS_DEN: i64 = 5;

/// Apply the defense bias to a non-negative pattern score.
///
/// Integer division truncates toward zero, i.e. rounds down here.
#[inline]
pub fn defense_biased(score: i64) -> i64 {
    score * DEFENSE_BIAS_NUM / DEFENSE_BIAS_DEN
}

/// Score of one run given its length and how many of its two ends are empty.
pub fn line_score(len: usize, open_ends: u8) -> i64 {
    match (len, open_ends) {
        (5.., _) => PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        _ => 0,
    }
}

/// Weight of a hypothetical run for move ordering, geometric in its length.
pub fn run_weight(len: usize) -> i64 {
    match len {
        5.. => 1_000_000,
        4 => 100_000,
        3 => 10_000,
        2 => 100,
        _ => 0,
    }
}
