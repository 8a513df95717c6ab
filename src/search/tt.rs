//! Transposition Table for caching search results
//!
//! The transposition table stores search results indexed by board hash,
//! enabling reuse of previous search results for positions we've seen before.
//!
//! # Example
//!
//! ```
//! use ninuki::board::Pos;
//! use ninuki::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new();
//! tt.store(0x1234_5678_9ABC_DEF0, 4, 100, EntryType::Exact, Some(Pos::new(9, 9)));
//!
//! let (mut alpha, mut beta) = (-1000, 1000);
//! assert_eq!(tt.probe(0x1234_5678_9ABC_DEF0, 4, &mut alpha, &mut beta), Some(100));
//! ```

use std::collections::HashMap;

use crate::board::Pos;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TTEntry {
    /// Zobrist hash of the position
    pub hash: u64,
    /// Remaining search depth this result was computed at
    pub depth: i8,
    /// Evaluation score
    pub score: i64,
    /// Type of score (exact, lower bound, upper bound)
    pub entry_type: EntryType,
    /// Best move found for this position
    pub best_move: Option<Pos>,
}

/// Hash-keyed cache of search results.
///
/// Always-overwrite: a store replaces whatever was kept for that hash,
/// regardless of depth. The 64-bit key is trusted as is; a collision
/// between distinct positions goes undetected.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw lookup.
    #[inline]
    #[must_use]
    pub fn get(&self, hash: u64) -> Option<&TTEntry> {
        self.entries.get(&hash)
    }

    /// Probe the table and tighten the search window.
    ///
    /// Only entries searched at least `depth` deep are used. An exact entry
    /// returns its score directly; bounds raise `alpha` or lower `beta`, and
    /// if that empties the window the stored score is returned as a cutoff.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: i8, alpha: &mut i64, beta: &mut i64) -> Option<i64> {
        let entry = self.entries.get(&hash)?;
        if entry.depth < depth {
            return None;
        }

        match entry.entry_type {
            EntryType::Exact => return Some(entry.score),
            EntryType::LowerBound => *alpha = (*alpha).max(entry.score),
            EntryType::UpperBound => *beta = (*beta).min(entry.score),
        }

        if *alpha >= *beta {
            Some(entry.score)
        } else {
            None
        }
    }

    /// Best move remembered for this position, for move ordering.
    #[inline]
    #[must_use]
    pub fn best_move(&self, hash: u64) -> Option<Pos> {
        self.entries.get(&hash).and_then(|e| e.best_move)
    }

    /// Store a result, replacing any previous entry for `hash`.
    pub fn store(
        &mut self,
        hash: u64,
        depth: i8,
        score: i64,
        entry_type: EntryType,
        best_move: Option<Pos>,
    ) {
        self.entries.insert(
            hash,
            TTEntry {
                hash,
                depth,
                score,
                entry_type,
                best_move,
            },
        );
    }

    /// Clear all entries in the table.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let mut stats = TTStats {
            used: self.entries.len(),
            ..TTStats::default()
        };
        for entry in self.entries.values() {
            match entry.entry_type {
                EntryType::Exact => stats.exact += 1,
                EntryType::LowerBound => stats.lower += 1,
                EntryType::UpperBound => stats.upper += 1,
            }
        }
        stats
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    /// Number of positions stored
    pub used: usize,
    pub exact: usize,
    pub lower: usize,
    pub upper: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    const HASH: u64 = 0xDEAD_BEEF_CAFE_F00D;

    #[test]
    fn test_tt_store_probe_exact() {
        let mut tt = TranspositionTable::new();
        tt.store(HASH, 4, 250, EntryType::Exact, Some(Pos::new(9, 9)));

        let (mut alpha, mut beta) = (-1000, 1000);
        assert_eq!(tt.probe(HASH, 4, &mut alpha, &mut beta), Some(250));
        assert_eq!(tt.probe(HASH, 2, &mut alpha, &mut beta), Some(250));
    }

    #[test]
    fn test_tt_depth_requirement() {
        let mut tt = TranspositionTable::new();
        tt.store(HASH, 2, 250, EntryType::Exact, None);

        let (mut alpha, mut beta) = (-1000, 1000);
        assert_eq!(tt.probe(HASH, 4, &mut alpha, &mut beta), None);
        assert_eq!((alpha, beta), (-1000, 1000));
    }

    #[test]
    fn test_tt_lower_bound_raises_alpha() {
        let mut tt = TranspositionTable::new();
        tt.store(HASH, 4, 300, EntryType::LowerBound, None);

        let (mut alpha, mut beta) = (-1000, 1000);
        assert_eq!(tt.probe(HASH, 4, &mut alpha, &mut beta), None);
        assert_eq!(alpha, 300);
        assert_eq!(beta, 1000);
    }

    #[test]
    fn test_tt_lower_bound_cutoff() {
        let mut tt = TranspositionTable::new();
        tt.store(HASH, 4, 1500, EntryType::LowerBound, None);

        let (mut alpha, mut beta) = (-1000, 1000);
        assert_eq!(tt.probe(HASH, 4, &mut alpha, &mut beta), Some(1500));
    }

    #[test]
    fn test_tt_upper_bound_lowers_beta() {
        let mut tt = TranspositionTable::new();
        tt.store(HASH, 4, -300, EntryType::UpperBound, None);

        let (mut alpha, mut beta) = (-1000, 1000);
        assert_eq!(tt.probe(HASH, 4, &mut alpha, &mut beta), None);
        assert_eq!(beta, -300);

        let (mut alpha, mut beta) = (-200, 1000);
        assert_eq!(tt.probe(HASH, 4, &mut alpha, &mut beta), Some(-300));
    }

    #[test]
    fn test_tt_miss() {
        let tt = TranspositionTable::new();
        let (mut alpha, mut beta) = (-1000, 1000);
        assert_eq!(tt.probe(HASH, 0, &mut alpha, &mut beta), None);
        assert_eq!(tt.best_move(HASH), None);
    }

    #[test]
    fn test_tt_best_move() {
        let mut tt = TranspositionTable::new();
        tt.store(HASH, 1, 0, EntryType::UpperBound, Some(Pos::new(3, 4)));
        assert_eq!(tt.best_move(HASH), Some(Pos::new(3, 4)));
    }

    #[test]
    fn test_tt_always_overwrites() {
        let mut tt = TranspositionTable::new();
        tt.store(HASH, 8, 100, EntryType::Exact, Some(Pos::new(1, 1)));
        tt.store(HASH, 2, -50, EntryType::UpperBound, Some(Pos::new(2, 2)));

        let entry = tt.get(HASH).unwrap();
        assert_eq!(entry.depth, 2);
        assert_eq!(entry.score, -50);
        assert_eq!(entry.best_move, Some(Pos::new(2, 2)));
        assert_eq!(tt.len(), 1);
    }

    #[test]
    fn test_tt_clear_and_stats() {
        let mut tt = TranspositionTable::new();
        tt.store(1, 2, 0, EntryType::Exact, None);
        tt.store(2, 2, 0, EntryType::LowerBound, None);
        tt.store(3, 2, 0, EntryType::UpperBound, None);

        let stats = tt.stats();
        assert_eq!(stats.used, 3);
        assert_eq!((stats.exact, stats.lower, stats.upper), (1, 1, 1));

        tt.clear();
        assert!(tt.is_empty());
        assert_eq!(tt.stats(), TTStats::default());
    }
}
