//! Zobrist hashing for position identification
//!
//! Zobrist hashing allows O(1) incremental hash updates when placing/removing stones.
//! The board keeps its hash current through XOR updates; this table only
//! supplies the keys and can recompute a hash from scratch for verification.
//!
//! # Example
//!
//! ```
//! use ninuki::board::{Board, Pos, Stone};
//! use ninuki::search::ZobristTable;
//!
//! let zt = ZobristTable::new(19);
//! let mut board = Board::new(19);
//! assert_eq!(zt.hash(&board), 0);
//!
//! board.apply_move(9, 9).unwrap();
//! let expected = zt.stone_key(Pos::new(9, 9), Stone::Black) ^ zt.turn_key();
//! assert_eq!(board.hash(), expected);
//! assert_eq!(zt.hash(&board), expected);
//! ```

use std::fmt;

use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use crate::board::{Board, Pos, Stone, MAX_BOARD_SIZE};

/// Fixed seed: identical positions hash identically across runs.
const ZOBRIST_SEED: u64 = 12345;

/// Zobrist key table.
///
/// One random key per (cell, stone color) plus a turn key that is XORed in
/// whenever White is to move. Immutable after construction, so one table can
/// be shared by any number of boards.
pub struct ZobristTable {
    size: usize,
    black: Vec<u64>,
    white: Vec<u64>,
    turn: u64,
}

impl ZobristTable {
    /// Build the key table for a `size` x `size` board.
    ///
    /// `size` is clamped to `1..=MAX_BOARD_SIZE`; boards built on the table
    /// take their size from it.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let size = size.clamp(1, MAX_BOARD_SIZE);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(ZOBRIST_SEED);
        let cells = size * size;

        let mut black = Vec::with_capacity(cells);
        let mut white = Vec::with_capacity(cells);
        for _ in 0..cells {
            black.push(rng.next_u64());
            white.push(rng.next_u64());
        }

        Self {
            size,
            black,
            white,
            turn: rng.next_u64(),
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Key for `stone` occupying `pos`. Non-player values hash to 0.
    #[inline]
    #[must_use]
    pub fn stone_key(&self, pos: Pos, stone: Stone) -> u64 {
        let idx = pos.to_index(self.size);
        match stone {
            Stone::Black => self.black[idx],
            Stone::White => self.white[idx],
            Stone::Empty | Stone::OutOfBounds => 0,
        }
    }

    /// Key toggled on every change of turn.
    #[inline]
    #[must_use]
    pub fn turn_key(&self) -> u64 {
        self.turn
    }

    /// Compute the full hash for a board position.
    ///
    /// Used to verify the board's incrementally maintained hash.
    #[must_use]
    pub fn hash(&self, board: &Board) -> u64 {
        let mut h = 0u64;
        for pos in board.occupied() {
            h ^= self.stone_key(pos, board.get(pos));
        }
        if board.side_to_move() == Stone::White {
            h ^= self.turn;
        }
        h
    }
}

impl fmt::Debug for ZobristTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZobristTable")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zobrist_empty_board() {
        let zt = ZobristTable::new(19);
        let board = Board::new(19);
        assert_eq!(zt.hash(&board), 0);
    }

    #[test]
    fn test_zobrist_deterministic() {
        let zt1 = ZobristTable::new(19);
        let zt2 = ZobristTable::new(19);

        for idx in 0..361 {
            let pos = Pos::from_index(idx, 19);
            assert_eq!(zt1.stone_key(pos, Stone::Black), zt2.stone_key(pos, Stone::Black));
            assert_eq!(zt1.stone_key(pos, Stone::White), zt2.stone_key(pos, Stone::White));
        }
        assert_eq!(zt1.turn_key(), zt2.turn_key());
    }

    #[test]
    fn test_zobrist_keys_distinct() {
        let zt = ZobristTable::new(19);
        let mut keys: Vec<u64> = (0..361)
            .flat_map(|idx| {
                let pos = Pos::from_index(idx, 19);
                [zt.stone_key(pos, Stone::Black), zt.stone_key(pos, Stone::White)]
            })
            .collect();
        keys.push(zt.turn_key());
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_zobrist_non_player_keys_are_zero() {
        let zt = ZobristTable::new(19);
        assert_eq!(zt.stone_key(Pos::new(3, 3), Stone::Empty), 0);
        assert_eq!(zt.stone_key(Pos::new(3, 3), Stone::OutOfBounds), 0);
    }

    #[test]
    fn test_zobrist_same_position_different_path() {
        let mut board1 = Board::new(19);
        let mut board2 = Board::new(19);

        // Path 1: B(9,9) W(10,10) B(3,3) W(4,4)
        for (r, c) in [(9, 9), (10, 10), (3, 3), (4, 4)] {
            board1.apply_move(r, c).unwrap();
        }
        // Path 2: B(3,3) W(4,4) B(9,9) W(10,10)
        for (r, c) in [(3, 3), (4, 4), (9, 9), (10, 10)] {
            board2.apply_move(r, c).unwrap();
        }

        assert_eq!(board1.hash(), board2.hash());
    }

    #[test]
    fn test_zobrist_side_to_move_matters() {
        let zt = ZobristTable::new(19);
        let mut board = Board::new(19);
        board.apply_move(9, 9).unwrap();

        // Same stones, Black to move again would differ only by the turn key
        let stones_only = zt.stone_key(Pos::new(9, 9), Stone::Black);
        assert_eq!(board.hash(), stones_only ^ zt.turn_key());
        assert_ne!(board.hash(), stones_only);
    }

    #[test]
    fn test_zobrist_size_clamped() {
        assert_eq!(ZobristTable::new(0).size(), 1);
        assert_eq!(ZobristTable::new(300).size(), MAX_BOARD_SIZE);
        assert_eq!(ZobristTable::new(MAX_BOARD_SIZE).size(), MAX_BOARD_SIZE);
    }

    #[test]
    fn test_zobrist_small_board() {
        let zt = ZobristTable::new(5);
        assert_eq!(zt.size(), 5);
        let corner = zt.stone_key(Pos::new(4, 4), Stone::White);
        assert_ne!(corner, 0);
    }
}
