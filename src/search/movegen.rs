//! Candidate move generation with beam truncation
//!
//! Only empty cells within two steps (king distance) of an existing stone are
//! considered. Each is scored by history, centrality and the runs it would
//! extend for either side, then the list is sorted and cut to the beam width.

use crate::board::{Board, Move, Pos};
use crate::eval::local_run_score;

/// Neighborhood radius around occupied cells.
const RADIUS: i32 = 2;

/// Ordering weight of the mover's own runs.
pub const ATTACK_WEIGHT: i64 = 10;
/// Ordering weight of the opponent's runs; higher so blocks outrank equal attacks.
pub const DEFENSE_WEIGHT: i64 = 12;
/// Points per step closer to the center.
const CENTER_WEIGHT: i64 = 10;

/// Per-cell cutoff counters used as a long-lived ordering hint.
#[derive(Debug, Clone)]
pub struct HistoryTable {
    size: usize,
    scores: Vec<i64>,
}

impl HistoryTable {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            scores: vec![0; size * size],
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> i64 {
        self.scores.get(pos.to_index(self.size)).copied().unwrap_or(0)
    }

    /// Reward a move that caused a beta cutoff; deeper cutoffs weigh more.
    pub fn record_cutoff(&mut self, pos: Pos, depth: i8) {
        let depth = i64::from(depth);
        if let Some(slot) = self.scores.get_mut(pos.to_index(self.size)) {
            *slot += depth * depth;
        }
    }

    /// Zero every counter, resizing if the board size changed.
    pub fn clear(&mut self, size: usize) {
        if size != self.size {
            self.size = size;
            self.scores = vec![0; size * size];
        } else {
            self.scores.fill(0);
        }
    }
}

/// Bonus for proximity to the geometric center, by Manhattan distance.
#[inline]
pub fn center_bonus(board: &Board, pos: Pos) -> i64 {
    let center = board.center();
    let dist = i64::from(pos.row.abs_diff(center.row)) + i64::from(pos.col.abs_diff(center.col));
    (board.size() as i64 / 2 + 1 - dist) * CENTER_WEIGHT
}

/// Ordered candidate moves for the side to move, at most `beam_width` long.
///
/// Forbidden cells are dropped for the restricted player. An empty board
/// yields no candidates; the caller decides the opening move.
pub fn generate_moves(board: &Board, history: &HistoryTable, beam_width: usize) -> Vec<Move> {
    let size = board.size();
    let me = board.side_to_move();
    let opp = me.opponent();

    let mut visited = vec![false; size * size];
    let mut moves = Vec::with_capacity(64);

    for stone in board.occupied() {
        for dr in -RADIUS..=RADIUS {
            for dc in -RADIUS..=RADIUS {
                let (r, c) = stone.offset(dr, dc, 1);
                if !board.in_bounds(r, c) {
                    continue;
                }
                let pos = Pos::new(r as u8, c as u8);
                let idx = pos.to_index(size);
                if visited[idx] || !board.is_empty(pos) {
                    continue;
                }
                visited[idx] = true;

                if me.is_restricted() && board.is_forbidden(r, c) {
                    continue;
                }

                let priority = history.get(pos)
                    + center_bonus(board, pos)
                    + ATTACK_WEIGHT * local_run_score(board, pos, me)
                    + DEFENSE_WEIGHT * local_run_score(board, pos, opp);
                moves.push(Move::new(pos, priority));
            }
        }
    }

    // Stable: equal priorities keep scan order
    moves.sort_by(Move::by_priority);
    moves.truncate(beam_width);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn history() -> HistoryTable {
        HistoryTable::new(19)
    }

    #[test]
    fn test_empty_board_has_no_candidates() {
        let board = Board::new(19);
        assert!(generate_moves(&board, &history(), 30).is_empty());
    }

    #[test]
    fn test_single_stone_neighborhood() {
        let mut board = Board::new(19);
        board.place(9, 9);
        let moves = generate_moves(&board, &history(), 100);
        // 5x5 block minus the stone itself
        assert_eq!(moves.len(), 24);
        for mv in &moves {
            assert!(mv.pos.row.abs_diff(9) <= 2 && mv.pos.col.abs_diff(9) <= 2);
        }
    }

    #[test]
    fn test_candidates_deduplicated() {
        let mut board = Board::new(19);
        board.place(9, 9);
        board.place(9, 10);
        let moves = generate_moves(&board, &history(), 100);
        let mut cells: Vec<Pos> = moves.iter().map(|m| m.pos).collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), moves.len());
        // Union of two overlapping 5x5 blocks: 5x6 minus two stones
        assert_eq!(moves.len(), 28);
    }

    #[test]
    fn test_candidates_clipped_at_corner() {
        let mut board = Board::new(19);
        board.place(0, 0);
        let moves = generate_moves(&board, &history(), 100);
        assert_eq!(moves.len(), 8);
    }

    #[test]
    fn test_sorted_descending_and_truncated() {
        let mut board = Board::new(19);
        for (r, c) in [(9, 9), (10, 10), (9, 10), (8, 8)] {
            board.place(r, c);
        }
        let moves = generate_moves(&board, &history(), 5);
        assert_eq!(moves.len(), 5);
        assert!(moves.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_defense_outranks_equal_attack() {
        // Black to move; White has three in a row, Black has three in a row elsewhere
        let mut board = Board::new(19);
        for c in 3..6 {
            board.set_stone(Pos::new(3, c), Stone::Black);
            board.set_stone(Pos::new(14, c), Stone::White);
        }
        let moves = generate_moves(&board, &history(), 100);
        let score_of = |pos: Pos| moves.iter().find(|m| m.pos == pos).map(|m| m.score);

        // Symmetric extension points, same distance from the center
        let attack = score_of(Pos::new(3, 6)).unwrap() - center_bonus(&board, Pos::new(3, 6));
        let block = score_of(Pos::new(14, 6)).unwrap() - center_bonus(&board, Pos::new(14, 6));
        assert!(block > attack);
    }

    #[test]
    fn test_forbidden_excluded_for_black() {
        let mut board = Board::new(19);
        for (r, c) in [(9, 7), (9, 8), (7, 9), (8, 9)] {
            board.set_stone(Pos::new(r, c), Stone::Black);
        }
        assert!(board.is_forbidden(9, 9));
        let moves = generate_moves(&board, &history(), 400);
        assert!(moves.iter().all(|m| m.pos != Pos::new(9, 9)));

        board.set_side_to_move(Stone::White);
        let moves = generate_moves(&board, &history(), 400);
        assert!(moves.iter().any(|m| m.pos == Pos::new(9, 9)));
    }

    #[test]
    fn test_history_raises_priority() {
        let mut board = Board::new(19);
        board.place(9, 9);
        let mut table = history();
        table.record_cutoff(Pos::new(11, 11), 8);
        let moves = generate_moves(&board, &table, 100);
        let corner = moves.iter().find(|m| m.pos == Pos::new(11, 11)).unwrap();
        assert_eq!(corner.score, 64 + center_bonus(&board, Pos::new(11, 11)));

        table.clear(19);
        assert_eq!(table.get(Pos::new(11, 11)), 0);
    }

    #[test]
    fn test_center_bonus() {
        let board = Board::new(19);
        assert_eq!(center_bonus(&board, Pos::new(9, 9)), 100);
        assert_eq!(center_bonus(&board, Pos::new(0, 0)), -80);
        let small = Board::new(5);
        assert_eq!(center_bonus(&small, Pos::new(2, 2)), 30);
    }
}
