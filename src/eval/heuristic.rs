//! Heuristic evaluation function for Gomoku board positions
//!
//! This module provides the static evaluation used at search leaves and the
//! point scoring used by move ordering. Both are pure functions of the board,
//! the point and the player; nothing is captured or cached.

use crate::board::{Board, Pos, Stone, LINE_DIRECTIONS};

use super::patterns::{defense_biased, line_score, run_weight, PatternScore};

/// Evaluate the board from the perspective of the side to move.
///
/// Capture differential plus own line patterns, minus the opponent's line
/// patterns scaled up by the defense bias, so `evaluate` is not antisymmetric
/// under a change of side to move.
#[must_use]
pub fn evaluate(board: &Board) -> i64 {
    let me = board.side_to_move();
    let opp = me.opponent();

    let captures = (i64::from(board.captures(me)) - i64::from(board.captures(opp)))
        * PatternScore::CAPTURE;

    captures + pattern_score(board, me) - defense_biased(pattern_score(board, opp))
}

/// Sum of line-pattern scores for every run owned by `stone`.
///
/// Runs are measured from their head only (predecessor not the same color)
/// so each one is counted once per orientation.
#[must_use]
pub fn pattern_score(board: &Board, stone: Stone) -> i64 {
    let mut score = 0;

    for pos in board.occupied() {
        if board.get(pos) != stone {
            continue;
        }
        for &(dr, dc) in &LINE_DIRECTIONS {
            let (pr, pc) = pos.offset(dr, dc, -1);
            let before = board.read(pr, pc);
            if before == stone {
                continue;
            }

            let mut len = 0;
            let after = loop {
                let (r, c) = pos.offset(dr, dc, len);
                let cell = board.read(r, c);
                if cell != stone {
                    break cell;
                }
                len += 1;
            };

            let open_ends = u8::from(before == Stone::Empty) + u8::from(after == Stone::Empty);
            score += line_score(len as usize, open_ends);
        }
    }

    score
}

/// Ordering value of a hypothetical `stone` at `pos`, without touching the board.
///
/// For each orientation the contiguous run through `pos` is weighted
/// geometrically by its length.
#[must_use]
pub fn local_run_score(board: &Board, pos: Pos, stone: Stone) -> i64 {
    let mut score = 0;

    for &(dr, dc) in &LINE_DIRECTIONS {
        let mut len = 1;
        for sign in [1i32, -1i32] {
            let mut k = 1;
            loop {
                let (r, c) = pos.offset(dr * sign, dc * sign, k);
                if board.read(r, c) != stone {
                    break;
                }
                len += 1;
                k += 1;
            }
        }
        score += run_weight(len);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(black: &[(u8, u8)], white: &[(u8, u8)], to_move: Stone) -> Board {
        let mut board = Board::new(19);
        for &(r, c) in black {
            board.set_stone(Pos::new(r, c), Stone::Black);
        }
        for &(r, c) in white {
            board.set_stone(Pos::new(r, c), Stone::White);
        }
        board.set_side_to_move(to_move);
        board
    }

    #[test]
    fn test_evaluate_empty_board() {
        let board = Board::new(19);
        assert_eq!(evaluate(&board), 0);
    }

    #[test]
    fn test_pattern_open_two() {
        let board = board_with(&[(9, 9), (9, 10)], &[], Stone::Black);
        assert_eq!(pattern_score(&board, Stone::Black), PatternScore::OPEN_TWO);
    }

    #[test]
    fn test_pattern_open_three() {
        let board = board_with(&[(9, 8), (9, 9), (9, 10)], &[], Stone::Black);
        // Horizontal open three; the three single stones score nothing vertically/diagonally
        assert_eq!(pattern_score(&board, Stone::Black), PatternScore::OPEN_THREE);
    }

    #[test]
    fn test_pattern_closed_four() {
        let board = board_with(&[(9, 8), (9, 9), (9, 10), (9, 11)], &[(9, 7)], Stone::Black);
        assert_eq!(pattern_score(&board, Stone::Black), PatternScore::CLOSED_FOUR);
    }

    #[test]
    fn test_pattern_dead_four_at_edge() {
        // Blocked by the edge on one side and White on the other
        let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], &[(0, 4)], Stone::Black);
        assert_eq!(pattern_score(&board, Stone::Black), 0);
    }

    #[test]
    fn test_pattern_five() {
        let board = board_with(&[(9, 5), (9, 6), (9, 7), (9, 8), (9, 9)], &[], Stone::White);
        assert_eq!(pattern_score(&board, Stone::Black), PatternScore::FIVE);
    }

    #[test]
    fn test_evaluate_defense_bias() {
        // Same open three for each side; the side to move sees the opponent's weigh more
        let board = board_with(&[(3, 3), (3, 4), (3, 5)], &[(12, 3), (12, 4), (12, 5)], Stone::Black);
        let expected = PatternScore::OPEN_THREE - defense_biased(PatternScore::OPEN_THREE);
        assert_eq!(evaluate(&board), expected);
        assert!(evaluate(&board) < 0);
    }

    #[test]
    fn test_evaluate_capture_differential() {
        let mut board = board_with(
            &[(9, 5), (9, 9)],
            &[(9, 7), (9, 8)],
            Stone::Black,
        );
        board.place(9, 6);
        // White to move, two stones down
        let score = evaluate(&board);
        assert!(score < -PatternScore::CAPTURE);
    }

    #[test]
    fn test_evaluate_open_four_for_opponent_is_near_loss() {
        let board = board_with(&[(9, 5), (9, 6), (9, 7), (9, 8)], &[], Stone::White);
        assert!(evaluate(&board) <= -PatternScore::OPEN_FOUR);
    }

    #[test]
    fn test_local_run_score() {
        let board = board_with(&[(9, 7), (9, 8)], &[], Stone::White);
        // Black at (9,9) joins a horizontal three; three lone orientations add nothing
        assert_eq!(local_run_score(&board, Pos::new(9, 9), Stone::Black), 10_000);
        assert_eq!(local_run_score(&board, Pos::new(9, 9), Stone::White), 0);
    }

    #[test]
    fn test_local_run_score_does_not_mutate() {
        let board = board_with(&[(9, 7), (9, 8)], &[(10, 9)], Stone::White);
        let before = board.clone();
        let _ = local_run_score(&board, Pos::new(9, 9), Stone::Black);
        assert_eq!(board, before);
    }
}
