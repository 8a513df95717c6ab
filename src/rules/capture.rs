//! Capture rules for Ninuki-renju (Pente-style pair capture)
//!
//! Capture pattern: X-O-O-X where X is the capturing player's stone
//! and O is the opponent's stone. Only exactly 2 stones can be captured.

use smallvec::SmallVec;

use crate::board::{Board, Pos, Stone, LINE_DIRECTIONS};

/// Find the opponent pairs bracketed by a `stone` placed at `pos`.
///
/// Checks all 8 directions; each bracket found is reported independently.
/// Only cells at distance 1..=3 are read, so the result is the same whether
/// or not the stone is already on `pos`.
pub fn bracketed_pairs(board: &Board, pos: Pos, stone: Stone) -> SmallVec<[[Pos; 2]; 8]> {
    let mut pairs = SmallVec::new();
    let opponent = stone.opponent();

    for &(dr, dc) in &LINE_DIRECTIONS {
        for sign in [-1i32, 1i32] {
            let (dr, dc) = (dr * sign, dc * sign);
            let (r1, c1) = pos.offset(dr, dc, 1);
            let (r2, c2) = pos.offset(dr, dc, 2);
            let (r3, c3) = pos.offset(dr, dc, 3);

            // Pattern: [placed] - opp - opp - ours
            if board.read(r1, c1) == opponent
                && board.read(r2, c2) == opponent
                && board.read(r3, c3) == stone
            {
                pairs.push([
                    Pos::new(r1 as u8, c1 as u8),
                    Pos::new(r2 as u8, c2 as u8),
                ]);
            }
        }
    }

    pairs
}

/// Check if a move would result in any captures.
#[inline]
pub fn has_capture(board: &Board, pos: Pos, stone: Stone) -> bool {
    !bracketed_pairs(board, pos, stone).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup(stones: &[(u8, u8, Stone)], to_move: Stone) -> Board {
        let mut board = Board::new(19);
        for &(r, c, s) in stones {
            board.set_stone(Pos::new(r, c), s);
        }
        board.set_side_to_move(to_move);
        board
    }

    #[test]
    fn test_capture_horizontal() {
        // B _ W W B  (B places at _, captures W W)
        let board = setup(
            &[
                (9, 5, Stone::Black),
                (9, 7, Stone::White),
                (9, 8, Stone::White),
                (9, 9, Stone::Black),
            ],
            Stone::Black,
        );

        let pairs = bracketed_pairs(&board, Pos::new(9, 6), Stone::Black);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0], [Pos::new(9, 7), Pos::new(9, 8)]);
    }

    #[test]
    fn test_capture_vertical_and_diagonals() {
        let board = setup(
            &[
                // vertical below (10..12, 9)
                (10, 9, Stone::White),
                (11, 9, Stone::White),
                (12, 9, Stone::Black),
                // diagonal up-left
                (8, 8, Stone::White),
                (7, 7, Stone::White),
                (6, 6, Stone::Black),
                // anti-diagonal down-left
                (10, 8, Stone::White),
                (11, 7, Stone::White),
                (12, 6, Stone::Black),
            ],
            Stone::Black,
        );

        let pairs = bracketed_pairs(&board, Pos::new(9, 9), Stone::Black);
        assert_eq!(pairs.len(), 3);
    }

    #[test]
    fn test_no_capture_single_stone() {
        // B _ W B  (only 1 white stone - no capture)
        let board = setup(
            &[(9, 5, Stone::Black), (9, 7, Stone::White), (9, 8, Stone::Black)],
            Stone::Black,
        );
        assert!(!has_capture(&board, Pos::new(9, 6), Stone::Black));
    }

    #[test]
    fn test_no_capture_three_stones() {
        // B _ W W W B  (3 white stones - no capture, must be exactly 2)
        let board = setup(
            &[
                (9, 5, Stone::Black),
                (9, 7, Stone::White),
                (9, 8, Stone::White),
                (9, 9, Stone::White),
                (9, 10, Stone::Black),
            ],
            Stone::Black,
        );
        assert!(bracketed_pairs(&board, Pos::new(9, 6), Stone::Black).is_empty());
    }

    #[test]
    fn test_place_executes_capture() {
        let mut board = setup(
            &[
                (9, 5, Stone::Black),
                (9, 7, Stone::White),
                (9, 8, Stone::White),
                (9, 9, Stone::Black),
            ],
            Stone::Black,
        );

        let record = board.place(9, 6);
        assert!(record.executed());
        assert_eq!(record.captured(), &[Pos::new(9, 7), Pos::new(9, 8)]);
        assert_eq!(board.captures(Stone::Black), 2);
        assert!(board.is_empty(Pos::new(9, 7)));
        assert!(board.is_empty(Pos::new(9, 8)));
    }

    #[test]
    fn test_multiple_captures_same_move() {
        // B W W _ W W B
        // 3 4 5 6 7 8 9
        let mut board = setup(
            &[
                (9, 3, Stone::Black),
                (9, 4, Stone::White),
                (9, 5, Stone::White),
                (9, 7, Stone::White),
                (9, 8, Stone::White),
                (9, 9, Stone::Black),
            ],
            Stone::Black,
        );

        let record = board.place(9, 6);
        assert_eq!(record.captured().len(), 4);
        assert_eq!(board.captures(Stone::Black), 4);
    }

    #[test]
    fn test_white_captures_black() {
        // W _ B B W (White captures Black pair)
        let mut board = setup(
            &[
                (5, 5, Stone::White),
                (5, 7, Stone::Black),
                (5, 8, Stone::Black),
                (5, 9, Stone::White),
            ],
            Stone::White,
        );

        board.place(5, 6);
        assert_eq!(board.captures(Stone::White), 2);
        assert_eq!(board.captures(Stone::Black), 0);
        assert!(board.is_empty(Pos::new(5, 7)));
        assert!(board.is_empty(Pos::new(5, 8)));
    }

    #[test]
    fn test_capture_at_board_edge() {
        let board = setup(
            &[
                (0, 0, Stone::Black),
                (0, 2, Stone::White),
                (0, 3, Stone::White),
                (0, 4, Stone::Black),
            ],
            Stone::Black,
        );
        assert!(has_capture(&board, Pos::new(0, 1), Stone::Black));
    }

    #[test]
    fn test_no_capture_out_of_bounds() {
        // Near edge - should not crash
        let board = setup(&[(0, 0, Stone::Black), (0, 1, Stone::White)], Stone::Black);
        assert!(bracketed_pairs(&board, Pos::new(0, 2), Stone::Black).is_empty());
        assert!(bracketed_pairs(&board, Pos::new(0, 0), Stone::White).is_empty());
    }

    #[test]
    fn test_cross_capture() {
        //     B
        //     W
        //     W
        // B W W _ W W B
        //     W
        //     W
        //     B
        let mut stones = Vec::new();
        for (r, c) in [(9, 7), (9, 8), (9, 10), (9, 11), (7, 9), (8, 9), (10, 9), (11, 9)] {
            stones.push((r, c, Stone::White));
        }
        for (r, c) in [(9, 6), (9, 12), (6, 9), (12, 9)] {
            stones.push((r, c, Stone::Black));
        }
        let mut board = setup(&stones, Stone::Black);

        let record = board.place(9, 9);
        assert_eq!(record.captured().len(), 8);
        assert_eq!(board.captures(Stone::Black), 8);
    }
}
