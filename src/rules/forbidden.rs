//! Double-three forbidden move rule
//!
//! A double-three is a move that creates two or more free-threes simultaneously.
//! Free-three here: a contiguous run of exactly 3 through the placed stone
//! with the cell just beyond each end empty. Only Black is restricted.

use crate::board::{Board, Pos, Stone, LINE_DIRECTIONS};

/// Contiguous `stone` run through `pos` along `(dr, dc)`, counting `pos`
/// itself as `stone`, plus the cells just beyond each end.
///
/// `pos` is never read, so this works on the board as-is without placing.
fn run_through(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> (usize, Stone, Stone) {
    let mut count = 1;

    let mut k = 1;
    loop {
        let (r, c) = pos.offset(dr, dc, k);
        if board.read(r, c) != stone {
            break;
        }
        count += 1;
        k += 1;
    }
    let (r, c) = pos.offset(dr, dc, k);
    let beyond_fwd = board.read(r, c);

    let mut k = 1;
    loop {
        let (r, c) = pos.offset(dr, dc, -k);
        if board.read(r, c) != stone {
            break;
        }
        count += 1;
        k += 1;
    }
    let (r, c) = pos.offset(dr, dc, -k);
    let beyond_back = board.read(r, c);

    (count, beyond_fwd, beyond_back)
}

/// Whether a `stone` at `pos` forms a free three along `(dr, dc)`.
fn is_free_three(board: &Board, pos: Pos, stone: Stone, dr: i32, dc: i32) -> bool {
    let (count, fwd, back) = run_through(board, pos, stone, dr, dc);
    count == 3 && fwd == Stone::Empty && back == Stone::Empty
}

/// Count the orientations in which a `stone` at `pos` forms a free three.
pub fn count_free_threes(board: &Board, pos: Pos, stone: Stone) -> u8 {
    LINE_DIRECTIONS
        .iter()
        .filter(|&&(dr, dc)| is_free_three(board, pos, stone, dr, dc))
        .count() as u8
}

/// True if the side to move is restricted and placing at `pos` would create
/// two or more free threes at once.
pub fn is_double_three(board: &Board, pos: Pos) -> bool {
    let stone = board.side_to_move();
    if !stone.is_restricted() {
        return false;
    }
    count_free_threes(board, pos, stone) >= 2
}
