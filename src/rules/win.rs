//! Win condition checking for Ninuki-renju (Pente-style Gomoku)
//!
//! Win conditions:
//! 1. Five or more stones in a row (overlines count)
//! 2. Capture 10 opponent stones (5 pairs)

use crate::board::{Board, Pos, Stone, CAPTURE_WIN_STONES, LINE_DIRECTIONS};

/// True if `stone` has reached the capture threshold or owns a line of 5+.
pub fn check_win(board: &Board, stone: Stone) -> bool {
    board.captures(stone) >= CAPTURE_WIN_STONES || has_five_in_row(board, stone)
}

/// Check if there's 5+ in a row for the given color.
///
/// Each run is measured once, from its head: the cell whose predecessor in
/// that direction is not the same color.
pub fn has_five_in_row(board: &Board, stone: Stone) -> bool {
    if !stone.is_player() {
        return false;
    }

    for pos in board.occupied() {
        if board.get(pos) != stone {
            continue;
        }
        for &(dr, dc) in &LINE_DIRECTIONS {
            let (pr, pc) = pos.offset(dr, dc, -1);
            if board.read(pr, pc) == stone {
                continue;
            }
            if run_length(board, pos, dr, dc, stone) >= 5 {
                return true;
            }
        }
    }
    false
}

/// Length of the run of `stone` starting at `pos` and walking along `(dr, dc)`.
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, stone: Stone) -> usize {
    let mut len = 0;
    loop {
        let (r, c) = pos.offset(dr, dc, len as i32);
        if board.read(r, c) != stone {
            return len;
        }
        len += 1;
    }
}

/// First five stones of a 5+ run passing through `pos`, if any.
pub fn five_through(board: &Board, pos: Pos) -> Option<[Pos; 5]> {
    let stone = board.get(pos);
    if !stone.is_player() {
        return None;
    }

    for &(dr, dc) in &LINE_DIRECTIONS {
        // Walk back to the head of the run
        let mut back = 0;
        loop {
            let (r, c) = pos.offset(dr, dc, -(back + 1));
            if board.read(r, c) != stone {
                break;
            }
            back += 1;
        }
        let (hr, hc) = pos.offset(dr, dc, -back);
        let head = Pos::new(hr as u8, hc as u8);

        if run_length(board, head, dr, dc, stone) >= 5 {
            let mut line = [head; 5];
            for (k, cell) in line.iter_mut().enumerate() {
                let (r, c) = head.offset(dr, dc, k as i32);
                *cell = Pos::new(r as u8, c as u8);
            }
            return Some(line);
        }
    }
    None
}
