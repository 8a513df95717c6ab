//! Board structure with capture tracking and incremental hashing

use std::sync::Arc;

use smallvec::SmallVec;

use super::{Pos, Stone, BOARD_SIZE};
use crate::error::GameError;
use crate::rules::{capture, forbidden, win};
use crate::search::ZobristTable;

/// Game board with capture tracking.
///
/// The board is mutated in place for the whole game and doubles as the
/// search's scratch space: every [`place`](Board::place) is paired with an
/// [`undo`](Board::undo) that restores it bit for bit.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Stone>,
    /// Stones captured by each side (10 = win)
    black_captures: u8,
    white_captures: u8,
    /// XOR of the keys of every occupied cell, plus the turn key when White moves
    hash: u64,
    to_move: Stone,
    /// Last placed stone, for highlighting only
    last_move: Option<Pos>,
    zobrist: Arc<ZobristTable>,
}

/// Undo token returned by [`Board::place`].
///
/// Carries exactly what the placement changed so that [`Board::undo`] can
/// restore the previous state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    executed: bool,
    captured: SmallVec<[Pos; 16]>,
    prev_hash: u64,
    prev_last_move: Option<Pos>,
}

impl MoveRecord {
    fn rejected(board: &Board) -> Self {
        Self {
            executed: false,
            captured: SmallVec::new(),
            prev_hash: board.hash,
            prev_last_move: board.last_move,
        }
    }

    /// False when the placement was refused and the board left untouched.
    #[inline]
    pub fn executed(&self) -> bool {
        self.executed
    }

    /// Opponent stones removed by the placement, pair by pair.
    #[inline]
    pub fn captured(&self) -> &[Pos] {
        &self.captured
    }

    #[inline]
    pub fn prev_hash(&self) -> u64 {
        self.prev_hash
    }
}

impl Board {
    /// Empty board with Black to move.
    ///
    /// Sizes outside `1..=MAX_BOARD_SIZE` are clamped; see [`size`](Board::size).
    pub fn new(size: usize) -> Self {
        Self::with_zobrist(Arc::new(ZobristTable::new(size)))
    }

    /// Empty board sharing an existing key table.
    pub fn with_zobrist(zobrist: Arc<ZobristTable>) -> Self {
        let size = zobrist.size();
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
            black_captures: 0,
            white_captures: 0,
            hash: 0,
            to_move: Stone::Black,
            last_move: None,
            zobrist,
        }
    }

    /// Rebuild a board by replaying `moves` from an empty position.
    pub fn replay(size: usize, moves: &[Pos]) -> Result<Self, GameError> {
        let mut board = Self::new(size);
        for pos in moves {
            board.apply_move(i32::from(pos.row), i32::from(pos.col))?;
        }
        Ok(board)
    }

    /// Back to the initial state, keeping the key table.
    pub fn reset(&mut self) {
        self.cells.fill(Stone::Empty);
        self.black_captures = 0;
        self.white_captures = 0;
        self.hash = 0;
        self.to_move = Stone::Black;
        self.last_move = None;
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn zobrist(&self) -> &Arc<ZobristTable> {
        &self.zobrist
    }

    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        let n = self.size as i32;
        row >= 0 && row < n && col >= 0 && col < n
    }

    /// Bounds-safe read: off-grid coordinates yield [`Stone::OutOfBounds`].
    #[inline]
    pub fn read(&self, row: i32, col: i32) -> Stone {
        if !self.in_bounds(row, col) {
            return Stone::OutOfBounds;
        }
        self.cells[row as usize * self.size + col as usize]
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.read(i32::from(pos.row), i32::from(pos.col))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    #[inline]
    pub fn side_to_move(&self) -> Stone {
        self.to_move
    }

    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Get capture count (stones) for a color
    #[inline]
    pub fn captures(&self, stone: Stone) -> u8 {
        match stone {
            Stone::Black => self.black_captures,
            Stone::White => self.white_captures,
            _ => 0,
        }
    }

    /// Positions of every stone on the board, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = Pos> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_player())
            .map(move |(idx, _)| Pos::from_index(idx, size))
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|s| s.is_player()).count()
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == Stone::Empty)
    }

    /// Geometric center of the grid.
    #[inline]
    pub fn center(&self) -> Pos {
        let c = (self.size / 2) as u8;
        Pos::new(c, c)
    }

    /// Put `stone` at `pos` for position setup, keeping the hash consistent.
    ///
    /// No captures, no turn change. Use [`place`](Board::place) for game moves.
    pub fn set_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(stone != Stone::OutOfBounds);
        let idx = pos.to_index(self.size);
        let old = self.cells[idx];
        self.hash ^= self.zobrist.stone_key(pos, old);
        self.hash ^= self.zobrist.stone_key(pos, stone);
        self.cells[idx] = stone;
    }

    /// Force the side to move for position setup, keeping the hash consistent.
    pub fn set_side_to_move(&mut self, stone: Stone) {
        debug_assert!(stone.is_player());
        if stone != self.to_move {
            self.hash ^= self.zobrist.turn_key();
            self.to_move = stone;
        }
    }

    /// Place the side to move's stone, resolve captures and pass the turn.
    ///
    /// Occupied or off-grid targets return a record flagged not-executed
    /// and leave the board untouched. The double-three rule is not checked
    /// here; see [`apply_move`](Board::apply_move).
    pub fn place(&mut self, row: i32, col: i32) -> MoveRecord {
        if self.read(row, col) != Stone::Empty {
            return MoveRecord::rejected(self);
        }

        let pos = Pos::new(row as u8, col as u8);
        let mover = self.to_move;
        let opponent = mover.opponent();
        let mut record = MoveRecord {
            executed: true,
            captured: SmallVec::new(),
            prev_hash: self.hash,
            prev_last_move: self.last_move,
        };

        self.cells[pos.to_index(self.size)] = mover;
        self.hash ^= self.zobrist.stone_key(pos, mover);

        for pair in capture::bracketed_pairs(self, pos, mover) {
            for p in pair {
                self.cells[p.to_index(self.size)] = Stone::Empty;
                self.hash ^= self.zobrist.stone_key(p, opponent);
                record.captured.push(p);
            }
            self.add_captures(mover, 2);
        }

        self.hash ^= self.zobrist.turn_key();
        self.to_move = opponent;
        self.last_move = Some(pos);
        record
    }

    /// Exact inverse of the [`place`](Board::place) that produced `record`.
    pub fn undo(&mut self, row: i32, col: i32, record: &MoveRecord) {
        if !record.executed {
            return;
        }

        let pos = Pos::new(row as u8, col as u8);
        let mover = self.to_move.opponent();
        let victim = self.to_move;
        debug_assert_eq!(self.get(pos), mover, "undo of a move that is not on the board");

        for &p in &record.captured {
            self.cells[p.to_index(self.size)] = victim;
        }
        self.sub_captures(mover, record.captured.len() as u8);

        self.cells[pos.to_index(self.size)] = Stone::Empty;
        self.hash = record.prev_hash;
        self.to_move = mover;
        self.last_move = record.prev_last_move;
    }

    /// Checked game move: rejects off-grid, occupied and forbidden targets
    /// before touching the board.
    pub fn apply_move(&mut self, row: i32, col: i32) -> Result<MoveRecord, GameError> {
        if self.read(row, col) != Stone::Empty {
            return Err(GameError::IllegalMove { row, col });
        }
        if self.is_forbidden(row, col) {
            return Err(GameError::ForbiddenMove { row, col });
        }
        Ok(self.place(row, col))
    }

    /// Double-three check for the side to move. Always false for White.
    pub fn is_forbidden(&self, row: i32, col: i32) -> bool {
        if self.read(row, col) != Stone::Empty {
            return false;
        }
        forbidden::is_double_three(self, Pos::new(row as u8, col as u8))
    }

    /// Capture threshold reached, or five (or more) in a row anywhere.
    pub fn has_won(&self, stone: Stone) -> bool {
        win::check_win(self, stone)
    }

    /// Five consecutive stones through `pos`, if its owner has a winning line there.
    pub fn winning_line(&self, pos: Pos) -> Option<[Pos; 5]> {
        win::five_through(self, pos)
    }

    #[inline]
    fn add_captures(&mut self, stone: Stone, count: u8) {
        match stone {
            Stone::Black => self.black_captures = self.black_captures.saturating_add(count),
            Stone::White => self.white_captures = self.white_captures.saturating_add(count),
            _ => {}
        }
    }

    #[inline]
    fn sub_captures(&mut self, stone: Stone, count: u8) {
        match stone {
            Stone::Black => self.black_captures = self.black_captures.saturating_sub(count),
            Stone::White => self.white_captures = self.white_captures.saturating_sub(count),
            _ => {}
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.cells == other.cells
            && self.black_captures == other.black_captures
            && self.white_captures == other.white_captures
            && self.hash == other.hash
            && self.to_move == other.to_move
            && self.last_move == other.last_move
    }
}

impl Eq for Board {}
