//! Board representation for Ninuki-renju

pub mod board;


// Re-exports
pub use board::{Board, MoveRecord};

/// Default board size (19x19)
pub const BOARD_SIZE: usize = 19;

/// Largest board whose coordinates fit in a [`Pos`].
pub const MAX_BOARD_SIZE: usize = u8::MAX as usize + 1;

/// Stones captured by one player that win the game outright.
pub const CAPTURE_WIN_STONES: u8 = 10;

/// The four line orientations. Scanning both signs of each covers all 8 directions.
pub const LINE_DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Cell occupant.
///
/// `OutOfBounds` is only ever produced by [`Board::read`] for coordinates off
/// the grid; it is never stored in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
    OutOfBounds,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            other => other,
        }
    }

    /// True for the two player colors.
    #[inline]
    pub fn is_player(self) -> bool {
        matches!(self, Stone::Black | Stone::White)
    }

    /// The player bound by the double-three restriction.
    #[inline]
    pub fn is_restricted(self) -> bool {
        self == Stone::Black
    }

    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
            Stone::OutOfBounds => "OutOfBounds",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board of the given size.
    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row as usize * size + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, size: usize) -> Self {
        Self {
            row: (idx / size) as u8,
            col: (idx % size) as u8,
        }
    }

    /// Step `k` cells along `(dr, dc)`, in signed coordinates.
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, k: i32) -> (i32, i32) {
        (i32::from(self.row) + dr * k, i32::from(self.col) + dc * k)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

/// A candidate or chosen move.
///
/// `score` is the ordering priority during move generation and the search
/// score once returned from the root. Equality only looks at the coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub pos: Pos,
    pub score: i64,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, score: i64) -> Self {
        Self { pos, score }
    }

    /// Score-descending comparison used to sort candidate lists.
    #[inline]
    pub fn by_priority(a: &Move, b: &Move) -> std::cmp::Ordering {
        b.score.cmp(&a.score)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl Eq for Move {}
