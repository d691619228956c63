//! Square geometry: positions, board sizes and diagonal directions

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::pieces::{Color, Piece, Rank};

/// A square on the board, row-major from the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub column: i8,
}

impl Position {
    pub const fn new(row: i8, column: i8) -> Self {
        Self { row, column }
    }

    /// Position shifted by the given row and column offsets
    pub fn offset(&self, dr: i8, dc: i8) -> Position {
        Position::new(self.row + dr, self.column + dc)
    }

    /// Neighbor one step along a direction vector
    pub fn step(&self, direction: (i8, i8)) -> Position {
        self.offset(direction.0, direction.1)
    }

    /// Check if this square lies on a board of the given size
    pub fn in_bounds(&self, size: BoardSize) -> bool {
        self.row >= 0
            && self.column >= 0
            && self.row < size.rows()
            && self.column < size.columns()
    }

    /// Dark squares are the playable ones in the initial setup
    pub fn is_dark(&self) -> bool {
        (self.row + self.column).rem_euclid(2) == 1
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.column)
    }
}

impl FromStr for Position {
    type Err = BoardError;

    /// Parses `row,col`, optionally wrapped in parentheses
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, column) = trimmed
            .split_once(',')
            .ok_or_else(|| BoardError::BadPosition(s.to_string()))?;
        let row = row
            .trim()
            .parse::<i8>()
            .map_err(|_| BoardError::BadPosition(s.to_string()))?;
        let column = column
            .trim()
            .parse::<i8>()
            .map_err(|_| BoardError::BadPosition(s.to_string()))?;
        Ok(Position::new(row, column))
    }
}

/// Supported board dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardSize {
    /// 8x8, three rows of men per side
    EightByEight,
    /// 10x10, four rows of men per side
    TenByTen,
}

impl BoardSize {
    pub const fn rows(self) -> i8 {
        match self {
            BoardSize::EightByEight => 8,
            BoardSize::TenByTen => 10,
        }
    }

    pub const fn columns(self) -> i8 {
        match self {
            BoardSize::EightByEight => 8,
            BoardSize::TenByTen => 10,
        }
    }

    /// Rows filled with men for each side at the start of a game
    pub const fn initial_rows(self) -> i8 {
        match self {
            BoardSize::EightByEight => 3,
            BoardSize::TenByTen => 4,
        }
    }

    /// Look up a size by its dimensions
    pub fn from_dimensions(rows: usize, columns: usize) -> Option<Self> {
        match (rows, columns) {
            (8, 8) => Some(BoardSize::EightByEight),
            (10, 10) => Some(BoardSize::TenByTen),
            _ => None,
        }
    }

    /// Row on which a man of this color is promoted
    pub fn promotion_row(self, color: Color) -> i8 {
        match color {
            Color::Red => 0,
            Color::Black => self.rows() - 1,
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows(), self.columns())
    }
}

/// Diagonal direction vectors (dr, dc)
/// Index: 0=up-left, 1=up-right, 2=down-left, 3=down-right
pub const DIAGONALS: [(i8, i8); 4] = [
    (-1, -1), // up-left
    (-1, 1),  // up-right
    (1, -1),  // down-left
    (1, 1),   // down-right
];

const RED_FORWARD: [(i8, i8); 2] = [(-1, -1), (-1, 1)];
const BLACK_FORWARD: [(i8, i8); 2] = [(1, -1), (1, 1)];

/// Row delta of a man's forward step
pub fn forward(color: Color) -> i8 {
    match color {
        Color::Red => -1,
        Color::Black => 1,
    }
}

/// The two diagonals a man of this color advances along
pub fn forward_diagonals(color: Color) -> &'static [(i8, i8)] {
    match color {
        Color::Red => &RED_FORWARD,
        Color::Black => &BLACK_FORWARD,
    }
}

/// Plain movement directions: four ways for a king, forward for a man
pub fn movement_directions(piece: Piece) -> &'static [(i8, i8)] {
    match piece.rank {
        Rank::King => &DIAGONALS,
        Rank::Man => forward_diagonals(piece.color),
    }
}

/// True when `to` is a non-zero diagonal displacement from `from`
pub fn is_diagonal(from: Position, to: Position) -> bool {
    let dr = (to.row - from.row).abs();
    let dc = (to.column - from.column).abs();
    dr > 0 && dr == dc
}

/// True when a man of this piece's color would be crowned on `to`
pub fn is_promotion_landing(size: BoardSize, to: Position, piece: Piece) -> bool {
    match piece.rank {
        Rank::King => false,
        Rank::Man => to.row == size.promotion_row(piece.color),
    }
}
