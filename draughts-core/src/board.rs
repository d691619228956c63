//! Immutable board snapshots

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::BoardError;
use crate::geometry::{BoardSize, Position};
use crate::moves::Move;
use crate::pieces::{Color, Piece};

/// Board snapshot (every transformation returns a new board)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "BoardRecord", try_from = "BoardRecord")]
pub struct Board {
    size: BoardSize,
    /// Sparse occupancy: absent squares are empty
    squares: FxHashMap<Position, Piece>,
}

impl Board {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            squares: FxHashMap::default(),
        }
    }

    /// Starting position: black men on the top rows, red men on the bottom rows,
    /// dark squares only, at least two empty rows in between
    pub fn initial(size: BoardSize) -> Self {
        let filled = size.initial_rows();
        let empty_rows = (size.rows() - 2 * filled).max(2);
        let red_start = filled + empty_rows;

        let mut squares = FxHashMap::default();
        for (rows, color) in [(0..filled, Color::Black), (red_start..red_start + filled, Color::Red)] {
            for row in rows {
                for column in 0..size.columns() {
                    let pos = Position::new(row, column);
                    if pos.is_dark() && pos.in_bounds(size) {
                        squares.insert(pos, Piece::man(color));
                    }
                }
            }
        }

        Self { size, squares }
    }

    /// Build a board from explicit placements
    pub fn from_pieces(
        size: BoardSize,
        pieces: impl IntoIterator<Item = (Position, Piece)>,
    ) -> Result<Self, BoardError> {
        let mut squares = FxHashMap::default();
        for (pos, piece) in pieces {
            if !pos.in_bounds(size) {
                return Err(BoardError::OffBoard(pos));
            }
            if squares.insert(pos, piece).is_some() {
                return Err(BoardError::DuplicateSquare(pos));
            }
        }
        Ok(Self { size, squares })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.squares.get(&pos).copied()
    }

    /// On the board and unoccupied
    pub fn is_empty(&self, pos: Position) -> bool {
        pos.in_bounds(self.size) && !self.squares.contains_key(&pos)
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.in_bounds(self.size)
    }

    /// Iterate occupied squares
    pub fn pieces(&self) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.squares.iter().map(|(&pos, &piece)| (pos, piece))
    }

    /// Occupied squares of one color, in row-major order
    pub fn positions_of(&self, color: Color) -> Vec<Position> {
        let mut positions: Vec<Position> = self
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .map(|(pos, _)| pos)
            .collect();
        positions.sort();
        positions
    }

    pub fn count(&self, color: Color) -> usize {
        self.squares.values().filter(|p| p.color == color).count()
    }

    // ========================================================================
    // TRANSFORMATIONS
    // ========================================================================

    /// Copy with a piece placed on `pos` (replacing any occupant)
    pub fn with_piece(&self, pos: Position, piece: Piece) -> Result<Self, BoardError> {
        if !pos.in_bounds(self.size) {
            return Err(BoardError::OffBoard(pos));
        }
        let mut next = self.clone();
        next.squares.insert(pos, piece);
        Ok(next)
    }

    /// Apply move, return new board
    ///
    /// The mover leaves `from`, every captured square is cleared and the piece
    /// (crowned if the move promotes) lands on `to`.
    pub fn apply_move(&self, mv: &Move) -> Result<Self, BoardError> {
        let mut next = self.clone();
        let mut piece = next
            .squares
            .remove(&mv.from())
            .ok_or(BoardError::EmptySource(mv.from()))?;

        for pos in mv.captured() {
            next.squares.remove(pos);
        }

        if next.squares.contains_key(&mv.to()) {
            return Err(BoardError::OccupiedTarget(mv.to()));
        }
        if !mv.to().in_bounds(self.size) {
            return Err(BoardError::OffBoard(mv.to()));
        }

        if mv.is_promotion() {
            piece = piece.promote();
        }
        next.squares.insert(mv.to(), piece);
        Ok(next)
    }

    // ========================================================================
    // FILES
    // ========================================================================

    /// Load a JSON snapshot
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let board = serde_json::from_str(&content)?;
        Ok(board)
    }

    /// Save a JSON snapshot
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

// ============================================================================
// DIAGRAMS
// ============================================================================

/// Renders one line per row, `.` for empty squares
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size.rows() {
            let line: Vec<String> = (0..self.size.columns())
                .map(|column| {
                    self.piece_at(Position::new(row, column))
                        .map_or('.', |p| p.symbol())
                        .to_string()
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Parses the [`Display`](fmt::Display) format; whitespace inside rows and blank
/// lines are ignored, and the grid must be 8x8 or 10x10
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|cells| !cells.is_empty())
            .collect();

        let columns = rows.first().map_or(0, Vec::len);
        let size = BoardSize::from_dimensions(rows.len(), columns).ok_or(
            BoardError::UnsupportedSize {
                rows: rows.len(),
                columns,
            },
        )?;

        let mut pieces = Vec::new();
        for (r, cells) in rows.iter().enumerate() {
            if cells.len() != columns {
                return Err(BoardError::BadDiagram {
                    row: r,
                    reason: format!("expected {} squares, found {}", columns, cells.len()),
                });
            }
            for (c, &cell) in cells.iter().enumerate() {
                if matches!(cell, '.' | '_' | '-' | '#') {
                    continue;
                }
                let piece = Piece::from_symbol(cell).ok_or_else(|| BoardError::BadDiagram {
                    row: r,
                    reason: format!("unknown symbol '{}'", cell),
                })?;
                pieces.push((Position::new(r as i8, c as i8), piece));
            }
        }

        Board::from_pieces(size, pieces)
    }
}

// ============================================================================
// SERIALIZATION
// ============================================================================

#[derive(Serialize, Deserialize)]
struct PlacedPiece {
    position: Position,
    piece: Piece,
}

/// Flat snapshot shape: JSON object keys cannot be positions
#[derive(Serialize, Deserialize)]
struct BoardRecord {
    size: BoardSize,
    pieces: Vec<PlacedPiece>,
}

impl From<Board> for BoardRecord {
    fn from(board: Board) -> Self {
        let mut pieces: Vec<PlacedPiece> = board
            .pieces()
            .map(|(position, piece)| PlacedPiece { position, piece })
            .collect();
        pieces.sort_by_key(|p| p.position);
        Self {
            size: board.size,
            pieces,
        }
    }
}

impl TryFrom<BoardRecord> for Board {
    type Error = BoardError;

    fn try_from(record: BoardRecord) -> Result<Self, Self::Error> {
        Board::from_pieces(
            record.size,
            record.pieces.into_iter().map(|p| (p.position, p.piece)),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
