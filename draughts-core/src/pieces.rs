//! Piece definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Black => write!(f, "black"),
        }
    }
}

/// Piece rank
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Man,
    King,
}

/// A piece on the board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn new(color: Color, rank: Rank) -> Self {
        Self { color, rank }
    }

    pub const fn man(color: Color) -> Self {
        Self::new(color, Rank::Man)
    }

    pub const fn king(color: Color) -> Self {
        Self::new(color, Rank::King)
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Crowned copy of this piece; kings are returned unchanged
    pub fn promote(self) -> Self {
        Self::king(self.color)
    }

    /// Diagram symbol: lowercase for men, uppercase for kings
    pub fn symbol(&self) -> char {
        let c = match self.color {
            Color::Red => 'r',
            Color::Black => 'b',
        };
        match self.rank {
            Rank::Man => c,
            Rank::King => c.to_ascii_uppercase(),
        }
    }

    /// Inverse of [`Piece::symbol`]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'r' => Some(Piece::man(Color::Red)),
            'R' => Some(Piece::king(Color::Red)),
            'b' => Some(Piece::man(Color::Black)),
            'B' => Some(Piece::king(Color::Black)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote() {
        let man = Piece::man(Color::Red);
        let king = man.promote();
        assert_eq!(king, Piece::king(Color::Red));
        assert_eq!(king.promote(), king);
        // the original value is untouched
        assert_eq!(man.rank, Rank::Man);
    }

    #[test]
    fn test_symbols() {
        for color in [Color::Red, Color::Black] {
            for rank in [Rank::Man, Rank::King] {
                let piece = Piece::new(color, rank);
                assert_eq!(Piece::from_symbol(piece.symbol()), Some(piece));
            }
        }
        assert_eq!(Piece::from_symbol('.'), None);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Color::Red.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::Red);
    }
}
