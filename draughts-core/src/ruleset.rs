//! RuleVariant - movement and capture policy as plain data

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::geometry::{forward_diagonals, movement_directions, BoardSize, DIAGONALS};
use crate::pieces::{Piece, Rank};
use crate::rules::{InternationalRules, RulesEngine, StandardRules};

/// Scope over which the maximal-capture rule is enforced
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaxCapture {
    /// Longest chains of each piece, compared only against that piece
    PerPiece,
    /// Longest chains across every piece of the side to move
    Global,
}

/// Movement and capture policy for one rule variant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleVariant {
    /// Kings move and capture across any run of empty squares
    pub flying_kings: bool,
    /// Men may capture toward their own back row
    pub men_capture_backward: bool,
    pub max_capture: MaxCapture,
    /// Capture branches may not land twice on the same square
    pub revisit_guard: bool,
}

impl RuleVariant {
    /// American checkers: short kings, forward-capturing men, per-piece maximum
    pub const fn standard() -> Self {
        Self {
            flying_kings: false,
            men_capture_backward: false,
            max_capture: MaxCapture::PerPiece,
            revisit_guard: false,
        }
    }

    /// International draughts: flying kings, men capture backward, global maximum
    pub const fn international() -> Self {
        Self {
            flying_kings: true,
            men_capture_backward: true,
            max_capture: MaxCapture::Global,
            revisit_guard: true,
        }
    }

    /// Directions for non-capturing moves
    pub fn step_directions(&self, piece: Piece) -> &'static [(i8, i8)] {
        movement_directions(piece)
    }

    /// Directions in which this piece may capture
    pub fn capture_directions(&self, piece: Piece) -> &'static [(i8, i8)] {
        match piece.rank {
            Rank::King => &DIAGONALS,
            Rank::Man if self.men_capture_backward => &DIAGONALS,
            Rank::Man => forward_diagonals(piece.color),
        }
    }

    /// Whether this piece scans across empty squares
    pub fn flies(&self, piece: Piece) -> bool {
        self.flying_kings && piece.is_king()
    }
}

/// Closed set of supported variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    Standard,
    International,
}

static STANDARD: StandardRules = StandardRules;
static INTERNATIONAL: InternationalRules = InternationalRules;

impl Variant {
    /// Variant conventionally played on a board of this size
    pub fn for_board_size(size: BoardSize) -> Self {
        match size {
            BoardSize::EightByEight => Variant::Standard,
            BoardSize::TenByTen => Variant::International,
        }
    }

    pub fn rules(self) -> RuleVariant {
        match self {
            Variant::Standard => RuleVariant::standard(),
            Variant::International => RuleVariant::international(),
        }
    }

    /// Stateless engine implementing this variant
    pub fn engine(self) -> &'static dyn RulesEngine {
        match self {
            Variant::Standard => &STANDARD,
            Variant::International => &INTERNATIONAL,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Standard => write!(f, "standard"),
            Variant::International => write!(f, "international"),
        }
    }
}

impl FromStr for Variant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "standard" | "american" => Ok(Variant::Standard),
            "international" => Ok(Variant::International),
            other => Err(format!("unknown variant '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::Color;

    #[test]
    fn test_capture_directions() {
        let man = Piece::man(Color::Red);
        let king = Piece::king(Color::Red);

        let standard = RuleVariant::standard();
        assert_eq!(standard.capture_directions(man), forward_diagonals(Color::Red));
        assert_eq!(standard.capture_directions(king).len(), 4);
        assert!(!standard.flies(king));

        let international = RuleVariant::international();
        assert_eq!(international.capture_directions(man).len(), 4);
        assert_eq!(international.step_directions(man).len(), 2);
        assert!(international.flies(king));
        assert!(!international.flies(man));
    }

    #[test]
    fn test_variant_selection() {
        assert_eq!(Variant::for_board_size(BoardSize::EightByEight), Variant::Standard);
        assert_eq!(Variant::for_board_size(BoardSize::TenByTen), Variant::International);
        assert_eq!(Variant::International.engine().variant(), RuleVariant::international());
        assert_eq!("American".parse::<Variant>(), Ok(Variant::Standard));
        assert!("turkish".parse::<Variant>().is_err());
    }
}
