//! Move value type

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MoveError;
use crate::geometry::Position;

/// A complete move: the landing path, the squares it captures and whether it crowns
///
/// Simple moves have a two-square path and no captures. Jumps capture exactly one
/// piece per leg, so `captured.len() == path.len() - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawMove")]
pub struct Move {
    path: Vec<Position>,
    captured: Vec<Position>,
    promotion: bool,
}

impl Move {
    /// Build a move, checking the path/capture invariants
    pub fn new(
        path: Vec<Position>,
        captured: Vec<Position>,
        promotion: bool,
    ) -> Result<Self, MoveError> {
        if path.len() < 2 {
            return Err(MoveError::PathTooShort(path.len()));
        }
        let legs = path.len() - 1;
        let consistent = if captured.is_empty() {
            legs == 1
        } else {
            captured.len() == legs
        };
        if !consistent {
            return Err(MoveError::CaptureCountMismatch {
                captured: captured.len(),
                legs,
            });
        }
        Ok(Self {
            path,
            captured,
            promotion,
        })
    }

    /// Single non-capturing step or slide
    pub fn simple(from: Position, to: Position, promotion: bool) -> Self {
        Self {
            path: vec![from, to],
            captured: Vec::new(),
            promotion,
        }
    }

    /// Constructor for the capture search, which upholds the invariants itself
    pub(crate) fn chain(path: Vec<Position>, captured: Vec<Position>, promotion: bool) -> Self {
        debug_assert!(path.len() >= 2 && captured.len() + 1 == path.len());
        Self {
            path,
            captured,
            promotion,
        }
    }

    pub fn from(&self) -> Position {
        self.path[0]
    }

    pub fn to(&self) -> Position {
        self.path[self.path.len() - 1]
    }

    /// Full landing sequence, origin first
    pub fn path(&self) -> &[Position] {
        &self.path
    }

    /// Captured squares in capture order
    pub fn captured(&self) -> &[Position] {
        &self.captured
    }

    pub fn capture_count(&self) -> usize {
        self.captured.len()
    }

    pub fn is_jump(&self) -> bool {
        !self.captured.is_empty()
    }

    pub fn is_promotion(&self) -> bool {
        self.promotion
    }

    /// Landing square of the first leg
    pub fn first_landing(&self) -> Position {
        self.path[1]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { " x " } else { " -> " };
        for (i, pos) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{}", pos)?;
        }
        if self.promotion {
            f.write_str(" (promotion)")?;
        }
        Ok(())
    }
}

/// Unchecked wire shape, validated on the way in
#[derive(Deserialize)]
struct RawMove {
    path: Vec<Position>,
    #[serde(default)]
    captured: Vec<Position>,
    #[serde(default)]
    promotion: bool,
}

impl TryFrom<RawMove> for Move {
    type Error = MoveError;

    fn try_from(raw: RawMove) -> Result<Self, Self::Error> {
        Move::new(raw.path, raw.captured, raw.promotion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i8, column: i8) -> Position {
        Position::new(row, column)
    }

    #[test]
    fn test_simple_move() {
        let mv = Move::simple(p(5, 0), p(4, 1), false);
        assert_eq!(mv.from(), p(5, 0));
        assert_eq!(mv.to(), p(4, 1));
        assert!(!mv.is_jump());
        assert_eq!(mv.to_string(), "(5,0) -> (4,1)");
    }

    #[test]
    fn test_chain_accessors() {
        let mv = Move::new(
            vec![p(5, 1), p(3, 3), p(1, 5)],
            vec![p(4, 2), p(2, 4)],
            false,
        )
        .unwrap();
        assert!(mv.is_jump());
        assert_eq!(mv.capture_count(), 2);
        assert_eq!(mv.first_landing(), p(3, 3));
        assert_eq!(mv.to(), p(1, 5));
        assert_eq!(mv.to_string(), "(5,1) x (3,3) x (1,5)");
    }

    #[test]
    fn test_invariants_rejected() {
        assert_eq!(
            Move::new(vec![p(0, 0)], vec![], false),
            Err(MoveError::PathTooShort(1))
        );
        assert!(matches!(
            Move::new(vec![p(5, 1), p(3, 3), p(1, 5)], vec![], false),
            Err(MoveError::CaptureCountMismatch { captured: 0, legs: 2 })
        ));
        assert!(matches!(
            Move::new(vec![p(5, 1), p(3, 3)], vec![p(4, 2), p(2, 4)], false),
            Err(MoveError::CaptureCountMismatch { captured: 2, legs: 1 })
        ));
    }

    #[test]
    fn test_deserialize_checks_invariants() {
        let ok: Move = serde_json::from_str(
            r#"{"path":[{"row":2,"column":2},{"row":0,"column":4}],"captured":[{"row":1,"column":3}],"promotion":true}"#,
        )
        .unwrap();
        assert!(ok.is_promotion());
        assert_eq!(ok.captured(), &[p(1, 3)]);

        let bad = serde_json::from_str::<Move>(r#"{"path":[{"row":2,"column":2}]}"#);
        assert!(bad.is_err());
    }
}
