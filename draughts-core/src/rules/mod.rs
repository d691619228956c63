//! Rule engines
//!
//! Both variants share one capture search ([`search`]) parameterized by a
//! [`RuleVariant`]; they differ in the policy data they hand it and in how a
//! submitted move is matched against the generated chains.

pub mod international;
pub mod perft;
pub mod search;
pub mod standard;

pub use international::InternationalRules;
pub use perft::{perft, perft_divide};
pub use standard::StandardRules;

use crate::board::Board;
use crate::error::RuleViolation;
use crate::geometry::{is_diagonal, Position};
use crate::moves::Move;
use crate::pieces::{Color, Piece};
use crate::ruleset::RuleVariant;

/// Move generation and validation for one rule variant
///
/// Implementations are stateless: every call is a pure function of the board
/// snapshot it is given.
pub trait RulesEngine: Send + Sync {
    /// Policy data this engine runs with
    fn variant(&self) -> RuleVariant;

    /// Legal moves of the piece on `position` (empty if the square is empty)
    fn valid_moves(&self, board: &Board, position: Position) -> Vec<Move>;

    /// Whether `color` has any legal move at all
    fn has_valid_moves(&self, board: &Board, color: Color) -> bool {
        board
            .positions_of(color)
            .into_iter()
            .any(|pos| !self.valid_moves(board, pos).is_empty())
    }

    /// Every legal move of `color`
    fn legal_moves(&self, board: &Board, color: Color) -> Vec<Move> {
        let variant = self.variant();
        if search::side_can_capture(board, color, &variant) {
            search::side_chains(board, color, &variant)
        } else {
            board
                .positions_of(color)
                .into_iter()
                .flat_map(|pos| search::simple_moves(board, pos, &variant))
                .collect()
        }
    }

    /// Validate a `(from, to)` request and return the full move it stands for
    fn validate_move(
        &self,
        board: &Board,
        turn: Color,
        from: Position,
        to: Position,
    ) -> Result<Move, RuleViolation>;

    /// Validate a complete landing sequence, origin first
    ///
    /// Every variant accepts this form; it is how a caller disambiguates
    /// chains that share their first landing square.
    fn validate_path(
        &self,
        board: &Board,
        turn: Color,
        path: &[Position],
    ) -> Result<Move, RuleViolation> {
        if path.len() < 2 {
            return Err(rejected(RuleViolation::PathTooShort(path.len())));
        }
        let (from, to) = (path[0], path[path.len() - 1]);
        check_request(board, turn, from, to)?;

        if let Some(leg) = path.windows(2).find(|leg| !is_diagonal(leg[0], leg[1])) {
            return Err(rejected(RuleViolation::NotDiagonal {
                from: leg[0],
                to: leg[1],
            }));
        }

        let found = self
            .valid_moves(board, from)
            .into_iter()
            .find(|mv| mv.path() == path);
        match found {
            Some(mv) => Ok(accepted(mv)),
            None => Err(rejected(unmatched(
                &self.variant(),
                board,
                turn,
                from,
                to,
                |mv| mv.path() == path,
            ))),
        }
    }
}

// ============================================================================
// SHARED VALIDATION HELPERS
// ============================================================================

/// Checks common to every submission; returns the piece being moved
pub(crate) fn check_request(
    board: &Board,
    turn: Color,
    from: Position,
    to: Position,
) -> Result<Piece, RuleViolation> {
    for pos in [from, to] {
        if !board.contains(pos) {
            return Err(rejected(RuleViolation::OffBoard(pos)));
        }
    }

    let piece = board
        .piece_at(from)
        .ok_or_else(|| rejected(RuleViolation::NoPieceAtSource(from)))?;

    if piece.color != turn {
        return Err(rejected(RuleViolation::WrongColor {
            from,
            piece: piece.color,
            turn,
        }));
    }

    // a king may close a circuit on its own starting square
    if to != from && board.piece_at(to).is_some() {
        return Err(rejected(RuleViolation::DestinationOccupied(to)));
    }

    Ok(piece)
}

/// Reason for a submission that matched no legal move
///
/// While a capture is outstanding, a submission that would have been a legal
/// simple move or a shorter capture is reported as `JumpMandatory`.
pub(crate) fn unmatched(
    variant: &RuleVariant,
    board: &Board,
    turn: Color,
    from: Position,
    to: Position,
    submitted: impl Fn(&Move) -> bool,
) -> RuleViolation {
    if search::side_can_capture(board, turn, variant) {
        let shorter_capture = search::capture_chains(board, from, variant)
            .iter()
            .any(&submitted);
        let plain_step = search::simple_moves(board, from, variant)
            .iter()
            .any(&submitted);
        if shorter_capture || plain_step {
            return RuleViolation::JumpMandatory;
        }
    }
    RuleViolation::NoMatchingMove { from, to }
}

/// Pick the single move among candidates matching one submission
///
/// Candidates that capture the same set of pieces are interchangeable; more than
/// one distinct capture set is ambiguous.
pub(crate) fn pick(
    mut candidates: Vec<Move>,
    from: Position,
    to: Position,
) -> Result<Option<Move>, RuleViolation> {
    let mut capture_sets: Vec<Vec<Position>> = candidates
        .iter()
        .map(|mv| {
            let mut set = mv.captured().to_vec();
            set.sort();
            set
        })
        .collect();
    capture_sets.sort();
    capture_sets.dedup();

    match capture_sets.len() {
        0 => Ok(None),
        1 => Ok(Some(candidates.swap_remove(0))),
        count => Err(rejected(RuleViolation::AmbiguousChain { from, to, count })),
    }
}

pub(crate) fn rejected(violation: RuleViolation) -> RuleViolation {
    tracing::debug!(reason = %violation, "move rejected");
    violation
}

pub(crate) fn accepted(mv: Move) -> Move {
    tracing::debug!(%mv, "move accepted");
    mv
}
