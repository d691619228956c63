//! American checkers (8x8, short kings)

use crate::board::Board;
use crate::error::RuleViolation;
use crate::geometry::{is_diagonal, Position};
use crate::moves::Move;
use crate::pieces::Color;
use crate::ruleset::RuleVariant;

use super::{accepted, check_request, pick, rejected, search, unmatched, RulesEngine};

/// Standard rules: men move and capture forward, kings step one square, and
/// the maximal-capture rule only compares a piece's own chains
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl RulesEngine for StandardRules {
    fn variant(&self) -> RuleVariant {
        RuleVariant::standard()
    }

    fn valid_moves(&self, board: &Board, position: Position) -> Vec<Move> {
        let variant = self.variant();
        let Some(piece) = board.piece_at(position) else {
            return Vec::new();
        };

        let chains = search::capture_chains(board, position, &variant);
        if !chains.is_empty() {
            return search::longest(chains);
        }

        // another piece has a capture, so this one may not move
        if search::side_can_capture(board, piece.color, &variant) {
            return Vec::new();
        }

        search::simple_moves(board, position, &variant)
    }

    /// While a capture is available `to` names the first landing square of a
    /// chain; the whole chain is returned
    fn validate_move(
        &self,
        board: &Board,
        turn: Color,
        from: Position,
        to: Position,
    ) -> Result<Move, RuleViolation> {
        check_request(board, turn, from, to)?;
        if !is_diagonal(from, to) {
            return Err(rejected(RuleViolation::NotDiagonal { from, to }));
        }

        let variant = self.variant();
        let moves = self.valid_moves(board, from);

        if search::side_can_capture(board, turn, &variant) {
            let legs: Vec<Move> = moves
                .into_iter()
                .filter(|mv| mv.is_jump() && mv.first_landing() == to)
                .collect();
            return match pick(legs, from, to)? {
                Some(mv) => Ok(accepted(mv)),
                None => Err(rejected(unmatched(&variant, board, turn, from, to, |mv| {
                    mv.first_landing() == to
                }))),
            };
        }

        moves
            .into_iter()
            .find(|mv| mv.to() == to)
            .map(accepted)
            .ok_or_else(|| rejected(RuleViolation::NoMatchingMove { from, to }))
    }
}
