//! International draughts (10x10, flying kings)

use crate::board::Board;
use crate::error::RuleViolation;
use crate::geometry::{is_diagonal, Position};
use crate::moves::Move;
use crate::pieces::Color;
use crate::ruleset::RuleVariant;

use super::{accepted, check_request, pick, rejected, search, unmatched, RulesEngine};

/// International rules: flying kings, men capture in all four directions, and
/// only the side's longest capture chains are legal
#[derive(Clone, Copy, Debug, Default)]
pub struct InternationalRules;

impl RulesEngine for InternationalRules {
    fn variant(&self) -> RuleVariant {
        RuleVariant::international()
    }

    fn valid_moves(&self, board: &Board, position: Position) -> Vec<Move> {
        let variant = self.variant();
        let Some(piece) = board.piece_at(position) else {
            return Vec::new();
        };

        if search::side_can_capture(board, piece.color, &variant) {
            search::side_chains(board, piece.color, &variant)
                .into_iter()
                .filter(|mv| mv.from() == position)
                .collect()
        } else {
            search::simple_moves(board, position, &variant)
        }
    }

    /// `to` names the final landing square of the move
    fn validate_move(
        &self,
        board: &Board,
        turn: Color,
        from: Position,
        to: Position,
    ) -> Result<Move, RuleViolation> {
        check_request(board, turn, from, to)?;
        let variant = self.variant();

        // a multi-leg chain need not end on a diagonal from its origin
        if search::side_can_capture(board, turn, &variant) {
            let chains: Vec<Move> = search::side_chains(board, turn, &variant)
                .into_iter()
                .filter(|mv| mv.from() == from && mv.to() == to)
                .collect();
            return match pick(chains, from, to)? {
                Some(mv) => Ok(accepted(mv)),
                None => Err(rejected(unmatched(&variant, board, turn, from, to, |mv| {
                    mv.to() == to
                }))),
            };
        }

        if !is_diagonal(from, to) {
            return Err(rejected(RuleViolation::NotDiagonal { from, to }));
        }

        search::simple_moves(board, from, &variant)
            .into_iter()
            .find(|mv| mv.to() == to)
            .map(accepted)
            .ok_or_else(|| rejected(RuleViolation::NoMatchingMove { from, to }))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::geometry::{BoardSize, DIAGONALS};
    use crate::pieces::Piece;

    fn p(row: i8, column: i8) -> Position {
        Position::new(row, column)
    }

    fn board(pieces: &[(Position, Piece)]) -> Board {
        Board::from_pieces(BoardSize::TenByTen, pieces.iter().copied()).unwrap()
    }

    fn red() -> Piece {
        Piece::man(Color::Red)
    }

    fn black() -> Piece {
        Piece::man(Color::Black)
    }

    fn targets(moves: &[Move]) -> Vec<Position> {
        let mut ends: Vec<_> = moves.iter().map(Move::to).collect();
        ends.sort();
        ends
    }

    // ========================================================================
    // MEN
    // ========================================================================

    #[test]
    fn test_man_captures_backward() {
        let b = board(&[(p(3, 3), red()), (p(4, 4), black())]);
        let moves = InternationalRules.valid_moves(&b, p(3, 3));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), p(5, 5));
        assert_eq!(moves[0].captured(), &[p(4, 4)]);
    }

    #[test]
    fn test_man_still_steps_forward_only() {
        let b = board(&[(p(5, 5), red())]);
        assert_eq!(
            targets(&InternationalRules.valid_moves(&b, p(5, 5))),
            vec![p(4, 4), p(4, 6)]
        );
    }

    #[test]
    fn test_double_jump_is_the_only_move() {
        let b = board(&[(p(3, 1), red()), (p(4, 2), black()), (p(6, 2), black())]);
        let moves = InternationalRules.valid_moves(&b, p(3, 1));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].path(), &[p(3, 1), p(5, 3), p(7, 1)]);
        assert_eq!(moves[0].capture_count(), 2);
    }

    #[test]
    fn test_global_maximum() {
        let b = board(&[
            (p(5, 1), red()),
            (p(4, 2), black()),
            (p(2, 4), black()),
            (p(5, 5), red()),
            (p(4, 6), black()),
        ]);
        let rules = InternationalRules;

        let a = rules.valid_moves(&b, p(5, 1));
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].path(), &[p(5, 1), p(3, 3), p(1, 5)]);

        // its single capture is shorter than the side's best
        assert!(rules.valid_moves(&b, p(5, 5)).is_empty());

        let all = rules.legal_moves(&b, Color::Red);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0], a[0]);
    }

    #[test]
    fn test_promotion_ends_chain() {
        let b = board(&[(p(2, 2), red()), (p(1, 3), black()), (p(1, 5), black())]);
        let moves = InternationalRules.valid_moves(&b, p(2, 2));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to(), p(0, 4));
        assert!(moves[0].is_promotion());

        let b = board(&[(p(8, 1), black())]);
        let moves = InternationalRules.valid_moves(&b, p(8, 1));
        assert_eq!(targets(&moves), vec![p(9, 0), p(9, 2)]);
        assert!(moves.iter().all(Move::is_promotion));
    }

    // ========================================================================
    // KINGS
    // ========================================================================

    #[test]
    fn test_flying_king_slides() {
        let b = board(&[(p(3, 3), Piece::king(Color::Red))]);
        let moves = InternationalRules.valid_moves(&b, p(3, 3));
        assert_eq!(moves.len(), 15);
        assert!(moves.iter().any(|mv| mv.to() == p(9, 9)));
    }

    #[test]
    fn test_king_in_the_center() {
        let origin = p(5, 4);
        let b = board(&[(origin, Piece::king(Color::Red))]);

        let mut expected = Vec::new();
        for dir in DIAGONALS {
            let mut pos = origin.step(dir);
            while pos.in_bounds(BoardSize::TenByTen) {
                expected.push(pos);
                pos = pos.step(dir);
            }
        }
        expected.sort();
        assert_eq!(targets(&InternationalRules.valid_moves(&b, origin)), expected);

        let b = b.with_piece(p(3, 2), black()).unwrap();
        let moves = InternationalRules.valid_moves(&b, origin);
        assert_eq!(targets(&moves), vec![p(1, 0), p(2, 1)]);
        assert!(moves.iter().all(|mv| mv.captured() == [p(3, 2)]));
    }

    #[test]
    fn test_flying_capture_landings() {
        let b = board(&[(p(3, 3), Piece::king(Color::Red)), (p(5, 5), black())]);
        let moves = InternationalRules.valid_moves(&b, p(3, 3));
        assert_eq!(targets(&moves), vec![p(6, 6), p(7, 7), p(8, 8), p(9, 9)]);
    }

    #[test]
    fn test_capture_triangle_terminates() {
        let b = board(&[(p(5, 5), Piece::king(Color::Red)), (p(4, 4), black()), (p(2, 6), black())]);
        let start = Instant::now();
        let moves = InternationalRules.valid_moves(&b, p(5, 5));
        assert!(start.elapsed() < Duration::from_secs(1));
        assert!(!moves.is_empty());
    }

    #[test]
    fn test_circuit_never_lands_twice() {
        let origin = p(5, 5);
        let b = board(&[
            (origin, Piece::king(Color::Red)),
            (p(4, 4), black()),
            (p(2, 4), black()),
            (p(2, 6), black()),
            (p(4, 6), black()),
        ]);
        let moves = InternationalRules.valid_moves(&b, origin);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(mv.capture_count(), 4);
            assert_ne!(mv.to(), origin);
            let mut path = mv.path().to_vec();
            path.sort();
            path.dedup();
            assert_eq!(path.len(), mv.path().len());
        }
    }

    // ========================================================================
    // VALIDATION
    // ========================================================================

    #[test]
    fn test_validate_by_final_square() {
        let b = board(&[
            (p(3, 1), red()),
            (p(4, 2), black()),
            (p(6, 2), black()),
            (p(3, 5), red()),
            (p(4, 6), black()),
        ]);
        let rules = InternationalRules;

        // (7,1) is not on a diagonal from (3,1)
        let mv = rules.validate_move(&b, Color::Red, p(3, 1), p(7, 1)).unwrap();
        assert_eq!(mv.captured(), &[p(4, 2), p(6, 2)]);

        assert_eq!(
            rules.validate_move(&b, Color::Red, p(3, 5), p(5, 7)),
            Err(RuleViolation::JumpMandatory)
        );
        assert_eq!(
            rules.validate_move(&b, Color::Red, p(3, 5), p(2, 4)),
            Err(RuleViolation::JumpMandatory)
        );
        assert_eq!(
            rules.validate_move(&b, Color::Red, p(3, 1), p(5, 3)),
            Err(RuleViolation::NoMatchingMove {
                from: p(3, 1),
                to: p(5, 3)
            })
        );
    }

    #[test]
    fn test_validate_simple_moves() {
        let b = board(&[(p(6, 3), red()), (p(5, 2), red()), (p(0, 1), black())]);
        let rules = InternationalRules;

        let mv = rules.validate_move(&b, Color::Red, p(6, 3), p(5, 4)).unwrap();
        assert!(!mv.is_jump());

        assert_eq!(
            rules.validate_move(&b, Color::Red, p(6, 3), p(4, 3)),
            Err(RuleViolation::NotDiagonal {
                from: p(6, 3),
                to: p(4, 3)
            })
        );
        assert_eq!(
            rules.validate_move(&b, Color::Red, p(6, 3), p(4, 5)),
            Err(RuleViolation::NoMatchingMove {
                from: p(6, 3),
                to: p(4, 5)
            })
        );
        assert_eq!(
            rules.validate_move(&b, Color::Red, p(6, 3), p(5, 2)),
            Err(RuleViolation::DestinationOccupied(p(5, 2)))
        );
        assert_eq!(
            rules.validate_move(&b, Color::Black, p(6, 3), p(7, 4)),
            Err(RuleViolation::WrongColor {
                from: p(6, 3),
                piece: Color::Red,
                turn: Color::Black
            })
        );
        assert_eq!(
            rules.validate_move(&b, Color::Red, p(6, 3), p(10, 7)),
            Err(RuleViolation::OffBoard(p(10, 7)))
        );
    }

    #[test]
    fn test_validate_full_path() {
        let origin = p(5, 5);
        let b = board(&[
            (origin, Piece::king(Color::Red)),
            (p(4, 4), black()),
            (p(2, 4), black()),
            (p(2, 6), black()),
            (p(4, 6), black()),
        ]);
        let path = [origin, p(3, 3), p(1, 5), p(3, 7), p(6, 4)];
        let mv = InternationalRules
            .validate_path(&b, Color::Red, &path)
            .unwrap();
        assert_eq!(mv.captured(), &[p(4, 4), p(2, 4), p(2, 6), p(4, 6)]);
    }
}
