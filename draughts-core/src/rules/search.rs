//! Capture-chain search shared by every variant
//!
//! A branch is `(current square, captured so far, visited so far)`. The mover is
//! lifted off its origin for the whole search; captured pieces stay on the board
//! as obstructions until the move completes and can never be taken twice. A
//! branch ends when no capture continues it or when it lands on the mover's
//! promotion row.

use rustc_hash::FxHashSet;

use crate::board::Board;
use crate::geometry::{is_promotion_landing, Position};
use crate::moves::Move;
use crate::pieces::{Color, Piece};
use crate::ruleset::{MaxCapture, RuleVariant};

/// Read-only view of the board with the mover lifted off `origin`
struct SearchContext<'a> {
    board: &'a Board,
    origin: Position,
    piece: Piece,
    variant: &'a RuleVariant,
}

impl SearchContext<'_> {
    fn occupant(&self, pos: Position) -> Option<Piece> {
        if pos == self.origin {
            None
        } else {
            self.board.piece_at(pos)
        }
    }

    fn vacant(&self, pos: Position) -> bool {
        pos == self.origin || self.board.is_empty(pos)
    }

    /// First capturable piece along `dir`, if any
    fn victim(&self, at: Position, dir: (i8, i8), captured: &[Position]) -> Option<Position> {
        let size = self.board.size();
        let mut pos = at.step(dir);
        while pos.in_bounds(size) {
            match self.occupant(pos) {
                Some(other) => {
                    let takeable = other.color != self.piece.color && !captured.contains(&pos);
                    return takeable.then_some(pos);
                }
                None if self.variant.flies(self.piece) => pos = pos.step(dir),
                None => return None,
            }
        }
        None
    }

    /// Empty squares behind a victim the mover may land on
    fn landings(&self, victim: Position, dir: (i8, i8)) -> Vec<Position> {
        let mut landings = Vec::new();
        let mut pos = victim.step(dir);
        while self.vacant(pos) {
            landings.push(pos);
            if !self.variant.flies(self.piece) {
                break;
            }
            pos = pos.step(dir);
        }
        landings
    }

    fn extend(
        &self,
        path: &[Position],
        captured: &[Position],
        visited: &FxHashSet<Position>,
        chains: &mut Vec<Move>,
    ) {
        let at = path[path.len() - 1];
        let mut continued = false;

        for &dir in self.variant.capture_directions(self.piece) {
            let Some(victim) = self.victim(at, dir, captured) else {
                continue;
            };

            for landing in self.landings(victim, dir) {
                if self.variant.revisit_guard && visited.contains(&landing) {
                    continue;
                }
                continued = true;

                let mut next_path = path.to_vec();
                next_path.push(landing);
                let mut next_captured = captured.to_vec();
                next_captured.push(victim);

                if is_promotion_landing(self.board.size(), landing, self.piece) {
                    chains.push(Move::chain(next_path, next_captured, true));
                    continue;
                }

                let mut next_visited = visited.clone();
                next_visited.insert(landing);
                self.extend(&next_path, &next_captured, &next_visited, chains);
            }
        }

        if !continued && !captured.is_empty() {
            chains.push(Move::chain(path.to_vec(), captured.to_vec(), false));
        }
    }
}

/// Every complete capture chain of the piece on `origin`, unfiltered
pub fn capture_chains(board: &Board, origin: Position, variant: &RuleVariant) -> Vec<Move> {
    let Some(piece) = board.piece_at(origin) else {
        return Vec::new();
    };
    let ctx = SearchContext {
        board,
        origin,
        piece,
        variant,
    };

    let mut visited = FxHashSet::default();
    visited.insert(origin);
    let mut chains = Vec::new();
    ctx.extend(&[origin], &[], &visited, &mut chains);

    tracing::trace!(%origin, chains = chains.len(), "capture search");
    chains
}

/// Whether the piece on `origin` has at least one capture
///
/// Any first leg always yields at least one complete chain, so probing the
/// first leg is enough.
pub fn can_capture(board: &Board, origin: Position, variant: &RuleVariant) -> bool {
    let Some(piece) = board.piece_at(origin) else {
        return false;
    };
    let ctx = SearchContext {
        board,
        origin,
        piece,
        variant,
    };
    variant.capture_directions(piece).iter().any(|&dir| {
        ctx.victim(origin, dir, &[])
            .is_some_and(|victim| !ctx.landings(victim, dir).is_empty())
    })
}

/// Whether any piece of `color` has a capture (the mandatory-jump gate)
pub fn side_can_capture(board: &Board, color: Color, variant: &RuleVariant) -> bool {
    board
        .pieces()
        .any(|(pos, piece)| piece.color == color && can_capture(board, pos, variant))
}

/// Non-capturing moves of the piece on `origin`
pub fn simple_moves(board: &Board, origin: Position, variant: &RuleVariant) -> Vec<Move> {
    let Some(piece) = board.piece_at(origin) else {
        return Vec::new();
    };
    let size = board.size();
    let mut moves = Vec::new();

    for &dir in variant.step_directions(piece) {
        let mut pos = origin.step(dir);
        while board.is_empty(pos) {
            moves.push(Move::simple(origin, pos, is_promotion_landing(size, pos, piece)));
            if !variant.flies(piece) {
                break;
            }
            pos = pos.step(dir);
        }
    }
    moves
}

/// Keep only the chains with the highest capture count
pub fn longest(chains: Vec<Move>) -> Vec<Move> {
    let max = chains.iter().map(Move::capture_count).max().unwrap_or(0);
    chains
        .into_iter()
        .filter(|mv| mv.capture_count() == max)
        .collect()
}

/// Chains of every piece of `color`, filtered by the variant's maximal-capture rule
pub fn side_chains(board: &Board, color: Color, variant: &RuleVariant) -> Vec<Move> {
    let per_piece = board
        .positions_of(color)
        .into_iter()
        .map(|pos| capture_chains(board, pos, variant));

    match variant.max_capture {
        MaxCapture::PerPiece => per_piece.flat_map(longest).collect(),
        MaxCapture::Global => longest(per_piece.flatten().collect()),
    }
}
