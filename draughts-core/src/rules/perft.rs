//! Move-path enumeration (perft) for checking move generators

use crate::board::Board;
use crate::error::BoardError;
use crate::moves::Move;
use crate::pieces::Color;

use super::RulesEngine;

/// Number of distinct move sequences of length `depth` with `color` to move
pub fn perft(
    engine: &dyn RulesEngine,
    board: &Board,
    color: Color,
    depth: u32,
) -> Result<u64, BoardError> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = engine.legal_moves(board, color);
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    moves.iter().try_fold(0, |total, mv| -> Result<u64, BoardError> {
        let next = board.apply_move(mv)?;
        Ok(total + perft(engine, &next, color.opponent(), depth - 1)?)
    })
}

/// Perft split by root move
pub fn perft_divide(
    engine: &dyn RulesEngine,
    board: &Board,
    color: Color,
    depth: u32,
) -> Result<Vec<(Move, u64)>, BoardError> {
    if depth == 0 {
        return Ok(Vec::new());
    }

    engine
        .legal_moves(board, color)
        .into_iter()
        .map(|mv| {
            let next = board.apply_move(&mv)?;
            let nodes = perft(engine, &next, color.opponent(), depth - 1)?;
            Ok((mv, nodes))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::BoardSize;
    use crate::rules::{InternationalRules, StandardRules};

    #[test]
    fn test_standard_opening() {
        let board = Board::initial(BoardSize::EightByEight);
        assert_eq!(perft(&StandardRules, &board, Color::Red, 0).unwrap(), 1);
        assert_eq!(perft(&StandardRules, &board, Color::Red, 1).unwrap(), 7);
        assert_eq!(perft(&StandardRules, &board, Color::Red, 2).unwrap(), 49);
        assert_eq!(perft(&StandardRules, &board, Color::Red, 3).unwrap(), 302);
    }

    #[test]
    fn test_international_opening() {
        let board = Board::initial(BoardSize::TenByTen);
        assert_eq!(perft(&InternationalRules, &board, Color::Red, 1).unwrap(), 9);
        assert_eq!(perft(&InternationalRules, &board, Color::Black, 2).unwrap(), 81);
    }

    #[test]
    fn test_divide_sums_to_perft() {
        let board = Board::initial(BoardSize::EightByEight);
        let split = perft_divide(&StandardRules, &board, Color::Red, 3).unwrap();
        assert_eq!(split.len(), 7);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), 302);
    }
}
