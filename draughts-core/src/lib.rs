//! Draughts Core - Rules engine for checkers and international draughts
//!
//! This crate provides the rule logic shared by every front end:
//! - Board geometry (square grid, dark-square diagonals)
//! - Pieces, immutable board snapshots and moves
//! - Capture-chain search with mandatory and maximal capture
//! - Standard (8x8) and International (10x10) rule engines
//! - Perft move-path counting

pub mod board;
pub mod error;
pub mod geometry;
pub mod moves;
pub mod pieces;
pub mod rules;
pub mod ruleset;

// Re-exports for convenient access
pub use board::Board;
pub use error::{BoardError, MoveError, RuleViolation};
pub use geometry::{BoardSize, Position, DIAGONALS};
pub use moves::Move;
pub use pieces::{Color, Piece, Rank};
pub use rules::{perft, perft_divide, InternationalRules, RulesEngine, StandardRules};
pub use ruleset::{MaxCapture, RuleVariant, Variant};
