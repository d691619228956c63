//! Moves and check commands - query the rules engine for one position

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use draughts_core::{Color, Move, Position};

use crate::board_args::{parse_position, BoardArgs, ColorArg};

// ============================================================================
// COMMAND ARGUMENTS
// ============================================================================

#[derive(Args)]
pub struct MovesArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    #[command(flatten)]
    pub target: MovesTarget,

    /// Output moves as JSON
    #[arg(long)]
    pub json: bool,
}

/// One square or a whole side
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct MovesTarget {
    /// Square holding the piece to move (row,col)
    #[arg(long, value_name = "R,C", value_parser = parse_position)]
    pub at: Option<Position>,

    /// Every legal move of this side
    #[arg(long, value_enum)]
    pub color: Option<ColorArg>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Side to move
    #[arg(long, value_enum)]
    pub turn: ColorArg,

    /// Square the move starts from (row,col)
    #[arg(long, value_name = "R,C", value_parser = parse_position)]
    pub from: Position,

    #[command(flatten)]
    pub destination: Destination,

    /// Output the verdict as JSON
    #[arg(long)]
    pub json: bool,
}

/// A single target square or the complete landing sequence
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct Destination {
    /// Target square (row,col)
    #[arg(long, value_name = "R,C", value_parser = parse_position)]
    pub to: Option<Position>,

    /// Every landing square after --from, in order
    #[arg(long, value_name = "R,C", num_args = 1.., value_parser = parse_position)]
    pub path: Vec<Position>,
}

#[derive(Serialize)]
struct CheckReport {
    legal: bool,
    #[serde(rename = "move", skip_serializing_if = "Option::is_none")]
    mv: Option<Move>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

// ============================================================================
// COMMANDS
// ============================================================================

/// List legal moves
pub fn run_moves(args: MovesArgs) -> Result<()> {
    let board = args.board.load()?;
    let variant = args.board.variant(&board);
    let engine = variant.engine();

    let moves = match (args.target.at, args.target.color) {
        (Some(at), _) => {
            if !board.contains(at) {
                bail!("square {} is off the {} board", at, board.size());
            }
            engine.valid_moves(&board, at)
        }
        (None, Some(color)) => engine.legal_moves(&board, Color::from(color)),
        (None, None) => bail!("either --at or --color is required"),
    };

    tracing::info!("{} legal moves under {} rules", moves.len(), variant);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&moves)?);
    } else if moves.is_empty() {
        println!("no legal moves");
    } else {
        for mv in &moves {
            println!("{}", mv);
        }
    }
    Ok(())
}

/// Validate a move; returns whether it was legal
pub fn run_check(args: CheckArgs) -> Result<bool> {
    let board = args.board.load()?;
    let variant = args.board.variant(&board);
    let engine = variant.engine();
    let turn = Color::from(args.turn);

    let verdict = match args.destination.to {
        Some(to) => engine.validate_move(&board, turn, args.from, to),
        None => {
            let mut path = vec![args.from];
            path.extend(args.destination.path.iter().copied());
            engine.validate_path(&board, turn, &path)
        }
    };

    tracing::info!("Checked move from {} under {} rules", args.from, variant);

    let legal = verdict.is_ok();
    if args.json {
        let report = match verdict {
            Ok(mv) => CheckReport {
                legal,
                mv: Some(mv),
                reason: None,
            },
            Err(violation) => CheckReport {
                legal,
                mv: None,
                reason: Some(violation.to_string()),
            },
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(legal);
    }

    match verdict {
        Ok(mv) => {
            println!("legal: {}", mv);
            print!("{}", board.apply_move(&mv)?);
        }
        Err(violation) => println!("illegal: {}", violation),
    }
    Ok(legal)
}
