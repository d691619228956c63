//! Perft command - count move paths, one rayon task per root move

use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;

use draughts_core::{perft, BoardError, Color, Move};

use crate::board_args::{BoardArgs, ColorArg};

#[derive(Args)]
pub struct PerftArgs {
    #[command(flatten)]
    pub board: BoardArgs,

    /// Side to move first
    #[arg(long, value_enum, default_value = "red")]
    pub turn: ColorArg,

    /// Number of plies to expand
    #[arg(long, default_value = "4")]
    pub depth: u32,

    /// Print the node count below each root move
    #[arg(long)]
    pub divide: bool,
}

pub fn run(args: PerftArgs) -> Result<()> {
    let board = args.board.load()?;
    let variant = args.board.variant(&board);
    let engine = variant.engine();
    let turn = Color::from(args.turn);

    tracing::info!(
        "Perft: {} rules, {} to move, depth={}",
        variant,
        turn,
        args.depth
    );
    let start = Instant::now();

    let split: Vec<(Move, u64)> = if args.depth == 0 {
        Vec::new()
    } else {
        engine
            .legal_moves(&board, turn)
            .into_par_iter()
            .map(|mv| -> Result<(Move, u64), BoardError> {
                let next = board.apply_move(&mv)?;
                let nodes = perft(engine, &next, turn.opponent(), args.depth - 1)?;
                Ok((mv, nodes))
            })
            .collect::<Result<_, _>>()
            .context("Perft hit an inconsistent board")?
    };

    let total: u64 = if args.depth == 0 {
        1
    } else {
        split.iter().map(|(_, nodes)| nodes).sum()
    };

    if args.divide {
        for (mv, nodes) in &split {
            println!("{}: {}", mv, nodes);
        }
        println!();
    }
    println!("depth {}: {} nodes", args.depth, total);

    tracing::info!("Perft finished in {:.2?}", start.elapsed());
    Ok(())
}
