//! Draughts CLI - Command-line interface
//!
//! Commands:
//! - show: Print a board diagram
//! - moves: List legal moves of a square or a side
//! - check: Validate a submitted move
//! - perft: Count move paths to a fixed depth

mod board_args;
mod moves_cmd;
mod perft_cmd;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use board_args::BoardArgs;
use draughts_core::Color;

#[derive(Parser)]
#[command(name = "draughts")]
#[command(about = "Checkers and international draughts rules engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a board diagram
    Show {
        #[command(flatten)]
        board: BoardArgs,
    },
    /// List legal moves of one square or of a whole side
    Moves(moves_cmd::MovesArgs),
    /// Validate a move and print the full move it stands for
    Check(moves_cmd::CheckArgs),
    /// Count move paths from a position
    Perft(perft_cmd::PerftArgs),
}

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { board } => {
            show(&board)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Moves(args) => {
            moves_cmd::run_moves(args)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check(args) => {
            let legal = moves_cmd::run_check(args)?;
            Ok(if legal {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Commands::Perft(args) => {
            perft_cmd::run(args)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show(args: &BoardArgs) -> Result<()> {
    let board = args.load()?;
    tracing::info!("Showing {} board", board.size());

    print!("{}", board);
    println!(
        "{}  red: {}  black: {}  variant: {}",
        board.size(),
        board.count(Color::Red),
        board.count(Color::Black),
        args.variant(&board)
    );
    Ok(())
}
