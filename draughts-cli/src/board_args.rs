//! Shared arguments: where the board comes from and which rules apply

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};

use draughts_core::{Board, BoardSize, Color, Position, Variant};

/// Board file or a starting position (exactly one)
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct BoardSource {
    /// Board file: `.json` snapshot or text diagram
    #[arg(long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Starting position of the given board size (8 or 10)
    #[arg(long, value_name = "SIZE")]
    pub initial: Option<u8>,
}

#[derive(Args)]
pub struct BoardArgs {
    #[command(flatten)]
    pub source: BoardSource,

    /// Rule variant (auto picks by board size)
    #[arg(long, value_enum, default_value = "auto")]
    pub variant: VariantArg,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum VariantArg {
    Auto,
    Standard,
    International,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ColorArg {
    Red,
    Black,
}

impl From<ColorArg> for Color {
    fn from(color: ColorArg) -> Self {
        match color {
            ColorArg::Red => Color::Red,
            ColorArg::Black => Color::Black,
        }
    }
}

impl BoardArgs {
    /// Load or build the board
    pub fn load(&self) -> Result<Board> {
        if let Some(path) = &self.source.board {
            let is_json = path.extension().is_some_and(|ext| ext == "json");
            let board = if is_json {
                Board::load(path)
            } else {
                std::fs::read_to_string(path)
                    .map_err(anyhow::Error::from)
                    .and_then(|text| text.parse::<Board>().map_err(anyhow::Error::from))
            };
            return board.with_context(|| format!("Failed to load board: {}", path.display()));
        }

        match self.source.initial {
            Some(8) => Ok(Board::initial(BoardSize::EightByEight)),
            Some(10) => Ok(Board::initial(BoardSize::TenByTen)),
            Some(other) => bail!("unsupported board size {}, expected 8 or 10", other),
            None => bail!("either --board or --initial is required"),
        }
    }

    /// Variant to play on `board`
    pub fn variant(&self, board: &Board) -> Variant {
        match self.variant {
            VariantArg::Auto => Variant::for_board_size(board.size()),
            VariantArg::Standard => Variant::Standard,
            VariantArg::International => Variant::International,
        }
    }
}

/// clap value parser for `row,col`
pub fn parse_position(s: &str) -> Result<Position, String> {
    s.parse::<Position>().map_err(|e| e.to_string())
}
