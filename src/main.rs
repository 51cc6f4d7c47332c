//! Gomoku engine command line host
//!
//! Reads a JSON `BoardState` from a file or stdin and prints the engine's
//! answer as JSON on stdout. Logs go to stderr.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::Level;

use gomoku::board::{BoardState, Mark, Move, Pos};
use gomoku::{Difficulty, Engine, EngineConfig};

#[derive(Parser)]
#[command(name = "gomoku", about = "Gomoku move decision and outcome engine")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Choose the next move for a mark
    Decide {
        /// Board JSON file, or `-` for stdin
        #[arg(long)]
        board: PathBuf,

        /// Mark to move: X, O or Y
        #[arg(long)]
        mark: Mark,

        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Path to TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Resolve the game state after a move that is already on the board
    Resolve {
        /// Board JSON file, or `-` for stdin
        #[arg(long)]
        board: PathBuf,

        #[arg(long)]
        row: usize,

        #[arg(long)]
        col: usize,

        /// Mark that played the move
        #[arg(long)]
        mark: Mark,

        #[arg(long, default_value_t = 0)]
        seq: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Decide {
            board,
            mark,
            difficulty,
            config,
        } => {
            let config = match config {
                Some(path) => EngineConfig::load(&path)
                    .with_context(|| format!("loading config from {}", path.display()))?,
                None => EngineConfig::default(),
            };
            let board = read_board(&board)?
                .to_board()
                .context("invalid board")?;

            let result = Engine::new(config)
                .decide_move_with_stats(&board, mark, difficulty)
                .context("deciding move")?;
            tracing::info!(
                search_type = ?result.search_type,
                score = result.score,
                nodes = result.stats.nodes,
                time_ms = result.time_ms,
                "move decided"
            );
            println!("{}", serde_json::to_string(&result.mv)?);
        }
        Command::Resolve {
            board,
            row,
            col,
            mark,
            seq,
        } => {
            let board = read_board(&board)?
                .to_board()
                .context("invalid board")?;
            let last = Move::new(Pos::new(row, col), mark, seq);
            let outcome = Engine::default().resolve(&board, &last);
            println!("{}", serde_json::to_string(&outcome)?);
        }
    }

    Ok(())
}

fn read_board(path: &Path) -> Result<BoardState> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading board from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("reading board from {}", path.display()))?
    };
    BoardState::from_json(&content).context("parsing board JSON")
}
