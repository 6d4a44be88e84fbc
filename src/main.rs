//! twenty48 CLI - play, script and soak-test 2048 games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use twenty48::Direction;

/// twenty48 - A deterministic 2048 engine
#[derive(Parser, Debug)]
#[command(name = "twenty48")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play interactively in the terminal
    Play {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Frame interval in milliseconds (default: 16)
        #[arg(long, default_value = "16")]
        frame_ms: u64,

        /// Write logs to this file (the TUI owns the terminal)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Play a scripted sequence of moves and print the result
    Run {
        /// Moves to apply in order: up, down, left or right
        #[arg(required = true)]
        moves: Vec<Direction>,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Play many random games in parallel and aggregate statistics
    Simulate {
        /// Number of games to run (default: 1000)
        #[arg(short, long, default_value = "1000")]
        games: u64,

        /// Starting seed (increments for each game)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Parallel threads (default: CPU count)
        #[arg(short = 'j', long)]
        threads: Option<usize>,

        /// Maximum moves per game (default: 100000)
        #[arg(short, long)]
        max_moves: Option<u32>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Show progress bar
        #[arg(short, long)]
        progress: bool,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            seed,
            frame_ms,
            log_file,
        } => cli::init_file_logging(log_file.as_deref())
            .and_then(|()| cli::play::execute(seed, frame_ms)),

        Commands::Run {
            moves,
            seed,
            format,
        } => {
            cli::init_logging();
            cli::run::execute(&moves, seed, format)
        }

        Commands::Simulate {
            games,
            seed,
            threads,
            max_moves,
            format,
            progress,
        } => {
            cli::init_logging();
            cli::simulate::execute(games, seed, threads, max_moves, format, progress)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
