//! Output formatting utilities for CLI.

// Allow format! with push_str for readability
#![allow(clippy::format_push_string, clippy::cast_precision_loss)]

use serde::Serialize;
use twenty48::render::render_text;
use twenty48::simulate::SimulationStats;
use twenty48::{Board, Placement};

/// JSON-serializable result of a scripted run.
#[derive(Debug, Serialize)]
pub(super) struct RunReport {
    /// Random seed used.
    pub(super) seed: u64,
    /// Final board.
    pub(super) board: Board,
    /// Largest tile on the final board.
    pub(super) max_tile: u32,
    /// Moves that changed the board.
    pub(super) accepted: u64,
    /// Moves that changed nothing.
    pub(super) ignored: u64,
    /// Moves left unplayed because the game ended first.
    pub(super) unplayed: usize,
    /// Whether the game reached a terminal state.
    pub(super) game_over: bool,
    /// Every tile spawned, starting tiles included.
    pub(super) spawns: Vec<Placement>,
}

/// Format a scripted run as human-readable text.
pub(super) fn format_run_text(report: &RunReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Game (seed: {})\n", report.seed));
    output.push_str(&render_text(&report.board));
    output.push_str(&format!("  Max tile: {}\n", report.max_tile));
    output.push_str(&format!(
        "  Moves: {} accepted, {} ignored",
        report.accepted, report.ignored
    ));
    if report.unplayed > 0 {
        output.push_str(&format!(", {} unplayed", report.unplayed));
    }
    output.push('\n');
    output.push_str(&format!("  Spawns: {}\n", report.spawns.len()));
    output.push_str(if report.game_over {
        "  Status: game over\n"
    } else {
        "  Status: in progress\n"
    });

    output
}

/// JSON-serializable simulation result.
#[derive(Debug, Serialize)]
pub(super) struct JsonSimulationResult<'a> {
    /// Seed of the first game.
    pub(super) base_seed: u64,
    /// Mean moves per game.
    pub(super) average_moves: f64,
    /// Aggregated totals.
    #[serde(flatten)]
    pub(super) stats: &'a SimulationStats,
}

impl<'a> JsonSimulationResult<'a> {
    /// Create from simulation stats.
    pub(super) fn from_stats(stats: &'a SimulationStats, base_seed: u64) -> Self {
        Self {
            base_seed,
            average_moves: stats.average_moves(),
            stats,
        }
    }
}

/// Format simulation statistics as human-readable text.
pub(super) fn format_simulation_text(stats: &SimulationStats, base_seed: u64) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Simulation Results ({} games, seeds {}..)\n",
        stats.games_played, base_seed
    ));
    output.push_str(&format!(
        "  Finished: {} of {}\n",
        stats.terminal_games, stats.games_played
    ));
    output.push_str(&format!(
        "  Moves: {:.1} avg, {} max\n\n",
        stats.average_moves(),
        stats.longest_game
    ));

    output.push_str("  Highest tile reached:\n");
    for (tile, count) in stats.max_tiles.iter().rev() {
        let pct = if stats.games_played > 0 {
            *count as f64 / stats.games_played as f64 * 100.0
        } else {
            0.0
        };
        output.push_str(&format!("    {tile:>6}: {count:>6} ({pct:5.1}%)\n"));
    }

    output
}
