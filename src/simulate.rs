//! Batch self-play for soak testing the engine.
//!
//! Each game picks uniformly among the moves that would change the board,
//! so it exercises every rule without any notion of a good move. Games are
//! independent: `(seed) -> GameSummary` is a pure function, which makes a
//! batch trivially parallel and reproducible.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::board::Board;
use crate::engine::Engine;
use crate::error::SpawnResult;
use crate::render::NullSink;
use crate::rng::{GameRng, TileRng};

/// Mixed into the game seed to derive the move-choice stream.
const MOVE_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Batch settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulateConfig {
    /// Number of games to play.
    pub games: u64,
    /// Seed of the first game; game `i` uses `base_seed + i`.
    pub base_seed: u64,
    /// Stop a game after this many accepted moves.
    pub max_moves: u32,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            base_seed: 0,
            max_moves: 100_000,
        }
    }
}

/// Result of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameSummary {
    /// Seed the game was played with.
    pub seed: u64,
    /// Moves that changed the board.
    pub moves: u32,
    /// Largest tile on the final board.
    pub max_tile: u32,
    /// True if the game ended in a terminal state rather than the move cap.
    pub terminal: bool,
    /// Final board.
    pub board: Board,
}

/// Play one game with uniformly random legal moves.
///
/// # Errors
///
/// Propagates [`crate::SpawnError`]; a spawn only follows a move that
/// changed the board, so this does not happen.
pub fn play_random_game(seed: u64, max_moves: u32) -> SpawnResult<GameSummary> {
    let mut engine = Engine::new(GameRng::new(seed), NullSink);
    let mut chooser = GameRng::new(seed ^ MOVE_STREAM);
    engine.new_game()?;

    let mut moves = 0u32;
    while moves < max_moves && !engine.is_terminal_state() {
        let legal = engine.board().legal_moves();
        let last = u32::try_from(legal.len().saturating_sub(1)).unwrap_or(0);
        let pick = usize::try_from(chooser.draw(0, last)).unwrap_or(0);
        let Some(&direction) = legal.get(pick) else {
            break;
        };

        engine.make_move(direction);
        moves += 1;
        if !engine.is_terminal_state() {
            engine.spawn_random_tile()?;
        }
    }

    let board = *engine.board();
    Ok(GameSummary {
        seed,
        moves,
        max_tile: board.max_tile(),
        terminal: board.is_terminal(),
        board,
    })
}

/// Aggregated statistics over a batch of games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimulationStats {
    /// Games played.
    pub games_played: u64,
    /// Games that reached a terminal state.
    pub terminal_games: u64,
    /// Sum of accepted moves across games.
    pub total_moves: u64,
    /// Longest game, in moves.
    pub longest_game: u32,
    /// Count of games by highest tile reached.
    pub max_tiles: BTreeMap<u32, u64>,
}

impl SimulationStats {
    /// Fold one game into the totals.
    pub fn add(&mut self, summary: &GameSummary) {
        self.games_played += 1;
        if summary.terminal {
            self.terminal_games += 1;
        }
        self.total_moves += u64::from(summary.moves);
        self.longest_game = self.longest_game.max(summary.moves);
        *self.max_tiles.entry(summary.max_tile).or_insert(0) += 1;
    }

    /// Merge another set of totals into this one.
    pub fn merge(&mut self, other: &Self) {
        self.games_played += other.games_played;
        self.terminal_games += other.terminal_games;
        self.total_moves += other.total_moves;
        self.longest_game = self.longest_game.max(other.longest_game);
        for (&tile, &count) in &other.max_tiles {
            *self.max_tiles.entry(tile).or_insert(0) += count;
        }
    }

    /// Mean moves per game (0 for an empty batch).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn average_moves(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.total_moves as f64 / self.games_played as f64
        }
    }
}

/// Play a batch of games in parallel on the global rayon pool.
///
/// # Errors
///
/// Returns the first [`crate::SpawnError`] any game reports.
pub fn run_simulation(config: &SimulateConfig) -> SpawnResult<SimulationStats> {
    (0..config.games)
        .into_par_iter()
        .try_fold(SimulationStats::default, |mut local, i| {
            let summary = play_random_game(config.base_seed.wrapping_add(i), config.max_moves)?;
            local.add(&summary);
            Ok(local)
        })
        .try_reduce(SimulationStats::default, |mut a, b| {
            a.merge(&b);
            Ok(a)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_game_is_deterministic() {
        let a = play_random_game(1234, 10_000).unwrap();
        let b = play_random_game(1234, 10_000).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_random_game_runs_to_terminal() {
        let summary = play_random_game(7, 100_000).unwrap();
        assert!(summary.terminal);
        assert!(summary.board.is_terminal());
        assert!(summary.moves > 0);
        assert!(summary.max_tile >= 4);
    }

    #[test]
    fn test_move_cap_stops_early() {
        let summary = play_random_game(7, 3).unwrap();
        assert_eq!(summary.moves, 3);
        assert!(!summary.terminal);
    }

    #[test]
    fn test_simulation_totals() {
        let config = SimulateConfig {
            games: 20,
            base_seed: 100,
            ..SimulateConfig::default()
        };
        let stats = run_simulation(&config).unwrap();
        assert_eq!(stats.games_played, 20);
        assert_eq!(stats.terminal_games, 20);
        assert_eq!(stats.max_tiles.values().sum::<u64>(), 20);
        assert!(stats.average_moves() > 0.0);

        // Same batch sequentially gives the same totals.
        let mut sequential = SimulationStats::default();
        for i in 0..20 {
            sequential.add(&play_random_game(100 + i, config.max_moves).unwrap());
        }
        assert_eq!(stats, sequential);
    }

    #[test]
    fn test_merge_combines_histograms() {
        let mut a = SimulationStats::default();
        let mut b = SimulationStats::default();
        let summary = play_random_game(3, 5).unwrap();
        a.add(&summary);
        b.add(&summary);
        b.add(&summary);
        a.merge(&b);
        assert_eq!(a.games_played, 3);
        assert_eq!(a.max_tiles.get(&summary.max_tile), Some(&3));
        assert_eq!(a.total_moves, 15);
    }
}
