//! Simulate command implementation.

use super::output::{JsonSimulationResult, format_simulation_text};
use super::{CliError, OutputFormat, resolve_seed};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use std::time::Instant;
use twenty48::simulate::{SimulateConfig, run_simulation};

/// Execute the simulate command.
///
/// # Errors
///
/// Returns an error if a game fails or JSON output cannot be produced.
pub(crate) fn execute(
    games: u64,
    seed: Option<u64>,
    threads: Option<usize>,
    max_moves: Option<u32>,
    format: OutputFormat,
    progress: bool,
) -> Result<(), CliError> {
    // Set thread pool size if specified
    if let Some(num_threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build_global()
            .ok(); // Ignore error if already initialized
    }

    let mut config = SimulateConfig {
        games,
        base_seed: resolve_seed(seed),
        ..SimulateConfig::default()
    };
    if let Some(m) = max_moves {
        config.max_moves = m;
    }

    let pb = if progress {
        let pb = ProgressBar::new(games);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} games")
                .map_err(|e| CliError::new(e.to_string()))?
                .progress_chars("=>-"),
        );
        Some(pb)
    } else {
        None
    };

    info!(
        "Simulating {} games from seed {}",
        config.games, config.base_seed
    );
    let start = Instant::now();
    let stats = run_simulation(&config)?;

    // Update progress bar after completion (no atomic overhead in hot path)
    if let Some(pb) = pb {
        pb.set_position(stats.games_played);
        pb.finish_with_message("done");
    }

    let duration = start.elapsed();

    match format {
        OutputFormat::Text => {
            println!();
            print!("{}", format_simulation_text(&stats, config.base_seed));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        OutputFormat::Json => {
            let json_result = JsonSimulationResult::from_stats(&stats, config.base_seed);
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
    }

    Ok(())
}
