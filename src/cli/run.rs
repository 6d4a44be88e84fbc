//! Run command implementation.

use super::output::{RunReport, format_run_text};
use super::{CliError, OutputFormat, resolve_seed};
use twenty48::{Direction, Engine, GameRng, RecordingSink, Session, TickOutcome};

/// Execute the run command.
///
/// # Errors
///
/// Returns an error if spawning fails or JSON output cannot be produced.
pub(crate) fn execute(
    moves: &[Direction],
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let report = play_script(moves, resolve_seed(seed))?;

    match format {
        OutputFormat::Text => print!("{}", format_run_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

/// Feed each move to a fresh session as one frame.
///
/// Moves after game over are left unplayed. The session only notices a
/// terminal board on the frame after the spawn that filled it, so a script
/// whose last move ends the game gets one more frame with no input.
fn play_script(moves: &[Direction], seed: u64) -> Result<RunReport, CliError> {
    let engine = Engine::new(GameRng::new(seed), RecordingSink::new());
    let mut session = Session::new(engine);
    session.start()?;

    let mut played = 0;
    let mut game_over = false;
    for &direction in moves {
        session.press(direction);
        played += 1;
        if session.tick()? == TickOutcome::GameOver {
            game_over = true;
            break;
        }
    }
    if !game_over {
        game_over = session.tick()? == TickOutcome::GameOver;
    }

    let board = *session.board();
    Ok(RunReport {
        seed: session.engine().rng().seed(),
        board,
        max_tile: board.max_tile(),
        accepted: session.accepted_moves(),
        ignored: session.ignored_moves(),
        unplayed: moves.len() - played,
        game_over,
        spawns: session.engine().sink().placements.clone(),
    })
}
