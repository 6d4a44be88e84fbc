#![no_main]

//! Session fuzzer.
//!
//! Drives a seeded session with an arbitrary stream of key presses, frames
//! and restarts. Catches panics in the frame loop and checks the board
//! stays well formed whatever the input timing.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use twenty48::board::check_invariants;
use twenty48::{Direction, Engine, GameRng, Input, RecordingSink, Session, TickOutcome};

#[derive(Arbitrary, Debug, Clone, Copy)]
enum Event {
    Press(u8),
    OtherKey,
    Tick,
    Start,
}

#[derive(Arbitrary, Debug)]
struct SessionInput {
    seed: u64,
    events: Vec<Event>,
}

fuzz_target!(|input: SessionInput| {
    let engine = Engine::new(GameRng::new(input.seed), RecordingSink::new());
    let mut session = Session::new(engine);

    for event in input.events.into_iter().take(4096) {
        match event {
            Event::Press(k) => {
                session.press(Direction::ALL[usize::from(k % 4)]);
            }
            Event::OtherKey => session.press(Input::Other),
            Event::Start => {
                let was_running = session.is_running();
                let started = session.start().expect("fresh board has room");
                assert_eq!(started, !was_running);
            }
            Event::Tick => {
                let running = session.is_running();
                let outcome = session.tick().expect("spawn follows a changed board");
                match outcome {
                    TickOutcome::Idle => assert!(!running),
                    TickOutcome::GameOver => {
                        assert!(session.board().is_terminal());
                        assert!(!session.is_running());
                    }
                    TickOutcome::Continue { .. } => assert!(session.is_running()),
                }
            }
        }

        if !session.is_running() {
            assert_eq!(session.pending(), None);
        }
        assert!(check_invariants(session.board()).is_empty());
    }
});
