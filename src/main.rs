//! Literace entry point
//!
//! Headless native harness: runs a round with a logging event sink and a
//! scripted input pattern, then prints the final tally as JSON. Windowing,
//! input devices, and display presentation live outside this crate.

use literace::consts::{BOARD_HEIGHT, BOARD_WIDTH};
use literace::events::{EventSink, NullTerminal};
use literace::sim::{GameInput, Round};

/// Sink that logs every gameplay event.
struct LogSink;

impl EventSink for LogSink {
    fn on_round_finished(&mut self) {
        log::info!("round finished");
    }

    fn on_killed(&mut self, frame: u64, victim: u8, killer: u8) {
        if victim == killer {
            log::info!("[{frame}] team {victim} ran into its own trail");
        } else {
            log::info!("[{frame}] team {victim} killed by team {killer}");
        }
    }

    fn on_crash(&mut self, frame: u64, victims: &[u8]) {
        log::info!("[{frame}] crash: teams {victims:?}");
    }

    fn on_turn(&mut self, frame: u64, team: u8) {
        log::debug!("[{frame}] team {team} turned");
    }
}

fn main() {
    env_logger::init();
    log::info!("literace (headless) starting");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let mut round = Round::new(seed);
    let mut sink = LogSink;
    let mut terminal = NullTerminal;
    let mut pixels = vec![0u32; (BOARD_WIDTH * BOARD_HEIGHT) as usize];

    // scripted demo: each team zigzags on its own cadence
    let mut input = GameInput::default();
    for frame in 0u64..100_000 {
        for (i, player) in input.players.iter_mut().enumerate() {
            *player = Default::default();
            let phase = (frame / 5 + i as u64 * 97) % 400;
            player.left = phase == 0;
            player.up = phase == 100;
            player.right = phase == 200;
            player.down = phase == 300;
        }

        if round.update(&input, &mut sink) {
            break;
        }
        if frame % 1000 == 0 {
            round.draw(&mut pixels, &mut terminal);
        }
    }

    match serde_json::to_string(&round.kills()) {
        Ok(tally) => println!("{tally}"),
        Err(err) => log::error!("tally serialization failed: {err}"),
    }
}
