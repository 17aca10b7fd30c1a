//! Round controller
//!
//! Owns one round's state plus the fixed-timestep decoupling between caller
//! `update()` calls and simulation ticks.

use super::state::RoundState;
use super::tick::{GameInput, one_turn};
use crate::consts::{MAX_TEAMS, TICK_COST, UPDATE_CREDIT};
use crate::events::{EventSink, Terminal};
use crate::render;

/// One playthrough from bike placement to fewer than two survivors.
pub struct Round {
    state: RoundState,
    /// Leftover time credit; each call grants `UPDATE_CREDIT` and one tick
    /// costs `TICK_COST`.
    credit: i32,
}

impl Round {
    pub fn new(seed: u64) -> Self {
        let state = RoundState::new(seed);
        log::info!(
            "round start: seed {seed}, {} obstacles",
            state.obstacles.len()
        );
        Self { state, credit: 0 }
    }

    /// Advance by one caller frame.
    ///
    /// Grants a fixed time credit and runs however many whole ticks it buys
    /// (one per five calls), keeping simulation pacing independent of caller
    /// frequency. Returns true once the round is over and the completion
    /// delay has elapsed.
    pub fn update(&mut self, input: &GameInput, sink: &mut dyn EventSink) -> bool {
        if self.state.round_over && input.restart {
            self.restart();
        }

        self.credit += UPDATE_CREDIT;
        while self.credit > 0 {
            self.credit -= TICK_COST;
            one_turn(&mut self.state, input, sink);
        }

        // Not gated by the accumulator: the delay counts caller frames.
        if self.state.round_over && self.state.finish_delay > 0 {
            self.state.finish_delay -= 1;
        }
        self.state.round_over && self.state.finish_delay == 0
    }

    /// Re-run round setup with fresh obstacle randomization.
    pub fn restart(&mut self) {
        self.state.reset();
        self.credit = 0;
    }

    /// Paint trails, heads, and obstacles into the pixel buffer, forwarding
    /// head/obstacle draws to the terminal.
    pub fn draw(&self, pixels: &mut [u32], terminal: &mut dyn Terminal) {
        render::draw_round(&self.state, pixels, terminal);
    }

    /// Read-only snapshot for external consumers.
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// Direct state access, for callers that stage scenarios.
    pub fn state_mut(&mut self) -> &mut RoundState {
        &mut self.state
    }

    /// Accumulated trail-kill tally.
    pub fn kills(&self) -> [u32; MAX_TEAMS] {
        self.state.kills
    }
}
