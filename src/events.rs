//! Capability interfaces implemented by the caller
//!
//! The round controller reports gameplay through `EventSink` and forwards
//! head/obstacle draw calls through `Terminal`. Callers that don't care
//! about either plug in the null implementations.

use glam::IVec2;

/// Receives gameplay notifications from the round controller.
///
/// Team ids are 1-based everywhere; `on_killed` with `victim == killer`
/// signals a self-collision.
pub trait EventSink {
    /// Fired exactly once per round, when fewer than two bikes remain alive.
    fn on_round_finished(&mut self);
    /// A bike ran into a trail cell owned by `killer`.
    fn on_killed(&mut self, frame: u64, victim: u8, killer: u8);
    /// One bike hit an obstacle, or two bikes collided head-on.
    fn on_crash(&mut self, frame: u64, victims: &[u8]);
    /// A bike's committed direction changed.
    fn on_turn(&mut self, frame: u64, team: u8);
}

/// Receives draw calls for bike heads and obstacles.
pub trait Terminal {
    fn draw_head(&mut self, pos: IVec2, color_index: usize);
    fn draw_obstacle(&mut self, pos: IVec2, size: IVec2);
}

/// Sink for callers that don't need notifications.
pub struct NullEventSink;

impl EventSink for NullEventSink {
    fn on_round_finished(&mut self) {}
    fn on_killed(&mut self, _frame: u64, _victim: u8, _killer: u8) {}
    fn on_crash(&mut self, _frame: u64, _victims: &[u8]) {}
    fn on_turn(&mut self, _frame: u64, _team: u8) {}
}

/// Terminal for callers without a secondary display.
pub struct NullTerminal;

impl Terminal for NullTerminal {
    fn draw_head(&mut self, _pos: IVec2, _color_index: usize) {}
    fn draw_obstacle(&mut self, _pos: IVec2, _size: IVec2) {}
}
