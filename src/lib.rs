//! Literace - a multiplayer grid light-cycle game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (board, collisions, round lifecycle)
//! - `events`: Capability traits implemented by the caller
//! - `game`: Scene state machine alternating rounds with score screens
//! - `render`: Pixel-buffer drawing

pub mod events;
pub mod game;
pub mod render;
pub mod sim;

pub use events::{EventSink, NullEventSink, NullTerminal, Terminal};
pub use game::{Game, create_game};

use glam::IVec2;

/// Game configuration constants
pub mod consts {
    /// Board dimensions in cells
    pub const BOARD_WIDTH: i32 = 1024;
    pub const BOARD_HEIGHT: i32 = 768;

    /// One bike per team
    pub const MAX_TEAMS: usize = 4;

    /// Cells moved per tick while boosting (normal speed is 1)
    pub const BOOST_SPEED: i32 = 2;

    /// Time credit granted per `update()` call
    pub const UPDATE_CREDIT: i32 = 100;
    /// Time cost of one simulation tick, so one tick runs per five calls
    pub const TICK_COST: i32 = 500;

    /// Calls between the round ending and the completion signal
    pub const ROUND_OVER_DELAY: u32 = 1000;
    /// How long the score screen stays up, in calls
    pub const SCORE_SCREEN_TICKS: u32 = 1000;

    /// Obstacle spawn bounds
    pub const MIN_OBSTACLES: u32 = 1;
    pub const MAX_OBSTACLES: u32 = 3;
    pub const OBSTACLE_MIN_SIZE: i32 = 20;
    pub const OBSTACLE_MAX_SIZE: i32 = 220;
}

/// Wrap a coordinate into `[0, extent)`
#[inline]
pub fn wrap(v: i32, extent: i32) -> i32 {
    v.rem_euclid(extent)
}

/// Wrap a point onto the toroidal board
#[inline]
pub fn wrap_point(p: IVec2) -> IVec2 {
    IVec2::new(
        wrap(p.x, consts::BOARD_WIDTH),
        wrap(p.y, consts::BOARD_HEIGHT),
    )
}
