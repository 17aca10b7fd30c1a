//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (integer tick-credit accumulator)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod board;
pub mod collision;
pub mod obstacle;
pub mod round;
pub mod state;
pub mod tick;

pub use board::Board;
pub use collision::{
    bike_hits_obstacle, bikes_collide, next_position, resolve_direction, trail_owner,
};
pub use obstacle::Obstacle;
pub use round::Round;
pub use state::{Bike, Direction, RoundState, team_id};
pub use tick::{GameInput, PlayerInput, one_turn};
