//! Round state and core simulation types
//!
//! Everything one round owns: the board, the bikes, the obstacles, and the
//! counters driving the round-over transition.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::obstacle::{self, Obstacle};
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, MAX_TEAMS};

/// Facing of a bike. `Idle` is the table origin; bikes start the round `Up`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Idle,
    Left,
    Down,
    Right,
    Up,
}

/// Direction-to-vector lookup, indexed by discriminant.
const DIR_VECTORS: [IVec2; 5] = [
    IVec2::new(0, 0),
    IVec2::new(-1, 0),
    IVec2::new(0, 1),
    IVec2::new(1, 0),
    IVec2::new(0, -1),
];

impl Direction {
    /// Unit step for this direction.
    #[inline]
    pub fn vector(self) -> IVec2 {
        DIR_VECTORS[self as usize]
    }

    /// Two directions are opposed iff their vectors are exact negations.
    #[inline]
    pub fn is_opposed(self, other: Direction) -> bool {
        self.vector() == -other.vector()
    }
}

/// One light cycle. A dead bike stops moving but its trail stays on the
/// board until the round resets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bike {
    pub alive: bool,
    pub pos: IVec2,
    pub direction: Direction,
}

/// 1-based team id for a bike slot. Also the board ownership tag.
#[inline]
pub fn team_id(slot: usize) -> u8 {
    slot as u8 + 1
}

/// Complete per-round simulation state, owned by one `Round` at a time.
#[derive(Debug, Clone)]
pub struct RoundState {
    pub board: Board,
    pub bikes: [Bike; MAX_TEAMS],
    pub obstacles: Vec<Obstacle>,
    /// Monotonic tick counter, reset at round start.
    pub frame_count: u64,
    /// Edge-triggered once fewer than two bikes remain alive.
    pub round_over: bool,
    /// Countdown before the finished round is reported to the caller.
    pub finish_delay: u32,
    /// Trail kills credited per team. Suicides and crashes credit no one.
    pub kills: [u32; MAX_TEAMS],
    pub rng: Pcg32,
    pub seed: u64,
}

impl RoundState {
    /// Round setup: bikes evenly spaced at mid-height facing up, empty
    /// board, freshly randomized obstacles, counters zeroed.
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = obstacle::spawn(&mut rng);
        Self {
            board: Board::new(),
            bikes: Self::starting_grid(),
            obstacles,
            frame_count: 0,
            round_over: false,
            finish_delay: 0,
            kills: [0; MAX_TEAMS],
            rng,
            seed,
        }
    }

    /// Re-run round setup, drawing fresh obstacle randomization from the
    /// same stream.
    pub fn reset(&mut self) {
        self.board.clear();
        self.obstacles = obstacle::spawn(&mut self.rng);
        self.bikes = Self::starting_grid();
        self.frame_count = 0;
        self.round_over = false;
        self.finish_delay = 0;
        self.kills = [0; MAX_TEAMS];
    }

    fn starting_grid() -> [Bike; MAX_TEAMS] {
        std::array::from_fn(|k| Bike {
            alive: true,
            pos: IVec2::new(
                (k as i32 + 1) * BOARD_WIDTH / (MAX_TEAMS as i32 + 1),
                BOARD_HEIGHT / 2,
            ),
            direction: Direction::Up,
        })
    }

    /// Number of bikes still alive.
    pub fn survivors(&self) -> usize {
        self.bikes.iter().filter(|b| b.alive).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_vectors() {
        assert_eq!(Direction::Left.vector(), IVec2::new(-1, 0));
        assert_eq!(Direction::Up.vector(), IVec2::new(0, -1));
        assert_eq!(Direction::Idle.vector(), IVec2::ZERO);
    }

    #[test]
    fn test_opposed_pairs() {
        assert!(Direction::Left.is_opposed(Direction::Right));
        assert!(Direction::Up.is_opposed(Direction::Down));
        assert!(!Direction::Up.is_opposed(Direction::Left));
        assert!(!Direction::Up.is_opposed(Direction::Up));
        // the zero vector is its own negation
        assert!(Direction::Idle.is_opposed(Direction::Idle));
    }

    #[test]
    fn test_starting_grid() {
        let state = RoundState::new(1);
        assert_eq!(state.survivors(), MAX_TEAMS);
        for (k, bike) in state.bikes.iter().enumerate() {
            assert!(bike.alive);
            assert_eq!(bike.direction, Direction::Up);
            assert_eq!(
                bike.pos,
                IVec2::new((k as i32 + 1) * BOARD_WIDTH / 5, BOARD_HEIGHT / 2)
            );
        }
        assert!(!state.obstacles.is_empty() && state.obstacles.len() <= 3);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = RoundState::new(2);
        state.board.set(1, 1, 3);
        state.bikes[0].alive = false;
        state.kills[2] = 5;
        state.frame_count = 99;
        state.round_over = true;
        state.reset();
        assert_eq!(state.board.get(1, 1), 0);
        assert_eq!(state.survivors(), MAX_TEAMS);
        assert_eq!(state.kills, [0; MAX_TEAMS]);
        assert_eq!(state.frame_count, 0);
        assert!(!state.round_over);
    }
}
