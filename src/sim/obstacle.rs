//! Moving hazards
//!
//! Obstacles random-walk across the board, bounce off the edges, and erase
//! any trail cells they pass over. They never die within a round.

use glam::IVec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::consts::{
    BOARD_HEIGHT, BOARD_WIDTH, MAX_OBSTACLES, MIN_OBSTACLES, OBSTACLE_MAX_SIZE, OBSTACLE_MIN_SIZE,
};
use crate::wrap_point;

/// Axis-aligned hazard rectangle; may wrap past the board edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub pos: IVec2,
    /// Per-axis velocity in {-1, 0, 1}.
    pub vel: IVec2,
    pub size: IVec2,
}

/// Spawn 1-3 obstacles with randomized position, velocity, and size.
pub fn spawn(rng: &mut Pcg32) -> Vec<Obstacle> {
    let count = rng.random_range(MIN_OBSTACLES..=MAX_OBSTACLES);
    (0..count)
        .map(|_| Obstacle {
            pos: IVec2::new(
                rng.random_range(0..BOARD_WIDTH),
                rng.random_range(0..BOARD_HEIGHT),
            ),
            vel: IVec2::new(rng.random_range(-1..=1), rng.random_range(-1..=1)),
            size: IVec2::new(
                rng.random_range(OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE),
                rng.random_range(OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE),
            ),
        })
        .collect()
}

impl Obstacle {
    /// One tick of motion: jitter position and size by ±1, bounce off the
    /// board edges instead of teleporting, wrap, then destroy any trail
    /// underneath the rectangle.
    pub fn step(&mut self, board: &mut Board, rng: &mut Pcg32) {
        self.pos.x += rng.random_range(-1..=1);
        self.pos.y += rng.random_range(-1..=1);
        self.size.x =
            (self.size.x + rng.random_range(-1..=1)).clamp(OBSTACLE_MIN_SIZE, OBSTACLE_MAX_SIZE);
        self.size.y =
            (self.size.y + rng.random_range(-1..=1)).clamp(OBSTACLE_MIN_SIZE, OBSTACLE_MAX_SIZE);

        if !(0..BOARD_WIDTH).contains(&(self.pos.x + self.vel.x)) {
            self.vel.x = -self.vel.x;
        }
        if !(0..BOARD_HEIGHT).contains(&(self.pos.y + self.vel.y)) {
            self.vel.y = -self.vel.y;
        }
        self.pos = wrap_point(self.pos + self.vel);

        for dy in 0..self.size.y {
            for dx in 0..self.size.x {
                board.set(self.pos.x + dx, self.pos.y + dy, 0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_spawn_bounds() {
        let mut rng = Pcg32::seed_from_u64(42);
        for _ in 0..50 {
            let obstacles = spawn(&mut rng);
            assert!((1..=3).contains(&obstacles.len()));
            for o in &obstacles {
                assert!((0..BOARD_WIDTH).contains(&o.pos.x));
                assert!((0..BOARD_HEIGHT).contains(&o.pos.y));
                assert!((-1..=1).contains(&o.vel.x) && (-1..=1).contains(&o.vel.y));
                assert!((OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE).contains(&o.size.x));
                assert!((OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE).contains(&o.size.y));
            }
        }
    }

    #[test]
    fn test_step_stays_on_board() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut board = Board::new();
        let mut obstacle = Obstacle {
            pos: IVec2::new(0, 0),
            vel: IVec2::new(-1, -1),
            size: IVec2::new(30, 30),
        };
        for _ in 0..500 {
            obstacle.step(&mut board, &mut rng);
            assert!((0..BOARD_WIDTH).contains(&obstacle.pos.x));
            assert!((0..BOARD_HEIGHT).contains(&obstacle.pos.y));
            assert!((-1..=1).contains(&obstacle.vel.x));
            assert!((-1..=1).contains(&obstacle.vel.y));
            assert!((OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE).contains(&obstacle.size.x));
            assert!((OBSTACLE_MIN_SIZE..=OBSTACLE_MAX_SIZE).contains(&obstacle.size.y));
        }
    }

    #[test]
    fn test_step_erases_trail() {
        let mut rng = Pcg32::seed_from_u64(9);
        let mut board = Board::new();
        for y in 0..BOARD_HEIGHT {
            board.set(500, y, 2);
        }
        let mut obstacle = Obstacle {
            pos: IVec2::new(480, 300),
            vel: IVec2::new(1, 0),
            size: IVec2::new(60, 60),
        };
        obstacle.step(&mut board, &mut rng);
        // the column now has a hole where the rectangle sits
        for dy in 0..obstacle.size.y {
            assert_eq!(board.get(500, obstacle.pos.y + dy), 0);
        }
        assert_eq!(board.get(500, 0), 2);
        assert_eq!(board.get(500, BOARD_HEIGHT - 1), 2);
    }
}
