//! Collision resolver
//!
//! Pure functions over a round snapshot: next-position computation with the
//! anti-reversal rule, simultaneous bike-pair detection, toroidal rectangle
//! tests, and trail lookups. Nothing here mutates state.

use glam::IVec2;

use super::board::Board;
use super::obstacle::Obstacle;
use super::state::{Bike, Direction};
use super::tick::PlayerInput;
use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, BOOST_SPEED};
use crate::{wrap, wrap_point};

/// Committed direction after applying the turn request in `input`.
///
/// Request flags are checked in a fixed order (left, right, up, down), so
/// the last set flag wins when several are held. A request for the exact
/// reverse of `current` is rejected unconditionally and the bike continues
/// straight, independent of trail state.
pub fn resolve_direction(current: Direction, input: &PlayerInput) -> Direction {
    let mut wanted = current;
    if input.left {
        wanted = Direction::Left;
    }
    if input.right {
        wanted = Direction::Right;
    }
    if input.up {
        wanted = Direction::Up;
    }
    if input.down {
        wanted = Direction::Down;
    }
    if wanted.is_opposed(current) { current } else { wanted }
}

/// Cell the bike will occupy next tick: one step in its committed
/// direction, two when boosting, toroidally wrapped.
pub fn next_position(bike: &Bike, input: &PlayerInput) -> IVec2 {
    let speed = if input.boost { BOOST_SPEED } else { 1 };
    wrap_point(bike.pos + bike.direction.vector() * speed)
}

/// Two bikes collide when they move into the same cell, or trade cells
/// head-on in a single tick. Must be evaluated against next positions: a
/// head-on swap never shows up as committed co-occupancy.
pub fn bikes_collide(next_a: IVec2, pos_a: IVec2, next_b: IVec2, pos_b: IVec2) -> bool {
    next_a == next_b || (next_a == pos_b && next_b == pos_a)
}

/// Whether `coord` falls inside the span of length `extent` starting at
/// `start` on a circle of circumference `dim`.
#[inline]
fn wrapped_span_contains(start: i32, extent: i32, coord: i32, dim: i32) -> bool {
    wrap(coord - start, dim) < extent
}

/// Point-in-rectangle under toroidal wraparound on both axes; the rectangle
/// itself may wrap past the board edges.
pub fn bike_hits_obstacle(pos: IVec2, obstacle: &Obstacle) -> bool {
    wrapped_span_contains(obstacle.pos.x, obstacle.size.x, pos.x, BOARD_WIDTH)
        && wrapped_span_contains(obstacle.pos.y, obstacle.size.y, pos.y, BOARD_HEIGHT)
}

/// Ownership tag at `pos`; nonzero means a collision, and the tag
/// identifies the killer team (possibly the victim's own).
pub fn trail_owner(board: &Board, pos: IVec2) -> u8 {
    board.get(pos.x, pos.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bike(x: i32, y: i32, direction: Direction) -> Bike {
        Bike {
            alive: true,
            pos: IVec2::new(x, y),
            direction,
        }
    }

    #[test]
    fn test_last_request_wins() {
        let input = PlayerInput {
            left: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(resolve_direction(Direction::Right, &input), Direction::Down);

        let input = PlayerInput {
            left: true,
            right: true,
            ..Default::default()
        };
        assert_eq!(resolve_direction(Direction::Down, &input), Direction::Right);
    }

    #[test]
    fn test_reversal_rejected() {
        let input = PlayerInput {
            down: true,
            ..Default::default()
        };
        assert_eq!(resolve_direction(Direction::Up, &input), Direction::Up);

        let input = PlayerInput {
            right: true,
            ..Default::default()
        };
        assert_eq!(resolve_direction(Direction::Left, &input), Direction::Left);
    }

    #[test]
    fn test_perpendicular_turn_accepted() {
        let input = PlayerInput {
            left: true,
            ..Default::default()
        };
        assert_eq!(resolve_direction(Direction::Up, &input), Direction::Left);
    }

    #[test]
    fn test_next_position_wraps() {
        let b = bike(0, 0, Direction::Up);
        assert_eq!(
            next_position(&b, &PlayerInput::default()),
            IVec2::new(0, BOARD_HEIGHT - 1)
        );
        let b = bike(BOARD_WIDTH - 1, 5, Direction::Right);
        assert_eq!(next_position(&b, &PlayerInput::default()), IVec2::new(0, 5));
    }

    #[test]
    fn test_boost_doubles_speed() {
        let b = bike(100, 100, Direction::Left);
        let boost = PlayerInput {
            boost: true,
            ..Default::default()
        };
        assert_eq!(next_position(&b, &boost), IVec2::new(98, 100));
    }

    #[test]
    fn test_bikes_collide_same_cell() {
        let target = IVec2::new(500, 500);
        assert!(bikes_collide(
            target,
            IVec2::new(499, 500),
            target,
            IVec2::new(501, 500)
        ));
    }

    #[test]
    fn test_bikes_collide_swap() {
        let a = IVec2::new(500, 500);
        let b = IVec2::new(501, 500);
        assert!(bikes_collide(b, a, a, b));
    }

    #[test]
    fn test_bikes_miss() {
        assert!(!bikes_collide(
            IVec2::new(1, 1),
            IVec2::new(0, 1),
            IVec2::new(3, 1),
            IVec2::new(4, 1)
        ));
    }

    #[test]
    fn test_obstacle_hit_plain() {
        let obstacle = Obstacle {
            pos: IVec2::new(100, 100),
            vel: IVec2::ZERO,
            size: IVec2::new(20, 30),
        };
        assert!(bike_hits_obstacle(IVec2::new(100, 100), &obstacle));
        assert!(bike_hits_obstacle(IVec2::new(119, 129), &obstacle));
        assert!(!bike_hits_obstacle(IVec2::new(120, 100), &obstacle));
        assert!(!bike_hits_obstacle(IVec2::new(100, 130), &obstacle));
        assert!(!bike_hits_obstacle(IVec2::new(99, 100), &obstacle));
    }

    #[test]
    fn test_obstacle_hit_wrapping_rect() {
        // rectangle hangs off the bottom-right corner
        let obstacle = Obstacle {
            pos: IVec2::new(BOARD_WIDTH - 10, BOARD_HEIGHT - 10),
            vel: IVec2::ZERO,
            size: IVec2::new(20, 20),
        };
        assert!(bike_hits_obstacle(IVec2::new(5, 5), &obstacle));
        assert!(bike_hits_obstacle(IVec2::new(BOARD_WIDTH - 1, 9), &obstacle));
        assert!(!bike_hits_obstacle(IVec2::new(10, 10), &obstacle));
    }

    #[test]
    fn test_trail_owner() {
        let mut board = Board::new();
        board.set(7, 8, 3);
        assert_eq!(trail_owner(&board, IVec2::new(7, 8)), 3);
        assert_eq!(trail_owner(&board, IVec2::new(7, 9)), 0);
    }
}
