//! One simulation tick
//!
//! Direction updates, simultaneous collision detection, movement commit,
//! obstacle advance. The fixed-timestep pacing that decides *when* a tick
//! runs lives in `round`.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    bike_hits_obstacle, bikes_collide, next_position, resolve_direction, trail_owner,
};
use super::state::{Direction, RoundState, team_id};
use crate::consts::{MAX_TEAMS, ROUND_OVER_DELAY};
use crate::events::EventSink;

/// Turn/boost requests for a single team.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub boost: bool,
}

/// Per-call input: one request set per team plus the global restart flag.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GameInput {
    pub restart: bool,
    pub players: [PlayerInput; MAX_TEAMS],
}

/// Advance the round by one simulation tick.
pub fn one_turn(state: &mut RoundState, input: &GameInput, sink: &mut dyn EventSink) {
    if state.survivors() < 2 {
        // Edge-trigger the finish exactly once. The delay countdown itself
        // is driven by `Round::update`, once per caller frame.
        if !state.round_over {
            state.round_over = true;
            state.finish_delay = ROUND_OVER_DELAY;
            sink.on_round_finished();
            log::info!("round finished at frame {}", state.frame_count);
        }
        return;
    }

    let frame = state.frame_count;

    // Turn requests commit before and independently of movement.
    for (i, bike) in state.bikes.iter_mut().enumerate() {
        if !bike.alive {
            continue;
        }
        let committed = resolve_direction(bike.direction, &input.players[i]);
        if committed != bike.direction {
            bike.direction = committed;
            sink.on_turn(frame, team_id(i));
        }
    }

    // Everybody's next cell, computed before anyone moves: head-on trades
    // only exist between next positions.
    let next: [IVec2; MAX_TEAMS] =
        std::array::from_fn(|i| next_position(&state.bikes[i], &input.players[i]));

    for i in 0..MAX_TEAMS {
        if !state.bikes[i].alive {
            continue;
        }
        if state.obstacles.iter().any(|o| bike_hits_obstacle(next[i], o)) {
            state.bikes[i].alive = false;
            sink.on_crash(frame, &[team_id(i)]);
        }
    }

    // Only the first colliding pair is resolved per tick.
    'pairs: for i in 0..MAX_TEAMS {
        for j in i + 1..MAX_TEAMS {
            if !state.bikes[i].alive || !state.bikes[j].alive {
                continue;
            }
            if bikes_collide(next[i], state.bikes[i].pos, next[j], state.bikes[j].pos) {
                state.bikes[i].alive = false;
                state.bikes[j].alive = false;
                sink.on_crash(frame, &[team_id(i), team_id(j)]);
                break 'pairs;
            }
        }
    }

    // Movement commit, sequentially in team order. Bikes killed above no
    // longer move and leave no new trail; a bike killed by the trail it
    // lands on still stamps its death cell.
    for i in 0..MAX_TEAMS {
        if !state.bikes[i].alive {
            continue;
        }
        let pos = next[i];
        state.bikes[i].pos = pos;
        if state.bikes[i].direction != Direction::Idle {
            let owner = trail_owner(&state.board, pos);
            if owner != 0 {
                state.bikes[i].alive = false;
                sink.on_killed(frame, team_id(i), owner);
                if owner != team_id(i) {
                    state.kills[owner as usize - 1] += 1;
                }
            }
        }
        state.board.set(pos.x, pos.y, team_id(i));
    }

    for obstacle in state.obstacles.iter_mut() {
        obstacle.step(&mut state.board, &mut state.rng);
    }

    state.frame_count += 1;
}
