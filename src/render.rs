//! Pixel-buffer rendering
//!
//! Fills a caller-supplied W×H ARGB buffer from the board snapshot plus the
//! live bike and obstacle arrays. Presenting the buffer on an actual screen
//! or texture belongs to the caller.

use glam::IVec2;

use crate::consts::{BOARD_HEIGHT, BOARD_WIDTH, MAX_TEAMS};
use crate::events::Terminal;
use crate::sim::RoundState;
use crate::wrap;

const fn pack(r: u32, g: u32, b: u32) -> u32 {
    0xff00_0000 | (r << 16) | (g << 8) | b
}

/// Board background (0), team trail colors (1-4), and bright head variants
/// (5-8). Indexing out of range is a caller contract violation and panics.
pub const PALETTE: [u32; 9] = [
    pack(40, 40, 40),
    pack(255, 255, 0),
    pack(64, 64, 255),
    pack(255, 0, 0),
    pack(0, 255, 0),
    pack(255, 255, 128),
    pack(128, 128, 255),
    pack(255, 128, 128),
    pack(128, 255, 128),
];

const OBSTACLE_COLOR: u32 = pack(128, 128, 128);

#[inline]
fn plot(pixels: &mut [u32], pos: IVec2, color: u32) {
    let x = wrap(pos.x, BOARD_WIDTH);
    let y = wrap(pos.y, BOARD_HEIGHT);
    pixels[(y * BOARD_WIDTH + x) as usize] = color;
}

/// Paint one round into `pixels` (must be exactly W×H), forwarding head and
/// obstacle draws to the terminal. Pure over the snapshot: repeated calls
/// produce byte-identical output.
pub fn draw_round(state: &RoundState, pixels: &mut [u32], terminal: &mut dyn Terminal) {
    assert_eq!(
        pixels.len(),
        (BOARD_WIDTH * BOARD_HEIGHT) as usize,
        "pixel buffer must be board-sized"
    );

    for (pixel, cell) in pixels.iter_mut().zip(state.board.cells()) {
        *pixel = PALETTE[*cell as usize];
    }

    for obstacle in &state.obstacles {
        for dy in 0..obstacle.size.y {
            for dx in 0..obstacle.size.x {
                plot(pixels, obstacle.pos + IVec2::new(dx, dy), OBSTACLE_COLOR);
            }
        }
        terminal.draw_obstacle(obstacle.pos, obstacle.size);
    }

    for (i, bike) in state.bikes.iter().enumerate() {
        if !bike.alive {
            continue;
        }
        // heads use the bright variant of the team color
        let color_index = i + 1 + MAX_TEAMS;
        for dy in -1..=1 {
            for dx in -1..=1 {
                plot(pixels, bike.pos + IVec2::new(dx, dy), PALETTE[color_index]);
            }
        }
        terminal.draw_head(bike.pos, color_index);
    }
}

/// Paint the between-round score screen: one kill bar per team, bar length
/// growing with the tally.
pub fn draw_scores(kills: &[u32; MAX_TEAMS], pixels: &mut [u32]) {
    assert_eq!(
        pixels.len(),
        (BOARD_WIDTH * BOARD_HEIGHT) as usize,
        "pixel buffer must be board-sized"
    );

    pixels.fill(PALETTE[0]);
    for (i, &score) in kills.iter().enumerate() {
        let color = PALETTE[i + 1];
        let top = 96 + i as i32 * 128;
        let width = (64 + score as i32 * 64).min(BOARD_WIDTH - 128);
        for y in top..top + 64 {
            for x in 64..64 + width {
                plot(pixels, IVec2::new(x, y), color);
            }
        }
    }
}
