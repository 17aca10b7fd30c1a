//! Scene state machine
//!
//! Alternates a playing round with a score-display interlude. One
//! controller owns the scenes and the caller's sink/terminal capabilities;
//! transitions are explicit values returned from the update match.

use crate::consts::{MAX_TEAMS, SCORE_SCREEN_TICKS};
use crate::events::{EventSink, Terminal};
use crate::render;
use crate::sim::{GameInput, Round};

/// Score interlude: shows the finished round's tally for a fixed time.
pub struct ScoreScreen {
    kills: [u32; MAX_TEAMS],
    ticks_left: u32,
}

impl ScoreScreen {
    fn new(kills: [u32; MAX_TEAMS]) -> Self {
        Self {
            kills,
            ticks_left: SCORE_SCREEN_TICKS,
        }
    }

    /// Counts caller frames directly; true when the interlude ends.
    fn update(&mut self) -> bool {
        self.ticks_left = self.ticks_left.saturating_sub(1);
        self.ticks_left == 0
    }
}

/// Active scene.
pub enum Scene {
    Playing(Round),
    Scores(ScoreScreen),
}

/// Top-level controller: the active scene plus the caller's capabilities.
pub struct Game {
    scene: Scene,
    terminal: Box<dyn Terminal>,
    sink: Box<dyn EventSink>,
    seed: u64,
}

/// Build a game starting in the Playing scene.
pub fn create_game(terminal: Box<dyn Terminal>, sink: Box<dyn EventSink>, seed: u64) -> Game {
    Game {
        scene: Scene::Playing(Round::new(seed)),
        terminal,
        sink,
        seed,
    }
}

impl Game {
    /// Advance one caller frame and apply at most one scene transition.
    pub fn update(&mut self, input: &GameInput) {
        let next = match &mut self.scene {
            Scene::Playing(round) => {
                if round.update(input, self.sink.as_mut()) {
                    log::info!("round complete, showing scores");
                    Some(Scene::Scores(ScoreScreen::new(round.kills())))
                } else {
                    None
                }
            }
            Scene::Scores(scores) => {
                if scores.update() {
                    // distinct seed for every fresh round
                    self.seed = self
                        .seed
                        .wrapping_mul(6364136223846793005)
                        .wrapping_add(1442695040888963407);
                    log::info!("scores done, starting a fresh round");
                    Some(Scene::Playing(Round::new(self.seed)))
                } else {
                    None
                }
            }
        };
        if let Some(scene) = next {
            self.scene = scene;
        }
    }

    /// Paint the active scene into the caller's pixel buffer.
    pub fn draw(&mut self, pixels: &mut [u32]) {
        match &self.scene {
            Scene::Playing(round) => round.draw(pixels, self.terminal.as_mut()),
            Scene::Scores(scores) => render::draw_scores(&scores.kills, pixels),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }
}
