//! Frame loop driver
//!
//! One call to `Game::frame` is one iteration of the loop: close check,
//! input, simulation, event logging, render.

use crate::consts::MAX_FRAME_DT;
use crate::platform::{Action, Platform};
use crate::renderer;
use crate::sim::{GameEvent, GameState, TickInput, tick};
use crate::tuning::Tuning;

/// Whether the loop should keep going after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    frames: u64,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl Game {
    pub fn new(tuning: Tuning) -> Self {
        Self {
            state: GameState::new(tuning),
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Frames rendered since startup
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one loop iteration against the platform
    pub fn frame<P: Platform + ?Sized>(&mut self, platform: &mut P) -> LoopControl {
        if platform.should_close() {
            log::info!(
                "Close requested after {} frames (score {})",
                self.frames,
                self.state.score
            );
            return LoopControl::Exit;
        }

        let dt = platform.frame_time().clamp(0.0, MAX_FRAME_DT);
        let input = TickInput {
            jump: platform.is_pressed(Action::Jump),
            restart: platform.is_pressed(Action::Restart),
        };

        tick(&mut self.state, &input, dt);
        self.log_events();

        renderer::render(&self.state, platform);
        self.frames += 1;

        LoopControl::Continue
    }

    fn log_events(&self) {
        for event in &self.state.events {
            match *event {
                GameEvent::Jumped => log::debug!("Jump at tick {}", self.state.time_ticks),
                GameEvent::Landed => log::debug!("Landed at tick {}", self.state.time_ticks),
                GameEvent::ObstacleCleared { score } => log::debug!("Obstacle cleared, score {}", score),
                GameEvent::Collided { score } => {
                    log::info!("Game over with score {}", score);
                    if log::log_enabled!(log::Level::Debug) {
                        if let Some(json) = self.state.snapshot_json() {
                            log::debug!("Final state: {}", json);
                        }
                    }
                }
                GameEvent::Restarted => log::info!("Game restarted"),
            }
        }
    }
}
