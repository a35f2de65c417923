//! Dino Run entry point
//!
//! Opens the window and runs the frame loop until close is requested.

use macroquad::prelude::next_frame;

use dino_run::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, TARGET_FPS};
use dino_run::platform::{FramePacer, KeyBindings, MacroquadPlatform, window_conf};
use dino_run::{Game, LoopControl, Tuning};

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    log::info!(
        "Dino Run starting ({}x{} @ {} FPS)",
        SCREEN_WIDTH,
        SCREEN_HEIGHT,
        TARGET_FPS
    );

    let tuning = Tuning::default();
    log::debug!("Tuning: {:?}", tuning);

    let mut platform = MacroquadPlatform::new(KeyBindings::default());
    let mut pacer = FramePacer::new(TARGET_FPS);
    let mut game = Game::new(tuning);

    while game.frame(&mut platform) == LoopControl::Continue {
        pacer.wait();
        next_frame().await;
    }

    log::info!("Dino Run exiting");
}
