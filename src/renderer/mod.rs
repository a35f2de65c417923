//! Scene rendering
//!
//! Projects the game state into 2D draw calls on a `Canvas`. Rendering never
//! touches the state; frozen entities are redrawn every frame after game over.

pub mod palette;

use crate::consts::*;
use crate::sim::{GameState, Rect};
use palette::Rgba;

/// Score label position and size
pub const SCORE_POS: (f32, f32) = (10.0, 10.0);
pub const HUD_FONT_SIZE: f32 = 20.0;

pub const GAME_OVER_MESSAGE: &str = "GAME OVER! Press R to Restart";
pub const GAME_OVER_POS: (f32, f32) = (SCREEN_WIDTH / 2.0 - 160.0, SCREEN_HEIGHT / 2.0 - 20.0);

/// Drawing primitives the scene needs from the platform.
///
/// Coordinates are screen space with the origin top-left. `text` positions
/// the top-left corner of the string.
pub trait Canvas {
    fn clear(&mut self, color: Rgba);
    fn fill_rect(&mut self, rect: Rect, color: Rgba);
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba);
}

/// Ground strip along the bottom of the screen
pub fn ground_rect() -> Rect {
    Rect::new(0.0, SCREEN_HEIGHT - GROUND_HEIGHT, SCREEN_WIDTH, GROUND_HEIGHT)
}

pub fn score_label(score: u32) -> String {
    format!("Score: {}", score)
}

/// Draw one frame
pub fn render<C: Canvas + ?Sized>(state: &GameState, canvas: &mut C) {
    canvas.clear(palette::BACKGROUND);

    canvas.fill_rect(ground_rect(), palette::GROUND);
    canvas.fill_rect(state.player.rect, palette::PLAYER);
    canvas.fill_rect(state.obstacle.rect, palette::OBSTACLE);

    // HUD
    canvas.text(
        &score_label(state.score),
        SCORE_POS.0,
        SCORE_POS.1,
        HUD_FONT_SIZE,
        palette::SCORE_TEXT,
    );

    if state.is_over() {
        canvas.text(
            GAME_OVER_MESSAGE,
            GAME_OVER_POS.0,
            GAME_OVER_POS.1,
            HUD_FONT_SIZE,
            palette::GAME_OVER_TEXT,
        );
    }
}
