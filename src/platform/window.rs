//! macroquad-backed window, input and drawing

use std::time::Duration;

use macroquad::prelude::*;

use super::{Action, KeyBindings, Platform};
use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use crate::renderer::Canvas;
use crate::renderer::palette::Rgba;
use crate::sim::Rect as SimRect;

/// Fixed-size window matching the playfield
pub fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_string(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[inline]
fn to_color(c: Rgba) -> Color {
    Color::new(c[0], c[1], c[2], c[3])
}

/// The live platform. Only constructed inside the macroquad main.
pub struct MacroquadPlatform {
    bindings: KeyBindings,
}

impl MacroquadPlatform {
    pub fn new(bindings: KeyBindings) -> Self {
        // Route the window close button through is_quit_requested()
        prevent_quit();
        Self { bindings }
    }
}

impl Canvas for MacroquadPlatform {
    fn clear(&mut self, color: Rgba) {
        clear_background(to_color(color));
    }

    fn fill_rect(&mut self, rect: SimRect, color: Rgba) {
        draw_rectangle(
            rect.pos.x,
            rect.pos.y,
            rect.width(),
            rect.height(),
            to_color(color),
        );
    }

    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Rgba) {
        // macroquad anchors text at the baseline
        let dims = measure_text(text, None, size as u16, 1.0);
        draw_text(text, x, y + dims.offset_y, size, to_color(color));
    }
}

impl Platform for MacroquadPlatform {
    fn frame_time(&self) -> f32 {
        get_frame_time()
    }

    fn is_pressed(&self, action: Action) -> bool {
        self.bindings.any_pressed(action, is_key_pressed)
    }

    fn should_close(&self) -> bool {
        is_quit_requested() || self.is_pressed(Action::Quit)
    }
}

/// Caps the loop rate by sleeping off the rest of each frame.
///
/// Browsers pace frames themselves, so the wasm build never sleeps.
pub struct FramePacer {
    target: f64,
    frame_start: f64,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self {
            target: 1.0 / fps.max(1) as f64,
            frame_start: get_time(),
        }
    }

    /// Call once per frame, before `next_frame().await`
    pub fn wait(&mut self) {
        let elapsed = get_time() - self.frame_start;
        if let Some(remaining) = remaining_frame_time(elapsed, self.target) {
            #[cfg(not(target_arch = "wasm32"))]
            std::thread::sleep(remaining);
            #[cfg(target_arch = "wasm32")]
            let _ = remaining;
        }
        self.frame_start = get_time();
    }
}

/// Time left in a frame of length `target` after `elapsed` seconds
pub fn remaining_frame_time(elapsed: f64, target: f64) -> Option<Duration> {
    if elapsed >= 0.0 && elapsed < target {
        Some(Duration::from_secs_f64(target - elapsed))
    } else {
        None
    }
}
