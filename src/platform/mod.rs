//! Platform abstraction layer
//!
//! Narrow capability interface between the game loop and the
//! window/input/clock library:
//! - Frame time
//! - Logical input actions
//! - Close requests
//! - 2D drawing (via `renderer::Canvas`)

pub mod input;
pub mod window;

pub use input::{Action, KeyBindings};
pub use window::{FramePacer, MacroquadPlatform, window_conf};

use crate::renderer::Canvas;

/// What the game loop needs from the outside world each frame
pub trait Platform: Canvas {
    /// Seconds elapsed since the previous frame
    fn frame_time(&self) -> f32;
    /// Action was pressed this frame (edge, not level)
    fn is_pressed(&self, action: Action) -> bool;
    /// User asked to close the window
    fn should_close(&self) -> bool;
}
