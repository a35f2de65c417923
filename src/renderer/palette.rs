//! Colors used by the scene, as linear [r, g, b, a] in 0..1

pub type Rgba = [f32; 4];

/// Convert 8-bit channels to an `Rgba`
pub const fn rgb8(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

pub const BACKGROUND: Rgba = rgb8(245, 245, 245);
pub const GROUND: Rgba = rgb8(80, 80, 80);
pub const PLAYER: Rgba = rgb8(0, 228, 48);
pub const OBSTACLE: Rgba = rgb8(230, 41, 55);
pub const SCORE_TEXT: Rgba = rgb8(0, 0, 0);
pub const GAME_OVER_TEXT: Rgba = rgb8(230, 41, 55);
