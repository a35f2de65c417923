//! Logical input actions and their keyboard bindings

use macroquad::prelude::KeyCode;

/// Actions the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Jump,
    Restart,
    Quit,
}

/// Keyboard keys bound to each action
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub jump: Vec<KeyCode>,
    pub restart: Vec<KeyCode>,
    pub quit: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            jump: vec![KeyCode::Space, KeyCode::Up],
            restart: vec![KeyCode::R],
            quit: vec![KeyCode::Escape],
        }
    }
}

impl KeyBindings {
    pub fn keys(&self, action: Action) -> &[KeyCode] {
        match action {
            Action::Jump => &self.jump,
            Action::Restart => &self.restart,
            Action::Quit => &self.quit,
        }
    }

    /// Whether any key bound to `action` satisfies `pressed`
    pub fn any_pressed(&self, action: Action, pressed: impl Fn(KeyCode) -> bool) -> bool {
        self.keys(action).iter().any(|&key| pressed(key))
    }
}
