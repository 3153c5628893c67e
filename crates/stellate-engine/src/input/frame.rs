use std::collections::HashSet;

use super::types::{InputEvent, Key, MouseButton};

/// Transitions recorded during one frame. Cleared by the runtime after
/// `on_frame` returns.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,
    /// Keys pressed this frame, including auto-repeat.
    pub keys_pressed: HashSet<Key>,
    pub keys_released: HashSet<Key>,
    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,
    /// Accumulated wheel motion in lines.
    pub wheel_lines: f32,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.wheel_lines = 0.0;
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }
}
