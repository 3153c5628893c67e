use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{ButtonState, InputEvent, Key, KeyState, Modifiers, MouseButton};

/// Held input state for one window.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,
    pub focused: bool,
    /// Pointer position in logical pixels; `None` once the cursor leaves.
    pub pointer_pos: Option<(f32, f32)>,
    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Folds `ev` into the held state and records transitions in `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(focused) => {
                self.focused = *focused;
                if !*focused {
                    // Releases never arrive for presses made before focus moved away.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }
            InputEvent::ModifiersChanged(m) => self.modifiers = *m,
            InputEvent::PointerMoved { x, y } => self.pointer_pos = Some((*x, *y)),
            InputEvent::PointerLeft => self.pointer_pos = None,
            InputEvent::PointerButton { button, state } => match state {
                ButtonState::Pressed => {
                    if self.buttons_down.insert(*button) {
                        frame.buttons_pressed.insert(*button);
                    }
                }
                ButtonState::Released => {
                    if self.buttons_down.remove(button) {
                        frame.buttons_released.insert(*button);
                    }
                }
            },
            InputEvent::Wheel { lines } => frame.wheel_lines += *lines,
            InputEvent::Key { key, state, repeat } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(*key) || *repeat {
                        frame.keys_pressed.insert(*key);
                    }
                }
                KeyState::Released => {
                    if self.keys_down.remove(key) {
                        frame.keys_released.insert(*key);
                    }
                }
            },
        }

        frame.events.push(ev);
    }

    #[inline]
    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    #[inline]
    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}
