//! Platform-agnostic input.
//!
//! The runtime translates winit events into [`InputEvent`]s; applications
//! read held state from [`InputState`] and per-frame transitions from
//! [`InputFrame`].

mod frame;
mod state;
mod types;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseButton, ButtonState};
