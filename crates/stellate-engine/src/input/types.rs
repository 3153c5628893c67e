/// Keys the runtime maps by name. Anything else arrives as `Unknown`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    /// `=` / `+` on the main row.
    Equal,
    Minus,

    R,
    W,

    /// Platform scancode not represented above (0 when unidentifiable).
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Input event in logical pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Focused(bool),
    ModifiersChanged(Modifiers),
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    PointerButton { button: MouseButton, state: ButtonState },
    /// Vertical wheel motion in lines; pixel deltas are converted upstream.
    Wheel { lines: f32 },
    Key { key: Key, state: KeyState, repeat: bool },
}
