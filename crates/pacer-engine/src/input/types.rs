/// Keyboard key identifier.
///
/// Only the keys the host loop and demos bind are named.
/// For other keys, use `Key::Unknown(u32)` with a stable platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Space,
    Control,

    // Frame cap toggle
    F,

    // Movement
    W,
    A,
    S,
    D,

    /// Platform-dependent key not yet represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input event.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Window focus changed.
    Focused(bool),

    /// Key transition. `repeat` is set for OS auto-repeat while held.
    Key {
        key: Key,
        state: KeyState,
        repeat: bool,
    },
}
