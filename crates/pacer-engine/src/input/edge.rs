/// Rising-edge latch for a polled key level.
///
/// `update` returns `true` only on the poll where the level goes from released
/// to pressed; holding the key keeps returning `false` until it is released.
///
/// The hosts in `window` receive key events and get edges from `InputState`.
/// This is for hosts outside this crate that poll a key level each frame
/// (e.g. a GLFW-style `get_key`) and feed the result to `toggle_frame_cap`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct EdgeTrigger {
    held: bool,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, pressed: bool) -> bool {
        let edge = pressed && !self.held;
        self.held = pressed;
        edge
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}
