use std::collections::HashSet;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState};

/// Current input state for a single window.
///
/// Holds "is down" information. Per-frame transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match &ev {
            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Avoids stuck keys when focus changes mid-press.
                    self.clear();
                }
            }

            InputEvent::Key { key, state, .. } => self.apply_key(frame, *key, *state),
        }

        frame.push_event(ev);
    }

    /// Records a key transition. A press counts once until the key is released,
    /// so auto-repeat while held never produces a second edge.
    pub fn apply_key(&mut self, frame: &mut InputFrame, key: Key, state: KeyState) {
        match state {
            KeyState::Pressed => {
                if self.keys_down.insert(key) {
                    frame.keys_pressed.insert(key);
                }
            }
            KeyState::Released => {
                if self.keys_down.remove(&key) {
                    frame.keys_released.insert(key);
                }
            }
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Forgets all held keys. The next press of any key is a new edge.
    pub fn clear(&mut self) {
        self.keys_down.clear();
    }
}
