//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! Runtime code is responsible for translating platform events into `InputEvent`s.
//!
//! Hosts that act on a key press (such as toggling the frame cap) should read
//! `InputFrame::keys_pressed`, which records only released-to-pressed edges, or
//! feed a polled key level through an `EdgeTrigger`.

mod edge;
mod frame;
mod state;
mod types;

pub use edge::EdgeTrigger;
pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
