use crate::input::{InputFrame, InputState, Key};
use crate::time::{FramePacer, FrameTime};

/// Per-frame context passed to `core::App::on_frame`.
///
/// `time` describes the previous completed frame; use `time.dt` to scale
/// motion for the frame being built.
pub struct FrameCtx<'a> {
    pub input:       &'a InputState,
    pub input_frame: &'a InputFrame,
    pub time:        FrameTime,
    pub pacer:       &'a mut FramePacer,
}

impl<'a> FrameCtx<'a> {
    /// Seconds to scale per-frame motion by.
    pub fn delta_seconds(&self) -> f64 {
        self.time.dt
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.input.key_down(key)
    }

    /// Whether `key` went down since the previous frame.
    pub fn key_pressed(&self, key: Key) -> bool {
        self.input_frame.pressed(key)
    }
}
