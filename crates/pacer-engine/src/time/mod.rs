//! Time subsystem.
//!
//! Provides frame pacing and frame statistics without coupling to the runtime.
//! Intended usage:
//! - one `FramePacer` per render loop
//! - call `end_frame()` once per completed frame, after presenting
//! - read `delta_seconds()` to scale per-frame motion

mod frame_pacer;
mod stats;

pub use frame_pacer::{FramePacer, FrameTime, PacerConfig, DEFAULT_TARGET_FPS};
pub use stats::{FrameStats, StatsReporter};
