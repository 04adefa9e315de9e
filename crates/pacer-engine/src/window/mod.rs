//! Host loops.
//!
//! `Runtime` owns a `winit` EventLoop and a single window; `Headless` runs the
//! same per-frame sequence without a window. Both drive a `core::App` through
//! `FrameDriver`, which handles the cap toggle key, pacing and stats reporting.

mod driver;
mod headless;
mod runtime;

pub use driver::{FrameDriver, FrameOutcome, TOGGLE_CAP_KEY};
pub use headless::Headless;
pub use runtime::{Runtime, RuntimeConfig};
