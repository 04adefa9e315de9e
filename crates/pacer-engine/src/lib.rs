//! Pacer engine crate.
//!
//! Frame pacing for real-time loops, nanosecond log timestamps, and a thin
//! host runtime (windowed or headless) that drives an application once per frame.

pub mod time;
pub mod input;
pub mod core;
pub mod window;

pub mod logging;
