//! Core engine-facing contracts.
//!
//! This module defines the interface between the host loop (windowed or
//! headless) and the application it drives once per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
