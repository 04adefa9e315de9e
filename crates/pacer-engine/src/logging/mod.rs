//! Logging utilities.
//!
//! This module centralizes logger initialization and the log line format.
//! Every line starts with a local-time, nanosecond-precision timestamp:
//!
//! ```text
//! [2024-01-05 13:04:02.123456789][INFO] message
//! ```

mod init;
mod timestamp;

pub use init::{format_line, init_logging, level_style, LogTarget, LoggingConfig};
pub use timestamp::{format_timestamp, timestamp};
