use std::fmt;
use std::io::Write;
use std::sync::Once;

use env_logger::WriteStyle;
use env_logger::fmt::style::{AnsiColor, Style};
use log::Level;

use super::timestamp::timestamp;

/// Stream the logger writes to.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LogTarget {
    #[default]
    Stdout,
    Stderr,
}

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "pacer_engine=debug").
///
/// `write_style` controls ANSI coloring of the level tag. `Auto` colors only
/// when the target is a terminal.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: WriteStyle,
    pub target: LogTarget,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: WriteStyle::Auto,
            target: LogTarget::Stdout,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        let write_style = config.write_style;
        builder.write_style(write_style);
        builder.target(match config.target {
            LogTarget::Stdout => env_logger::Target::Stdout,
            LogTarget::Stderr => env_logger::Target::Stderr,
        });

        // One write per line so lines from different threads do not interleave.
        builder.format(move |buf, record| {
            let level = record.level();
            let style = level_style(level, write_style);
            let line = format_line(&timestamp(), level, style, record.args());
            writeln!(buf, "{line}")
        });

        builder.init();

        log::debug!("logging initialized");
    });
}

/// Formats one log line: timestamp, level tag, message.
///
/// `style` wraps the level tag; a plain `Style` adds no escape sequences.
pub fn format_line(
    timestamp: &str,
    level: Level,
    style: Style,
    args: &fmt::Arguments<'_>,
) -> String {
    format!("{timestamp}{style}[{}]{style:#} {args}", level_tag(level))
}

/// Level tag style for `write_style`.
///
/// `Auto` gets the colored style too; env_logger strips it when the target is
/// not a terminal.
pub fn level_style(level: Level, write_style: WriteStyle) -> Style {
    if matches!(write_style, WriteStyle::Never) {
        return Style::new();
    }

    let color = match level {
        Level::Error => AnsiColor::Red,
        Level::Warn => AnsiColor::Yellow,
        Level::Info => AnsiColor::Blue,
        Level::Debug | Level::Trace => AnsiColor::BrightBlack,
    };

    let style = Style::new().fg_color(Some(color.into()));
    if level == Level::Error {
        style.bold()
    } else {
        style
    }
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR",
        Level::Warn => "WARN",
        Level::Info => "INFO",
        Level::Debug => "DBG",
        Level::Trace => "TRACE",
    }
}
