mod motion;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use pacer_engine::input::{InputEvent, KeyState};
use pacer_engine::logging::{init_logging, LoggingConfig};
use pacer_engine::time::PacerConfig;
use pacer_engine::window::{Headless, Runtime, RuntimeConfig, TOGGLE_CAP_KEY};

use motion::Motion;

/// Frame pacing demo.
///
/// Windowed mode: `F` toggles the frame cap, `W`/`S`/`A`/`D`/`Space`/`Ctrl`
/// accelerate, `Escape` quits.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Frame rate to aim for while capped.
    #[arg(long, default_value_t = pacer_engine::time::DEFAULT_TARGET_FPS)]
    fps: u32,

    /// Start with the frame cap off.
    #[arg(long)]
    uncapped: bool,

    /// Run without a window.
    #[arg(long)]
    headless: bool,

    /// Frames to run in headless mode.
    #[arg(long, default_value_t = 300)]
    frames: u64,

    /// Simulated work per frame, in milliseconds.
    #[arg(long, default_value_t = 0)]
    work_ms: u64,

    /// Headless mode: press the cap toggle key every N frames (0 = never).
    #[arg(long, default_value_t = 0)]
    toggle_every: u64,

    /// Log filter, `env_logger` syntax. Falls back to `RUST_LOG`, then "info".
    #[arg(long)]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig {
        env_filter: args.log.clone(),
        ..LoggingConfig::default()
    });

    let pacer = PacerConfig {
        target_fps: args.fps,
        capped: !args.uncapped,
    };
    let app = Motion::new(Duration::from_millis(args.work_ms));

    log::info!(
        "target {} fps, cap {}, {}",
        pacer.target_fps,
        if pacer.capped { "on" } else { "off" },
        if args.headless { "headless" } else { "windowed" },
    );

    if args.headless {
        run_headless(&args, pacer, app);
        Ok(())
    } else {
        Runtime::run(
            RuntimeConfig {
                title: "pacer demo".to_string(),
                ..RuntimeConfig::default()
            },
            pacer,
            app,
        )
    }
}

fn run_headless(args: &Args, pacer: PacerConfig, mut app: Motion) {
    let toggle_every = args.toggle_every;

    let driver = Headless::new(pacer)
        .frames(args.frames)
        .input(move |frame| toggle_script(frame, toggle_every))
        .run(&mut app);

    log::info!(
        "done: {} frames, last {} fps, position {:?}, velocity {:?}",
        driver.pacer().frame_index(),
        driver.pacer().fps(),
        app.position(),
        app.velocity(),
    );
}

/// Presses the toggle key on every `every`-th frame and releases it on the next.
fn toggle_script(frame: u64, every: u64) -> Vec<InputEvent> {
    if every == 0 || frame == 0 {
        return Vec::new();
    }

    let state = match frame % every {
        0 => KeyState::Pressed,
        1 => KeyState::Released,
        _ => return Vec::new(),
    };

    vec![InputEvent::Key {
        key: TOGGLE_CAP_KEY,
        state,
        repeat: false,
    }]
}
