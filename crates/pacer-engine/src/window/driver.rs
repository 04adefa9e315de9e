use std::time::Duration;

use crate::core::{App, AppControl, FrameCtx};
use crate::input::{InputEvent, InputFrame, InputState, Key};
use crate::time::{FramePacer, FrameStats, FrameTime, PacerConfig, StatsReporter};

/// Key that flips frame capping.
pub const TOGGLE_CAP_KEY: Key = Key::F;

/// Result of driving one frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameOutcome {
    pub control: AppControl,
    pub time: FrameTime,
    /// Set at most once per report interval.
    pub stats: Option<FrameStats>,
}

/// Per-loop frame state shared by the windowed and headless hosts.
///
/// One call to `drive` is one frame:
/// 1. handle host keys pressed since the last frame (`F` toggles capping,
///    `Escape` exits)
/// 2. call the app
/// 3. clear per-frame input deltas
/// 4. end the frame on the pacer (this may sleep)
#[derive(Debug)]
pub struct FrameDriver {
    pacer: FramePacer,
    input_state: InputState,
    input_frame: InputFrame,
    reporter: StatsReporter,
}

impl FrameDriver {
    pub fn new(config: PacerConfig) -> Self {
        Self::with_report_interval(config, Duration::from_secs(1))
    }

    pub fn with_report_interval(config: PacerConfig, interval: Duration) -> Self {
        Self {
            pacer: FramePacer::with_config(config),
            input_state: InputState::default(),
            input_frame: InputFrame::default(),
            reporter: StatsReporter::new(interval),
        }
    }

    pub fn pacer(&self) -> &FramePacer {
        &self.pacer
    }

    pub fn pacer_mut(&mut self) -> &mut FramePacer {
        &mut self.pacer
    }

    pub fn input(&self) -> &InputState {
        &self.input_state
    }

    /// Queues an input event for the next frame.
    pub fn push_input(&mut self, ev: InputEvent) {
        self.input_state.apply_event(&mut self.input_frame, ev);
    }

    pub fn drive<A>(&mut self, app: &mut A) -> FrameOutcome
    where
        A: App + ?Sized,
    {
        let mut control = AppControl::Continue;

        if self.input_frame.pressed(Key::Escape) {
            control = AppControl::Exit;
        }

        if self.input_frame.pressed(TOGGLE_CAP_KEY) {
            self.pacer.toggle_frame_cap();
            let capped = self.pacer.is_capped();
            log::info!("frame cap {}", if capped { "on" } else { "off" });
            app.on_frame_cap_toggled(capped);
        }

        if control == AppControl::Continue {
            let mut ctx = FrameCtx {
                input: &self.input_state,
                input_frame: &self.input_frame,
                time: self.pacer.frame_time(),
                pacer: &mut self.pacer,
            };
            control = app.on_frame(&mut ctx);
        }

        // Clear per-frame deltas after the frame is consumed.
        self.input_frame.clear();

        let time = self.pacer.end_frame();
        let stats = self.reporter.poll(&time);

        FrameOutcome { control, time, stats }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyState;

    #[derive(Default)]
    struct Recorder {
        frames: u32,
        toggles: Vec<bool>,
        saw_f_pressed: bool,
    }

    impl App for Recorder {
        fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
            self.frames += 1;
            self.saw_f_pressed |= ctx.key_pressed(Key::F);
            AppControl::Continue
        }

        fn on_frame_cap_toggled(&mut self, capped: bool) {
            self.toggles.push(capped);
        }
    }

    fn uncapped() -> PacerConfig {
        PacerConfig {
            target_fps: 60,
            capped: false,
        }
    }

    fn press(key: Key) -> InputEvent {
        InputEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }

    #[test]
    fn toggle_key_flips_cap_once_per_press() {
        let mut driver = FrameDriver::new(uncapped());
        let mut app = Recorder::default();

        driver.push_input(press(Key::F));
        driver.drive(&mut app);
        assert!(driver.pacer().is_capped());
        assert!(app.saw_f_pressed);

        // Held key repeating: no further toggles.
        driver.pacer_mut().set_capped(false);
        driver.push_input(InputEvent::Key {
            key: Key::F,
            state: KeyState::Pressed,
            repeat: true,
        });
        driver.drive(&mut app);
        assert!(!driver.pacer().is_capped());

        assert_eq!(app.toggles, [true]);
    }

    #[test]
    fn escape_exits_without_calling_app() {
        let mut driver = FrameDriver::new(uncapped());
        let mut app = Recorder::default();

        driver.push_input(press(Key::Escape));
        let outcome = driver.drive(&mut app);
        assert_eq!(outcome.control, AppControl::Exit);
        assert_eq!(app.frames, 0);
    }

    #[test]
    fn drive_ends_one_frame() {
        let mut driver = FrameDriver::new(uncapped());
        let mut app = Recorder::default();

        let a = driver.drive(&mut app);
        let b = driver.drive(&mut app);
        assert_eq!(a.time.frame_index, 1);
        assert_eq!(b.time.frame_index, 2);
        assert_eq!(app.frames, 2);
    }

    #[test]
    fn stats_follow_report_interval() {
        let mut driver = FrameDriver::with_report_interval(uncapped(), Duration::ZERO);
        let mut app = Recorder::default();

        let outcome = driver.drive(&mut app);
        let stats = outcome.stats.unwrap();
        assert_eq!(stats.fps, outcome.time.fps);
    }
}
