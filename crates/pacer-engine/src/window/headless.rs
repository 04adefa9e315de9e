use crate::core::{App, AppControl};
use crate::input::InputEvent;
use crate::time::PacerConfig;

use super::driver::FrameDriver;

type InputSource = Box<dyn FnMut(u64) -> Vec<InputEvent>>;

/// Window-less host loop.
///
/// Runs the same per-frame sequence as `Runtime` until the app exits or the
/// frame limit is reached. Input is scripted: the source is called before each
/// frame with the number of frames completed so far.
pub struct Headless {
    driver: FrameDriver,
    max_frames: Option<u64>,
    input: Option<InputSource>,
}

impl Headless {
    pub fn new(config: PacerConfig) -> Self {
        Self::with_driver(FrameDriver::new(config))
    }

    pub fn with_driver(driver: FrameDriver) -> Self {
        Self {
            driver,
            max_frames: None,
            input: None,
        }
    }

    /// Stops after `frames` frames.
    pub fn frames(mut self, frames: u64) -> Self {
        self.max_frames = Some(frames);
        self
    }

    /// Sets the scripted input source.
    pub fn input<F>(mut self, source: F) -> Self
    where
        F: FnMut(u64) -> Vec<InputEvent> + 'static,
    {
        self.input = Some(Box::new(source));
        self
    }

    /// Runs the loop and returns the driver for inspection.
    pub fn run<A>(mut self, app: &mut A) -> FrameDriver
    where
        A: App + ?Sized,
    {
        loop {
            let done = self.driver.pacer().frame_index();
            if self.max_frames.is_some_and(|max| done >= max) {
                break;
            }

            if let Some(source) = self.input.as_mut() {
                for ev in source(done) {
                    self.driver.push_input(ev);
                }
            }

            let outcome = self.driver.drive(app);
            if let Some(stats) = outcome.stats {
                log::info!("{stats}");
            }

            if outcome.control == AppControl::Exit {
                log::debug!("app requested exit after {} frames", outcome.time.frame_index);
                break;
            }
        }

        self.driver
    }
}
