use std::fmt;
use std::time::{Duration, Instant};

use super::frame_pacer::FrameTime;

/// Overlay numbers for a frame: run time, frame rate and frame time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    /// Seconds since the reporter was created.
    pub elapsed_secs: f64,
    pub fps: u32,
    /// Duration of the reported frame, in seconds.
    pub frame_secs: f64,
}

impl FrameStats {
    pub fn new(elapsed: Duration, time: &FrameTime) -> Self {
        Self {
            elapsed_secs: elapsed.as_secs_f64(),
            fps: time.fps,
            frame_secs: time.dt,
        }
    }

    /// Overlay lines, top to bottom.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("{:.2} sec", self.elapsed_secs),
            format!("{} fps", self.fps),
            format!("{:.4}s frametime", self.frame_secs),
        ]
    }
}

impl fmt::Display for FrameStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [elapsed, fps, frame] = self.lines();
        write!(f, "{elapsed} | {fps} | {frame}")
    }
}

/// Emits `FrameStats` at most once per interval.
#[derive(Debug, Clone)]
pub struct StatsReporter {
    start: Instant,
    last: Instant,
    interval: Duration,
}

impl StatsReporter {
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self::starting_at(now, interval)
    }

    /// Creates a reporter whose clock starts at `start`.
    pub fn starting_at(start: Instant, interval: Duration) -> Self {
        Self {
            start,
            last: start,
            interval,
        }
    }

    pub fn poll(&mut self, time: &FrameTime) -> Option<FrameStats> {
        self.poll_at(Instant::now(), time)
    }

    /// Returns stats for `time` if at least one interval has passed since the last report.
    pub fn poll_at(&mut self, now: Instant, time: &FrameTime) -> Option<FrameStats> {
        if now.saturating_duration_since(self.last) < self.interval {
            return None;
        }

        self.last = now;
        Some(FrameStats::new(now.saturating_duration_since(self.start), time))
    }
}

impl Default for StatsReporter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}
