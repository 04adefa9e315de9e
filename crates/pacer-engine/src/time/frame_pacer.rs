use std::thread;
use std::time::{Duration, Instant};

/// Target frame rate used when none is configured.
pub const DEFAULT_TARGET_FPS: u32 = 60;

const SECOND: Duration = Duration::from_secs(1);

/// Smallest duration the pacer ever stores.
///
/// `fps()` divides by the last frame duration, so it must never be zero.
const MIN_DURATION: Duration = Duration::from_nanos(1);

/// Pacer configuration.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PacerConfig {
    /// Frame rate to aim for while capping is enabled.
    pub target_fps: u32,

    /// Whether `end_frame` sleeps to hold the target rate.
    pub capped: bool,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            capped: true,
        }
    }
}

/// Frame timing snapshot returned by `FramePacer::end_frame`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    /// Duration of the completed frame, in seconds.
    pub dt: f64,

    /// Instantaneous frame rate derived from `frame_duration`.
    pub fps: u32,

    /// Duration of the completed frame, including any capping sleep.
    pub frame_duration: Duration,

    /// Monotonic frame counter. The first completed frame is 1.
    pub frame_index: u64,

    /// Whether the frame was capped.
    pub capped: bool,
}

/// Frame pacer.
///
/// Measures the wall-clock duration of each loop iteration and, while capping
/// is enabled, sleeps at the end of a frame that finished early so the loop
/// does not run faster than the target rate.
///
/// Frames that overrun the budget are not made up on later frames: the sleep is
/// skipped and the measured (longer) duration is reported as is.
///
/// The pacer is owned by a single loop and holds no synchronization.
#[derive(Debug, Clone)]
pub struct FramePacer {
    capped: bool,
    target_fps: u32,
    target_duration: Duration,
    last_frame_duration: Duration,
    prev_end: Instant,
    frame_index: u64,
}

impl FramePacer {
    /// Creates a capped pacer targeting `DEFAULT_TARGET_FPS`.
    pub fn new() -> Self {
        Self::with_config(PacerConfig::default())
    }

    /// Creates a pacer from `config`.
    pub fn with_config(config: PacerConfig) -> Self {
        let mut pacer = Self {
            capped: true,
            target_fps: 0,
            target_duration: MIN_DURATION,
            // Seeded so `fps()` is finite before the first frame ends.
            last_frame_duration: MIN_DURATION,
            prev_end: Instant::now(),
            frame_index: 0,
        };

        pacer.set_target_fps(config.target_fps);
        pacer.capped = config.capped;
        pacer
    }

    /// Sets the frame rate to aim for and enables capping.
    ///
    /// One frame per second is added before computing the budget: capping at the
    /// literal rate lands consistently below it once sleep overshoot and loop
    /// overhead are counted.
    pub fn set_target_fps(&mut self, fps: u32) {
        self.target_fps = fps;
        self.target_duration = (SECOND / fps.saturating_add(1)).max(MIN_DURATION);
        self.capped = true;
    }

    /// Marks the end of the current frame.
    ///
    /// Blocks for at most `target_duration()` when capping is enabled and the
    /// frame finished early. Never blocks otherwise.
    pub fn end_frame(&mut self) -> FrameTime {
        let end = Instant::now();
        self.last_frame_duration = measure(self.prev_end, end);

        if self.capped {
            if let Some(remaining) = self.target_duration.checked_sub(self.last_frame_duration) {
                if !remaining.is_zero() {
                    thread::sleep(remaining);
                }
            }
            self.last_frame_duration = measure(self.prev_end, Instant::now());
        }

        // Fresh read: the baseline for the next frame is after the sleep.
        self.prev_end = Instant::now();
        self.frame_index = self.frame_index.wrapping_add(1);

        self.frame_time()
    }

    /// Flips frame capping on or off.
    ///
    /// Hosts should call this once per key press edge, not once per poll while
    /// the key is held.
    pub fn toggle_frame_cap(&mut self) {
        self.capped = !self.capped;
        if self.capped {
            log::debug!("cap frames");
        } else {
            log::debug!("uncap frames");
        }
    }

    /// Enables or disables capping without touching the target rate.
    pub fn set_capped(&mut self, capped: bool) {
        self.capped = capped;
    }

    /// Re-baselines the next measurement at the current instant.
    ///
    /// Useful when resuming after the loop was suspended, so the pause does not
    /// show up as one very long frame.
    pub fn reset(&mut self) {
        self.prev_end = Instant::now();
    }

    /// Instantaneous frame rate of the last completed frame.
    ///
    /// Not smoothed; consecutive values can jitter.
    pub fn fps(&self) -> u32 {
        let fps = SECOND.as_nanos() / self.last_frame_duration.as_nanos();
        u32::try_from(fps).unwrap_or(u32::MAX)
    }

    /// Duration of the last completed frame, in seconds.
    pub fn delta_seconds(&self) -> f64 {
        self.last_frame_duration.as_secs_f64()
    }

    pub fn last_frame_duration(&self) -> Duration {
        self.last_frame_duration
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    /// Per-frame budget while capping: `1s / (target_fps + 1)`.
    pub fn target_duration(&self) -> Duration {
        self.target_duration
    }

    pub fn is_capped(&self) -> bool {
        self.capped
    }

    /// Number of frames completed so far.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Snapshot of the last completed frame.
    pub fn frame_time(&self) -> FrameTime {
        FrameTime {
            dt: self.delta_seconds(),
            fps: self.fps(),
            frame_duration: self.last_frame_duration,
            frame_index: self.frame_index,
            capped: self.capped,
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new()
    }
}

fn measure(since: Instant, now: Instant) -> Duration {
    now.saturating_duration_since(since).max(MIN_DURATION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uncapped() -> FramePacer {
        FramePacer::with_config(PacerConfig {
            target_fps: 60,
            capped: false,
        })
    }

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn new_is_capped_at_default_rate() {
        let pacer = FramePacer::new();
        assert!(pacer.is_capped());
        assert_eq!(pacer.target_fps(), DEFAULT_TARGET_FPS);
        assert_eq!(pacer.target_duration(), SECOND / 61);
        assert_eq!(pacer.frame_index(), 0);
    }

    #[test]
    fn fps_before_first_frame_is_finite() {
        let pacer = FramePacer::new();
        assert_eq!(pacer.fps(), 1_000_000_000);
        assert_eq!(pacer.delta_seconds(), 1e-9);
    }

    #[test]
    fn config_can_start_uncapped() {
        let pacer = FramePacer::with_config(PacerConfig {
            target_fps: 144,
            capped: false,
        });
        assert!(!pacer.is_capped());
        assert_eq!(pacer.target_fps(), 144);
        assert_eq!(pacer.target_duration(), SECOND / 145);
    }

    // ── set_target_fps ────────────────────────────────────────────────────

    #[test]
    fn target_duration_adds_one_frame() {
        let mut pacer = FramePacer::new();
        for fps in [0u32, 1, 29, 30, 59, 60, 120, 240, 1000] {
            pacer.set_target_fps(fps);
            assert_eq!(pacer.target_duration(), SECOND / (fps + 1), "fps = {fps}");
        }
    }

    #[test]
    fn zero_fps_budgets_one_second() {
        let mut pacer = FramePacer::new();
        pacer.set_target_fps(0);
        assert_eq!(pacer.target_duration(), SECOND);
    }

    #[test]
    fn huge_fps_keeps_non_zero_budget() {
        let mut pacer = FramePacer::new();
        pacer.set_target_fps(u32::MAX);
        assert_eq!(pacer.target_duration(), MIN_DURATION);
    }

    #[test]
    fn set_target_fps_enables_capping() {
        let mut pacer = FramePacer::new();
        pacer.toggle_frame_cap();
        assert!(!pacer.is_capped());

        pacer.set_target_fps(30);
        assert!(pacer.is_capped());
    }

    // ── toggle ────────────────────────────────────────────────────────────

    #[test]
    fn toggle_twice_restores_state() {
        let mut pacer = FramePacer::new();
        let before = pacer.is_capped();
        pacer.toggle_frame_cap();
        assert_ne!(pacer.is_capped(), before);
        pacer.toggle_frame_cap();
        assert_eq!(pacer.is_capped(), before);
    }

    #[test]
    fn toggle_keeps_target() {
        let mut pacer = FramePacer::new();
        pacer.set_target_fps(75);
        pacer.toggle_frame_cap();
        assert_eq!(pacer.target_fps(), 75);
        assert_eq!(pacer.target_duration(), SECOND / 76);
    }

    // ── end_frame ─────────────────────────────────────────────────────────

    // ── set_capped / reset ────────────────────────────────────────────────

    #[test]
    fn set_capped_keeps_target() {
        let mut pacer = FramePacer::new();
        pacer.set_target_fps(30);

        pacer.set_capped(false);
        assert!(!pacer.is_capped());
        assert_eq!(pacer.target_duration(), SECOND / 31);

        pacer.set_capped(true);
        assert!(pacer.is_capped());
        assert_eq!(pacer.target_duration(), SECOND / 31);
        assert_eq!(pacer.target_fps(), 30);
    }

    #[test]
    fn reset_keeps_last_duration() {
        let mut pacer = uncapped();
        pacer.end_frame();
        let before = pacer.last_frame_duration();

        pacer.reset();
        assert_eq!(pacer.last_frame_duration(), before);
        assert_eq!(pacer.frame_index(), 1);
    }

    #[test]
    fn reset_excludes_pause_from_next_frame() {
        let mut pacer = uncapped();
        pacer.end_frame();

        std::thread::sleep(Duration::from_millis(100));
        pacer.reset();
        pacer.end_frame();

        assert!(pacer.delta_seconds() < 0.050, "dt {}", pacer.delta_seconds());
    }

    #[test]
    fn pause_without_reset_is_one_long_frame() {
        let mut pacer = uncapped();
        pacer.end_frame();

        std::thread::sleep(Duration::from_millis(100));
        pacer.end_frame();

        assert!(pacer.delta_seconds() >= 0.100);
    }

    #[test]
    fn end_frame_counts_frames() {
        let mut pacer = uncapped();
        let first = pacer.end_frame();
        let second = pacer.end_frame();
        assert_eq!(first.frame_index, 1);
        assert_eq!(second.frame_index, 2);
        assert_eq!(pacer.frame_index(), 2);
    }

    #[test]
    fn end_frame_snapshot_matches_accessors() {
        let mut pacer = uncapped();
        let ft = pacer.end_frame();
        assert_eq!(ft.frame_duration, pacer.last_frame_duration());
        assert_eq!(ft.dt, pacer.delta_seconds());
        assert_eq!(ft.fps, pacer.fps());
        assert!(!ft.capped);
    }

    #[test]
    fn measured_duration_is_never_zero() {
        let mut pacer = uncapped();
        for _ in 0..1000 {
            pacer.end_frame();
            assert!(pacer.last_frame_duration() >= MIN_DURATION);
        }
    }

    #[test]
    fn measure_saturates_backwards_clock() {
        let later = Instant::now();
        let earlier = later - Duration::from_millis(5);
        assert_eq!(measure(later, earlier), MIN_DURATION);
        assert_eq!(measure(earlier, later), Duration::from_millis(5));
    }
}
