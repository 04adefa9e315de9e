use std::thread;
use std::time::Duration;

use pacer_engine::core::{App, AppControl, FrameCtx};
use pacer_engine::input::Key;

/// Acceleration per second squared.
const ACCELERATION: f64 = 1.0;

/// A point flown around with the movement keys.
///
/// Velocity and position are integrated with the frame delta, so motion speed
/// does not depend on the frame rate.
#[derive(Debug, Default)]
pub struct Motion {
    position: [f64; 3],
    velocity: [f64; 3],
    work: Duration,
}

impl Motion {
    pub fn new(work: Duration) -> Self {
        Self {
            work,
            ..Self::default()
        }
    }

    pub fn position(&self) -> [f64; 3] {
        self.position
    }

    pub fn velocity(&self) -> [f64; 3] {
        self.velocity
    }

    fn integrate(&mut self, dt: f64, thrust: [f64; 3]) {
        for axis in 0..3 {
            self.velocity[axis] += thrust[axis] * ACCELERATION * dt;
            self.position[axis] += self.velocity[axis] * dt;
        }
    }
}

impl App for Motion {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl {
        let axis = |pos: Key, neg: Key| -> f64 {
            f64::from(u8::from(ctx.key_down(pos))) - f64::from(u8::from(ctx.key_down(neg)))
        };

        // x: right, y: up, z: forward
        let thrust = [
            axis(Key::D, Key::A),
            axis(Key::Space, Key::Control),
            axis(Key::W, Key::S),
        ];
        self.integrate(ctx.delta_seconds(), thrust);

        if !self.work.is_zero() {
            thread::sleep(self.work);
        }

        AppControl::Continue
    }

    fn on_frame_cap_toggled(&mut self, capped: bool) {
        log::debug!("motion sees cap {}", if capped { "on" } else { "off" });
    }
}
