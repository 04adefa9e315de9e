use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by host loop users.
pub trait App {
    /// Called once per frame, before the frame is paced.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_>) -> AppControl;

    /// Called after frame capping was toggled by the host.
    fn on_frame_cap_toggled(&mut self, capped: bool) {
        let _ = capped;
    }
}
