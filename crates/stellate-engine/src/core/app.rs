use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// What the runtime should do after a callback.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application driven by [`Runtime`](crate::window::Runtime).
pub trait App {
    /// Raw window events, after the runtime has folded them into input state.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per redraw.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
