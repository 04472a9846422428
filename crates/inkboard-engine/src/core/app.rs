use crate::coords::Viewport;
use crate::input::{InputEvent, InputState};

use super::ctx::{FrameCtx, StartCtx};

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the programs.
///
/// All callbacks run on the event-loop thread, one at a time. Input and
/// resize callbacks are delivered between frames, never during `on_frame`.
pub trait App {
    /// Called once, after the window and GPU exist and before the first frame.
    ///
    /// Returning an error aborts startup; `Runtime::run` returns it.
    fn on_start(&mut self, ctx: &StartCtx<'_>) -> anyhow::Result<()> {
        let _ = ctx;
        Ok(())
    }

    /// Called with the initial drawable size and whenever it changes
    /// (logical pixels). A minimized window reports a zero-sized viewport.
    fn on_resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// Called for every input event after `state` has been updated with it.
    fn on_input(&mut self, event: &InputEvent, state: &InputState) -> AppControl {
        let _ = (event, state);
        AppControl::Continue
    }

    /// Called once per rendered frame.
    ///
    /// An error ends the run; `Runtime::run` returns it.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> anyhow::Result<AppControl>;
}
