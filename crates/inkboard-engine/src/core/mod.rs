//! Core engine-facing contracts.
//!
//! Defines the interface between the runtime (platform loop) and the
//! programs built on it, plus the contexts handed to their callbacks.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, StartCtx, WindowCtx};
pub(crate) use ctx::logical_viewport;
