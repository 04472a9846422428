//! Single-window winit + wgpu runtime for the inkboard programs.
//!
//! An application implements [`core::App`] and hands it to
//! [`window::Runtime::run`]. The runtime owns the window, the GPU
//! ([`device::Gpu`]), input state and the frame clock, and calls back into
//! the app between frames.

pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod time;
pub mod window;
