//! wgpu device and window surface.
//!
//! [`Gpu`] is created once per window by the runtime and handed to the app
//! through `StartCtx` and `FrameCtx`. Surface policy (format, alpha mode,
//! error recovery) lives in `surface`.

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
