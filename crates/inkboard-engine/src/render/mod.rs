//! GPU rendering subsystem.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record passes
//! into the frame's encoder. Pipelines are built once at startup so that a
//! bad shader is reported before the first frame.
//!
//! Convention:
//! - vertex data is already in NDC; shaders pass it through
//! - sizes given in logical pixels are converted with a viewport uniform

mod ctx;
pub mod points;
pub mod shader;
pub mod triangle;

pub use ctx::{RenderCtx, RenderTarget};
pub use points::{PointRenderer, PointVertex};
pub use shader::{ShaderError, ShaderStage};
pub use triangle::TriangleRenderer;
