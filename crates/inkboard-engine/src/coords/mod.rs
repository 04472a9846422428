//! Coordinate types shared across the runtime, renderers and board logic.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Normalized device coordinates (NDC) are produced by [`Viewport::screen_to_ndc`].

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
