//! Paint model shared between board logic and renderers.
//!
//! Only opaque solid colors are needed; alpha is carried for clear colors.

pub mod color;

pub use color::Color;
