//! inkboard: point-based freehand drawing on top of `inkboard-engine`.
//!
//! The board core (`board`, `palette`, `translate`, `canvas`) is free of
//! platform and GPU types so it can be driven and tested directly. `app`
//! and `triangle` wire it to the engine runtime.

pub mod app;
pub mod board;
pub mod canvas;
pub mod config;
pub mod palette;
pub mod translate;
pub mod triangle;

pub use board::{Board, Point, PointList};
pub use config::BoardConfig;
pub use palette::Palette;
pub use translate::BoardEvent;
