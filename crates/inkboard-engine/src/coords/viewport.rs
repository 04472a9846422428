use super::Vec2;

/// Viewport size in logical pixels.
///
/// Used as the conversion basis between window-space positions and NDC.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Maps a window-space position (top-left origin, +Y down) to NDC
    /// (center origin, +Y up, both axes in `[-1, 1]`).
    ///
    /// The position is clamped into `[0, width] x [0, height]` first, so the
    /// result always lies inside the NDC square. The viewport must be valid.
    #[inline]
    pub fn screen_to_ndc(self, screen: Vec2) -> Vec2 {
        debug_assert!(self.is_valid(), "screen_to_ndc on invalid viewport {self:?}");

        let sx = screen.x.clamp(0.0, self.width);
        let sy = screen.y.clamp(0.0, self.height);

        Vec2::new(
            (sx / self.width) * 2.0 - 1.0,
            ((self.height - sy) / self.height) * 2.0 - 1.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
