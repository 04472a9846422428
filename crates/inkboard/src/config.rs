use inkboard_engine::paint::Color;
use inkboard_engine::window::RuntimeConfig;

use crate::board::Board;
use crate::palette::Palette;

/// Per-program board settings.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    pub title: String,
    /// Initial window size in logical pixels.
    pub size: (f64, f64),
    pub background: Color,
    pub palette: Palette,
    /// Brush color before any selection.
    pub default_color: Color,
    /// Dot edge length in logical pixels.
    pub point_size: f32,
}

impl BoardConfig {
    /// Four-color board with a black default brush and 5 px dots.
    pub fn whiteboard() -> Self {
        Self {
            title: "inkboard whiteboard".to_string(),
            size: (800.0, 600.0),
            background: Color::WHITE,
            palette: Palette::whiteboard(),
            default_color: Color::BLACK,
            point_size: 5.0,
        }
    }

    /// Three-color board with a red default brush and 6 px dots.
    pub fn paintboard() -> Self {
        Self {
            title: "inkboard paintboard".to_string(),
            size: (800.0, 600.0),
            background: Color::WHITE,
            palette: Palette::paintboard(),
            default_color: Color::RED,
            point_size: 6.0,
        }
    }

    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: self.size.into(),
        }
    }

    /// A fresh board for this configuration.
    pub fn board(&self) -> Board {
        Board::new(self.palette.clone(), self.default_color)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::whiteboard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_differ_in_palette_and_dot_size() {
        let wb = BoardConfig::whiteboard();
        let pb = BoardConfig::paintboard();

        assert_eq!(wb.palette.len(), 4);
        assert_eq!(pb.palette.len(), 3);
        assert_eq!(wb.point_size, 5.0);
        assert_eq!(pb.point_size, 6.0);
        assert_eq!(wb.background, pb.background);
    }

    #[test]
    fn board_starts_with_default_color() {
        assert_eq!(BoardConfig::whiteboard().board().brush(), Color::BLACK);
        assert_eq!(BoardConfig::paintboard().board().brush(), Color::RED);
    }

    #[test]
    fn runtime_config_carries_title_and_size() {
        let rc = BoardConfig::paintboard().runtime_config();
        assert_eq!(rc.title, "inkboard paintboard");
        assert_eq!(rc.initial_size.width, 800.0);
        assert_eq!(rc.initial_size.height, 600.0);
    }
}
