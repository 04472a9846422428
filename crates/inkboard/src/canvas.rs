//! Per-frame drawing of the board's point list.

use inkboard_engine::render::{PointRenderer, RenderCtx, RenderTarget};

use crate::board::{Board, Point};

/// Something that can draw a whole point list in one call.
pub trait PointCanvas {
    /// Draws every point. Never called with an empty slice.
    fn draw_points(&mut self, points: &[Point]);
}

/// Redraws the board from scratch.
///
/// The background has already been cleared by the caller. Returns `true`
/// when a draw was issued; an empty board issues none.
pub fn render_frame<C>(board: &Board, canvas: &mut C) -> bool
where
    C: PointCanvas + ?Sized,
{
    let points = board.points();
    if points.is_empty() {
        return false;
    }
    log::trace!("drawing {} points", points.len());
    canvas.draw_points(points.as_slice());
    true
}

/// [`PointCanvas`] over the GPU point renderer for the frame being recorded.
pub struct GpuCanvas<'a, 'c, 't> {
    pub renderer: &'a mut PointRenderer,
    pub ctx: &'a RenderCtx<'c>,
    pub target: &'a mut RenderTarget<'t>,
}

impl PointCanvas for GpuCanvas<'_, '_, '_> {
    fn draw_points(&mut self, points: &[Point]) {
        self.renderer
            .render(self.ctx, self.target, bytemuck::cast_slice(points));
    }
}

#[cfg(test)]
mod tests {
    use inkboard_engine::paint::Color;

    use super::*;
    use crate::palette::Palette;

    #[derive(Default)]
    struct Recorder {
        draws: Vec<usize>,
    }

    impl PointCanvas for Recorder {
        fn draw_points(&mut self, points: &[Point]) {
            self.draws.push(points.len());
        }
    }

    #[test]
    fn empty_board_issues_no_draw() {
        let board = Board::new(Palette::whiteboard(), Color::BLACK);
        let mut rec = Recorder::default();

        assert!(!render_frame(&board, &mut rec));
        assert!(rec.draws.is_empty());
    }

    #[test]
    fn whole_list_in_one_draw_per_frame() {
        let mut board = Board::new(Palette::whiteboard(), Color::BLACK);
        board.on_button_press(1.0, 1.0);
        board.on_cursor_move(2.0, 2.0);
        board.on_cursor_move(3.0, 3.0);

        let mut rec = Recorder::default();
        assert!(render_frame(&board, &mut rec));
        assert!(render_frame(&board, &mut rec));
        assert_eq!(rec.draws, vec![3, 3]);
    }

    #[test]
    fn nothing_drawn_after_clear() {
        let mut board = Board::new(Palette::whiteboard(), Color::BLACK);
        board.on_button_press(1.0, 1.0);
        board.on_clear();

        let mut rec = Recorder::default();
        assert!(!render_frame(&board, &mut rec));
        assert!(rec.draws.is_empty());
    }
}
