//! Board state: the recorded points plus brush, pointer and viewport.

use bytemuck::{Pod, Zeroable};

use inkboard_engine::coords::{Vec2, Viewport};
use inkboard_engine::paint::Color;
use inkboard_engine::render::PointVertex;

use crate::palette::Palette;

/// One recorded dot: NDC position and RGB color, fixed at creation.
///
/// Shares the GPU vertex layout so a point list uploads without conversion.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Point(PointVertex);

impl Point {
    /// Creates a point. Position is clamped into `[-1, 1]` and color into
    /// `[0, 1]` per channel.
    pub fn new(position: Vec2, color: Color) -> Self {
        let position = Vec2::new(position.x.clamp(-1.0, 1.0), position.y.clamp(-1.0, 1.0));
        Self(PointVertex::new(position, color.clamped()))
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        let [x, y] = self.0.position;
        Vec2::new(x, y)
    }

    #[inline]
    pub fn color(&self) -> Color {
        let [r, g, b] = self.0.color;
        Color::rgb(r, g, b)
    }
}

/// Ordered, append-only list of points. Insertion order is draw order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointList {
    points: Vec<Point>,
}

impl PointList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Empties the list. Capacity is kept for the next stroke.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// The points as GPU vertices.
    pub fn as_vertices(&self) -> &[PointVertex] {
        bytemuck::cast_slice(&self.points)
    }
}

impl<'a> IntoIterator for &'a PointList {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Everything a running board owns.
///
/// Mutated only through the handlers in [`crate::translate`].
#[derive(Debug, Clone)]
pub struct Board {
    pub(crate) points: PointList,
    pub(crate) brush: Color,
    pub(crate) palette: Palette,
    pub(crate) pointer_held: bool,
    pub(crate) viewport: Viewport,
}

impl Board {
    /// Creates an empty board with `brush` as the current color and the
    /// default 800x600 viewport.
    pub fn new(palette: Palette, brush: Color) -> Self {
        Self {
            points: PointList::new(),
            brush: brush.clamped(),
            palette,
            pointer_held: false,
            viewport: Viewport::default(),
        }
    }

    #[inline]
    pub fn points(&self) -> &PointList {
        &self.points
    }

    #[inline]
    pub fn brush(&self) -> Color {
        self.brush
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn is_pointer_held(&self) -> bool {
        self.pointer_held
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Stamps a point at window position `(x, y)` with the current brush.
    pub(crate) fn stamp(&mut self, x: f32, y: f32) {
        let ndc = self.viewport.screen_to_ndc(Vec2::new(x, y));
        self.points.append(Point::new(ndc, self.brush));
        log::trace!("point #{} at ({:.3}, {:.3})", self.points.len(), ndc.x, ndc.y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_is_a_vertex() {
        assert_eq!(std::mem::size_of::<Point>(), std::mem::size_of::<PointVertex>());
    }

    #[test]
    fn point_round_trips_fields() {
        let p = Point::new(Vec2::new(0.25, -0.5), Color::BLUE);
        assert_eq!(p.position(), Vec2::new(0.25, -0.5));
        assert_eq!(p.color(), Color::BLUE);
    }

    #[test]
    fn point_clamps_out_of_range_input() {
        let p = Point::new(Vec2::new(3.0, -7.0), Color::rgb(2.0, -1.0, 0.5));
        assert_eq!(p.position(), Vec2::new(1.0, -1.0));
        assert_eq!(p.color(), Color::rgb(1.0, 0.0, 0.5));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let mut list = PointList::new();
        list.append(Point::new(Vec2::new(0.1, 0.1), Color::RED));
        list.append(Point::new(Vec2::new(0.2, 0.2), Color::GREEN));
        list.append(Point::new(Vec2::new(0.3, 0.3), Color::BLUE));

        let colors: Vec<_> = list.iter().map(Point::color).collect();
        assert_eq!(colors, vec![Color::RED, Color::GREEN, Color::BLUE]);
        assert_eq!(list.last().map(Point::position), Some(Vec2::new(0.3, 0.3)));
    }

    #[test]
    fn vertices_view_matches_points() {
        let mut list = PointList::new();
        list.append(Point::new(Vec2::new(-1.0, 1.0), Color::GREEN));

        let v = list.as_vertices();
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].position, [-1.0, 1.0]);
        assert_eq!(v[0].color, [0.0, 1.0, 0.0]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut list = PointList::new();
        list.clear();
        assert!(list.is_empty());

        list.append(Point::new(Vec2::zero(), Color::BLACK));
        list.clear();
        list.clear();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn new_board_is_idle() {
        let board = Board::new(Palette::whiteboard(), Color::BLACK);
        assert!(board.points().is_empty());
        assert!(!board.is_pointer_held());
        assert_eq!(board.brush(), Color::BLACK);
        assert_eq!(board.viewport(), Viewport::new(800.0, 600.0));
    }
}
