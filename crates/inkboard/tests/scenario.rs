use inkboard::canvas::{render_frame, PointCanvas};
use inkboard::{BoardConfig, BoardEvent, Point};
use inkboard_engine::coords::Vec2;
use inkboard_engine::core::AppControl;
use inkboard_engine::paint::Color;

#[derive(Default)]
struct CountingCanvas {
    calls: usize,
}

impl PointCanvas for CountingCanvas {
    fn draw_points(&mut self, _points: &[Point]) {
        self.calls += 1;
    }
}

#[test]
fn press_drag_select_press_clear() {
    let config = BoardConfig::whiteboard();
    let mut board = config.board();
    board.dispatch(BoardEvent::Resize { width: 800.0, height: 600.0 });
    assert_eq!(board.brush(), Color::BLACK);

    board.dispatch(BoardEvent::ButtonPress { x: 0.0, y: 0.0 });
    assert_eq!(board.points().as_slice()[0].position(), Vec2::new(-1.0, 1.0));

    board.dispatch(BoardEvent::CursorMove { x: 800.0, y: 600.0 });
    assert_eq!(board.points().len(), 2);
    assert_eq!(board.points().as_slice()[1].position(), Vec2::new(1.0, -1.0));

    board.dispatch(BoardEvent::ButtonRelease);

    // Key 3 on the whiteboard.
    board.dispatch(BoardEvent::SelectColor(2));
    board.dispatch(BoardEvent::ButtonPress { x: 400.0, y: 300.0 });

    let last = board.points().last().copied().expect("point appended");
    assert_eq!(last.position(), Vec2::new(0.0, 0.0));
    assert_eq!(last.color(), Color::GREEN);
    assert!(board.points().iter().take(2).all(|p| p.color() == Color::BLACK));

    let mut canvas = CountingCanvas::default();
    assert!(render_frame(&board, &mut canvas));

    board.dispatch(BoardEvent::Clear);
    assert_eq!(board.points().len(), 0);
    assert!(!render_frame(&board, &mut canvas));
    assert_eq!(canvas.calls, 1);

    assert_eq!(board.dispatch(BoardEvent::ExitRequest), AppControl::Exit);
}

#[test]
fn paintboard_defaults_to_red() {
    let mut board = BoardConfig::paintboard().board();
    board.dispatch(BoardEvent::ButtonPress { x: 400.0, y: 300.0 });
    assert_eq!(board.points().as_slice()[0].color(), Color::RED);

    // Green is entry 1 here; there is no fourth entry.
    board.dispatch(BoardEvent::SelectColor(1));
    board.dispatch(BoardEvent::SelectColor(3));
    assert_eq!(board.brush(), Color::GREEN);
}

#[test]
fn mapped_points_stay_in_ndc_square() {
    let mut board = BoardConfig::whiteboard().board();
    board.dispatch(BoardEvent::Resize { width: 640.0, height: 480.0 });
    board.dispatch(BoardEvent::ButtonPress { x: 0.0, y: 0.0 });

    for i in 0..=32 {
        let t = i as f32 / 32.0;
        board.dispatch(BoardEvent::CursorMove { x: 640.0 * t, y: 480.0 * (1.0 - t) });
    }

    assert_eq!(board.points().len(), 34);
    for p in board.points() {
        let Vec2 { x, y } = p.position();
        assert!((-1.0..=1.0).contains(&x) && (-1.0..=1.0).contains(&y), "{x}, {y}");
    }
}
